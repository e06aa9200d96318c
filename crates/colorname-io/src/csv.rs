//! CSV palette tables
//!
//! # Format
//!
//! ```text
//! name,red,green,blue
//! Black,0,0,0
//! "Air Force Blue (Raf)",93,138,168
//! ...
//! ```
//!
//! The header row is required. Columns are matched by name (trimmed,
//! case-insensitive) and may appear in any order; extra columns such as
//! `hex` are ignored. A required column missing from the header leaves
//! that field unset on every row, which the core reports as
//! `MissingColumn`. Fields may be double-quoted, with `""` standing for a
//! literal quote. Blank lines are skipped.

use crate::error::{IoError, IoResult};
use colorname_core::{FieldValue, Palette, PaletteRow};
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// Maximum input size in bytes.
const MAX_INPUT_SIZE: usize = 100_000_000;

/// Header names of the four required columns.
const COLUMNS: [&str; 4] = ["name", "red", "green", "blue"];

/// Split CSV text into palette rows.
pub fn read_palette_rows_from_str(text: &str) -> IoResult<Vec<PaletteRow>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut records = split_records(text)?.into_iter();

    let Some(header) = records.next() else {
        return Ok(Vec::new());
    };
    let columns = resolve_columns(&header);

    let rows: Vec<PaletteRow> = records
        .map(|mut record| {
            let mut take = |col: Option<usize>| {
                col.and_then(|i| record.get_mut(i).map(std::mem::take))
            };
            PaletteRow {
                name: take(columns[0]),
                red: take(columns[1]).map(FieldValue::Text),
                green: take(columns[2]).map(FieldValue::Text),
                blue: take(columns[3]).map(FieldValue::Text),
            }
        })
        .collect();

    log::debug!("read {} palette rows", rows.len());
    Ok(rows)
}

/// Split CSV bytes into palette rows.
pub fn read_palette_rows_from_bytes(data: &[u8]) -> IoResult<Vec<PaletteRow>> {
    let text = std::str::from_utf8(data)
        .map_err(|e| IoError::InvalidData(format!("invalid UTF-8: {e}")))?;
    read_palette_rows_from_str(text)
}

/// Read palette rows from a reader.
pub fn read_palette_rows(reader: &mut impl Read) -> IoResult<Vec<PaletteRow>> {
    let buf = read_limited(reader)?;
    read_palette_rows_from_bytes(&buf)
}

/// Read and validate a palette from a reader.
pub fn read_palette_from_reader(reader: &mut impl Read) -> IoResult<Palette> {
    Ok(Palette::load(read_palette_rows(reader)?)?)
}

/// Read and validate a palette from CSV bytes.
pub fn read_palette_from_bytes(data: &[u8]) -> IoResult<Palette> {
    Ok(Palette::load(read_palette_rows_from_bytes(data)?)?)
}

/// Read and validate a palette from a file.
pub fn read_palette(path: impl AsRef<Path>) -> IoResult<Palette> {
    let file = std::fs::File::open(path.as_ref())?;
    read_palette_from_reader(&mut BufReader::new(file))
}

/// Write a palette as CSV with a `name,red,green,blue` header.
pub fn write_palette(palette: &Palette, writer: &mut impl Write) -> IoResult<()> {
    writeln!(writer, "{}", COLUMNS.join(","))?;
    for color in palette {
        writeln!(
            writer,
            "{},{},{},{}",
            quote_field(color.name()),
            color.r(),
            color.g(),
            color.b()
        )?;
    }
    Ok(())
}

/// Write a palette as a CSV string.
pub fn write_palette_to_string(palette: &Palette) -> IoResult<String> {
    let mut buf = Vec::new();
    write_palette(palette, &mut buf)?;
    String::from_utf8(buf).map_err(|e| IoError::InvalidData(e.to_string()))
}

// ============================================================================
// Internal helpers
// ============================================================================

/// Read from a reader with a size limit.
fn read_limited(reader: &mut impl Read) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    reader
        .take((MAX_INPUT_SIZE + 1) as u64)
        .read_to_end(&mut buf)?;
    if buf.len() > MAX_INPUT_SIZE {
        return Err(IoError::InvalidData(format!(
            "input too large: exceeds maximum allowed size of {MAX_INPUT_SIZE} bytes"
        )));
    }
    Ok(buf)
}

/// Map each required column to its position in the header.
fn resolve_columns(header: &[String]) -> [Option<usize>; 4] {
    COLUMNS.map(|wanted| {
        header
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(wanted))
    })
}

/// Quote a field if it would not survive a round trip unquoted.
fn quote_field(field: &str) -> String {
    let needs_quotes = field.contains([',', '"', '\n', '\r']) || field.trim() != field;
    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Split text into records of fields, honoring double quotes.
///
/// Blank lines produce no record. A quote may only open a field or close
/// a quoted one; anything else is a decode error, reported with its
/// 1-based line number.
fn split_records(text: &str) -> IoResult<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    // The current field was quoted and its closing quote has been seen
    let mut closed = false;
    let mut line = 1usize;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => {
                    in_quotes = false;
                    closed = true;
                }
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            ',' => {
                record.push(std::mem::take(&mut field));
                closed = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                closed = false;
                push_record(&mut records, std::mem::take(&mut record));
                line += 1;
            }
            '"' if field.is_empty() && !closed => in_quotes = true,
            '"' => {
                return Err(IoError::DecodeError(format!(
                    "line {line}: unexpected quote inside field"
                )));
            }
            _ if closed => {
                return Err(IoError::DecodeError(format!(
                    "line {line}: unexpected character {c:?} after closing quote"
                )));
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(IoError::DecodeError(format!(
            "line {line}: unterminated quoted field"
        )));
    }
    if !field.is_empty() || closed || !record.is_empty() {
        record.push(field);
        push_record(&mut records, record);
    }
    Ok(records)
}

/// Keep a record unless it is a blank line.
fn push_record(records: &mut Vec<Vec<String>>, record: Vec<String>) {
    let blank = record.len() == 1 && record[0].trim().is_empty();
    if !blank {
        records.push(record);
    }
}
