//! colorname-io - Palette table I/O
//!
//! The palette loader collaborator: reads a reference table from text,
//! bytes, a reader, or a file, splits it into [`PaletteRow`]s, and hands
//! them to [`Palette::load`] for validation. The core crate itself never
//! touches the filesystem.
//!
//! [`PaletteRow`]: colorname_core::PaletteRow
//! [`Palette::load`]: colorname_core::Palette::load

pub mod csv;
pub mod error;

pub use csv::{
    read_palette, read_palette_from_bytes, read_palette_from_reader, read_palette_rows,
    read_palette_rows_from_bytes, read_palette_rows_from_str, write_palette,
    write_palette_to_string,
};
pub use error::{IoError, IoResult};
