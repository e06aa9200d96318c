//! CSV palette regression test
//!
//! Reads the shipped test tables and checks that schema and value
//! problems in the file surface as the matching core load errors.

use colorname_core::{Error, Palette, PaletteRow, Rgb};
use colorname_io::{
    IoError, read_palette, read_palette_from_bytes, read_palette_rows, write_palette_to_string,
};
use colorname_test::{RegParams, load_test_palette, test_data_path};

#[test]
fn csv_reg() {
    let mut rp = RegParams::new("csv");

    // --- Test 1: reference table, extra hex column ignored ---
    let palette = load_test_palette("colors.csv").unwrap();
    rp.compare_values(50.0, palette.len() as f64, 0.0);
    let (idx, raf) = palette.find_by_name("Air Force Blue (Raf)").unwrap();
    rp.compare_values(16.0, idx as f64, 0.0);
    rp.compare_values(93.0, raf.r() as f64, 0.0);
    rp.compare_values(138.0, raf.g() as f64, 0.0);
    rp.compare_values(168.0, raf.b() as f64, 0.0);

    // --- Test 2: header without blue column ---
    let err = read_palette(test_data_path("missing_blue.csv")).unwrap_err();
    let ok = matches!(
        err,
        IoError::Core(Error::MissingColumn { row: 0, field: "blue" })
    );
    rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);

    // --- Test 3: component out of range, reported at its row ---
    let err = read_palette(test_data_path("out_of_range.csv")).unwrap_err();
    let ok = matches!(
        err,
        IoError::Core(Error::OutOfRangeValue { row: 1, field: "red", value: 256 })
    );
    rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);

    // --- Test 4: header with no data rows ---
    let err = read_palette(test_data_path("header_only.csv")).unwrap_err();
    let ok = matches!(err, IoError::Core(Error::EmptySource));
    rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);

    // --- Test 5: missing file ---
    let err = read_palette(test_data_path("does_not_exist.csv")).unwrap_err();
    let ok = matches!(err, IoError::Io(_));
    rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);

    // --- Test 6: reader input ---
    let mut src: &[u8] = b"name,red,green,blue\nInk,1,2,3\n";
    let rows = read_palette_rows(&mut src).unwrap();
    rp.compare_values(1.0, rows.len() as f64, 0.0);

    // --- Test 7: write then read back ---
    let original = Palette::load(vec![
        PaletteRow::new("Rust, Dark", 183, 65, 14),
        PaletteRow::new("6\" Ruler", 250, 250, 210),
        PaletteRow::new("Snow", 255, 250, 250),
    ])
    .unwrap();
    let text = write_palette_to_string(&original).unwrap();
    rp.compare_strings(
        b"name,red,green,blue\n\"Rust, Dark\",183,65,14\n\"6\"\" Ruler\",250,250,210\nSnow,255,250,250\n",
        text.as_bytes(),
    );
    let reread = read_palette_from_bytes(text.as_bytes()).unwrap();
    rp.compare_values(1.0, if reread == original { 1.0 } else { 0.0 }, 0.0);

    // --- Test 8: identical colors keep source order ---
    let dups = load_test_palette("duplicates.csv").unwrap();
    let idx = dups.exact_index(Rgb::BLACK).unwrap();
    rp.compare_strings(b"Dark", dups.get(idx).unwrap().name().as_bytes());
    rp.compare_strings(b"Also Dark", dups.get(1).unwrap().name().as_bytes());

    assert!(rp.cleanup());
}
