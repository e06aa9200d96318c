//! Process palette regression test
//!
//! Exercises the full flow an application goes through: read the table
//! at startup, install it as the process palette, then answer queries
//! through a matcher built from the installed handle.

use colorname::loaded_palette::{self, SlotError};
use colorname::{ColorMatcher, MatcherOptions, Palette, PaletteRow, Rgb, io};
use colorname_test::{RegParams, test_data_path};

#[test]
fn loaded_palette_reg() {
    let mut rp = RegParams::new("loaded_palette");

    // --- Test 1: nothing installed yet ---
    rp.compare_values(0.0, if loaded_palette::get().is_some() { 1.0 } else { 0.0 }, 0.0);

    // --- Test 2: install once ---
    let palette = io::read_palette(test_data_path("colors.csv")).unwrap();
    let installed = loaded_palette::init(palette).unwrap();
    let fetched = loaded_palette::get().unwrap();
    rp.compare_values(1.0, if fetched.ptr_eq(&installed) { 1.0 } else { 0.0 }, 0.0);

    // --- Test 3: second install is refused, original kept ---
    let other = Palette::load(vec![PaletteRow::new("only", 1, 2, 3)]).unwrap();
    let err = loaded_palette::init(other).unwrap_err();
    rp.compare_values(1.0, if err == SlotError::AlreadyInitialized { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(50.0, loaded_palette::get().unwrap().len() as f64, 0.0);

    // --- Test 4: queries through the installed handle ---
    let matcher = ColorMatcher::new(fetched, &MatcherOptions::default()).unwrap();
    let query: Rgb = "(2, 3, 1)".parse().unwrap();
    let report = matcher.report(query).unwrap();
    rp.compare_strings(b"Black", report.name.as_bytes());
    rp.compare_values(14f64.sqrt(), report.distance, 1e-12);

    let query: Rgb = "#fe6347".parse().unwrap();
    let report = matcher.report(query).unwrap();
    rp.compare_strings(b"Tomato", report.name.as_bytes());
    rp.compare_values(1.0, report.distance, 0.0);

    // --- Test 5: independent palettes do not see the global one ---
    let local = Palette::load(vec![PaletteRow::new("only", 1, 2, 3)])
        .unwrap()
        .into_handle();
    let local_matcher = ColorMatcher::new(local, &MatcherOptions::default()).unwrap();
    let report = local_matcher.report(Rgb::BLACK).unwrap();
    rp.compare_strings(b"only", report.name.as_bytes());

    assert!(rp.cleanup());
}
