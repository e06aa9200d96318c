//! colorname-test - Regression test framework for colorname
//!
//! Each regression test creates a [`RegParams`], runs a numbered series
//! of comparisons, and asserts on [`RegParams::cleanup`] at the end.
//! Failures are collected rather than panicking at the first mismatch,
//! so one run reports every broken check.
//!
//! # Usage
//!
//! ```ignore
//! use colorname_test::RegParams;
//!
//! let mut rp = RegParams::new("matcher");
//! rp.compare_values(0.0, result.distance(), 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use colorname_core::{Palette, PaletteRow};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // colorname-test is at crates/colorname-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test palette file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/palettes/{}", workspace_root(), name)
}

/// Read the raw rows of a test palette (e.g., "colors.csv")
pub fn load_test_palette_rows(name: &str) -> TestResult<Vec<PaletteRow>> {
    let path = test_data_path(name);
    let data = std::fs::read(&path)?;
    colorname_io::read_palette_rows_from_bytes(&data).map_err(|e| TestError::PaletteLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Load and validate a test palette
pub fn load_test_palette(name: &str) -> TestResult<Palette> {
    let path = test_data_path(name);
    colorname_io::read_palette(&path).map_err(|e| TestError::PaletteLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}
