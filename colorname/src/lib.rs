//! colorname - Name the closest known color to an RGB sample
//!
//! A pixel sampler hands over an (R, G, B) triplet; this library answers
//! with the nearest entry of a named reference palette.
//!
//! # Overview
//!
//! - Palette loading and validation ([`Palette::load`], [`io`])
//! - Nearest-color search with deterministic tie-breaking ([`ColorMatcher`])
//! - Pluggable metrics and search strategies ([`matching`])
//! - A set-once process palette slot ([`loaded_palette`])
//!
//! # Example
//!
//! ```
//! use colorname::{ColorMatcher, MatcherOptions, Palette, PaletteRow, Rgb};
//!
//! let palette = Palette::load(vec![
//!     PaletteRow::new("black", 0, 0, 0),
//!     PaletteRow::new("white", 255, 255, 255),
//! ])
//! .unwrap();
//! let matcher = ColorMatcher::new(palette.into_handle(), &MatcherOptions::default()).unwrap();
//!
//! let report = matcher.report(Rgb::new(200, 200, 200)).unwrap();
//! assert_eq!(report.name, "white");
//! ```

pub mod loaded_palette;

// Re-export core types (primary data structures used everywhere)
pub use colorname_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use colorname_io as io;
pub use colorname_match as matching;

pub use colorname_match::{ColorMatch, ColorMatcher, MatchError, MatchReport, MatcherOptions};
