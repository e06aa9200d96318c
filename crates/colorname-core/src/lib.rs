//! colorname Core - Basic data structures for nearest-color naming
//!
//! This crate provides the data structures shared by the rest of the
//! workspace:
//!
//! - [`Rgb`] - A point in the 8-bit RGB cube (queries and palette colors)
//! - [`ReferenceColor`] - A named palette entry
//! - [`PaletteRow`] / [`FieldValue`] - Raw rows as delivered by a loader
//! - [`Palette`] - The validated, immutable, ordered palette
//! - [`PaletteHandle`] - Shared read-only handle to a loaded palette
//!
//! Loading performs no I/O: a collaborator reads the source table and
//! hands over already-split rows.

pub mod error;
pub mod palette;
pub mod rgb;

pub use error::{Error, Result};
pub use palette::{FieldValue, Palette, PaletteHandle, PaletteRow, ReferenceColor};
pub use rgb::Rgb;
