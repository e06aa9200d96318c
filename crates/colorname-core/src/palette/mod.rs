//! Palette - The validated set of named reference colors
//!
//! A palette is built once from the rows of a reference table and is
//! read-only afterwards. There is no mutation API: every `Palette` that
//! exists has passed validation, is non-empty, and keeps its entries in
//! source order. That order is what breaks ties between equidistant
//! entries downstream, so it must never be disturbed.

mod query;
mod row;

pub use row::{FieldValue, PaletteRow};

use crate::error::{Error, Result};
use crate::rgb::Rgb;
use std::sync::Arc;

/// A named reference color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceColor {
    name: String,
    rgb: Rgb,
}

impl ReferenceColor {
    pub(crate) fn new(name: String, rgb: Rgb) -> Self {
        Self { name, rgb }
    }

    /// Human-readable label
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    #[inline]
    pub fn r(&self) -> u8 {
        self.rgb.r
    }

    #[inline]
    pub fn g(&self) -> u8 {
        self.rgb.g
    }

    #[inline]
    pub fn b(&self) -> u8 {
        self.rgb.b
    }
}

/// Ordered, non-empty, immutable collection of reference colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<ReferenceColor>,
}

impl Palette {
    /// Build a palette from source rows.
    ///
    /// Fails on the first invalid row; a palette is either complete or
    /// not built at all.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptySource`] if `rows` yields nothing
    /// - [`Error::MissingColumn`] if a row lacks one of the four fields
    /// - [`Error::MalformedRow`] for a non-integer component or blank name
    /// - [`Error::OutOfRangeValue`] for a component outside [0, 255]
    pub fn load<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = PaletteRow>,
    {
        let colors = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| row.validate(i))
            .collect::<Result<Vec<_>>>()?;

        if colors.is_empty() {
            return Err(Error::EmptySource);
        }

        let palette = Self { colors };
        log::debug!("loaded palette with {} colors", palette.len());
        let dups = palette.duplicate_names();
        if !dups.is_empty() {
            log::warn!(
                "palette has {} duplicated names; first-seen entries win ties",
                dups.len()
            );
        }
        Ok(palette)
    }

    /// Get the entry at `index`.
    pub fn get(&self, index: usize) -> Result<&ReferenceColor> {
        self.colors.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.colors.len(),
        })
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: an empty palette cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All entries in source order
    #[inline]
    pub fn colors(&self) -> &[ReferenceColor] {
        &self.colors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceColor> {
        self.colors.iter()
    }

    /// Wrap the palette in a shareable handle.
    pub fn into_handle(self) -> PaletteHandle {
        PaletteHandle(Arc::new(self))
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ReferenceColor;
    type IntoIter = std::slice::Iter<'a, ReferenceColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Cheap, cloneable, thread-safe handle to a loaded palette.
///
/// Matchers hold one of these instead of reaching for any global, so
/// independent palettes can coexist (one per test, for instance).
#[derive(Debug, Clone)]
pub struct PaletteHandle(Arc<Palette>);

impl PaletteHandle {
    /// Whether two handles refer to the same loaded palette
    pub fn ptr_eq(&self, other: &PaletteHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for PaletteHandle {
    type Target = Palette;

    fn deref(&self) -> &Palette {
        &self.0
    }
}

impl From<Palette> for PaletteHandle {
    fn from(palette: Palette) -> Self {
        palette.into_handle()
    }
}
