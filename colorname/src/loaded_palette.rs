//! Process-wide loaded palette
//!
//! The application loads its reference palette once at startup and keeps
//! it for the lifetime of the process. This slot holds that palette. It
//! can be set exactly once and is never mutated afterwards.
//!
//! Nothing in the library reads this slot implicitly: matchers are always
//! built from an explicit [`PaletteHandle`], which is what tests use to
//! keep independent palettes apart.

use colorname_core::{Palette, PaletteHandle};
use std::sync::OnceLock;
use thiserror::Error;

static LOADED_PALETTE: OnceLock<PaletteHandle> = OnceLock::new();

/// Errors from the process-wide palette slot
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// `init` was called after the palette had already been set
    #[error("the process palette has already been initialized")]
    AlreadyInitialized,
}

/// Install `palette` as the process palette and return a handle to it.
///
/// # Errors
///
/// [`SlotError::AlreadyInitialized`] if a palette was installed before;
/// the existing palette is left untouched.
pub fn init(palette: Palette) -> Result<PaletteHandle, SlotError> {
    let handle = palette.into_handle();
    LOADED_PALETTE
        .set(handle.clone())
        .map_err(|_| SlotError::AlreadyInitialized)?;
    log::debug!("process palette initialized with {} colors", handle.len());
    Ok(handle)
}

/// Handle to the process palette, if one has been installed.
pub fn get() -> Option<PaletteHandle> {
    LOADED_PALETTE.get().cloned()
}
