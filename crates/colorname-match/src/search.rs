//! Search strategies
//!
//! A [`SearchStrategy`] answers "which palette entry is nearest to this
//! query" for one palette and one metric. All strategies share the same
//! contract: the winner is the entry with the smallest squared distance,
//! and among equidistant entries the one with the smallest palette index.
//! Strategies differ only in how much of the palette they look at.

use crate::error::{MatchError, MatchResult};
use crate::metric::{Euclidean, Metric};
use colorname_core::{Palette, PaletteHandle, ReferenceColor, Rgb};

/// Outcome of a nearest-color search.
///
/// Refers to the matched entry by index into the palette it was searched
/// in; use [`ColorMatcher::resolve`](crate::ColorMatcher::resolve) or
/// [`Palette::get`] to reach the entry itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorMatch {
    /// Index of the matched entry in the palette
    pub index: usize,
    /// Exact squared distance under the metric used
    pub distance_sq: u64,
}

impl ColorMatch {
    /// Real-valued distance, `sqrt(distance_sq)`
    #[inline]
    pub fn distance(&self) -> f64 {
        (self.distance_sq as f64).sqrt()
    }

    /// Whether `(distance_sq, index)` of `self` orders before `other`.
    #[inline]
    pub(crate) fn beats(&self, other: &ColorMatch) -> bool {
        (self.distance_sq, self.index) < (other.distance_sq, other.index)
    }
}

/// Capability interface for nearest-color search over one palette.
pub trait SearchStrategy: Send + Sync {
    /// Find the nearest entry to `query`.
    fn nearest(&self, query: Rgb) -> MatchResult<ColorMatch>;

    /// The palette being searched
    fn palette(&self) -> &PaletteHandle;

    /// Short label for diagnostics
    fn name(&self) -> &'static str;
}

/// Scan `colors` in order and return the nearest entry.
///
/// Only a strictly smaller distance replaces the current best, so the
/// first-seen entry wins ties.
///
/// # Errors
///
/// [`MatchError::EmptyPalette`] if `colors` is empty.
pub fn nearest_in<M: Metric + ?Sized>(
    query: Rgb,
    colors: &[ReferenceColor],
    metric: &M,
) -> MatchResult<ColorMatch> {
    let mut best: Option<ColorMatch> = None;
    for (index, color) in colors.iter().enumerate() {
        let distance_sq = metric.distance_sq(query, color.rgb());
        if best.is_none_or(|b| distance_sq < b.distance_sq) {
            best = Some(ColorMatch { index, distance_sq });
            if distance_sq == 0 {
                break;
            }
        }
    }
    best.ok_or(MatchError::EmptyPalette)
}

/// Nearest entry of `palette` to `query` under the plain Euclidean metric.
pub fn nearest(query: Rgb, palette: &Palette) -> MatchResult<ColorMatch> {
    nearest_in(query, palette.colors(), &Euclidean)
}

/// O(n) scan of the whole palette per query.
#[derive(Debug, Clone)]
pub struct LinearScan<M = Euclidean> {
    palette: PaletteHandle,
    metric: M,
}

impl LinearScan<Euclidean> {
    pub fn new(palette: PaletteHandle) -> Self {
        Self::with_metric(palette, Euclidean)
    }
}

impl<M: Metric> LinearScan<M> {
    pub fn with_metric(palette: PaletteHandle, metric: M) -> Self {
        Self { palette, metric }
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }
}

impl<M: Metric> SearchStrategy for LinearScan<M> {
    fn nearest(&self, query: Rgb) -> MatchResult<ColorMatch> {
        nearest_in(query, self.palette.colors(), &self.metric)
    }

    fn palette(&self) -> &PaletteHandle {
        &self.palette
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}
