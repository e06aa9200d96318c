//! ColorMatcher - Resolve query colors to named palette entries
//!
//! The matcher owns one search strategy built over an explicit palette
//! handle. It holds no mutable state, so a single matcher can serve
//! queries from many threads at once.

use crate::error::{MatchError, MatchResult};
use crate::grid::{DEFAULT_CELL_BITS, GridIndex};
use crate::metric::MetricKind;
use crate::search::{ColorMatch, LinearScan, SearchStrategy};
use colorname_core::{Palette, PaletteHandle, ReferenceColor, Rgb};

/// Palette size from which [`SearchKind::Auto`] builds a grid index
pub const AUTO_GRID_THRESHOLD: usize = 1024;

// =============================================================================
// Options
// =============================================================================

/// Which search strategy the matcher builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchKind {
    /// Scan every entry per query
    Linear,
    /// Grid-bucket index with `cell_bits` significant bits per channel
    Grid { cell_bits: u8 },
    /// Linear below [`AUTO_GRID_THRESHOLD`] entries, grid at or above
    #[default]
    Auto,
}

/// Options for building a [`ColorMatcher`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatcherOptions {
    /// Distance metric used to rank entries
    pub metric: MetricKind,
    /// Search strategy
    pub search: SearchKind,
}

impl MatcherOptions {
    pub fn with_metric(mut self, metric: MetricKind) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_search(mut self, search: SearchKind) -> Self {
        self.search = search;
        self
    }
}

// =============================================================================
// Reports
// =============================================================================

/// Match result as handed to a presentation layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchReport {
    pub name: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub distance: f64,
}

impl MatchReport {
    fn new(color: &ReferenceColor, m: &ColorMatch) -> Self {
        Self {
            name: color.name().to_string(),
            r: color.r(),
            g: color.g(),
            b: color.b(),
            distance: m.distance(),
        }
    }
}

// =============================================================================
// Matcher
// =============================================================================

/// Nearest-color resolver over one palette.
pub struct ColorMatcher {
    strategy: Box<dyn SearchStrategy>,
}

impl std::fmt::Debug for ColorMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorMatcher")
            .field("strategy", &self.strategy.name())
            .field("palette_len", &self.strategy.palette().len())
            .finish()
    }
}

impl ColorMatcher {
    /// Build a matcher for `palette` as described by `options`.
    ///
    /// # Errors
    ///
    /// [`MatchError::InvalidParameters`] for an unsupported grid resolution.
    pub fn new(palette: PaletteHandle, options: &MatcherOptions) -> MatchResult<Self> {
        let search = match options.search {
            SearchKind::Auto if palette.len() >= AUTO_GRID_THRESHOLD => SearchKind::Grid {
                cell_bits: DEFAULT_CELL_BITS,
            },
            SearchKind::Auto => SearchKind::Linear,
            other => other,
        };

        let strategy: Box<dyn SearchStrategy> = match search {
            SearchKind::Grid { cell_bits } => Box::new(GridIndex::with_metric(
                palette,
                options.metric,
                cell_bits,
            )?),
            _ => Box::new(LinearScan::with_metric(palette, options.metric)),
        };
        log::debug!(
            "color matcher: {} search over {} colors, {:?} metric",
            strategy.name(),
            strategy.palette().len(),
            options.metric
        );
        Ok(Self { strategy })
    }

    /// Build a matcher around a ready-made strategy.
    pub fn with_strategy(strategy: impl SearchStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// The palette being searched
    pub fn palette(&self) -> &Palette {
        self.strategy.palette()
    }

    /// Label of the active search strategy
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Find the nearest palette entry to `query`.
    pub fn nearest(&self, query: Rgb) -> MatchResult<ColorMatch> {
        let m = self.strategy.nearest(query)?;
        log::trace!("{query} -> #{} (d^2 = {})", m.index, m.distance_sq);
        Ok(m)
    }

    /// Resolve several queries; fails on the first error.
    pub fn nearest_batch(&self, queries: &[Rgb]) -> MatchResult<Vec<ColorMatch>> {
        queries.iter().map(|&q| self.nearest(q)).collect()
    }

    /// Look up the palette entry a match refers to.
    pub fn resolve(&self, m: &ColorMatch) -> MatchResult<&ReferenceColor> {
        Ok(self.palette().get(m.index)?)
    }

    /// Nearest entry to `query`, resolved into a presentable report.
    pub fn report(&self, query: Rgb) -> MatchResult<MatchReport> {
        let m = self.nearest(query)?;
        let color = self.resolve(&m)?;
        Ok(MatchReport::new(color, &m))
    }
}
