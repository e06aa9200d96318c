//! colorname Match - Nearest-color resolution
//!
//! Given a query color and a palette, find the closest named entry:
//!
//! - **Metrics** ([`metric`]): plain and weighted Euclidean distance over
//!   the RGB cube, compared as exact integer squared distances
//! - **Search** ([`search`]): the [`SearchStrategy`] capability and the
//!   default linear scan
//! - **Grid index** ([`grid`]): bucketed search for large palettes,
//!   result-identical to the linear scan
//! - **Matcher** ([`matcher`]): [`ColorMatcher`], built from an explicit
//!   palette handle and [`MatcherOptions`]
//!
//! Ties between equidistant entries always go to the smallest palette
//! index, i.e. the entry seen first in the source table.

pub mod error;
pub mod grid;
pub mod matcher;
pub mod metric;
pub mod search;

// Re-export core types
pub use colorname_core;

pub use error::{MatchError, MatchResult};

pub use grid::{DEFAULT_CELL_BITS, GridIndex, MAX_CELL_BITS};
pub use matcher::{AUTO_GRID_THRESHOLD, ColorMatcher, MatchReport, MatcherOptions, SearchKind};
pub use metric::{Euclidean, Metric, MetricKind, WeightedEuclidean};
pub use search::{ColorMatch, LinearScan, SearchStrategy, nearest, nearest_in};
