//! Distance metrics over the RGB cube
//!
//! Every metric exposes an exact integer squared distance, which is what
//! the search strategies compare. The real-valued distance is only the
//! square root of that, computed for reporting. Comparing integers keeps
//! tie-breaking free of floating-point rounding.

use colorname_core::Rgb;

/// A distance function between two colors.
///
/// Implementations must be monotone in each per-channel absolute
/// difference: moving a color closer to the query on one axis, with the
/// others fixed, never increases the distance. The grid search relies on
/// this for its pruning bounds.
pub trait Metric: Send + Sync {
    /// Exact squared distance
    fn distance_sq(&self, a: Rgb, b: Rgb) -> u64;

    /// Real-valued distance, `sqrt(distance_sq)`
    fn distance(&self, a: Rgb, b: Rgb) -> f64 {
        (self.distance_sq(a, b) as f64).sqrt()
    }

    /// Lower bound on `distance_sq` from `query` to any color inside the
    /// box spanned by `lo` and `hi` (inclusive on every channel).
    fn lower_bound_sq(&self, query: Rgb, lo: Rgb, hi: Rgb) -> u64 {
        let nearest = Rgb::new(
            query.r.clamp(lo.r, hi.r),
            query.g.clamp(lo.g, hi.g),
            query.b.clamp(lo.b, hi.b),
        );
        self.distance_sq(query, nearest)
    }
}

/// Squared difference of two channel values
#[inline]
fn diff_sq(a: u8, b: u8) -> u64 {
    let d = i32::from(a) - i32::from(b);
    (d * d) as u64
}

/// Plain Euclidean distance in the RGB cube.
///
/// `distance(q, c) = sqrt((q.r-c.r)^2 + (q.g-c.g)^2 + (q.b-c.b)^2)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Euclidean;

impl Metric for Euclidean {
    #[inline]
    fn distance_sq(&self, a: Rgb, b: Rgb) -> u64 {
        diff_sq(a.r, b.r) + diff_sq(a.g, b.g) + diff_sq(a.b, b.b)
    }
}

/// Euclidean distance with integer per-channel weights.
///
/// `distance_sq = r*dr^2 + g*dg^2 + b*db^2`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEuclidean {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

impl WeightedEuclidean {
    /// Cheap perceptual approximation: green counts most, red least.
    pub const LUMA: WeightedEuclidean = WeightedEuclidean { r: 2, g: 4, b: 3 };

    pub const fn new(r: u32, g: u32, b: u32) -> Self {
        Self { r, g, b }
    }
}

impl Default for WeightedEuclidean {
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}

impl Metric for WeightedEuclidean {
    #[inline]
    fn distance_sq(&self, a: Rgb, b: Rgb) -> u64 {
        u64::from(self.r) * diff_sq(a.r, b.r)
            + u64::from(self.g) * diff_sq(a.g, b.g)
            + u64::from(self.b) * diff_sq(a.b, b.b)
    }
}

/// Runtime-selectable metric, used by [`MatcherOptions`](crate::MatcherOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetricKind {
    #[default]
    Euclidean,
    Weighted(WeightedEuclidean),
}

impl Metric for MetricKind {
    #[inline]
    fn distance_sq(&self, a: Rgb, b: Rgb) -> u64 {
        match self {
            MetricKind::Euclidean => Euclidean.distance_sq(a, b),
            MetricKind::Weighted(w) => w.distance_sq(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_values() {
        assert_eq!(Euclidean.distance_sq(Rgb::BLACK, Rgb::BLACK), 0);
        assert_eq!(Euclidean.distance_sq(Rgb::BLACK, Rgb::WHITE), 3 * 255 * 255);
        assert_eq!(
            Euclidean.distance_sq(Rgb::new(10, 20, 30), Rgb::new(13, 24, 30)),
            25
        );
        assert_eq!(Euclidean.distance(Rgb::new(10, 20, 30), Rgb::new(13, 24, 30)), 5.0);
    }

    #[test]
    fn test_euclidean_symmetric() {
        let a = Rgb::new(200, 3, 77);
        let b = Rgb::new(1, 250, 128);
        assert_eq!(Euclidean.distance_sq(a, b), Euclidean.distance_sq(b, a));
    }

    #[test]
    fn test_weighted() {
        let w = WeightedEuclidean::LUMA;
        assert_eq!(w.distance_sq(Rgb::BLACK, Rgb::new(1, 1, 1)), 9);
        assert_eq!(w.distance_sq(Rgb::BLACK, Rgb::new(0, 2, 0)), 16);
        assert_eq!(
            WeightedEuclidean::default().distance_sq(Rgb::BLACK, Rgb::WHITE),
            Euclidean.distance_sq(Rgb::BLACK, Rgb::WHITE)
        );
    }

    #[test]
    fn test_metric_kind_dispatch() {
        let a = Rgb::new(5, 6, 7);
        let b = Rgb::new(9, 0, 7);
        assert_eq!(MetricKind::Euclidean.distance_sq(a, b), 16 + 36);
        assert_eq!(
            MetricKind::Weighted(WeightedEuclidean::LUMA).distance_sq(a, b),
            2 * 16 + 4 * 36
        );
    }

    #[test]
    fn test_lower_bound_inside_and_outside() {
        let lo = Rgb::new(16, 16, 16);
        let hi = Rgb::new(31, 31, 31);
        assert_eq!(Euclidean.lower_bound_sq(Rgb::new(20, 20, 20), lo, hi), 0);
        assert_eq!(Euclidean.lower_bound_sq(Rgb::new(10, 20, 40), lo, hi), 36 + 81);
    }
}
