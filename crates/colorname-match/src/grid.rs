//! Grid-bucket spatial index over the RGB cube
//!
//! The cube is cut into `2^bits` slices per channel, using the `bits`
//! most significant bits of each component as the cell coordinate, the
//! same way octcube quantization buckets colors. Each cell lists the
//! palette indices falling in it, in ascending order.
//!
//! A query visits cells in rings of growing Chebyshev radius around its
//! own cell. Before each ring, a lower bound on the distance to anything
//! not yet visited is computed; once that bound is strictly greater than
//! the best distance found, no unvisited entry can win or tie, and the
//! search stops. Results are identical to [`LinearScan`](crate::LinearScan)
//! for every query, including tie-breaking by smallest index.

use crate::error::{MatchError, MatchResult};
use crate::metric::{Euclidean, Metric};
use crate::search::{ColorMatch, SearchStrategy};
use colorname_core::{PaletteHandle, Rgb};

/// Default number of significant bits per channel (16 cells per axis)
pub const DEFAULT_CELL_BITS: u8 = 4;

/// Largest supported bits per channel (64 cells per axis)
pub const MAX_CELL_BITS: u8 = 6;

/// Grid-bucket nearest-color index.
#[derive(Debug, Clone)]
pub struct GridIndex<M = Euclidean> {
    palette: PaletteHandle,
    metric: M,
    bits: u8,
    /// Cells per axis
    side: i32,
    cells: Vec<Vec<u32>>,
}

impl GridIndex<Euclidean> {
    pub fn new(palette: PaletteHandle, bits: u8) -> MatchResult<Self> {
        Self::with_metric(palette, Euclidean, bits)
    }
}

impl<M: Metric> GridIndex<M> {
    /// Build the index.
    ///
    /// # Arguments
    ///
    /// * `palette` - Palette to index
    /// * `metric` - Distance metric
    /// * `bits` - Significant bits per channel, 1..=[`MAX_CELL_BITS`]
    pub fn with_metric(palette: PaletteHandle, metric: M, bits: u8) -> MatchResult<Self> {
        if !(1..=MAX_CELL_BITS).contains(&bits) {
            return Err(MatchError::InvalidParameters(format!(
                "grid cell bits must be in 1..={MAX_CELL_BITS}, got {bits}"
            )));
        }
        let len = u32::try_from(palette.len()).map_err(|_| {
            MatchError::InvalidParameters(format!("palette too large: {} entries", palette.len()))
        })?;

        let side = 1i32 << bits;
        let mut cells = vec![Vec::new(); (side * side * side) as usize];
        for (i, color) in (0..len).zip(palette.iter()) {
            let (x, y, z) = cell_of(color.rgb(), bits);
            cells[cell_offset(x, y, z, side)].push(i);
        }

        let occupied = cells.iter().filter(|c| !c.is_empty()).count();
        log::debug!(
            "built {}^3 color grid: {} entries in {} occupied cells",
            side,
            len,
            occupied
        );

        Ok(Self {
            palette,
            metric,
            bits,
            side,
            cells,
        })
    }

    /// Significant bits per channel
    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// Inclusive color bounds of one cell
    fn cell_bounds(&self, x: i32, y: i32, z: i32) -> (Rgb, Rgb) {
        let w = 256 >> self.bits;
        let lo = |c: i32| (c * w) as u8;
        let hi = |c: i32| (c * w + w - 1) as u8;
        (Rgb::new(lo(x), lo(y), lo(z)), Rgb::new(hi(x), hi(y), hi(z)))
    }

    /// Lower bound on the distance from `query` to any color outside the
    /// cube of cells within Chebyshev radius `radius` of `center`.
    ///
    /// Returns `None` when that cube already covers the whole grid.
    fn outside_bound(&self, query: Rgb, center: (i32, i32, i32), radius: i32) -> Option<u64> {
        let w = 256 >> self.bits;
        let centers = [center.0, center.1, center.2];
        let mut bound: Option<u64> = None;

        for (axis, &c) in centers.iter().enumerate() {
            let first = c - radius;
            let last = c + radius;
            // Slab below the inner cube on this axis
            if first > 0 {
                let edge = (first * w - 1) as u8;
                let b = self.slab_bound(query, axis, 0, edge);
                bound = Some(bound.map_or(b, |cur| cur.min(b)));
            }
            // Slab above
            if last < self.side - 1 {
                let edge = ((last + 1) * w) as u8;
                let b = self.slab_bound(query, axis, edge, 255);
                bound = Some(bound.map_or(b, |cur| cur.min(b)));
            }
        }
        bound
    }

    /// Lower bound to the slab `lo..=hi` on one axis, unrestricted on the others
    fn slab_bound(&self, query: Rgb, axis: usize, lo: u8, hi: u8) -> u64 {
        let mut min = Rgb::BLACK;
        let mut max = Rgb::WHITE;
        match axis {
            0 => {
                min.r = lo;
                max.r = hi;
            }
            1 => {
                min.g = lo;
                max.g = hi;
            }
            _ => {
                min.b = lo;
                max.b = hi;
            }
        }
        self.metric.lower_bound_sq(query, min, max)
    }

    /// Scan one cell, updating `best`.
    fn visit_cell(&self, query: Rgb, x: i32, y: i32, z: i32, best: &mut Option<ColorMatch>) {
        let entries = &self.cells[cell_offset(x, y, z, self.side)];
        if entries.is_empty() {
            return;
        }
        if let Some(b) = best {
            let (lo, hi) = self.cell_bounds(x, y, z);
            if self.metric.lower_bound_sq(query, lo, hi) > b.distance_sq {
                return;
            }
        }

        let colors = self.palette.colors();
        for &i in entries {
            let index = i as usize;
            let candidate = ColorMatch {
                index,
                distance_sq: self.metric.distance_sq(query, colors[index].rgb()),
            };
            if best.is_none_or(|b| candidate.beats(&b)) {
                *best = Some(candidate);
            }
        }
    }
}

impl<M: Metric> SearchStrategy for GridIndex<M> {
    fn nearest(&self, query: Rgb) -> MatchResult<ColorMatch> {
        let center = cell_of(query, self.bits);
        let mut best: Option<ColorMatch> = None;

        for radius in 0..self.side {
            if radius > 0 {
                match (self.outside_bound(query, center, radius - 1), best) {
                    (None, _) => break,
                    (Some(bound), Some(b)) if bound > b.distance_sq => break,
                    _ => {}
                }
            }

            let clamp = |c: i32| ((c - radius).max(0), (c + radius).min(self.side - 1));
            let (x0, x1) = clamp(center.0);
            let (y0, y1) = clamp(center.1);
            let (z0, z1) = clamp(center.2);
            for x in x0..=x1 {
                for y in y0..=y1 {
                    let on_face = (x - center.0).abs() == radius || (y - center.1).abs() == radius;
                    if on_face {
                        for z in z0..=z1 {
                            self.visit_cell(query, x, y, z, &mut best);
                        }
                    } else {
                        // Interior column: only the two z caps lie on the ring
                        for z in [center.2 - radius, center.2 + radius] {
                            if (0..self.side).contains(&z) {
                                self.visit_cell(query, x, y, z, &mut best);
                            }
                        }
                    }
                }
            }
        }

        best.ok_or(MatchError::EmptyPalette)
    }

    fn palette(&self) -> &PaletteHandle {
        &self.palette
    }

    fn name(&self) -> &'static str {
        "grid"
    }
}

/// Cell coordinates of a color
#[inline]
fn cell_of(c: Rgb, bits: u8) -> (i32, i32, i32) {
    let shift = 8 - bits;
    (
        i32::from(c.r >> shift),
        i32::from(c.g >> shift),
        i32::from(c.b >> shift),
    )
}

#[inline]
fn cell_offset(x: i32, y: i32, z: i32, side: i32) -> usize {
    ((x * side + y) * side + z) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::WeightedEuclidean;
    use crate::search::LinearScan;
    use colorname_core::{Palette, PaletteRow};

    fn scattered() -> PaletteHandle {
        // Deterministic pseudo-random palette with some duplicated colors
        let mut state: u32 = 12345;
        let mut next = || {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12345);
            ((state >> 16) & 0xff) as i64
        };
        let mut rows = Vec::new();
        for i in 0..60 {
            let (r, g, b) = (next(), next(), next());
            rows.push(PaletteRow::new(format!("c{i}"), r, g, b));
            if i % 10 == 0 {
                rows.push(PaletteRow::new(format!("dup{i}"), r, g, b));
            }
        }
        Palette::load(rows).unwrap().into_handle()
    }

    #[test]
    fn test_invalid_bits() {
        let p = scattered();
        assert!(matches!(
            GridIndex::new(p.clone(), 0),
            Err(MatchError::InvalidParameters(_))
        ));
        assert!(GridIndex::new(p, MAX_CELL_BITS + 1).is_err());
    }

    #[test]
    fn test_matches_linear_scan() {
        let p = scattered();
        let linear = LinearScan::new(p.clone());
        for bits in [1, 3, 4, 6] {
            let grid = GridIndex::new(p.clone(), bits).unwrap();
            for r in (0..=255u16).step_by(17) {
                for g in (0..=255u16).step_by(23) {
                    for b in (0..=255u16).step_by(29) {
                        let q = Rgb::new(r as u8, g as u8, b as u8);
                        assert_eq!(
                            grid.nearest(q).unwrap(),
                            linear.nearest(q).unwrap(),
                            "bits {bits}, query {q}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_matches_linear_scan_weighted() {
        let p = scattered();
        let metric = WeightedEuclidean::LUMA;
        let linear = LinearScan::with_metric(p.clone(), metric);
        let grid = GridIndex::with_metric(p, metric, 5).unwrap();
        for v in (0..=255u16).step_by(5) {
            let q = Rgb::new(v as u8, (255 - v) as u8, (v * 7 % 256) as u8);
            assert_eq!(grid.nearest(q).unwrap(), linear.nearest(q).unwrap());
        }
    }

    #[test]
    fn test_tie_across_cells_prefers_smaller_index() {
        // Index 0 sits in a far cell, index 1 in the query's own cell,
        // both at squared distance 1 from the query.
        let p = Palette::load(vec![
            PaletteRow::new("upper", 128, 100, 100),
            PaletteRow::new("lower", 126, 100, 100),
        ])
        .unwrap()
        .into_handle();
        let grid = GridIndex::new(p, 1).unwrap();
        let m = grid.nearest(Rgb::new(127, 100, 100)).unwrap();
        assert_eq!(m.index, 0);
        assert_eq!(m.distance_sq, 1);
        assert_eq!(grid.name(), "grid");
    }

    #[test]
    fn test_single_entry_far_away() {
        let p = Palette::load(vec![PaletteRow::new("white", 255, 255, 255)])
            .unwrap()
            .into_handle();
        let grid = GridIndex::new(p, MAX_CELL_BITS).unwrap();
        let m = grid.nearest(Rgb::BLACK).unwrap();
        assert_eq!(m.index, 0);
        assert_eq!(m.distance_sq, 3 * 255 * 255);
    }
}
