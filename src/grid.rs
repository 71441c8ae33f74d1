//! Spatial grid index over committed placements (spec §4.2).
//!
//! A vector of buckets keyed by `floor(x / GRID_SIZE)`. Each
//! [`Placement`] is inserted into every bucket its x-extent crosses;
//! queries dedupe the resulting union by placement id. The grid is
//! append-only within one container — items are never moved or
//! removed once committed, mirroring the teacher crate's
//! `InterferenceGraph`, which is likewise built once by event
//! traversal and never mutated in place (`coreba::analyze::prelude_analysis`).

use std::collections::HashSet;

use crate::container::GRID_SIZE;
use crate::placement::Placement;
use crate::Cm;

#[derive(Debug, Default)]
pub struct SpatialGrid {
    buckets: Vec<Vec<Placement>>,
}

impl SpatialGrid {
    pub fn new() -> Self {
        SpatialGrid { buckets: Vec::new() }
    }

    #[inline(always)]
    fn bucket_of(x: Cm) -> usize {
        (x.max(0) / GRID_SIZE) as usize
    }

    /// Inserts a placement into every bucket its x-extent touches.
    pub fn insert(&mut self, placement: Placement) {
        let lo = Self::bucket_of(placement.pos.x);
        let hi = Self::bucket_of((placement.far_x() - 1).max(placement.pos.x));
        if hi >= self.buckets.len() {
            self.buckets.resize_with(hi + 1, Vec::new);
        }
        for bucket in &mut self.buckets[lo..=hi] {
            bucket.push(placement);
        }
    }

    /// Returns the deduplicated union of placements touching the
    /// half-open x-range `[x_lo, x_hi)`.
    pub fn query(&self, x_lo: Cm, x_hi: Cm) -> Vec<Placement> {
        if x_hi <= x_lo {
            return Vec::new();
        }
        let lo = Self::bucket_of(x_lo);
        let hi = Self::bucket_of(x_hi - 1);
        let mut seen: HashSet<u64> = HashSet::new();
        let mut res = Vec::new();
        for bucket in self.buckets.iter().skip(lo).take(hi.saturating_sub(lo) + 1) {
            for placement in bucket {
                if seen.insert(placement.id) {
                    res.push(*placement);
                }
            }
        }
        res
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|b| b.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Dims, Point};

    fn placement(id: u64, x: Cm, l: Cm) -> Placement {
        Placement {
            id,
            spec_id: 1,
            pos: Point { x, y: 0, z: 0 },
            dims: Dims { l, w: 100, h: 100 },
            sequence: id as u32,
            container_index: 0,
            unstackable: false,
            weight: 10,
        }
    }

    #[test]
    fn query_dedupes_items_spanning_multiple_buckets() {
        let mut grid = SpatialGrid::new();
        // Spans buckets 0, 1, 2 given GRID_SIZE = 50.
        grid.insert(placement(1, 10, 120));
        let hits = grid.query(0, 200);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn query_respects_half_open_range() {
        let mut grid = SpatialGrid::new();
        grid.insert(placement(1, 0, 10));
        grid.insert(placement(2, 200, 10));
        let hits = grid.query(0, 100);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn empty_query_range_returns_nothing() {
        let grid = SpatialGrid::new();
        assert!(grid.query(10, 10).is_empty());
    }
}
