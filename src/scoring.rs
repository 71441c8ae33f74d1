//! Scoring & selection (spec §4.5). Lower is better; every term is
//! expressed in centimetre-scale units so the additive terms stay
//! comparable.

use crate::container::{
    ContainerSpec, ADHESION_BONUS, FLUSH_BONUS, SUPPORT_THRESHOLD_MAX_SUPPORTER,
    SUPPORT_THRESHOLD_SCORE, Z_ZONE_SIZE,
};
use crate::feasibility::support_stats;
use crate::geometry::{boxes_close, footprints_close, Dims, Point};
use crate::grid::SpatialGrid;
use crate::Cm;

/// The context scoring needs beyond the candidate itself: how tall the
/// shortest unstackable item still in the residual pool is (the
/// kill-zone penalty's `min_unstackable_h`), computed once per packer
/// pass over whatever remains unplaced.
#[derive(Clone, Copy, Debug)]
pub struct ScoringContext {
    pub min_unstackable_h: Option<Cm>,
}

/// Candidate score for one (box, anchor, orientation) triple. Returns
/// `f64`; ties are broken by the caller's iteration order, never by
/// this value.
pub fn score(
    pos: Point,
    dims: Dims,
    spec_id: u32,
    unstackable: bool,
    container: &ContainerSpec,
    grid: &SpatialGrid,
    ctx: ScoringContext,
) -> f64 {
    let mut s = 10_000.0 * pos.x as f64 + 10.0 * pos.y as f64 + pos.z as f64;

    if unstackable {
        let top_gap = (container.height - (pos.y + dims.h)) as f64;
        if top_gap > 40.0 {
            s += 1_000_000.0;
        } else {
            s -= 500_000.0;
        }
    } else {
        if (pos.x as f64) < container.length as f64 / 2.0 {
            s -= 5_000.0;
        }

        let zone_index = (pos.z / Z_ZONE_SIZE) as f64;
        s += zone_index * pos.y as f64 * 50.0;

        if pos.y > 0 {
            let stats = support_stats(pos, dims, grid);
            let footprint = dims.l as f64 * dims.w as f64;
            if (stats.total_area as f64) < SUPPORT_THRESHOLD_SCORE * footprint {
                s += 500_000.0;
            }
            if (stats.max_area as f64) < SUPPORT_THRESHOLD_MAX_SUPPORTER * footprint {
                s += 200_000.0;
            }
        }

        if let Some(min_h) = ctx.min_unstackable_h {
            let top = pos.y + dims.h;
            if (container.height - min_h - top).abs() <= 5 {
                s -= 20_000.0;
            }
            let top_gap = container.height - top;
            if top_gap < min_h && top_gap > 5 {
                s += 100_000.0;
            }
        }
    }

    let ground_level = pos.y < 1;
    let mut has_same_spec_neighbour = false;
    let mut has_any_neighbour = false;
    let mut has_flush_neighbour = false;
    for neighbour in grid.query(pos.x.saturating_sub(1), pos.x + dims.l + 1) {
        if boxes_close(pos, dims, neighbour.pos, neighbour.dims, 1) {
            has_any_neighbour = true;
            if neighbour.spec_id == spec_id {
                has_same_spec_neighbour = true;
            }
        }
        // Spec §4.5's "within 0.5 cm" tolerance, in the integer-cm domain
        // this crate works in, is exact equality (cf. `feasibility::tops_match`).
        let same_top = neighbour.top() == pos.y + dims.h;
        if same_top && footprints_close(pos, dims, neighbour.pos, neighbour.dims, 1) {
            has_flush_neighbour = true;
        }
    }
    let adhesion_hit = if ground_level { has_same_spec_neighbour } else { has_any_neighbour };
    if adhesion_hit {
        s -= ADHESION_BONUS;
    }
    if has_flush_neighbour {
        s -= FLUSH_BONUS;
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::ContainerKind;
    use crate::placement::Placement;

    fn container() -> ContainerSpec {
        ContainerKind::Gp20.spec()
    }

    #[test]
    fn unstackable_rewards_near_ceiling_placement() {
        let c = container();
        let grid = SpatialGrid::new();
        let dims = Dims { l: 100, w: 100, h: 50 };
        let near_ceiling = Point { x: 0, y: c.height - 51, z: 0 };
        let on_floor = Point { x: 0, y: 0, z: 0 };
        let ctx = ScoringContext { min_unstackable_h: None };
        let s_top = score(near_ceiling, dims, 1, true, &c, &grid, ctx);
        let s_floor = score(on_floor, dims, 1, true, &c, &grid, ctx);
        assert!(s_top < s_floor);
    }

    #[test]
    fn stackable_back_half_is_cheaper_than_front() {
        let c = container();
        let grid = SpatialGrid::new();
        let dims = Dims { l: 100, w: 100, h: 50 };
        let ctx = ScoringContext { min_unstackable_h: None };
        let rear = score(Point { x: 10, y: 0, z: 0 }, dims, 1, false, &c, &grid, ctx);
        let front = score(
            Point { x: c.length - 110, y: 0, z: 0 },
            dims,
            1,
            false,
            &c,
            &grid,
            ctx,
        );
        assert!(rear < front);
    }

    #[test]
    fn adhesion_bonus_favours_touching_same_spec_neighbour() {
        let c = container();
        let mut grid = SpatialGrid::new();
        grid.insert(Placement {
            id: 1,
            spec_id: 7,
            pos: Point { x: 0, y: 0, z: 0 },
            dims: Dims { l: 100, w: 100, h: 50 },
            sequence: 1,
            container_index: 0,
            unstackable: false,
            weight: 10,
        });
        let dims = Dims { l: 100, w: 100, h: 50 };
        let ctx = ScoringContext { min_unstackable_h: None };
        let touching = score(Point { x: 100, y: 0, z: 0 }, dims, 7, false, &c, &grid, ctx);
        let far = score(Point { x: 300, y: 0, z: 0 }, dims, 7, false, &c, &grid, ctx);
        assert!(touching < far - 4_000.0);
    }
}
