//! The feasibility oracle (spec §4.3): boundary, non-overlap, forklift
//! access, and support checks, cheapest first.

use crate::container::{
    CargoSpec, ContainerSpec, Piece, FORKLIFT_CHASSIS_HEIGHT, FORKLIFT_WIDTH, OPERATION_BUFFER,
    SIDE_SHIFT, WALL_BUFFER,
};
use crate::geometry::{aabb_intersects, support_area, Dims, Point};
use crate::grid::SpatialGrid;
use crate::Cm;

/// A box of `length`×`width`×`height` is admissible for a container
/// only if it fits the door in at least one planar orientation (spec §4.3).
fn door_fits_dims(container: &ContainerSpec, length: Cm, width: Cm, height: Cm) -> bool {
    let fits_upright = width <= container.door_width && height <= container.door_height;
    let fits_swapped = length <= container.door_width && height <= container.door_height;
    fits_upright || fits_swapped
}

pub fn door_fits(container: &ContainerSpec, spec: &CargoSpec) -> bool {
    door_fits_dims(container, spec.length, spec.width, spec.height)
}

pub fn door_fits_piece(container: &ContainerSpec, piece: &Piece) -> bool {
    door_fits_dims(container, piece.length, piece.width, piece.height)
}

/// Invariant 2: the placement, less the overhead margin, fits inside
/// the interior.
pub fn within_boundary(pos: Point, dims: Dims, container: &ContainerSpec) -> bool {
    pos.x >= 0
        && pos.x + dims.l <= container.length - OPERATION_BUFFER
        && pos.z >= 0
        && pos.z + dims.w <= container.width - OPERATION_BUFFER
        && pos.y >= 0
        && pos.y + dims.h <= container.height - OPERATION_BUFFER - crate::container::FORKLIFT_LIFT_MARGIN
}

/// Aggregate support statistics for a candidate footprint: total
/// supported area, the largest single supporter's footprint area, and
/// whether any contributing supporter is itself marked unstackable.
/// Shared by the hard 70% feasibility check and the soft 85%/90%
/// scoring terms so both read the same neighbour scan.
#[derive(Clone, Copy, Debug, Default)]
pub struct SupportStats {
    pub total_area: i128,
    pub max_area: i128,
    pub rests_on_unstackable: bool,
}

/// Tolerance for matching a candidate's `y` against a supporter's top
/// surface. Spec §9 flags the 0.1 cm tolerance as an open question for
/// float coordinates; this engine keeps all positions as integer
/// centimetres, so exact equality already satisfies "within 0.1 cm"
/// and no separate float epsilon is needed (see DESIGN.md).
#[inline(always)]
fn tops_match(a: Cm, b: Cm) -> bool {
    a == b
}

pub fn support_stats(pos: Point, dims: Dims, grid: &SpatialGrid) -> SupportStats {
    let mut stats = SupportStats::default();
    for neighbour in grid.query(pos.x, pos.x + dims.l) {
        if !tops_match(neighbour.top(), pos.y) {
            continue;
        }
        let area = support_area((pos, dims), (neighbour.pos, neighbour.dims));
        if area <= 0 {
            continue;
        }
        stats.total_area += area;
        if area > stats.max_area {
            stats.max_area = area;
        }
        if neighbour.unstackable {
            stats.rests_on_unstackable = true;
        }
    }
    stats
}

/// Invariant 3's hard check: required only when `pos.y > 0`.
pub fn support_ok(pos: Point, dims: Dims, grid: &SpatialGrid) -> bool {
    let stats = support_stats(pos, dims, grid);
    if stats.rests_on_unstackable {
        return false;
    }
    let footprint = dims.l as i128 * dims.w as i128;
    let required = (crate::container::SUPPORT_THRESHOLD_HARD * footprint as f64).ceil() as i128;
    stats.total_area >= required
}

/// Subtracts `[lo, hi]` from a sorted, disjoint list of closed
/// intervals, returning the remaining disjoint pieces.
fn subtract_interval(intervals: Vec<(f64, f64)>, lo: f64, hi: f64) -> Vec<(f64, f64)> {
    let mut res = Vec::with_capacity(intervals.len() + 1);
    for (a, b) in intervals {
        if hi <= a || lo >= b {
            res.push((a, b));
            continue;
        }
        if lo > a {
            res.push((a, lo));
        }
        if hi < b {
            res.push((hi, b));
        }
    }
    res
}

/// The forklift access model (spec §4.3). Models the chassis as a
/// rectangle of width `FORKLIFT_WIDTH`, vertical extent
/// `[0, FORKLIFT_MAST_HEIGHT]`, reaching the candidate from the door
/// end with a side-shifter of reach `SIDE_SHIFT`. Returns true if some
/// chassis-centre z remains admissible after subtracting every
/// obstruction between the candidate's front face and the door.
pub fn forklift_access_ok(pos: Point, dims: Dims, container: &ContainerSpec, grid: &SpatialGrid) -> bool {
    let half_f = FORKLIFT_WIDTH as f64 / 2.0;
    let z_target = pos.z as f64 + dims.w as f64 / 2.0;

    let wall_lo = half_f + WALL_BUFFER as f64;
    let wall_hi = container.width as f64 - half_f - WALL_BUFFER as f64;
    let reach_lo = z_target - SIDE_SHIFT as f64;
    let reach_hi = z_target + SIDE_SHIFT as f64;

    let lo = wall_lo.max(reach_lo);
    let hi = wall_hi.min(reach_hi);
    if lo > hi {
        return false;
    }
    let mut intervals = vec![(lo, hi)];

    let from_x = pos.x + dims.l;
    if from_x >= container.length {
        return !intervals.is_empty();
    }

    for obstruction in grid.query(from_x, container.length) {
        if obstruction.pos.y >= FORKLIFT_CHASSIS_HEIGHT {
            // Strictly above chassis height: visual-only, never blocks.
            // FORKLIFT_CHASSIS_HEIGHT < FORKLIFT_MAST_HEIGHT, so anything
            // passing this check already has its bottom inside [0, mast].
            continue;
        }
        let forb_lo = obstruction.pos.z as f64 - half_f;
        let forb_hi = obstruction.far_z() as f64 + half_f;
        intervals = subtract_interval(intervals, forb_lo, forb_hi);
        if intervals.is_empty() {
            return false;
        }
    }

    !intervals.is_empty()
}

/// Composes the full oracle: boundary, non-overlap, forklift access,
/// then support — cheapest first, short-circuiting on the first
/// failure (spec §4.3).
pub fn is_valid(pos: Point, dims: Dims, container: &ContainerSpec, grid: &SpatialGrid) -> bool {
    if !within_boundary(pos, dims, container) {
        return false;
    }
    for neighbour in grid.query(pos.x, pos.x + dims.l) {
        if aabb_intersects(pos, dims, neighbour.pos, neighbour.dims) {
            return false;
        }
    }
    if !forklift_access_ok(pos, dims, container, grid) {
        return false;
    }
    if pos.y > 0 && !support_ok(pos, dims, grid) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::ContainerKind;
    use crate::placement::Placement;

    fn spec(w: Cm, l: Cm, h: Cm, dw: Cm, dh: Cm) -> (CargoSpec, ContainerSpec) {
        let container = ContainerSpec {
            kind: ContainerKind::Gp20,
            length: 580,
            width: 235,
            height: 239,
            door_width: dw,
            door_height: dh,
            max_weight: 28_000,
        };
        (
            CargoSpec {
                id: 1,
                name: "x".into(),
                length: l,
                width: w,
                height: h,
                weight: 10,
                quantity: 1,
                unstackable: false,
                tag: None,
            },
            container,
        )
    }

    #[test]
    fn door_fit_checks_both_orientations() {
        let (s, c) = spec(100, 300, 100, 234, 228);
        assert!(door_fits(&c, &s));
        let (s2, c2) = spec(300, 300, 100, 234, 228);
        assert!(!door_fits(&c2, &s2));
    }

    #[test]
    fn boundary_rejects_past_operation_buffer() {
        let container = ContainerKind::Gp20.spec();
        let dims = Dims { l: 579, w: 10, h: 10 };
        let pos = Point { x: 0, y: 0, z: 0 };
        assert!(!within_boundary(pos, dims, &container));
    }

    fn placement(id: u64, pos: Point, dims: Dims, unstackable: bool) -> Placement {
        Placement {
            id,
            spec_id: 1,
            pos,
            dims,
            sequence: id as u32,
            container_index: 0,
            unstackable,
            weight: 50,
        }
    }

    #[test]
    fn support_requires_70_percent_coverage() {
        let mut grid = SpatialGrid::new();
        grid.insert(placement(
            1,
            Point { x: 0, y: 0, z: 0 },
            Dims { l: 50, w: 100, h: 80 },
            false,
        ));
        let cand_pos = Point { x: 0, y: 80, z: 0 };
        let cand_dims = Dims { l: 100, w: 100, h: 80 };
        // Only 50% of the candidate's footprint is supported.
        assert!(!support_ok(cand_pos, cand_dims, &grid));
    }

    #[test]
    fn support_rejects_unstackable_base() {
        let mut grid = SpatialGrid::new();
        grid.insert(placement(
            1,
            Point { x: 0, y: 0, z: 0 },
            Dims { l: 100, w: 100, h: 80 },
            true,
        ));
        let cand_pos = Point { x: 0, y: 80, z: 0 };
        let cand_dims = Dims { l: 100, w: 100, h: 80 };
        assert!(!support_ok(cand_pos, cand_dims, &grid));
    }

    #[test]
    fn forklift_access_blocked_by_centered_long_item() {
        let container = ContainerKind::Gp20.spec();
        let mut grid = SpatialGrid::new();
        // A (100x100x100) at (0,0,67.5) -> integer cm, use 68 for y z-centre-ish.
        grid.insert(placement(
            1,
            Point { x: 0, y: 0, z: 68 },
            Dims { l: 100, w: 100, h: 100 },
            false,
        ));
        // B (200x100x100) placed right after A along x, centred the same z.
        let b_pos = Point { x: 100, y: 0, z: 68 };
        let b_dims = Dims { l: 200, w: 100, h: 100 };
        assert!(!forklift_access_ok(b_pos, b_dims, &container, &grid));
    }

    #[test]
    fn forklift_access_open_with_no_obstructions() {
        let container = ContainerKind::Gp20.spec();
        let grid = SpatialGrid::new();
        let pos = Point { x: 0, y: 0, z: 0 };
        let dims = Dims { l: 100, w: 100, h: 100 };
        assert!(forklift_access_ok(pos, dims, &container, &grid));
    }
}
