//! Axis-aligned box primitives: overlap predicates and support-area math.
//!
//! Everything here is pure, allocation-free arithmetic over integer
//! centimetres. Coordinates follow the container frame: x toward the
//! door, y vertical, z lateral (see the data model in `spec.md`).

use crate::Cm;

/// A point in the container frame. Ordered by `(x, y, z)` ascending so
/// that anchor sets can be kept in a `BTreeSet` and iterated in the
/// stable order the scoring tie-break depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: Cm,
    pub y: Cm,
    pub z: Cm,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0, z: 0 };
}

/// Oriented dimensions of a placed or candidate box. `l`/`w` are the
/// two horizontal extents (interchangeable under vertical-axis
/// rotation); `h` is the fixed height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dims {
    pub l: Cm,
    pub w: Cm,
    pub h: Cm,
}

/// Length of the overlap of two 1D intervals, clamped at zero.
#[inline(always)]
pub fn overlap_len(a_min: Cm, a_max: Cm, b_min: Cm, b_max: Cm) -> Cm {
    (a_max.min(b_max) - a_min.max(b_min)).max(0)
}

/// Footprint (x-z projection) overlap area between a candidate and
/// another placement's position/dims. Used both by the 70% hard
/// support check and by scoring's 85%/90% soft terms.
#[inline(always)]
pub fn support_area(cand: (Point, Dims), other: (Point, Dims)) -> i128 {
    let (cpos, cdims) = cand;
    let (opos, odims) = other;
    let x_ov = overlap_len(cpos.x, cpos.x + cdims.l, opos.x, opos.x + odims.l) as i128;
    let z_ov = overlap_len(cpos.z, cpos.z + cdims.w, opos.z, opos.z + odims.w) as i128;
    x_ov * z_ov
}

/// Strict six-inequality AABB intersection test. Two boxes sharing a
/// face (equal coordinate on one axis) do not intersect — the boxes
/// are treated as open sets.
#[inline(always)]
pub fn aabb_intersects(a_pos: Point, a_dims: Dims, b_pos: Point, b_dims: Dims) -> bool {
    a_pos.x < b_pos.x + b_dims.l
        && b_pos.x < a_pos.x + a_dims.l
        && a_pos.y < b_pos.y + b_dims.h
        && b_pos.y < a_pos.y + a_dims.h
        && a_pos.z < b_pos.z + b_dims.w
        && b_pos.z < a_pos.z + a_dims.w
}

/// Whether `point` lies strictly inside the open interior of the box at
/// `pos`/`dims` (used to prune anchors that have been swallowed by a
/// later commit; points on a face are kept, since those are exactly
/// the corners the generator wants to revisit).
#[inline(always)]
pub fn point_strictly_inside(point: Point, pos: Point, dims: Dims) -> bool {
    point.x > pos.x
        && point.x < pos.x + dims.l
        && point.y > pos.y
        && point.y < pos.y + dims.h
        && point.z > pos.z
        && point.z < pos.z + dims.w
}

/// True if two boxes are within `tol` centimetres of touching or
/// overlapping on every axis simultaneously — the shared notion behind
/// both grouping adhesion and flush-alignment scoring (spec §4.5):
/// "proximity ≤ 1 cm along any axis" is read as growing one box by
/// `tol` in every direction and testing for intersection.
#[inline(always)]
pub fn boxes_close(pos: Point, dims: Dims, other_pos: Point, other_dims: Dims, tol: Cm) -> bool {
    let grown_pos = Point {
        x: pos.x - tol,
        y: pos.y - tol,
        z: pos.z - tol,
    };
    let grown_dims = Dims {
        l: dims.l + 2 * tol,
        w: dims.w + 2 * tol,
        h: dims.h + 2 * tol,
    };
    aabb_intersects(grown_pos, grown_dims, other_pos, other_dims)
}

/// Same idea as [`boxes_close`], restricted to the (x, z) footprint —
/// used by flush-alignment, which only cares about lateral adjacency,
/// not vertical proximity.
#[inline(always)]
pub fn footprints_close(pos: Point, dims: Dims, other_pos: Point, other_dims: Dims, tol: Cm) -> bool {
    let x_gap = overlap_len(pos.x - tol, pos.x + dims.l + tol, other_pos.x, other_pos.x + other_dims.l);
    let z_gap = overlap_len(pos.z - tol, pos.z + dims.w + tol, other_pos.z, other_pos.z + other_dims.w);
    x_gap > 0 && z_gap > 0
}
