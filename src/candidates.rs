//! Candidate generator (spec §4.4): the anchor set, orientation
//! enumeration, and the z-slide optimisation for floor placements.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::container::{ContainerSpec, Piece};
use crate::feasibility::is_valid;
use crate::geometry::{point_strictly_inside, Dims, Point};
use crate::grid::SpatialGrid;
use crate::placement::Placement;

/// The growing set of candidate lower-rear corners a packer tries
/// placements at. Kept as a `BTreeSet` so insertion gives the
/// ascending `(x, y, z)` order the scoring tie-break relies on, and so
/// duplicate anchors collapse for free.
#[derive(Debug, Default)]
pub struct AnchorSet {
    anchors: BTreeSet<Point>,
}

impl AnchorSet {
    pub fn new() -> Self {
        let mut anchors = BTreeSet::new();
        anchors.insert(Point::ORIGIN);
        AnchorSet { anchors }
    }

    /// Adds the three anchors spawned by committing `placement`: its
    /// top corner, far-side corner, and far-front corner.
    pub fn add_from_placement(&mut self, placement: &Placement) {
        let (pos, dims) = (placement.pos, placement.dims);
        self.anchors.insert(Point { x: pos.x, y: pos.y + dims.h, z: pos.z });
        self.anchors.insert(Point { x: pos.x, y: pos.y, z: pos.z + dims.w });
        self.anchors.insert(Point { x: pos.x + dims.l, y: pos.y, z: pos.z });
    }

    /// Drops anchors that now lie strictly inside a committed box, or
    /// outside the usable interior.
    pub fn prune(&mut self, container: &ContainerSpec, placed: &[Placement]) {
        self.anchors.retain(|&anchor| {
            if anchor.x < 0 || anchor.y < 0 || anchor.z < 0 {
                return false;
            }
            if anchor.x >= container.length || anchor.y >= container.height || anchor.z >= container.width {
                return false;
            }
            !placed.iter().any(|p| point_strictly_inside(anchor, p.pos, p.dims))
        });
    }

    /// Iterates anchors in ascending `(x, y, z)` order.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.anchors.iter()
    }
}

/// The two vertical-axis orientations a box may take: identity keeps
/// the spec's declared length/width; `Swapped` exchanges them. Height
/// never changes (no tipping, spec §3).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Identity,
    Swapped,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Identity, Orientation::Swapped];

    pub fn apply(self, piece: &Piece) -> Dims {
        match self {
            Orientation::Identity => Dims { l: piece.length, w: piece.width, h: piece.height },
            Orientation::Swapped => Dims { l: piece.width, w: piece.length, h: piece.height },
        }
    }
}

/// One representative [`Piece`] per distinct `CargoSpec` id from the
/// residual pool, in first-occurrence order. A pure optimisation (spec
/// §4.4, §9): evaluating every copy of an interchangeable spec against
/// every anchor is wasted work in bulk manifests.
pub fn unique_representatives(residual: &[Piece]) -> Vec<Piece> {
    let mut seen: IndexMap<u32, Piece> = IndexMap::new();
    for piece in residual {
        seen.entry(piece.spec_id).or_insert(*piece);
    }
    seen.into_values().collect()
}

/// After an anchor/orientation is confirmed feasible on the floor
/// (`pos.y == 0`), slides the candidate toward smaller `z` in 1 cm
/// steps for as long as it remains feasible. Never applied when
/// stacking — sliding a stacked box silently introduces an overhang
/// that would bypass the support check (spec §4.4).
pub fn z_slide(mut pos: Point, dims: Dims, container: &ContainerSpec, grid: &SpatialGrid) -> Point {
    debug_assert_eq!(pos.y, 0, "z-slide only applies to floor placements");
    while pos.z > 0 {
        let candidate = Point { x: pos.x, y: pos.y, z: pos.z - 1 };
        if is_valid(candidate, dims, container, grid) {
            pos = candidate;
        } else {
            break;
        }
    }
    pos
}
