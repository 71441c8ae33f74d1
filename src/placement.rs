//! Committed placements and the result types built from them (spec §3).

use crate::container::{ContainerKind, ContainerSpec, Piece};
use crate::geometry::{Dims, Point};
use crate::{Cm, Kg};

/// The committed location of one [`Piece`]: absolute position, chosen
/// oriented dimensions, loading sequence number, owning container
/// index, and a back-reference to the source [`CargoSpec`](crate::container::CargoSpec)
/// id for grouping. Immutable for the lifetime of its [`PackResult`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub id: u64,
    pub spec_id: u32,
    pub pos: Point,
    pub dims: Dims,
    pub sequence: u32,
    pub container_index: usize,
    pub unstackable: bool,
    pub weight: Kg,
}

impl Placement {
    #[inline(always)]
    pub fn top(&self) -> Cm {
        self.pos.y + self.dims.h
    }

    #[inline(always)]
    pub fn far_x(&self) -> Cm {
        self.pos.x + self.dims.l
    }

    #[inline(always)]
    pub fn far_z(&self) -> Cm {
        self.pos.z + self.dims.w
    }

    #[inline(always)]
    pub fn volume_cm3(&self) -> i128 {
        self.dims.l as i128 * self.dims.w as i128 * self.dims.h as i128
    }
}

/// The outcome of packing one container: its type, the ordered
/// placements committed into it, whatever [`Piece`]s could not be
/// placed (only ever non-empty on the last [`PackResult`] of a
/// [`Shipment`]), and utilization statistics.
#[derive(Clone, Debug)]
pub struct PackResult {
    pub container_kind: ContainerKind,
    pub placements: Vec<Placement>,
    pub unplaced: Vec<Piece>,
    pub used_volume_cm3: i128,
    pub volume_utilization: f64,
    pub total_weight: Kg,
    pub weight_utilization: f64,
}

impl PackResult {
    pub fn new(container_kind: ContainerKind, placements: Vec<Placement>, unplaced: Vec<Piece>) -> Self {
        let spec: ContainerSpec = container_kind.spec();
        let used_volume_cm3: i128 = placements.iter().map(|p| p.volume_cm3()).sum();
        let total_weight: Kg = placements.iter().map(|p| p.weight).sum();
        let interior = spec.interior_volume_cm3();
        let volume_utilization = if interior > 0 {
            used_volume_cm3 as f64 / interior as f64
        } else {
            0.0
        };
        let weight_utilization = if spec.max_weight > 0 {
            total_weight as f64 / spec.max_weight as f64
        } else {
            0.0
        };
        PackResult {
            container_kind,
            placements,
            unplaced,
            used_volume_cm3,
            volume_utilization,
            total_weight,
            weight_utilization,
        }
    }
}

/// An ordered list of [`PackResult`]s. Invariant: the union of every
/// result's placements plus the last result's unplaced list equals the
/// input cargo as multisets of [`Piece`]s (spec §3, property P1).
#[derive(Clone, Debug, Default)]
pub struct Shipment {
    pub results: Vec<PackResult>,
}

impl Shipment {
    pub fn new() -> Self {
        Shipment { results: Vec::new() }
    }

    pub fn push(&mut self, result: PackResult) {
        self.results.push(result);
    }

    /// The multiset of pieces that never made it into a container.
    /// Empty unless the last container's pack left a residual.
    pub fn unplaced(&self) -> &[Piece] {
        self.results.last().map(|r| r.unplaced.as_slice()).unwrap_or(&[])
    }

    pub fn total_placements(&self) -> usize {
        self.results.iter().map(|r| r.placements.len()).sum()
    }
}
