//! The data model: cargo declarations, container catalogue, and the
//! constants contract (spec §6).

use crate::{Cm, Kg};
use crate::error::PackError;

/// OPERATION_BUFFER — clearance kept against every interior wall.
pub const OPERATION_BUFFER: Cm = 2;
/// FORKLIFT_LIFT_MARGIN — headroom reserved above the highest stack.
pub const FORKLIFT_LIFT_MARGIN: Cm = 15;
/// FORKLIFT_WIDTH — chassis width.
pub const FORKLIFT_WIDTH: Cm = 110;
/// FORKLIFT_MAST_HEIGHT — vertical extent of the mast.
pub const FORKLIFT_MAST_HEIGHT: Cm = 160;
/// FORKLIFT_CHASSIS_HEIGHT — items whose bottom sits above this never
/// obstruct the chassis.
pub const FORKLIFT_CHASSIS_HEIGHT: Cm = 140;
/// SIDE_SHIFT — lateral reach of the fork side-shifter.
pub const SIDE_SHIFT: Cm = 60;
/// WALL_BUFFER — minimum chassis clearance against a side wall.
pub const WALL_BUFFER: Cm = 2;
/// Hard support-fraction floor (Invariant 3).
pub const SUPPORT_THRESHOLD_HARD: f64 = 0.70;
/// Soft support-fraction floor used only by scoring's overhang penalty.
pub const SUPPORT_THRESHOLD_SCORE: f64 = 0.85;
/// Soft single-supporter floor used by scoring's instability penalty.
pub const SUPPORT_THRESHOLD_MAX_SUPPORTER: f64 = 0.90;
/// Z_ZONE_SIZE — width of one terracing zone along the lateral axis.
pub const Z_ZONE_SIZE: Cm = 150;
/// GRID_SIZE — spatial grid bucket width along the loading axis.
pub const GRID_SIZE: Cm = 50;
/// ADHESION_BONUS — score credit for a same-spec touching neighbour.
pub const ADHESION_BONUS: f64 = 50.0;
/// FLUSH_BONUS — score credit for a flush lateral top-surface match.
pub const FLUSH_BONUS: f64 = 200.0;

/// One of the three canonical ISO containers this engine plans for.
/// "Practical safe-loading" dimensions — conservative versus nominal
/// ISO values, leaving door-closure buffer (spec §6).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ContainerKind {
    #[serde(rename = "20GP")]
    Gp20,
    #[serde(rename = "40GP")]
    Gp40,
    #[serde(rename = "40HQ")]
    Hq40,
}

impl ContainerKind {
    pub fn spec(self) -> ContainerSpec {
        match self {
            ContainerKind::Gp20 => ContainerSpec {
                kind: self,
                length: 580,
                width: 235,
                height: 239,
                door_width: 234,
                door_height: 228,
                max_weight: 28_000,
            },
            ContainerKind::Gp40 => ContainerSpec {
                kind: self,
                length: 1185,
                width: 235,
                height: 239,
                door_width: 234,
                door_height: 228,
                max_weight: 28_000,
            },
            ContainerKind::Hq40 => ContainerSpec {
                kind: self,
                length: 1185,
                width: 235,
                height: 269,
                door_width: 234,
                door_height: 258,
                max_weight: 28_500,
            },
        }
    }
}

/// Interior geometry plus door opening and payload cap for one
/// container instance. Obtainable only from the fixed catalogue in
/// [`ContainerKind::spec`] — the engine never accepts ad-hoc container
/// dimensions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContainerSpec {
    pub kind: ContainerKind,
    pub length: Cm,
    pub width: Cm,
    pub height: Cm,
    pub door_width: Cm,
    pub door_height: Cm,
    pub max_weight: Kg,
}

impl ContainerSpec {
    /// Usable interior height after the overhead lift margin, the
    /// quantity SMART_MIX's `hasExtraTall` check compares item heights
    /// against (spec §4.7).
    pub fn usable_height(&self) -> Cm {
        self.height - OPERATION_BUFFER - FORKLIFT_LIFT_MARGIN
    }

    pub fn interior_volume_cm3(&self) -> i128 {
        self.length as i128 * self.width as i128 * self.height as i128
    }
}

/// A declared item type with a quantity: the external collaborator's
/// unit of input (spec §3).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CargoSpec {
    pub id: u32,
    pub name: String,
    pub length: Cm,
    pub width: Cm,
    pub height: Cm,
    pub weight: Kg,
    pub quantity: u32,
    #[serde(default)]
    pub unstackable: bool,
    /// Opaque to the core — visual tag carried through untouched.
    #[serde(default)]
    pub tag: Option<String>,
}

impl CargoSpec {
    pub fn validate(&self) -> Result<(), PackError> {
        if self.length <= 0 || self.width <= 0 || self.height <= 0 {
            return Err(PackError::InvalidCargoSpec(self.id));
        }
        if self.weight <= 0 || self.quantity == 0 {
            return Err(PackError::InvalidCargoSpec(self.id));
        }
        Ok(())
    }

    pub fn base_area(&self) -> i128 {
        self.length as i128 * self.width as i128
    }
}

/// One unit occurrence expanded from a [`CargoSpec`]. Immutable once
/// created; consumed when placed. Carries a back-reference to its
/// originating spec for grouping-adhesion scoring and for the residual
/// report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Piece {
    pub spec_id: u32,
    pub length: Cm,
    pub width: Cm,
    pub height: Cm,
    pub weight: Kg,
    pub unstackable: bool,
}

impl Piece {
    pub fn from_spec(spec: &CargoSpec) -> Piece {
        Piece {
            spec_id: spec.id,
            length: spec.length,
            width: spec.width,
            height: spec.height,
            weight: spec.weight,
            unstackable: spec.unstackable,
        }
    }

    pub fn base_area(&self) -> i128 {
        self.length as i128 * self.width as i128
    }
}
