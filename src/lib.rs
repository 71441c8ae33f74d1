//! `freightpack` — a heuristic, constraint-driven 3D cargo packing
//! engine: a spatial-grid collision index, a forklift-access-aware
//! feasibility oracle, and a multi-criterion scorer, orchestrated by a
//! shipment planner that sequences standard intermodal containers.
//!
//! The crate is deliberately narrow: it does not render, edit, or
//! parse natural language. It consumes a list of [`container::CargoSpec`]s
//! and a [`planner::Strategy`], and produces a [`placement::Shipment`].

pub mod candidates;
pub mod container;
pub mod error;
pub mod feasibility;
pub mod geometry;
pub mod grid;
pub mod manifest;
pub mod packer;
pub mod planner;
pub mod progress;
pub mod scoring;

mod placement;

/// Integer centimetres. All positions and dimensions are exact in this
/// unit; only scoring ratios are float (spec §3).
pub type Cm = i64;

/// Kilograms.
pub type Kg = i64;

pub use container::{CargoSpec, ContainerKind, ContainerSpec, Piece};
pub use error::PackError;
pub use geometry::{Dims, Point};
pub use placement::{PackResult, Placement, Shipment};
pub use planner::{pack_shipment, presort, Strategy};
pub use progress::{CancellationToken, ProgressCallback};
