//! Crate-boundary error type.
//!
//! Mirrors the teacher crate's posture (`coreba::helpe::JobError`):
//! expected *operational* outcomes — a door too small, a weight cap
//! hit, no admissible move left, a plan sequence exhausted, a
//! cancelled run — are never raised as errors. Per spec §7 ("All error
//! signalling is by return value") they are folded straight into the
//! data model as residual lists and `PackResult` fields. `PackError`
//! exists only for structural/programmer mistakes at the crate's
//! construction and I/O boundaries.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("cargo spec {0} has a non-positive dimension, weight, or zero quantity")]
    InvalidCargoSpec(u32),

    #[error("no cargo was supplied")]
    EmptyManifest,

    #[error("failed to parse cargo manifest: {0}")]
    ManifestParse(#[from] serde_json::Error),

    #[error("failed to read cargo manifest: {0}")]
    ManifestIo(#[from] std::io::Error),
}
