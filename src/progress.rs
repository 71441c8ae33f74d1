//! Cooperative yield points and progress/cancellation surface (spec §5, C8).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Every N iterations the packer checks this token instead of a wall
/// clock (spec: "no timers, no wall clocks"). Cloning shares the same
/// underlying flag; the host sets it from wherever it observes a
/// cancel request.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        CancellationToken { cancelled: Arc::new(AtomicBool::new(false)) }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Number of packer iterations between cooperative yield/cancellation
/// checks (spec §4.6).
pub const YIELD_INTERVAL: u32 = 5;

/// Invoked once per container decision with a human-readable stage
/// string, never intra-container (spec §5).
pub type ProgressCallback<'a> = Box<dyn FnMut(&str) + 'a>;
