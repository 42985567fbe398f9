//! Shared "scanning in progress" state.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counter-based in-flight state shared by all extractions of a pipeline.
///
/// Modeled as a counter rather than a boolean so overlapping extractions
/// cannot clear the flag prematurely: the flag reads true while any guard
/// is alive and drops only once the last one finishes, success or failure.
#[derive(Debug, Default)]
pub struct ScanState {
    in_flight: AtomicUsize,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks one scan as started; the returned guard ends it on drop.
    pub fn begin(self: &Arc<Self>) -> ScanGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        ScanGuard {
            state: Arc::clone(self),
        }
    }

    /// Returns true while at least one scan is in flight.
    pub fn is_scanning(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }
}

/// RAII guard for one in-flight scan.
///
/// Dropping the guard decrements the counter on every path, including
/// early returns and error propagation, so no in-progress state leaks.
#[derive(Debug)]
pub struct ScanGuard {
    state: Arc<ScanState>,
}

impl Drop for ScanGuard {
    fn drop(&mut self) {
        self.state.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
