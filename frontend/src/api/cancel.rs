//! Cooperative request cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation token threaded through read requests.
///
/// A page creates one token per mount and cancels it in `on_cleanup`; the
/// client checks the token around every await and reports `Aborted` instead
/// of a result, which closes the update-after-unmount race. An in-flight
/// fetch is left to settle; its result is discarded, never applied.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
