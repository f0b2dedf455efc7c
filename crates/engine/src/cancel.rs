//! Cooperative cancellation for in-flight runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation token shared between a run's controller and
/// its engine.
///
/// Cloning is cheap; all clones observe the same underlying flag. Engines
/// check the flag at every suspension point and unwind without emitting
/// further frames once it is set. Cancellation is never preemptive: it
/// takes effect only at the next checked point.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Create a new token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent and visible to all clones.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Clear the flag. Intended for controlled reuse of the same token
    /// across runs; a fresh run normally gets a fresh token.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_clear() {
        assert!(!CancelFlag::new().is_cancelled());
    }

    #[test]
    fn test_cancel_and_reset() {
        let flag = CancelFlag::new();
        flag.cancel();
        assert!(flag.is_cancelled());
        flag.cancel();
        assert!(flag.is_cancelled());

        flag.reset();
        assert!(!flag.is_cancelled());
    }

    #[test]
    fn test_clones_share_state() {
        let flag = CancelFlag::new();
        let observer = flag.clone();

        flag.cancel();
        assert!(observer.is_cancelled());
    }
}
