//! Pending-request gauge behind the global loading overlay.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts in-flight HTTP requests so the shell can show one overlay for all
/// of them. `end()` saturates at zero, so an unbalanced caller cannot drive
/// the gauge negative and wedge the overlay on.
#[derive(Debug, Default)]
pub struct LoadingCounter {
    pending: AtomicUsize,
}

impl LoadingCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks one request as started.
    pub fn begin(&self) {
        self.pending.fetch_add(1, Ordering::AcqRel);
    }

    /// Marks one request as settled (success or failure alike).
    pub fn end(&self) {
        let _ = self
            .pending
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |pending| {
                Some(pending.saturating_sub(1))
            });
    }

    /// Begins a request and returns a guard that ends it on drop, so early
    /// returns and error paths cannot leak a pending increment.
    pub fn guard(&self) -> LoadingGuard<'_> {
        self.begin();
        LoadingGuard { counter: self }
    }

    pub fn is_loading(&self) -> bool {
        self.pending() > 0
    }

    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::Acquire)
    }
}

/// Drop guard tied to one in-flight request.
#[derive(Debug)]
pub struct LoadingGuard<'a> {
    counter: &'a LoadingCounter,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.counter.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_overlapping_requests() {
        let counter = LoadingCounter::new();
        assert!(!counter.is_loading());

        counter.begin();
        counter.begin();
        assert!(counter.is_loading());
        assert_eq!(counter.pending(), 2);

        counter.end();
        assert!(counter.is_loading(), "still one request in flight");
        counter.end();
        assert!(!counter.is_loading());
    }

    #[test]
    fn test_end_saturates_at_zero() {
        let counter = LoadingCounter::new();
        counter.end();
        counter.end();
        assert_eq!(counter.pending(), 0);

        counter.begin();
        assert!(counter.is_loading());
    }

    #[test]
    fn test_guard_ends_on_drop() {
        let counter = LoadingCounter::new();
        {
            let _outer = counter.guard();
            let _inner = counter.guard();
            assert_eq!(counter.pending(), 2);
        }
        assert!(!counter.is_loading());
    }
}
