//! Completion barrier over fan-out metadata extraction
//!
//! Extraction of many files is dispatched concurrently and completes in
//! arbitrary order, so there is no synchronous point at which "all files are
//! done" is knowable without an explicit counter. The tracker counts
//! *dispatches*: the expected total is the exact number of candidates handed
//! to the extractor, taken from the same enumeration that produced the work
//! items, and every finished extraction counts exactly once whether it
//! yielded a binding, a skip, or a failure. This decouples the barrier from
//! the non-service skip case.

use tracing::trace;

/// Counts finished extractions against the dispatched total
#[derive(Debug)]
pub struct CompletionTracker {
    expected: usize,
    completed: usize,
    fired: bool,
}

impl CompletionTracker {
    /// Creates a tracker expecting `expected` completions - the exact count
    /// of candidates handed to the extractor
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            completed: 0,
            fired: false,
        }
    }

    /// Records one finished extraction
    ///
    /// Returns `true` exactly once per run, on the call that reaches the
    /// expected total; every later call is an idempotent no-op so a straggler
    /// can never re-trigger emission.
    pub fn complete_one(&mut self) -> bool {
        if self.fired {
            trace!(
                expected = self.expected,
                "Completion after barrier fired, ignoring"
            );
            return false;
        }

        self.completed += 1;
        trace!(
            completed = self.completed,
            expected = self.expected,
            "Extraction finished"
        );

        if self.completed == self.expected {
            self.fired = true;
            return true;
        }
        false
    }

    /// Whether every dispatched extraction has finished
    ///
    /// Trivially true for an empty work list, where `complete_one` is never
    /// called.
    pub fn is_complete(&self) -> bool {
        self.fired || self.expected == 0
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn expected(&self) -> usize {
        self.expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_exactly_on_expected_total() {
        let mut tracker = CompletionTracker::new(3);
        assert!(!tracker.complete_one());
        assert!(!tracker.complete_one());
        assert!(tracker.complete_one());
        assert!(tracker.is_complete());
    }

    #[test]
    fn test_stragglers_are_ignored_after_firing() {
        let mut tracker = CompletionTracker::new(2);
        assert!(!tracker.complete_one());
        assert!(tracker.complete_one());
        assert!(!tracker.complete_one());
        assert!(!tracker.complete_one());
        assert_eq!(tracker.completed(), 2);
    }

    #[test]
    fn test_single_candidate_fires_immediately() {
        let mut tracker = CompletionTracker::new(1);
        assert!(tracker.complete_one());
    }

    #[test]
    fn test_empty_work_list_is_trivially_complete() {
        let tracker = CompletionTracker::new(0);
        assert!(tracker.is_complete());
        assert_eq!(tracker.completed(), 0);
    }

    #[test]
    fn test_not_complete_before_total() {
        let mut tracker = CompletionTracker::new(2);
        tracker.complete_one();
        assert!(!tracker.is_complete());
    }
}
