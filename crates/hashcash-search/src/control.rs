//! Cooperative cancellation for long-running searches.
//!
//! The searcher polls a [`SearchControl`] every `check_interval` candidates.
//! There is no upper bound on how long a search takes, so callers that care
//! should pass a token, a deadline, or both.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How many candidates are evaluated between control checks by default.
pub const DEFAULT_CHECK_INTERVAL: u64 = 4096;

/// A cloneable flag that stops a search from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Stop conditions for a search.
#[derive(Debug, Clone)]
pub struct SearchControl {
    cancel: Option<CancellationToken>,
    deadline: Option<Instant>,
    check_interval: u64,
}

impl SearchControl {
    /// No token, no deadline: the search runs until it succeeds or exhausts
    /// the length limit.
    pub fn unbounded() -> Self {
        Self {
            cancel: None,
            deadline: None,
            check_interval: DEFAULT_CHECK_INTERVAL,
        }
    }

    pub fn with_cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        let deadline = Instant::now() + timeout;
        self.with_deadline(deadline)
    }

    /// Set the polling stride. Zero is treated as one.
    pub fn with_check_interval(mut self, every: u64) -> Self {
        self.check_interval = every.max(1);
        self
    }

    pub fn check_interval(&self) -> u64 {
        self.check_interval
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the search should stop now.
    pub fn should_stop(&self) -> bool {
        if self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled) {
            return true;
        }
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

impl Default for SearchControl {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shared_between_clones() {
        let token = CancellationToken::new();
        let other = token.clone();
        assert!(!other.is_cancelled());
        token.cancel();
        assert!(other.is_cancelled());
    }

    #[test]
    fn test_unbounded_never_stops() {
        assert!(!SearchControl::unbounded().should_stop());
    }

    #[test]
    fn test_cancelled_token_stops() {
        let token = CancellationToken::new();
        let control = SearchControl::unbounded().with_cancel(token.clone());
        assert!(!control.should_stop());
        token.cancel();
        assert!(control.should_stop());
    }

    #[test]
    fn test_past_deadline_stops() {
        let control = SearchControl::unbounded().with_deadline(Instant::now());
        assert!(control.should_stop());

        let later = SearchControl::unbounded().with_timeout(Duration::from_secs(3600));
        assert!(!later.should_stop());
    }

    #[test]
    fn test_check_interval_floor() {
        assert_eq!(SearchControl::unbounded().check_interval(), DEFAULT_CHECK_INTERVAL);
        assert_eq!(SearchControl::unbounded().with_check_interval(0).check_interval(), 1);
    }
}
