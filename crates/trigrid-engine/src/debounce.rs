//! Trailing debounce as a pure state machine.
//!
//! "Schedule a trailing call after D ms; a new call within D ms cancels
//! and reschedules." No timers or threads: callers feed epoch milliseconds
//! and poll for the value once the window has elapsed, which keeps burst
//! behavior fully deterministic under test.

/// Matches the fixed delay the upstream grid used for filter and search
/// input bursts.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending<T> {
    value: T,
    deadline_ms: u64,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Replace any pending value and restart the window. Last call wins.
    pub fn schedule(&mut self, value: T, now_ms: u64) {
        self.pending = Some(Pending {
            value,
            deadline_ms: now_ms.saturating_add(self.delay_ms),
        });
    }

    /// Take the pending value once its window has elapsed with no newer
    /// call. Returns `None` while the window is still open or nothing is
    /// scheduled.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now_ms >= pending.deadline_ms);
        if !due {
            return None;
        }
        self.pending.take().map(|pending| pending.value)
    }

    /// Drop the pending call, if any. Returns whether one was dropped.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn deadline_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|pending| pending.deadline_ms)
    }

    #[must_use]
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}
