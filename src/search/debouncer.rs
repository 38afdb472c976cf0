use std::time::{Duration, Instant};

/// Single-slot debounce timer.
///
/// Holds at most one pending deadline; scheduling again replaces it, so only
/// the last schedule within a window survives. The caller supplies `now`
/// explicitly, which keeps the timer deterministic under test.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            deadline: None,
        }
    }

    /// Start (or restart) the window; any previous deadline is discarded
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending deadline, if any
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has elapsed. Returns true at most once
    /// per schedule.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Pending deadline, for event-loop poll timeout sizing
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
