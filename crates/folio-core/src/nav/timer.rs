//! Cancellable deadline timers.
//!
//! Suppression expiry and the settle debounce are both last-write-wins:
//! re-arming replaces the pending deadline, it never stacks a second one.
//! The timer holds a deadline, not a task; whoever owns it decides when
//! to pump `fire`.

/// A single re-armable deadline in caller-supplied millisecond time.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeadlineTimer {
    deadline: Option<u64>,
}

impl DeadlineTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the timer. An already-pending deadline is replaced.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(delay_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns true exactly once when `now_ms` has reached the armed
    /// deadline; stale wakeups from superseded arms report false.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_deadline() {
        let mut timer = DeadlineTimer::new();
        timer.arm(1_000, 400);

        assert!(!timer.fire(1_399));
        assert!(timer.fire(1_400));
        assert!(!timer.fire(1_401));
        assert!(!timer.is_armed());
    }

    #[test]
    fn rearm_is_last_write_wins() {
        let mut timer = DeadlineTimer::new();
        timer.arm(1_000, 400);
        timer.arm(1_200, 400);

        // The original deadline no longer fires.
        assert!(!timer.fire(1_400));
        assert!(timer.fire(1_600));
    }

    #[test]
    fn cancel_clears_pending_deadline() {
        let mut timer = DeadlineTimer::new();
        timer.arm(0, 100);
        timer.cancel();
        assert!(!timer.fire(10_000));
    }

    #[test]
    fn unarmed_timer_never_fires() {
        let mut timer = DeadlineTimer::new();
        assert!(!timer.fire(u64::MAX));
    }
}
