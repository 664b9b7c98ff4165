//! One-shot delayed callbacks, tick-polled.
//!
//! The shell's only concurrency primitive. A timer holds at most one
//! deadline; arming always replaces whatever was pending, cancelling is
//! idempotent, and `poll` reports expiry at most once per arming. Callers
//! supply the clock -- the library never reads wall time.

/// A single replaceable one-shot deadline.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OneShotTimer {
    deadline_ms: Option<u64>,
}

impl OneShotTimer {
    /// Create a disarmed timer.
    pub fn new() -> Self {
        Self { deadline_ms: None }
    }

    /// Arm the timer to fire `delay_ms` from `now_ms`.
    ///
    /// Last start wins: any previously pending deadline is dropped.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(delay_ms));
    }

    /// Drop any pending deadline. A no-op when already disarmed or fired.
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    /// Whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Check for expiry. Returns `true` exactly once per arming, at the
    /// first poll at or past the deadline, and disarms the timer.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_at_deadline() {
        let mut t = OneShotTimer::new();
        t.arm(1_000, 500);
        assert!(!t.poll(1_499));
        assert!(t.poll(1_500));
        assert!(!t.is_armed());
    }

    #[test]
    fn fires_at_most_once() {
        let mut t = OneShotTimer::new();
        t.arm(0, 100);
        assert!(t.poll(100));
        assert!(!t.poll(200));
        assert!(!t.poll(10_000));
    }

    #[test]
    fn arm_replaces_pending_deadline() {
        let mut t = OneShotTimer::new();
        t.arm(0, 100);
        t.arm(0, 1_000);
        // The original 100ms deadline is gone.
        assert!(!t.poll(500));
        assert!(t.poll(1_000));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut t = OneShotTimer::new();
        t.arm(0, 100);
        t.cancel();
        t.cancel();
        assert!(!t.is_armed());
        assert!(!t.poll(100));
    }

    #[test]
    fn cancel_after_fire_is_noop() {
        let mut t = OneShotTimer::new();
        t.arm(0, 100);
        assert!(t.poll(100));
        t.cancel();
        assert!(!t.is_armed());
    }

    #[test]
    fn deadline_saturates_instead_of_overflowing() {
        let mut t = OneShotTimer::new();
        t.arm(u64::MAX - 10, 100);
        assert!(!t.poll(u64::MAX - 1));
        assert!(t.poll(u64::MAX));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn never_fires_before_deadline(now in 0u64..1_000_000, delay in 1u64..100_000) {
                let mut t = OneShotTimer::new();
                t.arm(now, delay);
                prop_assert!(!t.poll(now + delay - 1));
                prop_assert!(t.is_armed());
            }

            #[test]
            fn at_most_one_fire_per_arming(
                now in 0u64..1_000_000,
                delay in 0u64..100_000,
                polls in proptest::collection::vec(0u64..2_000_000, 1..20),
            ) {
                let mut t = OneShotTimer::new();
                t.arm(now, delay);
                let fired = polls.iter().filter(|&&p| t.poll(p)).count();
                prop_assert!(fired <= 1);
            }

            #[test]
            fn rearm_always_uses_latest_deadline(
                delays in proptest::collection::vec(1u64..100_000, 2..10),
            ) {
                let mut t = OneShotTimer::new();
                for &d in &delays {
                    t.arm(0, d);
                }
                let last = *delays.last().unwrap();
                prop_assert!(!t.poll(last - 1));
                prop_assert!(t.poll(last));
            }
        }
    }
}
