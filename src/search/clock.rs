//! Turn clock and deadline polling
//!
//! There is no preemption: the search polls [`Deadline::check`] on entry to
//! every recursive call and unwinds with [`SearchTimeout`] once the time left
//! drops below the configured threshold.

use std::time::{Duration, Instant};

use thiserror::Error;

/// Cancellation signal raised when the deadline is crossed.
///
/// Propagated with `?` through every search frame; only the driver catches it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("search deadline reached")]
pub struct SearchTimeout;

/// Source of "time remaining in this turn".
pub trait TimeLeft {
    fn time_left(&mut self) -> Duration;
}

impl<F> TimeLeft for F
where
    F: FnMut() -> Duration,
{
    #[inline]
    fn time_left(&mut self) -> Duration {
        self()
    }
}

/// Wall-clock budget starting at construction.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    start: Instant,
    budget: Duration,
}

impl Countdown {
    pub fn new(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }
}

impl TimeLeft for Countdown {
    #[inline]
    fn time_left(&mut self) -> Duration {
        self.budget.saturating_sub(self.start.elapsed())
    }
}

/// Clock that never runs out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl TimeLeft for Unbounded {
    #[inline]
    fn time_left(&mut self) -> Duration {
        Duration::MAX
    }
}

/// A clock paired with the minimum time that must remain for search to go on.
#[derive(Debug)]
pub struct Deadline<C> {
    clock: C,
    threshold: Duration,
    polls: u64,
}

impl<C: TimeLeft> Deadline<C> {
    pub fn new(clock: C, threshold: Duration) -> Self {
        Self {
            clock,
            threshold,
            polls: 0,
        }
    }

    /// Fail with [`SearchTimeout`] if less than `threshold` remains.
    #[inline]
    pub fn check(&mut self) -> Result<(), SearchTimeout> {
        self.polls += 1;
        if self.clock.time_left() < self.threshold {
            Err(SearchTimeout)
        } else {
            Ok(())
        }
    }

    /// Number of times the clock has been polled
    pub fn polls(&self) -> u64 {
        self.polls
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_never_times_out() {
        let mut deadline = Deadline::new(Unbounded, Duration::from_millis(10));
        for _ in 0..100 {
            assert_eq!(deadline.check(), Ok(()));
        }
        assert_eq!(deadline.polls(), 100);
    }

    #[test]
    fn test_below_threshold_times_out() {
        let mut deadline = Deadline::new(|| Duration::from_millis(5), Duration::from_millis(10));
        assert_eq!(deadline.check(), Err(SearchTimeout));
    }

    #[test]
    fn test_exactly_threshold_continues() {
        let mut deadline = Deadline::new(|| Duration::from_millis(10), Duration::from_millis(10));
        assert_eq!(deadline.check(), Ok(()));
    }

    #[test]
    fn test_closure_clock_is_polled_each_check() {
        let mut remaining = 30u64;
        let mut deadline = Deadline::new(
            move || {
                remaining = remaining.saturating_sub(10);
                Duration::from_millis(remaining)
            },
            Duration::from_millis(10),
        );
        assert!(deadline.check().is_ok()); // 20ms left
        assert!(deadline.check().is_ok()); // 10ms left
        assert!(deadline.check().is_err()); // 0ms left
    }

    #[test]
    fn test_countdown_expires() {
        let mut clock = Countdown::new(Duration::ZERO);
        assert_eq!(clock.time_left(), Duration::ZERO);

        let mut clock = Countdown::new(Duration::from_secs(3600));
        assert!(clock.time_left() > Duration::from_secs(3500));
    }
}
