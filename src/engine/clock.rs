//! Fixed-interval tick scheduling for the event loop.

use web_time::{Duration, Instant};

/// Most ticks run for a single wake-up. A window that stalled for longer
/// resumes from the present instead of replaying the backlog.
pub const MAX_CATCH_UP_TICKS: u32 = 5;

/// Counts whole tick intervals elapsed between wake-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickClock {
    interval: Duration,
    next_deadline: Instant,
}

impl TickClock {
    /// Clock whose first tick falls one `interval` after `now`.
    ///
    /// A zero interval is treated as one millisecond.
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval,
            next_deadline: now + interval,
        }
    }

    /// Interval between ticks.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Instant the event loop should next wake at.
    #[must_use]
    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }

    /// Number of ticks to run now, advancing the deadline past them.
    pub fn ticks_due(&mut self, now: Instant) -> u32 {
        if now < self.next_deadline {
            return 0;
        }
        let overdue = now.duration_since(self.next_deadline);
        let elapsed = overdue.as_nanos() / self.interval.as_nanos() + 1;

        if elapsed > u128::from(MAX_CATCH_UP_TICKS) {
            log::debug!(
                "tick clock behind by {elapsed} ticks, dropping {}",
                elapsed - u128::from(MAX_CATCH_UP_TICKS)
            );
            self.next_deadline = now + self.interval;
            return MAX_CATCH_UP_TICKS;
        }

        let ticks = elapsed as u32;
        self.next_deadline += self.interval * ticks;
        ticks
    }
}
