//! Poll-driven timer primitives.
//!
//! The engine never sleeps. Both primitives are plain state machines over
//! [`Instant`]: the event loop asks for [`ClockTimer::next_due`] /
//! [`DeferredAction::next_due`], sleeps until the earliest deadline, then
//! polls with the current instant. This keeps every timing behaviour
//! synchronous and testable with hand-picked instants.

use std::time::{Duration, Instant};

/// A repeating timer that fires at most once per poll.
///
/// Rescheduling is anchored to the poll instant, so a late poll fires
/// once and the cadence shifts; missed ticks are not replayed.
#[derive(Clone, Debug, Default)]
pub struct ClockTimer {
    period: Option<Duration>,
    next_due: Option<Instant>,
}

impl ClockTimer {
    /// A stopped timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the timer; the first firing is one `period` after `now`.
    ///
    /// Starting an already running timer restarts it.
    pub fn start(&mut self, now: Instant, period: Duration) {
        self.period = Some(period);
        self.next_due = Some(now + period);
    }

    /// Stops the timer. Idempotent.
    pub fn stop(&mut self) {
        self.period = None;
        self.next_due = None;
    }

    /// True while the timer is running.
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Fires if the deadline has passed, rescheduling from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match (self.next_due, self.period) {
            (Some(due), Some(period)) if now >= due => {
                self.next_due = Some(now + period);
                true
            }
            _ => false,
        }
    }

    /// The next firing instant, if running.
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }
}

/// A cancellable one-shot action deadline.
///
/// Scheduling replaces any pending deadline, which is exactly the
/// debounce a burst of resize events needs: only the last one fires.
#[derive(Clone, Debug, Default)]
pub struct DeferredAction {
    due: Option<Instant>,
}

impl DeferredAction {
    /// An idle action.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the action for `due`, replacing any pending deadline.
    pub fn schedule(&mut self, due: Instant) {
        self.due = Some(due);
    }

    /// Disarms the action. Idempotent.
    pub fn cancel(&mut self) {
        self.due = None;
    }

    /// True while a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Fires once if the deadline has passed, then disarms.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    /// The pending deadline, if armed.
    pub fn next_due(&self) -> Option<Instant> {
        self.due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_clock_fires_once_per_period() {
        let t0 = Instant::now();
        let mut clock = ClockTimer::new();
        clock.start(t0, SECOND);

        assert!(!clock.poll(t0));
        assert!(!clock.poll(t0 + Duration::from_millis(999)));
        assert!(clock.poll(t0 + SECOND));
        // Immediately after firing the next deadline is a full period away
        assert!(!clock.poll(t0 + SECOND));
        assert_eq!(clock.next_due(), Some(t0 + SECOND + SECOND));
    }

    #[test]
    fn test_clock_late_poll_fires_once_without_catchup() {
        let t0 = Instant::now();
        let mut clock = ClockTimer::new();
        clock.start(t0, SECOND);

        // Three periods elapse unobserved; only one firing results
        let late = t0 + Duration::from_secs(3);
        assert!(clock.poll(late));
        assert!(!clock.poll(late));
        assert_eq!(clock.next_due(), Some(late + SECOND));
    }

    #[test]
    fn test_clock_stop_is_idempotent() {
        let t0 = Instant::now();
        let mut clock = ClockTimer::new();
        clock.start(t0, SECOND);
        assert!(clock.is_running());

        clock.stop();
        clock.stop();
        assert!(!clock.is_running());
        assert!(!clock.poll(t0 + Duration::from_secs(10)));
        assert_eq!(clock.next_due(), None);
    }

    #[test]
    fn test_deferred_schedule_replaces_pending() {
        let t0 = Instant::now();
        let mut action = DeferredAction::new();
        action.schedule(t0 + Duration::from_millis(100));
        // A second schedule within the window pushes the deadline out
        action.schedule(t0 + Duration::from_millis(150));

        assert!(!action.poll(t0 + Duration::from_millis(100)));
        assert!(action.poll(t0 + Duration::from_millis(150)));
        // One-shot: fired and disarmed
        assert!(!action.poll(t0 + Duration::from_millis(200)));
        assert!(!action.is_pending());
    }

    #[test]
    fn test_deferred_cancel_disarms() {
        let t0 = Instant::now();
        let mut action = DeferredAction::new();
        action.schedule(t0 + Duration::from_millis(100));
        action.cancel();

        assert!(!action.is_pending());
        assert!(!action.poll(t0 + Duration::from_secs(1)));
        action.cancel();
    }

    #[test]
    fn test_deferred_next_due() {
        let t0 = Instant::now();
        let mut action = DeferredAction::new();
        assert_eq!(action.next_due(), None);
        action.schedule(t0 + SECOND);
        assert_eq!(action.next_due(), Some(t0 + SECOND));
    }
}
