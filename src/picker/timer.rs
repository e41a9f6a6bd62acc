//! Idle-reset timer and the clock it reads.
//!
//! The timer is a plain deadline owned by the picker. Nothing runs in the
//! background: the event loop asks for the next deadline, bounds its input
//! poll by it, and calls back into the picker on the same thread. A key
//! event and a timer expiry therefore never overlap.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Default idle period after the last digit before the buffer resets.
pub const DEFAULT_IDLE_RESET: Duration = Duration::from_millis(1000);

// =============================================================================
// CLOCK
// =============================================================================

/// Monotonic time source.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by `Instant::now`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self { now: Rc::new(Cell::new(Instant::now())) }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

// =============================================================================
// BUFFER POLICY
// =============================================================================

/// How the digit buffer is reset besides navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferPolicy {
    /// Clear the buffer once this long has passed since the last digit.
    IdleReset(Duration),
    /// Only navigation and focus clear the buffer.
    NavigationOnly,
}

impl BufferPolicy {
    /// Policy for a millisecond setting, where 0 disables the idle reset.
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            BufferPolicy::NavigationOnly
        } else {
            BufferPolicy::IdleReset(Duration::from_millis(ms))
        }
    }

    pub fn idle_timeout(&self) -> Option<Duration> {
        match self {
            BufferPolicy::IdleReset(timeout) => Some(*timeout),
            BufferPolicy::NavigationOnly => None,
        }
    }
}

impl Default for BufferPolicy {
    fn default() -> Self {
        BufferPolicy::IdleReset(DEFAULT_IDLE_RESET)
    }
}

// =============================================================================
// IDLE TIMER
// =============================================================================

/// Single outstanding deadline. Arming again replaces the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdleTimer {
    deadline: Option<Instant>,
}

impl IdleTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the timer to expire `after` from `now`.
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Disarm and report true if the deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let start = clock.now();
        other.advance(Duration::from_millis(250));
        assert_eq!(clock.now() - start, Duration::from_millis(250));
    }

    #[test]
    fn test_policy_from_millis() {
        assert_eq!(BufferPolicy::from_millis(0), BufferPolicy::NavigationOnly);
        assert_eq!(
            BufferPolicy::from_millis(500),
            BufferPolicy::IdleReset(Duration::from_millis(500))
        );
        assert_eq!(BufferPolicy::default().idle_timeout(), Some(DEFAULT_IDLE_RESET));
        assert_eq!(BufferPolicy::NavigationOnly.idle_timeout(), None);
    }

    #[test]
    fn test_timer_fires_once() {
        let clock = ManualClock::new();
        let mut timer = IdleTimer::new();
        timer.arm(clock.now(), Duration::from_millis(1000));

        clock.advance(Duration::from_millis(999));
        assert!(!timer.fire_if_due(clock.now()));

        clock.advance(Duration::from_millis(1));
        assert!(timer.fire_if_due(clock.now()));
        assert!(!timer.is_armed());
        assert!(!timer.fire_if_due(clock.now()));
    }

    #[test]
    fn test_rearm_replaces_deadline() {
        let clock = ManualClock::new();
        let mut timer = IdleTimer::new();
        timer.arm(clock.now(), Duration::from_millis(1000));

        clock.advance(Duration::from_millis(800));
        timer.arm(clock.now(), Duration::from_millis(1000));

        clock.advance(Duration::from_millis(300));
        assert!(!timer.is_due(clock.now()));

        clock.advance(Duration::from_millis(700));
        assert!(timer.is_due(clock.now()));
    }

    #[test]
    fn test_cancel() {
        let clock = ManualClock::new();
        let mut timer = IdleTimer::new();
        timer.arm(clock.now(), Duration::from_millis(10));
        timer.cancel();
        clock.advance(Duration::from_secs(1));
        assert!(!timer.is_due(clock.now()));
        assert_eq!(timer.deadline(), None);
    }
}
