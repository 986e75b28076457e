// crates/leon-core/src/timer.rs
// Repeating timer contract for autoplay, plus a manually driven timer

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// A single repeating timer owned by one carousel.
///
/// `schedule` replaces any previous schedule, so an implementation never has
/// more than one live timer. Firing is delivered by the host calling
/// [`Carousel::tick`](crate::Carousel::tick).
pub trait Timer {
    fn schedule(&mut self, every: Duration);
    fn cancel(&mut self);
    fn is_scheduled(&self) -> bool;
}

#[derive(Debug, Default)]
struct ManualTimerState {
    every: Option<Duration>,
    elapsed: Duration,
    scheduled: usize,
    cancelled: usize,
}

/// Timer driven by explicit [`ManualTimer::advance`] calls.
///
/// Clones share state, so a test can keep a handle while the carousel owns
/// the timer.
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    state: Rc<RefCell<ManualTimerState>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let `by` pass and return how many firings fell due.
    pub fn advance(&self, by: Duration) -> u32 {
        let mut state = self.state.borrow_mut();
        let Some(every) = state.every else {
            return 0;
        };
        let before = state.elapsed;
        state.elapsed += by;
        let period = every.as_millis().max(1);
        let fired = state.elapsed.as_millis() / period - before.as_millis() / period;
        u32::try_from(fired).unwrap_or(u32::MAX)
    }

    /// Number of timers scheduled and not yet cancelled or replaced
    pub fn live_count(&self) -> usize {
        let state = self.state.borrow();
        state.scheduled - state.cancelled
    }

    /// Total number of `schedule` calls so far
    pub fn schedule_count(&self) -> usize {
        self.state.borrow().scheduled
    }

    pub fn period(&self) -> Option<Duration> {
        self.state.borrow().every
    }
}

impl Timer for ManualTimer {
    fn schedule(&mut self, every: Duration) {
        let mut state = self.state.borrow_mut();
        if state.every.is_some() {
            state.cancelled += 1;
        }
        state.every = Some(every);
        state.elapsed = Duration::ZERO;
        state.scheduled += 1;
    }

    fn cancel(&mut self) {
        let mut state = self.state.borrow_mut();
        if state.every.take().is_some() {
            state.cancelled += 1;
        }
        state.elapsed = Duration::ZERO;
    }

    fn is_scheduled(&self) -> bool {
        self.state.borrow().every.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscheduled_timer_never_fires() {
        let timer = ManualTimer::new();
        assert_eq!(timer.advance(Duration::from_secs(60)), 0);
        assert_eq!(timer.live_count(), 0);
    }

    #[test]
    fn test_fires_once_per_period() {
        let mut timer = ManualTimer::new();
        timer.schedule(Duration::from_millis(1000));
        assert_eq!(timer.advance(Duration::from_millis(999)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
        assert_eq!(timer.advance(Duration::from_millis(2500)), 2);
    }

    #[test]
    fn test_reschedule_replaces_and_restarts_period() {
        let mut timer = ManualTimer::new();
        timer.schedule(Duration::from_millis(1000));
        timer.advance(Duration::from_millis(900));
        timer.schedule(Duration::from_millis(1000));
        assert_eq!(timer.live_count(), 1);
        assert_eq!(timer.advance(Duration::from_millis(900)), 0);
        assert_eq!(timer.schedule_count(), 2);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut timer = ManualTimer::new();
        timer.schedule(Duration::from_millis(10));
        timer.cancel();
        timer.cancel();
        assert_eq!(timer.live_count(), 0);
        assert!(!timer.is_scheduled());
        assert_eq!(timer.advance(Duration::from_millis(100)), 0);
    }
}
