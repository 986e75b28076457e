// crates/leon-app/src/timer.rs
// Browser interval timer for carousel autoplay

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Interval;
use leon_core::Timer;

/// `setInterval`-backed timer. Dropping the held `Interval` clears it.
pub struct IntervalTimer {
    on_tick: Rc<dyn Fn()>,
    interval: Option<Interval>,
}

impl IntervalTimer {
    pub fn new(on_tick: impl Fn() + 'static) -> Self {
        Self {
            on_tick: Rc::new(on_tick),
            interval: None,
        }
    }
}

impl std::fmt::Debug for IntervalTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalTimer")
            .field("scheduled", &self.interval.is_some())
            .finish()
    }
}

/// Delay in the range `setInterval` accepts. Anything past `i32::MAX` would
/// wrap to a zero or negative delay inside the browser.
fn interval_millis(every: Duration) -> Option<u32> {
    i32::try_from(every.as_millis())
        .ok()
        .map(i32::unsigned_abs)
}

impl Timer for IntervalTimer {
    fn schedule(&mut self, every: Duration) {
        let Some(millis) = interval_millis(every) else {
            log::error!(
                "Autoplay delay of {}ms is too long, not scheduling",
                every.as_millis()
            );
            self.interval = None;
            return;
        };
        let on_tick = self.on_tick.clone();
        // Must never run from inside this timer's own callback: replacing
        // the Interval drops the closure that is executing.
        self.interval = Some(Interval::new(millis, move || on_tick()));
    }

    fn cancel(&mut self) {
        self.interval = None;
    }

    fn is_scheduled(&self) -> bool {
        self.interval.is_some()
    }
}
