//! Browser interval timer.

use funding_core::IntervalTimer;
use gloo_timers::callback::Interval;

/// `setInterval` via `gloo-timers`; dropping the handle clears it.
pub struct GlooTimer;

impl IntervalTimer for GlooTimer {
    type Handle = Interval;

    fn every(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, move || tick())
    }
}
