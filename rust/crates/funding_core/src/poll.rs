//! Refresh-on-mount plus periodic polling.
//!
//! [`Polling`] runs its tick once immediately and then on every timer
//! period until it is stopped or dropped. Dropping the timer handle must
//! cancel the timer; `gloo_timers::callback::Interval` does exactly that.

/// A repeating timer.
pub trait IntervalTimer {
    /// Cancels the timer when dropped.
    type Handle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// An active polling loop. Stops when [`Polling::stop`] is called or it is dropped.
pub struct Polling<H> {
    handle: Option<H>,
}

impl<H> Polling<H> {
    /// Tick now, then every `period_ms`.
    pub fn start<T>(timer: &T, period_ms: u32, mut tick: impl FnMut() + 'static) -> Self
    where
        T: IntervalTimer<Handle = H>,
    {
        tick();
        let handle = timer.every(period_ms, Box::new(tick));
        Self {
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Cancel the timer. Ticks already running are not interrupted.
    pub fn stop(&mut self) {
        self.handle.take();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::IntervalTimer;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Slot {
        period_ms: u32,
        elapsed_ms: u32,
        active: Rc<Cell<bool>>,
        tick: Box<dyn FnMut()>,
    }

    /// Timer driven by hand through [`ManualTimer::advance`].
    #[derive(Default)]
    pub struct ManualTimer {
        slots: RefCell<Vec<Slot>>,
    }

    /// Deactivates its slot on drop.
    pub struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(false);
        }
    }

    impl ManualTimer {
        /// Move the clock forward, firing every live timer that comes due.
        pub fn advance(&self, ms: u32) {
            for slot in self.slots.borrow_mut().iter_mut() {
                if !slot.active.get() {
                    continue;
                }
                slot.elapsed_ms += ms;
                while slot.elapsed_ms >= slot.period_ms && slot.active.get() {
                    slot.elapsed_ms -= slot.period_ms;
                    (slot.tick)();
                }
            }
        }
    }

    impl IntervalTimer for ManualTimer {
        type Handle = ManualHandle;

        fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> ManualHandle {
            let active = Rc::new(Cell::new(true));
            self.slots.borrow_mut().push(Slot {
                period_ms,
                elapsed_ms: 0,
                active: active.clone(),
                tick,
            });
            ManualHandle(active)
        }
    }
}
