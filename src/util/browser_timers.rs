//! `gloo-timers` implementation of the scheduler port.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};

use crate::util::timers::{RepeatTask, Scheduler, Task};

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Task) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn cancel(&self, handle: Timeout) {
        // Dropping a gloo timeout clears it.
        drop(handle);
    }

    fn schedule_detached(&self, delay_ms: u32, task: Task) {
        Timeout::new(delay_ms, task).forget();
    }

    fn repeat(&self, period_ms: u32, mut task: RepeatTask) {
        let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let slot_for_cb = Rc::clone(&slot);
        let interval = Interval::new(period_ms, move || {
            if let ControlFlow::Break(()) = task() {
                // An interval cannot be dropped from inside its own callback.
                if let Some(finished) = slot_for_cb.borrow_mut().take() {
                    Timeout::new(0, move || drop(finished)).forget();
                }
            }
        });
        *slot.borrow_mut() = Some(interval);
    }
}
