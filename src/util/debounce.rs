//! Trailing-edge debounce with an explicit pending handle.
//!
//! Every `trigger` cancels whatever is still pending and schedules the new
//! task, so only the last trigger inside the quiet window ever runs.

use std::cell::RefCell;
use std::rc::Rc;

use crate::util::timers::{Scheduler, Task};

pub struct Debouncer<S: Scheduler> {
    scheduler: Rc<S>,
    wait_ms: u32,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: Rc<S>, wait_ms: u32) -> Self {
        Self { scheduler, wait_ms, pending: RefCell::new(None) }
    }

    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// Replace the pending task with `task`, restarting the quiet window.
    pub fn trigger(&self, task: Task) {
        self.cancel();
        let handle = self.scheduler.schedule(self.wait_ms, task);
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending task, if any. The handle may already have fired.
    pub fn cancel(&self) {
        let stale = self.pending.borrow_mut().take();
        if let Some(handle) = stale {
            self.scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;
