//! Timer port used by every delayed or repeating behavior.
//!
//! The browser build backs this with `gloo-timers` (`util::browser_timers`);
//! tests drive a virtual clock through [`manual::ManualScheduler`].

use std::ops::ControlFlow;

pub type Task = Box<dyn FnOnce()>;
pub type RepeatTask = Box<dyn FnMut() -> ControlFlow<()>>;

pub trait Scheduler {
    /// Identifies a pending timeout so it can be cancelled.
    type Handle;

    /// Run `task` once after `delay_ms`.
    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle;

    /// Cancel a pending timeout. Cancelling a fired timeout is a no-op.
    fn cancel(&self, handle: Self::Handle);

    /// Run `task` once after `delay_ms` with no way to cancel it.
    fn schedule_detached(&self, delay_ms: u32, task: Task);

    /// Run `task` every `period_ms` until it returns `ControlFlow::Break`.
    fn repeat(&self, period_ms: u32, task: RepeatTask);
}


#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;
