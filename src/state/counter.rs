//! One-shot count-up for `.stat-number` elements.
//!
//! Only texts carrying a `%` or `+` marker animate. The first run of ASCII
//! digits is the target. Each tick adds `target / steps` to a float
//! accumulator; the tick that reaches or passes the target clamps to it and
//! ends the run, so the last frame is always the exact target.

use std::ops::ControlFlow;
use std::rc::Rc;

use crate::config::SiteConfig;
use crate::util::dom::ElementPort;
use crate::util::timers::Scheduler;

pub const STAT_SELECTOR: &str = ".stat-number";

#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    goal: f64,
    has_percent: bool,
    has_plus: bool,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    /// Build an animation for `text`, or `None` when it should stay static:
    /// no marker, or no digit run that fits in a `u64`.
    pub fn parse(text: &str, steps: u32) -> Option<Self> {
        let has_percent = text.contains('%');
        let has_plus = text.contains('+');
        if !has_percent && !has_plus {
            return None;
        }
        let target = leading_integer(text)?;
        #[allow(clippy::cast_precision_loss)]
        let goal = target as f64;
        Some(Self {
            target,
            goal,
            has_percent,
            has_plus,
            increment: goal / f64::from(steps.max(1)),
            current: 0.0,
            finished: false,
        })
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Text for the current accumulator value: floored, then `%`, then `+`.
    pub fn render(&self) -> String {
        let mut out = format!("{:.0}", self.current.floor());
        if self.has_percent {
            out.push('%');
        }
        if self.has_plus {
            out.push('+');
        }
        out
    }

    /// Advance one tick and return the frame to display.
    pub fn tick(&mut self) -> String {
        if !self.finished {
            self.current += self.increment;
            if self.current >= self.goal {
                self.current = self.goal;
                self.finished = true;
            }
        }
        self.render()
    }
}

/// First run of ASCII digits in `text`, if it fits in a `u64`.
pub fn leading_integer(text: &str) -> Option<u64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits = &text[start..];
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// Start counting `element` up from zero. Returns false when its text does
/// not qualify, in which case nothing is scheduled.
pub fn animate<E, K>(config: &SiteConfig, element: Rc<E>, scheduler: &K) -> bool
where
    E: ElementPort + 'static,
    K: Scheduler,
{
    let Some(mut animation) = CounterAnimation::parse(&element.text(), config.counter_steps) else {
        return false;
    };
    scheduler.repeat(
        config.counter_period_ms(),
        Box::new(move || {
            element.set_text(&animation.tick());
            if animation.is_finished() { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
        }),
    );
    true
}

/// What the stat observer does with one intersection entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatEntry {
    /// Not visible yet; keep watching.
    Ignore,
    /// First sighting. The element is done whether or not it animated.
    Unobserve { animated: bool },
}

impl StatEntry {
    pub fn unobserves(self) -> bool {
        matches!(self, Self::Unobserve { .. })
    }
}

/// Handle a stat element crossing the visibility threshold.
pub fn on_stat_intersection<E, K>(config: &SiteConfig, element: Rc<E>, is_intersecting: bool, scheduler: &K) -> StatEntry
where
    E: ElementPort + 'static,
    K: Scheduler,
{
    if !is_intersecting {
        return StatEntry::Ignore;
    }
    StatEntry::Unobserve { animated: animate(config, element, scheduler) }
}

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;
