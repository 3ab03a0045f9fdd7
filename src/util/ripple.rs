//! Ripple feedback on `.btn` activation.
//!
//! A ripple is a `span.ripple` sized to the larger side of the control,
//! centred on the pointer, appended to the control and removed after the
//! configured lifetime.

use crate::config::SiteConfig;
use crate::util::timers::Scheduler;

pub const BUTTON_SELECTOR: &str = ".btn";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// Position relative to the control for a pointer at viewport `(x, y)`.
    pub fn compute(rect: Rect, x: f64, y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self { size, left: x - rect.left - size / 2.0, top: y - rect.top - size / 2.0 }
    }

    /// Inline style pairs for the ripple element.
    pub fn styles(&self) -> [(&'static str, String); 4] {
        [
            ("width", format!("{}px", self.size)),
            ("height", format!("{}px", self.size)),
            ("left", format!("{}px", self.left)),
            ("top", format!("{}px", self.top)),
        ]
    }
}

/// A control that can hold transient ripple children.
pub trait RippleHost {
    type Ripple: 'static;

    fn bounding_rect(&self) -> Rect;
    fn label(&self) -> String;
    fn insert_ripple(&self, class: &str, geometry: &RippleGeometry) -> Option<Self::Ripple>;
    fn remove_ripple(ripple: &Self::Ripple);
}

/// Spawn a ripple at `(x, y)` and schedule its removal.
pub fn activate<H, K>(config: &SiteConfig, host: &H, x: f64, y: f64, scheduler: &K) -> Option<RippleGeometry>
where
    H: RippleHost + 'static,
    K: Scheduler,
{
    let geometry = RippleGeometry::compute(host.bounding_rect(), x, y);
    leptos::logging::log!("Button clicked: {}", host.label());

    let ripple = host.insert_ripple(&config.ripple_class, &geometry)?;
    scheduler.schedule_detached(config.ripple_lifetime_ms, Box::new(move || H::remove_ripple(&ripple)));
    Some(geometry)
}

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;
