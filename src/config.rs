//! Page interaction tunables.
//!
//! Every constant the controllers use lives on [`SiteConfig`]; the page
//! markup and stylesheet are written against the defaults below.

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub storage_key: String,
    pub light_class: String,
    pub active_class: String,
    pub menu_open_class: String,
    pub scrolled_class: String,
    pub ripple_class: String,

    pub header_threshold_px: f64,
    pub header_offset_px: f64,
    pub nav_breakpoint_px: f64,
    pub resize_debounce_ms: u32,
    pub rotation_feedback_ms: u32,
    pub ripple_lifetime_ms: u32,

    pub counter_duration_ms: u32,
    pub counter_steps: u32,
    pub stat_threshold: f64,

    pub reveal: RevealConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub offset_px: f64,
    pub transition: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            light_class: "light-mode".to_owned(),
            active_class: "active".to_owned(),
            menu_open_class: "menu-open".to_owned(),
            scrolled_class: "scrolled".to_owned(),
            ripple_class: "ripple".to_owned(),
            header_threshold_px: 50.0,
            header_offset_px: 80.0,
            nav_breakpoint_px: 768.0,
            resize_debounce_ms: 250,
            rotation_feedback_ms: 400,
            ripple_lifetime_ms: 600,
            counter_duration_ms: 2000,
            counter_steps: 60,
            stat_threshold: 0.5,
            reveal: RevealConfig::default(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_owned(),
            offset_px: 30.0,
            transition: "opacity 0.6s ease, transform 0.6s ease".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Interval period for one counter step, truncated to whole milliseconds.
    pub fn counter_period_ms(&self) -> u32 {
        self.counter_duration_ms / self.counter_steps.max(1)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
