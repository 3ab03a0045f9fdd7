//! Console welcome banner printed once the page is wired.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerLine {
    pub text: &'static str,
    pub style: &'static str,
}

pub const WELCOME_BANNER: [BannerLine; 3] = [
    BannerLine { text: "NeuralFlow AI", style: "color: #00D9FF; font-size: 24px; font-weight: bold;" },
    BannerLine { text: "Advanced AI & Automation Solutions", style: "color: #A8B2C1; font-size: 14px;" },
    BannerLine { text: "Website loaded successfully", style: "color: #00FF00; font-size: 12px;" },
];

/// Print the banner. Browser consoles get the styled `%c` form.
pub fn print() {
    for line in WELCOME_BANNER {
        #[cfg(feature = "hydrate")]
        {
            web_sys::console::log_2(&format!("%c {}", line.text).into(), &line.style.into());
        }
        #[cfg(not(feature = "hydrate"))]
        {
            leptos::logging::log!("{}", line.text);
        }
    }
}

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;
