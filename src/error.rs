//! Error type shared by the browser glue.
//!
//! None of these ever reach the user: the page controller logs them and
//! skips the behavior that failed to install.

#[derive(Debug, thiserror::Error)]
pub enum InteractionError {
    /// A required element is not on the page.
    #[error("missing element: {selector}")]
    MissingElement { selector: String },

    /// The browser rejected a DOM or observer call.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl InteractionError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement { selector: selector.into() }
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for InteractionError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
