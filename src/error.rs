//! Error type shared by configuration loading and DOM bindings.
//!
//! Missing page elements are not errors: mount functions report them as
//! `Ok(None)` and the feature is skipped. `FxError` covers what remains,
//! failing DOM calls and a malformed configuration block.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors raised while configuring or mounting page effects.
#[derive(Debug, thiserror::Error)]
pub enum FxError {
    /// No `window` or `document` is available (not running in a browser).
    #[error("no browser {0} available")]
    NoBrowser(&'static str),
    /// A DOM call threw; the payload is the stringified JS exception.
    #[error("dom call failed: {0}")]
    Dom(String),
    /// A JS value did not have the expected type.
    #[error("expected {expected}")]
    Cast { expected: &'static str },
    /// The configuration block is not valid JSON for [`crate::config::FxConfig`].
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Log a handler error instead of surfacing it to the page.
///
/// Event handlers have nowhere to return an error to, so they report here.
pub fn report(context: &str, result: Result<(), FxError>) {
    if let Err(err) = result {
        log::warn!("{context}: {err}");
    }
}
