//! Runtime configuration for the page effects.
//!
//! Every field defaults to the value in [`crate::consts`]. A page may override
//! any subset through a JSON block:
//!
//! ```html
//! <script type="application/json" id="page-fx-config">
//!   { "autoplay_ms": 6000, "log_level": "debug" }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::FxError;

/// Tunable timings, breakpoints and keys.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    pub narrow_px: f64,
    pub medium_px: f64,
    pub gap_px: f64,
    pub autoplay_ms: u32,
    pub resize_debounce_ms: u32,
    pub initial_render_ms: u32,
    pub popup_visible_ms: u32,
    pub typing_start_delay_ms: u32,
    pub typing_char_ms: u32,
    pub typing_cursor_linger_ms: u32,
    pub scroll_debounce_ms: u32,
    pub reveal_threshold: f64,
    pub nav_collapse_below_px: f64,
    pub storage_key: String,
    pub log_level: LogLevel,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            narrow_px: consts::CAROUSEL_NARROW_PX,
            medium_px: consts::CAROUSEL_MEDIUM_PX,
            gap_px: consts::CAROUSEL_GAP_PX,
            autoplay_ms: consts::CAROUSEL_AUTOPLAY_MS,
            resize_debounce_ms: consts::CAROUSEL_RESIZE_DEBOUNCE_MS,
            initial_render_ms: consts::CAROUSEL_INITIAL_RENDER_MS,
            popup_visible_ms: consts::POPUP_VISIBLE_MS,
            typing_start_delay_ms: consts::TYPING_START_DELAY_MS,
            typing_char_ms: consts::TYPING_CHAR_MS,
            typing_cursor_linger_ms: consts::TYPING_CURSOR_LINGER_MS,
            scroll_debounce_ms: consts::BANNER_SCROLL_DEBOUNCE_MS,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            nav_collapse_below_px: consts::NAV_COLLAPSE_BELOW_PX,
            storage_key: consts::DARK_MODE_STORAGE_KEY.to_owned(),
            log_level: LogLevel::default(),
        }
    }
}

impl FxConfig {
    /// Parse a configuration block. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Config`] if `raw` is not a valid configuration object.
    pub fn from_json(raw: &str) -> Result<Self, FxError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Carousel breakpoints derived from this configuration.
    #[must_use]
    pub fn breakpoints(&self) -> crate::carousel::Breakpoints {
        crate::carousel::Breakpoints { narrow: self.narrow_px, medium: self.medium_px }
    }
}

/// Console log verbosity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}
