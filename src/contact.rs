//! Contact form confirmation text.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::consts::POPUP_FALLBACK_NAME;

/// Classes added to the popup when it is shown.
pub const POPUP_CLASSES: [&str; 2] = ["popup-confirmacion", "show"];

/// Class removed from the popup once it has been visible long enough.
pub const POPUP_SHOW_CLASS: &str = "show";

/// Confirmation shown after submitting the form with `name` in the name field.
///
/// A missing or empty name falls back to [`POPUP_FALLBACK_NAME`].
#[must_use]
pub fn confirmation_message(name: Option<&str>) -> String {
    let name = name.filter(|n| !n.is_empty()).unwrap_or(POPUP_FALLBACK_NAME);
    format!("Gracias {name}, tu mensaje fue enviado correctamente.")
}
