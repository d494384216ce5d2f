//! Typewriter intro text.
//!
//! One async loop walks [`Typewriter`] prefixes with a timer between each.
//! The loop is wrapped in `Abortable`; dropping the handle aborts it at its
//! next suspension point.

use futures::future::{AbortHandle, Abortable};
use gloo_timers::future::TimeoutFuture;
use web_sys::{Document, Element};

use crate::config::FxConfig;
use crate::error::{FxError, report};
use crate::typewriter::Typewriter;

const TYPING_ID: &str = "typingText";

/// Class showing the typing cursor while text is being typed.
pub const TYPING_CLASS: &str = "typing";

/// Running typewriter. Dropping it stops typing where it is.
pub struct Typing {
    abort: AbortHandle,
}

impl Drop for Typing {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

#[derive(Clone, Copy)]
struct Timing {
    start_delay_ms: u32,
    char_ms: u32,
    cursor_linger_ms: u32,
}

pub fn mount(doc: &Document, cfg: &FxConfig) -> Result<Option<Typing>, FxError> {
    let Some(el) = doc.get_element_by_id(TYPING_ID) else {
        log::debug!("typewriter: no #{TYPING_ID}");
        return Ok(None);
    };

    let full = el.text_content().unwrap_or_default().trim().to_owned();
    el.set_text_content(Some(""));
    el.class_list().add_1(TYPING_CLASS)?;

    let timing = Timing {
        start_delay_ms: cfg.typing_start_delay_ms,
        char_ms: cfg.typing_char_ms,
        cursor_linger_ms: cfg.typing_cursor_linger_ms,
    };
    let (abort, registration) = AbortHandle::new_pair();
    wasm_bindgen_futures::spawn_local(async move {
        if Abortable::new(type_out(el, full, timing), registration).await.is_err() {
            log::debug!("typewriter: cancelled");
        }
    });

    Ok(Some(Typing { abort }))
}

async fn type_out(el: Element, full: String, timing: Timing) {
    TimeoutFuture::new(timing.start_delay_ms).await;
    for prefix in Typewriter::new(&full) {
        el.set_text_content(Some(prefix));
        TimeoutFuture::new(timing.char_ms).await;
    }
    TimeoutFuture::new(timing.cursor_linger_ms).await;
    report("typewriter", el.class_list().remove_1(TYPING_CLASS).map_err(FxError::from));
}
