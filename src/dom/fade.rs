//! Page fade-in.
//!
//! The body starts transparent and fades to opaque once the document has
//! been parsed. If parsing already finished, the fade starts on the next
//! task so the transparent state is committed first.

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use crate::dom::set_style;
use crate::error::{FxError, report};

const TRANSITION: &str = "opacity .9s ease";

/// Pending fade. Dropping it before the fade starts leaves the body transparent.
pub struct PageFade {
    _on_load: Option<EventListener>,
    _timer: Option<Timeout>,
}

pub fn mount(doc: &Document) -> Result<Option<PageFade>, FxError> {
    let Some(body) = doc.body() else {
        log::debug!("page fade: no <body>");
        return Ok(None);
    };
    set_style(&body, "opacity", "0")?;

    if doc.ready_state() == "loading" {
        let listener = EventListener::once(doc, "DOMContentLoaded", move |_| {
            report("page fade", fade_in(&body));
        });
        Ok(Some(PageFade { _on_load: Some(listener), _timer: None }))
    } else {
        let timer = Timeout::new(0, move || {
            report("page fade", fade_in(&body));
        });
        Ok(Some(PageFade { _on_load: None, _timer: Some(timer) }))
    }
}

fn fade_in(body: &HtmlElement) -> Result<(), FxError> {
    set_style(body, "transition", TRANSITION)?;
    set_style(body, "opacity", "1")
}
