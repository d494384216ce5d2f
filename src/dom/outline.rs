//! Keyboard focus outlines.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent};

use crate::dom::set_class;
use crate::error::{FxError, report};
use crate::outline::{OUTLINE_CLASS, OutlineInput, outline_after};

pub struct FocusOutline {
    _keydown: EventListener,
    _mousedown: EventListener,
}

pub fn mount(doc: &Document) -> Result<Option<FocusOutline>, FxError> {
    let Some(body) = doc.body() else {
        return Ok(None);
    };

    let keydown = {
        let body = body.clone();
        EventListener::new(doc, "keydown", move |event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                apply(&body, OutlineInput::KeyDown(&key));
            }
        })
    };
    let mousedown = EventListener::new(doc, "mousedown", move |_| {
        apply(&body, OutlineInput::MouseDown);
    });

    Ok(Some(FocusOutline { _keydown: keydown, _mousedown: mousedown }))
}

fn apply(body: &HtmlElement, input: OutlineInput<'_>) {
    if let Some(show) = outline_after(input) {
        report("focus outline", set_class(body, OUTLINE_CLASS, show));
    }
}
