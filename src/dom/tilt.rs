//! Card hover tilt.

use gloo_events::EventListener;
use web_sys::{Document, HtmlElement};

use crate::dom::{bounds, html, pointer, query_all, set_class, set_style};
use crate::error::{FxError, report};
use crate::tilt::{TILT_CLASS, Tilt};

/// Mounted tilt handlers for every card.
pub struct CardTilt {
    _listeners: Vec<EventListener>,
}

pub fn mount(doc: &Document) -> Result<Option<CardTilt>, FxError> {
    let cards = query_all(doc, ".card")?;
    if cards.is_empty() {
        log::debug!("card tilt: no .card elements");
        return Ok(None);
    }

    let mut listeners = Vec::with_capacity(cards.len() * 2);
    for card in cards {
        let card = html(card)?;
        let on_move = {
            let target = card.clone();
            EventListener::new(&card, "mousemove", move |event| {
                if let Some(p) = pointer(event) {
                    report("card tilt", tilt(&target, Tilt::from_pointer(bounds(&target), p)));
                }
            })
        };
        let on_leave = {
            let target = card.clone();
            EventListener::new(&card, "mouseleave", move |_| {
                report("card tilt reset", reset(&target));
            })
        };
        listeners.push(on_move);
        listeners.push(on_leave);
    }

    Ok(Some(CardTilt { _listeners: listeners }))
}

fn tilt(card: &HtmlElement, t: Tilt) -> Result<(), FxError> {
    set_class(card, TILT_CLASS, true)?;
    set_style(card, "transform", &t.transform())?;
    set_style(card, "box-shadow", &t.box_shadow())
}

fn reset(card: &HtmlElement) -> Result<(), FxError> {
    set_style(card, "transform", "")?;
    set_style(card, "box-shadow", "")?;
    set_class(card, TILT_CLASS, false)
}
