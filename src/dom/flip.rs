//! Flip cards toggled by click.

use std::cell::Cell;

use gloo_events::EventListener;
use web_sys::Document;

use crate::dom::{query_all, set_class};
use crate::error::{FxError, report};
use crate::flip::{ACTIVE_CLASS, FlipCard};

pub struct FlipCards {
    _listeners: Vec<EventListener>,
}

pub fn mount(doc: &Document) -> Result<Option<FlipCards>, FxError> {
    let cards = query_all(doc, ".flip-card")?;
    if cards.is_empty() {
        return Ok(None);
    }

    let listeners = cards
        .iter()
        .map(|card| {
            let state = Cell::new(FlipCard::default());
            let target = card.clone();
            EventListener::new(card, "click", move |_| {
                let mut flip = state.get();
                let active = flip.flip();
                state.set(flip);
                report("flip card", set_class(&target, ACTIVE_CLASS, active));
            })
        })
        .collect();

    Ok(Some(FlipCards { _listeners: listeners }))
}
