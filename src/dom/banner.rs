//! Banner parallax on pointer move and scroll, plus scroll blur.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::banner::{BLUR_CLASS, PARALLAX_CLASS, REST_TRANSFORM, ScrollEffect, pointer_transform};
use crate::config::FxConfig;
use crate::dom::{bounds, html, pointer, query, set_class, set_style, window};
use crate::error::{FxError, report};
use crate::schedule::TimerSlot;

/// Mounted banner effects.
pub struct Banner {
    _listeners: Vec<EventListener>,
    _scroll_debounce: Rc<RefCell<TimerSlot<Timeout>>>,
}

pub fn mount(doc: &Document, cfg: &FxConfig) -> Result<Option<Banner>, FxError> {
    let (Some(banner), Some(image)) = (query(doc, ".banner")?, query(doc, ".banner img")?) else {
        log::debug!("banner: .banner or .banner img missing");
        return Ok(None);
    };
    let image = html(image)?;
    image.class_list().add_1(PARALLAX_CLASS)?;

    let win = window()?;
    let debounce = Rc::new(RefCell::new(TimerSlot::new()));

    let move_listener = {
        let banner_for_cb = banner.clone();
        let image = image.clone();
        EventListener::new(&banner, "mousemove", move |event| {
            if let Some(p) = pointer(event) {
                let transform = pointer_transform(bounds(&banner_for_cb), p);
                report("banner pointer", set_style(&image, "transform", &transform));
            }
        })
    };

    let leave_listener = {
        let image = image.clone();
        EventListener::new(&banner, "mouseleave", move |_| {
            report("banner leave", set_style(&image, "transform", REST_TRANSFORM));
        })
    };

    let scroll_listener = {
        let debounce = Rc::clone(&debounce);
        let win_for_cb = win.clone();
        let quiet_ms = cfg.scroll_debounce_ms;
        EventListener::new(&win, "scroll", move |_| {
            let win = win_for_cb.clone();
            let banner = banner.clone();
            let image = image.clone();
            debounce.borrow_mut().replace(Timeout::new(quiet_ms, move || {
                report("banner scroll", on_scroll(&win, &banner, &image));
            }));
        })
    };

    Ok(Some(Banner {
        _listeners: vec![move_listener, leave_listener, scroll_listener],
        _scroll_debounce: debounce,
    }))
}

fn on_scroll(win: &Window, banner: &Element, image: &HtmlElement) -> Result<(), FxError> {
    let effect = ScrollEffect::at(win.scroll_y()?);
    set_style(image, "transform", &effect.transform())?;
    set_class(banner, BLUR_CLASS, effect.blur)
}
