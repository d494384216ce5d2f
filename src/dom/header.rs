//! Header controls: dark-mode toggle and hamburger navigation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::config::FxConfig;
use crate::dark_mode::DarkMode;
use crate::dom::storage::LocalStorage;
use crate::dom::{body, inner_width, query, set_class, window};
use crate::error::{FxError, report};
use crate::nav::{Nav, OPEN_CLASS, link_click_toggles};

/// Body class for the dark theme.
pub const DARK_CLASS: &str = "dark";

/// Mounted header controls.
pub struct HeaderControls {
    _listeners: Vec<EventListener>,
}

pub fn mount(doc: &Document, cfg: &FxConfig) -> Result<Option<HeaderControls>, FxError> {
    let Some(header) = query(doc, "header")? else {
        log::debug!("header controls: no <header>");
        return Ok(None);
    };

    let mut listeners = Vec::new();

    match query(doc, ".dark-toggle")? {
        Some(button) => match mount_dark_toggle(doc, &button, cfg) {
            Ok(listener) => listeners.push(listener),
            Err(err) => log::warn!("dark mode toggle: skipped: {err}"),
        },
        None => log::debug!("header controls: no .dark-toggle"),
    }

    match (query(doc, ".hamburger")?, header.query_selector("nav")?) {
        (Some(hamburger), Some(nav)) => {
            listeners.extend(mount_hamburger(&hamburger, &nav, cfg.nav_collapse_below_px));
        }
        _ => log::debug!("header controls: no .hamburger or header nav"),
    }

    Ok(Some(HeaderControls { _listeners: listeners }))
}

fn mount_dark_toggle(doc: &Document, button: &Element, cfg: &FxConfig) -> Result<EventListener, FxError> {
    let win = window()?;
    let body = body(doc)?;
    let mut dark = DarkMode::load(LocalStorage::open(&win), cfg.storage_key.as_str());
    let restored = dark.restore();
    set_class(&body, DARK_CLASS, restored)?;
    log::debug!("dark mode: restored {restored}");

    let dark = RefCell::new(dark);
    Ok(EventListener::new(button, "click", move |_| {
        let displayed = body.class_list().contains(DARK_CLASS);
        let mut dark = dark.borrow_mut();
        if let Err(err) = dark.toggle_from(displayed) {
            log::debug!("dark mode: flag not persisted: {err}");
        }
        report("dark mode toggle", set_class(&body, DARK_CLASS, dark.is_enabled()));
    }))
}

fn mount_hamburger(hamburger: &Element, nav: &Element, collapse_below: f64) -> [EventListener; 2] {
    let state = Rc::new(Cell::new(Nav::default()));

    let toggle = {
        let state = Rc::clone(&state);
        let hamburger = hamburger.clone();
        let nav = nav.clone();
        move || {
            let mut current = state.get();
            let open = current.toggle();
            state.set(current);
            report("nav toggle", set_class(&nav, OPEN_CLASS, open).and_then(|()| set_class(&hamburger, OPEN_CLASS, open)));
        }
    };

    let on_button = {
        let toggle = toggle.clone();
        EventListener::new(hamburger, "click", move |_| toggle())
    };

    let on_link = EventListener::new(nav, "click", move |event| {
        let Some(target) = event.target() else {
            return;
        };
        let Some(el) = target.dyn_ref::<Element>() else {
            return;
        };
        let width = match window().and_then(|w| inner_width(&w)) {
            Ok(width) => width,
            Err(err) => {
                log::warn!("nav link click: {err}");
                return;
            }
        };
        if link_click_toggles(&el.tag_name(), width, collapse_below) {
            toggle();
        }
    });

    [on_button, on_link]
}
