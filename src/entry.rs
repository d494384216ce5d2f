//! WebAssembly entry points.
//!
//! `start` runs when the module is instantiated. It installs the panic hook
//! and console logger, reads the configuration block and mounts the page,
//! waiting for `DOMContentLoaded` if the document is still being parsed.
//! `teardown` drops every mounted effect.

use std::cell::RefCell;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;

use crate::config::{FxConfig, LogLevel};
use crate::dom::document;
use crate::dom::page::{Page, load_config};

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    static PENDING: RefCell<Option<EventListener>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Trace) {
        log::debug!("console logger already installed: {err}");
    }
    log::set_max_level(log::Level::from(LogLevel::default()).to_level_filter());

    let doc = match document() {
        Ok(doc) => doc,
        Err(err) => {
            log::error!("page-fx: {err}");
            return;
        }
    };
    let cfg = match load_config(&doc) {
        Ok(cfg) => cfg,
        Err(err) => {
            log::warn!("page-fx: {err}; using defaults");
            FxConfig::default()
        }
    };
    log::set_max_level(log::Level::from(cfg.log_level).to_level_filter());

    if doc.ready_state() == "loading" {
        let target = doc.clone();
        let listener = EventListener::once(&target, "DOMContentLoaded", move |_| {
            install(Page::mount(&doc, &cfg));
        });
        PENDING.with_borrow_mut(|pending| *pending = Some(listener));
    } else {
        install(Page::mount(&doc, &cfg));
    }
}

/// Remove every effect's listeners and timers.
#[wasm_bindgen]
pub fn teardown() {
    PENDING.with_borrow_mut(Option::take);
    if PAGE.with_borrow_mut(Option::take).is_some() {
        log::info!("page-fx: torn down");
    }
}

fn install(page: Page) {
    log::info!("page-fx: {} effects mounted", page.mounted());
    PAGE.with_borrow_mut(|slot| *slot = Some(page));
}
