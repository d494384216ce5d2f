//! Scroll reveal.
//!
//! Observed elements gain the reveal classes the first time they become
//! visible and are then unobserved; the transition is one-way.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::FxConfig;
use crate::consts::REVEAL_SELECTOR;
use crate::dom::query_all;
use crate::error::{FxError, report};

/// Classes added to a revealed element.
pub const REVEAL_CLASSES: [&str; 2] = ["mostrar", "visible"];

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Live observer. Dropping it disconnects the observer.
pub struct ScrollReveal {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn mount(doc: &Document, cfg: &FxConfig) -> Result<Option<ScrollReveal>, FxError> {
    let targets = query_all(doc, REVEAL_SELECTOR)?;
    if targets.is_empty() {
        log::debug!("scroll reveal: no targets");
        return Ok(None);
    }

    let callback: ObserverCallback = Closure::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                report("reveal", reveal(&entry, &observer));
            }
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&cfg.reveal_threshold.into());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for target in &targets {
        observer.observe(target);
    }
    log::debug!("scroll reveal: observing {} elements", targets.len());

    Ok(Some(ScrollReveal { observer, _callback: callback }))
}

fn reveal(entry: &IntersectionObserverEntry, observer: &IntersectionObserver) -> Result<(), FxError> {
    let target = entry.target();
    for class in REVEAL_CLASSES {
        target.class_list().add_1(class)?;
    }
    observer.unobserve(&target);
    Ok(())
}
