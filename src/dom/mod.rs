//! Browser bindings for the page effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every submodule exposes a `mount` function that looks up its elements,
//! registers listeners and timers, and returns an owned handle. Dropping the
//! handle removes the listeners (`gloo_events::EventListener`) and cancels the
//! timers (`gloo_timers`). A missing element yields `Ok(None)`; only failing
//! DOM calls are errors.
//!
//! Only compiled with the `hydrate` feature.

pub mod banner;
pub mod carousel;
pub mod contact;
pub mod fade;
pub mod flip;
pub mod header;
pub mod outline;
pub mod page;
pub mod reveal;
pub mod storage;
pub mod tilt;
pub mod typing;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::FxError;
use crate::geometry::{Bounds, Point};

pub fn window() -> Result<Window, FxError> {
    web_sys::window().ok_or(FxError::NoBrowser("window"))
}

pub fn document() -> Result<Document, FxError> {
    window()?.document().ok_or(FxError::NoBrowser("document"))
}

pub fn body(doc: &Document) -> Result<HtmlElement, FxError> {
    doc.body().ok_or(FxError::NoBrowser("body"))
}

/// First element matching `selector`, if any.
pub fn query(doc: &Document, selector: &str) -> Result<Option<Element>, FxError> {
    Ok(doc.query_selector(selector)?)
}

/// All elements matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, FxError> {
    let nodes = doc.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(Ok(el)) = nodes.get(i).map(|node| node.dyn_into::<Element>()) {
            out.push(el);
        }
    }
    Ok(out)
}

/// Downcast an element to `HtmlElement` for style access.
pub fn html(el: Element) -> Result<HtmlElement, FxError> {
    el.dyn_into::<HtmlElement>()
        .map_err(|_| FxError::Cast { expected: "HtmlElement" })
}

/// Add (`on`) or remove a class.
pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), FxError> {
    el.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// Set an inline style property. An empty `value` removes the property.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), FxError> {
    let style = el.style();
    if value.is_empty() {
        style.remove_property(property)?;
    } else {
        style.set_property(property, value)?;
    }
    Ok(())
}

/// Bounding box of `el` in viewport coordinates.
pub fn bounds(el: &Element) -> Bounds {
    let r = el.get_bounding_client_rect();
    Bounds::new(r.left(), r.top(), r.width(), r.height())
}

/// Pointer position of a mouse event.
pub fn pointer(event: &web_sys::Event) -> Option<Point> {
    let mouse = event.dyn_ref::<web_sys::MouseEvent>()?;
    Some(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

/// Window inner width in CSS pixels.
pub fn inner_width(win: &Window) -> Result<f64, FxError> {
    win.inner_width()?
        .as_f64()
        .ok_or(FxError::Cast { expected: "number" })
}
