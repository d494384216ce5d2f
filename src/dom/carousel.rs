//! Featured-cards carousel.
//!
//! Turns `.destacados .card-grid` into a horizontally sliding track:
//!
//! ```text
//! div.slider-wrap
//! ├── div.slider-track          (translateX driven by Carousel::offset)
//! │   └── .slider-item × N      (the grid's former children)
//! └── div.slider-controls
//!     ├── button.slider-btn ◀
//!     └── button.slider-btn ▶
//! ```
//!
//! Autoplay advances every `autoplay_ms`; it stops while the pointer is over
//! the wrap and restarts when it leaves. Resizes re-render after a debounce.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::{Interval, Timeout};
use web_sys::{Document, Element, HtmlElement};

use crate::carousel::{Carousel, Step};
use crate::config::FxConfig;
use crate::dom::{html, query, set_style, window};
use crate::error::{FxError, report};
use crate::schedule::TimerSlot;

const GRID_SELECTOR: &str = ".destacados .card-grid";
const PREV_LABEL: &str = "\u{25C0}";
const NEXT_LABEL: &str = "\u{25B6}";

type Shared<T> = Rc<RefCell<T>>;

/// Mounted carousel. Dropping it stops autoplay and detaches every handler;
/// the restructured markup stays in place.
pub struct Slider {
    _listeners: Vec<EventListener>,
    _autoplay: Shared<TimerSlot<Interval>>,
    _resize: Shared<TimerSlot<Timeout>>,
    _initial_render: Timeout,
}

/// Track element plus its paging model.
struct Track {
    wrap: Element,
    track: HtmlElement,
    model: Carousel,
    gap: f64,
}

impl Track {
    fn wrap_width(&self) -> f64 {
        f64::from(self.wrap.client_width())
    }

    fn item_width(&self) -> f64 {
        self.track
            .children()
            .item(0)
            .map_or(0.0, |first| first.get_bounding_client_rect().width())
    }

    fn render(&mut self) -> Result<(), FxError> {
        self.model.resize(self.wrap_width());
        let transform = self.model.transform(self.item_width(), self.gap);
        set_style(&self.track, "transform", &transform)
    }

    fn step(&mut self, step: Step) -> Result<(), FxError> {
        self.model.resize(self.wrap_width());
        self.model.advance(step);
        self.render()
    }
}

pub fn mount(doc: &Document, cfg: &FxConfig) -> Result<Option<Slider>, FxError> {
    let Some(grid) = query(doc, GRID_SELECTOR)? else {
        log::debug!("carousel: no {GRID_SELECTOR}");
        return Ok(None);
    };
    let Some(parent) = grid.parent_node() else {
        log::debug!("carousel: grid is detached");
        return Ok(None);
    };

    let wrap = create(doc, "div", "slider-wrap")?;
    let track = html(create(doc, "div", "slider-track")?)?;

    let children = grid.children();
    let items: Vec<Element> = (0..children.length()).filter_map(|i| children.item(i)).collect();
    for item in &items {
        item.class_list().add_1("slider-item")?;
        track.append_child(item)?;
    }
    wrap.append_child(&track)?;
    parent.replace_child(&wrap, &grid)?;

    let controls = create(doc, "div", "slider-controls")?;
    let prev = create(doc, "button", "slider-btn")?;
    prev.set_text_content(Some(PREV_LABEL));
    let next = create(doc, "button", "slider-btn")?;
    next.set_text_content(Some(NEXT_LABEL));
    controls.append_child(&prev)?;
    controls.append_child(&next)?;
    wrap.append_child(&controls)?;

    let model = Carousel::new(items.len(), f64::from(wrap.client_width()), cfg.breakpoints());
    log::debug!("carousel: {} items, {} visible", model.len(), model.visible());
    let state = Rc::new(RefCell::new(Track { wrap: wrap.clone(), track, model, gap: cfg.gap_px }));

    let autoplay = Rc::new(RefCell::new(TimerSlot::new()));
    arm_autoplay(&autoplay, &state, cfg.autoplay_ms);

    let resize = Rc::new(RefCell::new(TimerSlot::new()));

    let listeners = vec![
        step_on_click(&prev, &state, Step::Prev),
        step_on_click(&next, &state, Step::Next),
        {
            let autoplay = Rc::clone(&autoplay);
            EventListener::new(&wrap, "mouseenter", move |_| {
                autoplay.borrow_mut().disarm();
            })
        },
        {
            let autoplay = Rc::clone(&autoplay);
            let state = Rc::clone(&state);
            let interval_ms = cfg.autoplay_ms;
            EventListener::new(&wrap, "mouseleave", move |_| {
                arm_autoplay(&autoplay, &state, interval_ms);
            })
        },
        {
            let resize = Rc::clone(&resize);
            let state = Rc::clone(&state);
            let quiet_ms = cfg.resize_debounce_ms;
            let win = window()?;
            EventListener::new(&win, "resize", move |_| {
                let state = Rc::clone(&state);
                resize.borrow_mut().replace(Timeout::new(quiet_ms, move || {
                    report("carousel resize", state.borrow_mut().render());
                }));
            })
        },
    ];

    let initial_render = {
        let state = Rc::clone(&state);
        Timeout::new(cfg.initial_render_ms, move || {
            report("carousel render", state.borrow_mut().render());
        })
    };

    Ok(Some(Slider {
        _listeners: listeners,
        _autoplay: autoplay,
        _resize: resize,
        _initial_render: initial_render,
    }))
}

fn create(doc: &Document, tag: &str, class: &str) -> Result<Element, FxError> {
    let el = doc.create_element(tag)?;
    el.set_class_name(class);
    Ok(el)
}

fn step_on_click(button: &Element, state: &Shared<Track>, step: Step) -> EventListener {
    let state = Rc::clone(state);
    EventListener::new(button, "click", move |_| {
        report("carousel step", state.borrow_mut().step(step));
    })
}

/// Start autoplay unless it is already running.
fn arm_autoplay(slot: &Shared<TimerSlot<Interval>>, state: &Shared<Track>, interval_ms: u32) {
    let started = slot.borrow_mut().arm_with(|| {
        let state = Rc::clone(state);
        Interval::new(interval_ms, move || {
            report("carousel autoplay", state.borrow_mut().step(Step::Next));
        })
    });
    if !started {
        log::debug!("carousel: autoplay already running");
    }
}
