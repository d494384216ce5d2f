//! Contact form confirmation popup.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::config::FxConfig;
use crate::contact::{POPUP_CLASSES, POPUP_SHOW_CLASS, confirmation_message};
use crate::error::{FxError, report};
use crate::schedule::TimerSlot;

const FORM_ID: &str = "formContacto";
const POPUP_ID: &str = "msgPopup";
const POPUP_TEXT_ID: &str = "msgPopupText";
const NAME_SELECTOR: &str = "#nombre";

/// Mounted contact form. Dropping it detaches the submit handler and
/// cancels a pending popup hide.
pub struct ContactForm {
    _submit: EventListener,
    _hide: Rc<RefCell<TimerSlot<Timeout>>>,
}

struct Popup {
    form: HtmlFormElement,
    popup: Element,
    text: Element,
    visible_ms: u32,
    hide: Rc<RefCell<TimerSlot<Timeout>>>,
}

pub fn mount(doc: &Document, cfg: &FxConfig) -> Result<Option<ContactForm>, FxError> {
    let (Some(form), Some(popup), Some(text)) = (
        doc.get_element_by_id(FORM_ID),
        doc.get_element_by_id(POPUP_ID),
        doc.get_element_by_id(POPUP_TEXT_ID),
    ) else {
        log::debug!("contact form: #{FORM_ID}, #{POPUP_ID} or #{POPUP_TEXT_ID} missing");
        return Ok(None);
    };
    let form = form
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| FxError::Cast { expected: "HtmlFormElement" })?;

    let hide = Rc::new(RefCell::new(TimerSlot::new()));
    let state = Popup {
        form: form.clone(),
        popup,
        text,
        visible_ms: cfg.popup_visible_ms,
        hide: Rc::clone(&hide),
    };

    let submit = EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            report("contact form submit", state.confirm());
        },
    );

    Ok(Some(ContactForm { _submit: submit, _hide: hide }))
}

impl Popup {
    fn name(&self) -> Result<Option<String>, FxError> {
        let Some(field) = self.form.query_selector(NAME_SELECTOR)? else {
            return Ok(None);
        };
        if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
            return Ok(Some(input.value()));
        }
        Ok(field.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value))
    }

    fn confirm(&self) -> Result<(), FxError> {
        let name = self.name()?;
        self.text.set_text_content(Some(&confirmation_message(name.as_deref())));
        for class in POPUP_CLASSES {
            self.popup.class_list().add_1(class)?;
        }

        let popup = self.popup.clone();
        self.hide.borrow_mut().replace(Timeout::new(self.visible_ms, move || {
            report("hide popup", popup.class_list().remove_1(POPUP_SHOW_CLASS).map_err(FxError::from));
        }));

        self.form.reset();
        Ok(())
    }
}
