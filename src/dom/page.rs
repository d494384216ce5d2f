//! Page-wide mounting and teardown.
//!
//! `Page::mount` mounts every effect independently: one failing or missing
//! effect never prevents the others. The handles live in `Page`; dropping it
//! tears every effect down.

use web_sys::Document;

use crate::config::FxConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::dom::{banner, carousel, contact, fade, flip, header, outline, reveal, tilt, typing};
use crate::error::FxError;

/// Every mounted effect on the page.
#[derive(Default)]
pub struct Page {
    pub contact: Option<contact::ContactForm>,
    pub fade: Option<fade::PageFade>,
    pub reveal: Option<reveal::ScrollReveal>,
    pub banner: Option<banner::Banner>,
    pub header: Option<header::HeaderControls>,
    pub tilt: Option<tilt::CardTilt>,
    pub typing: Option<typing::Typing>,
    pub carousel: Option<carousel::Slider>,
    pub outline: Option<outline::FocusOutline>,
    pub flip: Option<flip::FlipCards>,
}

impl Page {
    pub fn mount(doc: &Document, cfg: &FxConfig) -> Self {
        Self {
            contact: settle("contact form", contact::mount(doc, cfg)),
            fade: settle("page fade", fade::mount(doc)),
            reveal: settle("scroll reveal", reveal::mount(doc, cfg)),
            banner: settle("banner", banner::mount(doc, cfg)),
            header: settle("header controls", header::mount(doc, cfg)),
            tilt: settle("card tilt", tilt::mount(doc)),
            typing: settle("typewriter", typing::mount(doc, cfg)),
            carousel: settle("carousel", carousel::mount(doc, cfg)),
            outline: settle("focus outline", outline::mount(doc)),
            flip: settle("flip cards", flip::mount(doc)),
        }
    }

    /// Number of effects that mounted.
    pub fn mounted(&self) -> usize {
        [
            self.contact.is_some(),
            self.fade.is_some(),
            self.reveal.is_some(),
            self.banner.is_some(),
            self.header.is_some(),
            self.tilt.is_some(),
            self.typing.is_some(),
            self.carousel.is_some(),
            self.outline.is_some(),
            self.flip.is_some(),
        ]
        .into_iter()
        .filter(|mounted| *mounted)
        .count()
    }
}

/// Skip an effect that failed to mount, logging why.
fn settle<T>(name: &str, result: Result<Option<T>, FxError>) -> Option<T> {
    match result {
        Ok(Some(handle)) => {
            log::debug!("{name}: mounted");
            Some(handle)
        }
        Ok(None) => None,
        Err(err) => {
            log::warn!("{name}: skipped: {err}");
            None
        }
    }
}

/// Read the optional JSON configuration block. No block means defaults.
pub fn load_config(doc: &Document) -> Result<FxConfig, FxError> {
    let Some(block) = doc.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(FxConfig::default());
    };
    FxConfig::from_json(&block.text_content().unwrap_or_default())
}
