//! `localStorage` backing for [`PreferenceStore`].

use web_sys::Storage;

use crate::dark_mode::PreferenceStore;
use crate::error::FxError;

/// Browser `localStorage`. Reads from an unavailable storage return `None`.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    /// Open the window's `localStorage`.
    ///
    /// Storage can be disabled (private browsing, sandboxed frames); the
    /// handle then behaves as an empty store whose writes fail.
    pub fn open(win: &web_sys::Window) -> Self {
        let storage = match win.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("localStorage unavailable: {}", FxError::from(err));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("localStorage read of {key} failed: {}", FxError::from(err));
                None
            }
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), FxError> {
        let storage = self.storage.as_ref().ok_or(FxError::NoBrowser("localStorage"))?;
        storage.set_item(key, value)?;
        Ok(())
    }
}
