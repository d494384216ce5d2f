//! Dark mode preference.
//!
//! The flag is persisted as `"1"` / `"0"` under a fixed key. Anything other
//! than `"1"` (including no stored value) reads as off. The browser binding
//! mirrors [`DarkMode::is_enabled`] onto the `dark` class of `<body>`.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use std::collections::HashMap;

use crate::error::FxError;

/// Key/value string storage for the preference flag.
pub trait PreferenceStore {
    /// Read the raw value under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn save(&mut self, key: &str, value: &str) -> Result<(), FxError>;
}

/// In-memory store, used natively and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), FxError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Decode a stored flag.
#[must_use]
pub fn decode(raw: Option<&str>) -> bool {
    raw == Some("1")
}

/// Encode a flag for storage.
#[must_use]
pub fn encode(enabled: bool) -> &'static str {
    if enabled { "1" } else { "0" }
}

/// Dark mode state bound to its persisted flag.
#[derive(Debug)]
pub struct DarkMode<S> {
    store: S,
    key: String,
    enabled: bool,
}

impl<S: PreferenceStore> DarkMode<S> {
    /// Read the persisted flag under `key`.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let enabled = decode(store.load(&key).as_deref());
        Self { store, key, enabled }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the flag and persist it.
    ///
    /// The in-memory flag changes even if persisting fails.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write was rejected.
    pub fn apply(&mut self, enabled: bool) -> Result<(), FxError> {
        self.enabled = enabled;
        self.store.save(&self.key, encode(enabled))
    }

    /// Flip the flag and persist it. Returns the new value.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write was rejected.
    pub fn toggle(&mut self) -> Result<bool, FxError> {
        self.apply(!self.enabled)?;
        Ok(self.enabled)
    }

    /// Flip relative to what the page currently displays rather than the
    /// stored flag. Returns the new value.
    ///
    /// The in-memory flag changes even if persisting fails.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write was rejected.
    pub fn toggle_from(&mut self, displayed: bool) -> Result<bool, FxError> {
        self.apply(!displayed)?;
        Ok(self.enabled)
    }

    /// Re-persist the loaded flag and return it.
    ///
    /// Storage is best-effort here: a rejected write (storage disabled,
    /// quota exceeded) is logged and the flag is still returned.
    pub fn restore(&mut self) -> bool {
        let enabled = self.enabled;
        if let Err(err) = self.apply(enabled) {
            log::debug!("dark mode: flag not persisted: {err}");
        }
        enabled
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
