//! Theme Preference
//!
//! Persisted light/dark switch and the visual state derived from it.

use crate::models::ThemePreference;

/// Key-value store holding the preference across sessions
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("Failed to persist {}: {:?}", key, e);
            }
        }
    }
}

/// Reads and writes the theme preference under one key
pub struct ThemeSettings<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemeSettings<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Stored preference, if the user ever toggled
    pub fn load(&self) -> Option<ThemePreference> {
        self.store
            .get(&self.key)
            .map(|value| ThemePreference::from_stored(&value))
    }

    /// Persist the toggle state and return the resulting preference
    pub fn toggle(&self, dark: bool) -> ThemePreference {
        let preference = ThemePreference::from_dark(dark);
        self.store.set(&self.key, preference.as_str());
        log::debug!("Theme set to {}", preference.as_str());
        preference
    }
}

/// Visual state for a preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeAppearance {
    /// Value of the `data-theme` attribute on `<html>`
    pub data_theme: &'static str,
    pub light_logo_visible: bool,
    pub dark_logo_visible: bool,
    pub toggle_checked: bool,
}

impl From<ThemePreference> for ThemeAppearance {
    fn from(preference: ThemePreference) -> Self {
        let dark = preference.is_dark();
        Self {
            data_theme: preference.as_str(),
            light_logo_visible: !dark,
            dark_logo_visible: dark,
            toggle_checked: dark,
        }
    }
}

/// CSS `display` value for a logo
pub fn logo_display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

/// Set `data-theme` on the document element; no-op outside a browser
pub fn apply_document_theme(preference: ThemePreference) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let appearance = ThemeAppearance::from(preference);
    if let Err(e) = root.set_attribute("data-theme", appearance.data_theme) {
        log::warn!("Failed to set data-theme: {:?}", e);
    }
}
