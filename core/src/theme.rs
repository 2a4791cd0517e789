use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use crate::*;

/// Key/value persistence for user preferences, `localStorage` in the browser.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &'static str, value: &str) -> Result<()>;
}

pub trait StorageKey {
    const KEY: &'static str;
}

/// In-memory store, for tests and hosts without persistent storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &'static str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    pub fn from_scheme(scheme: &str) -> Option<Self> {
        match scheme.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Label of the toggle button
    pub const fn icon(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "☀️",
            Dark => "🌙",
        }
    }

    pub const fn toggled(self) -> Self {
        use Theme::*;
        match self {
            Light => Dark,
            Dark => Light,
        }
    }

    pub fn load(store: &impl PreferenceStore) -> Self {
        match store.load(Self::KEY) {
            Some(scheme) => Self::from_scheme(&scheme).unwrap_or_else(|| {
                log::warn!("unknown theme {:?}, using default", scheme);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn save(self, store: &mut impl PreferenceStore) -> Result<()> {
        store.save(Self::KEY, self.scheme())
    }

    /// Flip the theme and remember the choice. The new theme is returned even if it could not be saved.
    pub fn toggle(self, store: &mut impl PreferenceStore) -> Self {
        let theme = self.toggled();
        if let Err(err) = theme.save(store) {
            log::error!("failed to save theme: {}", err);
        }
        log::debug!("theme-scheme: {}", theme.scheme());
        theme
    }
}

impl StorageKey for Theme {
    const KEY: &'static str = "gameTheme";
}
