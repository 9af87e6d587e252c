use crate::constants::THEME_STORAGE_KEY;
use fnv::FnvHashMap;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Theme> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// A valid stored choice wins; otherwise follow the system preference.
pub fn resolve_theme(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(t) => t,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage rejected write: {0}")]
    Write(String),
}

/// Key/value persistence for the single theme preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store, used when local storage is blocked and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FnvHashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct ThemeController<S: PreferenceStore> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn load(store: S, prefers_dark: bool) -> Self {
        let stored = store.get(THEME_STORAGE_KEY);
        let current = resolve_theme(stored.as_deref(), prefers_dark);
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it. A failed write keeps the new theme for
    /// this page view and reports the error.
    pub fn toggle(&mut self) -> Result<Theme, StorageError> {
        self.set(self.current.toggled())
    }

    pub fn set(&mut self, theme: Theme) -> Result<Theme, StorageError> {
        self.current = theme;
        self.store.set(THEME_STORAGE_KEY, theme.as_str())?;
        Ok(theme)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
