use crate::constants::{ATTR_THEME, PREFERS_DARK_QUERY};
use pitchutcha_core::site::{MemoryStore, PreferenceStore, StorageError, Theme, ThemeController};
use web_sys as web;

/// `window.localStorage`, falling back to memory when storage is blocked
/// (private mode, disabled cookies).
pub enum BrowserStore {
    Local(web::Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open(window: &web::Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => BrowserStore::Local(storage),
            _ => {
                log::warn!("[theme] localStorage unavailable; preference kept for this visit only");
                BrowserStore::Memory(MemoryStore::default())
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(s) => s.get_item(key).ok().flatten(),
            BrowserStore::Memory(m) => m.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BrowserStore::Local(s) => s
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{:?}", e))),
            BrowserStore::Memory(m) => m.set(key, value),
        }
    }
}

pub struct ThemeUi {
    controller: ThemeController<BrowserStore>,
    document: web::Document,
}

impl ThemeUi {
    pub fn new(window: &web::Window, document: web::Document) -> Self {
        let prefers_dark = window
            .match_media(PREFERS_DARK_QUERY)
            .ok()
            .flatten()
            .map(|m| m.matches())
            .unwrap_or(false);
        let controller = ThemeController::load(BrowserStore::open(window), prefers_dark);
        let ui = Self {
            controller,
            document,
        };
        ui.apply();
        ui
    }

    pub fn current(&self) -> Theme {
        self.controller.current()
    }

    pub fn toggle(&mut self) -> Theme {
        let theme = match self.controller.toggle() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("[theme] could not persist preference: {}", e);
                self.controller.current()
            }
        };
        log::info!("[theme] switched to {}", theme.as_str());
        self.apply();
        theme
    }

    fn apply(&self) {
        if let Some(root) = self.document.document_element() {
            _ = root.set_attribute(ATTR_THEME, self.controller.current().as_str());
        }
    }
}
