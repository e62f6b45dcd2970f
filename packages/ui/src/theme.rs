//! Light/dark theme, persisted in the theme slot and applied as the `dark`
//! class on the document root.

use std::sync::Arc;

use dioxus::prelude::*;
use store::KeyValueStore;

use crate::platform::make_kv_store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Read the persisted theme. Missing or unknown values are light.
pub fn load_theme(slot: &dyn KeyValueStore, key: &str) -> Theme {
    slot.get(key)
        .and_then(|value| Theme::parse(&value))
        .unwrap_or_default()
}

pub fn save_theme(slot: &dyn KeyValueStore, key: &str, theme: Theme) {
    if let Err(e) = slot.set(key, theme.as_str()) {
        tracing::warn!("Failed to persist theme: {}", e);
    }
}

/// Toggle the `dark` class on `<html>`.
pub fn apply_theme(theme: Theme) {
    let dark = theme == Theme::Dark;
    let _ = document::eval(&format!(
        "document.documentElement.classList.toggle('dark', {dark});"
    ));
}

/// Theme state plus the slot it persists to. Cheap to copy into handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeSignal {
    theme: Signal<Theme>,
    slot: Signal<Slot>,
}

#[derive(Clone)]
struct Slot {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store) && self.key == other.key
    }
}

impl ThemeSignal {
    pub fn current(&self) -> Theme {
        (self.theme)()
    }

    pub fn set(&mut self, theme: Theme) {
        let slot = self.slot.peek();
        save_theme(slot.store.as_ref(), &slot.key, theme);
        apply_theme(theme);
        self.theme.set(theme);
    }

    pub fn toggle(&mut self) {
        let next = self.theme.peek().toggled();
        self.set(next);
    }
}

/// Provide the theme context, loading the persisted value from `key`.
pub fn use_theme_provider(key: &str) -> ThemeSignal {
    let key = key.to_string();
    let handle = use_context_provider(move || {
        let store = make_kv_store();
        let initial = load_theme(store.as_ref(), &key);
        ThemeSignal {
            theme: Signal::new(initial),
            slot: Signal::new(Slot { store, key }),
        }
    });
    use_effect(move || apply_theme(handle.current()));
    handle
}

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    #[test]
    fn test_load_defaults_to_light() {
        let slot = MemoryStore::new();
        assert_eq!(load_theme(&slot, "theme"), Theme::Light);

        let slot = MemoryStore::with_value("theme", "sepia");
        assert_eq!(load_theme(&slot, "theme"), Theme::Light);
    }

    #[test]
    fn test_save_and_reload() {
        let slot = MemoryStore::new();
        save_theme(&slot, "theme", Theme::Dark);
        assert_eq!(slot.get("theme").as_deref(), Some("dark"));
        assert_eq!(load_theme(&slot, "theme"), Theme::Dark);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
