//! Per-platform storage and page control.

use std::sync::Arc;

use store::KeyValueStore;

/// The durable key-value store for this platform: `localStorage` in the
/// browser, a directory under the user data dir on desktop.
pub fn make_kv_store() -> Arc<dyn KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::LocalStorageStore::new())
    }

    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        tracing::warn!("No durable storage on this target, session will not survive a reload");
        Arc::new(store::MemoryStore::new())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(store::FileStore::default_location())
    }
}

/// Called after a 401 has cleared the session.
///
/// The browser reloads so every screen starts from a clean state. Desktop
/// has no page to reload; the session subscription already swaps in the
/// sign-in page.
pub fn reload_page() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                tracing::error!("Failed to reload page: {:?}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("Session expired, returning to sign-in");
    }
}
