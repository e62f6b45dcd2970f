//! Durable client-side storage and client configuration.
//!
//! Everything the patient client keeps between launches goes through a
//! [`KeyValueStore`]: the bearer token slot owned by the session store and
//! the theme slot owned by the theme toggle. Backends:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`MemoryStore`] | tests, fallback |
//! | [`FileStore`] | desktop (one file per key) |
//! | [`LocalStorageStore`] | web (`window.localStorage`) |

pub mod config;
pub mod kv;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::ClientConfig;
pub use kv::{KeyValueStore, StoreError};
