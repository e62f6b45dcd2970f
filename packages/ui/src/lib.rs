//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod debounce;
pub mod format;
pub mod platform;
pub mod router;
pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
/// Tailwind output for `tailwind.css`; regenerate after changing classes
/// (see the launcher crate docs).
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

mod navbar;
pub use navbar::Navbar;

mod session;
pub use session::{use_api, use_config, use_session, LogoutButton, SessionProvider};

mod theme;
pub use theme::{apply_theme, load_theme, use_theme, use_theme_provider, Theme, ThemeSignal};

pub use router::{route_for_query, use_view, View};
pub use views::AppShell;
