//! OPD Nexus web launcher.
//!
//! `ui::TAILWIND_CSS` is generated from `packages/ui/tailwind.css`, which
//! scans the `ui` sources for class names. `dx serve` and `dx bundle` build
//! it automatically; for any other build run, from the workspace root:
//!
//! ```sh
//! npx @tailwindcss/cli -i packages/ui/tailwind.css -o packages/ui/assets/tailwind.css
//! ```
//!
//! Without it the views load unstyled apart from `main.css`.

use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = api::load_config();
        tracing::info!("Using patient API at {}", config.api.base_url);
        config
    });
    ui::use_theme_provider(&config.storage.theme_key);

    rsx! {
        document::Title { "OPD Nexus" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        ui::SessionProvider {
            config: config,
            ui::AppShell {}
        }
    }
}
