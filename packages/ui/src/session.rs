//! Session context and hooks for the UI.

use api::{ClientConfig, PatientClient, Session, SessionStore};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::FaRightFromBracket;
use crate::Icon;
use crate::platform::{make_kv_store, reload_page};

/// The current session. Re-renders subscribers on login, logout and expiry.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// The shared API client.
pub fn use_api() -> PatientClient {
    use_context::<PatientClient>()
}

/// The configuration the app was launched with.
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Provider component that owns the session store and API client.
/// Wrap your app with this component before using [`use_session`] or [`use_api`].
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let api = use_hook(|| {
        let session = SessionStore::with_key(make_kv_store(), config.storage.token_key.clone());
        session.initialize();
        PatientClient::new(&config.api.base_url, session).on_session_expired(reload_page)
    });
    let mut session = use_signal(|| api.session().snapshot());

    // Mirror every store mutation into the signal
    let store = api.session().clone();
    use_hook(move || {
        let mut updates = store.subscribe();
        spawn(async move {
            while updates.changed().await.is_ok() {
                let latest = updates.borrow_and_update().clone();
                session.set(latest);
            }
        })
    });

    use_context_provider(|| config.clone());
    use_context_provider(|| api.clone());
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default)] class: String,
    #[props(default = ButtonVariant::Ghost)] variant: ButtonVariant,
    /// Render the exit icon instead of the label.
    #[props(default)]
    icon_only: bool,
    onlogout: Option<EventHandler<()>>,
) -> Element {
    let api = use_api();

    rsx! {
        Button {
            variant: variant,
            class: class,
            title: label.clone(),
            onclick: move |_| {
                api.logout();
                if let Some(handler) = onlogout {
                    handler.call(());
                }
            },
            if icon_only {
                Icon { icon: FaRightFromBracket, width: 16, height: 16 }
            } else {
                "{label}"
            }
        }
    }
}
