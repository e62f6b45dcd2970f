use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::{use_api, use_config};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Register,
}

/// Sign-in page shown whenever there is no authenticated session.
#[component]
pub fn AuthPage() -> Element {
    let api = use_api();
    let config = use_config();
    let mut mode = use_signal(|| Mode::Login);
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let submit_api = api.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = submit_api.clone();
        spawn(async move {
            loading.set(true);
            error.set(None);
            let result = match mode() {
                Mode::Login => api.login(email().trim(), &password()).await,
                Mode::Register => {
                    api.register(full_name().trim(), email().trim(), &password())
                        .await
                }
            };
            if let Err(e) = result {
                tracing::warn!("Authentication failed: {}", e);
                error.set(Some(e.to_string()));
            }
            loading.set(false);
        });
    };

    let handle_google = move |credential: Option<String>| {
        let api = api.clone();
        spawn(async move {
            let Some(credential) = credential else {
                error.set(Some("Google login failed.".to_string()));
                return;
            };
            loading.set(true);
            error.set(None);
            if let Err(e) = api.google_login(&credential).await {
                tracing::warn!("Google login failed: {}", e);
                error.set(Some(e.to_string()));
            }
            loading.set(false);
        });
    };

    let is_register = mode() == Mode::Register;
    let tab_class = |active: bool| {
        if active {
            "px-4 py-2 text-sm font-medium text-indigo-600 border-b-2 border-indigo-600"
        } else {
            "px-4 py-2 text-sm font-medium text-slate-500"
        }
    };

    rsx! {
        div {
            class: "flex items-center justify-center min-h-screen bg-slate-100 dark:bg-slate-900",
            div {
                class: "w-full max-w-md p-8 space-y-6 card-glassmorphism rounded-xl shadow-lg",
                h1 {
                    class: "text-2xl font-bold text-center text-slate-800 dark:text-slate-200",
                    if is_register { "Create Your Account" } else { "Welcome to OPD Nexus" }
                }

                div {
                    class: "flex justify-center border-b border-slate-200 dark:border-slate-700",
                    button {
                        class: tab_class(!is_register),
                        onclick: move |_| mode.set(Mode::Login),
                        "Login"
                    }
                    button {
                        class: tab_class(is_register),
                        onclick: move |_| mode.set(Mode::Register),
                        "Register"
                    }
                }

                form {
                    class: "space-y-4",
                    onsubmit: handle_submit,

                    if is_register {
                        div {
                            Label { r#for: "full-name", "Full Name" }
                            Input {
                                id: "full-name",
                                value: full_name(),
                                required: true,
                                oninput: move |evt: FormEvent| full_name.set(evt.value()),
                            }
                        }
                    }
                    div {
                        Label { r#for: "email", "Email Address" }
                        Input {
                            id: "email",
                            r#type: "email",
                            value: email(),
                            required: true,
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    div {
                        Label { r#for: "password", "Password" }
                        Input {
                            id: "password",
                            r#type: "password",
                            value: password(),
                            required: true,
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full font-bold",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() {
                            "Processing..."
                        } else if is_register {
                            "Create Account"
                        } else {
                            "Login"
                        }
                    }
                }

                if !is_register {
                    if let Some(client_id) = config.auth.google_client_id.clone() {
                        div {
                            class: "flex items-center gap-4 my-4",
                            div { class: "flex-1 h-px bg-slate-300 dark:bg-slate-600" }
                            span { class: "text-sm text-slate-500 dark:text-slate-400", "Or continue with" }
                            div { class: "flex-1 h-px bg-slate-300 dark:bg-slate-600" }
                        }
                        GoogleSignIn { client_id: client_id, on_credential: handle_google }
                    }
                }

                if let Some(err) = error() {
                    p { class: "text-sm text-center text-red-500 mt-4", "{err}" }
                }
            }
        }
    }
}

/// Google Identity Services button. Emits the ID token credential, or
/// `None` when the widget fails to load.
#[component]
fn GoogleSignIn(client_id: String, on_credential: EventHandler<Option<String>>) -> Element {
    use_effect(move || {
        let client_id = serde_json::to_string(&client_id).unwrap_or_default();
        let script = format!(
            r#"
            const mount = () => {{
                google.accounts.id.initialize({{
                    client_id: {client_id},
                    callback: (response) => dioxus.send(response.credential),
                }});
                google.accounts.id.renderButton(
                    document.getElementById("google-signin"),
                    {{ theme: "outline", size: "large" }}
                );
            }};
            if (window.google && window.google.accounts) {{
                mount();
            }} else {{
                const tag = document.createElement("script");
                tag.src = "https://accounts.google.com/gsi/client";
                tag.async = true;
                tag.onload = mount;
                tag.onerror = () => dioxus.send(null);
                document.head.appendChild(tag);
            }}
            "#
        );
        spawn(async move {
            let mut widget = document::eval(&script);
            while let Ok(credential) = widget.recv::<Option<String>>().await {
                on_credential.call(credential);
            }
        });
    });

    rsx! {
        div { id: "google-signin", class: "flex justify-center" }
    }
}
