use api::{PatientProfile, PatientProfileUpdate, SEX_OPTIONS};
use dioxus::prelude::*;

use super::Loader;
use crate::components::{Button, ButtonVariant, Input, Label, Select};
use crate::use_api;

#[component]
pub fn ProfileView() -> Element {
    let api = use_api();
    let mut profile = use_signal(|| Option::<PatientProfile>::None);
    let mut form = use_signal(PatientProfileUpdate::default);
    let mut loading = use_signal(|| true);
    let mut message = use_signal(String::new);

    let load_api = api.clone();
    use_hook(move || {
        spawn(async move {
            match load_api.profile().await {
                Ok(loaded) => {
                    form.set(PatientProfileUpdate::from(&loaded));
                    profile.set(Some(loaded));
                }
                Err(e) => {
                    tracing::error!("Failed to load profile: {}", e);
                    message.set("Could not load profile".to_string());
                }
            }
            loading.set(false);
        })
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            message.set("Saving...".to_string());
            match api.update_profile(form()).await {
                Ok(saved) => {
                    form.set(PatientProfileUpdate::from(&saved));
                    profile.set(Some(saved));
                    message.set("Profile saved successfully!".to_string());
                }
                Err(e) => {
                    tracing::error!("Failed to save profile: {}", e);
                    message.set("Error: Could not save profile.".to_string());
                }
            }
        });
    };

    if loading() {
        return rsx! { Loader {} };
    }

    let email = profile()
        .and_then(|p| p.email)
        .unwrap_or_default();
    let current = form();
    let sex = current
        .sex
        .clone()
        .unwrap_or_else(|| SEX_OPTIONS[0].to_string());

    rsx! {
        div {
            class: "space-y-6",
            h1 { class: "text-3xl font-bold text-slate-800 dark:text-slate-200", "My Profile" }
            div {
                class: "p-6 card-glassmorphism rounded-xl shadow-md max-w-lg",
                if !message().is_empty() {
                    p { class: "text-indigo-600 mb-4", "{message}" }
                }
                if profile().is_some() {
                    form {
                        class: "space-y-4",
                        onsubmit: handle_submit,
                        div {
                            Label { r#for: "full_name", "Full Name" }
                            Input {
                                id: "full_name",
                                value: current.full_name.clone(),
                                oninput: move |evt: FormEvent| form.write().full_name = evt.value(),
                            }
                        }
                        div {
                            Label { r#for: "email", "Email" }
                            Input { id: "email", r#type: "email", value: email, disabled: true }
                        }
                        div {
                            Label { r#for: "phone_number", "Phone Number" }
                            Input {
                                id: "phone_number",
                                r#type: "tel",
                                value: current.phone_number.clone().unwrap_or_default(),
                                oninput: move |evt: FormEvent| form.write().phone_number = Some(evt.value()),
                            }
                        }
                        div {
                            Label { r#for: "date_of_birth", "Date of Birth" }
                            Input {
                                id: "date_of_birth",
                                r#type: "date",
                                value: current.date_of_birth.clone().unwrap_or_default(),
                                oninput: move |evt: FormEvent| form.write().date_of_birth = Some(evt.value()),
                            }
                        }
                        div {
                            Label { r#for: "sex", "Sex" }
                            Select {
                                id: "sex",
                                options: SEX_OPTIONS.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                                value: sex,
                                onchange: move |evt: FormEvent| form.write().sex = Some(evt.value()),
                            }
                        }
                        Button { variant: ButtonVariant::Primary, r#type: "submit", "Save Changes" }
                    }
                }
            }
        }
    }
}
