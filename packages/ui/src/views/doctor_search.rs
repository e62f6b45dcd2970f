use api::Doctor;
use dioxus::prelude::*;

use super::{Loader, StarRating};
use crate::components::{Button, ButtonVariant};
use crate::debounce::{use_debounced, use_search};
use crate::format::slot_time;
use crate::icons::FaMagnifyingGlass;
use crate::{use_api, use_config, Icon};

/// Doctor search with inline booking. Fires on first render with an empty
/// query so the full list shows before the patient types.
#[component]
pub fn DoctorSearchView() -> Element {
    let api = use_api();
    let config = use_config();
    let query = use_signal(String::new);
    let debounced = use_debounced(query, config.search.debounce_ms);
    let search = use_search(debounced, 0, move |q: String| {
        let api = api.clone();
        async move { api.search_doctors(&q).await }
    });

    let results = search.results.read();
    let loading = (search.loading)();

    rsx! {
        div {
            class: "space-y-6",
            h1 { class: "text-3xl font-bold text-slate-800 dark:text-slate-200", "Book an Appointment" }
            SearchBox { query: query, placeholder: "Search by doctor name or specialty..." }

            div {
                class: "space-y-4",
                if loading {
                    Loader {}
                }
                if let Some(err) = (search.error)() {
                    p { class: "text-red-500", "{err}" }
                }
                if !loading && results.is_empty() {
                    p {
                        class: "text-slate-500 dark:text-slate-400",
                        if query().is_empty() { "No doctors found." } else { "No doctors found matching your search." }
                    }
                }
                for doctor in results.iter() {
                    DoctorCard { key: "{doctor.id}", doctor: doctor.clone() }
                }
            }
        }
    }
}

/// Rounded search input bound to `query`.
#[component]
pub fn SearchBox(query: Signal<String>, placeholder: String) -> Element {
    rsx! {
        div {
            class: "relative w-full max-w-lg",
            span {
                class: "absolute left-3 top-1/2 -translate-y-1/2 text-slate-400",
                Icon { icon: FaMagnifyingGlass, width: 18, height: 18 }
            }
            input {
                r#type: "text",
                class: "w-full p-3 pl-10 border rounded-full dark:bg-slate-800 dark:border-slate-700 dark:text-white",
                placeholder: placeholder,
                value: query(),
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }
        }
    }
}

#[component]
fn DoctorCard(doctor: Doctor) -> Element {
    let api = use_api();
    let mut selected = use_signal(|| Option::<String>::None);
    let mut message = use_signal(String::new);

    let doctor_id = doctor.id.clone();
    let book = move |_: MouseEvent| {
        let api = api.clone();
        let doctor_id = doctor_id.clone();
        spawn(async move {
            let Some(slot) = selected() else {
                message.set("Please select a time slot.".to_string());
                return;
            };
            message.set("Booking...".to_string());
            match api.book_appointment(&doctor_id, &slot).await {
                Ok(_) => {
                    message.set(
                        "Appointment Booked Successfully! View it in \"My Appointments\"."
                            .to_string(),
                    );
                    selected.set(None);
                }
                Err(e) => message.set(e.to_string()),
            }
        });
    };

    let clinic = doctor.clinic_name.clone().unwrap_or_default();
    let bio = doctor.bio.clone().unwrap_or_default();

    rsx! {
        div {
            class: "p-6 card-glassmorphism rounded-xl shadow-md space-y-4",
            div {
                h2 { class: "text-2xl font-bold text-slate-800 dark:text-white", "{doctor.name}" }
                p {
                    class: "text-indigo-600 dark:text-indigo-400 font-medium",
                    "{doctor.specialty} • {doctor.experience} years exp."
                }
                div {
                    class: "flex items-center gap-2 mt-1",
                    StarRating { filled: doctor.filled_stars() }
                    span { class: "text-sm text-slate-500 dark:text-slate-400", "({doctor.review_count} reviews)" }
                }
                p { class: "text-sm text-slate-500 dark:text-slate-400 mt-1", "{clinic}" }
                p { class: "text-slate-600 dark:text-slate-300 mt-2", "{bio}" }
            }
            div {
                h3 { class: "font-semibold dark:text-white mb-2", "Available Slots:" }
                div {
                    class: "flex flex-wrap gap-3",
                    if doctor.available_slots.is_empty() {
                        p { class: "text-sm text-slate-400 dark:text-slate-500", "No available slots." }
                    }
                    for slot in doctor.available_slots.iter().cloned() {
                        SlotChip {
                            key: "{slot}",
                            active: selected().as_deref() == Some(slot.as_str()),
                            slot: slot.clone(),
                            onselect: move |slot| selected.set(Some(slot)),
                        }
                    }
                }
                if let Some(slot) = selected() {
                    div {
                        class: "mt-4",
                        Button {
                            variant: ButtonVariant::Success,
                            onclick: book,
                            "Confirm Booking for {slot_time(&slot)}"
                        }
                    }
                }
                if !message().is_empty() {
                    p { class: "text-sm text-indigo-600 mt-2", "{message}" }
                }
            }
        }
    }
}

#[component]
fn SlotChip(slot: String, active: bool, onselect: EventHandler<String>) -> Element {
    let class = if active {
        "bg-indigo-600 text-white"
    } else {
        "bg-indigo-100 text-indigo-700 hover:bg-indigo-200 dark:bg-indigo-900 dark:text-indigo-200"
    };
    let label = slot_time(&slot);

    rsx! {
        button {
            class: "px-3 py-1 rounded-full text-sm font-medium {class}",
            onclick: move |_| onselect.call(slot.clone()),
            "{label}"
        }
    }
}
