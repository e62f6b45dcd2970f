use api::{partition_appointments, Appointment, AppointmentStatus};
use chrono::Utc;
use dioxus::prelude::*;

use super::{ConfirmDialog, Loader, ReviewModal};
use crate::components::{Button, ButtonVariant};
use crate::format::appointment_time;
use crate::use_api;

/// Upcoming and past appointments, with cancel and review actions.
#[component]
pub fn AppointmentsView() -> Element {
    let api = use_api();
    let mut appointments = use_signal(Vec::<Appointment>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut reviewing = use_signal(|| Option::<Appointment>::None);
    let mut confirming = use_signal(|| Option::<String>::None);
    let mut refresh = use_signal(|| 0u32);

    let load_api = api.clone();
    use_effect(move || {
        // Re-run when `refresh` is bumped
        let _ = refresh();
        let api = load_api.clone();
        spawn(async move {
            loading.set(true);
            match api.my_appointments().await {
                Ok(list) => {
                    appointments.set(list);
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!("Failed to load appointments: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    let cancel = move |id: String| {
        let api = api.clone();
        spawn(async move {
            confirming.set(None);
            match api.cancel_appointment(&id).await {
                Ok(_) => refresh += 1,
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    if loading() && appointments.read().is_empty() {
        return rsx! { Loader {} };
    }

    let now = Utc::now();
    let (upcoming, past) = partition_appointments(&appointments.read(), now);

    rsx! {
        div {
            class: "space-y-8",
            h1 { class: "text-3xl font-bold text-slate-800 dark:text-slate-200", "My Appointments" }
            if let Some(err) = error() {
                div { class: "p-4 bg-red-100 text-red-700 rounded-md", "Error: {err}" }
            }

            section {
                h2 { class: "text-2xl font-semibold text-slate-700 dark:text-slate-300 mb-4", "Upcoming" }
                div {
                    class: "space-y-4",
                    if upcoming.is_empty() {
                        p { class: "text-slate-500 dark:text-slate-400", "No upcoming appointments." }
                    }
                    for appointment in upcoming {
                        AppointmentCard {
                            key: "{appointment.id}",
                            can_cancel: appointment.can_cancel(now),
                            can_review: false,
                            appointment: appointment.clone(),
                            on_cancel: move |id| confirming.set(Some(id)),
                            on_review: move |_| {},
                        }
                    }
                }
            }

            section {
                h2 { class: "text-2xl font-semibold text-slate-700 dark:text-slate-300 mb-4", "Past & Completed" }
                div {
                    class: "space-y-4",
                    if past.is_empty() {
                        p { class: "text-slate-500 dark:text-slate-400", "No past appointments." }
                    }
                    for appointment in past {
                        AppointmentCard {
                            key: "{appointment.id}",
                            can_cancel: false,
                            can_review: appointment.can_review(),
                            appointment: appointment.clone(),
                            on_cancel: move |_| {},
                            on_review: move |appointment| reviewing.set(Some(appointment)),
                        }
                    }
                }
            }
        }

        if let Some(id) = confirming() {
            ConfirmDialog {
                message: "Are you sure you want to cancel this appointment?",
                confirm_label: "Yes, cancel",
                cancel_label: "Keep it",
                on_confirm: move |_| cancel(id.clone()),
                on_cancel: move |_| confirming.set(None),
            }
        }

        if let Some(appointment) = reviewing() {
            ReviewModal {
                appointment: appointment,
                on_close: move |_| reviewing.set(None),
                on_success: move |_| {
                    reviewing.set(None);
                    refresh += 1;
                },
            }
        }
    }
}

#[component]
fn AppointmentCard(
    appointment: Appointment,
    can_cancel: bool,
    can_review: bool,
    on_cancel: EventHandler<String>,
    on_review: EventHandler<Appointment>,
) -> Element {
    let badge = match appointment.status {
        AppointmentStatus::Cancelled => "bg-red-100 text-red-700",
        AppointmentStatus::Completed => "bg-green-100 text-green-700",
        _ => "bg-blue-100 text-blue-700",
    };
    let doctor = appointment.doctor_name.clone().unwrap_or_default();
    let when = appointment_time(&appointment.slot);
    let status = appointment.status.label();
    let id = appointment.id.clone();

    rsx! {
        div {
            class: "p-4 card-glassmorphism rounded-lg shadow-md flex flex-col sm:flex-row justify-between sm:items-center gap-4",
            div {
                p { class: "font-bold text-lg text-slate-800 dark:text-slate-200", "{doctor}" }
                p { class: "text-sm text-slate-500 dark:text-slate-400", "{when}" }
                span { class: "text-sm font-medium px-2 py-0.5 rounded-full {badge}", "{status}" }
            }
            div {
                if can_cancel {
                    Button {
                        variant: ButtonVariant::Danger,
                        class: "px-3 py-1 text-sm",
                        onclick: move |_| on_cancel.call(id.clone()),
                        "Cancel"
                    }
                }
                if can_review {
                    Button {
                        variant: ButtonVariant::Warning,
                        class: "px-3 py-1 text-sm",
                        onclick: move |_| on_review.call(appointment.clone()),
                        "Leave Review"
                    }
                }
            }
        }
    }
}
