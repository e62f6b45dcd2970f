use api::{Appointment, ReviewRequest};
use dioxus::prelude::*;

use super::{ModalOverlay, StarInput};
use crate::components::{Button, ButtonVariant, Label, TextArea};
use crate::use_api;

/// Rate a completed appointment's doctor.
#[component]
pub fn ReviewModal(
    appointment: Appointment,
    on_close: EventHandler<()>,
    on_success: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut rating = use_signal(|| 0u8);
    let mut comment = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let doctor_id = appointment.doctor_id.clone();
    let appointment_id = appointment.id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = match ReviewRequest::new(
            doctor_id.clone(),
            appointment_id.clone(),
            rating(),
            comment(),
        ) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_string());
                return;
            }
        };
        let api = api.clone();
        spawn(async move {
            submitting.set(true);
            error.set(String::new());
            match api.submit_review(&request).await {
                Ok(_) => {
                    tracing::info!("Review submitted for appointment {}", request.appointment_id);
                    on_success.call(());
                }
                Err(e) => error.set(e.to_string()),
            }
            submitting.set(false);
        });
    };

    let doctor = appointment.doctor_name.clone().unwrap_or_default();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            h2 { class: "text-xl font-bold dark:text-slate-200 mb-2", "Leave a Review" }
            p { class: "mb-4 dark:text-slate-300", "How was your appointment with {doctor}?" }

            form {
                class: "space-y-4",
                onsubmit: handle_submit,
                div {
                    Label { "Rating *" }
                    StarInput { value: rating(), onchange: move |value| rating.set(value) }
                }
                div {
                    Label { r#for: "comment", "Comment (Optional)" }
                    TextArea {
                        id: "comment",
                        placeholder: "Share your experience...",
                        value: comment(),
                        oninput: move |evt: FormEvent| comment.set(evt.value()),
                    }
                }
                if !error().is_empty() {
                    p { class: "text-red-500 text-sm", "{error}" }
                }
                div {
                    class: "flex justify-end gap-3 mt-6",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Submitting..." } else { "Submit Review" }
                    }
                }
            }
        }
    }
}
