use api::PrescriptionRecord;
use dioxus::prelude::*;

use super::Loader;
use crate::format::long_date;
use crate::icons::FaFileMedical;
use crate::{use_api, Icon};

/// Read-only consultation history.
#[component]
pub fn RecordsView() -> Element {
    let api = use_api();
    let records = use_resource(move || {
        let api = api.clone();
        async move { api.my_records().await }
    });

    rsx! {
        div {
            class: "space-y-6",
            h1 { class: "text-3xl font-bold text-slate-800 dark:text-slate-200", "My Medical Records" }
            p { class: "text-lg text-slate-500 dark:text-slate-400", "A history of all your past consultations." }

            {match &*records.read() {
                None => rsx! { Loader {} },
                Some(Err(e)) => rsx! {
                    div { class: "p-4 bg-red-100 text-red-700 rounded-md", "Error: {e}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "text-slate-500 dark:text-slate-400", "No medical records found." }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "space-y-6",
                        for record in list.iter() {
                            RecordCard { key: "{record.id}", record: record.clone() }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn RecordCard(record: PrescriptionRecord) -> Element {
    let date = long_date(&record.created_at);

    rsx! {
        div {
            class: "p-6 card-glassmorphism rounded-xl shadow-md",
            div {
                class: "flex items-center gap-2",
                span { class: "text-indigo-500", Icon { icon: FaFileMedical, width: 20, height: 20 } }
                h2 { class: "text-xl font-bold text-slate-800 dark:text-white", "Consultation on {date}" }
            }
            div {
                class: "mt-4 space-y-3",
                InfoRow { label: "Complaint", value: record.complaint.clone() }
                InfoRow { label: "Diagnosis", value: record.diagnosis.clone() }
                InfoRow { label: "Advice", value: record.advice.clone() }

                if !record.medicines.is_empty() {
                    div {
                        h3 { class: "font-semibold text-slate-700 dark:text-slate-300", "Medicines Prescribed:" }
                        ul {
                            class: "list-disc list-inside text-slate-600 dark:text-slate-400",
                            for (i, medicine) in record.medicines.iter().enumerate() {
                                li { key: "{i}", "{medicine.summary()}" }
                            }
                        }
                    }
                }
                if !record.tests.is_empty() {
                    div {
                        h3 { class: "font-semibold text-slate-700 dark:text-slate-300", "Tests Advised:" }
                        ul {
                            class: "list-disc list-inside text-slate-600 dark:text-slate-400",
                            for (i, test) in record.tests.iter().enumerate() {
                                li { key: "{i}", "{test}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Labelled paragraph, hidden when the value is blank.
#[component]
fn InfoRow(label: String, #[props(!optional)] value: Option<String>) -> Element {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return rsx! {};
    };

    rsx! {
        div {
            h3 { class: "font-semibold text-slate-700 dark:text-slate-300", "{label}:" }
            p { class: "text-slate-600 dark:text-slate-400", "{value}" }
        }
    }
}
