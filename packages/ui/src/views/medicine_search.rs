use api::is_searchable;
use dioxus::prelude::*;

use super::{Loader, SearchBox};
use crate::debounce::{use_debounced, use_search};
use crate::{use_api, use_config};

#[component]
pub fn MedicineSearchView() -> Element {
    let api = use_api();
    let config = use_config();
    let query = use_signal(String::new);
    let debounced = use_debounced(query, config.search.debounce_ms);
    let search = use_search(debounced, config.search.min_query_len, move |q: String| {
        let api = api.clone();
        async move { api.search_pharmacies(&q).await }
    });

    let results = search.results.read();
    let loading = (search.loading)();
    let searched = is_searchable(&debounced(), config.search.min_query_len);

    rsx! {
        div {
            class: "space-y-6",
            h1 { class: "text-3xl font-bold text-slate-800 dark:text-slate-200", "Order Medicines" }
            SearchBox { query: query, placeholder: "Search for a pharmacy by name..." }

            div {
                class: "space-y-4",
                if loading {
                    Loader {}
                }
                for pharmacy in results.iter() {
                    ListingCard {
                        key: "{pharmacy.id}",
                        name: pharmacy.name.clone(),
                        address: pharmacy.address.clone(),
                        phone_number: pharmacy.phone_number.clone(),
                        action: "Order / Inquire",
                    }
                }
                if !loading && searched && results.is_empty() {
                    p {
                        class: "text-slate-500 dark:text-slate-400",
                        if let Some(err) = (search.error)() { "{err}" } else { "No pharmacies found matching your search." }
                    }
                }
            }
        }
    }
}

/// Pharmacy or lab entry with a click-to-call action when a phone number is known.
#[component]
pub fn ListingCard(
    name: String,
    address: String,
    #[props(!optional)] phone_number: Option<String>,
    action: String,
) -> Element {
    rsx! {
        div {
            class: "p-6 card-glassmorphism rounded-xl shadow-md flex justify-between items-center",
            div {
                h2 { class: "text-xl font-bold text-slate-800 dark:text-white", "{name}" }
                p { class: "text-slate-600 dark:text-slate-300 mt-1", "{address}" }
            }
            if let Some(phone) = phone_number.filter(|p| !p.is_empty()) {
                a {
                    href: "tel:{phone}",
                    class: "flex-shrink-0 px-4 py-2 bg-green-600 text-white rounded-md text-sm font-medium hover:bg-green-700",
                    "{action}"
                }
            }
        }
    }
}
