use api::is_searchable;
use dioxus::prelude::*;

use super::{ListingCard, Loader, SearchBox};
use crate::debounce::{use_debounced, use_search};
use crate::{use_api, use_config};

#[component]
pub fn LabSearchView() -> Element {
    let api = use_api();
    let config = use_config();
    let query = use_signal(String::new);
    let debounced = use_debounced(query, config.search.debounce_ms);
    let search = use_search(debounced, config.search.min_query_len, move |q: String| {
        let api = api.clone();
        async move { api.search_labs(&q).await }
    });

    let results = search.results.read();
    let loading = (search.loading)();
    let searched = is_searchable(&debounced(), config.search.min_query_len);

    rsx! {
        div {
            class: "space-y-6",
            h1 { class: "text-3xl font-bold text-slate-800 dark:text-slate-200", "Book Lab Tests" }
            SearchBox { query: query, placeholder: "Search for a lab by name..." }

            div {
                class: "space-y-4",
                if loading {
                    Loader {}
                }
                for lab in results.iter() {
                    ListingCard {
                        key: "{lab.id}",
                        name: lab.name.clone(),
                        address: lab.address.clone(),
                        phone_number: lab.phone_number.clone(),
                        action: "Call to Book",
                    }
                }
                if !loading && searched && results.is_empty() {
                    p {
                        class: "text-slate-500 dark:text-slate-400",
                        if let Some(err) = (search.error)() { "{err}" } else { "No labs found matching your search." }
                    }
                }
            }
        }
    }
}
