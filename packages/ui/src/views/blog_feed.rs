use dioxus::prelude::*;

use super::Loader;
use crate::format::long_date;
use crate::use_api;

/// Health articles from the clinic's doctors.
#[component]
pub fn BlogFeedView() -> Element {
    let api = use_api();
    let articles = use_resource(move || {
        let api = api.clone();
        async move { api.articles().await }
    });

    rsx! {
        div {
            class: "space-y-6",
            h1 { class: "text-3xl font-bold text-slate-800 dark:text-slate-200", "Health Feed" }
            p { class: "text-lg text-slate-500 dark:text-slate-400", "Articles from our expert doctors." }

            {match &*articles.read() {
                None => rsx! { Loader {} },
                Some(Err(e)) => rsx! {
                    div { class: "p-4 bg-red-100 text-red-700 rounded-md", "Error: {e}" }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "space-y-6",
                        for article in list.iter() {
                            div {
                                key: "{article.id}",
                                class: "p-6 rounded-xl shadow-md card-glassmorphism",
                                h2 { class: "text-2xl font-bold text-slate-800 dark:text-white", "{article.title}" }
                                p {
                                    class: "text-sm text-slate-500 dark:text-slate-400 mt-1",
                                    "By {article.byline()}"
                                    if let Some(published) = article.published_at.as_deref() {
                                        " on {long_date(published)}"
                                    }
                                }
                                p { class: "text-slate-600 dark:text-slate-300 mt-4 whitespace-pre-line", "{article.content}" }
                            }
                        }
                    }
                },
            }}
        }
    }
}
