//! Debounced inputs and the search hook built on them.

use std::future::Future;
use std::time::Duration;

use api::{is_searchable, ClientError, QueryGeneration};
use dioxus::dioxus_core::Task;
use dioxus::prelude::*;

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Follow `source`, but only after it has been quiet for `delay_ms`.
///
/// Each change cancels the pending timer, so only the latest value lands.
pub fn use_debounced(source: Signal<String>, delay_ms: u32) -> Signal<String> {
    let mut debounced = use_signal(|| source.peek().clone());
    let mut pending = use_signal(|| Option::<Task>::None);

    use_effect(move || {
        let value = source();
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
        let task = spawn(async move {
            sleep(Duration::from_millis(u64::from(delay_ms))).await;
            if *debounced.peek() != value {
                debounced.set(value);
            }
        });
        pending.set(Some(task));
    });

    debounced
}

/// Results of a search-as-you-type box.
pub struct SearchState<T: 'static> {
    pub results: Signal<Vec<T>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
}

impl<T: 'static> Clone for SearchState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SearchState<T> {}

/// Run `search` whenever `query` settles.
///
/// Queries shorter than `min_len` clear the results without a request.
/// Responses that arrive after a newer query was issued are dropped.
pub fn use_search<T, F, Fut>(query: Signal<String>, min_len: usize, search: F) -> SearchState<T>
where
    T: 'static,
    F: Fn(String) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ClientError>> + 'static,
{
    let mut results = use_signal(Vec::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let generation = use_hook(QueryGeneration::new);

    use_effect(move || {
        let q = query();
        let ticket = generation.next();
        if !is_searchable(&q, min_len) {
            results.set(Vec::new());
            loading.set(false);
            error.set(None);
            return;
        }

        loading.set(true);
        error.set(None);
        let request = search(q.trim().to_string());
        let generation = generation.clone();
        spawn(async move {
            let outcome = request.await;
            if !generation.is_current(ticket) {
                return;
            }
            match outcome {
                Ok(found) => results.set(found),
                Err(e) => {
                    tracing::error!("Search for {:?} failed: {}", q, e);
                    results.set(Vec::new());
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    SearchState {
        results,
        loading,
        error,
    }
}
