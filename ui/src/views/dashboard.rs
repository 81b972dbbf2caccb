//! Root dashboard view: owns the record list, the list-view inputs, and the
//! current selection.

use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::catalog::{CatalogState, GpuDetails, GpuSearch, SortKey};
use crate::components::Loading;
use crate::core::api;
use crate::core::model::GpuRecord;

#[component]
pub fn Dashboard() -> Element {
    let mut catalog = use_signal(CatalogState::default);
    let selected = use_signal(|| Option::<GpuRecord>::None);
    let search = use_signal(String::new);
    let sort_key = use_signal(SortKey::default);
    let page = use_signal(|| 1usize);

    // The catalog is fetched once on mount and never re-fetched.
    use_effect(move || {
        spawn(async move {
            let outcome = api::fetch_gpu_list().await;
            if let Err(err) = &outcome {
                error!("gpu list fetch failed: {err}");
            }
            catalog.set(CatalogState::from_fetch(outcome));
        });
    });

    let content = match selected() {
        Some(gpu) => rsx! {
            GpuDetails { gpu, selected }
        },
        None => match catalog() {
            CatalogState::Loading => rsx! {
                Loading {}
            },
            CatalogState::Failed(message) => rsx! {
                div { class: "catalog__error",
                    strong { "Couldn't load the GPU list." }
                    span { " {message}" }
                }
            },
            CatalogState::Ready(records) => rsx! {
                GpuSearch { records, selected, search, sort_key, page }
            },
        },
    };

    rsx! {
        section { class: "page page-dashboard", {content} }
    }
}
