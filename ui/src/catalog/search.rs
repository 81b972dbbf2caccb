use dioxus::prelude::*;

use super::card::GpuCard;
use super::engine::{self, SortKey, PAGE_SIZE};
use crate::core::model::GpuRecord;

/// Searchable, sortable, paginated catalog grid.
///
/// Owns none of its state: the root view passes the signals down so that
/// search text, sort key, and page survive a round trip through the detail
/// view.
#[component]
pub fn GpuSearch(
    records: Vec<GpuRecord>,
    mut selected: Signal<Option<GpuRecord>>,
    mut search: Signal<String>,
    mut sort_key: Signal<SortKey>,
    mut page: Signal<usize>,
) -> Element {
    let view = engine::paginate(&records, &search(), sort_key(), page(), PAGE_SIZE);
    let total_pages = view.total_pages;
    let current_page = page();
    let total = records.len();

    // Navigation is clamped here; the engine itself never clamps.
    let mut go_to = move |target: usize| {
        if target >= 1 && target <= total_pages {
            page.set(target);
        }
    };

    rsx! {
        section { class: "catalog",
            div { class: "catalog__overview",
                span { class: "catalog__count", "{total} GPUs tracked" }
            }

            div { class: "catalog__controls",
                input {
                    r#type: "text",
                    class: "catalog__search",
                    placeholder: "Search GPU name...",
                    value: "{search()}",
                    oninput: move |evt| {
                        search.set(evt.value());
                        page.set(1);
                    },
                }
                select {
                    class: "catalog__sort",
                    value: "{sort_key().as_str()}",
                    onchange: move |evt| {
                        if let Ok(key) = evt.value().parse::<SortKey>() {
                            sort_key.set(key);
                            page.set(1);
                        }
                    },
                    for key in SortKey::ALL {
                        option {
                            key: "{key.as_str()}",
                            value: "{key.as_str()}",
                            selected: key == sort_key(),
                            "{key.label()}"
                        }
                    }
                }
            }

            if view.page_items.is_empty() {
                p { class: "catalog__placeholder", "No GPUs match your search." }
            } else {
                div { class: "catalog__grid",
                    for gpu in view.page_items.into_iter() {
                        {
                            let entry_key = card_key(&gpu);
                            rsx! {
                                GpuCard {
                                    key: "{entry_key}",
                                    gpu,
                                    on_select: move |picked| selected.set(Some(picked)),
                                }
                            }
                        }
                    }
                }
            }

            if total_pages > 1 {
                div { class: "pagination",
                    button {
                        r#type: "button",
                        class: "button pagination__button",
                        disabled: current_page == 1,
                        onclick: move |_| go_to(1),
                        "⏮ First"
                    }
                    button {
                        r#type: "button",
                        class: "button pagination__button",
                        disabled: current_page == 1,
                        onclick: move |_| go_to(current_page.saturating_sub(1)),
                        "← Prev"
                    }
                    span { class: "pagination__status", "Page {current_page} of {total_pages}" }
                    button {
                        r#type: "button",
                        class: "button pagination__button",
                        disabled: current_page == total_pages,
                        onclick: move |_| go_to(current_page + 1),
                        "Next →"
                    }
                    button {
                        r#type: "button",
                        class: "button pagination__button",
                        disabled: current_page == total_pages,
                        onclick: move |_| go_to(total_pages),
                        "Last ⏭"
                    }
                }
            }
        }
    }
}

// Record ids key the grid when the API provides them; names collide for
// duplicate listings, so they are only the fallback.
fn card_key(gpu: &GpuRecord) -> String {
    match gpu.id {
        Some(id) => id.to_string(),
        None => gpu.gpu_name.clone(),
    }
}
