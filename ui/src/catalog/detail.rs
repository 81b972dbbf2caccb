//! Per-GPU price history panel.

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use futures_util::StreamExt;

use super::card::FALLBACK_IMAGE;
use super::chart::PriceChart;
use crate::components::Loading;
use crate::core::api::{self, ApiError};
use crate::core::model::{GpuRecord, PricePoint};
use crate::core::{format, theme};

/// Lifecycle of the history fetch for the selected record.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryState {
    Loading,
    Loaded(Vec<PricePoint>),
    Empty,
}

/// A failed fetch and an empty series both land in `Empty`: the detail view
/// degrades to the "no data" notice, never an error screen.
pub(crate) fn classify_history(result: Result<Vec<PricePoint>, ApiError>) -> HistoryState {
    match result {
        Ok(points) if points.is_empty() => HistoryState::Empty,
        Ok(points) => HistoryState::Loaded(points),
        Err(_) => HistoryState::Empty,
    }
}

struct HistoryRequest {
    generation: u64,
    gpu_name: String,
}

#[component]
pub fn GpuDetails(gpu: ReadOnlySignal<GpuRecord>, selected: Signal<Option<GpuRecord>>) -> Element {
    let mut history = use_signal(|| HistoryState::Loading);
    let mut generation = use_signal(|| 0u64);

    let loader = use_coroutine(move |mut rx: UnboundedReceiver<HistoryRequest>| async move {
        while let Some(request) = rx.next().await {
            let outcome = api::fetch_price_history(&request.gpu_name).await;

            // A newer selection may have superseded this request while the
            // fetch was in flight; its response must not win.
            if *generation.peek() != request.generation {
                continue;
            }

            if let Err(err) = &outcome {
                warn!(
                    "price history fetch for `{}` failed: {err}",
                    request.gpu_name
                );
            }
            history.set(classify_history(outcome));
        }
    });

    use_effect(move || {
        let gpu_name = gpu().gpu_name;
        let next = *generation.peek() + 1;
        generation.set(next);
        history.set(HistoryState::Loading);
        loader.send(HistoryRequest {
            generation: next,
            gpu_name,
        });
    });

    let dark = theme::use_dark_mode();

    rsx! {
        section { class: "detail",
            match history() {
                HistoryState::Loading => rsx! {
                    Loading {}
                },
                HistoryState::Empty => rsx! {
                    {back_button(selected)}
                    div { class: "detail__empty", "No data found for this GPU." }
                },
                HistoryState::Loaded(points) => render_loaded(&gpu(), &points, dark(), selected),
            }
        }
    }
}

fn back_button(mut selected: Signal<Option<GpuRecord>>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "button button--primary detail__back",
            onclick: move |_| selected.set(None),
            "← Back to List"
        }
    }
}

fn render_loaded(
    gpu: &GpuRecord,
    points: &[PricePoint],
    dark: bool,
    selected: Signal<Option<GpuRecord>>,
) -> Element {
    let Some(latest) = points.last() else {
        // Loaded always carries at least one point; see classify_history.
        return rsx! {
            {back_button(selected)}
            div { class: "detail__empty", "No data found for this GPU." }
        };
    };

    let image = gpu
        .image
        .clone()
        .unwrap_or_else(|| FALLBACK_IMAGE.to_string());

    rsx! {
        {back_button(selected)}

        div { class: "detail__summary",
            div { class: "detail__media",
                h2 { class: "detail__name", "{gpu.gpu_name}" }
                img { class: "detail__image", src: "{image}", alt: "{gpu.gpu_name}" }
                if let Some(url) = gpu.product_url.as_ref() {
                    a {
                        class: "button button--accent detail__listing",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View listing"
                    }
                }
            }

            ul { class: "detail__grid",
                {metric("Current Price", format::format_price(latest.buy_price))}
                {metric("Sell to Store", format::format_price(latest.sell_store))}
                {metric("Sell for Cash", format::format_price(latest.sell_cash))}
                if let Some(status) = gpu.online_stock_status.as_ref() {
                    {metric("Online Stock", format!("{status} ({})", gpu.online_stock_count.unwrap_or(0)))}
                }
                if let Some(status) = gpu.store_stock_status.as_ref() {
                    {metric("Store Stock", status.clone())}
                }
                {metric("Rating", gpu.rating.map(format::format_rating).unwrap_or_else(|| "N/A".into()))}
                {metric("Grade", gpu.box_grade.clone().unwrap_or_else(|| "N/A".into()))}
                {metric("Last Updated", format::format_date_label(&latest.date))}
            }
        }

        PriceChart { points: points.to_vec(), dark }
    }
}

fn metric(label: &'static str, value: String) -> Element {
    rsx! {
        li {
            span { class: "detail__metric-label", "{label}" }
            span { class: "detail__metric-value", "{value}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str) -> PricePoint {
        PricePoint {
            date: date.into(),
            buy_price: Some(300.0),
            sell_cash: Some(210.0),
            sell_store: Some(240.0),
        }
    }

    #[test]
    fn empty_series_resolves_to_empty() {
        assert_eq!(classify_history(Ok(Vec::new())), HistoryState::Empty);
    }

    #[test]
    fn failed_fetch_resolves_to_empty() {
        assert_eq!(
            classify_history(Err(ApiError::Unsupported)),
            HistoryState::Empty
        );
    }

    #[test]
    fn populated_series_resolves_to_loaded() {
        let points = vec![point("2024-10-01"), point("2024-11-01")];
        assert_eq!(
            classify_history(Ok(points.clone())),
            HistoryState::Loaded(points)
        );
    }
}
