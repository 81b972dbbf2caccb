use dioxus::prelude::*;

use crate::core::format;
use crate::core::model::{price_delta, GpuRecord};

/// Placeholder artwork for records without an image URL.
pub(crate) const FALLBACK_IMAGE: &str =
    "https://uk.static.webuy.com/product_images/Computing/Graphics Cards - PCI-E/SGRAACEA77016G01_m.jpg";

/// How a price move reads from the customer's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Favorable,
    Unfavorable,
    Flat,
}

impl Trend {
    pub fn css_class(self) -> &'static str {
        match self {
            Trend::Favorable => "gpu-card__delta--good",
            Trend::Unfavorable => "gpu-card__delta--bad",
            Trend::Flat => "gpu-card__delta--flat",
        }
    }
}

/// Which way a rising number cuts: buy prices hurt the customer when they
/// rise, sell prices (cash or store credit) help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricePolarity {
    Buy,
    Sell,
}

pub fn classify_delta(delta: f64, polarity: PricePolarity) -> Trend {
    if delta > 0.0 {
        match polarity {
            PricePolarity::Buy => Trend::Unfavorable,
            PricePolarity::Sell => Trend::Favorable,
        }
    } else if delta < 0.0 {
        match polarity {
            PricePolarity::Buy => Trend::Favorable,
            PricePolarity::Sell => Trend::Unfavorable,
        }
    } else {
        // Zero and indeterminate (NaN) both read as "no movement".
        Trend::Flat
    }
}

#[component]
pub fn GpuCard(gpu: GpuRecord, on_select: EventHandler<GpuRecord>) -> Element {
    let image = gpu
        .image
        .clone()
        .unwrap_or_else(|| FALLBACK_IMAGE.to_string());
    let selected = gpu.clone();

    rsx! {
        article {
            class: "gpu-card",
            onclick: move |_| on_select.call(selected.clone()),

            h3 { class: "gpu-card__name", "{gpu.gpu_name}" }

            div { class: "gpu-card__body",
                p { class: "gpu-card__row", "Buy: {format::format_price(gpu.current_buy_price)}" }
                p { class: "gpu-card__row",
                    "Store credit: {format::format_price(gpu.current_sell_store)}"
                }
                p { class: "gpu-card__row", "Cash: {format::format_price(gpu.current_sell_cash)}" }

                {delta_row("Buy price change:", gpu.current_buy_price, gpu.historic_buy_price, PricePolarity::Buy)}
                {delta_row("Store credit change:", gpu.current_sell_store, gpu.historic_sell_store, PricePolarity::Sell)}
                {delta_row("Cash offer change:", gpu.current_sell_cash, gpu.historic_sell_cash, PricePolarity::Sell)}

                if let Some(status) = gpu.online_stock_status.as_ref() {
                    p { class: "gpu-card__row",
                        "Online: {status} ({gpu.online_stock_count.unwrap_or(0)})"
                    }
                }
                if let Some(status) = gpu.store_stock_status.as_ref() {
                    p { class: "gpu-card__row", "Store: {status}" }
                }
                if let Some(rating) = gpu.rating {
                    p { class: "gpu-card__row", "Rating: {format::format_rating(rating)}" }
                }
                if let Some(grade) = gpu.box_grade.as_ref() {
                    p { class: "gpu-card__row", "Grade: {grade}" }
                }
            }

            img {
                class: "gpu-card__image",
                src: "{image}",
                alt: "{gpu.gpu_name}",
                loading: "lazy",
            }
        }
    }
}

fn delta_row(
    label: &'static str,
    current: Option<f64>,
    historic: Option<f64>,
    polarity: PricePolarity,
) -> Element {
    let delta = price_delta(current, historic);
    let class = classify_delta(delta, polarity).css_class();

    rsx! {
        p { class: "gpu-card__row",
            "{label} "
            span { class: "gpu-card__delta {class}", "{format::format_delta(delta)}" }
        }
    }
}
