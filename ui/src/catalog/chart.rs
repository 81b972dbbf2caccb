//! Inline SVG line chart for the price-history series.
//!
//! Three fixed series (buy, cash, store credit) keyed by the API's date
//! labels. Axis, grid, legend, and tooltip colors all derive from the
//! dark-mode flag passed in by the detail view, so a theme flip restyles the
//! chart on the next render without touching the data.

use dioxus::prelude::*;

use crate::core::format;
use crate::core::model::PricePoint;

const CHART_WIDTH: f64 = 760.0;
const CHART_HEIGHT: f64 = 360.0;
const PADDING: f64 = 48.0;

type SeriesPick = fn(&PricePoint) -> Option<f64>;

/// Label, stroke color, and field accessor per series.
const SERIES: [(&str, &str, SeriesPick); 3] = [
    ("Buy Price", "#3b82f6", |point| point.buy_price),
    ("Cash Price", "#f59e0b", |point| point.sell_cash),
    ("Store Credit", "#10b981", |point| point.sell_store),
];

struct ChartPalette {
    axis: &'static str,
    grid: &'static str,
    legend: &'static str,
    tooltip_bg: &'static str,
    tooltip_title: &'static str,
    tooltip_body: &'static str,
}

fn chart_palette(dark: bool) -> ChartPalette {
    if dark {
        ChartPalette {
            axis: "#d1d5db",
            grid: "#374151",
            legend: "#f3f4f6",
            tooltip_bg: "#1f2937",
            tooltip_title: "#f9fafb",
            tooltip_body: "#d1d5db",
        }
    } else {
        ChartPalette {
            axis: "#4b5563",
            grid: "#e5e7eb",
            legend: "#1f2937",
            tooltip_bg: "#ffffff",
            tooltip_title: "#111827",
            tooltip_body: "#4b5563",
        }
    }
}

/// Min/max across every present value, padded so a flat series still gets a
/// visible band.
fn value_bounds(points: &[PricePoint]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for point in points {
        for (_, _, pick) in SERIES {
            if let Some(value) = pick(point) {
                lo = lo.min(value);
                hi = hi.max(value);
            }
        }
    }
    if lo > hi {
        (0.0, 1.0)
    } else if hi - lo < f64::EPSILON {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    }
}

fn x_at(index: usize, count: usize) -> f64 {
    let span = CHART_WIDTH - 2.0 * PADDING;
    PADDING + span * (index as f64 / count.saturating_sub(1).max(1) as f64)
}

fn y_at(value: f64, bounds: (f64, f64)) -> f64 {
    let (lo, hi) = bounds;
    let span = CHART_HEIGHT - 2.0 * PADDING;
    PADDING + span * (1.0 - (value - lo) / (hi - lo))
}

/// Index/value pairs for one series; dates with no sample are skipped, so
/// the line bridges gaps instead of dropping to zero.
fn series_samples(points: &[PricePoint], pick: SeriesPick) -> Vec<(usize, f64)> {
    points
        .iter()
        .enumerate()
        .filter_map(|(index, point)| pick(point).map(|value| (index, value)))
        .collect()
}

fn line_path(samples: &[(usize, f64)], count: usize, bounds: (f64, f64)) -> String {
    let mut path = String::new();
    for (i, (index, value)) in samples.iter().enumerate() {
        let x = x_at(*index, count);
        let y = y_at(*value, bounds);
        if i == 0 {
            path.push_str(&format!("M {x:.1} {y:.1}"));
        } else {
            path.push_str(&format!(" L {x:.1} {y:.1}"));
        }
    }
    path
}

/// Sparse x-axis labels: first, middle, last.
fn label_indexes(count: usize) -> Vec<usize> {
    let mut indexes = vec![0, count / 2, count.saturating_sub(1)];
    indexes.dedup();
    indexes
}

#[component]
pub fn PriceChart(points: Vec<PricePoint>, dark: bool) -> Element {
    let palette = chart_palette(dark);
    let count = points.len();
    let bounds = value_bounds(&points);
    let (lo, hi) = bounds;

    let mut hovered: Signal<Option<usize>> = use_signal(|| None);
    let mut frame_width = use_signal(|| 0.0f64);
    let padding_ratio = PADDING / CHART_WIDTH;

    let y_ticks: Vec<(f64, String)> = (0..5)
        .map(|i| {
            let fraction = i as f64 / 4.0;
            let y = PADDING + (CHART_HEIGHT - 2.0 * PADDING) * fraction;
            (y, format!("£{:.0}", hi - (hi - lo) * fraction))
        })
        .collect();

    rsx! {
        div {
            class: "price-chart",
            onmounted: move |evt| {
                let mounted = evt.data().clone();
                spawn(async move {
                    if let Ok(rect) = mounted.get_client_rect().await {
                        frame_width.set(rect.width());
                    }
                });
            },
            onmouseleave: move |_| hovered.set(None),
            onmousemove: move |evt| {
                let element_x = evt.data().element_coordinates().x;
                let width = *frame_width.read();
                if width <= 0.0 || count == 0 {
                    return;
                }

                let fraction = element_x / width;
                let start = padding_ratio;
                let end = 1.0 - padding_ratio;
                let index = if fraction <= start {
                    0
                } else if fraction >= end {
                    count - 1
                } else {
                    let chart_fraction = (fraction - start) / (end - start);
                    ((chart_fraction * count.saturating_sub(1) as f64).round() as usize)
                        .min(count - 1)
                };
                hovered.set(Some(index));
            },

            svg {
                class: "price-chart__svg",
                view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                "preserveAspectRatio": "xMidYMid meet",

                for (y, label) in y_ticks {
                    line {
                        x1: "{PADDING}",
                        y1: "{y}",
                        x2: "{CHART_WIDTH - PADDING}",
                        y2: "{y}",
                        stroke: "{palette.grid}",
                        "stroke-width": "1",
                    }
                    text {
                        x: "{PADDING - 6.0}",
                        y: "{y + 4.0}",
                        fill: "{palette.axis}",
                        "font-size": "11",
                        "text-anchor": "end",
                        "{label}"
                    }
                }

                for index in label_indexes(count) {
                    if let Some(point) = points.get(index) {
                        text {
                            x: "{x_at(index, count)}",
                            y: "{CHART_HEIGHT - PADDING + 18.0}",
                            fill: "{palette.axis}",
                            "font-size": "11",
                            "text-anchor": "middle",
                            "{format::format_date_label(&point.date)}"
                        }
                    }
                }

                for (label, color, pick) in SERIES {
                    {
                        let samples = series_samples(&points, pick);
                        let path = line_path(&samples, count, bounds);
                        rsx! {
                            path {
                                key: "{label}-line",
                                d: "{path}",
                                fill: "none",
                                stroke: "{color}",
                                "stroke-width": "2",
                            }
                            for (index, value) in samples {
                                circle {
                                    key: "{label}-point-{index}",
                                    cx: "{x_at(index, count)}",
                                    cy: "{y_at(value, bounds)}",
                                    r: "3",
                                    fill: "{color}",
                                }
                            }
                        }
                    }
                }

                if let Some(index) = hovered() {
                    line {
                        x1: "{x_at(index, count)}",
                        y1: "{PADDING}",
                        x2: "{x_at(index, count)}",
                        y2: "{CHART_HEIGHT - PADDING}",
                        stroke: "{palette.axis}",
                        "stroke-width": "1",
                        "stroke-dasharray": "4,4",
                        opacity: "0.7",
                    }
                }
            }

            if let Some(index) = hovered() {
                if let Some(point) = points.get(index) {
                    {
                        let point_pct = (index as f64 / count.saturating_sub(1).max(1) as f64) * 100.0;
                        let tooltip_left = if point_pct < 50.0 {
                            format!("calc({}% + 16px)", point_pct.max(5.0))
                        } else {
                            format!("calc({}% - 180px)", point_pct.min(95.0))
                        };
                        rsx! {
                            div {
                                class: "price-chart__tooltip",
                                style: "left: {tooltip_left}; background: {palette.tooltip_bg}; color: {palette.tooltip_body};",
                                div {
                                    class: "price-chart__tooltip-title",
                                    style: "color: {palette.tooltip_title};",
                                    "{format::format_date_label(&point.date)}"
                                }
                                for (label, color, pick) in SERIES {
                                    if let Some(value) = pick(point) {
                                        div { class: "price-chart__tooltip-row",
                                            span {
                                                class: "price-chart__swatch",
                                                style: "background: {color};",
                                            }
                                            span { "{label}" }
                                            span { class: "price-chart__tooltip-value",
                                                "{format::format_price(Some(value))}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "price-chart__legend", style: "color: {palette.legend};",
                for (label, color, _) in SERIES {
                    span { class: "price-chart__legend-item",
                        span { class: "price-chart__swatch", style: "background: {color};" }
                        "{label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, buy: Option<f64>, cash: Option<f64>, store: Option<f64>) -> PricePoint {
        PricePoint {
            date: date.into(),
            buy_price: buy,
            sell_cash: cash,
            sell_store: store,
        }
    }

    #[test]
    fn bounds_span_all_present_values() {
        let points = vec![
            point("2024-01-01", Some(300.0), Some(210.0), None),
            point("2024-02-01", Some(280.0), None, Some(350.0)),
        ];
        assert_eq!(value_bounds(&points), (210.0, 350.0));
    }

    #[test]
    fn flat_and_empty_series_still_get_a_band() {
        let flat = vec![point("2024-01-01", Some(100.0), None, None)];
        assert_eq!(value_bounds(&flat), (99.0, 101.0));
        assert_eq!(value_bounds(&[]), (0.0, 1.0));
    }

    #[test]
    fn gaps_are_skipped_not_zeroed() {
        let points = vec![
            point("2024-01-01", Some(300.0), None, None),
            point("2024-02-01", None, None, None),
            point("2024-03-01", Some(320.0), None, None),
        ];
        let samples = series_samples(&points, SERIES[0].2);
        assert_eq!(samples, vec![(0, 300.0), (2, 320.0)]);
    }

    #[test]
    fn path_walks_left_to_right() {
        let samples = vec![(0, 100.0), (1, 200.0)];
        let path = line_path(&samples, 2, (100.0, 200.0));
        assert!(path.starts_with("M "));
        assert_eq!(path.matches(" L ").count(), 1);
    }

    #[test]
    fn label_indexes_are_deduplicated_for_short_series() {
        assert_eq!(label_indexes(1), vec![0]);
        assert_eq!(label_indexes(5), vec![0, 2, 4]);
    }
}
