#![cfg(test)]
/*!
Theme selector lint for the web build.

Purpose:
- Ensure that critical CSS selectors required by the UI (the catalog grid,
  cards, pagination, and the detail/chart experience) remain present in the
  shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in the shipped bundle.

How it works:
- We compile-time embed the shared theme using `include_str!` pointing to the
  `ui/` location (mirrors the constant in `web/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "html.dark",
    "body {",
    ".page {",
    // Masthead & shared UI
    ".app-header",
    ".theme-toggle",
    ".button {",
    ".button--primary",
    ".button--accent",
    // Catalog grid
    ".catalog__controls",
    ".catalog__grid",
    ".catalog__placeholder",
    ".catalog__error",
    // Cards
    ".gpu-card {",
    ".gpu-card__delta--good",
    ".gpu-card__delta--bad",
    ".gpu-card__delta--flat",
    // Pagination
    ".pagination {",
    ".pagination__status",
    // Detail & chart
    ".detail__summary",
    ".detail__grid",
    ".detail__empty",
    ".price-chart",
    ".price-chart__tooltip",
    ".price-chart__legend",
    // Spinner
    ".loading__spinner",
];

#[test]
fn required_selectors_are_present() {
    let mut missing = Vec::new();
    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }
    assert!(
        missing.is_empty(),
        "Missing required selectors in ui/assets/theme/main.css: {missing:?}"
    );
}
