use dioxus::prelude::*;

/// Centered spinner shown while a fetch is in flight.
#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading",
            div { class: "loading__spinner", role: "status", aria_label: "Loading" }
        }
    }
}
