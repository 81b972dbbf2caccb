use dioxus::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

/// Application masthead.
#[component]
pub fn AppHeader() -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "app-header__inner",
                div { class: "app-header__brand",
                    span { class: "app-header__mark", "GPU Price Tracker" }
                    span { class: "app-header__subtitle",
                        "Second-hand GPU prices, tracked over time"
                    }
                }
                ThemeToggle {}
            }
        }
    }
}
