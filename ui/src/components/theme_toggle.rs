use dioxus::prelude::*;

use crate::core::theme;

/// Flips the `dark` class on the document element. Views that care about the
/// flag observe the class itself, so nothing is prop-drilled from here.
#[component]
pub fn ThemeToggle() -> Element {
    let mut dark = use_signal(theme::is_dark);

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            aria_label: "Toggle dark mode",
            onclick: move |_| {
                let next = !dark();
                theme::set_dark(next);
                dark.set(next);
            },
            if dark() { "☀ Light" } else { "☾ Dark" }
        }
    }
}
