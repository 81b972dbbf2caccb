use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::views::Dashboard;

// Embedded shared theme (ui/assets/theme/main.css); the web bundle ships no
// other static assets.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

/// There is no router: switching between the catalog and the detail panel is
/// local state owned by `Dashboard`.
#[component]
fn App() -> Element {
    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        AppHeader {}
        main {
            Dashboard {}
        }
    }
}
