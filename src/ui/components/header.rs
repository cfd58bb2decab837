//! Header bar with the project name and theme toggle.

use dioxus::prelude::*;

use super::theme::ThemeToggle;

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "bh-header",
            role: "banner",
            span { class: "bh-title",
                "Bikers Heaven"
                span { class: "bh-badge", "Bike Catalogue" }
            }
            ThemeToggle {}
        }
    }
}
