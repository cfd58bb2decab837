//! Footer with the copyright line.

use chrono::Datelike;
use dioxus::prelude::*;

/// The current calendar year, computed at render time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[component]
pub fn Footer() -> Element {
    let year = current_year();

    rsx! {
        footer { class: "bh-footer",
            "© {year} Bikers Heaven — Bike Catalogue | Crafted with "
            span { role: "img", aria_label: "bike", "🚴‍♂️" }
        }
    }
}
