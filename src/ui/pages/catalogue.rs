//! Catalogue page component.

use dioxus::prelude::*;

use crate::ui::components::{BikeGrid, Layout};
use crate::ui::data::use_bikes;

/// The single page of the application: heading, tagline, then either
/// the loading message, an error message, or the card grid.
#[component]
pub fn CataloguePage() -> Element {
    let data = use_bikes();

    let loading = (data.loading)();
    let error = (data.error)();
    let bikes = (data.bikes)();

    let content = if loading {
        rsx! {
            div { class: "bh-loading", "Loading bikes..." }
        }
    } else if let Some(message) = error {
        rsx! {
            div { class: "bh-error", "{message}" }
        }
    } else {
        rsx! {
            BikeGrid { bikes: bikes }
        }
    };

    rsx! {
        Layout {
            title: "Bike Catalogue".to_string(),

            h1 { class: "bh-heading", "Discover Your Dream Bike" }
            p { class: "bh-tagline",
                "Browse our collection of high-quality bikes with modern styles and the best prices."
            }
            {content}
        }
    }
}
