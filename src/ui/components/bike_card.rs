//! Card component that displays a bike's image and details.

use dioxus::prelude::*;

use crate::catalog::{format_price, BikeRecord};

#[derive(Props, Clone, PartialEq)]
pub struct BikeCardProps {
    pub bike: BikeRecord,
}

/// One catalogue card. Pure function of its record: no state, no
/// effects. Focusable so keyboard users can walk the grid.
#[component]
pub fn BikeCard(props: BikeCardProps) -> Element {
    let bike = &props.bike;
    let label = format!("{} - {}", bike.name, bike.model);
    let price = format_price(bike.price);

    rsx! {
        article {
            class: "bike-card",
            tabindex: "0",
            aria_label: "{label}",
            img {
                class: "bike-image",
                src: "{bike.image}",
                alt: "{label}",
                loading: "lazy",
            }
            div { class: "bike-details",
                div { class: "bike-title", "{bike.name}" }
                div { class: "bike-meta", "{bike.model}" }
                div {
                    class: "bike-price",
                    aria_label: "{bike.price} USD",
                    "{price}"
                }
            }
        }
    }
}
