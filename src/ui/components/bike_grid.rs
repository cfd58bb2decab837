//! Responsive grid of bike cards.

use dioxus::prelude::*;

use crate::catalog::BikeRecord;

use super::bike_card::BikeCard;

#[derive(Props, Clone, PartialEq)]
pub struct BikeGridProps {
    pub bikes: Vec<BikeRecord>,
}

/// Grid of [`BikeCard`]s, one per record in input order, each keyed by
/// its id so identity is stable across re-renders. An empty list
/// renders a single informational message instead of the grid.
#[component]
pub fn BikeGrid(props: BikeGridProps) -> Element {
    if props.bikes.is_empty() {
        return rsx! {
            div { class: "bike-grid-empty", "No bikes available." }
        };
    }

    rsx! {
        section { class: "bike-grid", aria_label: "Bike list",
            for bike in props.bikes.iter() {
                BikeCard { key: "{bike.id}", bike: bike.clone() }
            }
        }
    }
}
