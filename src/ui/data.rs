//! Catalogue data provider for the UI.
//!
//! `use_bikes` is the single place components get catalogue data from.
//! It runs once per mount: loading starts true with an empty list, the
//! selected source resolves, and loading clears. There is no refresh,
//! edit, or delete for the lifetime of the session.

use dioxus::prelude::*;

use crate::catalog::{BikeRecord, CatalogSettings};
use crate::config;

/// State exposed by [`use_bikes`]. Handed down as read-only props;
/// nothing outside the hook writes these signals.
#[derive(Clone, Copy)]
pub struct BikesData {
    pub bikes: Signal<Vec<BikeRecord>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
}

/// Hook supplying the catalogue list and a loading flag.
///
/// Settings come from the [`CatalogSettings`] context the server
/// provides at the tree root (so the layered config file is honored);
/// a tree rendered without one falls back to environment variables.
/// Source selection honors the `remote_fetch` flag (off by default),
/// so the only live strategy today is the built-in sample list, which
/// resolves synchronously. A failed load leaves the list empty and
/// records a message for display, with loading cleared either way.
pub fn use_bikes() -> BikesData {
    let mut bikes = use_signal(Vec::<BikeRecord>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    use_hook(move || {
        let settings = try_consume_context::<CatalogSettings>()
            .unwrap_or_else(config::catalog_settings_from_env);
        match settings.source().load() {
            Ok(list) => {
                tracing::debug!(count = list.len(), "catalogue resolved");
                bikes.set(list);
            }
            Err(e) => {
                tracing::warn!("catalogue load failed: {}", e);
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    });

    BikesData {
        bikes,
        loading,
        error,
    }
}
