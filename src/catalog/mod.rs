//! Catalogue data model and sources.
//!
//! The catalogue is an ordered list of [`BikeRecord`] values. In this
//! version the only live source is the built-in sample list; the remote
//! source is an explicit, flag-gated extension point (see
//! [`CatalogSource::select`]).

use serde::{Deserialize, Serialize};

/// One catalogue entry. Immutable after creation; the list it belongs
/// to is always replaced wholesale, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BikeRecord {
    /// Unique within the current list; used as the stable render key.
    /// Uniqueness is a precondition, not enforced here - a duplicate
    /// means ambiguous keying downstream, never a crash.
    pub id: String,
    /// Display title, non-empty.
    pub name: String,
    /// Secondary label (year + category).
    pub model: String,
    /// Whole USD units.
    pub price: u64,
    /// Raster image URL. An unreachable URL degrades to the browser's
    /// broken-image rendering; nothing here depends on it loading.
    pub image: String,
}

impl BikeRecord {
    fn new(id: &str, name: &str, model: &str, price: u64, image: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            model: model.to_string(),
            price,
            image: image.to_string(),
        }
    }
}

/// The built-in sample catalogue: four records, ids "1".."4", in
/// insertion order. Ordering is preserved all the way to display.
pub fn sample_bikes() -> Vec<BikeRecord> {
    vec![
        BikeRecord::new(
            "1",
            "Trek Domane AL 2",
            "2023 Road",
            1299,
            "https://images.pexels.com/photos/276528/pexels-photo-276528.jpeg?h=200&w=400&fit=crop",
        ),
        BikeRecord::new(
            "2",
            "Canyon Grand Canyon 7",
            "2022 Mountain",
            1499,
            "https://images.pexels.com/photos/100582/pexels-photo-100582.jpeg?h=200&w=400&fit=crop",
        ),
        BikeRecord::new(
            "3",
            "Specialized Sirrus X 4.0",
            "2023 Hybrid",
            1799,
            "https://images.pexels.com/photos/276528/pexels-photo-276528.jpeg?h=201&w=401&fit=crop",
        ),
        BikeRecord::new(
            "4",
            "Santa Cruz Chameleon",
            "2023 Trail",
            1999,
            "https://images.pexels.com/photos/127642/pexels-photo-127642.jpeg?h=200&w=400&fit=crop",
        ),
    ]
}

/// Format a whole-dollar price with comma thousands-grouping.
///
/// `1299` renders as `$1,299`; no decimals are added.
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Errors a catalogue source can produce.
///
/// The mock source is infallible; this taxonomy exists for the remote
/// extension point. A failed load is surfaced as an empty list plus a
/// visible message, with the loading flag cleared.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The remote source was selected but no remote protocol is
    /// implemented yet (endpoint shape is still unspecified).
    #[error("remote catalogue at {api_base} is not available yet")]
    RemoteUnavailable { api_base: String },
}

/// The configuration slice that drives source selection. Built from
/// the loaded config in the server and handed to the UI tree, so the
/// file layer and the environment go through the same path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub api_base: Option<String>,
    pub remote_fetch: bool,
}

impl CatalogSettings {
    pub fn source(&self) -> CatalogSource {
        CatalogSource::select(self.api_base.as_deref(), self.remote_fetch)
    }
}

/// Where catalogue data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The built-in sample list.
    Mock,
    /// A future remote API. Selected only when explicitly enabled;
    /// loading from it currently always fails.
    Remote { api_base: String },
}

impl CatalogSource {
    /// Pick a source from configuration.
    ///
    /// `remote_fetch` is the explicit feature flag replacing what used
    /// to be a hard-coded short-circuit: remote is chosen only when the
    /// flag is on AND an API base is configured. Everything else falls
    /// back to the mock source.
    pub fn select(api_base: Option<&str>, remote_fetch: bool) -> Self {
        match api_base {
            Some(base) if remote_fetch && !base.is_empty() => CatalogSource::Remote {
                api_base: base.to_string(),
            },
            _ => CatalogSource::Mock,
        }
    }

    /// Load the catalogue list from this source.
    pub fn load(&self) -> Result<Vec<BikeRecord>, CatalogError> {
        match self {
            CatalogSource::Mock => Ok(sample_bikes()),
            CatalogSource::Remote { api_base } => {
                tracing::warn!("remote catalogue fetch requested but not implemented");
                Err(CatalogError::RemoteUnavailable {
                    api_base: api_base.clone(),
                })
            }
        }
    }
}
