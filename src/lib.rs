//! Bikers Heaven - Bike Catalogue
//!
//! A server-rendered single-page catalogue of bicycles.
//!
//! This library provides:
//! - The catalogue data model and mock data source
//! - Layered configuration (file + environment)
//! - Dioxus components for the catalogue UI (header, card grid, footer)
//! - Axum handlers that render the page server-side

pub mod catalog;
pub mod config;
pub mod ui;
