//! Shared UI components for the catalogue page.

pub mod bike_card;
pub mod bike_grid;
pub mod footer;
pub mod header;
pub mod layout;
pub mod theme;

pub use bike_card::BikeCard;
pub use bike_grid::BikeGrid;
pub use footer::Footer;
pub use header::Header;
pub use layout::Layout;
pub use theme::{Theme, ThemeToggle};
