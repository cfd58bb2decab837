//! Page components.

pub mod catalogue;

pub use catalogue::CataloguePage;
