// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - CatalogPage: Device list with filters, pagination and detail modal

pub mod catalog;

// Re-export page components
pub use catalog::CatalogPage;
