// web_app/mod.rs - Root module for the Leptos web application
//
// This module contains all the components and logic for the device
// catalog: a paginated, filterable card list with a detail modal and
// prices localized by the visitor's country.
//
// Architecture:
// - model/, pricing, settings, catalog, queries: plain data and pure
//   functions (compiled everywhere, no Leptos)
// - server_fns/: Server function declarations (both client and server)
// - api/: Catalog store and geolocation client (SSR only)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod catalog;
pub mod model;
pub mod pricing;
pub mod queries;
pub mod settings;

// Server function declarations - must be available to both client and server
// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

// API module for server-side state (SSR only)
#[cfg(feature = "ssr")]
pub mod api;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
