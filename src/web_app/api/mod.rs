// web_app/api/mod.rs - Server-side state and collaborators
//
// This module holds what only exists on the server: the loaded catalog,
// the configuration, and the geolocation client.

pub mod geo;
pub mod store;
