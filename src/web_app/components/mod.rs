// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Loading, Modal, ThemeToggle, etc.)
// - search.rs: List controls (BrandFilter, SearchBox, PageLinks)
// - device.rs: Device display components (DeviceCard, DeviceDetailPanel)

pub mod common;
pub mod search;
pub mod device;

// Re-export commonly used components for convenience
pub use common::*;
pub use search::*;
pub use device::*;
