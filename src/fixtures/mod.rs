// fixtures/mod.rs - Test fixtures module
//
// What is a fixture?
// A fixture is reusable test setup code. Instead of building the same
// device list in every test, we describe it once and reuse it.
//
// Example: Instead of this in every test...
//   let mut d = Device::new("1", "Apple", "iPhone 15");
//   d.price = Some("799".into());
//   ...
//   let catalog = Catalog::new(vec![d, ...]);
//
// We just use: PhoneCatalog::catalog()

pub mod catalogs;

use crate::web_app::catalog::Catalog;
use crate::web_app::model::Device;

/// A simple trait that all test catalogs must implement
pub trait TestCatalog {
    /// The devices of this catalog, in catalog order
    fn devices() -> Vec<Device>;

    /// The devices wrapped in a `Catalog`
    fn catalog() -> Catalog {
        Catalog::new(Self::devices())
    }

    /// The devices as catalog-file JSON
    fn json() -> String {
        serde_json::to_string_pretty(&Self::devices()).unwrap_or_else(|_| "[]".to_string())
    }
}
