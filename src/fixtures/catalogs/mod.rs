// fixtures/catalogs/mod.rs
//
// This module contains definitions for test catalogs.
// Each test catalog is a struct that implements the TestCatalog trait.

pub mod phones;

pub use phones::{PhoneCatalog, PricingCatalog};
