// web_app/api/store.rs - Process-wide catalog and configuration
//
// The catalog is loaded once at startup and shared read-only by every
// request handler. Tests can swap in their own catalog.

use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};

use crate::web_app::catalog::{Catalog, CatalogError};
use crate::web_app::settings::AppConfig;

static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();
static LOAD_FAILURE: OnceLock<String> = OnceLock::new();
static CONFIG: OnceLock<AppConfig> = OnceLock::new();
static TEST_CATALOG_OVERRIDE: Mutex<Option<Arc<Catalog>>> = Mutex::new(None);
static TEST_CONFIG_OVERRIDE: Mutex<Option<AppConfig>> = Mutex::new(None);

/// Initialize the global catalog
pub fn init_catalog(catalog: Catalog) -> Arc<Catalog> {
    let catalog = Arc::new(catalog);
    if CATALOG.set(catalog.clone()).is_err() {
        tracing::warn!("Catalog already initialized");
    } else {
        tracing::info!("Global catalog initialized with {} devices", catalog.len());
    }
    catalog
}

/// Load the catalog file and make it the global catalog
///
/// A failure is remembered so that later requests can report why the
/// catalog is missing.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Arc<Catalog>, CatalogError> {
    let path = path.as_ref();
    let started = chrono::Utc::now();

    match Catalog::from_path(path) {
        Ok(catalog) => {
            let elapsed = chrono::Utc::now() - started;
            tracing::info!(
                "Loaded {} devices from {} in {} ms",
                catalog.len(),
                path.display(),
                elapsed.num_milliseconds()
            );
            Ok(init_catalog(catalog))
        }
        Err(e) => {
            tracing::error!("Failed to load catalog: {}", e);
            let _ = LOAD_FAILURE.set(e.to_string());
            Err(e)
        }
    }
}

/// Set a catalog override for testing
pub fn set_test_catalog(catalog: Catalog) {
    let mut guard = TEST_CATALOG_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(Arc::new(catalog));
}

/// Drop the catalog override so the global catalog (or its absence) shows again
pub fn clear_test_catalog() {
    let mut guard = TEST_CATALOG_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = None;
}

/// Get the global catalog
pub fn get_catalog() -> Result<Arc<Catalog>, CatalogError> {
    // Check for test override first
    {
        let guard = TEST_CATALOG_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref catalog) = *guard {
            return Ok(catalog.clone());
        }
    }

    match CATALOG.get() {
        Some(catalog) => Ok(catalog.clone()),
        None => {
            match LOAD_FAILURE.get() {
                Some(reason) => tracing::warn!("Catalog unavailable: {}", reason),
                None => tracing::warn!("Global catalog is empty!"),
            }
            Err(CatalogError::NotLoaded)
        }
    }
}

/// Why the startup load failed, if it did
pub fn load_failure() -> Option<&'static str> {
    LOAD_FAILURE.get().map(String::as_str)
}

/// Initialize the global configuration
pub fn init_config(config: AppConfig) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Configuration already initialized");
    }
}

/// Set a configuration override for testing
pub fn set_test_config(config: AppConfig) {
    let mut guard = TEST_CONFIG_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(config);
}

/// Current configuration (defaults when nothing was initialized)
pub fn config() -> AppConfig {
    {
        let guard = TEST_CONFIG_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref config) = *guard {
            return config.clone();
        }
    }

    CONFIG.get().cloned().unwrap_or_default()
}
