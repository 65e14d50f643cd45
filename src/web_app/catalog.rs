// web_app/catalog.rs - The immutable device catalog
//
// A catalog is loaded once and then only read. It is shared between
// request handlers behind an `Arc` (see `api::store`).

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::web_app::model::Device;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog {} is not a JSON array of devices: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog is not loaded")]
    NotLoaded,
}

/// Ordered, read-only list of devices
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    devices: Vec<Device>,
}

impl Catalog {
    pub fn new(devices: Vec<Device>) -> Self {
        Catalog { devices }
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let devices: Vec<Device> = serde_json::from_str(json)?;
        Ok(Catalog::new(devices))
    }

    /// Read and parse a catalog file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Catalog::from_json_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Parsed {} devices from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Exact id match against the full catalog
    pub fn find(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id.as_str() == id)
    }
}
