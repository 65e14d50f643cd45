// sync/mod.rs - Catalog updater
//
// Fetches phone data from an upstream JSON API and rewrites the catalog
// file. Upstream APIs name their fields differently, so each catalog
// field is taken from the first key in a list of candidates that holds a
// non-empty value.
//
// The mapping is pure and always compiled; the HTTP and file parts need
// the `sync-tools` feature.

use serde_json::{json, Map, Value};
use std::path::PathBuf;
use thiserror::Error;

use crate::web_app::model::Device;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("API_URL is not set; point it at a phones API endpoint")]
    MissingApiUrl,

    #[cfg(feature = "sync-tools")]
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("unexpected API response: {0}")]
    UnexpectedShape(String),

    #[error("failed to encode catalog: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where to fetch from and where to write
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub output_path: PathBuf,
}

impl SyncConfig {
    pub fn from_env() -> Result<Self, SyncError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, SyncError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("API_URL")
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or(SyncError::MissingApiUrl)?;

        let api_key = lookup("API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let output_path = lookup("CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("devices.json"));

        Ok(SyncConfig {
            api_url,
            api_key,
            output_path,
        })
    }
}

/// Null, empty strings, zero, false and empty containers count as missing
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn pick(item: &Map<String, Value>, keys: &[&str]) -> Value {
    keys.iter()
        .filter_map(|key| item.get(*key))
        .find(|value| is_present(value))
        .cloned()
        .unwrap_or(Value::Null)
}

/// Map one upstream item into a catalog device
///
/// Returns `None` (and logs) for items without an id or a brand.
pub fn map_api_item(item: &Value) -> Option<Device> {
    let Some(fields) = item.as_object() else {
        tracing::warn!("Skipping non-object API item: {}", item);
        return None;
    };

    let id = pick(fields, &["id", "slug", "model"]);
    let brand = pick(fields, &["brand", "manufacturer"]);
    if id.is_null() || brand.is_null() {
        tracing::warn!("Skipping API item without id or brand: {}", item);
        return None;
    }

    let images = match pick(fields, &["images"]) {
        Value::Null => json!({}),
        images => images,
    };

    let mapped = json!({
        "id": id,
        "brand": brand,
        "model": pick(fields, &["model", "phone_name"]),
        "release_date": pick(fields, &["release_date", "release"]),
        "display": pick(fields, &["display", "screen"]),
        "platform": {
            "os": pick(fields, &["os"]),
            "chipset": pick(fields, &["chipset"]),
        },
        "memory": {
            "ram": pick(fields, &["ram"]),
            "storage": pick(fields, &["storage"]),
        },
        "battery": pick(fields, &["battery"]),
        "camera": pick(fields, &["camera"]),
        "price": pick(fields, &["price"]),
        "currency": pick(fields, &["currency"]),
        "price_region": pick(fields, &["price_region"]),
        "affiliate_links": pick(fields, &["affiliate_links"]),
        "images": images,
    });

    match serde_json::from_value::<Device>(mapped) {
        Ok(device) => Some(device),
        Err(e) => {
            tracing::warn!("Skipping API item that does not map to a device: {}", e);
            None
        }
    }
}

/// Map a whole API response (a JSON array) into devices
pub fn map_api_response(body: Value) -> Result<Vec<Device>, SyncError> {
    let Value::Array(items) = body else {
        return Err(SyncError::UnexpectedShape(
            "expected a JSON array of phones".to_string(),
        ));
    };

    let total = items.len();
    let devices: Vec<Device> = items.iter().filter_map(map_api_item).collect();
    if devices.len() < total {
        tracing::warn!("Mapped {} of {} API items", devices.len(), total);
    }
    Ok(devices)
}

/// Pretty JSON for the catalog file
pub fn catalog_json(devices: &[Device]) -> Result<String, SyncError> {
    Ok(serde_json::to_string_pretty(devices)?)
}

/// GET the API and map the response
#[cfg(feature = "sync-tools")]
pub async fn fetch_devices(config: &SyncConfig) -> Result<Vec<Device>, SyncError> {
    use std::time::Duration;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|source| SyncError::Request {
            url: config.api_url.clone(),
            source,
        })?;

    let mut request = client.get(&config.api_url);
    if let Some(key) = &config.api_key {
        request = request.bearer_auth(key);
    }

    tracing::info!("Fetching from {}", config.api_url);
    let response = request.send().await.map_err(|source| SyncError::Request {
        url: config.api_url.clone(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SyncError::Status {
            url: config.api_url.clone(),
            status: status.as_u16(),
        });
    }

    let body: Value = response.json().await.map_err(|source| SyncError::Request {
        url: config.api_url.clone(),
        source,
    })?;

    map_api_response(body)
}

/// Fetch, map and write the catalog file; returns the number of devices
#[cfg(feature = "sync-tools")]
pub async fn sync_catalog(config: &SyncConfig) -> Result<usize, SyncError> {
    let devices = fetch_devices(config).await?;
    let json = catalog_json(&devices)?;

    tokio::fs::write(&config.output_path, json)
        .await
        .map_err(|source| SyncError::Write {
            path: config.output_path.clone(),
            source,
        })?;

    tracing::info!(
        "Wrote {} with {} items",
        config.output_path.display(),
        devices.len()
    );
    Ok(devices.len())
}
