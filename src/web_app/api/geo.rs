// web_app/api/geo.rs - Visitor country lookup
//
// Asks an ipapi-style geolocation service for the visitor's country.
// The service is an external collaborator: every failure mode becomes a
// `GeoError`, and `GeoClient::resolve` folds errors into a defaulted
// `SessionLocale` so page rendering never depends on it.

use serde_json::Value;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Mutex, OnceLock};
use std::time::Duration;
use thiserror::Error;

use crate::web_app::pricing::{CountryCode, SessionLocale};

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("failed to build geolocation client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("geolocation request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("geolocation service answered with HTTP {0}")]
    Status(u16),

    #[error("geolocation response is not JSON: {0}")]
    Body(#[source] reqwest::Error),

    #[error("geolocation response has no 'country' field")]
    MissingCountry,

    #[error("geolocation response has an invalid country: {0}")]
    InvalidCountry(String),
}

/// Extract the `country` field of a geolocation response
pub fn parse_country(body: &Value) -> Result<CountryCode, GeoError> {
    let raw = body
        .get("country")
        .and_then(Value::as_str)
        .ok_or(GeoError::MissingCountry)?;
    CountryCode::parse(raw).map_err(|_| GeoError::InvalidCountry(raw.to_string()))
}

/// Public IP of the visitor from a connection-info address
///
/// Accepts `ip` or `ip:port`. Loopback, private and unspecified
/// addresses are dropped: the service would only see the server's own
/// address for them anyway.
pub fn client_ip(raw: &str) -> Option<IpAddr> {
    let raw = raw.trim();
    let ip = raw
        .parse::<IpAddr>()
        .ok()
        .or_else(|| raw.parse::<SocketAddr>().ok().map(|addr| addr.ip()))?;

    let routable = match ip {
        IpAddr::V4(v4) => {
            !(v4.is_loopback() || v4.is_private() || v4.is_unspecified() || v4.is_link_local())
        }
        IpAddr::V6(v6) => !(v6.is_loopback() || v6.is_unspecified()),
    };
    routable.then_some(ip)
}

#[derive(Clone, Debug)]
pub struct GeoClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GeoClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, GeoError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GeoError::Client)?;

        Ok(GeoClient {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    /// `<endpoint>/<ip>/json/`, or `<endpoint>/json/` for the caller's own address
    pub fn lookup_url(&self, ip: Option<IpAddr>) -> String {
        match ip {
            Some(ip) => format!("{}/{}/json/", self.endpoint, ip),
            None => format!("{}/json/", self.endpoint),
        }
    }

    pub async fn lookup(&self, ip: Option<IpAddr>) -> Result<CountryCode, GeoError> {
        let url = self.lookup_url(ip);
        tracing::debug!("Geolocation lookup: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(GeoError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoError::Status(status.as_u16()));
        }

        let body: Value = response.json().await.map_err(GeoError::Body)?;
        parse_country(&body)
    }

    /// Lookup with fallback: never fails
    pub async fn resolve(&self, ip: Option<IpAddr>, default: &CountryCode) -> SessionLocale {
        match self.lookup(ip).await {
            Ok(country) => {
                tracing::info!("Resolved session country {}", country);
                SessionLocale::Resolved(country)
            }
            Err(e) => {
                tracing::warn!("Geolocation failed, using {}: {}", default, e);
                SessionLocale::defaulted(default.clone(), e.to_string())
            }
        }
    }
}

static GEO_CLIENT: OnceLock<GeoClient> = OnceLock::new();
static TEST_GEO_OVERRIDE: Mutex<Option<Option<GeoClient>>> = Mutex::new(None);

/// Initialize the global geolocation client
pub fn init_geo_client(client: GeoClient) {
    if GEO_CLIENT.set(client).is_err() {
        tracing::warn!("Geolocation client already initialized");
    }
}

/// Set a client override for testing (`None` disables geolocation)
pub fn set_test_geo_client(client: Option<GeoClient>) {
    let mut guard = TEST_GEO_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(client);
}

/// The configured client, if geolocation is enabled
pub fn geo_client() -> Option<GeoClient> {
    {
        let guard = TEST_GEO_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref client) = *guard {
            return client.clone();
        }
    }

    GEO_CLIENT.get().cloned()
}
