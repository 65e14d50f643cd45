// web_app/settings.rs - Catalog variants and application configuration
//
// Two page layouts exist: a 48-per-page brand browser and a 12-per-page
// version with search, detail modal and localized prices.
// Both are presets of `CatalogSettings`; the environment picks one.
//
// Configuration is read from environment variables (a `.env` file is
// loaded by the binaries before calling `AppConfig::from_env`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::web_app::pricing::CountryCode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogVariant {
    /// 48 per page, brand filter only
    Classic,
    /// 12 per page, search + detail modal + localized prices
    #[default]
    Full,
}

impl CatalogVariant {
    pub const fn page_size(self) -> usize {
        match self {
            CatalogVariant::Classic => 48,
            CatalogVariant::Full => 12,
        }
    }

    pub const fn features(self) -> FeatureSet {
        match self {
            CatalogVariant::Classic => FeatureSet {
                search: false,
                detail_view: false,
                locale_pricing: false,
            },
            CatalogVariant::Full => FeatureSet {
                search: true,
                detail_view: true,
                locale_pricing: true,
            },
        }
    }

    pub const fn settings(self) -> CatalogSettings {
        CatalogSettings {
            variant: self,
            page_size: self.page_size(),
            features: self.features(),
        }
    }
}

impl std::fmt::Display for CatalogVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogVariant::Classic => write!(f, "classic"),
            CatalogVariant::Full => write!(f, "full"),
        }
    }
}

impl std::str::FromStr for CatalogVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(CatalogVariant::Classic),
            "full" => Ok(CatalogVariant::Full),
            other => Err(format!("unknown catalog variant '{}'", other)),
        }
    }
}

/// Optional page features
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub search: bool,
    pub detail_view: bool,
    pub locale_pricing: bool,
}

/// Page size and features for the list page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    pub variant: CatalogVariant,
    pub page_size: usize,
    pub features: FeatureSet,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogVariant::default().settings()
    }
}

impl CatalogSettings {
    /// Build settings from raw `CATALOG_VARIANT` / `CATALOG_PAGE_SIZE` values
    ///
    /// Invalid values are logged and ignored.
    pub fn from_values(variant: Option<&str>, page_size: Option<&str>) -> Self {
        let variant = match variant.map(str::parse::<CatalogVariant>) {
            Some(Ok(v)) => v,
            Some(Err(e)) => {
                tracing::warn!("{}, using '{}'", e, CatalogVariant::default());
                CatalogVariant::default()
            }
            None => CatalogVariant::default(),
        };

        let mut settings = variant.settings();
        if let Some(raw) = page_size {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => settings.page_size = size,
                _ => tracing::warn!(
                    "Ignoring invalid CATALOG_PAGE_SIZE '{}', using {}",
                    raw,
                    settings.page_size
                ),
            }
        }
        settings
    }
}

/// Runtime configuration of the server
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub catalog_path: PathBuf,
    /// `None` disables geolocation (every session gets the default country)
    pub geoip_endpoint: Option<String>,
    pub geoip_timeout: Duration,
    pub default_country: CountryCode,
    pub settings: CatalogSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            catalog_path: PathBuf::from(Self::DEFAULT_CATALOG_PATH),
            geoip_endpoint: Some(Self::DEFAULT_GEOIP_ENDPOINT.to_string()),
            geoip_timeout: Duration::from_secs(Self::DEFAULT_GEOIP_TIMEOUT_SECS),
            default_country: CountryCode::default(),
            settings: CatalogSettings::default(),
        }
    }
}

impl AppConfig {
    pub const DEFAULT_CATALOG_PATH: &'static str = "devices.json";
    pub const DEFAULT_GEOIP_ENDPOINT: &'static str = "https://ipapi.co";
    pub const DEFAULT_GEOIP_TIMEOUT_SECS: u64 = 5;

    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let catalog_path = lookup("CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.catalog_path);

        // An explicitly empty endpoint turns geolocation off
        let geoip_endpoint = match lookup("GEOIP_ENDPOINT") {
            Some(endpoint) if endpoint.trim().is_empty() => None,
            Some(endpoint) => Some(endpoint.trim().trim_end_matches('/').to_string()),
            None => defaults.geoip_endpoint,
        };

        let geoip_timeout = match lookup("GEOIP_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!("Ignoring invalid GEOIP_TIMEOUT_SECS '{}'", raw);
                    defaults.geoip_timeout
                }
            },
            None => defaults.geoip_timeout,
        };

        let default_country = match lookup("DEFAULT_COUNTRY") {
            Some(raw) => CountryCode::parse(&raw).unwrap_or_else(|e| {
                tracing::warn!("{}, using {}", e, defaults.default_country);
                defaults.default_country.clone()
            }),
            None => defaults.default_country,
        };

        let settings = CatalogSettings::from_values(
            lookup("CATALOG_VARIANT").as_deref(),
            lookup("CATALOG_PAGE_SIZE").as_deref(),
        );

        AppConfig {
            catalog_path,
            geoip_endpoint,
            geoip_timeout,
            default_country,
            settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_variant_presets() {
        let classic = CatalogVariant::Classic.settings();
        assert_eq!(classic.page_size, 48);
        assert!(!classic.features.search);
        assert!(!classic.features.detail_view);
        assert!(!classic.features.locale_pricing);

        let full = CatalogVariant::Full.settings();
        assert_eq!(full.page_size, 12);
        assert!(full.features.search && full.features.detail_view && full.features.locale_pricing);

        assert_eq!(CatalogSettings::default(), full);
    }

    #[test]
    fn test_variant_parse_and_display() {
        assert_eq!("Classic".parse::<CatalogVariant>(), Ok(CatalogVariant::Classic));
        assert_eq!(" full ".parse::<CatalogVariant>(), Ok(CatalogVariant::Full));
        assert!("compact".parse::<CatalogVariant>().is_err());
        assert_eq!(CatalogVariant::Classic.to_string(), "classic");
    }

    #[test]
    fn test_settings_page_size_override() {
        let settings = CatalogSettings::from_values(Some("classic"), Some("24"));
        assert_eq!(settings.variant, CatalogVariant::Classic);
        assert_eq!(settings.page_size, 24);

        let settings = CatalogSettings::from_values(None, Some("0"));
        assert_eq!(settings.page_size, 12);

        let settings = CatalogSettings::from_values(Some("bogus"), Some("abc"));
        assert_eq!(settings, CatalogSettings::default());
    }

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.catalog_path, PathBuf::from("devices.json"));
        assert_eq!(config.geoip_endpoint.as_deref(), Some("https://ipapi.co"));
        assert_eq!(config.default_country.as_str(), "US");
    }

    #[test]
    fn test_app_config_from_lookup() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("CATALOG_PATH", "/srv/data/phones.json"),
            ("GEOIP_ENDPOINT", "http://127.0.0.1:9000/"),
            ("GEOIP_TIMEOUT_SECS", "2"),
            ("DEFAULT_COUNTRY", "gb"),
            ("CATALOG_VARIANT", "classic"),
        ]));

        assert_eq!(config.catalog_path, PathBuf::from("/srv/data/phones.json"));
        assert_eq!(config.geoip_endpoint.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(config.geoip_timeout, Duration::from_secs(2));
        assert_eq!(config.default_country.as_str(), "GB");
        assert_eq!(config.settings.page_size, 48);
    }

    #[test]
    fn test_empty_geoip_endpoint_disables_lookup() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GEOIP_ENDPOINT", ""),
            ("DEFAULT_COUNTRY", "Germany"),
        ]));
        assert!(config.geoip_endpoint.is_none());
        assert_eq!(config.default_country.as_str(), "US");
    }
}
