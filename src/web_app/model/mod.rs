// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between frontend and backend:
// - Device and its nested spec groups (the catalog file schema)
// - CatalogQuery: the explicit view state (brand, search, page)
// - DeviceSummary / ListPage / DeviceDetail: render models produced by
//   the pure functions in `queries` and consumed by the components

pub mod fields;

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::web_app::pricing::ResolvedPrice;

/// Opaque device key, compared as text
///
/// The catalog may store ids as strings or numbers; both become text so
/// lookups are plain string equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        DeviceId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DeviceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        fields::value_text(&value)
            .map(DeviceId)
            .ok_or_else(|| serde::de::Error::custom("device id must be a string or a number"))
    }
}

/// Screen description: free text or a structured `{ size }`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplaySpec {
    Text(String),
    Detailed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<String>,
    },
}

impl DisplaySpec {
    /// The size shown on cards and in the spec table
    pub fn size(&self) -> Option<&str> {
        match self {
            DisplaySpec::Text(text) => Some(text.as_str()),
            DisplaySpec::Detailed { size } => size.as_deref(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    #[serde(default, deserialize_with = "fields::opt_text", skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_text", skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    #[serde(default, deserialize_with = "fields::opt_text", skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_text", skip_serializing_if = "Option::is_none")]
    pub chipset: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battery {
    #[serde(default, deserialize_with = "fields::opt_text", skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliateLink {
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Images {
    #[serde(default, deserialize_with = "fields::lenient_vec")]
    pub gallery: Vec<String>,
}

/// One catalog entry (matches the devices.json schema)
///
/// Besides the nested layout, the flat layout written by older catalog
/// updaters (`release`, `os`, `chipset`, `ram`, `storage` at top level) is
/// accepted. Accessors prefer the nested value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    #[serde(default, deserialize_with = "fields::text")]
    pub brand: String,
    #[serde(default, deserialize_with = "fields::text")]
    pub model: String,
    #[serde(default, deserialize_with = "fields::display", skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplaySpec>,
    #[serde(default, deserialize_with = "fields::lenient", skip_serializing_if = "Option::is_none")]
    pub memory: Option<Memory>,
    #[serde(default, deserialize_with = "fields::lenient", skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(default, deserialize_with = "fields::battery", skip_serializing_if = "Option::is_none")]
    pub battery: Option<Battery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "fields::opt_text", skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_text", skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_text", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "fields::price_region", skip_serializing_if = "BTreeMap::is_empty")]
    pub price_region: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "fields::lenient_vec", skip_serializing_if = "Vec::is_empty")]
    pub affiliate_links: Vec<AffiliateLink>,
    #[serde(default, deserialize_with = "fields::lenient", skip_serializing_if = "Option::is_none")]
    pub images: Option<Images>,

    // Flat layout
    #[serde(default, deserialize_with = "fields::opt_text", skip_serializing)]
    pub release: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_text", skip_serializing)]
    pub os: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_text", skip_serializing)]
    pub chipset: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_text", skip_serializing)]
    pub ram: Option<String>,
    #[serde(default, deserialize_with = "fields::opt_text", skip_serializing)]
    pub storage: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl Device {
    /// Minimal device, mostly useful for tests and fixtures
    pub fn new(id: impl Into<String>, brand: impl Into<String>, model: impl Into<String>) -> Self {
        Device {
            id: DeviceId::new(id),
            brand: brand.into(),
            model: model.into(),
            display: None,
            memory: None,
            platform: None,
            battery: None,
            camera: None,
            release_date: None,
            price: None,
            currency: None,
            price_region: BTreeMap::new(),
            affiliate_links: Vec::new(),
            images: None,
            release: None,
            os: None,
            chipset: None,
            ram: None,
            storage: None,
        }
    }

    pub fn display_size(&self) -> Option<&str> {
        non_blank(self.display.as_ref().and_then(DisplaySpec::size))
    }

    pub fn ram(&self) -> Option<&str> {
        non_blank(self.memory.as_ref().and_then(|m| m.ram.as_deref()))
            .or_else(|| non_blank(self.ram.as_deref()))
    }

    pub fn storage(&self) -> Option<&str> {
        non_blank(self.memory.as_ref().and_then(|m| m.storage.as_deref()))
            .or_else(|| non_blank(self.storage.as_deref()))
    }

    pub fn os(&self) -> Option<&str> {
        non_blank(self.platform.as_ref().and_then(|p| p.os.as_deref()))
            .or_else(|| non_blank(self.os.as_deref()))
    }

    pub fn chipset(&self) -> Option<&str> {
        non_blank(self.platform.as_ref().and_then(|p| p.chipset.as_deref()))
            .or_else(|| non_blank(self.chipset.as_deref()))
    }

    pub fn battery_capacity(&self) -> Option<&str> {
        non_blank(self.battery.as_ref().and_then(|b| b.capacity.as_deref()))
    }

    pub fn release_date(&self) -> Option<&str> {
        non_blank(self.release_date.as_deref()).or_else(|| non_blank(self.release.as_deref()))
    }

    pub fn price(&self) -> Option<&str> {
        non_blank(self.price.as_deref())
    }

    pub fn currency(&self) -> Option<&str> {
        non_blank(self.currency.as_deref())
    }

    /// Localized price for a country; keys match case-insensitively
    pub fn regional_price(&self, country: &str) -> Option<&str> {
        self.price_region
            .get(country)
            .or_else(|| {
                self.price_region
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(country))
                    .map(|(_, price)| price)
            })
            .map(String::as_str)
            .filter(|p| !p.trim().is_empty())
    }

    pub fn gallery(&self) -> &[String] {
        self.images.as_ref().map(|i| i.gallery.as_slice()).unwrap_or(&[])
    }

    pub fn buy_link(&self) -> Option<&str> {
        self.affiliate_links
            .iter()
            .map(|link| link.url.as_str())
            .find(|url| !url.trim().is_empty())
    }

    /// "Brand Model", used as card and modal title
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.model).trim().to_string()
    }
}

/// View state: what the list is currently showing
///
/// `page` is 1-based. Changing the brand or the search text always goes
/// back to page 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub brand: String,
    pub search: String,
    pub page: u32,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        CatalogQuery {
            brand: String::new(),
            search: String::new(),
            page: 1,
        }
    }
}

impl CatalogQuery {
    pub fn with_brand(self, brand: impl Into<String>) -> Self {
        CatalogQuery {
            brand: brand.into(),
            page: 1,
            ..self
        }
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        CatalogQuery {
            search: search.into(),
            page: 1,
            ..self
        }
    }

    pub fn at_page(self, page: u32) -> Self {
        CatalogQuery { page, ..self }
    }
}

/// Summary card content for the list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceSummary {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub display_size: String,
    pub ram: String,
    pub release_date: String,
    pub price: ResolvedPrice,
}

/// One page button
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageControl {
    pub page: u32,
    pub active: bool,
}

/// Everything the list and the pager need for one render
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListPage {
    pub cards: Vec<DeviceSummary>,
    pub page: u32,
    pub total_pages: u32,
    pub total_matches: usize,
    pub page_size: usize,
    pub controls: Vec<PageControl>,
}

impl ListPage {
    /// Placeholder shown instead of an empty grid
    pub const EMPTY_MESSAGE: &'static str = "No devices found";

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// One row of the detail spec table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecRow {
    pub label: String,
    pub value: String,
}

/// Full detail for the modal
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceDetail {
    pub id: String,
    pub title: String,
    pub gallery: Vec<String>,
    pub specs: Vec<SpecRow>,
    pub price: ResolvedPrice,
    pub buy_link: Option<String>,
}

impl DeviceDetail {
    pub const NO_IMAGE: &'static str = "No image";

    pub fn has_images(&self) -> bool {
        !self.gallery.is_empty()
    }

    pub fn spec(&self, label: &str) -> Option<&str> {
        self.specs
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}
