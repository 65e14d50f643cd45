// web_app/pricing.rs - Country codes, session locale and price resolution
//
// Price resolution is a fallback chain. Every step yields a typed outcome
// so callers (and tests) can tell a localized price from a defaulted one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::web_app::model::Device;

/// Country used when geolocation is unavailable
pub const DEFAULT_COUNTRY: &str = "US";

/// Placeholder when a device has no usable price
pub const NO_PRICE: &str = "—";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid country code: {0:?} (expected two ASCII letters)")]
pub struct InvalidCountryCode(pub String);

/// Two-letter region code, always upper case
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    pub fn parse(raw: &str) -> Result<Self, InvalidCountryCode> {
        let code = raw.trim();
        if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(CountryCode(code.to_ascii_uppercase()))
        } else {
            Err(InvalidCountryCode(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        CountryCode(DEFAULT_COUNTRY.to_string())
    }
}

impl TryFrom<String> for CountryCode {
    type Error = InvalidCountryCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CountryCode::parse(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl std::str::FromStr for CountryCode {
    type Err = InvalidCountryCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CountryCode::parse(s)
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Country for the current page session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionLocale {
    /// Geolocation answered with a valid country
    Resolved(CountryCode),
    /// Geolocation failed or is disabled; `reason` is for logs only
    Defaulted { country: CountryCode, reason: String },
}

impl SessionLocale {
    pub fn defaulted(country: CountryCode, reason: impl Into<String>) -> Self {
        SessionLocale::Defaulted {
            country,
            reason: reason.into(),
        }
    }

    pub fn country(&self) -> &CountryCode {
        match self {
            SessionLocale::Resolved(country) => country,
            SessionLocale::Defaulted { country, .. } => country,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, SessionLocale::Resolved(_))
    }
}

impl Default for SessionLocale {
    fn default() -> Self {
        SessionLocale::defaulted(CountryCode::default(), "not resolved yet")
    }
}

/// Outcome of the price fallback chain
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedPrice {
    /// Entry in `price_region` for the session country
    Regional { country: CountryCode, text: String },
    /// `"<currency> <price>"`
    CurrencyPrefixed(String),
    /// Plain `price` field
    Generic(String),
    /// Nothing usable
    Unavailable,
}

impl ResolvedPrice {
    pub fn text(&self) -> &str {
        match self {
            ResolvedPrice::Regional { text, .. } => text,
            ResolvedPrice::CurrencyPrefixed(text) => text,
            ResolvedPrice::Generic(text) => text,
            ResolvedPrice::Unavailable => NO_PRICE,
        }
    }

    pub fn is_localized(&self) -> bool {
        matches!(self, ResolvedPrice::Regional { .. })
    }
}

impl std::fmt::Display for ResolvedPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Resolve the display price of `device` for `country`
///
/// Order: regional price, currency-prefixed price, plain price, dash.
pub fn resolve_price(device: &Device, country: &CountryCode) -> ResolvedPrice {
    if let Some(text) = device.regional_price(country.as_str()) {
        return ResolvedPrice::Regional {
            country: country.clone(),
            text: text.to_string(),
        };
    }

    match (device.currency(), device.price()) {
        (Some(currency), Some(price)) => {
            ResolvedPrice::CurrencyPrefixed(format!("{} {}", currency.trim(), price.trim()))
        }
        (None, Some(price)) => ResolvedPrice::Generic(price.to_string()),
        _ => ResolvedPrice::Unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fr() -> CountryCode {
        CountryCode::parse("FR").unwrap()
    }

    #[test]
    fn test_country_code_parse() {
        assert_eq!(CountryCode::parse("fr").unwrap().as_str(), "FR");
        assert_eq!(CountryCode::parse(" de ").unwrap().as_str(), "DE");
        assert!(CountryCode::parse("").is_err());
        assert!(CountryCode::parse("USA").is_err());
        assert!(CountryCode::parse("1A").is_err());
        assert_eq!(CountryCode::default().as_str(), DEFAULT_COUNTRY);
    }

    #[test]
    fn test_country_code_serde_validates() {
        let code: CountryCode = serde_json::from_str("\"jp\"").unwrap();
        assert_eq!(code.as_str(), "JP");
        assert!(serde_json::from_str::<CountryCode>("\"Japan\"").is_err());
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"JP\"");
    }

    #[test]
    fn test_regional_price_wins() {
        let mut device = Device::new("1", "B", "M");
        device.price = Some("500".to_string());
        device.currency = Some("USD".to_string());
        device.price_region.insert("FR".to_string(), "€500".to_string());

        let price = resolve_price(&device, &fr());
        assert!(price.is_localized());
        assert_eq!(price.text(), "€500");
    }

    #[test]
    fn test_blank_values_fall_through() {
        let mut device = Device::new("1", "B", "M");
        device.price_region.insert("FR".to_string(), "  ".to_string());
        device.price = Some("".to_string());
        device.currency = Some("EUR".to_string());

        assert_eq!(resolve_price(&device, &fr()), ResolvedPrice::Unavailable);
        assert_eq!(resolve_price(&device, &fr()).to_string(), NO_PRICE);
    }

    #[test]
    fn test_session_locale_country() {
        let resolved = SessionLocale::Resolved(fr());
        assert!(resolved.is_resolved());
        assert_eq!(resolved.country().as_str(), "FR");

        let defaulted = SessionLocale::default();
        assert!(!defaulted.is_resolved());
        assert_eq!(defaulted.country().as_str(), "US");
    }
}
