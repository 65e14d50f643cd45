// web_app/model/fields.rs - Lenient field deserializers for catalog JSON
//
// The catalog file is produced by hand or by upstream APIs, so the same
// field can arrive as a string, a number, or something unexpected.
// These helpers turn "wrong shape" into "absent" instead of rejecting
// the whole catalog.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use super::{Battery, DisplaySpec};

/// Text that may be written as a JSON string or number
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Text(String),
    Number(serde_json::Number),
    Other(Value),
}

impl Loose {
    fn into_text(self) -> Option<String> {
        match self {
            Loose::Text(s) => Some(s),
            Loose::Number(n) => Some(n.to_string()),
            Loose::Other(_) => None,
        }
    }
}

/// String or number as text, anything else as `None`
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let loose = Option::<Loose>::deserialize(deserializer)?;
    Ok(loose.and_then(Loose::into_text))
}

pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_text(deserializer)?.unwrap_or_default())
}

/// Any nested structure; a shape mismatch yields `None`
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// `price_region`: country code -> localized price text
pub fn price_region<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(map) = value else {
        return Ok(BTreeMap::new());
    };

    Ok(map
        .into_iter()
        .filter_map(|(country, price)| value_text(&price).map(|p| (country, p)))
        .collect())
}

/// `display`: plain text (`"6.1\""`) or `{ "size": ... }`
pub fn display<'de, D>(deserializer: D) -> Result<Option<DisplaySpec>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(map) => Some(DisplaySpec::Detailed {
            size: map.get("size").and_then(value_text),
        }),
        other => value_text(&other).map(DisplaySpec::Text),
    })
}

/// `battery`: plain text (flat layout) or `{ "capacity": ... }`
pub fn battery<'de, D>(deserializer: D) -> Result<Option<Battery>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(map) => Some(Battery {
            capacity: map.get("capacity").and_then(value_text),
        }),
        other => value_text(&other).map(|capacity| Battery {
            capacity: Some(capacity),
        }),
    })
}
