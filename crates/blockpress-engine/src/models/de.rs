//! Lenient field decoding for ACF payloads.
//!
//! ACF reports unset fields inconsistently: an empty image is `false`, an
//! empty repeater is `false` or `""`, an empty group is `[]`, and choice
//! fields arrive as strings or numbers depending on the field settings.
//! These helpers are used with `#[serde(default, deserialize_with = ..)]`.

use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn is_unset(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Optional value of any shape, treating ACF "unset" markers as absent.
pub fn opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if is_unset(&value) {
        return Ok(None);
    }
    T::deserialize(value).map(Some).map_err(D::Error::custom)
}

/// Optional text; numbers are accepted and rendered as their decimal form.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if is_unset(&value) {
        return Ok(None);
    }
    match value {
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(true) => Ok(Some("1".to_string())),
        other => Err(D::Error::custom(format!("expected text, found {other}"))),
    }
}

/// Optional unsigned number; numeric strings are accepted.
pub fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if is_unset(&value) {
        return Ok(None);
    }
    match value {
        Value::Number(n) => Ok(n.as_u64().and_then(|n| u32::try_from(n).ok())),
        Value::String(s) => Ok(s.trim().parse().ok()),
        other => Err(D::Error::custom(format!("expected a number, found {other}"))),
    }
}

/// Value whose unset markers mean "use the default", e.g. choice fields.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    opt(deserializer).map(Option::unwrap_or_default)
}

/// Repeater field; an unset repeater decodes to an empty list.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if is_unset(&value) {
        return Ok(Vec::new());
    }
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| T::deserialize(item).map_err(D::Error::custom))
            .collect(),
        other => Err(D::Error::custom(format!("expected a list, found {other}"))),
    }
}

/// ACF true/false field. Accepts booleans, `0`/`1` and their string forms.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        Value::String(s) => matches!(s.trim(), "1" | "true" | "yes"),
        _ => false,
    })
}

pub fn yes() -> bool {
    true
}
