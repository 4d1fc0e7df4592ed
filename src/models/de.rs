//! Lenient field deserializers.
//!
//! ClickUp is inconsistent about scalar types: the same field may arrive as a
//! number in one endpoint and a string in another. These helpers normalize
//! such fields for use with `#[serde(deserialize_with = "...")]`.

use chrono::{DateTime, TimeZone, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Renders a JSON string or number as a `String`.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Deserializes a required id given as a number or a string.
pub fn string_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(&value)
        .ok_or_else(|| D::Error::custom(format!("expected a string or number id, got {value}")))
}

/// Deserializes an optional string-or-number field. Any other shape yields `None`.
pub fn opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_to_string))
}

/// Deserializes an optional integer given as a number or a numeric string.
pub fn opt_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Deserializes a boolean given as `true`/`false` or `"true"`/`"false"`.
pub fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
        _ => false,
    })
}

/// Deserializes a list of ids given as strings, numbers or objects with an `id`.
pub fn id_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(value
        .unwrap_or_default()
        .iter()
        .filter_map(|item| match item {
            Value::Object(map) => map.get("id").and_then(scalar_to_string),
            other => scalar_to_string(other),
        })
        .collect())
}

/// Converts a millisecond epoch timestamp string into a UTC date time.
#[must_use]
pub fn millis_to_datetime(millis: Option<&str>) -> Option<DateTime<Utc>> {
    let millis: i64 = millis?.trim().parse().ok()?;
    Utc.timestamp_millis_opt(millis).single()
}
