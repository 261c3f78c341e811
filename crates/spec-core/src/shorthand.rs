//! Shorthand field keys.
//!
//! A field key may carry its type and inline options:
//!
//! ```text
//! name[:type][?key=value&key2=value2]
//! ```
//!
//! `"lat:geo.lat?precision=2"` lowers to field `lat` of type `geo.lat` with
//! config `{"precision": 2}`. Option values are read as JSON scalars where
//! possible and kept as strings otherwise.

use crate::error::SpecError;
use crate::spec::Config;
use serde_json::Value as JsonValue;

/// A parsed field key.
#[derive(Debug, Clone, PartialEq)]
pub struct ShorthandKey {
    /// Field name with type and options stripped
    pub name: String,
    /// Type named in the key, if any
    pub type_name: Option<String>,
    /// Options from the query part of the key
    pub params: Config,
}

/// Parse a field key into its name, optional type and options.
pub fn parse_key(key: &str) -> Result<ShorthandKey, SpecError> {
    let (head, query) = match key.split_once('?') {
        Some((head, query)) => (head, Some(query)),
        None => (key, None),
    };

    let (name, type_name) = match head.split_once(':') {
        Some((name, type_name)) => {
            if type_name.is_empty() {
                return Err(SpecError::malformed(key, "empty type after ':'"));
            }
            (name, Some(type_name.to_string()))
        }
        None => (head, None),
    };

    if name.is_empty() {
        return Err(SpecError::malformed(key, "empty field name"));
    }

    let mut params = Config::new();
    if let Some(query) = query {
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (k, v) = pair
                .split_once('=')
                .ok_or_else(|| SpecError::malformed(key, format!("option '{pair}' has no value")))?;
            if k.is_empty() {
                return Err(SpecError::malformed(key, format!("option '{pair}' has no name")));
            }
            params.insert(k.to_string(), parse_param_value(v));
        }
    }

    Ok(ShorthandKey {
        name: name.to_string(),
        type_name,
        params,
    })
}

fn parse_param_value(raw: &str) -> JsonValue {
    match serde_json::from_str::<JsonValue>(raw) {
        Ok(value @ (JsonValue::Number(_) | JsonValue::Bool(_) | JsonValue::Null)) => value,
        _ => JsonValue::String(raw.to_string()),
    }
}
