//! Config resolution and typed config access.
//!
//! A field's effective configuration is its inline `config` with gaps filled
//! from the `config` of the ref named by `configref`. The merge is one level
//! deep and inline keys always win. Resolution builds a fresh map; the
//! specification document is never modified.

use crate::loader::Loader;
use serde_json::Value as JsonValue;
use spec_core::{Config, FieldSpec, SpecError};

/// Resolve the effective configuration of a field.
///
/// Bare (non-structured) fields have no configuration.
pub fn resolve_config(spec: &FieldSpec, loader: &Loader) -> Result<Config, SpecError> {
    if !spec.structured {
        return Ok(Config::new());
    }

    let mut config = spec.config.clone();
    if let Some(ref_name) = &spec.config_ref {
        let shared = loader.get_ref_spec(ref_name)?;
        for (key, value) in &shared.config {
            if !config.contains_key(key) {
                config.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(config)
}

/// Check if a config flag is set to `true`, `yes` or `on` (any case).
pub fn is_affirmative(key: &str, config: &Config, default: bool) -> bool {
    match config.get(key) {
        None => default,
        Some(JsonValue::Bool(b)) => *b,
        Some(JsonValue::String(s)) => matches!(s.to_lowercase().as_str(), "true" | "yes" | "on"),
        Some(_) => false,
    }
}

/// Read a numeric option. Numeric strings are accepted.
pub fn config_f64(config: &Config, key: &str, field: &str) -> Result<Option<f64>, SpecError> {
    match config.get(key) {
        None => Ok(None),
        Some(value) => json_f64(value).map(Some).ok_or_else(|| {
            SpecError::malformed(field, format!("'{key}' must be a number, got {value}"))
        }),
    }
}

/// Read a non-negative integer option. Numeric strings are accepted.
pub fn config_u32(config: &Config, key: &str, field: &str) -> Result<Option<u32>, SpecError> {
    match config.get(key) {
        None => Ok(None),
        Some(value) => json_u32(value).map(Some).ok_or_else(|| {
            SpecError::malformed(
                field,
                format!("'{key}' must be a non-negative integer, got {value}"),
            )
        }),
    }
}

/// Read a string option.
pub fn config_str<'a>(
    config: &'a Config,
    key: &str,
    field: &str,
) -> Result<Option<&'a str>, SpecError> {
    match config.get(key) {
        None => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s)),
        Some(value) => Err(SpecError::malformed(
            field,
            format!("'{key}' must be a string, got {value}"),
        )),
    }
}

/// Interpret a JSON value as a float.
pub(crate) fn json_f64(value: &JsonValue) -> Option<f64> {
    match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Interpret a JSON value as a non-negative integer.
pub(crate) fn json_u32(value: &JsonValue) -> Option<u32> {
    match value {
        JsonValue::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
