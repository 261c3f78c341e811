//! Types that read from the ref table: `ref`, `weighted_ref`, `combine` and
//! `config_ref`.
//!
//! ```text
//! "refs": {
//!   "cats": {"type": "values", "data": ["tabby", "siamese"]},
//!   "dogs": {"type": "values", "data": ["beagle", "collie"]},
//!   "shared": {"type": "config_ref", "config": {"precision": 2}}
//! }
//! "pet":   {"type": "ref", "ref": "cats"}
//! "any":   {"type": "weighted_ref", "data": {"cats": 0.7, "dogs": 0.3}}
//! "pair":  {"type": "combine", "refs": ["cats", "dogs"], "config": {"join_with": " & "}}
//! ```

use crate::config::{config_str, is_affirmative, json_f64};
use crate::loader::Loader;
use crate::suppliers::{BoxedSupplier, CombineSupplier, WeightedRefsSupplier, WeightedSupplier};
use serde_json::Value as JsonValue;
use spec_core::{FieldSpec, GeneratedValue, SpecError};
use std::collections::HashMap;

pub const REF_KEY: &str = "ref";
pub const WEIGHTED_REF_KEY: &str = "weighted_ref";
pub const COMBINE_KEY: &str = "combine";
pub const CONFIG_REF_KEY: &str = "config_ref";

/// Configure the supplier for the `ref` type.
pub fn configure_ref(spec: &FieldSpec, loader: &Loader) -> Result<BoxedSupplier, SpecError> {
    let name = match (&spec.ref_name, &spec.data) {
        (Some(name), _) => name.as_str(),
        (None, Some(JsonValue::String(name))) => name.as_str(),
        _ => {
            return Err(SpecError::malformed(
                &spec.path,
                "'ref' requires a ref name in 'ref' or 'data'",
            ))
        }
    };
    loader.get_ref_supplier(name, &spec.path)
}

/// Configure the supplier for the `weighted_ref` type.
///
/// Every named ref is resolved up front, so a missing ref fails here rather
/// than on the first iteration that happens to pick it.
pub fn configure_weighted_ref(
    spec: &FieldSpec,
    loader: &Loader,
) -> Result<BoxedSupplier, SpecError> {
    let weights = match &spec.data {
        Some(JsonValue::Object(weights)) if !weights.is_empty() => weights,
        _ => {
            return Err(SpecError::malformed(
                &spec.path,
                "'weighted_ref' data must map ref names to weights",
            ))
        }
    };

    let mut choices = Vec::with_capacity(weights.len());
    let mut values_map = HashMap::with_capacity(weights.len());
    for (name, weight) in weights {
        let weight = json_f64(weight).ok_or_else(|| {
            SpecError::malformed(&spec.path, format!("weight for ref '{name}' must be a number"))
        })?;
        values_map.insert(name.clone(), loader.get_ref_supplier(name, &spec.path)?);
        choices.push((GeneratedValue::from(name.as_str()), weight));
    }

    let key_supplier = WeightedSupplier::new(choices, loader.seed_for(spec), &spec.path)?;
    Ok(Box::new(WeightedRefsSupplier::new(
        Box::new(key_supplier),
        values_map,
    )))
}

/// Configure the supplier for the `combine` type.
pub fn configure_combine(spec: &FieldSpec, loader: &Loader) -> Result<BoxedSupplier, SpecError> {
    let names = match spec.get("refs").or(spec.data.as_ref()) {
        Some(JsonValue::Array(names)) if !names.is_empty() => names,
        _ => {
            return Err(SpecError::malformed(
                &spec.path,
                "'combine' requires a non-empty list of ref names in 'refs'",
            ))
        }
    };

    let suppliers = names
        .iter()
        .map(|name| {
            let name = name.as_str().ok_or_else(|| {
                SpecError::malformed(&spec.path, format!("ref name must be a string, got {name}"))
            })?;
            loader.get_ref_supplier(name, &spec.path)
        })
        .collect::<Result<Vec<_>, SpecError>>()?;

    let join_with = config_str(&spec.config, "join_with", &spec.path)?.unwrap_or("");
    let as_list = is_affirmative("as_list", &spec.config, false);
    Ok(Box::new(CombineSupplier::new(suppliers, join_with, as_list)))
}

/// The `config_ref` type only holds shared configuration.
pub fn configure_config_ref(
    spec: &FieldSpec,
    _loader: &Loader,
) -> Result<BoxedSupplier, SpecError> {
    Err(SpecError::malformed(
        &spec.path,
        "'config_ref' entries only provide configuration and cannot produce values",
    ))
}
