//! The `range` and `rand_range` types.
//!
//! ```text
//! "id":    {"type": "range", "data": [1, 1000]}            1, 2, ... 1000, 1, ...
//! "step":  {"type": "range", "data": [0, 1, 0.25]}         0, 0.25, ... 1, 0, ...
//! "score": {"type": "rand_range", "data": [0, 100, 2]}     uniform, 2 decimals
//! "score": {"type": "rand_range", "config": {"start": 0, "end": 100, "precision": 2}}
//! ```

use crate::config::{config_f64, config_u32, json_f64, json_u32};
use crate::loader::Loader;
use crate::suppliers::{BoxedSupplier, RandomRangeSupplier, RangeSupplier};
use serde_json::Value as JsonValue;
use spec_core::{FieldSpec, SpecError};

pub const RANGE_KEY: &str = "range";
pub const RAND_RANGE_KEY: &str = "rand_range";

/// Configure the supplier for the `range` type.
pub fn configure_range(spec: &FieldSpec, _loader: &Loader) -> Result<BoxedSupplier, SpecError> {
    let bounds = numeric_list(spec, 2, 3)?;
    let step = bounds.get(2).copied().unwrap_or(1.0);
    Ok(Box::new(RangeSupplier::new(
        bounds[0], bounds[1], step, &spec.path,
    )?))
}

/// Configure the supplier for the `rand_range` type.
pub fn configure_rand_range(
    spec: &FieldSpec,
    loader: &Loader,
) -> Result<BoxedSupplier, SpecError> {
    let (start, end, precision) = match &spec.data {
        Some(JsonValue::Array(items)) => {
            let start = items.first().and_then(json_f64);
            let end = items.get(1).and_then(json_f64);
            let precision = match items.get(2) {
                None => None,
                Some(p) => Some(json_u32(p).ok_or_else(|| {
                    SpecError::malformed(&spec.path, "precision must be a non-negative integer")
                })?),
            };
            match (start, end, items.len()) {
                (Some(start), Some(end), 2 | 3) => (start, end, precision),
                _ => {
                    return Err(SpecError::malformed(
                        &spec.path,
                        "'rand_range' data must be [start, end] or [start, end, precision]",
                    ))
                }
            }
        }
        Some(_) => {
            return Err(SpecError::malformed(
                &spec.path,
                "'rand_range' data must be a list",
            ))
        }
        None => {
            let start = config_f64(&spec.config, "start", &spec.path)?.unwrap_or(0.0);
            let end = config_f64(&spec.config, "end", &spec.path)?.ok_or_else(|| {
                SpecError::malformed(&spec.path, "'rand_range' requires 'data' or config 'end'")
            })?;
            (start, end, None)
        }
    };

    // An explicit precision option overrides the data form
    let precision = config_u32(&spec.config, "precision", &spec.path)?.or(precision);

    Ok(Box::new(RandomRangeSupplier::new(
        start,
        end,
        precision,
        loader.seed_for(spec),
        &spec.path,
    )?))
}

/// Read `data` as a list of `min..=max` numbers.
fn numeric_list(spec: &FieldSpec, min: usize, max: usize) -> Result<Vec<f64>, SpecError> {
    let malformed = || {
        SpecError::malformed(
            &spec.path,
            format!("'{}' data must be a list of {min} to {max} numbers", spec.type_name),
        )
    };

    let items = match &spec.data {
        Some(JsonValue::Array(items)) if (min..=max).contains(&items.len()) => items,
        _ => return Err(malformed()),
    };
    items
        .iter()
        .map(|item| json_f64(item).ok_or_else(malformed))
        .collect()
}
