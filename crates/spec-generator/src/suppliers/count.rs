//! Count suppliers for compound types.

use super::{BoxedSupplier, ConstantSupplier, CycleSupplier, WeightedSupplier};
use crate::config::json_f64;
use serde_json::Value as JsonValue;
use spec_core::{GeneratedValue, SpecError};

/// Build a supplier of non-negative counts from specification data.
///
/// - integer: fixed count
/// - list of integers: cycled by iteration
/// - map of count to weight: weighted draw
pub fn count_supplier_from_data(
    data: &JsonValue,
    seed: u64,
    field: &str,
) -> Result<BoxedSupplier, SpecError> {
    match data {
        JsonValue::Array(counts) => {
            let counts = counts
                .iter()
                .map(|count| parse_count(count, field))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Box::new(CycleSupplier::new(counts, field)?))
        }
        JsonValue::Object(weights) => {
            let choices = weights
                .iter()
                .map(|(count, weight)| {
                    let count = count_from_str(count).ok_or_else(|| {
                        SpecError::malformed(field, format!("invalid count '{count}'"))
                    })?;
                    let weight = json_f64(weight).ok_or_else(|| {
                        SpecError::malformed(
                            field,
                            format!("weight for count {count} must be a number"),
                        )
                    })?;
                    Ok((GeneratedValue::Int64(count), weight))
                })
                .collect::<Result<Vec<_>, SpecError>>()?;
            Ok(Box::new(WeightedSupplier::new(choices, seed, field)?))
        }
        single => Ok(Box::new(ConstantSupplier::new(parse_count(single, field)?))),
    }
}

fn parse_count(value: &JsonValue, field: &str) -> Result<GeneratedValue, SpecError> {
    let count = match value {
        JsonValue::Number(n) => n.as_u64().and_then(|n| i64::try_from(n).ok()),
        JsonValue::String(s) => count_from_str(s),
        _ => None,
    };
    count.map(GeneratedValue::Int64).ok_or_else(|| {
        SpecError::malformed(
            field,
            format!("count must be a non-negative integer, got {value}"),
        )
    })
}

/// Parse a non-negative count that fits in an `i64`.
fn count_from_str(s: &str) -> Option<i64> {
    s.trim().parse::<i64>().ok().filter(|count| *count >= 0)
}
