//! The `values` type.
//!
//! ```text
//! "status": {"type": "values", "data": ["on", "off"]}          cycle
//! "status?sample=true": ["on", "off"]                          uniform sample
//! "status": {"type": "values", "data": {"on": 0.9, "off": 0.1}} weighted
//! "status": "on"                                               constant
//! ```

use crate::config::{is_affirmative, json_f64};
use crate::loader::Loader;
use crate::suppliers::{
    BoxedSupplier, ConstantSupplier, CycleSupplier, SampleSupplier, WeightedSupplier,
};
use serde_json::Value as JsonValue;
use spec_core::{FieldSpec, GeneratedValue, SpecError};

pub const VALUES_KEY: &str = "values";

/// Configure the supplier for the `values` type.
pub fn configure_values(spec: &FieldSpec, loader: &Loader) -> Result<BoxedSupplier, SpecError> {
    let data = spec
        .data
        .as_ref()
        .ok_or_else(|| SpecError::malformed(&spec.path, "'values' requires 'data'"))?;

    match data {
        JsonValue::Array(items) => {
            let values: Vec<GeneratedValue> = items.iter().map(GeneratedValue::from_json).collect();
            if is_affirmative("sample", &spec.config, false) {
                Ok(Box::new(SampleSupplier::new(
                    values,
                    loader.seed_for(spec),
                    &spec.path,
                )?))
            } else {
                Ok(Box::new(CycleSupplier::new(values, &spec.path)?))
            }
        }
        JsonValue::Object(weights) => {
            let choices = weights
                .iter()
                .map(|(value, weight)| {
                    let weight = json_f64(weight).ok_or_else(|| {
                        SpecError::malformed(
                            &spec.path,
                            format!("weight for '{value}' must be a number"),
                        )
                    })?;
                    Ok((GeneratedValue::from(value.as_str()), weight))
                })
                .collect::<Result<Vec<_>, SpecError>>()?;
            Ok(Box::new(WeightedSupplier::new(
                choices,
                loader.seed_for(spec),
                &spec.path,
            )?))
        }
        scalar => Ok(Box::new(ConstantSupplier::new(GeneratedValue::from_json(
            scalar,
        )))),
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::TypeRegistry;
    use crate::Loader;
    use serde_json::json;
    use spec_core::{GeneratedValue, SpecDocument, SpecError};
    use std::sync::Arc;

    fn loader(raw: serde_json::Value) -> Loader {
        let document = SpecDocument::from_json_value(&raw).unwrap();
        Loader::new(document, Arc::new(TypeRegistry::with_builtins()))
    }

    #[test]
    fn test_constant() {
        let loader = loader(json!({"x": {"type": "values", "data": 5}, "y": "fixed"}));
        assert_eq!(loader.get("x").unwrap().next(3).unwrap(), GeneratedValue::Int64(5));
        assert_eq!(
            loader.get("y").unwrap().next(3).unwrap(),
            GeneratedValue::from("fixed")
        );
    }

    #[test]
    fn test_list_cycles() {
        let loader = loader(json!({"x": [1, 2, 3]}));
        let supplier = loader.get("x").unwrap();
        let values: Vec<i64> = (0..4)
            .map(|i| supplier.next(i).unwrap().as_i64().unwrap())
            .collect();
        assert_eq!(values, vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_sampled_list_stays_in_pool() {
        let loader = loader(json!({"x?sample=true": ["a", "b", "c"]}));
        let supplier = loader.get("x").unwrap();
        for i in 0..30 {
            let value = supplier.next(i).unwrap();
            assert!(["a", "b", "c"].contains(&value.as_str().unwrap()));
        }
    }

    #[test]
    fn test_weighted_map() {
        let loader = loader(json!({"x": {"type": "values", "data": {"yes": 1.0, "no": 0}}}));
        let supplier = loader.get("x").unwrap();
        for i in 0..30 {
            assert_eq!(supplier.next(i).unwrap(), GeneratedValue::from("yes"));
        }
    }

    #[test]
    fn test_malformed_values() {
        for raw in [
            json!({"x": {"type": "values"}}),
            json!({"x": {"type": "values", "data": []}}),
            json!({"x": {"type": "values", "data": {}}}),
            json!({"x": {"type": "values", "data": {"a": "heavy"}}}),
        ] {
            let result = loader(raw).get("x");
            assert!(matches!(result, Err(SpecError::Malformed { .. })));
        }
    }
}
