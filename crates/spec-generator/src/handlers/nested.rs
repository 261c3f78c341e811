//! The `nested` type.
//!
//! ```text
//! "address": {
//!   "type": "nested",
//!   "config": {"count": [1, 2], "as_array": true},
//!   "fields": {
//!     "street": {"type": "values", "data": ["Main", "High"]},
//!     "geo": {"type": "nested", "fields": {"lat:geo.lat": {}}}
//!   }
//! }
//! ```

use crate::config::is_affirmative;
use crate::loader::Loader;
use crate::suppliers::{count_supplier_from_data, BoxedSupplier, NestedSupplier};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use spec_core::{FieldSpec, SpecError};
use tracing::trace;

pub const NESTED_KEY: &str = "nested";

/// Configure the supplier for the `nested` type.
///
/// Child fields of type `nested` are built recursively here; every other
/// child goes through the loader like a top-level field.
pub fn configure_nested(spec: &FieldSpec, loader: &Loader) -> Result<BoxedSupplier, SpecError> {
    if !matches!(&spec.fields, Some(fields) if !fields.is_empty()) {
        return Err(SpecError::malformed(
            &spec.path,
            "'nested' requires a non-empty 'fields' object",
        ));
    }

    let mut field_suppliers = IndexMap::new();
    for child in loader.child_specs(spec)? {
        let supplier = if child.type_name == NESTED_KEY {
            configure_nested(&loader.resolve_spec(&child)?, loader)?
        } else {
            loader.get_from_spec(&child)?
        };
        trace!(parent = %spec.path, child = %child.path, "Built nested child supplier");
        field_suppliers.insert(child.name, supplier);
    }

    if field_suppliers.is_empty() {
        return Err(SpecError::malformed(
            &spec.path,
            "'nested' fields contain only reserved keys",
        ));
    }

    let count_data = spec
        .config
        .get("count")
        .cloned()
        .unwrap_or(JsonValue::from(1));
    let count_supplier = count_supplier_from_data(
        &count_data,
        loader.seed_for_path(&format!("{}#count", spec.path)),
        &spec.path,
    )?;
    let as_array = is_affirmative("as_array", &spec.config, false);

    Ok(Box::new(NestedSupplier::new(
        field_suppliers,
        count_supplier,
        as_array,
        spec.path.clone(),
    )))
}

#[cfg(test)]
mod tests {
    use crate::registry::TypeRegistry;
    use crate::Loader;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use spec_core::{GeneratedValue, SpecDocument, SpecError};
    use std::sync::Arc;

    fn loader(raw: serde_json::Value) -> Loader {
        let document = SpecDocument::from_json_value(&raw).unwrap();
        Loader::new(document, Arc::new(TypeRegistry::with_builtins()))
    }

    fn object(entries: &[(&str, GeneratedValue)]) -> GeneratedValue {
        GeneratedValue::Object(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<IndexMap<_, _>>(),
        )
    }

    #[test]
    fn test_single_object() {
        let loader = loader(json!({
            "x": {"type": "nested", "fields": {"y": {"type": "values", "data": [5]}}}
        }));
        assert_eq!(
            loader.get("x").unwrap().next(0).unwrap(),
            object(&[("y", GeneratedValue::Int64(5))])
        );
    }

    #[test]
    fn test_field_order_and_shorthand_children() {
        let loader = loader(json!({
            "x": {"type": "nested", "fields": {"b": 1, "a:range": {"data": [1, 3]}, "c": "z"}}
        }));
        let value = loader.get("x").unwrap().next(1).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(value.as_object().unwrap()["a"], GeneratedValue::Int64(2));
    }

    #[test]
    fn test_deeply_nested() {
        let loader = loader(json!({
            "outer": {
                "type": "nested",
                "fields": {
                    "inner": {
                        "type": "nested",
                        "fields": {"leaf": {"type": "values", "data": ["a", "b"]}}
                    }
                }
            }
        }));
        assert_eq!(
            loader.get("outer").unwrap().next(1).unwrap(),
            object(&[("inner", object(&[("leaf", "b".into())]))])
        );
    }

    #[test]
    fn test_count_and_as_array() {
        let loader = loader(json!({
            "many": {"type": "nested", "config": {"count": 3}, "fields": {"i:range": {"data": [0, 99]}}},
            "none": {"type": "nested", "config": {"count": 0, "as_array": true}, "fields": {"v": 1}},
            "null": {"type": "nested", "config": {"count": 0}, "fields": {"v": 1}},
            "wrapped?as_array=true": {"type": "nested", "fields": {"v": 1}}
        }));

        let many = loader.get("many").unwrap().next(4).unwrap();
        let items = many.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2], object(&[("i", GeneratedValue::Int64(6))]));

        assert_eq!(
            loader.get("none").unwrap().next(0).unwrap(),
            GeneratedValue::Array(vec![])
        );
        assert_eq!(loader.get("null").unwrap().next(0).unwrap(), GeneratedValue::Null);
        assert_eq!(
            loader.get("wrapped").unwrap().next(0).unwrap(),
            GeneratedValue::Array(vec![object(&[("v", GeneratedValue::Int64(1))])])
        );
    }

    #[test]
    fn test_child_configref_is_resolved() {
        let loader = loader(json!({
            "x": {
                "type": "nested",
                "fields": {
                    "parts": {"type": "nested", "configref": "two", "fields": {"v": 1}}
                }
            },
            "refs": {"two": {"type": "config_ref", "config": {"count": 2}}}
        }));
        let value = loader.get("x").unwrap().next(0).unwrap();
        assert_eq!(value.as_object().unwrap()["parts"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_or_empty_fields_are_malformed() {
        for raw in [
            json!({"x": {"type": "nested"}}),
            json!({"x": {"type": "nested", "fields": {}}}),
            json!({"x": {"type": "nested", "fields": {"refs": {"type": "values", "data": 1}}}}),
        ] {
            let result = loader(raw).get("x");
            assert!(matches!(result, Err(SpecError::Malformed { field, .. }) if field == "x"));
        }
    }

    #[test]
    fn test_child_errors_carry_child_path() {
        let loader = loader(json!({
            "x": {"type": "nested", "fields": {"y": {"type": "bogus"}}}
        }));
        assert!(matches!(
            loader.get("x"),
            Err(SpecError::UnknownType { type_name, field }) if type_name == "bogus" && field == "x.y"
        ));
    }
}
