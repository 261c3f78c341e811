//! Resolution scenarios: nesting, refs, config merging and registry overrides.

use crate::loader;
use pretty_assertions::assert_eq;
use serde_json::json;
use spec_core::{FieldSpec, GeneratedValue, SpecDocument, SpecError};
use spec_generator::suppliers::{from_fn, BoxedSupplier};
use spec_generator::{Loader, TypeRegistry};
use std::collections::HashSet;
use std::sync::Arc;

#[test]
fn test_nested_object() {
    let loader = loader(json!({
        "x": {"type": "nested", "fields": {"y": {"type": "values", "data": [5]}}}
    }));
    let supplier = loader.get("x").unwrap();
    assert_eq!(supplier.next(0).unwrap().to_json(), json!({"y": 5}));
}

#[test]
fn test_nested_without_fields_fails_at_construction() {
    let loader = loader(json!({"x": {"type": "nested"}}));
    let result = loader.get("x");
    assert!(matches!(result, Err(SpecError::Malformed { field, .. }) if field == "x"));
}

#[test]
fn test_nested_list_offsets() {
    let loader = loader(json!({
        "items": {
            "type": "nested",
            "config": {"count": 3},
            "fields": {"n": {"type": "range", "data": [0, 1000]}}
        }
    }));
    let supplier = loader.get("items").unwrap();
    assert_eq!(
        supplier.next(10).unwrap().to_json(),
        json!([{"n": 10}, {"n": 11}, {"n": 12}])
    );
}

#[test]
fn test_weighted_refs_draw_from_both_refs() {
    let loader = loader(json!({
        "pet": {"type": "weighted_ref", "data": {"cats": 0.5, "dogs": 0.5}},
        "refs": {
            "cats": {"type": "values", "data": ["tabby"]},
            "dogs": {"type": "values", "data": ["beagle"]}
        }
    }));
    let supplier = loader.get("pet").unwrap();
    let seen: HashSet<String> = (0..200)
        .map(|i| supplier.next(i).unwrap().to_string())
        .collect();
    let expected: HashSet<String> = ["tabby", "beagle"].iter().map(|s| s.to_string()).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_weighted_refs_dispatch_forwards_iteration() {
    let loader = loader(json!({
        "pet": {"type": "weighted_ref", "data": {"counter": 1}},
        "refs": {"counter": {"type": "range", "data": [0, 99]}}
    }));
    let supplier = loader.get("pet").unwrap();
    for i in [0, 7, 42] {
        assert_eq!(supplier.next(i).unwrap(), GeneratedValue::Int64(i as i64));
    }
}

#[test]
fn test_config_merge_inline_wins() {
    let loader = loader(json!({
        "x": {
            "type": "values",
            "data": ["a", "b"],
            "config": {"sample": "no"},
            "configref": "shared"
        },
        "refs": {"shared": {"type": "config_ref", "config": {"sample": "yes", "unused": 1}}}
    }));
    let spec = loader.document().get_field("x").unwrap();
    let config = spec_generator::resolve_config(spec, &loader).unwrap();
    assert_eq!(
        serde_json::Value::Object(config),
        json!({"sample": "no", "unused": 1})
    );

    // Inline `sample: no` keeps the list cycling
    let supplier = loader.get("x").unwrap();
    assert_eq!(supplier.next(0).unwrap(), GeneratedValue::from("a"));
    assert_eq!(supplier.next(1).unwrap(), GeneratedValue::from("b"));
}

#[test]
fn test_registry_override_wins() {
    let mut registry = TypeRegistry::with_builtins();
    registry.register(
        "uuid",
        |_spec: &FieldSpec, _loader: &Loader| -> Result<BoxedSupplier, SpecError> {
            Ok(Box::new(from_fn(|i| {
                Ok(GeneratedValue::String(format!("id-{i}")))
            })))
        },
    );

    let document = SpecDocument::from_json_value(&json!({"id": {"type": "uuid"}})).unwrap();
    let loader = Loader::new(document, Arc::new(registry));
    let supplier = loader.get("id").unwrap();
    assert_eq!(supplier.next(3).unwrap(), GeneratedValue::from("id-3"));
}

#[test]
fn test_custom_type_reads_merged_config() {
    let mut registry = TypeRegistry::with_builtins();
    registry.register(
        "greeting",
        |spec: &FieldSpec, _loader: &Loader| -> Result<BoxedSupplier, SpecError> {
            let name = spec
                .config
                .get("name")
                .and_then(|v| v.as_str())
                .ok_or_else(|| SpecError::malformed(&spec.path, "'name' is required"))?
                .to_string();
            Ok(Box::new(from_fn(move |_| {
                Ok(GeneratedValue::String(format!("hello {name}")))
            })))
        },
    );

    let document = SpecDocument::from_json_value(&json!({
        "a": {"type": "greeting", "configref": "who"},
        "b:greeting?name=bob": {},
        "c": {"type": "greeting"},
        "refs": {"who": {"type": "config_ref", "config": {"name": "alice"}}}
    }))
    .unwrap();
    let loader = Loader::new(document, Arc::new(registry));

    assert_eq!(
        loader.get("a").unwrap().next(0).unwrap(),
        GeneratedValue::from("hello alice")
    );
    assert_eq!(
        loader.get("b").unwrap().next(0).unwrap(),
        GeneratedValue::from("hello bob")
    );
    assert!(matches!(loader.get("c"), Err(SpecError::Malformed { .. })));
}

#[test]
fn test_unknown_type_and_ref_errors() {
    let loader = loader(json!({
        "a": {"type": "nope"},
        "b": {"type": "ref", "ref": "nope"},
        "c": {"type": "values", "data": 1, "configref": "nope"}
    }));
    assert!(matches!(loader.get("a"), Err(SpecError::UnknownType { .. })));
    assert!(matches!(loader.get("b"), Err(SpecError::UnknownRef(_))));
    assert!(matches!(loader.get("c"), Err(SpecError::UnknownRef(_))));
}

#[test]
fn test_reserved_keys_never_produce_output() {
    let loader = loader(json!({
        "x": {
            "type": "nested",
            "fields": {
                "a": 1,
                "refs": {"type": "values", "data": "hidden"},
                "field_groups": {"type": "values", "data": "hidden"}
            }
        }
    }));
    assert_eq!(loader.get("x").unwrap().next(0).unwrap().to_json(), json!({"a": 1}));
}

#[test]
fn test_suppliers_are_order_independent() {
    let loader = loader(json!({
        "a": {"type": "rand_range", "data": [0, 1]},
        "b": {"type": "uuid"}
    }));
    let a = loader.get("a").unwrap();
    let b = loader.get("b").unwrap();

    let forward: Vec<_> = (0..5).map(|i| (a.next(i).unwrap(), b.next(i).unwrap())).collect();
    let backward: Vec<_> = (0..5)
        .rev()
        .map(|i| (a.next(i).unwrap(), b.next(i).unwrap()))
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    assert_eq!(forward, backward);
}
