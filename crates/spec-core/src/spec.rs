//! Specification definitions for the specforge engine.
//!
//! This module lowers raw JSON/YAML specification documents into canonical
//! [`FieldSpec`] nodes. Shorthand keys and bare values are normalized here,
//! before any resolution logic runs.
//!
//! ## Document Layout
//!
//! ```text
//! {
//!   "<field>":       <field spec | bare value>,
//!   "<name:type?k=v>": <field spec | bare value>,
//!   "refs":          { "<ref name>": <field spec> },
//!   "field_groups":  { "<group>": ["<field>", ...] }
//! }
//! ```

use crate::error::SpecError;
use crate::shorthand::{parse_key, ShorthandKey};
use indexmap::IndexMap;
use serde_json::{Map, Value as JsonValue};
use std::fs;
use std::path::Path;

/// Inline configuration of a field (option name to value).
pub type Config = Map<String, JsonValue>;

/// Key of the shared ref table.
pub const REFS_KEY: &str = "refs";

/// Key of the named field groups.
pub const FIELD_GROUPS_KEY: &str = "field_groups";

/// Keys in field-name position that never produce output.
pub const RESERVED_KEYS: &[&str] = &[REFS_KEY, FIELD_GROUPS_KEY];

/// Type assigned to bare values and data-only nodes.
const VALUES_TYPE: &str = "values";

/// Type assigned to ref-only nodes.
const REF_TYPE: &str = "ref";

/// Check if a key is structural rather than an output field.
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

// ============================================================================
// Field Specification
// ============================================================================

/// A lowered field specification node.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Field name as it appears in output
    pub name: String,

    /// Dotted path from the document root (`parent.child`)
    pub path: String,

    /// Registry key of the type handler
    pub type_name: String,

    /// Whether the node was written as an object (or carried shorthand options)
    pub structured: bool,

    /// Inline configuration, with shorthand options folded in
    pub config: Config,

    /// Name of a shared config in the ref table
    pub config_ref: Option<String>,

    /// Type-specific data
    pub data: Option<JsonValue>,

    /// Name of a shared spec in the ref table
    pub ref_name: Option<String>,

    /// Raw child field entries of compound types, in declaration order
    pub fields: Option<Map<String, JsonValue>>,

    /// Any other keys on the node
    pub extra: Map<String, JsonValue>,
}

impl FieldSpec {
    /// Lower one specification entry.
    ///
    /// `parent` is the path of the enclosing node, if any.
    pub fn parse(key: &str, raw: &JsonValue, parent: Option<&str>) -> Result<Self, SpecError> {
        let ShorthandKey {
            name,
            type_name: key_type,
            params,
        } = parse_key(key)?;

        let path = match parent {
            Some(parent) => format!("{parent}.{name}"),
            None => name.clone(),
        };

        match raw {
            JsonValue::Object(node) => Self::from_node(name, path, key_type, params, node),
            bare => Ok(Self {
                name,
                path,
                type_name: key_type.unwrap_or_else(|| VALUES_TYPE.to_string()),
                structured: !params.is_empty(),
                config: params,
                config_ref: None,
                data: Some(bare.clone()),
                ref_name: None,
                fields: None,
                extra: Map::new(),
            }),
        }
    }

    fn from_node(
        name: String,
        path: String,
        key_type: Option<String>,
        params: Config,
        node: &Map<String, JsonValue>,
    ) -> Result<Self, SpecError> {
        let node_type = optional_str(node, "type", &path)?;

        let type_name = match (node_type, key_type) {
            (Some(node_type), Some(key_type)) if node_type != key_type => {
                return Err(SpecError::malformed(
                    &path,
                    format!("type '{node_type}' conflicts with shorthand type '{key_type}'"),
                ));
            }
            (Some(node_type), _) => node_type,
            (None, Some(key_type)) => key_type,
            (None, None) if node.contains_key("data") => VALUES_TYPE.to_string(),
            (None, None) if node.contains_key("ref") => REF_TYPE.to_string(),
            (None, None) => return Err(SpecError::malformed(&path, "missing 'type'")),
        };

        let mut config = match node.get("config") {
            None => Config::new(),
            Some(JsonValue::Object(config)) => config.clone(),
            Some(_) => return Err(SpecError::malformed(&path, "'config' must be an object")),
        };

        let nested_ref = match config.remove("configref") {
            None => None,
            Some(JsonValue::String(name)) => Some(name),
            Some(_) => return Err(SpecError::malformed(&path, "'configref' must be a string")),
        };
        let config_ref = optional_str(node, "configref", &path)?.or(nested_ref);

        for (key, value) in params {
            config.insert(key, value);
        }

        let fields = match node.get("fields") {
            None => None,
            Some(JsonValue::Object(fields)) => Some(fields.clone()),
            Some(_) => return Err(SpecError::malformed(&path, "'fields' must be an object")),
        };

        let extra = node
            .iter()
            .filter(|(k, _)| {
                !matches!(
                    k.as_str(),
                    "type" | "config" | "configref" | "data" | "ref" | "fields"
                )
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Self {
            name,
            type_name,
            structured: true,
            config,
            config_ref,
            data: node.get("data").cloned(),
            ref_name: optional_str(node, "ref", &path)?,
            fields,
            extra,
            path,
        })
    }

    /// Get an extra (non-canonical) key of the node.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.extra.get(key)
    }
}

fn optional_str(
    node: &Map<String, JsonValue>,
    key: &str,
    path: &str,
) -> Result<Option<String>, SpecError> {
    match node.get(key) {
        None => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(SpecError::malformed(path, format!("'{key}' must be a string"))),
    }
}

// ============================================================================
// Specification Document
// ============================================================================

/// Full specification: output fields, the shared ref table and field groups.
#[derive(Debug, Clone, Default)]
pub struct SpecDocument {
    /// Output fields keyed by lowered name, in declaration order
    fields: IndexMap<String, FieldSpec>,

    /// Shared specs and configs addressable by name
    refs: IndexMap<String, FieldSpec>,

    /// Named subsets of output fields
    field_groups: IndexMap<String, Vec<String>>,
}

impl SpecDocument {
    /// Load a specification file. `.yaml`/`.yml` files are read as YAML,
    /// everything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SpecError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    /// Parse a specification from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        let raw: JsonValue = serde_json::from_str(json)?;
        Self::from_json_value(&raw)
    }

    /// Parse a specification from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SpecError> {
        let raw: JsonValue = serde_yaml::from_str(yaml)?;
        Self::from_json_value(&raw)
    }

    /// Lower a raw specification document.
    pub fn from_json_value(raw: &JsonValue) -> Result<Self, SpecError> {
        let entries = raw
            .as_object()
            .ok_or_else(|| SpecError::malformed("<document>", "document must be an object"))?;

        let mut document = Self::default();
        let mut raw_groups = None;

        for (key, value) in entries {
            match key.as_str() {
                REFS_KEY => document.refs = parse_refs(value)?,
                FIELD_GROUPS_KEY => raw_groups = Some(value),
                _ => {
                    let spec = FieldSpec::parse(key, value, None)?;
                    if document.fields.contains_key(&spec.name) {
                        return Err(SpecError::malformed(&spec.name, "field declared twice"));
                    }
                    document.fields.insert(spec.name.clone(), spec);
                }
            }
        }

        if let Some(groups) = raw_groups {
            document.field_groups = parse_field_groups(groups, &document.fields)?;
        }

        Ok(document)
    }

    /// Get a field spec by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    /// Get a ref table entry by name.
    pub fn get_ref(&self, name: &str) -> Option<&FieldSpec> {
        self.refs.get(name)
    }

    /// Get the member fields of a field group.
    pub fn field_group(&self, name: &str) -> Option<&[String]> {
        self.field_groups.get(name).map(Vec::as_slice)
    }

    /// All output field names, in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// All ref names, in declaration order.
    pub fn ref_names(&self) -> Vec<&str> {
        self.refs.keys().map(String::as_str).collect()
    }

    /// All field group names, in declaration order.
    pub fn field_group_names(&self) -> Vec<&str> {
        self.field_groups.keys().map(String::as_str).collect()
    }
}

fn parse_refs(raw: &JsonValue) -> Result<IndexMap<String, FieldSpec>, SpecError> {
    let entries = raw
        .as_object()
        .ok_or_else(|| SpecError::malformed(REFS_KEY, "ref table must be an object"))?;

    entries
        .iter()
        .map(|(key, value)| {
            let spec = FieldSpec::parse(key, value, Some(REFS_KEY))?;
            Ok((spec.name.clone(), spec))
        })
        .collect()
}

fn parse_field_groups(
    raw: &JsonValue,
    fields: &IndexMap<String, FieldSpec>,
) -> Result<IndexMap<String, Vec<String>>, SpecError> {
    let entries = raw
        .as_object()
        .ok_or_else(|| SpecError::malformed(FIELD_GROUPS_KEY, "field groups must be an object"))?;

    let mut groups = IndexMap::new();
    for (group, members) in entries {
        let members = members
            .as_array()
            .ok_or_else(|| SpecError::malformed(group, "field group must be a list of field names"))?;

        let mut names = Vec::with_capacity(members.len());
        for member in members {
            let name = member
                .as_str()
                .ok_or_else(|| SpecError::malformed(group, "field group members must be strings"))?;
            if !fields.contains_key(name) {
                return Err(SpecError::UnknownField(name.to_string()));
            }
            names.push(name.to_string());
        }
        groups.insert(group.clone(), names);
    }
    Ok(groups)
}

// ============================================================================
// Tests
// ============================================================================
