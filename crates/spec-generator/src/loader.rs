//! Specification loader.
//!
//! The loader is the entry point for resolution: it finds a field's
//! specification, resolves its configuration, and asks the registry for a
//! supplier. Type handlers call back into it for child and ref specs, so the
//! reserved-key set and ref table are consulted in exactly one place.

use crate::config::resolve_config;
use crate::registry::TypeRegistry;
use crate::suppliers::{path_seed, BoxedSupplier};
use spec_core::{is_reserved, FieldSpec, SpecDocument, SpecError};
use std::sync::Arc;
use tracing::debug;

/// Resolves field specifications into suppliers.
///
/// Nothing is cached: every call builds a fresh supplier tree, so suppliers
/// of the same field never share state unless a caller shares them.
#[derive(Debug, Clone)]
pub struct Loader {
    /// Specification being resolved
    document: Arc<SpecDocument>,
    /// Type handlers available to this loader
    registry: Arc<TypeRegistry>,
    /// Base seed mixed into every random supplier
    seed: u64,
    /// Ref names currently being resolved, outermost first
    ref_chain: Vec<String>,
}

impl Loader {
    /// Create a loader for a document with the given registry and seed 0.
    pub fn new(document: SpecDocument, registry: Arc<TypeRegistry>) -> Self {
        Self {
            document: Arc::new(document),
            registry,
            seed: 0,
            ref_chain: Vec::new(),
        }
    }

    /// Set the base seed for random suppliers.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Get the base seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get a reference to the document.
    pub fn document(&self) -> &SpecDocument {
        &self.document
    }

    /// Get a reference to the registry.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Build the supplier for a top-level field.
    pub fn get(&self, name: &str) -> Result<BoxedSupplier, SpecError> {
        let spec = self
            .document
            .get_field(name)
            .ok_or_else(|| SpecError::UnknownField(name.to_string()))?;
        self.get_from_spec(spec)
    }

    /// Build the supplier for a field specification.
    ///
    /// The factory receives a copy of `spec` whose `config` is already merged
    /// with its `configref`.
    pub fn get_from_spec(&self, spec: &FieldSpec) -> Result<BoxedSupplier, SpecError> {
        let resolved = self.resolve_spec(spec)?;
        debug!(
            field = %resolved.path,
            type_name = %resolved.type_name,
            "Resolving field"
        );
        self.registry.resolve(&resolved.type_name, &resolved, self)
    }

    /// Copy of `spec` with its configuration resolved.
    pub fn resolve_spec(&self, spec: &FieldSpec) -> Result<FieldSpec, SpecError> {
        let config = resolve_config(spec, self)?;
        Ok(FieldSpec {
            config,
            config_ref: None,
            ..spec.clone()
        })
    }

    /// Look up an entry of the ref table.
    pub fn get_ref_spec(&self, name: &str) -> Result<&FieldSpec, SpecError> {
        self.document
            .get_ref(name)
            .ok_or_else(|| SpecError::UnknownRef(name.to_string()))
    }

    /// Build the supplier of a ref table entry on behalf of `field`.
    ///
    /// Fails with [`SpecError::Malformed`] when `name` is already being
    /// resolved further up, so self-referencing refs never recurse forever.
    pub fn get_ref_supplier(&self, name: &str, field: &str) -> Result<BoxedSupplier, SpecError> {
        if let Some(start) = self.ref_chain.iter().position(|r| r == name) {
            let cycle: Vec<&str> = self.ref_chain[start..]
                .iter()
                .map(String::as_str)
                .chain([name])
                .collect();
            return Err(SpecError::malformed(
                field,
                format!("cyclic reference '{}'", cycle.join(" -> ")),
            ));
        }

        let spec = self.get_ref_spec(name)?;
        let mut inner = self.clone();
        inner.ref_chain.push(name.to_string());
        inner.get_from_spec(spec)
    }

    /// Check if a key in field-name position is structural.
    pub fn is_reserved(&self, key: &str) -> bool {
        is_reserved(key)
    }

    /// Lower the child fields of a compound spec, skipping reserved keys.
    pub fn child_specs(&self, spec: &FieldSpec) -> Result<Vec<FieldSpec>, SpecError> {
        let Some(fields) = &spec.fields else {
            return Ok(Vec::new());
        };

        fields
            .iter()
            .filter(|(key, _)| !self.is_reserved(key))
            .map(|(key, raw)| FieldSpec::parse(key, raw, Some(spec.path.as_str())))
            .collect()
    }

    /// Seed for the random supplier of a field.
    pub fn seed_for(&self, spec: &FieldSpec) -> u64 {
        self.seed_for_path(&spec.path)
    }

    /// Seed for a random stream identified by a path.
    pub fn seed_for_path(&self, path: &str) -> u64 {
        path_seed(self.seed, path)
    }
}
