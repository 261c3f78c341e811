//! Type handler registry.
//!
//! Maps a type name to the factory that builds suppliers for it. The registry
//! is an ordinary value: build it (usually with [`TypeRegistry::with_builtins`]),
//! register any extra types, then hand it to a [`Loader`]. It holds no
//! per-specification state and is read-only once loaders use it.

use crate::handlers;
use crate::loader::Loader;
use crate::suppliers::BoxedSupplier;
use spec_core::{FieldSpec, SpecError};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Factory building a supplier for one field specification.
///
/// Factories report invalid configuration as [`SpecError::Malformed`] rather
/// than returning a partially usable supplier.
pub type TypeFactory =
    dyn Fn(&FieldSpec, &Loader) -> Result<BoxedSupplier, SpecError> + Send + Sync;

/// Registry of type handlers.
#[derive(Clone, Default)]
pub struct TypeRegistry {
    factories: HashMap<String, Arc<TypeFactory>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with all built-in types registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        handlers::register_builtins(&mut registry);
        registry
    }

    /// Bind a type name to a factory. A later registration under the same
    /// name replaces the earlier one.
    pub fn register<F>(&mut self, type_name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&FieldSpec, &Loader) -> Result<BoxedSupplier, SpecError> + Send + Sync + 'static,
    {
        let type_name = type_name.into();
        if self
            .factories
            .insert(type_name.clone(), Arc::new(factory))
            .is_some()
        {
            debug!(type_name = %type_name, "Replaced existing type handler");
        }
        self
    }

    /// Build a supplier for `spec` with the factory registered under `type_name`.
    pub fn resolve(
        &self,
        type_name: &str,
        spec: &FieldSpec,
        loader: &Loader,
    ) -> Result<BoxedSupplier, SpecError> {
        let factory = self
            .factories
            .get(type_name)
            .ok_or_else(|| SpecError::UnknownType {
                type_name: type_name.to_string(),
                field: spec.path.clone(),
            })?;
        factory(spec, loader)
    }

    /// Check if a type name is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.type_names())
            .finish()
    }
}
