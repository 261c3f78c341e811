//! Specforge integration tests.
//!
//! These tests drive the engine through its public API and the binary:
//! 1. Lower a specification document
//! 2. Resolve fields through a loader and the built-in registry
//! 3. Generate values and records for chosen iterations
//! 4. Check the values against the specification

mod cli;
mod records;
mod resolution;

use serde_json::Value as JsonValue;
use spec_core::SpecDocument;
use spec_generator::{Loader, TypeRegistry};
use std::sync::Arc;

pub const USERS_SPEC: &str = "tests/fixtures/users.yaml";

/// Build a loader with the built-in types for an inline document.
pub fn loader(raw: JsonValue) -> Loader {
    let document = SpecDocument::from_json_value(&raw).expect("Failed to lower specification");
    Loader::new(document, Arc::new(TypeRegistry::with_builtins()))
}

/// Build a loader for the users fixture.
pub fn users_loader(seed: u64) -> Loader {
    let document = SpecDocument::from_file(USERS_SPEC).expect("Failed to load users fixture");
    Loader::new(document, Arc::new(TypeRegistry::with_builtins())).with_seed(seed)
}
