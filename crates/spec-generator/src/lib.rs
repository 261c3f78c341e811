//! Supplier composition and resolution engine for specforge.
//!
//! This crate turns a [`SpecDocument`](spec_core::SpecDocument) into a tree of
//! [`ValueSupplier`]s. Each supplier answers `next(iteration)` with one value;
//! random suppliers derive a fresh seeded RNG from the iteration, so the same
//! specification, seed and iteration always yield the same value.
//!
//! # Architecture
//!
//! ```text
//! SpecDocument (JSON / YAML)
//!        │
//!        ▼
//! ┌─────────────────┐      ┌────────────────┐
//! │     Loader      │─────▶│  TypeRegistry  │  type name → factory
//! │                 │◀─────│                │
//! │  - document     │      └────────────────┘
//! │  - registry     │
//! │  - seed         │
//! └────────┬────────┘
//!          │ get(field)
//!          ▼
//!    BoxedSupplier ── next(iteration) ──▶ GeneratedValue
//! ```
//!
//! Factories receive the loader and call back into it for child specs
//! (`nested`, `ref`, `weighted_ref`, `combine`), so reserved-key filtering and
//! config resolution behave identically at every level.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use spec_core::{GeneratedValue, SpecDocument};
//! use spec_generator::{Loader, TypeRegistry};
//!
//! let document = SpecDocument::from_json(r#"{
//!     "x": {"type": "nested", "fields": {"y": {"type": "values", "data": [5]}}}
//! }"#).unwrap();
//!
//! let loader = Loader::new(document, Arc::new(TypeRegistry::with_builtins()));
//! let value = loader.get("x").unwrap().next(0).unwrap();
//!
//! assert_eq!(value.to_json(), serde_json::json!({"y": 5}));
//! ```
//!
//! # Built-in Types
//!
//! - `values` - constants, cycled lists, sampled lists, weighted maps
//! - `range` - stepped ranges indexed by iteration
//! - `rand_range` - seeded uniform floats with optional precision
//! - `uuid` - seeded v4 UUIDs
//! - `ref` - the supplier of a named ref spec
//! - `weighted_ref` - weighted dispatch across named ref suppliers
//! - `nested` - objects or lists of objects built from child fields
//! - `combine` - joins the outputs of several refs
//! - `geo.lat`, `geo.long`, `geo.pair` - random coordinates

pub mod config;
pub mod handlers;
pub mod loader;
pub mod record;
pub mod registry;
pub mod suppliers;

// Re-exports for convenience
pub use config::{is_affirmative, resolve_config};
pub use loader::Loader;
pub use record::{GeneratedRecord, RecordGenerator, RecordIterator};
pub use registry::{TypeFactory, TypeRegistry};
pub use suppliers::{BoxedSupplier, ValueSupplier};
