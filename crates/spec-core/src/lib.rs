//! Core types for the specforge value generation engine.
//!
//! This crate provides the foundational types shared by the resolution
//! engine and the command-line front-end:
//!
//! - [`GeneratedValue`] - Values produced by suppliers
//! - [`FieldSpec`] - A lowered, canonical field specification node
//! - [`SpecDocument`] - A full specification with its ref table and field groups
//! - [`ShorthandKey`] - Parsed `name:type?opt=val` field keys
//! - [`SpecError`] - Errors surfaced while loading or resolving a specification
//!
//! # Architecture
//!
//! ```text
//! spec-core (this crate)
//!    │
//!    ├─── spec-generator  (suppliers, registry, loader)
//!    │
//!    └─── specforge       (CLI, writes records as JSON)
//! ```
//!
//! # Example
//!
//! ```rust
//! use spec_core::SpecDocument;
//!
//! let document = SpecDocument::from_json(r#"{
//!     "id": {"type": "range", "data": [1, 100]},
//!     "status:values?sample=true": ["active", "inactive"],
//!     "refs": {
//!         "shared": {"type": "values", "data": [1, 2, 3]}
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(document.field_names(), vec!["id", "status"]);
//! assert!(document.get_ref("shared").is_some());
//! ```

pub mod error;
pub mod shorthand;
pub mod spec;
pub mod value;

// Re-exports for convenience
pub use error::SpecError;
pub use shorthand::{parse_key, ShorthandKey};
pub use spec::{
    is_reserved, Config, FieldSpec, SpecDocument, FIELD_GROUPS_KEY, REFS_KEY, RESERVED_KEYS,
};
pub use value::GeneratedValue;
