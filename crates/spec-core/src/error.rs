//! Error types for specification loading and resolution.

/// Error type for specification operations.
///
/// Every variant carries enough context (field name, type name or key) to
/// locate the faulty node in the specification document.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// No factory is registered for the requested type
    #[error("Unknown type '{type_name}' for field '{field}'")]
    UnknownType { type_name: String, field: String },

    /// Field not found in the specification document
    #[error("Field not found: {0}")]
    UnknownField(String),

    /// A `ref` or `configref` names an entry missing from the ref table
    #[error("Reference not found: {0}")]
    UnknownRef(String),

    /// A weighted-dispatch key has no matching reference supplier
    #[error("Unknown key '{0}' for weighted reference")]
    UnknownRefKey(String),

    /// Field group not found in the specification document
    #[error("Field group not found: {0}")]
    UnknownFieldGroup(String),

    /// Structural violation in a field specification
    #[error("Malformed specification for '{field}': {reason}")]
    Malformed { field: String, reason: String },

    /// Error reading a specification file
    #[error("Failed to read specification file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SpecError {
    /// Create a [`SpecError::Malformed`] for the given field.
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
