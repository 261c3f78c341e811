//! Command handlers.

mod check;
mod generate;

pub use check::run_check;
pub use generate::run_generate;

use anyhow::Context;
use spec_core::SpecDocument;
use spec_generator::{Loader, TypeRegistry};
use std::path::Path;
use std::sync::Arc;

/// Load a specification file and build a loader with the built-in types.
pub fn load_spec(path: &Path, seed: u64) -> anyhow::Result<Loader> {
    let document = SpecDocument::from_file(path)
        .with_context(|| format!("Failed to load specification: {}", path.display()))?;
    tracing::debug!(
        fields = document.field_names().len(),
        refs = document.ref_names().len(),
        "Loaded specification"
    );
    Ok(Loader::new(document, Arc::new(TypeRegistry::with_builtins())).with_seed(seed))
}
