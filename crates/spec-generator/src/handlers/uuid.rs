//! The `uuid` type.

use crate::loader::Loader;
use crate::suppliers::{BoxedSupplier, UuidSupplier};
use spec_core::{FieldSpec, SpecError};

pub const UUID_KEY: &str = "uuid";

/// Configure the supplier for the `uuid` type.
pub fn configure_uuid(spec: &FieldSpec, loader: &Loader) -> Result<BoxedSupplier, SpecError> {
    Ok(Box::new(UuidSupplier::new(loader.seed_for(spec))))
}
