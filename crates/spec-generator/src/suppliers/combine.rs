//! Combines the outputs of several suppliers.

use super::{BoxedSupplier, ValueSupplier};
use spec_core::{GeneratedValue, SpecError};

/// Calls every child supplier with the same iteration and joins the results
/// into one string, or returns them as a list when `as_list` is set.
pub struct CombineSupplier {
    suppliers: Vec<BoxedSupplier>,
    join_with: String,
    as_list: bool,
}

impl CombineSupplier {
    pub fn new(suppliers: Vec<BoxedSupplier>, join_with: impl Into<String>, as_list: bool) -> Self {
        Self {
            suppliers,
            join_with: join_with.into(),
            as_list,
        }
    }
}

impl ValueSupplier for CombineSupplier {
    fn next(&self, iteration: u64) -> Result<GeneratedValue, SpecError> {
        let values = self
            .suppliers
            .iter()
            .map(|supplier| supplier.next(iteration))
            .collect::<Result<Vec<_>, _>>()?;

        if self.as_list {
            return Ok(GeneratedValue::Array(values));
        }

        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(&self.join_with);
        Ok(GeneratedValue::String(joined))
    }
}
