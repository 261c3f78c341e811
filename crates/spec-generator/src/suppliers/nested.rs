//! Nested object supplier.

use super::{BoxedSupplier, ValueSupplier};
use indexmap::IndexMap;
use spec_core::{GeneratedValue, SpecError};

/// Produces objects built from child field suppliers.
///
/// The count supplier decides per call how many objects to build:
///
/// - `0`: an empty list when `as_array` is set, `Null` otherwise
/// - `1`: a single object (wrapped in a list when `as_array` is set)
/// - `n > 1`: a list of `n` objects, the `i`-th built at `iteration + i`
///
/// Because of the offset, object `i` of call `k` equals object `0` of call
/// `k + i`. Building the objects of one call in parallel is only safe when
/// every child supplier is free of side effects for a given iteration.
pub struct NestedSupplier {
    field_suppliers: IndexMap<String, BoxedSupplier>,
    count_supplier: BoxedSupplier,
    as_array: bool,
    path: String,
}

impl NestedSupplier {
    pub fn new(
        field_suppliers: IndexMap<String, BoxedSupplier>,
        count_supplier: BoxedSupplier,
        as_array: bool,
        path: impl Into<String>,
    ) -> Self {
        Self {
            field_suppliers,
            count_supplier,
            as_array,
            path: path.into(),
        }
    }

    /// Child field names, in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.field_suppliers.keys().map(String::as_str).collect()
    }

    fn count(&self, iteration: u64) -> Result<u64, SpecError> {
        let count = self.count_supplier.next(iteration)?;
        count
            .as_i64()
            .and_then(|n| u64::try_from(n).ok())
            .ok_or_else(|| {
                SpecError::malformed(
                    &self.path,
                    format!("count must be a non-negative integer, got {count}"),
                )
            })
    }

    fn single_pass(&self, iteration: u64) -> Result<GeneratedValue, SpecError> {
        let object = self
            .field_suppliers
            .iter()
            .map(|(name, supplier)| Ok((name.clone(), supplier.next(iteration)?)))
            .collect::<Result<IndexMap<_, _>, SpecError>>()?;
        Ok(GeneratedValue::Object(object))
    }
}

impl ValueSupplier for NestedSupplier {
    fn next(&self, iteration: u64) -> Result<GeneratedValue, SpecError> {
        match self.count(iteration)? {
            0 if self.as_array => Ok(GeneratedValue::Array(Vec::new())),
            0 => Ok(GeneratedValue::Null),
            1 if !self.as_array => self.single_pass(iteration),
            count => (0..count)
                .map(|offset| self.single_pass(iteration.wrapping_add(offset)))
                .collect::<Result<Vec<_>, _>>()
                .map(GeneratedValue::Array),
        }
    }
}
