//! Weighted dispatch across named reference suppliers.

use super::{BoxedSupplier, ValueSupplier};
use spec_core::{GeneratedValue, SpecError};
use std::collections::HashMap;

/// Dispatches each call to one of several named suppliers.
///
/// The key supplier decides which name answers for a given iteration; this
/// supplier only looks the name up and forwards the same iteration. Weighting
/// and tie-breaking belong entirely to the key supplier.
pub struct WeightedRefsSupplier {
    key_supplier: BoxedSupplier,
    values_map: HashMap<String, BoxedSupplier>,
}

impl WeightedRefsSupplier {
    pub fn new(key_supplier: BoxedSupplier, values_map: HashMap<String, BoxedSupplier>) -> Self {
        Self {
            key_supplier,
            values_map,
        }
    }

    /// Names this supplier can dispatch to.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values_map.keys().map(String::as_str)
    }
}

impl ValueSupplier for WeightedRefsSupplier {
    fn next(&self, iteration: u64) -> Result<GeneratedValue, SpecError> {
        let key = self.key_supplier.next(iteration)?.to_string();
        let supplier = self
            .values_map
            .get(&key)
            .ok_or(SpecError::UnknownRefKey(key))?;
        supplier.next(iteration)
    }
}
