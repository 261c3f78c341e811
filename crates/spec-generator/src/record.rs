//! Record generation over a whole specification.
//!
//! A [`RecordGenerator`] builds one supplier per output field up front and
//! then assembles records for any iteration index.

use crate::loader::Loader;
use crate::suppliers::BoxedSupplier;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use spec_core::{GeneratedValue, SpecError};
use tracing::debug;

/// One generated record.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRecord {
    /// Iteration index the record was generated for
    pub index: u64,
    /// Field values, in specification order
    pub fields: IndexMap<String, GeneratedValue>,
}

impl GeneratedRecord {
    /// Get a field value by name.
    pub fn get_field(&self, name: &str) -> Option<&GeneratedValue> {
        self.fields.get(name)
    }

    /// Convert the record into a JSON object.
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Object(
            self.fields
                .iter()
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect(),
        )
    }
}

/// Produces records from the suppliers of a set of fields.
///
/// Values depend only on the iteration index, so generating records
/// 5..10 directly yields the same records as generating 0..10 and skipping
/// the first five.
pub struct RecordGenerator {
    /// Output field suppliers, in specification order
    suppliers: IndexMap<String, BoxedSupplier>,
    /// Current iteration index (for incremental generation)
    index: u64,
}

impl RecordGenerator {
    /// Create a generator over every top-level field of the loader's document.
    pub fn new(loader: &Loader) -> Result<Self, SpecError> {
        let names: Vec<String> = loader
            .document()
            .field_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        Self::for_fields(loader, &names)
    }

    /// Create a generator over the members of a named field group.
    pub fn for_group(loader: &Loader, group: &str) -> Result<Self, SpecError> {
        let names = loader
            .document()
            .field_group(group)
            .ok_or_else(|| SpecError::UnknownFieldGroup(group.to_string()))?
            .to_vec();
        Self::for_fields(loader, &names)
    }

    /// Create a generator over an explicit list of top-level fields.
    pub fn for_fields<S: AsRef<str>>(loader: &Loader, names: &[S]) -> Result<Self, SpecError> {
        let mut suppliers = IndexMap::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            suppliers.insert(name.to_string(), loader.get(name)?);
        }
        debug!(fields = suppliers.len(), "Built record generator");
        Ok(Self {
            suppliers,
            index: 0,
        })
    }

    /// Set the starting index for record generation.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self
    }

    /// Get the current iteration index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Output field names, in specification order.
    pub fn field_names(&self) -> Vec<&str> {
        self.suppliers.keys().map(String::as_str).collect()
    }

    /// Generate the record for an iteration without moving the current index.
    pub fn record_at(&self, index: u64) -> Result<GeneratedRecord, SpecError> {
        let fields = self
            .suppliers
            .iter()
            .map(|(name, supplier)| Ok((name.clone(), supplier.next(index)?)))
            .collect::<Result<IndexMap<_, _>, SpecError>>()?;
        Ok(GeneratedRecord { index, fields })
    }

    /// Generate the record for the current index and advance.
    pub fn next_record(&mut self) -> Result<GeneratedRecord, SpecError> {
        let record = self.record_at(self.index)?;
        self.index += 1;
        Ok(record)
    }

    /// Generate `count` records starting at the current index.
    ///
    /// Returns an iterator that lazily generates records.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut RecordGenerator,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = Result<GeneratedRecord, SpecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
