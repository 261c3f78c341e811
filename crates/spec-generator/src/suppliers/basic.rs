//! Value-list suppliers: constants, cycles, samples and weighted draws.

use super::{seeded_rng, ValueSupplier};
use rand::Rng;
use spec_core::{GeneratedValue, SpecError};

/// Always returns the same value.
#[derive(Debug, Clone)]
pub struct ConstantSupplier {
    value: GeneratedValue,
}

impl ConstantSupplier {
    pub fn new(value: GeneratedValue) -> Self {
        Self { value }
    }
}

impl ValueSupplier for ConstantSupplier {
    fn next(&self, _iteration: u64) -> Result<GeneratedValue, SpecError> {
        Ok(self.value.clone())
    }
}

/// Walks a list of values in order, wrapping around.
#[derive(Debug, Clone)]
pub struct CycleSupplier {
    values: Vec<GeneratedValue>,
}

impl CycleSupplier {
    /// Create a cycling supplier. Fails if `values` is empty.
    pub fn new(values: Vec<GeneratedValue>, field: &str) -> Result<Self, SpecError> {
        if values.is_empty() {
            return Err(SpecError::malformed(field, "values list must not be empty"));
        }
        Ok(Self { values })
    }
}

impl ValueSupplier for CycleSupplier {
    fn next(&self, iteration: u64) -> Result<GeneratedValue, SpecError> {
        let idx = (iteration % self.values.len() as u64) as usize;
        Ok(self.values[idx].clone())
    }
}

/// Picks uniformly from a list of values.
#[derive(Debug, Clone)]
pub struct SampleSupplier {
    values: Vec<GeneratedValue>,
    seed: u64,
}

impl SampleSupplier {
    /// Create a sampling supplier. Fails if `values` is empty.
    pub fn new(values: Vec<GeneratedValue>, seed: u64, field: &str) -> Result<Self, SpecError> {
        if values.is_empty() {
            return Err(SpecError::malformed(field, "values list must not be empty"));
        }
        Ok(Self { values, seed })
    }
}

impl ValueSupplier for SampleSupplier {
    fn next(&self, iteration: u64) -> Result<GeneratedValue, SpecError> {
        let mut rng = seeded_rng(self.seed, iteration);
        let idx = rng.random_range(0..self.values.len());
        Ok(self.values[idx].clone())
    }
}

/// Categorical draw over weighted values.
#[derive(Debug, Clone)]
pub struct WeightedSupplier {
    values: Vec<GeneratedValue>,
    /// Running sum of weights, aligned with `values`
    cumulative: Vec<f64>,
    seed: u64,
}

impl WeightedSupplier {
    /// Create a weighted supplier from `(value, weight)` pairs.
    ///
    /// Weights must be finite and non-negative with a positive total.
    pub fn new(
        choices: Vec<(GeneratedValue, f64)>,
        seed: u64,
        field: &str,
    ) -> Result<Self, SpecError> {
        if choices.is_empty() {
            return Err(SpecError::malformed(field, "weighted values must not be empty"));
        }

        let mut values = Vec::with_capacity(choices.len());
        let mut cumulative = Vec::with_capacity(choices.len());
        let mut total = 0.0;
        for (value, weight) in choices {
            if !weight.is_finite() || weight < 0.0 {
                return Err(SpecError::malformed(
                    field,
                    format!("invalid weight {weight} for value {value}"),
                ));
            }
            total += weight;
            values.push(value);
            cumulative.push(total);
        }

        if total <= 0.0 {
            return Err(SpecError::malformed(field, "weights must not all be zero"));
        }

        Ok(Self {
            values,
            cumulative,
            seed,
        })
    }

    fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }
}

impl ValueSupplier for WeightedSupplier {
    fn next(&self, iteration: u64) -> Result<GeneratedValue, SpecError> {
        let mut rng = seeded_rng(self.seed, iteration);
        let target = rng.random::<f64>() * self.total();
        // Zero-weight entries share their predecessor's running sum and are skipped
        let idx = self
            .cumulative
            .partition_point(|&c| c <= target)
            .min(self.values.len() - 1);
        Ok(self.values[idx].clone())
    }
}

/// Supplier backed by a closure.
pub struct FnSupplier<F> {
    f: F,
}

/// Wrap a closure as a supplier.
pub fn from_fn<F>(f: F) -> FnSupplier<F>
where
    F: Fn(u64) -> Result<GeneratedValue, SpecError> + Send + Sync,
{
    FnSupplier { f }
}

impl<F> ValueSupplier for FnSupplier<F>
where
    F: Fn(u64) -> Result<GeneratedValue, SpecError> + Send + Sync,
{
    fn next(&self, iteration: u64) -> Result<GeneratedValue, SpecError> {
        (self.f)(iteration)
    }
}
