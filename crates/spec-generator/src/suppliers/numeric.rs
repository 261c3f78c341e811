//! Numeric suppliers.

use super::{seeded_rng, ValueSupplier};
use rand::distr::Uniform;
use rand::Rng;
use spec_core::{GeneratedValue, SpecError};

/// Largest supported number of decimal places.
pub const MAX_PRECISION: u32 = 15;

/// Uniform random float in `[start, end]`, optionally rounded.
#[derive(Debug, Clone)]
pub struct RandomRangeSupplier {
    dist: Uniform<f64>,
    precision: Option<u32>,
    seed: u64,
}

impl RandomRangeSupplier {
    pub fn new(
        start: f64,
        end: f64,
        precision: Option<u32>,
        seed: u64,
        field: &str,
    ) -> Result<Self, SpecError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(SpecError::malformed(field, "range bounds must be finite"));
        }
        if end < start {
            return Err(SpecError::malformed(
                field,
                format!("range end {end} is below start {start}"),
            ));
        }
        if let Some(precision) = precision.filter(|p| *p > MAX_PRECISION) {
            return Err(SpecError::malformed(
                field,
                format!("precision {precision} exceeds the maximum of {MAX_PRECISION}"),
            ));
        }
        let dist = Uniform::new_inclusive(start, end).map_err(|e| {
            SpecError::malformed(field, format!("invalid range [{start}, {end}]: {e}"))
        })?;
        Ok(Self {
            dist,
            precision,
            seed,
        })
    }
}

impl ValueSupplier for RandomRangeSupplier {
    fn next(&self, iteration: u64) -> Result<GeneratedValue, SpecError> {
        let mut rng = seeded_rng(self.seed, iteration);
        let value = rng.sample(self.dist);
        Ok(GeneratedValue::Float64(match self.precision {
            Some(precision) => round_to(value, precision),
            None => value,
        }))
    }
}

/// Round to a number of decimal places, capped at [`MAX_PRECISION`].
///
/// Values too large to scale are returned unchanged.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Stepped range from `start` to `end` (inclusive), indexed by iteration and
/// wrapping around once exhausted.
#[derive(Debug, Clone)]
pub struct RangeSupplier {
    start: f64,
    step: f64,
    len: u64,
    /// Emit integers when start and step are whole numbers
    integral: bool,
}

impl RangeSupplier {
    pub fn new(start: f64, end: f64, step: f64, field: &str) -> Result<Self, SpecError> {
        if !start.is_finite() || !end.is_finite() || !step.is_finite() {
            return Err(SpecError::malformed(field, "range values must be finite"));
        }
        if step <= 0.0 {
            return Err(SpecError::malformed(field, "range step must be positive"));
        }
        if end < start {
            return Err(SpecError::malformed(
                field,
                format!("range end {end} is below start {start}"),
            ));
        }

        let steps = ((end - start) / step).floor();
        if steps >= u64::MAX as f64 {
            return Err(SpecError::malformed(
                field,
                format!("range [{start}, {end}] with step {step} has too many values"),
            ));
        }
        Ok(Self {
            start,
            step,
            len: steps as u64 + 1,
            integral: start.fract() == 0.0 && step.fract() == 0.0,
        })
    }
}

impl ValueSupplier for RangeSupplier {
    fn next(&self, iteration: u64) -> Result<GeneratedValue, SpecError> {
        let offset = (iteration % self.len) as f64;
        let value = self.start + offset * self.step;
        if self.integral {
            Ok(GeneratedValue::Int64(value as i64))
        } else {
            Ok(GeneratedValue::Float64(value))
        }
    }
}
