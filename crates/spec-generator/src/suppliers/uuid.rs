//! UUID supplier.

use super::{seeded_rng, ValueSupplier};
use rand::Rng;
use spec_core::{GeneratedValue, SpecError};
use uuid::Uuid;

/// Produces v4 UUID strings drawn from the per-iteration RNG, so the same
/// iteration always yields the same UUID.
#[derive(Debug, Clone)]
pub struct UuidSupplier {
    seed: u64,
}

impl UuidSupplier {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl ValueSupplier for UuidSupplier {
    fn next(&self, iteration: u64) -> Result<GeneratedValue, SpecError> {
        let mut rng = seeded_rng(self.seed, iteration);
        let mut bytes = [0u8; 16];
        rng.fill(&mut bytes);

        // Set version (4) and variant (RFC 4122) bits
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;

        Ok(GeneratedValue::String(Uuid::from_bytes(bytes).to_string()))
    }
}
