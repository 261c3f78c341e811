//! Value suppliers.
//!
//! A [`ValueSupplier`] produces one value per iteration index. The suppliers
//! in this module are the building blocks type handlers compose.
//!
//! Random suppliers hold a seed derived from their field path and draw from a
//! fresh RNG per call (see [`seeded_rng`]), so calls may come in any order and
//! from any field without disturbing each other.

pub mod basic;
pub mod combine;
pub mod count;
pub mod nested;
pub mod numeric;
pub mod uuid;
pub mod weighted_refs;

use rand::rngs::StdRng;
use rand::SeedableRng;
use spec_core::{GeneratedValue, SpecError};

pub use basic::{from_fn, ConstantSupplier, CycleSupplier, FnSupplier, SampleSupplier, WeightedSupplier};
pub use combine::CombineSupplier;
pub use count::count_supplier_from_data;
pub use nested::NestedSupplier;
pub use numeric::{round_to, RandomRangeSupplier, RangeSupplier, MAX_PRECISION};
pub use self::uuid::UuidSupplier;
pub use weighted_refs::WeightedRefsSupplier;

/// Trait for producing values.
///
/// Suppliers are built once at load time and called many times afterwards.
/// A supplier must not rely on call order across different suppliers.
pub trait ValueSupplier: Send + Sync {
    /// Produce the value for the given iteration index.
    fn next(&self, iteration: u64) -> Result<GeneratedValue, SpecError>;
}

/// Owned, type-erased supplier.
pub type BoxedSupplier = Box<dyn ValueSupplier>;

impl<S: ValueSupplier + ?Sized> ValueSupplier for Box<S> {
    fn next(&self, iteration: u64) -> Result<GeneratedValue, SpecError> {
        (**self).next(iteration)
    }
}

/// Derive the RNG for one call of a random supplier.
///
/// Combines the supplier seed with the iteration so any index can be
/// generated directly.
pub fn seeded_rng(seed: u64, iteration: u64) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add(iteration.wrapping_mul(0x9E3779B97F4A7C15)))
}

/// Mix a base seed with a field path (FNV-1a), giving each field its own
/// random stream.
pub fn path_seed(seed: u64, path: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in path.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash ^ seed
}
