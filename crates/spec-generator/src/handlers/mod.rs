//! Built-in type handlers.
//!
//! Each handler is a factory `(spec, loader) -> supplier` registered under a
//! type name. Handlers validate their configuration eagerly and report
//! problems as [`SpecError::Malformed`](spec_core::SpecError::Malformed).

pub mod geo;
pub mod nested;
pub mod numeric;
pub mod refs;
pub mod uuid;
pub mod values;

use crate::registry::TypeRegistry;

/// Register every built-in type.
pub fn register_builtins(registry: &mut TypeRegistry) {
    registry
        .register(values::VALUES_KEY, values::configure_values)
        .register(numeric::RANGE_KEY, numeric::configure_range)
        .register(numeric::RAND_RANGE_KEY, numeric::configure_rand_range)
        .register(uuid::UUID_KEY, uuid::configure_uuid)
        .register(refs::REF_KEY, refs::configure_ref)
        .register(refs::WEIGHTED_REF_KEY, refs::configure_weighted_ref)
        .register(refs::COMBINE_KEY, refs::configure_combine)
        .register(refs::CONFIG_REF_KEY, refs::configure_config_ref)
        .register(nested::NESTED_KEY, nested::configure_nested)
        .register(geo::GEO_LAT_KEY, geo::configure_geo_lat)
        .register(geo::GEO_LONG_KEY, geo::configure_geo_long)
        .register(geo::GEO_PAIR_KEY, geo::configure_geo_pair);
}
