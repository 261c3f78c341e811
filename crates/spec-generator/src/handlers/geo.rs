//! Geographic coordinate types: `geo.lat`, `geo.long` and `geo.pair`.
//!
//! Options (all in `config`):
//!
//! | Key | Default | Meaning |
//! |-----|---------|---------|
//! | `precision` | 4 | Decimal places |
//! | `bbox` | whole globe | `[min_long, min_lat, max_long, max_lat]` |
//! | `start_lat`, `end_lat`, `start_long`, `end_long` | from `bbox` | Per-axis bounds, override `bbox` |
//! | `join_with` | `,` | Separator for `geo.pair` |
//! | `as_list` | false | `geo.pair` returns `[long, lat]` instead of a string |
//! | `lat_first` | false | `geo.pair` puts latitude first |

use crate::config::{config_f64, config_str, config_u32, is_affirmative, json_f64};
use crate::loader::Loader;
use crate::suppliers::{BoxedSupplier, CombineSupplier, RandomRangeSupplier};
use serde_json::Value as JsonValue;
use spec_core::{FieldSpec, SpecError};

pub const GEO_LAT_KEY: &str = "geo.lat";
pub const GEO_LONG_KEY: &str = "geo.long";
pub const GEO_PAIR_KEY: &str = "geo.pair";

const DEFAULT_PRECISION: u32 = 4;

#[derive(Debug, Clone, Copy)]
enum Axis {
    Lat,
    Long,
}

impl Axis {
    fn suffix(self) -> &'static str {
        match self {
            Axis::Lat => "lat",
            Axis::Long => "long",
        }
    }

    fn default_bounds(self) -> (f64, f64) {
        match self {
            Axis::Lat => (-90.0, 90.0),
            Axis::Long => (-180.0, 180.0),
        }
    }

    /// Positions of this axis' min and max in a bounding box.
    fn bbox_indices(self) -> (usize, usize) {
        match self {
            Axis::Lat => (1, 3),
            Axis::Long => (0, 2),
        }
    }
}

/// Configure the supplier for the `geo.lat` type.
pub fn configure_geo_lat(spec: &FieldSpec, loader: &Loader) -> Result<BoxedSupplier, SpecError> {
    Ok(Box::new(axis_supplier(spec, loader, Axis::Lat)?))
}

/// Configure the supplier for the `geo.long` type.
pub fn configure_geo_long(spec: &FieldSpec, loader: &Loader) -> Result<BoxedSupplier, SpecError> {
    Ok(Box::new(axis_supplier(spec, loader, Axis::Long)?))
}

/// Configure the supplier for the `geo.pair` type.
pub fn configure_geo_pair(spec: &FieldSpec, loader: &Loader) -> Result<BoxedSupplier, SpecError> {
    let lat: BoxedSupplier = Box::new(axis_supplier(spec, loader, Axis::Lat)?);
    let long: BoxedSupplier = Box::new(axis_supplier(spec, loader, Axis::Long)?);

    let join_with = config_str(&spec.config, "join_with", &spec.path)?.unwrap_or(",");
    let as_list = is_affirmative("as_list", &spec.config, false);
    let parts = if is_affirmative("lat_first", &spec.config, false) {
        vec![lat, long]
    } else {
        vec![long, lat]
    };
    Ok(Box::new(CombineSupplier::new(parts, join_with, as_list)))
}

fn axis_supplier(
    spec: &FieldSpec,
    loader: &Loader,
    axis: Axis,
) -> Result<RandomRangeSupplier, SpecError> {
    let precision =
        config_u32(&spec.config, "precision", &spec.path)?.unwrap_or(DEFAULT_PRECISION);
    let (start, end) = bounds(spec, axis)?;
    // Separate random stream per axis
    let seed = loader.seed_for_path(&format!("{}#{}", spec.path, axis.suffix()));
    RandomRangeSupplier::new(start, end, Some(precision), seed, &spec.path)
}

fn bounds(spec: &FieldSpec, axis: Axis) -> Result<(f64, f64), SpecError> {
    let (mut start, mut end) = axis.default_bounds();

    if let Some(bbox) = spec.config.get("bbox") {
        let corners = match bbox {
            JsonValue::Array(items) if items.len() == 4 => items
                .iter()
                .map(json_f64)
                .collect::<Option<Vec<f64>>>(),
            _ => None,
        }
        .ok_or_else(|| {
            SpecError::malformed(
                &spec.path,
                "'bbox' must be a list of 4 numbers: [min_long, min_lat, max_long, max_lat]",
            )
        })?;
        let (min, max) = axis.bbox_indices();
        start = corners[min];
        end = corners[max];
    }

    let suffix = axis.suffix();
    if let Some(value) = config_f64(&spec.config, &format!("start_{suffix}"), &spec.path)? {
        start = value;
    }
    if let Some(value) = config_f64(&spec.config, &format!("end_{suffix}"), &spec.path)? {
        end = value;
    }
    Ok((start, end))
}
