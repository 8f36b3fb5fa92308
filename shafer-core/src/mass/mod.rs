//! Mass functions (basic probability assignments) and source reliability.

mod mass_function;
mod reliability;

pub use mass_function::MassFunction;
pub use reliability::Reliability;

use std::collections::BTreeMap;

/// Unvalidated source input: canonical or free-order subset keys (`"A,B"`)
/// mapped to weights. Validated through [`MassFunction::from_raw`].
pub type RawMass = BTreeMap<String, f64>;
