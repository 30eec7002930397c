//! Derived indicators computed from raw aggregates.

pub mod age;
pub mod form;
pub mod rally;
pub mod shots;

pub use age::age_on;
pub use form::RecentForm;
pub use rally::{RallyAnalysis, RallyLength};
pub use shots::ShotDistribution;

use serde::Serializer;

/// JSON has no infinity; an unbounded ratio is written as the string `"Infinity"`.
pub fn serialize_unbounded<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_infinite() && value.is_sign_positive() {
        serializer.serialize_str("Infinity")
    } else {
        serializer.serialize_f64(*value)
    }
}
