//! Scalar value types and CSS unit handling.

mod value;

pub use value::{ScaleValue, Scalar, Unit, parse_scalar, to_pixels};
