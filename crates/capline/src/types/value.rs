//! CSS-like scalar values.
//!
//! Theme scales and text properties carry values that are either plain
//! numbers or strings combining a magnitude with a unit (`"20px"`,
//! `"1.5rem"`). This module normalizes both shapes into a numeric
//! value plus unit tag, and converts them to pixels.

use crate::{Error, Result};
use cssparser::{Parser, ParserInput, Token};
use std::fmt;

/// A raw scalar as it appears in a theme scale or a text property:
/// either a bare number or a CSS-like string.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleValue {
    /// A bare number (always treated as pixels).
    Number(f32),
    /// A string value, possibly carrying a unit or naming a token.
    Text(String),
}

impl From<f32> for ScaleValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<f64> for ScaleValue {
    fn from(value: f64) -> Self {
        Self::Number(value as f32)
    }
}

impl From<i32> for ScaleValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f32)
    }
}

impl From<&str> for ScaleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ScaleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for ScaleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleValue::Number(n) => write!(f, "{}", n),
            ScaleValue::Text(s) => f.write_str(s),
        }
    }
}

/// The unit tag of a parsed scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Unit {
    /// No unit (a bare number).
    None,
    /// Absolute pixels.
    Px,
    /// Relative to the root font size.
    Rem,
    /// Any unit outside the supported set.
    Other(String),
}

/// A scalar split into its numeric magnitude and unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Scalar {
    /// Numeric magnitude. `NAN` when the input had no leading number.
    pub value: f32,
    /// The trailing unit.
    pub unit: Unit,
}

/// Split a raw value into its numeric magnitude and unit tag.
///
/// A bare number yields unit [`Unit::None`]. Strings that do not start
/// with a number (e.g. `"auto"`) yield a `NAN` magnitude with the whole
/// input as an [`Unit::Other`] tag, which downstream conversion rejects.
///
/// # Example
///
/// ```
/// use capline::types::{ScaleValue, Unit, parse_scalar};
///
/// let scalar = parse_scalar(&ScaleValue::from("1.5rem"));
/// assert_eq!(scalar.value, 1.5);
/// assert_eq!(scalar.unit, Unit::Rem);
/// ```
pub fn parse_scalar(raw: &ScaleValue) -> Scalar {
    let text = match raw {
        ScaleValue::Number(n) => {
            return Scalar {
                value: *n,
                unit: Unit::None,
            };
        }
        ScaleValue::Text(s) => s,
    };

    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);

    match parser.next() {
        Ok(Token::Number { value, .. }) => Scalar {
            value: *value,
            unit: Unit::None,
        },
        Ok(Token::Dimension { value, unit, .. }) => Scalar {
            value: *value,
            unit: match unit.as_ref() {
                "px" => Unit::Px,
                "rem" => Unit::Rem,
                other => Unit::Other(other.to_string()),
            },
        },
        Ok(Token::Percentage { unit_value, .. }) => Scalar {
            value: unit_value * 100.0,
            unit: Unit::Other("%".to_string()),
        },
        _ => Scalar {
            value: f32::NAN,
            unit: Unit::Other(text.clone()),
        },
    }
}

/// Convert a raw value to pixels.
///
/// Unitless and `px` values pass through as-is; `rem` multiplies by the
/// root font size. Any other unit fails with
/// [`Error::UnsupportedUnit`] naming the offending property.
///
/// # Example
///
/// ```
/// use capline::types::{ScaleValue, to_pixels};
///
/// assert_eq!(to_pixels("font_size", &ScaleValue::from("1rem"), 16.0), Ok(16.0));
/// assert_eq!(to_pixels("font_size", &ScaleValue::from("20px"), 16.0), Ok(20.0));
/// assert!(to_pixels("font_size", &ScaleValue::from("2em"), 16.0).is_err());
/// ```
pub fn to_pixels(property: &str, raw: &ScaleValue, root_font_size: f32) -> Result<f32> {
    let scalar = parse_scalar(raw);
    match scalar.unit {
        Unit::None | Unit::Px => Ok(scalar.value),
        Unit::Rem => Ok(scalar.value * root_font_size),
        Unit::Other(_) => Err(Error::unsupported_unit(property, raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_numbers() {
        let scalar = parse_scalar(&ScaleValue::Number(14.0));
        assert_eq!(scalar.value, 14.0);
        assert_eq!(scalar.unit, Unit::None);

        let scalar = parse_scalar(&ScaleValue::from("1.5"));
        assert_eq!(scalar.value, 1.5);
        assert_eq!(scalar.unit, Unit::None);
    }

    #[test]
    fn parses_units() {
        assert_eq!(parse_scalar(&ScaleValue::from("20px")).unit, Unit::Px);
        assert_eq!(parse_scalar(&ScaleValue::from("1.5rem")).unit, Unit::Rem);
        assert_eq!(
            parse_scalar(&ScaleValue::from("2em")).unit,
            Unit::Other("em".to_string())
        );
    }

    #[test]
    fn non_numeric_input_is_an_unknown_unit() {
        let scalar = parse_scalar(&ScaleValue::from("auto"));
        assert!(scalar.value.is_nan());
        assert_eq!(scalar.unit, Unit::Other("auto".to_string()));
    }

    #[test]
    fn converts_to_pixels() {
        assert_eq!(to_pixels("x", &ScaleValue::from("1rem"), 16.0), Ok(16.0));
        assert_eq!(to_pixels("x", &ScaleValue::from("20px"), 16.0), Ok(20.0));
        assert_eq!(to_pixels("x", &ScaleValue::from("1.5"), 16.0), Ok(1.5));
        assert_eq!(to_pixels("x", &ScaleValue::Number(12.0), 16.0), Ok(12.0));
    }

    #[test]
    fn rejects_unsupported_units() {
        let err = to_pixels("line_gap", &ScaleValue::from("2em"), 16.0).unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedUnit {
                property: "line_gap".to_string(),
                value: "2em".to_string(),
            }
        );
    }
}
