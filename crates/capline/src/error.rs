//! Error types for the styling engine.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving text styles.
///
/// All of these are configuration errors: the engine never retries and
/// never substitutes a partial result beyond the documented fallback
/// chains.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A scalar carries a unit outside the supported set.
    #[error("unable to handle '{property}' value: got {value:?}, expected a px, rem, or unitless value")]
    UnsupportedUnit { property: String, value: String },

    /// A responsive value has no usable `base` entry.
    #[error("'{property}' must specify a '{base}' value when used responsively")]
    MissingBaseValue { property: String, base: String },

    /// No family in a font-family list has registered metrics.
    #[error("no font metrics registered for any family in {family:?}")]
    UnknownFontFamily { family: String },

    /// Neither a cap height nor a font size was provided.
    #[error("one of 'cap_height' or 'font_size' must be set")]
    MissingSizeSpecification,
}

impl Error {
    /// Create an unsupported-unit error.
    pub fn unsupported_unit(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnsupportedUnit {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Create a missing-base error.
    pub fn missing_base(property: impl Into<String>, base: impl Into<String>) -> Self {
        Self::MissingBaseValue {
            property: property.into(),
            base: base.into(),
        }
    }

    /// Create an unknown-font-family error.
    pub fn unknown_font_family(family: impl Into<String>) -> Self {
        Self::UnknownFontFamily {
            family: family.into(),
        }
    }
}
