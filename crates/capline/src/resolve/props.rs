//! Text style properties accepted by the engine.

use crate::responsive::Responsive;
use crate::types::ScaleValue;

/// The typography-related properties of a text element.
///
/// Every field accepts a responsive value and may name a token from
/// the corresponding theme scale. The sizing inputs follow two
/// priority chains, each evaluated once per resolution pass:
/// `cap_height` beats `font_size`, and `line_gap` beats `leading`
/// beats `line_height` (with a zero line gap as the final default).
///
/// # Example
///
/// ```
/// use capline::resolve::TextProps;
/// use capline::responsive::Responsive;
///
/// let props = TextProps::new("Roboto, sans-serif")
///     .cap_height(Responsive::map([("base", Some(16.0.into())), ("md", Some(24.0.into()))]))
///     .line_gap(12.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextProps {
    /// Comma-separated font family list, or a `fonts` token.
    pub font_family: Responsive<ScaleValue>,
    /// Desired cap height (`cap_heights` tokens).
    pub cap_height: Option<Responsive<ScaleValue>>,
    /// Literal font size (`font_sizes` tokens).
    pub font_size: Option<Responsive<ScaleValue>>,
    /// Gap between lines (`space` tokens).
    pub line_gap: Option<Responsive<ScaleValue>>,
    /// Total line height (`sizes` tokens).
    pub leading: Option<Responsive<ScaleValue>>,
    /// CSS-style line height (`line_heights` tokens); converted into
    /// an equivalent leading.
    pub line_height: Option<Responsive<ScaleValue>>,
}

impl TextProps {
    /// Create properties for the given font family.
    pub fn new(font_family: impl Into<Responsive<ScaleValue>>) -> Self {
        Self {
            font_family: font_family.into(),
            cap_height: None,
            font_size: None,
            line_gap: None,
            leading: None,
            line_height: None,
        }
    }

    /// Set the desired cap height.
    pub fn cap_height(mut self, value: impl Into<Responsive<ScaleValue>>) -> Self {
        self.cap_height = Some(value.into());
        self
    }

    /// Set the literal font size.
    pub fn font_size(mut self, value: impl Into<Responsive<ScaleValue>>) -> Self {
        self.font_size = Some(value.into());
        self
    }

    /// Set the line gap.
    pub fn line_gap(mut self, value: impl Into<Responsive<ScaleValue>>) -> Self {
        self.line_gap = Some(value.into());
        self
    }

    /// Set the leading.
    pub fn leading(mut self, value: impl Into<Responsive<ScaleValue>>) -> Self {
        self.leading = Some(value.into());
        self
    }

    /// Set the CSS-style line height.
    pub fn line_height(mut self, value: impl Into<Responsive<ScaleValue>>) -> Self {
        self.line_height = Some(value.into());
        self
    }
}

impl From<f32> for Responsive<ScaleValue> {
    fn from(value: f32) -> Self {
        Responsive::Value(ScaleValue::Number(value))
    }
}

impl From<f64> for Responsive<ScaleValue> {
    fn from(value: f64) -> Self {
        Responsive::Value(ScaleValue::Number(value as f32))
    }
}

impl From<i32> for Responsive<ScaleValue> {
    fn from(value: i32) -> Self {
        Responsive::Value(ScaleValue::Number(value as f32))
    }
}

impl From<&str> for Responsive<ScaleValue> {
    fn from(value: &str) -> Self {
        Responsive::Value(ScaleValue::Text(value.to_string()))
    }
}

impl From<String> for Responsive<ScaleValue> {
    fn from(value: String) -> Self {
        Responsive::Value(ScaleValue::Text(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let props = TextProps::new("Roboto").cap_height(24.0).line_gap("12px");

        assert_eq!(
            props.font_family,
            Responsive::Value(ScaleValue::Text("Roboto".to_string()))
        );
        assert_eq!(
            props.cap_height,
            Some(Responsive::Value(ScaleValue::Number(24.0)))
        );
        assert_eq!(
            props.line_gap,
            Some(Responsive::Value(ScaleValue::Text("12px".to_string())))
        );
        assert!(props.font_size.is_none());
    }
}
