//! Named token scales.

use crate::types::ScaleValue;
use std::collections::HashMap;

/// A named design-system scale: a map from token name to scalar value.
///
/// Tokens resolve at style-computation time; an input that names no
/// token passes through as a concrete value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scale {
    entries: HashMap<String, ScaleValue>,
}

impl Scale {
    /// Create an empty scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a token.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ScaleValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Get a token's value, if defined.
    pub fn get(&self, name: &str) -> Option<&ScaleValue> {
        self.entries.get(name)
    }

    /// Resolve `key` against the scale, falling back to the raw value.
    ///
    /// # Example
    ///
    /// ```
    /// use capline::theme::Scale;
    /// use capline::types::ScaleValue;
    ///
    /// let scale: Scale = [("lg", ScaleValue::Number(18.0))].into_iter().collect();
    /// let raw = ScaleValue::from("20px");
    ///
    /// assert_eq!(scale.resolve_token("lg", &raw), &ScaleValue::Number(18.0));
    /// assert_eq!(scale.resolve_token("xl", &raw), &raw);
    /// ```
    pub fn resolve_token<'a>(&'a self, key: &str, fallback: &'a ScaleValue) -> &'a ScaleValue {
        self.entries.get(key).unwrap_or(fallback)
    }

    /// Whether the scale has no tokens.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<ScaleValue>> FromIterator<(K, V)> for Scale {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
