//! Collapsed style values keyed by property name.

use std::collections::BTreeMap;

/// A fully collapsed style value: a bare scalar when the value never
/// changes across breakpoints, otherwise a minimal breakpoint-keyed
/// map in breakpoint order.
///
/// This is the responsive-object shape the host framework's theme
/// conventions understand.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsiveStyle {
    /// One value for all breakpoints.
    Single(String),
    /// `(breakpoint name, value)` change points, in breakpoint order.
    PerBreakpoint(Vec<(String, String)>),
}

impl ResponsiveStyle {
    /// The bare value, when not responsive.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            ResponsiveStyle::Single(value) => Some(value),
            ResponsiveStyle::PerBreakpoint(_) => None,
        }
    }

    /// The value at a named breakpoint, when responsive.
    pub fn at(&self, breakpoint: &str) -> Option<&str> {
        match self {
            ResponsiveStyle::Single(_) => None,
            ResponsiveStyle::PerBreakpoint(entries) => entries
                .iter()
                .find(|(key, _)| key == breakpoint)
                .map(|(_, value)| value.as_str()),
        }
    }
}

/// One entry of a [`StyleResult`].
#[derive(Debug, Clone, PartialEq)]
pub enum StyleEntry {
    /// A directly applied property, e.g. `fontSize`.
    Value(ResponsiveStyle),
    /// A pseudo-selector block, e.g. `::before`, with its own
    /// per-property responsive values.
    Nested(BTreeMap<String, ResponsiveStyle>),
}

/// The computed style object: property name to collapsed value,
/// produced once per resolution pass and merged into an element's
/// style by the rendering layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleResult {
    entries: BTreeMap<String, StyleEntry>,
}

impl StyleResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property entry.
    pub fn insert(&mut self, property: impl Into<String>, entry: StyleEntry) {
        self.entries.insert(property.into(), entry);
    }

    /// Look up a property entry.
    pub fn get(&self, property: &str) -> Option<&StyleEntry> {
        self.entries.get(property)
    }

    /// A directly applied property's value, if present.
    pub fn value(&self, property: &str) -> Option<&ResponsiveStyle> {
        match self.entries.get(property) {
            Some(StyleEntry::Value(style)) => Some(style),
            _ => None,
        }
    }

    /// A pseudo-selector block, if present.
    pub fn nested(&self, selector: &str) -> Option<&BTreeMap<String, ResponsiveStyle>> {
        match self.entries.get(selector) {
            Some(StyleEntry::Nested(block)) => Some(block),
            _ => None,
        }
    }

    /// Iterate all `(property, entry)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the result is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_helpers() {
        let mut result = StyleResult::new();
        result.insert(
            "fontSize",
            StyleEntry::Value(ResponsiveStyle::PerBreakpoint(vec![
                ("base".to_string(), "10px".to_string()),
                ("md".to_string(), "15px".to_string()),
            ])),
        );

        let font_size = result.value("fontSize").unwrap();
        assert_eq!(font_size.at("md"), Some("15px"));
        assert_eq!(font_size.at("sm"), None);
        assert!(result.nested("fontSize").is_none());
    }
}
