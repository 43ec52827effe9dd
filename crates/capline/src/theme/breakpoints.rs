//! Ordered breakpoint keys.

/// The ordered set of breakpoint names a theme defines.
///
/// The first key is the base (mobile-first) tier; a breakpoint with no
/// explicit value inherits from the nearest preceding one. The order is
/// fixed when the theme is built and never changes at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints {
    keys: Vec<String>,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new(["base", "sm", "md", "lg", "xl", "2xl"])
    }
}

impl Breakpoints {
    /// Create a breakpoint order from its keys, base tier first.
    ///
    /// # Panics
    ///
    /// Panics if `keys` is empty; a theme always has at least the base
    /// tier.
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        assert!(!keys.is_empty(), "breakpoint order must not be empty");
        Self { keys }
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the order is empty (never true for a constructed value).
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Name of the base tier.
    pub fn base(&self) -> &str {
        &self.keys[0]
    }

    /// Name of the breakpoint at `index`.
    pub fn key(&self, index: usize) -> &str {
        &self.keys[index]
    }

    /// Position of `key` in the order.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// Iterate the keys in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_order() {
        let bps = Breakpoints::default();
        assert_eq!(bps.base(), "base");
        assert_eq!(bps.len(), 6);
        assert_eq!(bps.index_of("md"), Some(2));
        assert_eq!(bps.index_of("huge"), None);
    }

    #[test]
    fn custom_order() {
        let bps = Breakpoints::new(["base", "wide"]);
        assert_eq!(bps.key(1), "wide");
        assert_eq!(bps.iter().collect::<Vec<_>>(), vec!["base", "wide"]);
    }
}
