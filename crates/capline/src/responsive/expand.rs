//! Expansion of responsive inputs into canonical breakpoint maps.

use crate::theme::Breakpoints;
use std::collections::{BTreeMap, HashMap};

/// A possibly-responsive property value.
///
/// `None` entries in the array and map shapes are explicit nulls: "no
/// override here, inherit the nearest lower breakpoint". An absent map
/// key (or an array shorter than the breakpoint order) means the same
/// thing for inheritance but is not carried through expansion.
#[derive(Debug, Clone, PartialEq)]
pub enum Responsive<T> {
    /// A single value, applied at the base breakpoint.
    Value(T),
    /// Values positionally aligned to the breakpoint order.
    Array(Vec<Option<T>>),
    /// Values keyed by breakpoint name.
    Map(HashMap<String, Option<T>>),
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Responsive::Value(value)
    }
}

impl<T> Responsive<T> {
    /// Build the map shape from `(breakpoint, value)` pairs.
    pub fn map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<T>)>,
        K: Into<String>,
    {
        Responsive::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Canonical expanded shape: breakpoint index to value, in breakpoint
/// order, covering only explicitly supplied breakpoints. A `None`
/// value is an explicit null.
pub type Expanded<T> = BTreeMap<usize, Option<T>>;

/// Normalize a responsive input against the breakpoint order.
///
/// A plain value lands at the base index; array entries map
/// positionally (extra entries beyond the order are dropped); map keys
/// that name no known breakpoint are dropped.
pub fn expand<T: Clone>(breakpoints: &Breakpoints, value: &Responsive<T>) -> Expanded<T> {
    match value {
        Responsive::Value(v) => BTreeMap::from([(0, Some(v.clone()))]),
        Responsive::Array(values) => values
            .iter()
            .take(breakpoints.len())
            .enumerate()
            .map(|(index, v)| (index, v.clone()))
            .collect(),
        Responsive::Map(entries) => entries
            .iter()
            .filter_map(|(key, v)| breakpoints.index_of(key).map(|index| (index, v.clone())))
            .collect(),
    }
}

/// Resolve the value in effect at `breakpoint` by scanning backward to
/// the first explicit, non-null entry. Returns `None` when nothing up
/// to and including the base is set.
pub fn resolve_at<T>(expanded: &Expanded<T>, breakpoint: usize) -> Option<&T> {
    expanded
        .range(..=breakpoint)
        .rev()
        .find_map(|(_, value)| value.as_ref())
}

/// Fill every breakpoint of the order with its resolved value,
/// producing a complete map. Null entries inherit, never override.
///
/// Breakpoints below the first explicit value stay unpopulated.
pub fn fill_forward<T: Clone>(
    breakpoints: &Breakpoints,
    sparse: &Expanded<T>,
) -> BTreeMap<usize, T> {
    (0..breakpoints.len())
        .filter_map(|index| resolve_at(sparse, index).map(|value| (index, value.clone())))
        .collect()
}
