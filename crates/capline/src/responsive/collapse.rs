//! Collapsing complete breakpoint maps down to change points.

use super::expand::Expanded;
use std::collections::BTreeMap;

/// Result of a collapse: either a minimal breakpoint map or, when only
/// the base survives and scalar collapsing was requested, the bare
/// value itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Collapsed<T> {
    /// A single value, equivalent at every breakpoint.
    Single(T),
    /// Change points only, keyed by breakpoint index.
    Map(BTreeMap<usize, T>),
}

impl<T> Collapsed<T> {
    /// The bare value, when collapsed to one.
    pub fn as_single(&self) -> Option<&T> {
        match self {
            Collapsed::Single(value) => Some(value),
            Collapsed::Map(_) => None,
        }
    }

    /// View as a map, treating a single value as a base-only entry.
    pub fn into_map(self) -> BTreeMap<usize, T> {
        match self {
            Collapsed::Single(value) => BTreeMap::from([(0, value)]),
            Collapsed::Map(map) => map,
        }
    }
}

/// Remove entries equal to the value already in effect, leaving only
/// change points.
///
/// The first explicit non-null entry (normally the base) is always
/// kept; each later entry survives only if it differs from the last
/// kept value. Null entries are "no override" and are skipped, never
/// kept or compared. With `collapse_base` set, a result holding only
/// the base entry becomes [`Collapsed::Single`].
///
/// # Example
///
/// ```
/// use capline::responsive::{Collapsed, Expanded, collapse};
/// use std::collections::BTreeMap;
///
/// let complete: Expanded<i32> =
///     BTreeMap::from([(0, Some(10)), (1, Some(10)), (2, Some(15))]);
///
/// assert_eq!(
///     collapse(&complete, false),
///     Collapsed::Map(BTreeMap::from([(0, 10), (2, 15)]))
/// );
/// ```
pub fn collapse<T: Clone + PartialEq>(values: &Expanded<T>, collapse_base: bool) -> Collapsed<T> {
    let mut kept: BTreeMap<usize, T> = BTreeMap::new();
    let mut last: Option<&T> = None;

    for (&index, value) in values {
        let Some(value) = value else {
            continue;
        };
        if last != Some(value) {
            kept.insert(index, value.clone());
            last = Some(value);
        }
    }

    if collapse_base && kept.len() == 1 {
        if let Some(value) = kept.remove(&0) {
            return Collapsed::Single(value);
        }
    }

    Collapsed::Map(kept)
}
