//! Responsive value expansion and collapsing.
//!
//! A text property may be given as a plain scalar, an array aligned to
//! the breakpoint order, or a map keyed by breakpoint name. This module
//! normalizes all three shapes into one canonical breakpoint-indexed
//! form, resolves per-breakpoint inheritance (a breakpoint with no
//! explicit value inherits the nearest lower one), and collapses
//! complete maps back down to their change points.

mod collapse;
mod expand;

pub use collapse::{Collapsed, collapse};
pub use expand::{Expanded, Responsive, expand, fill_forward, resolve_at};
