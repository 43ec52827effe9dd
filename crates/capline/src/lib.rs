//! Responsive cap-height typography engine for themed UIs.
//!
//! Given a theme (ordered breakpoints, token scales, per-family font
//! metrics) and a set of text properties (a cap height or font size,
//! plus an optional line metric), this crate computes the font-size,
//! line-height, and baseline-trim pseudo-element styles for every
//! breakpoint, and collapses the result down to a minimal
//! breakpoint-keyed style object ready to merge into an element's
//! style.
//!
//! Property values may be plain scalars, arrays aligned to the
//! breakpoint order, or maps keyed by breakpoint name; they may carry
//! `px`/`rem` units and may name tokens from the theme's scales. A
//! breakpoint with no explicit value inherits the nearest lower one.
//!
//! The engine is a pure synchronous computation: no I/O, no shared
//! mutable state, and a fresh result per call.
//!
//! # Example
//!
//! ```
//! use capline::prelude::*;
//!
//! let theme = Theme::new()
//!     .with_breakpoints(Breakpoints::new(["base", "sm", "md"]))
//!     .with_font_metrics("Roboto", FontMetrics {
//!         units_per_em: 2048.0,
//!         cap_height: 1456.0,
//!         ascent: 1900.0,
//!         descent: -500.0,
//!         line_gap: 0.0,
//!     });
//!
//! let engine = TextStyleEngine::new(theme);
//! let styles = engine.compute(&TextProps::new("Roboto").cap_height(24.0))?;
//!
//! assert_eq!(styles.value("fontSize").unwrap().as_single(), Some("33.7582px"));
//! assert!(styles.nested("::before").is_some());
//! # Ok::<(), capline::Error>(())
//! ```

pub mod resolve;
pub mod responsive;
pub mod style;
pub mod theme;
pub mod types;

mod error;

pub use error::{Error, Result};

/// The font-metrics math this engine drives per breakpoint.
pub use capline_metrics as metrics;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::resolve::{SizingConfig, TextProps, TextStyleEngine, fill_forward_configs};
    pub use crate::responsive::{Collapsed, Responsive, collapse, expand, fill_forward, resolve_at};
    pub use crate::style::{ResponsiveStyle, StyleEntry, StyleResult};
    pub use crate::theme::{Breakpoints, Scale, Theme};
    pub use crate::types::{ScaleValue, Scalar, Unit, parse_scalar, to_pixels};
    pub use crate::{Error, Result};
    pub use capline_metrics::{
        FontMetrics, FontSizeSpec, LineSpec, SizingOptions, StyleObject, create_style_object,
    };
}
