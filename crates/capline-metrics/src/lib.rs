//! Font-metrics math for cap-height based text sizing.
//!
//! Given the vertical metrics of a font face and a sizing target (a
//! desired cap height or a literal font size, plus an optional line
//! metric), this crate computes the font size, line height, and the
//! pseudo-element margin offsets that trim the font's built-in leading
//! so the visual box matches the glyphs exactly.
//!
//! The computation is a pure, deterministic function of its inputs and
//! performs no I/O.
//!
//! # Example
//!
//! ```
//! use capline_metrics::{FontMetrics, FontSizeSpec, LineSpec, SizingOptions, create_style_object};
//!
//! let metrics = FontMetrics {
//!     units_per_em: 1000.0,
//!     cap_height: 700.0,
//!     ascent: 800.0,
//!     descent: -200.0,
//!     line_gap: 0.0,
//! };
//!
//! let style = create_style_object(&SizingOptions {
//!     font_metrics: metrics,
//!     size: FontSizeSpec::FontSize(20.0),
//!     line: Some(LineSpec::LineGap(10.0)),
//! });
//!
//! assert_eq!(style.font_size, "20px");
//! assert_eq!(style.line_height, "24px");
//! ```

mod metrics;
mod style_object;

pub use metrics::FontMetrics;
pub use style_object::{
    FontSizeSpec, LineSpec, PrecomputedValues, PseudoTrim, SizingOptions, StyleObject,
    create_style_object, precompute_values,
};
