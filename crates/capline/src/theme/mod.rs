//! Theme: breakpoint order, token scales, and font metrics.

mod breakpoints;
mod scale;

pub use breakpoints::Breakpoints;
pub use scale::Scale;

use capline_metrics::FontMetrics;
use std::collections::HashMap;

/// The theme a text-style computation resolves against.
///
/// Holds the ordered breakpoint keys, the named token scales each text
/// property detokenizes through, the root font size used for `rem`
/// conversion, and the per-family font metrics table.
///
/// # Example
///
/// ```
/// use capline::theme::{Breakpoints, Scale, Theme};
/// use capline::metrics::FontMetrics;
///
/// let theme = Theme::new()
///     .with_breakpoints(Breakpoints::new(["base", "sm", "md"]))
///     .with_cap_heights([("body", 12.0), ("heading", 24.0)].into_iter().collect::<Scale>())
///     .with_font_metrics("Roboto", FontMetrics {
///         units_per_em: 2048.0,
///         cap_height: 1456.0,
///         ascent: 1900.0,
///         descent: -500.0,
///         line_gap: 0.0,
///     });
///
/// assert!(theme.font_metrics("Roboto").is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Ordered breakpoint keys, base first.
    pub breakpoints: Breakpoints,
    /// Root font size in pixels, used to resolve `rem` values.
    pub root_font_size: f32,
    /// Font-family tokens.
    pub fonts: Scale,
    /// Cap-height tokens.
    pub cap_heights: Scale,
    /// Font-size tokens.
    pub font_sizes: Scale,
    /// Spacing tokens (used by `line_gap`).
    pub space: Scale,
    /// Size tokens (used by `leading`).
    pub sizes: Scale,
    /// Line-height tokens.
    pub line_heights: Scale,
    font_metrics: HashMap<String, FontMetrics>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            root_font_size: 16.0,
            fonts: Scale::new(),
            cap_heights: Scale::new(),
            font_sizes: Scale::new(),
            space: Scale::new(),
            sizes: Scale::new(),
            line_heights: Scale::new(),
            font_metrics: HashMap::new(),
        }
    }
}

impl Theme {
    /// Create a theme with the default breakpoint order and a 16px
    /// root font size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the breakpoint order.
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Set the root font size in pixels.
    pub fn with_root_font_size(mut self, px: f32) -> Self {
        self.root_font_size = px;
        self
    }

    /// Replace the font-family token scale.
    pub fn with_fonts(mut self, scale: Scale) -> Self {
        self.fonts = scale;
        self
    }

    /// Replace the cap-height token scale.
    pub fn with_cap_heights(mut self, scale: Scale) -> Self {
        self.cap_heights = scale;
        self
    }

    /// Replace the font-size token scale.
    pub fn with_font_sizes(mut self, scale: Scale) -> Self {
        self.font_sizes = scale;
        self
    }

    /// Replace the spacing token scale.
    pub fn with_space(mut self, scale: Scale) -> Self {
        self.space = scale;
        self
    }

    /// Replace the size token scale.
    pub fn with_sizes(mut self, scale: Scale) -> Self {
        self.sizes = scale;
        self
    }

    /// Replace the line-height token scale.
    pub fn with_line_heights(mut self, scale: Scale) -> Self {
        self.line_heights = scale;
        self
    }

    /// Register font metrics for a family name.
    pub fn with_font_metrics(mut self, family: impl Into<String>, metrics: FontMetrics) -> Self {
        self.font_metrics.insert(family.into(), metrics);
        self
    }

    /// Metrics for a registered family, if any.
    pub fn font_metrics(&self, family: &str) -> Option<&FontMetrics> {
        self.font_metrics.get(family)
    }
}
