//! Per-family font metrics.

/// Vertical metrics for a single font face, in font design units.
///
/// These are the values found in a font's `head`/`hhea`/`OS/2` tables
/// (or published alongside the font). `descent` is negative, as in the
/// font tables themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Size of the font's design grid (commonly 1000 or 2048).
    pub units_per_em: f32,
    /// Height of a flat capital letter above the baseline.
    pub cap_height: f32,
    /// Maximum height above the baseline.
    pub ascent: f32,
    /// Maximum depth below the baseline (negative).
    pub descent: f32,
    /// Extra spacing the font requests between lines.
    pub line_gap: f32,
}

impl FontMetrics {
    /// Fraction of the em square occupied by the cap height.
    pub fn cap_height_scale(&self) -> f32 {
        self.cap_height / self.units_per_em
    }

    /// The font size at which capital letters render `cap_height_px`
    /// pixels tall.
    ///
    /// # Example
    ///
    /// ```
    /// use capline_metrics::FontMetrics;
    ///
    /// let metrics = FontMetrics {
    ///     units_per_em: 1000.0,
    ///     cap_height: 700.0,
    ///     ascent: 800.0,
    ///     descent: -200.0,
    ///     line_gap: 0.0,
    /// };
    /// assert_eq!(metrics.font_size_for_cap_height(35.0), 50.0);
    /// ```
    pub fn font_size_for_cap_height(&self, cap_height_px: f32) -> f32 {
        cap_height_px / self.cap_height_scale()
    }
}
