//! Style-object computation from font metrics and a sizing target.

use crate::metrics::FontMetrics;

/// How the text is sized: by the rendered cap height or by a literal
/// font size. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontSizeSpec {
    /// Desired height of capital letters, in pixels.
    CapHeight(f32),
    /// Literal CSS font size, in pixels.
    FontSize(f32),
}

/// How the line box is sized: by the gap inserted between cap heights
/// of consecutive lines, or by the total line height (leading).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineSpec {
    /// Gap between the baseline-trimmed text blocks of adjacent lines,
    /// in pixels.
    LineGap(f32),
    /// Total line height, in pixels.
    Leading(f32),
}

/// Input to the style-object computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingOptions {
    /// Metrics of the font face being sized.
    pub font_metrics: FontMetrics,
    /// The size target.
    pub size: FontSizeSpec,
    /// The line metric. `None` leaves the line height at `normal`.
    pub line: Option<LineSpec>,
}

/// Raw numeric results, before rendering into CSS strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecomputedValues {
    /// Computed font size in pixels.
    pub font_size: f32,
    /// Computed line height in pixels, or `None` for `normal`.
    pub line_height: Option<f32>,
    /// `margin-bottom` for a `::before` pseudo element, in ems.
    /// Removes the space between the top of the line box and the caps.
    pub cap_height_trim_em: f32,
    /// `margin-top` for an `::after` pseudo element, in ems.
    /// Removes the space between the baseline and the line box bottom.
    pub baseline_trim_em: f32,
}

/// A trim pseudo-element: an empty display-table element whose margin
/// collapses the font's built-in leading on one side of the text.
#[derive(Debug, Clone, PartialEq)]
pub struct PseudoTrim {
    /// CSS `content` value (always the empty string literal).
    pub content: String,
    /// The margin offset, e.g. `"-0.2em"`. Applies as `margin-bottom`
    /// on the leading trim and `margin-top` on the trailing trim.
    pub margin: String,
    /// CSS `display` value (always `table`).
    pub display: String,
}

impl PseudoTrim {
    fn new(margin_em: f32) -> Self {
        Self {
            content: "''".to_string(),
            margin: format!("{}em", round(margin_em)),
            display: "table".to_string(),
        }
    }
}

/// The rendered style object: font size, line height, and the two
/// baseline-trim pseudo elements.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleObject {
    /// CSS font size, e.g. `"33.7582px"`.
    pub font_size: String,
    /// CSS line height, e.g. `"24px"`, or `"normal"`.
    pub line_height: String,
    /// Leading trim (`::before`, margin applies to `margin-bottom`).
    pub before: PseudoTrim,
    /// Trailing trim (`::after`, margin applies to `margin-top`).
    pub after: PseudoTrim,
}

/// Compute the numeric sizing values for the given options.
pub fn precompute_values(options: &SizingOptions) -> PrecomputedValues {
    let m = &options.font_metrics;
    let cap_height_scale = m.cap_height_scale();

    let (font_size, cap_height_px) = match options.size {
        FontSizeSpec::CapHeight(cap) => (cap / cap_height_scale, cap),
        FontSizeSpec::FontSize(size) => (size, size * cap_height_scale),
    };

    let line_height = options.line.map(|line| match line {
        LineSpec::LineGap(gap) => cap_height_px + gap,
        LineSpec::Leading(leading) => leading,
    });

    let absolute_descent = m.descent.abs();
    let ascent_scale = m.ascent / m.units_per_em;
    let descent_scale = absolute_descent / m.units_per_em;
    let line_gap_scale = m.line_gap / m.units_per_em;

    // The height the line box would have at `line-height: normal`.
    let content_area = m.ascent + m.line_gap + absolute_descent;
    let line_height_normal = content_area / m.units_per_em * font_size;

    // A specified line height redistributes the difference from normal
    // evenly above and below the content area.
    let offset = match line_height {
        Some(height) => (line_height_normal - height) / 2.0,
        None => 0.0,
    };
    let leading_trim = |value: f32| value - offset / font_size;

    PrecomputedValues {
        font_size,
        line_height,
        cap_height_trim_em: -leading_trim(ascent_scale - cap_height_scale + line_gap_scale / 2.0),
        baseline_trim_em: -leading_trim(descent_scale + line_gap_scale / 2.0),
    }
}

/// Compute the full style object for the given options.
pub fn create_style_object(options: &SizingOptions) -> StyleObject {
    let values = precompute_values(options);

    StyleObject {
        font_size: format!("{}px", round(values.font_size)),
        line_height: match values.line_height {
            Some(height) => format!("{}px", round(height)),
            None => "normal".to_string(),
        },
        before: PseudoTrim::new(values.cap_height_trim_em),
        after: PseudoTrim::new(values.baseline_trim_em),
    }
}

/// Round to four decimal places, normalizing negative zero.
fn round(value: f32) -> f32 {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}
