//! Per-breakpoint sizing configuration.

use capline_metrics::{FontMetrics, FontSizeSpec, LineSpec};
use std::collections::BTreeMap;

/// The sizing inputs gathered for one breakpoint, before gap filling.
///
/// At most one of `cap_height`/`font_size` and at most one of
/// `line_gap`/`leading` ends up set by the selection chains; cap
/// height wins over font size and line gap over leading if both are
/// somehow present. Built fresh per resolution pass, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingConfig {
    /// Metrics of the font family in effect at this breakpoint.
    pub font_metrics: FontMetrics,
    /// Desired cap height in pixels.
    pub cap_height: Option<f32>,
    /// Literal font size in pixels.
    pub font_size: Option<f32>,
    /// Line gap in pixels.
    pub line_gap: Option<f32>,
    /// Total line height in pixels.
    pub leading: Option<f32>,
}

impl SizingConfig {
    /// Start a configuration holding only the font metrics.
    pub fn new(font_metrics: FontMetrics) -> Self {
        Self {
            font_metrics,
            cap_height: None,
            font_size: None,
            line_gap: None,
            leading: None,
        }
    }

    /// Merge the previous breakpoint's resolved fields under this
    /// breakpoint's explicit ones, field by field.
    fn inherit_from(&self, prev: &SizingConfig) -> SizingConfig {
        SizingConfig {
            font_metrics: self.font_metrics,
            cap_height: self.cap_height.or(prev.cap_height),
            font_size: self.font_size.or(prev.font_size),
            line_gap: self.line_gap.or(prev.line_gap),
            leading: self.leading.or(prev.leading),
        }
    }

    /// The sizing pair this configuration selects, cap height first.
    pub fn size_spec(&self) -> Option<FontSizeSpec> {
        self.cap_height
            .map(FontSizeSpec::CapHeight)
            .or(self.font_size.map(FontSizeSpec::FontSize))
    }

    /// The line metric this configuration selects, line gap first.
    pub fn line_spec(&self) -> Option<LineSpec> {
        self.line_gap
            .map(LineSpec::LineGap)
            .or(self.leading.map(LineSpec::Leading))
    }
}

/// Fill gaps across a per-breakpoint configuration map: each
/// breakpoint in ascending order inherits the previous breakpoint's
/// resolved fields underneath its own explicit ones.
///
/// Idempotent: filling an already-complete map changes nothing.
pub fn fill_forward_configs(
    configs: &BTreeMap<usize, SizingConfig>,
) -> BTreeMap<usize, SizingConfig> {
    let mut filled = BTreeMap::new();
    let mut prev: Option<SizingConfig> = None;

    for (&index, config) in configs {
        let merged = match &prev {
            Some(prev) => config.inherit_from(prev),
            None => config.clone(),
        };
        filled.insert(index, merged.clone());
        prev = Some(merged);
    }

    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> FontMetrics {
        FontMetrics {
            units_per_em: 1000.0,
            cap_height: 700.0,
            ascent: 800.0,
            descent: -200.0,
            line_gap: 0.0,
        }
    }

    fn config(cap_height: Option<f32>, line_gap: Option<f32>) -> SizingConfig {
        SizingConfig {
            cap_height,
            line_gap,
            ..SizingConfig::new(metrics())
        }
    }

    #[test]
    fn explicit_fields_override_inherited_ones() {
        let configs = BTreeMap::from([
            (0, config(Some(12.0), Some(10.0))),
            (1, config(Some(12.0), None)),
            (2, config(Some(22.0), Some(14.0))),
        ]);

        let filled = fill_forward_configs(&configs);

        assert_eq!(filled[&1].cap_height, Some(12.0));
        assert_eq!(filled[&1].line_gap, Some(10.0));
        assert_eq!(filled[&2].cap_height, Some(22.0));
        assert_eq!(filled[&2].line_gap, Some(14.0));
    }

    #[test]
    fn fill_forward_is_idempotent() {
        let configs = BTreeMap::from([
            (0, config(Some(12.0), Some(10.0))),
            (2, config(None, Some(14.0))),
        ]);

        let once = fill_forward_configs(&configs);
        let twice = fill_forward_configs(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn selection_precedence() {
        let mut both = config(Some(12.0), Some(10.0));
        both.font_size = Some(16.0);
        both.leading = Some(18.0);

        assert_eq!(both.size_spec(), Some(FontSizeSpec::CapHeight(12.0)));
        assert_eq!(both.line_spec(), Some(LineSpec::LineGap(10.0)));

        let neither = SizingConfig::new(metrics());
        assert_eq!(neither.size_spec(), None);
        assert_eq!(neither.line_spec(), None);
    }
}
