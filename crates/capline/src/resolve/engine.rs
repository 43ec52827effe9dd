//! The text style resolution engine.

use crate::resolve::config::{SizingConfig, fill_forward_configs};
use crate::resolve::props::TextProps;
use crate::responsive::{Collapsed, Expanded, Responsive, collapse, expand, resolve_at};
use crate::style::{ResponsiveStyle, StyleEntry, StyleResult};
use crate::theme::{Scale, Theme};
use crate::types::{ScaleValue, Unit, parse_scalar, to_pixels};
use crate::{Error, Result};
use capline_metrics::{FontMetrics, SizingOptions, StyleObject, create_style_object};
use std::collections::BTreeMap;

/// Which sizing path was selected for the whole resolution pass.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SizePath {
    CapHeight,
    FontSize,
}

/// Resolves [`TextProps`] against a [`Theme`] into a collapsed,
/// breakpoint-keyed [`StyleResult`].
///
/// The engine is a pure synchronous computation: it reads the theme's
/// immutable tables, allocates a fresh result per call, and is safe to
/// share across threads.
///
/// Resolution runs in four stages, with no branching back:
///
/// 1. resolve the font family (and thus font metrics) per breakpoint;
/// 2. select the sizing pair once globally (`cap_height` beats
///    `font_size`; `line_gap` beats `leading` beats `line_height`,
///    defaulting to a zero line gap at the base);
/// 3. fill per-breakpoint gaps forward, then drop duplicate entries so
///    the metrics engine runs once per distinct configuration;
/// 4. compute the style object per retained entry, transpose into
///    per-property responsive maps, and collapse each one.
pub struct TextStyleEngine {
    theme: Theme,
}

impl TextStyleEngine {
    /// Create an engine over a theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// The theme this engine resolves against.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Compute the text styles for the given properties.
    ///
    /// Errors surface synchronously and unchanged; there is no retry
    /// and no partial result.
    pub fn compute(&self, props: &TextProps) -> Result<StyleResult> {
        let theme = &self.theme;
        let breakpoints = &theme.breakpoints;
        let root = theme.root_font_size;

        // Stage 1: font metrics per breakpoint.
        let family = expand(breakpoints, &props.font_family);
        let mut metrics = Vec::with_capacity(breakpoints.len());
        for index in 0..breakpoints.len() {
            let Some(raw) = resolve_at(&family, index) else {
                return Err(Error::missing_base("font_family", breakpoints.base()));
            };
            let concrete = match raw {
                ScaleValue::Text(key) => theme.fonts.resolve_token(key, raw),
                other => other,
            };
            let family_list = concrete.to_string();
            let found = family_list
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .find_map(|name| theme.font_metrics(name));
            match found {
                Some(m) => metrics.push(*m),
                None => {
                    tracing::debug!(family = %family_list, "no registered metrics for font family");
                    return Err(Error::unknown_font_family(family_list));
                }
            }
        }

        let mut configs: BTreeMap<usize, SizingConfig> = metrics
            .iter()
            .enumerate()
            .map(|(index, m)| (index, SizingConfig::new(*m)))
            .collect();

        // Stage 2: sizing-pair selection, evaluated once globally.
        let (size_path, size_values) = if let Some(value) = &props.cap_height {
            let values = self.responsive_values(value, "cap_height", &theme.cap_heights, |raw, _| {
                to_pixels("cap_height", raw, root)
            })?;
            (SizePath::CapHeight, values)
        } else if let Some(value) = &props.font_size {
            let values = self.responsive_values(value, "font_size", &theme.font_sizes, |raw, _| {
                to_pixels("font_size", raw, root)
            })?;
            (SizePath::FontSize, values)
        } else {
            return Err(Error::MissingSizeSpecification);
        };
        for (&index, &px) in &size_values {
            if let Some(config) = configs.get_mut(&index) {
                match size_path {
                    SizePath::CapHeight => config.cap_height = Some(px),
                    SizePath::FontSize => config.font_size = Some(px),
                }
            }
        }

        if let Some(value) = &props.line_gap {
            let gaps = self.responsive_values(value, "line_gap", &theme.space, |raw, _| {
                to_pixels("line_gap", raw, root)
            })?;
            for (&index, &px) in &gaps {
                if let Some(config) = configs.get_mut(&index) {
                    config.line_gap = Some(px);
                }
            }
        } else if let Some(value) = &props.leading {
            let leadings = self.responsive_values(value, "leading", &theme.sizes, |raw, _| {
                to_pixels("leading", raw, root)
            })?;
            for (&index, &px) in &leadings {
                if let Some(config) = configs.get_mut(&index) {
                    config.leading = Some(px);
                }
            }
        } else if let Some(value) = &props.line_height {
            let leadings =
                self.responsive_values(value, "line_height", &theme.line_heights, |raw, index| {
                    line_height_to_leading(raw, index, size_path, &size_values, &metrics, root)
                })?;
            for (&index, &px) in &leadings {
                if let Some(config) = configs.get_mut(&index) {
                    config.leading = Some(px);
                }
            }
        } else if let Some(config) = configs.get_mut(&0) {
            // No line metric given: inject a zero gap at the base only
            // and let fill-forward propagate it.
            config.line_gap = Some(0.0);
        }

        // Stage 3: fill gaps, then keep distinct entries only.
        let filled = fill_forward_configs(&configs);
        let complete: Expanded<SizingConfig> =
            filled.into_iter().map(|(i, c)| (i, Some(c))).collect();
        let retained = collapse(&complete, false).into_map();
        tracing::trace!(entries = retained.len(), "collapsed sizing configuration");

        // Stage 4: metrics engine per retained entry, then transpose.
        let mut styles = BTreeMap::new();
        for (index, config) in &retained {
            let Some(size) = config.size_spec() else {
                return Err(Error::MissingSizeSpecification);
            };
            let style = create_style_object(&SizingOptions {
                font_metrics: config.font_metrics,
                size,
                line: config.line_spec(),
            });
            styles.insert(*index, style);
        }

        Ok(self.transpose(&styles))
    }

    /// Expand, detokenize, and convert one responsive property into a
    /// breakpoint-indexed pixel map covering its explicit breakpoints.
    fn responsive_values<F>(
        &self,
        value: &Responsive<ScaleValue>,
        property: &str,
        scale: &Scale,
        mut convert: F,
    ) -> Result<BTreeMap<usize, f32>>
    where
        F: FnMut(&ScaleValue, usize) -> Result<f32>,
    {
        let breakpoints = &self.theme.breakpoints;
        let expanded = expand(breakpoints, value);
        if resolve_at(&expanded, 0).is_none() {
            return Err(Error::missing_base(property, breakpoints.base()));
        }

        let mut resolved = BTreeMap::new();
        for (&index, _) in &expanded {
            // Null entries resolve to the nearest lower value, so every
            // explicitly listed breakpoint gets a concrete number.
            let Some(raw) = resolve_at(&expanded, index) else {
                continue;
            };
            let concrete = match raw {
                ScaleValue::Text(key) => scale.resolve_token(key, raw),
                other => other,
            };
            resolved.insert(index, convert(concrete, index)?);
        }
        Ok(resolved)
    }

    /// Transpose per-breakpoint style objects into per-property
    /// responsive values and collapse each one.
    fn transpose(&self, styles: &BTreeMap<usize, StyleObject>) -> StyleResult {
        let mut result = StyleResult::new();

        result.insert(
            "fontSize",
            StyleEntry::Value(self.collapse_property(styles, |s| s.font_size.clone())),
        );
        result.insert(
            "lineHeight",
            StyleEntry::Value(self.collapse_property(styles, |s| s.line_height.clone())),
        );

        let before = BTreeMap::from([
            (
                "content".to_string(),
                self.collapse_property(styles, |s| s.before.content.clone()),
            ),
            (
                "marginBottom".to_string(),
                self.collapse_property(styles, |s| s.before.margin.clone()),
            ),
            (
                "display".to_string(),
                self.collapse_property(styles, |s| s.before.display.clone()),
            ),
        ]);
        result.insert("::before", StyleEntry::Nested(before));

        let after = BTreeMap::from([
            (
                "content".to_string(),
                self.collapse_property(styles, |s| s.after.content.clone()),
            ),
            (
                "marginTop".to_string(),
                self.collapse_property(styles, |s| s.after.margin.clone()),
            ),
            (
                "display".to_string(),
                self.collapse_property(styles, |s| s.after.display.clone()),
            ),
        ]);
        result.insert("::after", StyleEntry::Nested(after));

        result
    }

    /// Collapse one property across the retained breakpoints, folding
    /// a base-only result down to a bare scalar.
    fn collapse_property(
        &self,
        styles: &BTreeMap<usize, StyleObject>,
        select: impl Fn(&StyleObject) -> String,
    ) -> ResponsiveStyle {
        let values: Expanded<String> = styles.iter().map(|(&i, s)| (i, Some(select(s)))).collect();
        match collapse(&values, true) {
            Collapsed::Single(value) => ResponsiveStyle::Single(value),
            Collapsed::Map(map) => ResponsiveStyle::PerBreakpoint(
                map.into_iter()
                    .map(|(i, v)| (self.theme.breakpoints.key(i).to_string(), v))
                    .collect(),
            ),
        }
    }
}

/// Convert a CSS-style line height into an equivalent leading.
///
/// A unitless value multiplies the font size in effect: the
/// cap-height-derived font size when cap height drove sizing, the
/// literal font size otherwise. A `rem` value converts through the
/// root font size. Anything else (including `px`) is unsupported.
fn line_height_to_leading(
    raw: &ScaleValue,
    index: usize,
    size_path: SizePath,
    size_values: &BTreeMap<usize, f32>,
    metrics: &[FontMetrics],
    root_font_size: f32,
) -> Result<f32> {
    let scalar = parse_scalar(raw);
    match scalar.unit {
        Unit::None => {
            // Nearest size at or below this breakpoint; a base entry is
            // guaranteed by the responsive-value check.
            let reference = size_values
                .range(..=index)
                .next_back()
                .map(|(_, &px)| px)
                .unwrap_or(0.0);
            let font_size = match size_path {
                SizePath::CapHeight => metrics[index].font_size_for_cap_height(reference),
                SizePath::FontSize => reference,
            };
            Ok(scalar.value * font_size)
        }
        Unit::Rem => Ok(scalar.value * root_font_size),
        Unit::Px | Unit::Other(_) => Err(Error::unsupported_unit("line_height", raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Breakpoints;

    fn test_metrics() -> FontMetrics {
        FontMetrics {
            units_per_em: 1000.0,
            cap_height: 700.0,
            ascent: 800.0,
            descent: -200.0,
            line_gap: 0.0,
        }
    }

    fn engine() -> TextStyleEngine {
        let theme = Theme::new()
            .with_breakpoints(Breakpoints::new(["base", "sm", "md"]))
            .with_fonts([("body", "Karla, sans-serif")].into_iter().collect())
            .with_cap_heights([("heading", 24.0)].into_iter().collect())
            .with_space([("gap-md", "1rem")].into_iter().collect())
            .with_font_metrics("Karla", test_metrics())
            .with_font_metrics(
                "Roboto",
                FontMetrics {
                    units_per_em: 2048.0,
                    cap_height: 1456.0,
                    ascent: 1900.0,
                    descent: -500.0,
                    line_gap: 0.0,
                },
            );
        TextStyleEngine::new(theme)
    }

    #[test]
    fn cap_height_with_no_line_metric() {
        let engine = TextStyleEngine::new(
            Theme::new()
                .with_breakpoints(Breakpoints::new(["base", "sm"]))
                .with_font_metrics(
                    "Roboto",
                    FontMetrics {
                        units_per_em: 2048.0,
                        cap_height: 1456.0,
                        ascent: 1900.0,
                        descent: -500.0,
                        line_gap: 0.0,
                    },
                ),
        );
        let styles = engine
            .compute(&TextProps::new("Roboto").cap_height(24.0))
            .unwrap();

        // A single distinct configuration collapses every property
        // down to a bare scalar.
        assert_eq!(
            styles.value("fontSize").unwrap().as_single(),
            Some("33.7582px")
        );
        // The implicit zero line gap makes the line height exactly the
        // cap height.
        assert_eq!(
            styles.value("lineHeight").unwrap().as_single(),
            Some("24px")
        );
        let after = styles.nested("::after").unwrap();
        assert_eq!(after["content"].as_single(), Some("''"));
        assert_eq!(after["display"].as_single(), Some("table"));
        assert!(after.contains_key("marginTop"));
    }

    #[test]
    fn responsive_cap_height_produces_change_points() {
        let props = TextProps::new("Karla, sans-serif")
            .cap_height(Responsive::map([
                ("base", Some(35.0.into())),
                ("md", Some(70.0.into())),
            ]))
            .line_gap(10.0);
        let styles = engine().compute(&props).unwrap();

        let font_size = styles.value("fontSize").unwrap();
        assert_eq!(font_size.at("base"), Some("50px"));
        assert_eq!(font_size.at("md"), Some("100px"));
        assert_eq!(font_size.at("sm"), None);

        let line_height = styles.value("lineHeight").unwrap();
        assert_eq!(line_height.at("base"), Some("45px"));
        assert_eq!(line_height.at("md"), Some("80px"));
    }

    #[test]
    fn null_breakpoint_inherits() {
        let props = TextProps::new("Karla")
            .cap_height(Responsive::map([
                ("base", Some(35.0.into())),
                ("sm", None),
                ("md", Some(70.0.into())),
            ]))
            .line_gap(10.0);
        let styles = engine().compute(&props).unwrap();

        let font_size = styles.value("fontSize").unwrap();
        assert_eq!(font_size.at("base"), Some("50px"));
        // sm inherited base and was collapsed away.
        assert_eq!(font_size.at("sm"), None);
        assert_eq!(font_size.at("md"), Some("100px"));
    }

    #[test]
    fn identical_values_collapse_to_scalar() {
        let props = TextProps::new("Karla")
            .cap_height(Responsive::map([
                ("base", Some(35.0.into())),
                ("sm", Some(35.0.into())),
            ]))
            .line_gap(10.0);
        let styles = engine().compute(&props).unwrap();

        assert_eq!(styles.value("fontSize").unwrap().as_single(), Some("50px"));
    }

    #[test]
    fn tokens_resolve_through_their_scales() {
        let props = TextProps::new("body").cap_height("heading").line_gap("gap-md");
        let styles = engine().compute(&props).unwrap();

        // heading -> 24px cap -> 24/0.7 font size, rounded
        assert_eq!(
            styles.value("fontSize").unwrap().as_single(),
            Some("34.2857px")
        );
        // gap-md -> 1rem -> 16px; 24 + 16
        assert_eq!(
            styles.value("lineHeight").unwrap().as_single(),
            Some("40px")
        );
    }

    #[test]
    fn font_size_path_with_leading() {
        let props = TextProps::new("Karla").font_size(20.0).leading(30.0);
        let styles = engine().compute(&props).unwrap();

        assert_eq!(styles.value("fontSize").unwrap().as_single(), Some("20px"));
        assert_eq!(styles.value("lineHeight").unwrap().as_single(), Some("30px"));
    }

    #[test]
    fn cap_height_beats_font_size() {
        let props = TextProps::new("Karla")
            .cap_height(35.0)
            .font_size(99.0)
            .line_gap(0.0);
        let styles = engine().compute(&props).unwrap();

        assert_eq!(styles.value("fontSize").unwrap().as_single(), Some("50px"));
    }

    #[test]
    fn line_gap_beats_leading() {
        let props = TextProps::new("Karla")
            .cap_height(35.0)
            .line_gap(10.0)
            .leading(99.0);
        let styles = engine().compute(&props).unwrap();

        assert_eq!(styles.value("lineHeight").unwrap().as_single(), Some("45px"));
    }

    #[test]
    fn unitless_line_height_multiplies_literal_font_size() {
        let props = TextProps::new("Karla").font_size(20.0).line_height(1.5);
        let styles = engine().compute(&props).unwrap();

        assert_eq!(styles.value("lineHeight").unwrap().as_single(), Some("30px"));
    }

    #[test]
    fn unitless_line_height_multiplies_derived_size_on_cap_height_path() {
        let props = TextProps::new("Karla").cap_height(35.0).line_height(1.2);
        let styles = engine().compute(&props).unwrap();

        // 1.2 times the cap-height-derived 50px font size, not 1.2
        // times the 35px cap height.
        assert_eq!(styles.value("lineHeight").unwrap().as_single(), Some("60px"));
    }

    #[test]
    fn rem_line_height_uses_root_font_size() {
        let props = TextProps::new("Karla").font_size(20.0).line_height("1.5rem");
        let styles = engine().compute(&props).unwrap();

        assert_eq!(styles.value("lineHeight").unwrap().as_single(), Some("24px"));
    }

    #[test]
    fn px_line_height_is_unsupported() {
        let props = TextProps::new("Karla").font_size(20.0).line_height("20px");
        let err = engine().compute(&props).unwrap_err();

        assert_eq!(
            err,
            Error::UnsupportedUnit {
                property: "line_height".to_string(),
                value: "20px".to_string(),
            }
        );
    }

    #[test]
    fn missing_size_specification() {
        let err = engine().compute(&TextProps::new("Karla")).unwrap_err();
        assert_eq!(err, Error::MissingSizeSpecification);
    }

    #[test]
    fn responsive_value_without_base_fails() {
        let props = TextProps::new("Karla")
            .cap_height(Responsive::map([("md", Some(24.0.into()))]));
        let err = engine().compute(&props).unwrap_err();

        assert_eq!(
            err,
            Error::MissingBaseValue {
                property: "cap_height".to_string(),
                base: "base".to_string(),
            }
        );
    }

    #[test]
    fn unknown_font_family_fails() {
        let props = TextProps::new("Comic Sans MS").cap_height(24.0);
        let err = engine().compute(&props).unwrap_err();

        assert_eq!(
            err,
            Error::UnknownFontFamily {
                family: "Comic Sans MS".to_string(),
            }
        );
    }

    #[test]
    fn first_registered_family_in_list_wins() {
        let props = TextProps::new("Nope, Roboto, sans-serif").cap_height(24.0);
        let styles = engine().compute(&props).unwrap();

        assert_eq!(
            styles.value("fontSize").unwrap().as_single(),
            Some("33.7582px")
        );
    }

    #[test]
    fn unsupported_cap_height_unit_fails() {
        let props = TextProps::new("Karla").cap_height("2em");
        let err = engine().compute(&props).unwrap_err();

        assert_eq!(
            err,
            Error::UnsupportedUnit {
                property: "cap_height".to_string(),
                value: "2em".to_string(),
            }
        );
    }
}
