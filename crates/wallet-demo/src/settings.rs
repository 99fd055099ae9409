// File: crates/wallet-demo/src/settings.rs
// Summary: Optional TOML chart settings layered over a theme preset.

use std::path::Path;

use anyhow::{bail, Context, Result};
use pizza_core::{theme, ChartRequest, ColorSpec, EdgeStyle, MetricSeries, Rgba, StyleOptions, Theme, ValueFormat, ValueRange};
use serde::Deserialize;
use tracing::{debug, warn};

/// Comparison overlay from a settings file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparisonSettings {
    pub values: Vec<f64>,
    #[serde(default = "default_comparison_color")]
    pub color: Rgba,
}

pub fn default_comparison_color() -> Rgba {
    Rgba::rgb(0x34, 0x98, 0xdb)
}

/// Every key is optional; unset keys keep the preset's value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSettings {
    /// Preset name, e.g. `wallet-dark` or `wallet-light`.
    pub theme: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// High end of the slice gradient, also used for the accent line and badge halo.
    pub highlight_color: Option<Rgba>,
    pub background_color: Option<Rgba>,
    /// Text and rule color.
    pub text_color: Option<Rgba>,
    /// Low end of the slice gradient.
    pub slice_bg_color: Option<Rgba>,
    pub straight_line: Option<bool>,
    pub show_overall_score: Option<bool>,
    pub value_format: Option<ValueFormat>,
    /// Declared value range; defaults to 0..100.
    pub range: Option<ValueRange>,
    /// Full sector coloring; replaces the slice/highlight gradient.
    pub colors: Option<ColorSpec>,
    /// Any [`StyleOptions`] keys, merged over the preset's style.
    pub style: Option<toml::Table>,
    pub comparison: Option<ComparisonSettings>,
}

impl ChartSettings {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("parsing chart settings {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let settings: Self = toml::from_str(raw)?;
        debug!(?settings, "loaded chart settings");
        Ok(settings)
    }

    /// Preset named by `preset` (CLI), else by the file, else wallet-dark.
    pub fn theme(&self, preset: Option<&str>) -> Theme {
        self.theme_or(preset, Theme::wallet_dark())
    }

    /// Like [`theme`](Self::theme) with a caller-chosen fallback. Unknown
    /// names are logged and fall back too.
    pub fn theme_or(&self, preset: Option<&str>, fallback: Theme) -> Theme {
        let Some(name) = preset.or(self.theme.as_deref()) else {
            return fallback;
        };
        match theme::lookup(name) {
            Some(t) => t,
            None => {
                let known = theme::presets().iter().map(|t| t.name).collect::<Vec<_>>().join(", ");
                warn!(theme = %name, fallback = fallback.name, %known, "unknown theme preset");
                fallback
            }
        }
    }

    /// Style and sector colors for `theme` with these settings applied.
    /// Order: preset, then `[style]`, then the dashboard keys, then `colors`.
    pub fn apply(&self, theme: &Theme) -> Result<(StyleOptions, ColorSpec)> {
        let mut style = StyleOptions::from_theme(theme);
        if let Some(overrides) = &self.style {
            style = merge_style(style, overrides)?;
        }
        if let Some(c) = self.background_color {
            style.background_color = c;
        }
        if let Some(c) = self.text_color {
            style.text_color = c;
            style.line_color = c;
        }
        if let Some(c) = self.highlight_color {
            style.highlight_color = c;
        }
        if self.straight_line == Some(true) {
            style.edges = EdgeStyle::Straight;
        }
        if let Some(f) = &self.value_format {
            style.value_format = f.clone();
        }
        let colors = match &self.colors {
            Some(spec) => spec.clone(),
            None => ColorSpec::Gradient {
                start: self.slice_bg_color.unwrap_or(theme.slice_start),
                end: style.highlight_color,
            },
        };
        Ok((style, colors))
    }

    /// Request for `series` with style, colors, range and comparison applied.
    /// Title and center badge are left to the caller.
    pub fn request(&self, series: MetricSeries, theme: &Theme) -> Result<ChartRequest> {
        let (style, colors) = self.apply(theme)?;
        let mut request = ChartRequest::themed(series, theme).with_style(style).with_colors(colors);
        if let Some(range) = self.range {
            request = request.with_range(range);
        }
        if let Some(cmp) = &self.comparison {
            request = request.with_comparison(cmp.values.clone(), cmp.color);
        }
        Ok(request)
    }

    pub fn show_overall_score(&self) -> bool {
        self.show_overall_score.unwrap_or(true)
    }
}

/// Overlay `overrides` onto `base` key by key, rejecting keys `StyleOptions` lacks.
fn merge_style(base: StyleOptions, overrides: &toml::Table) -> Result<StyleOptions> {
    let toml::Value::Table(mut table) = toml::Value::try_from(&base)? else {
        bail!("style did not serialize to a table");
    };
    for (key, value) in overrides {
        if !table.contains_key(key) {
            bail!("unknown style key '{key}'");
        }
        table.insert(key.clone(), value.clone());
    }
    toml::Value::Table(table).try_into().context("invalid [style] table")
}
