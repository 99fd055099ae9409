// File: crates/pizza-core/src/style.rs
// Summary: Orthogonal style flags for a single chart code path, plus value formatting.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::layout::LayoutOptions;
use crate::theme::Theme;

/// Shape of a sector's outer edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStyle {
    /// Circular arc.
    #[default]
    Curved,
    /// Straight chord between the two outer corners.
    Straight,
}

/// How value badges print a metric.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// `85`
    #[default]
    Raw,
    /// `85%`
    Percent,
    /// `85` followed by an arbitrary suffix.
    Suffix(String),
}

impl ValueFormat {
    pub fn format(&self, v: f64) -> String {
        let n = format_number(v);
        match self {
            ValueFormat::Raw => n,
            ValueFormat::Percent => format!("{n}%"),
            ValueFormat::Suffix(s) => format!("{n}{s}"),
        }
    }
}

/// Integral values print without decimals; others keep up to two.
pub fn format_number(v: f64) -> String {
    let mut r = (v * 100.0).round() / 100.0;
    // tiny negatives round to -0.0
    if r == 0.0 {
        r = 0.0;
    }
    if r.fract() == 0.0 && r.abs() < 1e15 {
        format!("{}", r as i64)
    } else {
        let s = format!("{r:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Every flag is independent; unset fields in a settings file fall back to
/// [`StyleOptions::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub background_color: Rgba,
    /// Sector borders and the outer rim.
    pub line_color: Rgba,
    pub text_color: Rgba,
    /// Fill of the inactive full-height wedge behind each value wedge.
    pub blank_color: Rgba,
    /// Accent line, center-badge halo, comparison fallback.
    pub highlight_color: Rgba,
    /// Angular gap carved out of every sector, in degrees.
    pub gap_deg: f64,
    /// Donut hole radius as a fraction of the full radius.
    pub inner_hole_fraction: f64,
    /// Extra rotation added to the default "sector 0 centered at top" orientation.
    pub rotation_deg: f64,
    pub edges: EdgeStyle,
    pub show_labels: bool,
    pub show_values: bool,
    pub show_reference_rings: bool,
    pub reference_ring_count: usize,
    pub value_format: ValueFormat,
    /// Label/value/title text sizes in chart units.
    pub label_size: f64,
    pub value_size: f64,
    pub title_size: f64,
    pub badge_size: f64,
    /// Distance from a sector's outer radius to its label anchor.
    pub label_offset: f64,
    pub border_width: f64,
    pub ring_width: f64,
    pub accent_width: f64,
    /// Opacity of the comparison wedges.
    pub comparison_opacity: f64,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self::from_theme(&Theme::wallet_dark())
    }
}

impl StyleOptions {
    /// Style whose colors come from `theme`, everything else at its default.
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            background_color: theme.background,
            line_color: theme.line,
            text_color: theme.text,
            blank_color: theme.blank,
            highlight_color: theme.highlight,
            gap_deg: 0.0,
            inner_hole_fraction: 0.15,
            rotation_deg: 0.0,
            edges: EdgeStyle::Curved,
            show_labels: true,
            show_values: true,
            show_reference_rings: theme.reference_rings,
            reference_ring_count: 4,
            value_format: ValueFormat::Raw,
            label_size: 0.075,
            value_size: 0.065,
            title_size: 0.16,
            badge_size: 0.17,
            label_offset: 0.1,
            border_width: 0.005,
            ring_width: 0.003,
            accent_width: 0.04,
            comparison_opacity: 0.6,
        }
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            rotation_deg: self.rotation_deg,
            gap_deg: self.gap_deg,
            inner_hole_fraction: self.inner_hole_fraction,
        }
    }
}
