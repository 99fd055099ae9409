// File: crates/pizza-core/src/request.rs
// Summary: ChartRequest value object: everything one render needs, built fresh per request.

use crate::color::{ColorSpec, Rgba};
use crate::compose::{compose_with, ComparisonLayer, Decorations, TitleBlock};
use crate::error::Result;
use crate::layout::layout;
use crate::scale::{Value, ValueRange};
use crate::scene::ChartScene;
use crate::series::MetricSeries;
use crate::style::StyleOptions;
use crate::theme::Theme;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartRequest {
    pub series: MetricSeries,
    pub range: ValueRange,
    pub colors: ColorSpec,
    pub style: StyleOptions,
    pub title: Option<TitleBlock>,
    pub center_badge: Option<Value>,
    /// Values aligned with `series` labels, plus the color they are drawn in.
    pub comparison: Option<(Vec<Value>, Rgba)>,
}

impl ChartRequest {
    /// Request over the 0..100 range with the wallet-dark preset.
    pub fn new(series: MetricSeries) -> Self {
        Self::themed(series, &Theme::wallet_dark())
    }

    pub fn themed(series: MetricSeries, theme: &Theme) -> Self {
        Self {
            series,
            range: ValueRange::percent(),
            colors: theme.color_spec(),
            style: StyleOptions::from_theme(theme),
            title: None,
            center_badge: None,
            comparison: None,
        }
    }

    pub fn with_range(mut self, range: ValueRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_colors(mut self, colors: ColorSpec) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_style(mut self, style: StyleOptions) -> Self {
        self.style = style;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>, subtitle: Option<String>) -> Self {
        self.title = Some(TitleBlock { title: title.into(), subtitle });
        self
    }

    pub fn with_center_badge(mut self, value: Value) -> Self {
        self.center_badge = Some(value);
        self
    }

    pub fn with_comparison(mut self, values: Vec<Value>, color: Rgba) -> Self {
        self.comparison = Some((values, color));
        self
    }

    /// Run layout then composition. Pure: the same request always yields an
    /// identical scene.
    pub fn build(&self) -> Result<ChartScene> {
        let options = self.style.layout_options();
        let geometry = layout(&self.series, &self.range, &options)?;
        let comparison = match &self.comparison {
            Some((values, color)) => {
                let other = self.series.with_values(values)?;
                Some(ComparisonLayer { sectors: layout(&other, &self.range, &options)?, color: *color })
            }
            None => None,
        };
        let decorations = Decorations { title: self.title.clone(), center_badge: self.center_badge, comparison };
        compose_with(&geometry, &self.series, &self.colors, &self.style, &decorations)
    }
}
