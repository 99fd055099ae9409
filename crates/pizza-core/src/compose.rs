// File: crates/pizza-core/src/compose.rs
// Summary: Composer: colors, text placement, overlays and header band around laid-out sectors.

use tracing::debug;

use crate::color::{ColorSpec, Rgba};
use crate::error::{ConfigurationError, Result};
use crate::geometry::{upright_rotation, Bounds, Point};
use crate::grid::reference_rings;
use crate::layout::SectorGeometry;
use crate::scene::{ChartScene, Element, HAlign, Layer, SceneItem, TextBox, TextItem, TextRole};
use crate::series::MetricSeries;
use crate::style::StyleOptions;

/// Padding between header rows and around the frame edge, in chart units.
const PAD: f64 = 0.1;
/// Subtitle size relative to the title.
const SUBTITLE_SCALE: f64 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct TitleBlock {
    pub title: String,
    pub subtitle: Option<String>,
}

/// Second value set drawn translucently over the primary wedges.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonLayer {
    pub sectors: Vec<SectorGeometry>,
    pub color: Rgba,
}

/// Optional decorations that do not depend on per-sector values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Decorations {
    /// Title and subtitle, underlined by the accent line.
    pub title: Option<TitleBlock>,
    /// Aggregate value printed in the donut hole.
    pub center_badge: Option<f64>,
    pub comparison: Option<ComparisonLayer>,
}

/// Compose the sectors of `series` into a scene with no title, badge or comparison.
pub fn compose(
    geometry: &[SectorGeometry],
    series: &MetricSeries,
    colors: &ColorSpec,
    style: &StyleOptions,
) -> Result<ChartScene> {
    compose_with(geometry, series, colors, style, &Decorations::default())
}

pub fn compose_with(
    geometry: &[SectorGeometry],
    series: &MetricSeries,
    colors: &ColorSpec,
    style: &StyleOptions,
    decorations: &Decorations,
) -> Result<ChartScene> {
    let n = series.len();
    if n < 2 {
        return Err(ConfigurationError::TooFewMetrics { got: n });
    }
    if geometry.len() != n {
        return Err(ConfigurationError::LengthMismatch {
            left: "geometry",
            left_len: geometry.len(),
            right: "series",
            right_len: n,
        });
    }
    colors.validate(n)?;
    if let Some(cmp) = &decorations.comparison {
        if cmp.sectors.len() != n {
            return Err(ConfigurationError::LengthMismatch {
                left: "comparison",
                left_len: cmp.sectors.len(),
                right: "series",
                right_len: n,
            });
        }
    }

    if let Some(score) = decorations.center_badge {
        if !score.is_finite() {
            return Err(ConfigurationError::NonFiniteValue { label: "center badge".to_string() });
        }
    }

    let mut items = Vec::with_capacity(n * 5 + 8);
    let mut push = |layer: Layer, element: Element| items.push(SceneItem { layer, element });

    push(Layer::Background, Element::Background { color: style.background_color });

    for s in geometry {
        push(Layer::BlankWedges, Element::Wedge { sector: s.full_height(), fill: style.blank_color, edges: style.edges });
    }

    for s in geometry {
        let fill = colors.color_for(s.index, n, s.normalized);
        push(Layer::ValueWedges, Element::Wedge { sector: *s, fill, edges: style.edges });
    }

    if let Some(cmp) = &decorations.comparison {
        let fill = cmp.color.with_opacity(style.comparison_opacity);
        for s in &cmp.sectors {
            push(Layer::ComparisonWedges, Element::Wedge { sector: *s, fill, edges: style.edges });
            push(
                Layer::ComparisonWedges,
                Element::Outline { sector: *s, stroke: Rgba::BLACK, width: style.border_width, edges: style.edges },
            );
        }
    }

    if style.show_reference_rings {
        let hole = geometry[0].inner_radius;
        let stroke = style.line_color.with_opacity(0.5);
        for radius in reference_rings(style.reference_ring_count, hole) {
            push(Layer::ReferenceRings, Element::Ring { radius, stroke, width: style.ring_width });
        }
    }

    for s in geometry {
        push(
            Layer::SectorBorders,
            Element::Outline { sector: *s, stroke: style.line_color, width: style.border_width, edges: style.edges },
        );
    }
    push(Layer::SectorBorders, Element::Ring { radius: 1.0, stroke: style.line_color, width: style.border_width });

    for (s, m) in geometry.iter().zip(series.iter()) {
        let mid = s.mid_angle();
        let rotation_deg = upright_rotation(mid);
        if style.show_labels {
            push(
                Layer::Text,
                Element::Text(TextItem {
                    role: TextRole::Label,
                    text: m.label.clone(),
                    anchor: Point::polar(s.outer_radius + style.label_offset, mid),
                    rotation_deg,
                    size: style.label_size,
                    color: style.text_color,
                    align: HAlign::Center,
                    bold: false,
                    boxed: None,
                    halo: None,
                }),
            );
        }
        if style.show_values {
            push(
                Layer::Text,
                Element::Text(TextItem {
                    role: TextRole::Value,
                    text: style.value_format.format(m.value),
                    anchor: Point::polar(s.mid_radius(), mid),
                    rotation_deg,
                    size: style.value_size,
                    color: style.text_color,
                    align: HAlign::Center,
                    bold: true,
                    boxed: Some(TextBox {
                        fill: style.background_color,
                        stroke: style.text_color,
                        stroke_width: style.border_width * 1.5,
                    }),
                    halo: None,
                }),
            );
        }
    }

    let extent = chart_extent(style);
    let header = decorations.title.as_ref().map(|t| header_height(t, style)).unwrap_or(0.0);
    let frame = Bounds::from_ltrb(-extent, -extent - header, extent, extent);

    if let Some(title) = &decorations.title {
        let sub_size = style.title_size * SUBTITLE_SCALE;
        let title_y = frame.top + PAD + style.title_size * 0.5;
        push(
            Layer::TitleBlock,
            Element::Text(TextItem {
                role: TextRole::Title,
                text: title.title.clone(),
                anchor: Point::new(frame.left + PAD, title_y),
                rotation_deg: 0.0,
                size: style.title_size,
                color: style.text_color,
                align: HAlign::Left,
                bold: true,
                boxed: None,
                halo: None,
            }),
        );
        let mut rule_y = title_y + style.title_size * 0.5 + PAD * 0.5;
        if let Some(sub) = &title.subtitle {
            let sub_y = title_y + style.title_size * 0.5 + PAD * 0.25 + sub_size * 0.5;
            push(
                Layer::TitleBlock,
                Element::Text(TextItem {
                    role: TextRole::Subtitle,
                    text: sub.clone(),
                    anchor: Point::new(frame.left + PAD, sub_y),
                    rotation_deg: 0.0,
                    size: sub_size,
                    color: style.text_color.with_opacity(0.8),
                    align: HAlign::Left,
                    bold: false,
                    boxed: None,
                    halo: None,
                }),
            );
            rule_y = sub_y + sub_size * 0.5 + PAD * 0.5;
        }
        rule_y += style.accent_width * 0.5;
        push(
            Layer::AccentLine,
            Element::Line {
                from: Point::new(frame.left + PAD * 0.5, rule_y),
                to: Point::new(frame.right - PAD * 0.5, rule_y),
                stroke: style.highlight_color,
                width: style.accent_width,
            },
        );
    }

    if let Some(score) = decorations.center_badge {
        push(
            Layer::CenterBadge,
            Element::Text(TextItem {
                role: TextRole::Badge,
                text: crate::style::format_number(score),
                anchor: Point::ORIGIN,
                rotation_deg: 0.0,
                size: style.badge_size,
                color: style.text_color,
                align: HAlign::Center,
                bold: true,
                boxed: None,
                halo: Some(style.highlight_color),
            }),
        );
    }

    debug!(sectors = n, items = items.len(), "composed chart scene");
    Ok(ChartScene::new(frame, items))
}

/// Half-width of the square that holds the circle, its labels and padding.
fn chart_extent(style: &StyleOptions) -> f64 {
    let labels = if style.show_labels { style.label_offset + style.label_size } else { 0.0 };
    1.0 + labels + PAD
}

/// Height of the band above the chart square holding title, subtitle and accent line.
fn header_height(title: &TitleBlock, style: &StyleOptions) -> f64 {
    // must mirror the row placement in `compose_with`
    let mut h = PAD + style.title_size + PAD * 0.5 + style.accent_width + PAD * 0.5;
    if title.subtitle.is_some() {
        h += PAD * 0.25 + style.title_size * SUBTITLE_SCALE;
    }
    h
}
