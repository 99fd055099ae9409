// File: crates/pizza-core/src/scene.rs
// Summary: ChartScene: the renderer-agnostic, z-ordered description of everything to draw.

use crate::color::Rgba;
use crate::geometry::{Bounds, Point};
use crate::layout::SectorGeometry;
use crate::style::EdgeStyle;

/// Paint layers, back to front. The derived `Ord` is the draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Background,
    BlankWedges,
    ValueWedges,
    ComparisonWedges,
    ReferenceRings,
    SectorBorders,
    Text,
    TitleBlock,
    AccentLine,
    CenterBadge,
}

impl Layer {
    pub const ALL: [Layer; 10] = [
        Layer::Background,
        Layer::BlankWedges,
        Layer::ValueWedges,
        Layer::ComparisonWedges,
        Layer::ReferenceRings,
        Layer::SectorBorders,
        Layer::Text,
        Layer::TitleBlock,
        Layer::AccentLine,
        Layer::CenterBadge,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    Label,
    Value,
    Title,
    Subtitle,
    Badge,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
}

/// Rounded box drawn behind a text item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextBox {
    pub fill: Rgba,
    pub stroke: Rgba,
    pub stroke_width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    pub role: TextRole,
    pub text: String,
    /// Anchor is the text's vertical center; horizontally it follows `align`.
    pub anchor: Point,
    /// Clockwise degrees, always in `[-90, 90)`.
    pub rotation_deg: f64,
    pub size: f64,
    pub color: Rgba,
    pub align: HAlign,
    pub bold: bool,
    pub boxed: Option<TextBox>,
    /// Outline stroked around the glyphs before filling them.
    pub halo: Option<Rgba>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Background { color: Rgba },
    Wedge { sector: SectorGeometry, fill: Rgba, edges: EdgeStyle },
    /// Outline of a wedge: both radial edges plus the outer edge.
    Outline { sector: SectorGeometry, stroke: Rgba, width: f64, edges: EdgeStyle },
    Ring { radius: f64, stroke: Rgba, width: f64 },
    Line { from: Point, to: Point, stroke: Rgba, width: f64 },
    Text(TextItem),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneItem {
    pub layer: Layer,
    pub element: Element,
}

/// Immutable once built. Items are stored in draw order, so a renderer that
/// paints them front-to-back of the vector honours the layer contract.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartScene {
    frame: Bounds,
    items: Vec<SceneItem>,
}

impl ChartScene {
    /// Items are stably sorted by layer; insertion order is kept within a layer.
    pub(crate) fn new(frame: Bounds, mut items: Vec<SceneItem>) -> Self {
        items.sort_by_key(|it| it.layer);
        Self { frame, items }
    }

    /// Area the renderer should map onto its surface, in chart units.
    pub fn frame(&self) -> Bounds { self.frame }

    pub fn items(&self) -> &[SceneItem] { &self.items }

    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Element> {
        self.items.iter().filter(move |it| it.layer == layer).map(|it| &it.element)
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextItem> {
        self.items.iter().filter_map(|it| match &it.element {
            Element::Text(t) => Some(t),
            _ => None,
        })
    }
}
