// File: crates/pizza-core/src/lib.rs
// Summary: Core library entry point; exports the pizza chart layout engine, composer and scene model.

pub mod color;
pub mod compose;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod request;
pub mod scale;
pub mod scene;
pub mod series;
pub mod style;
pub mod theme;

pub use color::{ColorSpec, Rgba};
pub use compose::{compose, compose_with, ComparisonLayer, Decorations, TitleBlock};
pub use error::ConfigurationError;
pub use geometry::{Bounds, Point};
pub use grid::reference_rings;
pub use layout::{layout, LayoutOptions, SectorGeometry};
pub use request::ChartRequest;
pub use scale::ValueRange;
pub use scene::{ChartScene, Element, Layer, SceneItem, TextItem, TextRole};
pub use series::{Metric, MetricSeries};
pub use style::{EdgeStyle, StyleOptions, ValueFormat};
pub use theme::Theme;
