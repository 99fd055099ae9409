// File: crates/pizza-core/src/layout.rs
// Summary: Layout engine: partitions the circle into N sectors and scales each radially.
// Notes:
// - Angles are degrees clockwise from 12 o'clock. They are not wrapped, so a
//   sector may start at a negative angle; `end - start` is always its span.
// - Radii are fractions of the full chart radius.

use tracing::debug;

use crate::error::{ConfigurationError, Result};
use crate::scale::{radius_for, ValueRange};
use crate::series::MetricSeries;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Added to the default orientation, which centers sector 0 at the top.
    pub rotation_deg: f64,
    /// Gap carved out of each sector, split evenly between its two edges.
    pub gap_deg: f64,
    pub inner_hole_fraction: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { rotation_deg: 0.0, gap_deg: 0.0, inner_hole_fraction: 0.15 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorGeometry {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Value rescaled into `[0, 1]`; drives both the radius and gradient colors.
    pub normalized: f64,
}

impl SectorGeometry {
    pub fn span(&self) -> f64 { self.end_angle - self.start_angle }
    pub fn mid_angle(&self) -> f64 { (self.start_angle + self.end_angle) * 0.5 }
    pub fn mid_radius(&self) -> f64 { (self.inner_radius + self.outer_radius) * 0.5 }

    /// Same angles and hole, extended to the full radius (the blank wedge base).
    pub fn full_height(&self) -> Self {
        Self { outer_radius: 1.0, normalized: 1.0, ..*self }
    }
}

/// Compute one [`SectorGeometry`] per metric, in series order.
///
/// Fails on fewer than 2 metrics, a gap that swallows a whole sector, or a
/// hole fraction outside `[0, 1)`. Values outside `range` clamp.
pub fn layout(series: &MetricSeries, range: &ValueRange, options: &LayoutOptions) -> Result<Vec<SectorGeometry>> {
    let n = series.len();
    if n < 2 {
        return Err(ConfigurationError::TooFewMetrics { got: n });
    }
    let hole = options.inner_hole_fraction;
    if !(0.0..1.0).contains(&hole) {
        return Err(ConfigurationError::InvalidOption {
            name: "inner_hole_fraction",
            reason: format!("{hole} is outside [0, 1)"),
        });
    }
    let span = 360.0 / n as f64;
    if !(0.0..span).contains(&options.gap_deg) {
        return Err(ConfigurationError::InvalidOption {
            name: "gap_deg",
            reason: format!("{} must be in [0, {span}) for {n} sectors", options.gap_deg),
        });
    }
    if !options.rotation_deg.is_finite() {
        return Err(ConfigurationError::InvalidOption {
            name: "rotation_deg",
            reason: "must be finite".to_string(),
        });
    }

    let origin = options.rotation_deg - span * 0.5;
    let half_gap = options.gap_deg * 0.5;
    let sectors = series
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let normalized = range.normalize(m.value);
            SectorGeometry {
                index: i,
                start_angle: origin + i as f64 * span + half_gap,
                end_angle: origin + (i + 1) as f64 * span - half_gap,
                inner_radius: hole,
                outer_radius: radius_for(normalized, hole),
                normalized,
            }
        })
        .collect::<Vec<_>>();

    debug!(sectors = n, span_deg = span, gap_deg = options.gap_deg, hole, "laid out pizza sectors");
    Ok(sectors)
}
