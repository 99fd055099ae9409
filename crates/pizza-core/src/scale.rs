// File: crates/pizza-core/src/scale.rs
// Summary: Declared value range and the value -> normalized -> radius transforms.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};
use crate::geometry::clamp;

/// Value coordinate (a raw score).
pub type Value = f64;

/// Declared `[min, max]` range for metric values. `min < max` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct ValueRange {
    min: Value,
    max: Value,
}

#[derive(Deserialize)]
struct RawRange {
    min: Value,
    max: Value,
}

impl TryFrom<RawRange> for ValueRange {
    type Error = ConfigurationError;
    fn try_from(r: RawRange) -> Result<Self> {
        ValueRange::try_new(r.min, r.max)
    }
}

impl ValueRange {
    /// Inverted, zero-width or non-finite ranges are rejected rather than corrected.
    pub fn try_new(min: Value, max: Value) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ConfigurationError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// The 0..100 score range used by the wallet dataset.
    pub const fn percent() -> Self {
        Self { min: 0.0, max: 100.0 }
    }

    pub fn min(&self) -> Value { self.min }
    pub fn max(&self) -> Value { self.max }
    pub fn span(&self) -> Value { self.max - self.min }

    /// Rescale into `[0, 1]`, clamping values outside the range.
    #[inline]
    pub fn normalize(&self, v: Value) -> f64 {
        clamp((v - self.min) / self.span(), 0.0, 1.0)
    }
}

impl Default for ValueRange {
    fn default() -> Self { Self::percent() }
}

/// Radial position of a normalized value in a donut whose hole spans `[0, hole)`.
#[inline]
pub fn radius_for(normalized: f64, hole: f64) -> f64 {
    hole + normalized * (1.0 - hole)
}
