// File: crates/pizza-core/src/color.rs
// Summary: RGBA colors, hex parsing, interpolation, and the ColorSpec -> per-sector color mapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};
use crate::geometry::clamp;

/// 8-bit straight-alpha color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let bad = || ConfigurationError::InvalidColor(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, a))
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Same color with alpha scaled to `opacity` in `[0, 1]`.
    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (self.a as f64 * clamp(opacity, 0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    /// Per-channel linear interpolation. `t` is clamped; `t = 0` and `t = 1`
    /// return the endpoints exactly.
    pub fn lerp(self, end: Rgba, t: f64) -> Rgba {
        let t = clamp(t, 0.0, 1.0);
        let ch = |a: u8, b: u8| -> u8 {
            let (a, b) = (a as f64, b as f64);
            clamp((a + (b - a) * t).round(), 0.0, 255.0) as u8
        };
        Rgba::new(ch(self.r, end.r), ch(self.g, end.g), ch(self.b, end.b), ch(self.a, end.a))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = ConfigurationError;
    fn from_str(s: &str) -> Result<Self> { Rgba::from_hex(s) }
}

impl TryFrom<String> for Rgba {
    type Error = ConfigurationError;
    fn try_from(s: String) -> Result<Self> { Rgba::from_hex(&s) }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> String { c.to_hex() }
}

/// How sectors are colored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpec {
    /// One color for every sector.
    Solid(Rgba),
    /// Palette assigned by index, wrapping when shorter than the series.
    Cycle(Vec<Rgba>),
    /// Exactly one color per sector.
    Fixed(Vec<Rgba>),
    /// Continuous scale over each sector's normalized value.
    Gradient { start: Rgba, end: Rgba },
    /// Continuous scale over sector index: first = start, last = end.
    Ramp { start: Rgba, end: Rgba },
}

impl ColorSpec {
    /// Check this coloring against a series of `n` items before any mapping happens.
    pub fn validate(&self, n: usize) -> Result<()> {
        match self {
            ColorSpec::Cycle(p) if p.is_empty() => Err(ConfigurationError::EmptyPalette),
            ColorSpec::Fixed(p) if p.len() != n => Err(ConfigurationError::LengthMismatch {
                left: "colors",
                left_len: p.len(),
                right: "values",
                right_len: n,
            }),
            _ => Ok(()),
        }
    }

    /// Color for item `index` of `n`, whose normalized value is `normalized`.
    /// Callers validate first; an unvalidated empty palette falls back to black.
    pub fn color_for(&self, index: usize, n: usize, normalized: f64) -> Rgba {
        match self {
            ColorSpec::Solid(c) => *c,
            ColorSpec::Cycle(p) | ColorSpec::Fixed(p) => {
                if p.is_empty() { Rgba::BLACK } else { p[index % p.len()] }
            }
            ColorSpec::Gradient { start, end } => start.lerp(*end, normalized),
            ColorSpec::Ramp { start, end } => {
                let t = if n > 1 { index as f64 / (n - 1) as f64 } else { 0.0 };
                start.lerp(*end, t)
            }
        }
    }
}
