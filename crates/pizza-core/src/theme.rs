// File: crates/pizza-core/src/theme.rs
// Summary: Named color presets for the dashboard variants (dark/light wallet score, classic pizza).

use crate::color::{ColorSpec, Rgba};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub line: Rgba,
    pub text: Rgba,
    pub blank: Rgba,
    pub highlight: Rgba,
    /// Low end of the default slice gradient.
    pub slice_start: Rgba,
    /// Whether the concentric range rings are drawn by default.
    pub reference_rings: bool,
}

impl Theme {
    pub fn wallet_dark() -> Self {
        Self {
            name: "wallet-dark",
            background: Rgba::rgb(0x12, 0x12, 0x12),
            line: Rgba::rgb(0xff, 0xff, 0xff),
            text: Rgba::rgb(0xff, 0xff, 0xff),
            blank: Rgba::new(0x2e, 0x2e, 0x2a, 0x1a), // slice background at 10% alpha
            highlight: Rgba::rgb(0x44, 0x09, 0x81),
            slice_start: Rgba::rgb(0x2e, 0x2e, 0x2a),
            reference_rings: false,
        }
    }

    pub fn wallet_light() -> Self {
        Self {
            name: "wallet-light",
            background: Rgba::rgb(0xe9, 0xea, 0xe3),
            line: Rgba::rgb(0x00, 0x00, 0x00),
            text: Rgba::rgb(0x00, 0x00, 0x00),
            blank: Rgba::new(0x2e, 0x2e, 0x2a, 0x1a),
            highlight: Rgba::rgb(0x44, 0x09, 0x81),
            slice_start: Rgba::rgb(0x2e, 0x2e, 0x2a),
            reference_rings: false,
        }
    }

    /// The first wallet dashboard: light paper, white rules, black text.
    pub fn wallet_classic() -> Self {
        Self {
            name: "wallet-classic",
            background: Rgba::rgb(0xd9, 0xda, 0xd2),
            line: Rgba::rgb(0xff, 0xff, 0xff),
            text: Rgba::rgb(0x00, 0x00, 0x00),
            blank: Rgba::new(0x2e, 0x2e, 0x2a, 0x1a),
            highlight: Rgba::rgb(0x44, 0x09, 0x81),
            slice_start: Rgba::rgb(0x2e, 0x2e, 0x2a),
            reference_rings: false,
        }
    }

    /// The generic pizza generator's dark palette.
    pub fn pizza_dark() -> Self {
        Self {
            name: "pizza-dark",
            background: Rgba::rgb(0x12, 0x12, 0x12),
            line: Rgba::rgb(0xff, 0xff, 0xff),
            text: Rgba::rgb(0xff, 0xff, 0xff),
            blank: Rgba::rgb(0x2c, 0x2c, 0x2c),
            highlight: Rgba::rgb(0xf6, 0x33, 0x66),
            slice_start: Rgba::rgb(0x7d, 0x3c, 0x98),
            reference_rings: true,
        }
    }

    /// Default sector coloring for this preset.
    pub fn color_spec(&self) -> ColorSpec {
        ColorSpec::Gradient { start: self.slice_start, end: self.highlight }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::wallet_dark(),
        Theme::wallet_light(),
        Theme::wallet_classic(),
        Theme::pizza_dark(),
    ]
}

/// Preset named `name` (case-insensitive), if there is one.
pub fn lookup(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}

/// Find a theme by its `name`, falling back to wallet-dark.
pub fn find(name: &str) -> Theme {
    lookup(name).unwrap_or_else(Theme::wallet_dark)
}
