// File: crates/pizza-core/src/error.rs
// Summary: Configuration errors surfaced synchronously by layout and composition.

use thiserror::Error;

/// Every way a chart request can be rejected before any geometry is produced.
/// Out-of-range values are not errors; they clamp.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("a pizza chart needs at least 2 metrics, got {got}")]
    TooFewMetrics { got: usize },

    #[error("invalid value range: min ({min}) must be finite and below max ({max})")]
    InvalidRange { min: f64, max: f64 },

    #[error("length mismatch: {left} has {left_len} entries but {right} has {right_len}")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    #[error("duplicate metric label '{0}'")]
    DuplicateLabel(String),

    #[error("metric '{label}' has a non-finite value")]
    NonFiniteValue { label: String },

    #[error("color palette is empty")]
    EmptyPalette,

    #[error("invalid color '{0}': expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    #[error("invalid option {name}: {reason}")]
    InvalidOption { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
