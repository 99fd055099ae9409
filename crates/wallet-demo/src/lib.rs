// File: crates/wallet-demo/src/lib.rs
// Summary: Wallet and Metric/Value dataset loading, chart settings and tracing setup for the wallet-score CLI.

pub mod dataset;
pub mod pairs;
pub mod settings;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub use dataset::{metric_label, write_template, ScoreColumn, WalletDataset, WalletRecord};
pub use pairs::{example, load_pairs, read_pairs, write_pairs_template};
pub use settings::{ChartSettings, ComparisonSettings};

/// Install the global subscriber. `RUST_LOG` filters (default `info`);
/// `LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() -> Result<()> {
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter())
            .with_current_span(true)
            .try_init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter()).with_target(false).try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("tracing init failed: {e}"))
}
