// File: crates/wallet-demo/src/pairs.rs
// Summary: Generic `Metric,Value` CSV input and the built-in example datasets.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use pizza_core::MetricSeries;
use tracing::debug;

pub const METRIC_COLUMN: &str = "Metric";
pub const VALUE_COLUMN: &str = "Value";

/// Load a two-column `Metric,Value` CSV. Header names match case-insensitively;
/// other columns are ignored.
pub fn load_pairs(path: &Path) -> Result<MetricSeries> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_pairs(file).with_context(|| format!("reading metric CSV {}", path.display()))
}

pub fn read_pairs<R: io::Read>(reader: R) -> Result<MetricSeries> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .with_context(|| format!("CSV must contain '{METRIC_COLUMN}' and '{VALUE_COLUMN}' columns"))
    };
    let (i_metric, i_value) = (column(METRIC_COLUMN)?, column(VALUE_COLUMN)?);

    let mut pairs = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("CSV row {}", row + 2))?;
        let label = rec.get(i_metric).unwrap_or_default().to_string();
        let raw = rec.get(i_value).unwrap_or_default();
        let value = raw
            .parse::<f64>()
            .with_context(|| format!("row {}: value '{raw}' for '{label}' is not a number", row + 2))?;
        pairs.push((label, value));
    }
    debug!(metrics = pairs.len(), "loaded metric pairs");
    Ok(MetricSeries::from_pairs(pairs)?)
}

/// Example datasets by name: `player` or `team`.
pub fn example(name: &str) -> Option<MetricSeries> {
    let pairs: &[(&str, f64)] = match name.trim().to_ascii_lowercase().as_str() {
        "player" => &[
            ("Passing", 85.0),
            ("Dribbling", 92.0),
            ("Shooting", 78.0),
            ("Defending", 56.0),
            ("Pace", 88.0),
            ("Physical", 72.0),
            ("Vision", 90.0),
            ("Crossing", 83.0),
            ("Finishing", 79.0),
            ("Positioning", 86.0),
        ],
        "team" => &[
            ("Goals", 75.0),
            ("Possession", 62.0),
            ("Pass Accuracy", 88.0),
            ("Shots on Target", 70.0),
            ("Tackles", 65.0),
            ("Interceptions", 55.0),
            ("Clean Sheets", 80.0),
            ("Set Pieces", 72.0),
        ],
        _ => return None,
    };
    MetricSeries::from_pairs(pairs.iter().copied()).ok()
}

pub fn write_pairs_template(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let mut wtr = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record([METRIC_COLUMN, VALUE_COLUMN])?;
    for (m, v) in [("Passing", "85"), ("Dribbling", "92"), ("Shooting", "78"), ("Defending", "56"), ("Pace", "88")] {
        wtr.write_record([m, v])?;
    }
    wtr.flush()?;
    Ok(())
}
