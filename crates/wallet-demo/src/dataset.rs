// File: crates/wallet-demo/src/dataset.rs
// Summary: Wallet-score CSV loading, wallet search and metric selection.

use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};
use pizza_core::MetricSeries;
use tracing::{debug, warn};

pub const ADDRESS_COLUMN: &str = "wallet_address";
pub const OVERALL_COLUMN: &str = "overall_score";
const SCORE_SUFFIX: &str = "_score";

/// A `*_score` column shown as one metric.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreColumn {
    pub column: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WalletRecord {
    pub address: String,
    pub overall: Option<f64>,
    /// Rounded scores, aligned with [`WalletDataset::columns`].
    pub scores: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WalletDataset {
    pub columns: Vec<ScoreColumn>,
    pub wallets: Vec<WalletRecord>,
}

/// Display label for a score column: `perpetuals_score` -> `Perpetuals`.
pub fn metric_label(column: &str) -> String {
    let stem = column.strip_suffix(SCORE_SUFFIX).unwrap_or(column);
    match stem.to_ascii_lowercase().as_str() {
        "nft" => return "NFTs".to_string(),
        "dex" => return "DEX".to_string(),
        _ => {}
    }
    stem.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

impl WalletDataset {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
        Self::from_reader(file).with_context(|| format!("reading wallet dataset {}", path.display()))
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

        let headers = rdr.headers()?.iter().map(|h| h.to_string()).collect::<Vec<_>>();
        debug!(?headers, "dataset headers");

        let i_address = headers
            .iter()
            .position(|h| h == ADDRESS_COLUMN)
            .with_context(|| format!("CSV must contain a '{ADDRESS_COLUMN}' column"))?;
        let i_overall = headers.iter().position(|h| h == OVERALL_COLUMN);
        let score_idx = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| h.ends_with(SCORE_SUFFIX) && h.as_str() != OVERALL_COLUMN)
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        if score_idx.len() < 2 {
            bail!("CSV must contain at least two score columns (ending with '{SCORE_SUFFIX}')");
        }
        let columns = score_idx
            .iter()
            .map(|&i| ScoreColumn { column: headers[i].clone(), label: metric_label(&headers[i]) })
            .collect::<Vec<_>>();

        let mut wallets = Vec::new();
        for (row, rec) in rdr.records().enumerate() {
            let rec = rec.with_context(|| format!("CSV row {}", row + 2))?;
            let parse = |i: usize| -> Option<f64> {
                rec.get(i).and_then(|s| s.parse::<f64>().ok()).filter(|v| v.is_finite()).map(f64::round)
            };
            let address = rec.get(i_address).unwrap_or_default().to_string();
            if address.is_empty() {
                warn!(row = row + 2, "skipping row without wallet address");
                continue;
            }
            let scores = score_idx.iter().map(|&i| parse(i)).collect::<Option<Vec<_>>>();
            let Some(scores) = scores else {
                warn!(row = row + 2, %address, "skipping row with missing or non-numeric scores");
                continue;
            };
            wallets.push(WalletRecord { address, overall: i_overall.and_then(parse), scores });
        }
        debug!(wallets = wallets.len(), metrics = columns.len(), "loaded wallet dataset");
        Ok(Self { columns, wallets })
    }

    /// The built-in three-wallet demo table.
    pub fn demo() -> Self {
        let columns = ["gambling_score", "lending_score", "perpetuals_score", "nft_score", "dex_score", "staking_score"]
            .iter()
            .map(|c| ScoreColumn { column: c.to_string(), label: metric_label(c) })
            .collect();
        let rows: [(&str, f64, [f64; 6]); 3] = [
            ("0xDemo1", 85.0, [90.0, 85.0, 75.0, 95.0, 80.0, 70.0]),
            ("0xDemo2", 72.0, [65.0, 70.0, 80.0, 60.0, 75.0, 85.0]),
            ("0xDemo3", 91.0, [88.0, 92.0, 85.0, 78.0, 95.0, 90.0]),
        ];
        let wallets = rows
            .iter()
            .map(|(a, o, s)| WalletRecord { address: a.to_string(), overall: Some(*o), scores: s.to_vec() })
            .collect();
        Self { columns, wallets }
    }

    /// Case-insensitive substring match on the address, in file order.
    pub fn search(&self, query: &str) -> Vec<&WalletRecord> {
        let q = query.trim().to_lowercase();
        self.wallets.iter().filter(|w| w.address.to_lowercase().contains(&q)).collect()
    }

    /// Resolve requested metric names (label, column, or column stem) to column
    /// indices in dataset order. An empty request selects every column.
    pub fn select_columns(&self, wanted: &[String]) -> Result<Vec<usize>> {
        if wanted.is_empty() {
            return Ok((0..self.columns.len()).collect());
        }
        let matches = |c: &ScoreColumn, w: &str| {
            let w = w.trim();
            c.label.eq_ignore_ascii_case(w)
                || c.column.eq_ignore_ascii_case(w)
                || c.column.strip_suffix(SCORE_SUFFIX).is_some_and(|s| s.eq_ignore_ascii_case(w))
        };
        for w in wanted {
            if !self.columns.iter().any(|c| matches(c, w)) {
                let available = self.columns.iter().map(|c| c.label.as_str()).collect::<Vec<_>>().join(", ");
                bail!("unknown metric '{w}' (available: {available})");
            }
        }
        let picked = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| wanted.iter().any(|w| matches(c, w)))
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        if picked.len() < 2 {
            bail!("select at least 2 metrics (got {})", picked.len());
        }
        Ok(picked)
    }

    pub fn series_for(&self, wallet: &WalletRecord, columns: &[usize]) -> Result<MetricSeries> {
        let pairs = columns.iter().map(|&i| (self.columns[i].label.clone(), wallet.scores[i]));
        MetricSeries::from_pairs(pairs).with_context(|| format!("building metrics for {}", wallet.address))
    }
}

/// Write the CSV template users can fill in.
pub fn write_template(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let mut wtr = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record([
        ADDRESS_COLUMN,
        OVERALL_COLUMN,
        "gambling_score",
        "lending_score",
        "perpetuals_score",
        "nft_score",
        "dex_score",
        "staking_score",
    ])?;
    wtr.write_record(["wallet123", "85", "90", "85", "75", "95", "80", "70"])?;
    wtr.write_record(["wallet456", "72", "65", "70", "80", "60", "75", "85"])?;
    wtr.flush()?;
    Ok(())
}
