// File: crates/wallet-demo/src/main.rs
// Summary: wallet-score CLI: renders a wallet's score pizza chart, or a generic Metric/Value chart, to PNG/SVG.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use pizza_core::{ColorSpec, EdgeStyle, MetricSeries, Rgba, Theme, ValueRange};
use pizza_render_skia::{RenderOptions, SkiaRenderer};
use tracing::{info, warn};
use wallet_demo::settings::default_comparison_color;
use wallet_demo::{example, init_tracing, load_pairs, write_pairs_template, write_template, ChartSettings, WalletDataset};

#[derive(Parser, Debug)]
#[command(name = "wallet-score", about = "Render a wallet's score pizza chart")]
struct Args {
    /// Wallet score CSV (wallet_address, *_score columns, optional overall_score).
    #[arg(default_value = "crypto_data.csv")]
    dataset: PathBuf,

    /// Use the built-in demo wallets instead of a CSV file.
    #[arg(long)]
    demo: bool,

    /// Chart a generic `Metric,Value` CSV instead of a wallet.
    #[arg(long, value_name = "CSV", conflicts_with_all = ["demo", "example"])]
    pairs: Option<PathBuf>,

    /// Chart a built-in Metric/Value example (player, team).
    #[arg(long, value_name = "NAME", conflicts_with = "demo")]
    example: Option<String>,

    /// Write the wallet CSV template to this path and exit.
    #[arg(long, value_name = "PATH")]
    template: Option<PathBuf>,

    /// Write the Metric/Value CSV template to this path and exit.
    #[arg(long, value_name = "PATH")]
    pairs_template: Option<PathBuf>,

    /// Case-insensitive part of the wallet address; defaults to the first wallet.
    #[arg(short, long)]
    wallet: Option<String>,

    /// Metrics to plot, by label or column name (default: all).
    #[arg(short, long, value_delimiter = ',')]
    metrics: Vec<String>,

    /// Theme preset (wallet-dark, wallet-light, wallet-classic, pizza-dark).
    #[arg(long)]
    preset: Option<String>,

    /// TOML chart settings file.
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    subtitle: Option<String>,

    /// Lower end of the value range.
    #[arg(long, allow_negative_numbers = true)]
    min: Option<f64>,

    /// Upper end of the value range.
    #[arg(long, allow_negative_numbers = true)]
    max: Option<f64>,

    /// Comparison values, one per metric in chart order.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    compare: Vec<f64>,

    /// Comparison color as #RRGGBB (default #3498db).
    #[arg(long)]
    compare_color: Option<Rgba>,

    /// Highlight color as #RRGGBB.
    #[arg(long)]
    highlight: Option<Rgba>,

    /// Straight outer edges instead of arcs.
    #[arg(long)]
    straight: bool,

    /// Hide the overall score badge.
    #[arg(long)]
    no_overall: bool,

    /// Leave the background transparent.
    #[arg(long)]
    transparent: bool,

    /// Also write an SVG next to the PNG.
    #[arg(long)]
    svg: bool,

    #[arg(short, long, default_value = "target/out")]
    out: PathBuf,
}

/// What to chart and the defaults that go with it.
struct Input {
    series: MetricSeries,
    badge: Option<f64>,
    title: &'static str,
    subtitle: Option<String>,
    theme: Theme,
    file_stem: &'static str,
}

fn main() -> Result<()> {
    init_tracing()?;
    let args = Args::parse();

    if let Some(path) = &args.template {
        write_template(path)?;
        info!(path = %path.display(), "wrote wallet CSV template");
        return Ok(());
    }
    if let Some(path) = &args.pairs_template {
        write_pairs_template(path)?;
        info!(path = %path.display(), "wrote Metric/Value CSV template");
        return Ok(());
    }

    let settings = match &args.settings {
        Some(path) => ChartSettings::from_path(path)?,
        None => ChartSettings::default(),
    };

    let input = match pairs_input(&args)? {
        Some(input) => input,
        None => wallet_input(&args, &settings)?,
    };

    let theme = settings.theme_or(args.preset.as_deref(), input.theme);
    let mut request = settings.request(input.series, &theme)?;
    if let Some(c) = args.highlight {
        request.style.highlight_color = c;
        if let ColorSpec::Gradient { end, .. } = &mut request.colors {
            *end = c;
        }
    }
    if args.straight {
        request.style.edges = EdgeStyle::Straight;
    }
    if args.min.is_some() || args.max.is_some() {
        let (min, max) = (args.min.unwrap_or(request.range.min()), args.max.unwrap_or(request.range.max()));
        request.range = ValueRange::try_new(min, max).context("invalid --min/--max")?;
    }
    if !args.compare.is_empty() {
        let color = args
            .compare_color
            .or(settings.comparison.as_ref().map(|c| c.color))
            .unwrap_or_else(default_comparison_color);
        request = request.with_comparison(args.compare.clone(), color);
    }

    let title = args.title.clone().or_else(|| settings.title.clone()).unwrap_or_else(|| input.title.to_string());
    let subtitle = args.subtitle.clone().or_else(|| settings.subtitle.clone()).or(input.subtitle);
    request = request.with_title(title, subtitle);
    if let Some(score) = input.badge {
        request = request.with_center_badge(score);
    }

    let scene = request.build().context("invalid chart configuration")?;

    let opts = RenderOptions { transparent: args.transparent, ..RenderOptions::default() };
    let renderer = SkiaRenderer::new();
    let png = args.out.join(format!("{}.png", input.file_stem));
    renderer.render_to_png(&scene, &opts, &png)?;
    if args.svg {
        renderer.render_to_svg(&scene, &opts, png.with_extension("svg"))?;
    }
    Ok(())
}

/// `--pairs` or `--example` input, if either was given.
fn pairs_input(args: &Args) -> Result<Option<Input>> {
    let series = match (&args.pairs, &args.example) {
        (Some(path), _) => load_pairs(path)?,
        (None, Some(name)) => match example(name) {
            Some(series) => series,
            None => bail!("unknown example '{name}' (available: player, team)"),
        },
        (None, None) => return Ok(None),
    };
    info!(metrics = series.len(), "metric pairs ready");
    Ok(Some(Input {
        series,
        badge: None,
        title: "Player Performance Analysis",
        subtitle: None,
        theme: Theme::pizza_dark(),
        file_stem: "pizza_chart",
    }))
}

fn wallet_input(args: &Args, settings: &ChartSettings) -> Result<Input> {
    let data = if args.demo {
        WalletDataset::demo()
    } else {
        WalletDataset::from_path(&args.dataset)
            .with_context(|| format!("failed to load CSV '{}'", args.dataset.display()))?
    };
    info!(wallets = data.wallets.len(), metrics = data.columns.len(), "dataset ready");

    let wallet = match &args.wallet {
        Some(query) => {
            let found = data.search(query);
            if found.len() > 1 {
                info!(matches = found.len(), query = %query, "multiple wallets match; using the first");
            }
            match found.first() {
                Some(w) => *w,
                None => bail!("no wallet matches '{query}'"),
            }
        }
        None => match data.wallets.first() {
            Some(w) => w,
            None => bail!("dataset has no wallets"),
        },
    };
    info!(address = %wallet.address, "selected wallet");

    let columns = data.select_columns(&args.metrics)?;
    let series = data.series_for(wallet, &columns)?;

    let badge = if settings.show_overall_score() && !args.no_overall {
        if wallet.overall.is_none() {
            warn!(address = %wallet.address, "no overall_score; badge skipped");
        }
        wallet.overall
    } else {
        None
    };

    Ok(Input {
        series,
        badge,
        title: "Wallet Analysis",
        subtitle: Some(format!("Address: {}...", wallet.address.chars().take(10).collect::<String>())),
        theme: Theme::wallet_dark(),
        file_stem: "wallet_score",
    })
}
