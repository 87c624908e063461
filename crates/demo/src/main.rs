// File: crates/demo/src/main.rs
// Summary: Renders the dashboard charts (revenue, margins, ratios, price per timeframe) to PNGs and prints the view-state summary.
//
// Usage: stockscope-demo [OUT_DIR] [PRICES.csv]
// Env:   STOCKSCOPE_THEME=light|dark|high-contrast-dark, STOCKSCOPE_SEED=<u64>, RUST_LOG=<filter>

mod csv_provider;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use stockscope_chart::dashboard::{Action, DashboardState, RiskLevel, ScoreBand, SearchAction, Sentiment, SortField};
use stockscope_chart::theme;
use stockscope_chart::types::fiscal_years;
use stockscope_chart::{
    AltText, CandleProvider, Chart, DataPoint, RandomWalkProvider, RenderOptions, Timeframe, Viewport,
};
use tracing_subscriber::EnvFilter;

use crate::csv_provider::CsvProvider;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();
}

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/out".to_string()));
    let csv_path = args.next().map(PathBuf::from);

    let theme = std::env::var("STOCKSCOPE_THEME").map(|name| theme::find(&name)).unwrap_or_default();
    let opts = RenderOptions { theme, ..RenderOptions::default() };
    tracing::info!(theme = theme.name, out = %out_dir.display(), "rendering dashboard charts");

    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    // 1) Revenue trend
    let revenue = Chart::line(fiscal_years(20, &[45_000.0, 52_000.0, 61_000.0, 73_000.0, 84_000.0]))
        .with_alt_text(AltText::image("Revenue trend chart showing growth from FY20 to FY24"));
    write_chart(&revenue, Viewport::default(), &opts, &out_dir.join("revenue.png"))?;

    // 2) Profit margins
    let margins = Chart::bars(vec![
        DataPoint::new("Gross", 42.0),
        DataPoint::new("Operating", 18.0),
        DataPoint::new("Net", 12.0),
    ])
    .with_alt_text(AltText::image("Profit margins: gross, operating and net"));
    write_chart(&margins, Viewport::default(), &opts, &out_dir.join("margins.png"))?;

    // 3) Key ratios
    let ratios = Chart::bars(vec![DataPoint::new("ROE", 14.2), DataPoint::new("D/E", 0.45)])
        .with_alt_text(AltText::image("ROE and Debt to Equity ratio"));
    write_chart(&ratios, Viewport::default(), &opts, &out_dir.join("ratios.png"))?;

    // 4) Price history, one file per timeframe
    let mut provider = price_provider(csv_path.as_deref())?;
    let price_viewport = Viewport::new(800.0, 400.0).with_device_pixel_ratio(2.0);
    for tf in Timeframe::ALL {
        let candles = provider.candles(tf).with_context(|| format!("loading {tf} candles"))?;
        if candles.is_empty() {
            tracing::warn!(timeframe = %tf, "no candles; skipping price chart");
            continue;
        }
        let count = candles.len();
        let chart = Chart::candlestick(candles).with_alt_text(AltText::image(format!("Stock price chart, {tf}")));
        let path = out_dir.join(format!("price_{}.png", tf.token().to_lowercase()));
        write_chart(&chart, price_viewport, &opts, &path)?;
        tracing::info!(timeframe = %tf, candles = count, "price chart done");
    }

    print_dashboard_summary();
    Ok(())
}

fn price_provider(csv_path: Option<&Path>) -> Result<Box<dyn CandleProvider>> {
    if let Some(path) = csv_path {
        anyhow::ensure!(path.exists(), "file not found: {}", path.display());
        return Ok(Box::new(CsvProvider::new(path)));
    }
    let provider = match std::env::var("STOCKSCOPE_SEED") {
        Ok(raw) => {
            let seed: u64 = raw.trim().parse().with_context(|| format!("STOCKSCOPE_SEED={raw:?} is not a u64"))?;
            tracing::info!(seed, "seeded random walk");
            RandomWalkProvider::seeded(seed)
        }
        Err(_) => RandomWalkProvider::from_entropy(),
    };
    Ok(Box::new(provider))
}

fn write_chart(chart: &Chart, viewport: Viewport, opts: &RenderOptions, path: &Path) -> Result<()> {
    chart
        .render_to_png(viewport, opts, path)
        .with_context(|| format!("rendering {}", path.display()))?;
    let alt = chart.alt_text.as_ref().map_or("", |a| a.label.as_str());
    println!("Wrote {} ({alt})", path.display());
    Ok(())
}

/// Walks the view state through a few host actions and prints what the panels would show.
fn print_dashboard_summary() {
    let score = 78;
    let band = ScoreBand::from_score(score);
    println!("\nMultibagger score {score}/100: {}", band.label());

    let state = [
        Action::Search(SearchAction::SetQuery("hdfc".into())),
        Action::Search(SearchAction::FocusNext),
        Action::Search(SearchAction::Submit),
        Action::SetTimeframe(Timeframe::FiveYears),
        Action::ToggleRisk(0),
        Action::SetSort(SortField::Revenue),
    ]
    .into_iter()
    .fold(DashboardState::default(), |state, action| {
        if action.redraws_price_chart() {
            tracing::debug!(?action, "price chart would redraw");
        }
        state.apply(action)
    });
    println!("{} | timeframe {} | risk row 0 expanded: {}", state.symbol, state.timeframe, state.is_risk_expanded(0));

    let legend: Vec<&str> = RiskLevel::LEGEND_ORDER.iter().map(|r| r.short_label()).collect();
    println!("Risk levels: {}", legend.join(" / "));
    for sentiment in [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative] {
        println!("  news tag {:<8} icon {:?}", sentiment.label(), sentiment.icon());
    }

    let headers: Vec<&str> = SortField::ALL.iter().map(|f| f.header()).collect();
    println!("\n{}", headers.join(" | "));
    let page = state.table.view(&state.history);
    for row in &page.rows {
        println!("{}", row.cells().join(" | "));
    }
    println!("{} (page {} of {})", page.summary(), page.page, page.total_pages);
}
