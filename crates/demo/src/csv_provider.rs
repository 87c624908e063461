// File: crates/demo/src/csv_provider.rs
// Summary: OHLCV CSV loader (date/open/high/low/close/volume) behind the CandleProvider trait.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use stockscope_chart::{Candle, CandleProvider, ChartError, ChartResult, StaticProvider, Timeframe};

/// Loads the file on first use and serves the latest periods from it.
pub struct CsvProvider {
    path: PathBuf,
    loaded: Option<StaticProvider>,
}

impl CsvProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), loaded: None }
    }
}

impl CandleProvider for CsvProvider {
    fn candles(&mut self, timeframe: Timeframe) -> ChartResult<Vec<Candle>> {
        if self.loaded.is_none() {
            let candles = load_ohlcv_csv(&self.path)
                .map_err(|e| ChartError::Provider(format!("{}: {e:#}", self.path.display())))?;
            tracing::info!(path = %self.path.display(), rows = candles.len(), "loaded candles");
            self.loaded = Some(StaticProvider::new(candles));
        }
        match self.loaded.as_mut() {
            Some(provider) => provider.candles(timeframe),
            None => Ok(Vec::new()),
        }
    }
}

/// Rows sorted by date, oldest first. Rows with a bad date or price are skipped with a warning.
pub fn load_ohlcv_csv(path: &Path) -> Result<Vec<Candle>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));

    let i_date = idx(&["date", "time", "timestamp", "datetime", "open_time"]);
    let (Some(i_open), Some(i_high), Some(i_low), Some(i_close)) = (
        idx(&["open", "o"]),
        idx(&["high", "h"]),
        idx(&["low", "l"]),
        idx(&["close", "c", "adj_close"]),
    ) else {
        bail!("missing one of open/high/low/close columns (headers: {headers:?})");
    };
    let i_volume = idx(&["volume", "v", "vol"]);

    let mut rows: Vec<(Option<NaiveDateTime>, Candle)> = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {}", line + 2))?;
        let num = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        let date = i_date.and_then(|i| rec.get(i)).and_then(parse_date);
        let volume = i_volume.and_then(num).unwrap_or(0.0);
        let (Some(o), Some(h), Some(l), Some(c)) = (num(i_open), num(i_high), num(i_low), num(i_close)) else {
            tracing::warn!(row = line + 2, "skipping row with unparsable prices");
            continue;
        };
        match Candle::try_new(o, h, l, c, volume) {
            Ok(candle) => rows.push((date, candle)),
            Err(e) => tracing::warn!(row = line + 2, error = %e, "skipping row"),
        }
    }

    // Undated files keep their row order.
    if rows.iter().all(|(d, _)| d.is_some()) {
        rows.sort_by_key(|(d, _)| *d);
    }
    Ok(rows.into_iter().map(|(_, c)| c).collect())
}

/// `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`, RFC 3339, or epoch seconds/milliseconds.
fn parse_date(s: &str) -> Option<NaiveDateTime> {
    if s.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    let n = s.parse::<i64>().ok()?;
    // epoch ms -> sec
    let secs = if n > 10_i64.pow(12) { n / 1000 } else { n };
    DateTime::from_timestamp(secs, 0).map(|dt| dt.naive_utc())
}
