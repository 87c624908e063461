// File: crates/chart-core/src/provider.rs
// Summary: Timeframe tokens and pluggable OHLCV candle sources (seeded random walk, static data).

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ChartError, ChartResult};
use crate::types::Candle;

/// Chart window picked in the host UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Timeframe {
    OneMonth,
    ThreeMonths,
    #[default]
    OneYear,
    FiveYears,
    Max,
}

impl Timeframe {
    pub const ALL: [Timeframe; 5] =
        [Timeframe::OneMonth, Timeframe::ThreeMonths, Timeframe::OneYear, Timeframe::FiveYears, Timeframe::Max];

    /// Trading periods (sessions) in the window.
    pub const fn period_count(self) -> usize {
        match self {
            Timeframe::OneMonth => 30,
            Timeframe::ThreeMonths => 90,
            Timeframe::OneYear => 252,
            Timeframe::FiveYears => 1_260,
            Timeframe::Max => 2_520,
        }
    }

    /// Bucketing of the first dashboard release, where 5Y and Max fell back to one year.
    pub const fn legacy_period_count(self) -> usize {
        match self {
            Timeframe::OneMonth => 30,
            Timeframe::ThreeMonths => 90,
            Timeframe::OneYear | Timeframe::FiveYears | Timeframe::Max => 252,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1M",
            Timeframe::ThreeMonths => "3M",
            Timeframe::OneYear => "1Y",
            Timeframe::FiveYears => "5Y",
            Timeframe::Max => "Max",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Timeframe {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Timeframe::ALL
            .into_iter()
            .find(|tf| tf.token().eq_ignore_ascii_case(token))
            .ok_or_else(|| ChartError::UnknownTimeframe(token.to_string()))
    }
}

/// Source of price history for the candlestick chart.
pub trait CandleProvider {
    /// Oldest first, at most `timeframe.period_count()` candles.
    fn candles(&mut self, timeframe: Timeframe) -> ChartResult<Vec<Candle>>;
}

/// Synthetic random walk: each period opens near the previous close.
pub struct RandomWalkProvider {
    rng: StdRng,
    pub base_price: f64,
    /// Full width of the open jitter around the previous close.
    pub open_jitter: f64,
    /// Full width of the open→close move.
    pub close_move: f64,
    /// Maximum wick extension beyond the body.
    pub wick: f64,
    pub max_volume: f64,
}

impl RandomWalkProvider {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self { rng, base_price: 2_700.0, open_jitter: 50.0, close_move: 100.0, wick: 30.0, max_volume: 1_000_000.0 }
    }

    pub fn with_base_price(mut self, price: f64) -> Self {
        self.base_price = price;
        self
    }

    fn next_candle(&mut self, prev_close: f64) -> Candle {
        let rng = &mut self.rng;
        let open = (prev_close + (rng.random::<f64>() - 0.5) * self.open_jitter).max(0.0);
        let close = (open + (rng.random::<f64>() - 0.5) * self.close_move).max(0.0);
        let high = open.max(close) + rng.random::<f64>() * self.wick;
        let low = (open.min(close) - rng.random::<f64>() * self.wick).max(0.0);
        let volume = rng.random::<f64>() * self.max_volume;
        Candle { open, high, low, close, volume }
    }
}

impl CandleProvider for RandomWalkProvider {
    fn candles(&mut self, timeframe: Timeframe) -> ChartResult<Vec<Candle>> {
        let n = timeframe.period_count();
        let mut out = Vec::with_capacity(n);
        let mut prev_close = self.base_price;
        for _ in 0..n {
            let candle = self.next_candle(prev_close);
            prev_close = candle.close;
            out.push(candle);
        }
        tracing::debug!(%timeframe, count = out.len(), "generated random-walk candles");
        Ok(out)
    }
}

/// Fixed history (e.g. loaded from a file); serves the most recent periods.
pub struct StaticProvider {
    candles: Vec<Candle>,
}

impl StaticProvider {
    pub fn new(candles: Vec<Candle>) -> Self {
        Self { candles }
    }
}

impl CandleProvider for StaticProvider {
    fn candles(&mut self, timeframe: Timeframe) -> ChartResult<Vec<Candle>> {
        let n = timeframe.period_count().min(self.candles.len());
        Ok(self.candles[self.candles.len() - n..].to_vec())
    }
}
