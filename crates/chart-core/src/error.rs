// File: crates/chart-core/src/error.rs
// Summary: Typed errors for data construction, timeframe parsing and candle providers.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid candle: {0}")]
    InvalidCandle(&'static str),

    #[error("value for `{label}` is not finite: {value}")]
    NonFiniteValue { label: String, value: f64 },

    #[error("unknown timeframe token `{0}` (expected 1M, 3M, 1Y, 5Y or Max)")]
    UnknownTimeframe(String),

    #[error("candle provider failed: {0}")]
    Provider(String),
}
