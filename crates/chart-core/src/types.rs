// File: crates/chart-core/src/types.rs
// Summary: Shared data types (data points, OHLCV candles, viewport) and default sizes.

use crate::error::{ChartError, ChartResult};

/// Default logical surface width in pixels.
pub const WIDTH: f32 = 600.0;
/// Default logical surface height in pixels.
pub const HEIGHT: f32 = 250.0;
/// Default plot padding on every side, in logical pixels.
pub const PADDING: f32 = 40.0;

/// One labelled value of a line or bar series.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    /// Construct without validation; callers own the finiteness invariant.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }

    /// Construct, rejecting NaN and infinities.
    pub fn try_new(label: impl Into<String>, value: f64) -> ChartResult<Self> {
        let label = label.into();
        if !value.is_finite() {
            return Err(ChartError::NonFiniteValue { label, value });
        }
        Ok(Self { label, value })
    }
}

/// Build a series from bare values with `FY20`, `FY21`, ... category labels.
pub fn fiscal_years(first_year: u32, values: &[f64]) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| DataPoint::new(format!("FY{}", first_year + i as u32), v))
        .collect()
}

/// One trading period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// Try to construct a candle enforcing OHLC invariants:
    /// low <= min(open,close), high >= max(open,close), everything finite and non-negative.
    pub fn try_new(open: f64, high: f64, low: f64, close: f64, volume: f64) -> ChartResult<Self> {
        if ![open, high, low, close, volume].iter().all(|v| v.is_finite()) {
            return Err(ChartError::InvalidCandle("non-finite field"));
        }
        if low < 0.0 || volume < 0.0 {
            return Err(ChartError::InvalidCandle("negative low or volume"));
        }
        if low > open.min(close) {
            return Err(ChartError::InvalidCandle("low above min(open,close)"));
        }
        if high < open.max(close) {
            return Err(ChartError::InvalidCandle("high below max(open,close)"));
        }
        Ok(Self { open, high, low, close, volume })
    }

    /// Strictly rising period. Dojis count as down.
    #[inline]
    pub fn is_up(&self) -> bool {
        self.close > self.open
    }
}

/// Logical drawing area of one render call.
/// Contract: measured from the host surface; never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
    pub padding: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height, device_pixel_ratio: 1.0, padding: PADDING }
    }

    pub const fn with_device_pixel_ratio(mut self, dpr: f32) -> Self {
        self.device_pixel_ratio = dpr;
        self
    }

    pub const fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// A zero, negative or non-finite size means the host has no surface to draw on yet.
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
            && self.device_pixel_ratio.is_finite()
            && self.device_pixel_ratio > 0.0
    }

    /// Backing buffer size in physical pixels.
    pub fn physical_size(&self) -> (i32, i32) {
        (
            (self.width * self.device_pixel_ratio).round() as i32,
            (self.height * self.device_pixel_ratio).round() as i32,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}
