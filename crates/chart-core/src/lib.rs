// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart rendering pipeline, providers and dashboard state.

pub mod chart;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod painter;
pub mod provider;
pub mod scale;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{AltText, Chart, RenderOptions};
pub use error::{ChartError, ChartResult};
pub use format::{Grouping, LabelFormatter, NumberFormat};
pub use grid::GridRenderer;
pub use painter::{DrawCommand, Painter, RecordingPainter, SkiaPainter};
pub use provider::{CandleProvider, RandomWalkProvider, StaticProvider, Timeframe};
pub use scale::ScaleMapping;
pub use series::{BarSeries, CandlestickSeries, LineSeries, Series, SeriesRenderer};
pub use surface::ChartSurface;
pub use text::TextShaper;
pub use theme::Theme;
pub use types::{Candle, DataPoint, Viewport};
