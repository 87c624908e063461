// File: crates/chart-core/src/series.rs
// Summary: Line, bar and candlestick (+volume) marks behind one SeriesRenderer capability.

use skia_safe as skia;

use crate::chart::PlotFrame;
use crate::format::{LabelFormatter, NumberFormat};
use crate::geometry::{clamp, Bounds, Point};
use crate::painter::{LabelStyle, Painter, Stroke, TextAlign};
use crate::scale::{extent, index_positions, BandLayout};
use crate::types::{Candle, DataPoint};

/// Distance of category labels above the bottom edge of the surface.
const CATEGORY_LABEL_INSET: f32 = 10.0;

/// A mark type that can be drawn into a plot frame.
pub trait SeriesRenderer {
    /// Value extent the grid and mapping must cover. `None` when there is nothing to draw.
    fn domain(&self) -> Option<(f64, f64)>;

    /// Logical pixels this series needs below the value plot (e.g. a volume panel).
    fn reserved_bottom(&self) -> f32 {
        0.0
    }

    fn render(&self, painter: &mut dyn Painter, frame: &PlotFrame);
}

fn category_label(painter: &mut dyn Painter, frame: &PlotFrame, text: &str, x: f32) {
    if !frame.draw_labels {
        return;
    }
    let style = LabelStyle::new(11.0, frame.theme.axis_label, TextAlign::Center);
    painter.text(text, Point::new(x, frame.viewport.height - CATEGORY_LABEL_INSET), &style);
}

// ---- line ---------------------------------------------------------------------

pub struct LineSeries {
    pub points: Vec<DataPoint>,
    pub stroke_width: f32,
    pub marker_radius: f32,
    /// Overrides the theme's line colour.
    pub color: Option<skia::Color>,
}

impl LineSeries {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points, stroke_width: 3.0, marker_radius: 5.0, color: None }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Marker centres in draw order.
    pub fn positions(&self, frame: &PlotFrame) -> Vec<Point> {
        let plot = frame.plot;
        index_positions(self.points.len(), (plot.left, plot.right))
            .into_iter()
            .zip(&self.points)
            .map(|(x, p)| Point::new(x, frame.values.map(p.value)))
            .collect()
    }
}

impl SeriesRenderer for LineSeries {
    fn domain(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().map(|p| p.value))
    }

    fn render(&self, painter: &mut dyn Painter, frame: &PlotFrame) {
        if self.points.is_empty() {
            return;
        }
        let color = self.color.unwrap_or(frame.theme.line_stroke);
        let positions = self.positions(frame);

        painter.polyline(&positions, Stroke::new(color, self.stroke_width));
        for (pos, point) in positions.iter().zip(&self.points) {
            painter.fill_circle(*pos, self.marker_radius, color);
            category_label(painter, frame, &point.label, pos.x);
        }
    }
}

// ---- bar ----------------------------------------------------------------------

pub struct BarSeries {
    pub points: Vec<DataPoint>,
    /// Share of the category slot covered by the bar.
    pub bar_fraction: f32,
    pub value_formatter: Box<dyn LabelFormatter>,
}

impl BarSeries {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points, bar_fraction: 0.6, value_formatter: Box::new(NumberFormat::fixed(1)) }
    }

    pub fn with_value_formatter(mut self, formatter: impl LabelFormatter + 'static) -> Self {
        self.value_formatter = Box::new(formatter);
        self
    }

    fn max_value(&self) -> f64 {
        extent(self.points.iter().map(|p| p.value)).map_or(0.0, |(_, hi)| hi)
    }

    /// Bar rectangles in category order, measured on the frame's value mapping.
    /// Bars grow up from zero (or the domain floor); negative, non-finite or
    /// out-of-domain values are clamped, and a degenerate domain gives zero heights.
    pub fn bars(&self, frame: &PlotFrame) -> Vec<Bounds> {
        let plot = frame.plot;
        let Some(band) = BandLayout::new(plot.left, plot.right, self.points.len()) else {
            return Vec::new();
        };
        let (lo, hi) = (frame.values.domain_min, frame.values.domain_max);
        let flat = !(hi - lo).is_finite() || hi <= lo;
        let floor = clamp(0.0, lo, hi);
        let base = if flat { plot.bottom } else { frame.values.map(floor) };
        let width = band.slot * self.bar_fraction;
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let height = if flat || !p.value.is_finite() {
                    0.0
                } else {
                    (base - frame.values.map(clamp(p.value, floor, hi))).max(0.0)
                };
                Bounds::from_ltwh(band.mark_left(i, self.bar_fraction), base - height, width, height)
            })
            .collect()
    }
}

impl SeriesRenderer for BarSeries {
    fn domain(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        Some((0.0, self.max_value().max(0.0)))
    }

    fn render(&self, painter: &mut dyn Painter, frame: &PlotFrame) {
        let value_style = LabelStyle::new(12.0, frame.theme.value_label, TextAlign::Center).bold();
        for (i, (rect, point)) in self.bars(frame).into_iter().zip(&self.points).enumerate() {
            painter.fill_rect(rect, frame.theme.palette_color(i));
            let center = (rect.left + rect.right) * 0.5;
            if frame.draw_labels {
                let text = self.value_formatter.format_label(point.value);
                painter.text(&text, Point::new(center, rect.top - 5.0), &value_style);
            }
            category_label(painter, frame, &point.label, center);
        }
    }
}

// ---- candlestick --------------------------------------------------------------

/// Fixed-height volume strip under the price panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumePanel {
    pub height: f32,
    /// Space between the price plot and the volume strip; holds the caption.
    pub gap: f32,
}

impl Default for VolumePanel {
    fn default() -> Self {
        Self { height: 60.0, gap: 20.0 }
    }
}

/// Geometry of one drawn candle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandleMarks {
    pub wick: (Point, Point),
    pub body: Bounds,
    pub volume: Option<Bounds>,
    pub up: bool,
}

pub struct CandlestickSeries {
    pub candles: Vec<Candle>,
    pub body_fraction: f32,
    pub volume: Option<VolumePanel>,
}

impl CandlestickSeries {
    pub fn new(candles: Vec<Candle>) -> Self {
        Self { candles, body_fraction: 0.6, volume: Some(VolumePanel::default()) }
    }

    pub fn without_volume(mut self) -> Self {
        self.volume = None;
        self
    }

    pub fn marks(&self, frame: &PlotFrame) -> Vec<CandleMarks> {
        let plot = frame.plot;
        let Some(band) = BandLayout::new(plot.left, plot.right, self.candles.len()) else {
            return Vec::new();
        };
        let y = |v: f64| frame.values.map(v);
        let body_w = (band.slot * self.body_fraction).max(1.0);
        let volume_w = band.slot * self.body_fraction;
        let max_volume = extent(self.candles.iter().map(|c| c.volume)).map_or(0.0, |(_, hi)| hi);

        self.candles
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let x = band.center(i);
                let (y_open, y_close) = (y(c.open), y(c.close));
                let top = y_open.min(y_close);
                // Doji bodies stay one pixel tall.
                let body_h = (y_open - y_close).abs().max(1.0);
                let volume = self.volume.map(|panel| {
                    let frac = if max_volume > 0.0 { (c.volume / max_volume) as f32 } else { 0.0 };
                    let h = frac * panel.height;
                    let panel_bottom = plot.bottom + panel.gap + panel.height;
                    Bounds::from_ltwh(x - volume_w * 0.5, panel_bottom - h, volume_w, h)
                });
                CandleMarks {
                    wick: (Point::new(x, y(c.high)), Point::new(x, y(c.low))),
                    body: Bounds::from_ltwh(x - body_w * 0.5, top, body_w, body_h),
                    volume,
                    up: c.is_up(),
                }
            })
            .collect()
    }
}

impl SeriesRenderer for CandlestickSeries {
    fn domain(&self) -> Option<(f64, f64)> {
        extent(self.candles.iter().flat_map(|c| [c.low, c.high]))
    }

    fn reserved_bottom(&self) -> f32 {
        self.volume.map_or(0.0, |p| p.height + p.gap)
    }

    fn render(&self, painter: &mut dyn Painter, frame: &PlotFrame) {
        let marks = self.marks(frame);
        for m in &marks {
            let color = frame.theme.direction(m.up);
            painter.line(m.wick.0, m.wick.1, Stroke::new(color, 1.0));
            painter.fill_rect(m.body, color);
        }

        let Some(panel) = self.volume else { return };
        for m in &marks {
            if let Some(bar) = m.volume {
                painter.fill_rect(bar, frame.theme.direction(m.up).with_a(frame.theme.volume_alpha));
            }
        }
        if frame.draw_labels && !marks.is_empty() {
            let style = LabelStyle::new(12.0, frame.theme.axis_label, TextAlign::Left).bold();
            let caption_y = frame.plot.bottom + panel.gap - 5.0;
            painter.text("Volume", Point::new(frame.plot.left, caption_y), &style);
        }
    }
}

// ---- dispatch -----------------------------------------------------------------

pub enum Series {
    Line(LineSeries),
    Bar(BarSeries),
    Candlestick(CandlestickSeries),
}

impl Series {
    fn inner(&self) -> &dyn SeriesRenderer {
        match self {
            Series::Line(s) => s,
            Series::Bar(s) => s,
            Series::Candlestick(s) => s,
        }
    }
}

impl SeriesRenderer for Series {
    fn domain(&self) -> Option<(f64, f64)> {
        self.inner().domain()
    }

    fn reserved_bottom(&self) -> f32 {
        self.inner().reserved_bottom()
    }

    fn render(&self, painter: &mut dyn Painter, frame: &PlotFrame) {
        tracing::trace!(domain = ?self.domain(), "render series");
        self.inner().render(painter, frame)
    }
}

impl From<LineSeries> for Series {
    fn from(s: LineSeries) -> Self {
        Series::Line(s)
    }
}

impl From<BarSeries> for Series {
    fn from(s: BarSeries) -> Self {
        Series::Bar(s)
    }
}

impl From<CandlestickSeries> for Series {
    fn from(s: CandlestickSeries) -> Self {
        Series::Candlestick(s)
    }
}
