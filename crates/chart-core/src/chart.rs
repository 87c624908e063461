// File: crates/chart-core/src/chart.rs
// Summary: Chart composer: domain computation, grid-then-series drawing, DPR-aware surface rendering and PNG export.

use anyhow::{anyhow, Result};

use crate::format::NumberFormat;
use crate::geometry::Bounds;
use crate::grid::GridRenderer;
use crate::painter::{Painter, SkiaPainter};
use crate::scale::ScaleMapping;
use crate::series::{BarSeries, CandlestickSeries, LineSeries, Series, SeriesRenderer};
use crate::surface::ChartSurface;
use crate::theme::Theme;
use crate::types::{Candle, DataPoint, Viewport};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Text is skipped entirely when false (deterministic pixel tests).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::light(), draw_labels: true }
    }
}

/// Text alternative the host pairs with the rendered surface. Never painted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AltText {
    pub label: String,
    pub role: &'static str,
}

impl AltText {
    pub fn image(label: impl Into<String>) -> Self {
        Self { label: label.into(), role: "img" }
    }
}

/// Everything a grid or series needs for one render call.
pub struct PlotFrame<'a> {
    pub viewport: Viewport,
    /// Area covered by the value mapping.
    pub plot: Bounds,
    /// Inverted y mapping over `plot`.
    pub values: ScaleMapping,
    pub theme: &'a Theme,
    pub draw_labels: bool,
}

pub struct Chart {
    pub series: Vec<Series>,
    pub grid: GridRenderer,
    /// Fixed value domain. Defaults to the union of the series' extents.
    pub domain: Option<(f64, f64)>,
    pub alt_text: Option<AltText>,
}

impl Chart {
    pub fn new() -> Self {
        Self { series: Vec::new(), grid: GridRenderer::default(), domain: None, alt_text: None }
    }

    /// Line chart with four grouped-integer grid steps.
    pub fn line(points: Vec<DataPoint>) -> Self {
        let mut chart = Self::new();
        chart.add_series(LineSeries::new(points));
        chart
    }

    /// Bar chart with four one-decimal grid steps.
    pub fn bars(points: Vec<DataPoint>) -> Self {
        let mut chart = Self::new().with_grid(GridRenderer::new(4, NumberFormat::fixed(1)));
        chart.add_series(BarSeries::new(points));
        chart
    }

    /// Price candlesticks with a volume strip and five rupee-labelled grid steps.
    pub fn candlestick(candles: Vec<Candle>) -> Self {
        let grid = GridRenderer::new(5, NumberFormat::rupees()).with_label_gap(10.0).with_font_size(12.0);
        let mut chart = Self::new().with_grid(grid);
        chart.add_series(CandlestickSeries::new(candles));
        chart
    }

    pub fn add_series(&mut self, series: impl Into<Series>) {
        self.series.push(series.into());
    }

    pub fn with_grid(mut self, grid: GridRenderer) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.domain = Some((min, max));
        self
    }

    pub fn with_alt_text(mut self, alt: AltText) -> Self {
        self.alt_text = Some(alt);
        self
    }

    /// Union of all series extents. `None` when every series is empty.
    pub fn data_domain(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .filter_map(|s| s.domain())
            .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)))
    }

    /// Plot rectangle inside `viewport` after padding and any space series reserve below it.
    pub fn plot_area(&self, viewport: &Viewport) -> Bounds {
        let reserved = self.series.iter().map(|s| s.reserved_bottom()).fold(0.0_f32, f32::max);
        let p = viewport.padding;
        Bounds::from_ltrb(p, p, viewport.width - p, viewport.height - p - reserved)
    }

    /// Mapping and layout for one render call, or `None` when nothing would be drawn.
    pub fn frame<'a>(&self, viewport: Viewport, opts: &'a RenderOptions) -> Option<PlotFrame<'a>> {
        if !viewport.is_drawable() {
            return None;
        }
        let data = self.data_domain()?;
        let (lo, hi) = self.domain.unwrap_or(data);
        let plot = self.plot_area(&viewport);
        if plot.is_empty() {
            return None;
        }
        Some(PlotFrame {
            viewport,
            plot,
            values: ScaleMapping::new((lo, hi), (plot.top, plot.bottom)).inverted(),
            theme: &opts.theme,
            draw_labels: opts.draw_labels,
        })
    }

    /// Full repaint through any painter: clear, grid, then every series in order.
    /// Undrawable viewports are ignored; empty data leaves only the cleared background.
    pub fn render_to(&self, painter: &mut dyn Painter, viewport: Viewport, opts: &RenderOptions) {
        if !viewport.is_drawable() {
            return;
        }
        painter.clear(opts.theme.background);
        let Some(frame) = self.frame(viewport, opts) else { return };

        self.grid.render(painter, &frame);
        for s in &self.series {
            s.render(painter, &frame);
        }
        tracing::debug!(
            series = self.series.len(),
            width = viewport.width,
            height = viewport.height,
            domain_min = frame.values.domain_min,
            domain_max = frame.values.domain_max,
            "chart rendered"
        );
    }

    /// Paint onto a host surface. A surface that is not mounted or has zero size is left alone.
    pub fn render(&self, surface: &mut ChartSurface, opts: &RenderOptions) {
        let viewport = surface.viewport();
        surface.repaint(|canvas, shaper| {
            let mut painter = SkiaPainter::new(canvas, shaper);
            self.render_to(&mut painter, viewport, opts);
        });
    }

    /// Render into a fresh surface and return PNG bytes.
    pub fn render_to_png_bytes(&self, viewport: Viewport, opts: &RenderOptions) -> Result<Vec<u8>> {
        if !viewport.is_drawable() {
            return Err(anyhow!("cannot export a {}x{} viewport", viewport.width, viewport.height));
        }
        let mut surface = ChartSurface::new(viewport);
        self.render(&mut surface, opts);
        surface.encode_png()
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        viewport: Viewport,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(viewport, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}
