// File: crates/chart-core/src/grid.rs
// Summary: Horizontal guide lines at equal value divisions, each labelled through a formatter.

use crate::chart::PlotFrame;
use crate::format::{LabelFormatter, NumberFormat};
use crate::geometry::Point;
use crate::painter::{LabelStyle, Painter, Stroke, TextAlign};

/// `steps + 1` evenly spaced values from `start` to `end` inclusive. Zero steps yields `[start]`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps == 0 {
        return vec![start];
    }
    let step = (end - start) / steps as f64;
    (0..=steps).map(|i| start + step * i as f64).collect()
}

pub struct GridRenderer {
    pub step_count: usize,
    pub formatter: Box<dyn LabelFormatter>,
    /// Distance between the label's right edge and the plot's left edge.
    pub label_gap: f32,
    pub font_size: f32,
}

impl GridRenderer {
    pub fn new(step_count: usize, formatter: impl LabelFormatter + 'static) -> Self {
        Self { step_count, formatter: Box::new(formatter), label_gap: 5.0, font_size: 11.0 }
    }

    pub fn with_label_gap(mut self, gap: f32) -> Self {
        self.label_gap = gap;
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// (pixel y, domain value) of every guide line, top to bottom.
    pub fn guides(&self, frame: &PlotFrame) -> Vec<(f32, f64)> {
        let plot = frame.plot;
        let ys = linspace(plot.top as f64, plot.bottom as f64, self.step_count);
        let values = linspace(frame.values.domain_max, frame.values.domain_min, self.step_count);
        ys.into_iter().map(|y| y as f32).zip(values).collect()
    }

    pub fn render(&self, painter: &mut dyn Painter, frame: &PlotFrame) {
        let plot = frame.plot;
        let stroke = Stroke::new(frame.theme.grid, 1.0);
        let style = LabelStyle::new(self.font_size, frame.theme.axis_label, TextAlign::Right);
        for (y, value) in self.guides(frame) {
            painter.line(Point::new(plot.left, y), Point::new(plot.right, y), stroke);
            if frame.draw_labels {
                let text = self.formatter.format_label(value);
                painter.text(&text, Point::new(plot.left - self.label_gap, y + 4.0), &style);
            }
        }
    }
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new(4, NumberFormat::grouped())
    }
}
