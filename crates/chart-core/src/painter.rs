// File: crates/chart-core/src/painter.rs
// Summary: Drawing capability used by grid and series renderers, with Skia and recording backends.

use skia_safe as skia;

use crate::geometry::{Bounds, Point};
use crate::text::TextShaper;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: skia::Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: skia::Color, width: f32) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    pub size: f32,
    pub color: skia::Color,
    pub align: TextAlign,
    pub bold: bool,
}

impl LabelStyle {
    pub const fn new(size: f32, color: skia::Color, align: TextAlign) -> Self {
        Self { size, color, align, bold: false }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Everything a renderer may put on a surface. Coordinates are logical pixels.
pub trait Painter {
    /// Wipe the whole surface. Anything drawn before is gone.
    fn clear(&mut self, color: skia::Color);
    fn line(&mut self, from: Point, to: Point, stroke: Stroke);
    /// Connected segments in the given order. Fewer than two points draws nothing.
    fn polyline(&mut self, points: &[Point], stroke: Stroke);
    fn fill_rect(&mut self, rect: Bounds, color: skia::Color);
    fn fill_circle(&mut self, center: Point, radius: f32, color: skia::Color);
    /// `at.y` is the text baseline.
    fn text(&mut self, text: &str, at: Point, style: &LabelStyle);
}

// ---- skia ---------------------------------------------------------------------

pub struct SkiaPainter<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
}

impl<'a> SkiaPainter<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self { canvas, shaper }
    }

    fn stroke_paint(stroke: Stroke) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke.width);
        paint.set_color(stroke.color);
        paint
    }

    fn fill_paint(color: skia::Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color);
        paint
    }
}

impl Painter for SkiaPainter<'_> {
    fn clear(&mut self, color: skia::Color) {
        self.canvas.clear(color);
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.canvas.draw_line(from, to, &Self::stroke_paint(stroke));
    }

    fn polyline(&mut self, points: &[Point], stroke: Stroke) {
        let [first, rest @ ..] = points else { return };
        if rest.is_empty() {
            return;
        }
        let mut path = skia::Path::new();
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        let mut paint = Self::stroke_paint(stroke);
        paint.set_stroke_join(skia::paint::Join::Round);
        self.canvas.draw_path(&path, &paint);
    }

    fn fill_rect(&mut self, rect: Bounds, color: skia::Color) {
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        self.canvas.draw_rect(r, &Self::fill_paint(color));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: skia::Color) {
        self.canvas.draw_circle(center, radius, &Self::fill_paint(color));
    }

    fn text(&mut self, text: &str, at: Point, style: &LabelStyle) {
        self.shaper.draw(self.canvas, text, at.x, at.y, style);
    }
}

impl From<Point> for skia::Point {
    fn from(p: Point) -> Self {
        skia::Point::new(p.x, p.y)
    }
}

// ---- recording ----------------------------------------------------------------

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(skia::Color),
    Line { from: Point, to: Point, stroke: Stroke },
    Polyline { points: Vec<Point>, stroke: Stroke },
    Rect { rect: Bounds, color: skia::Color },
    Circle { center: Point, radius: f32, color: skia::Color },
    Text { text: String, at: Point, style: LabelStyle },
}

/// Keeps the drawing calls of the current frame in memory for inspection.
/// `clear` drops everything recorded so far, matching a real surface repaint.
#[derive(Clone, Debug, Default)]
pub struct RecordingPainter {
    commands: Vec<DrawCommand>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, Stroke)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, stroke } => Some((*from, *to, *stroke)),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[Point]> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polyline { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    /// Number of straight segments across all polylines.
    pub fn segment_count(&self) -> usize {
        self.polylines().map(|p| p.len().saturating_sub(1)).sum()
    }

    pub fn rects(&self) -> impl Iterator<Item = (Bounds, skia::Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, at, .. } => Some((text.as_str(), *at)),
            _ => None,
        })
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, color: skia::Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn polyline(&mut self, points: &[Point], stroke: Stroke) {
        if points.len() < 2 {
            return;
        }
        self.commands.push(DrawCommand::Polyline { points: points.to_vec(), stroke });
    }

    fn fill_rect(&mut self, rect: Bounds, color: skia::Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: skia::Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn text(&mut self, text: &str, at: Point, style: &LabelStyle) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), at, style: *style });
    }
}
