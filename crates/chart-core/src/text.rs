// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer over Skia textlayout; baseline-anchored, left/centre/right aligned.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::painter::{LabelStyle, TextAlign};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(style: &LabelStyle) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(style.size.max(1.0));
        ts.set_color(style.color);
        if style.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, style: &LabelStyle) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(style));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its baseline at `y`, anchored at `x` according to `style.align`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, style: &LabelStyle) {
        let p = self.layout(text, style);
        let width = p.longest_line();
        let left = match style.align {
            TextAlign::Left => x,
            TextAlign::Center => x - width * 0.5,
            TextAlign::Right => x - width,
        };
        // Paragraph draws from top-left; shift up by the first line's ascent.
        let ascent = p.alphabetic_baseline();
        p.paint(canvas, (left, y - ascent));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
