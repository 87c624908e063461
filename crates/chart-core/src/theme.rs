// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming: semantic up/down colours, grid and label colours, bar palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_label: skia::Color,
    pub value_label: skia::Color,
    pub line_stroke: skia::Color,
    /// close > open
    pub up: skia::Color,
    pub down: skia::Color,
    /// Alpha applied to up/down for volume bars.
    pub volume_alpha: u8,
    /// Cycled by category index in bar charts.
    pub palette: [skia::Color; 4],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 0xe5, 0xe7, 0xeb),
            axis_label: skia::Color::from_argb(255, 0x6b, 0x72, 0x80),
            value_label: skia::Color::from_argb(255, 0x1f, 0x29, 0x37),
            line_stroke: skia::Color::from_argb(255, 0x00, 0x80, 0x80),
            up: skia::Color::from_argb(255, 0x10, 0xb9, 0x81),
            down: skia::Color::from_argb(255, 0xef, 0x44, 0x44),
            volume_alpha: 77,
            palette: [
                skia::Color::from_argb(255, 0x00, 0x80, 0x80), // teal
                skia::Color::from_argb(255, 0x10, 0xb9, 0x81), // green
                skia::Color::from_argb(255, 0x3b, 0x82, 0xf6), // blue
                skia::Color::from_argb(255, 0x8b, 0x5c, 0xf6), // violet
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_label: skia::Color::from_argb(255, 150, 150, 160),
            value_label: skia::Color::from_argb(255, 235, 235, 245),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            up: skia::Color::from_argb(255, 40, 200, 120),
            down: skia::Color::from_argb(255, 220, 80, 80),
            volume_alpha: 90,
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 255, 180, 60),
                skia::Color::from_argb(255, 170, 120, 255),
            ],
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_label: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            value_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            line_stroke: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            up: skia::Color::from_argb(255, 0x00, 0xff, 0x00),
            down: skia::Color::from_argb(255, 0xff, 0x00, 0x00),
            volume_alpha: 120,
            palette: [
                skia::Color::from_argb(255, 0x00, 0xff, 0xff),
                skia::Color::from_argb(255, 0x00, 0xff, 0x00),
                skia::Color::from_argb(255, 0xff, 0xff, 0x00),
                skia::Color::from_argb(255, 0xff, 0x00, 0xff),
            ],
        }
    }

    /// Up/down colour for one period.
    #[inline]
    pub fn direction(&self, up: bool) -> skia::Color {
        if up { self.up } else { self.down }
    }

    #[inline]
    pub fn palette_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_past_its_length() {
        let t = Theme::light();
        assert_eq!(t.palette_color(0), t.palette_color(4));
        assert_eq!(t.palette_color(5), t.palette[1]);
    }

    #[test]
    fn find_is_case_insensitive_with_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("sepia").name, "light");
    }
}
