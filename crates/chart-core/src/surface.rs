// File: crates/chart-core/src/surface.rs
// Summary: Host drawing surface: logical size + DPR, lazily (re)allocated Skia raster backing buffer.

use anyhow::{anyhow, Result};
use skia_safe as skia;

use crate::text::TextShaper;
use crate::types::Viewport;

/// A canvas owned by the host view.
///
/// The backing buffer is sized `round(logical size * device_pixel_ratio)` and only
/// reallocated when that size changes. Rendering borrows the surface mutably,
/// so one chart at a time can paint it.
pub struct ChartSurface {
    viewport: Viewport,
    backing: Option<skia::Surface>,
    shaper: TextShaper,
}

impl ChartSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, backing: None, shaper: TextShaper::new() }
    }

    /// Host re-measured the element (layout change, DPR change).
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Physical size of the current backing buffer, if one was allocated.
    pub fn backing_size(&self) -> Option<(i32, i32)> {
        self.backing.as_ref().map(|s| (s.width(), s.height()))
    }

    fn ensure_backing(&mut self) -> Option<&mut skia::Surface> {
        if !self.viewport.is_drawable() {
            return None;
        }
        let (w, h) = self.viewport.physical_size();
        if w <= 0 || h <= 0 {
            return None;
        }
        if self.backing_size() != Some((w, h)) {
            tracing::debug!(width = w, height = h, dpr = self.viewport.device_pixel_ratio, "allocate backing buffer");
            self.backing = skia::surfaces::raster_n32_premul((w, h));
        }
        self.backing.as_mut()
    }

    /// Run `draw` with a canvas scaled so coordinates are logical pixels.
    fn paint<F>(&mut self, draw: F) -> bool
    where
        F: FnOnce(&skia::Canvas, &TextShaper),
    {
        let dpr = self.viewport.device_pixel_ratio;
        // Split borrows: the shaper is read while the backing surface is mutably borrowed.
        let shaper = &self.shaper;
        let backing = match self.backing.as_mut() {
            Some(s) if s.width() > 0 => s,
            _ => return false,
        };
        let canvas = backing.canvas();
        canvas.save();
        canvas.reset_matrix();
        canvas.scale((dpr, dpr));
        draw(canvas, shaper);
        canvas.restore();
        true
    }

    /// Allocate or resize the backing buffer for the current viewport, then paint.
    /// Returns `false` without calling `draw` when there is nothing to paint on.
    pub fn repaint<F>(&mut self, draw: F) -> bool
    where
        F: FnOnce(&skia::Canvas, &TextShaper),
    {
        if self.ensure_backing().is_none() {
            return false;
        }
        self.paint(draw)
    }

    /// Copy the backing buffer out as straight-alpha RGBA8 rows.
    /// Returns `(pixels, width, height, stride)`.
    pub fn to_rgba8(&mut self) -> Option<(Vec<u8>, u32, u32, usize)> {
        let surface = self.backing.as_mut()?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return None;
        }
        Some((pixels, w as u32, h as u32, stride))
    }

    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let surface = self
            .backing
            .as_mut()
            .ok_or_else(|| anyhow!("surface has no backing buffer; render first"))?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }
}
