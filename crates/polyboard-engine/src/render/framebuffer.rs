use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Vec2};
use crate::paint::Color;

use super::Surface;

/// One RGBA8 pixel.
///
/// `repr(C)` + `Pod` so the whole buffer can be viewed as raw bytes for
/// image export without copying.
#[repr(C)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Pod, Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 255 };
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 255 };

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Software render target: an opaque `width x height` RGBA8 buffer.
///
/// Raster conventions:
/// - a span `[x0, x1)` covers the integer columns `ceil(x0) <= x < ceil(x1)`,
///   the horizontal counterpart of the scene's half-open scan-line rule;
/// - every draw call is clipped to the buffer, so geometry outside the
///   surface simply does not paint.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    background: Pixel,
    pixels: Vec<Pixel>,
}

impl Framebuffer {
    /// Creates a buffer cleared to white.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Pixel::WHITE)
    }

    pub fn with_background(width: u32, height: u32, background: Pixel) -> Self {
        Self {
            width,
            height,
            background,
            pixels: vec![background; (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[(y * self.width + x) as usize]
    }

    /// Raw RGBA8 bytes in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, pixel: Pixel) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.pixels[(y as u32 * self.width + x as u32) as usize] = pixel;
    }

    /// Clamped half-open column range covered by `[x0, x1)`.
    fn span_columns(&self, x0: f32, x1: f32) -> std::ops::Range<i32> {
        let start = (x0.ceil() as i32).max(0);
        let end = (x1.ceil() as i32).min(self.width as i32);
        start..end.max(start)
    }
}

impl Surface for Framebuffer {
    fn clear_rect(&mut self, rect: Rect) {
        let Some(clipped) = rect.intersect(self.bounds()) else {
            return;
        };
        let x0 = clipped.min().x.floor() as u32;
        let y0 = clipped.min().y.floor() as u32;
        let x1 = (clipped.max().x.ceil() as u32).min(self.width);
        let y1 = (clipped.max().y.ceil() as u32).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                self.pixels[(y * self.width + x) as usize] = self.background;
            }
        }
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32) {
        // Midpoint circle, fixed black outline, centered on the nearest pixel.
        let cx = center.x.round() as i32;
        let cy = center.y.round() as i32;
        let r = radius.round() as i32;
        if r <= 0 {
            self.put(cx, cy, Pixel::BLACK);
            return;
        }

        let mut x = r;
        let mut y = 0;
        let mut err = 1 - r;
        while x >= y {
            for (px, py) in [
                (cx + x, cy + y),
                (cx - x, cy + y),
                (cx + x, cy - y),
                (cx - x, cy - y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx + y, cy - x),
                (cx - y, cy - x),
            ] {
                self.put(px, py, Pixel::BLACK);
            }
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    fn fill_span(&mut self, y: i32, x0: f32, x1: f32, color: Color) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        for x in self.span_columns(x0, x1) {
            let i = (y as u32 * self.width + x as u32) as usize;
            let dst = self.pixels[i];
            let [r, g, b] = color.over([dst.r, dst.g, dst.b]);
            self.pixels[i] = Pixel::rgb(r, g, b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── spans ─────────────────────────────────────────────────────────────

    #[test]
    fn span_covers_half_open_columns() {
        let mut fb = Framebuffer::new(16, 4);
        fb.fill_span(1, 2.0, 5.0, Color::opaque(255, 0, 0));

        assert_eq!(fb.pixel(1, 1), Pixel::WHITE);
        for x in 2..5 {
            assert_eq!(fb.pixel(x, 1), Pixel::rgb(255, 0, 0));
        }
        assert_eq!(fb.pixel(5, 1), Pixel::WHITE);
    }

    #[test]
    fn span_fractional_endpoints_round_up() {
        let mut fb = Framebuffer::new(16, 2);
        // ceil(2.5) = 3, ceil(5.5) = 6: columns 3..6.
        fb.fill_span(0, 2.5, 5.5, Color::opaque(0, 255, 0));
        assert_eq!(fb.pixel(2, 0), Pixel::WHITE);
        assert_eq!(fb.pixel(3, 0), Pixel::rgb(0, 255, 0));
        assert_eq!(fb.pixel(5, 0), Pixel::rgb(0, 255, 0));
        assert_eq!(fb.pixel(6, 0), Pixel::WHITE);
    }

    #[test]
    fn span_blends_alpha_over_background() {
        let mut fb = Framebuffer::new(4, 1);
        fb.fill_span(0, 0.0, 4.0, Color::new(0, 0, 0, 0.5));
        assert_eq!(fb.pixel(0, 0), Pixel::rgb(128, 128, 128));
    }

    #[test]
    fn span_outside_rows_is_ignored() {
        let mut fb = Framebuffer::new(4, 4);
        fb.fill_span(-1, 0.0, 4.0, Color::BLACK);
        fb.fill_span(4, 0.0, 4.0, Color::BLACK);
        assert!(fb.as_bytes().iter().all(|&b| b == 255));
    }

    #[test]
    fn span_clips_to_width() {
        let mut fb = Framebuffer::new(4, 1);
        fb.fill_span(0, -10.0, 10.0, Color::opaque(1, 2, 3));
        for x in 0..4 {
            assert_eq!(fb.pixel(x, 0), Pixel::rgb(1, 2, 3));
        }
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_rect_restores_background() {
        let mut fb = Framebuffer::with_background(8, 8, Pixel::rgb(10, 20, 30));
        fb.fill_span(3, 0.0, 8.0, Color::BLACK);
        fb.clear_rect(Rect::new(0.0, 0.0, 8.0, 8.0));
        assert_eq!(fb.pixel(4, 3), Pixel::rgb(10, 20, 30));
    }

    #[test]
    fn clear_rect_outside_bounds_is_noop() {
        let mut fb = Framebuffer::new(4, 4);
        fb.clear_rect(Rect::new(100.0, 100.0, 10.0, 10.0));
        assert!(fb.as_bytes().iter().all(|&b| b == 255));
    }

    // ── circles ───────────────────────────────────────────────────────────

    #[test]
    fn circle_strokes_cardinal_points() {
        let mut fb = Framebuffer::new(32, 32);
        fb.stroke_circle(Vec2::new(16.0, 16.0), 5.0);
        assert_eq!(fb.pixel(21, 16), Pixel::BLACK);
        assert_eq!(fb.pixel(11, 16), Pixel::BLACK);
        assert_eq!(fb.pixel(16, 21), Pixel::BLACK);
        assert_eq!(fb.pixel(16, 11), Pixel::BLACK);
        // Interior stays untouched.
        assert_eq!(fb.pixel(16, 16), Pixel::WHITE);
    }

    #[test]
    fn circle_partially_off_surface_does_not_panic() {
        let mut fb = Framebuffer::new(8, 8);
        fb.stroke_circle(Vec2::new(0.0, 0.0), 5.0);
        fb.stroke_circle(Vec2::new(-20.0, -20.0), 5.0);
        assert_eq!(fb.pixel(5, 0), Pixel::BLACK);
    }

    // ── export ────────────────────────────────────────────────────────────

    #[test]
    fn bytes_are_row_major_rgba() {
        let mut fb = Framebuffer::new(2, 1);
        fb.fill_span(0, 1.0, 2.0, Color::opaque(9, 8, 7));
        assert_eq!(fb.as_bytes(), &[255, 255, 255, 255, 9, 8, 7, 255]);
    }
}
