/// Straight-alpha RGBA fill color.
///
/// Invariant:
/// - `r`, `g`, `b` are 8-bit channel values.
/// - `a` is a coverage fraction in `[0, 1]`.
///
/// Channels stay straight (non-premultiplied) because blending happens once,
/// CPU-side, against an opaque destination pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 1.0 };

    /// Creates a color, clamping alpha into `[0, 1]`.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a: a.clamp(0.0, 1.0) }
    }

    /// Fully opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Source-over blend onto an opaque RGB destination pixel.
    ///
    /// Each channel is `src * a + dst * (1 - a)`, rounded to nearest.
    #[inline]
    pub fn over(self, dst: [u8; 3]) -> [u8; 3] {
        let a = self.a;
        let blend = |s: u8, d: u8| (s as f32 * a + d as f32 * (1.0 - a)).round() as u8;
        [blend(self.r, dst[0]), blend(self.g, dst[1]), blend(self.b, dst[2])]
    }
}
