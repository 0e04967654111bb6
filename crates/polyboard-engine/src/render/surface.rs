use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// Drawing surface the scene renders into.
///
/// Implementations decide how coordinates map to pixels; callers pass span
/// endpoints through unrounded. All drawing is clipped by the surface, so
/// out-of-bounds geometry is a no-op rather than an error.
pub trait Surface {
    /// Resets every pixel inside `rect` to the background.
    fn clear_rect(&mut self, rect: Rect);

    /// Strokes a circle outline in fixed black.
    fn stroke_circle(&mut self, center: Vec2, radius: f32);

    /// Fills the horizontal run `[x0, x1)` on pixel row `y`, alpha-blending
    /// `color` over the existing content.
    fn fill_span(&mut self, y: i32, x0: f32, x1: f32, color: Color);
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Surface double that records raw draw calls for exact assertions.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) clears: Vec<Rect>,
        pub(crate) circles: Vec<(Vec2, f32)>,
        pub(crate) spans: Vec<(i32, f32, f32, Color)>,
    }

    impl Surface for RecordingSurface {
        fn clear_rect(&mut self, rect: Rect) {
            self.clears.push(rect);
        }

        fn stroke_circle(&mut self, center: Vec2, radius: f32) {
            self.circles.push((center, radius));
        }

        fn fill_span(&mut self, y: i32, x0: f32, x1: f32, color: Color) {
            self.spans.push((y, x0, x1, color));
        }
    }

    impl RecordingSurface {
        /// Spans recorded for row `y`, in draw order.
        pub(crate) fn spans_at(&self, y: i32) -> Vec<(f32, f32)> {
            self.spans
                .iter()
                .filter(|(row, ..)| *row == y)
                .map(|&(_, x0, x1, _)| (x0, x1))
                .collect()
        }
    }
}
