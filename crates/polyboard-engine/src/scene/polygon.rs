use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::Surface;

use super::{PointId, PointStore};

/// A closed vertex loop with a fill color.
///
/// Vertices are ids into the scene's point arena, not copies; the polygon
/// always fills with the points' current positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<PointId>,
    color: Color,
}

/// A non-horizontal polygon edge, oriented low-y to high-y.
///
/// The scan interval is half-open: the edge intersects row `y` only when
/// `lo.y <= y < hi.y`. A vertex shared by two edges therefore counts once.
#[derive(Debug, Copy, Clone)]
struct Edge {
    lo: Vec2,
    hi: Vec2,
}

impl Edge {
    #[inline]
    fn spans(&self, y: f32) -> bool {
        self.lo.y <= y && y < self.hi.y
    }

    /// X of the edge at row `y`, by linear interpolation.
    #[inline]
    fn x_at(&self, y: f32) -> f32 {
        self.lo.x + (self.hi.x - self.lo.x) * (y - self.lo.y) / (self.hi.y - self.lo.y)
    }
}

impl Polygon {
    /// A polygon needs at least three vertices to enclose area; fewer is
    /// accepted but fills nothing useful (even-odd parity decides).
    pub fn new(vertices: Vec<PointId>, color: Color) -> Self {
        Self { vertices, color }
    }

    #[inline]
    pub fn vertices(&self) -> &[PointId] {
        &self.vertices
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Paints the polygon interior using even-odd scan-line filling.
    ///
    /// For every integer row between the vertex loop's minimum y (rounded up)
    /// and its maximum y (exclusive), edge intersections are collected,
    /// sorted, and paired into spans. Span endpoints go to the surface
    /// unrounded. An odd trailing intersection — possible for degenerate
    /// input — has no partner and is dropped silently; that incomplete fill
    /// is the defined behavior, not an error.
    pub fn fill(&self, points: &PointStore, surface: &mut dyn Surface) {
        // Ids the store cannot resolve contribute no vertex; the remaining
        // loop still fills. Scenes never hand out dangling ids, but a
        // directly constructed polygon may carry them.
        let loop_points: Vec<Vec2> = self
            .vertices
            .iter()
            .filter_map(|&id| points.get(id).map(|p| p.xy()))
            .collect();
        if loop_points.is_empty() {
            return;
        }

        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        let mut edges: Vec<Edge> = Vec::with_capacity(loop_points.len());

        for (i, &a) in loop_points.iter().enumerate() {
            min_y = min_y.min(a.y);
            max_y = max_y.max(a.y);

            let b = loop_points[(i + 1) % loop_points.len()];
            // Horizontal edges contribute no scan-line intersection.
            if a.y == b.y {
                continue;
            }
            let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
            edges.push(Edge { lo, hi });
        }
        if edges.is_empty() {
            return;
        }

        let mut xs: Vec<f32> = Vec::with_capacity(edges.len());
        for y in (min_y.ceil() as i32)..(max_y.ceil() as i32) {
            let row = y as f32;

            xs.clear();
            for edge in &edges {
                if edge.spans(row) {
                    xs.push(edge.x_at(row));
                }
            }
            xs.sort_by(|a, b| a.total_cmp(b));

            for pair in xs.chunks_exact(2) {
                surface.fill_span(y, pair[0], pair[1], self.color);
            }
        }
    }
}
