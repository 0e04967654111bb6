//! Scene model.
//!
//! Responsibilities:
//! - own point storage (arena) and the polygon list
//! - validate coordinates at insertion time, never on mutation
//! - replay the whole model onto a surface in insertion order

mod error;
mod point;
mod polygon;

pub use error::SceneError;
pub use point::{Point, PointId, PointStore};
pub use polygon::Polygon;

use crate::coords::{Rect, Vec2};
use crate::render::Surface;

/// Radius of the stroked marker drawn for every point.
pub const POINT_RADIUS: f32 = 4.0;

/// Document model: points, polygons, and the surface bounds they live in.
///
/// Polygons reference points by [`PointId`], so moving a point is immediately
/// visible to every polygon containing it.
#[derive(Debug, Default)]
pub struct Scene {
    points: PointStore,
    polygons: Vec<Polygon>,
    width: u32,
    height: u32,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self { points: PointStore::default(), polygons: Vec::new(), width, height }
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
    pub fn points(&self) -> &PointStore {
        &self.points
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Inserts a point, rejecting coordinates outside the surface.
    ///
    /// Bounds are inclusive: `0 <= x <= width`, `0 <= y <= height`.
    pub fn add_point(&mut self, point: Point) -> Result<PointId, SceneError> {
        self.check_bounds(point.x, point.y)?;
        Ok(self.points.push(point))
    }

    /// Inserts a polygon after validating every referenced vertex.
    ///
    /// Validation runs against the points' *current* coordinates; on failure
    /// the polygon list is left unchanged.
    pub fn add_polygon(&mut self, polygon: Polygon) -> Result<(), SceneError> {
        for &id in polygon.vertices() {
            let p = self
                .points
                .get(id)
                .ok_or(SceneError::UnknownVertex(id.index()))?;
            self.check_bounds(p.x, p.y)?;
        }
        self.polygons.push(polygon);
        Ok(())
    }

    /// Moves a point in place.
    ///
    /// No bounds check here: construction-time validation does not extend to
    /// mutation, so dragging past the surface edge is allowed and simply
    /// renders clipped.
    pub fn move_point(&mut self, id: PointId, pos: Vec2) {
        if let Some(p) = self.points.get_mut(id) {
            p.x = pos.x;
            p.y = pos.y;
        }
    }

    /// First point (in insertion order) within `radius` of `pos`.
    pub fn point_at(&self, pos: Vec2, radius: f32) -> Option<PointId> {
        self.points
            .iter()
            .find(|(_, p)| p.xy().distance(pos) <= radius)
            .map(|(id, _)| id)
    }

    /// Clears the surface, then draws every point and every polygon in
    /// insertion order. Polygons paint over point markers; repeated calls
    /// with an unchanged model produce identical pixels.
    pub fn redraw(&self, surface: &mut dyn Surface) {
        log::trace!(
            "redraw: {} points, {} polygons",
            self.points.len(),
            self.polygons.len()
        );

        surface.clear_rect(Rect::new(0.0, 0.0, self.width as f32, self.height as f32));
        for (_, point) in self.points.iter() {
            surface.stroke_circle(point.xy(), POINT_RADIUS);
        }
        for polygon in &self.polygons {
            polygon.fill(&self.points, surface);
        }
    }

    fn check_bounds(&self, x: f32, y: f32) -> Result<(), SceneError> {
        let in_x = (0.0..=self.width as f32).contains(&x);
        let in_y = (0.0..=self.height as f32).contains(&y);
        if in_x && in_y {
            Ok(())
        } else {
            Err(SceneError::OutOfBounds { x, y, width: self.width, height: self.height })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::render::{Framebuffer, Pixel, RecordingSurface};

    fn triangle_scene() -> (Scene, PointId) {
        let mut scene = Scene::new(100, 100);
        let a = scene.add_point(Point::new(10.0, 10.0, 0.0)).unwrap();
        let b = scene.add_point(Point::new(60.0, 10.0, 0.0)).unwrap();
        let c = scene.add_point(Point::new(35.0, 60.0, 0.0)).unwrap();
        scene
            .add_polygon(Polygon::new(vec![a, b, c], Color::opaque(255, 0, 0)))
            .unwrap();
        (scene, c)
    }

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn add_point_on_boundary_succeeds() {
        let mut scene = Scene::new(100, 50);
        assert!(scene.add_point(Point::new(100.0, 50.0, 0.0)).is_ok());
        assert!(scene.add_point(Point::new(0.0, 0.0, 0.0)).is_ok());
    }

    #[test]
    fn add_point_beyond_boundary_fails() {
        let mut scene = Scene::new(100, 50);
        let err = scene.add_point(Point::new(101.0, 10.0, 0.0)).unwrap_err();
        assert!(matches!(err, SceneError::OutOfBounds { .. }));
        assert_eq!(scene.points().len(), 0);

        assert!(scene.add_point(Point::new(10.0, 51.0, 0.0)).is_err());
        assert!(scene.add_point(Point::new(-1.0, 10.0, 0.0)).is_err());
    }

    #[test]
    fn add_polygon_with_out_of_bounds_vertex_is_rejected() {
        let mut scene = Scene::new(100, 100);
        let a = scene.add_point(Point::new(0.0, 0.0, 0.0)).unwrap();
        let b = scene.add_point(Point::new(50.0, 0.0, 0.0)).unwrap();
        let c = scene.add_point(Point::new(90.0, 90.0, 0.0)).unwrap();

        // Drag a referenced point off the surface, then try to add a polygon
        // over it: validation sees the current coordinates.
        scene.move_point(c, Vec2::new(150.0, 90.0));
        let err = scene
            .add_polygon(Polygon::new(vec![a, b, c], Color::BLACK))
            .unwrap_err();
        assert!(matches!(err, SceneError::OutOfBounds { .. }));
        assert_eq!(scene.polygons().len(), 0);
    }

    #[test]
    fn add_polygon_with_unknown_vertex_is_rejected() {
        let mut scene = Scene::new(100, 100);
        let a = scene.add_point(Point::new(0.0, 0.0, 0.0)).unwrap();
        let err = scene
            .add_polygon(Polygon::new(vec![a, PointId::new(7)], Color::BLACK))
            .unwrap_err();
        assert_eq!(err, SceneError::UnknownVertex(7));
        assert_eq!(scene.polygons().len(), 0);
    }

    // ── mutation ──────────────────────────────────────────────────────────

    #[test]
    fn move_point_skips_bounds_check() {
        let (mut scene, c) = triangle_scene();
        scene.move_point(c, Vec2::new(500.0, -20.0));
        let p = scene.points().get(c).unwrap();
        assert_eq!((p.x, p.y), (500.0, -20.0));

        // Redraw with the out-of-bounds point must not panic.
        let mut fb = Framebuffer::new(100, 100);
        scene.redraw(&mut fb);
    }

    #[test]
    fn moving_a_point_changes_the_next_fill() {
        let (mut scene, c) = triangle_scene();
        let mut fb = Framebuffer::new(100, 100);

        scene.redraw(&mut fb);
        let before = fb.pixel(35, 55);
        assert_eq!(before, Pixel::rgb(255, 0, 0));

        // Pull the apex above the sampled row; the polygon reflects the
        // mutated point without being re-added.
        scene.move_point(c, Vec2::new(35.0, 30.0));
        scene.redraw(&mut fb);
        assert_eq!(fb.pixel(35, 55), Pixel::WHITE);
    }

    // ── hit testing ───────────────────────────────────────────────────────

    #[test]
    fn point_at_picks_first_in_insertion_order() {
        let mut scene = Scene::new(100, 100);
        let a = scene.add_point(Point::new(50.0, 50.0, 0.0)).unwrap();
        let _b = scene.add_point(Point::new(52.0, 50.0, 0.0)).unwrap();

        // Both are in range; insertion order wins.
        assert_eq!(scene.point_at(Vec2::new(51.0, 50.0), 10.0), Some(a));
    }

    #[test]
    fn point_at_respects_radius() {
        let mut scene = Scene::new(100, 100);
        let a = scene.add_point(Point::new(50.0, 50.0, 0.0)).unwrap();
        assert_eq!(scene.point_at(Vec2::new(50.0, 56.0), 6.0), Some(a));
        assert_eq!(scene.point_at(Vec2::new(50.0, 56.1), 6.0), None);
    }

    // ── redraw ────────────────────────────────────────────────────────────

    #[test]
    fn redraw_clears_then_draws_points_then_polygons() {
        let (scene, _) = triangle_scene();
        let mut surface = RecordingSurface::default();
        scene.redraw(&mut surface);

        assert_eq!(surface.clears, vec![Rect::new(0.0, 0.0, 100.0, 100.0)]);
        assert_eq!(surface.circles.len(), 3);
        assert_eq!(surface.circles[0], (Vec2::new(10.0, 10.0), POINT_RADIUS));
        assert!(!surface.spans.is_empty());
    }

    #[test]
    fn redraw_is_idempotent() {
        let (scene, _) = triangle_scene();
        let mut fb = Framebuffer::new(100, 100);
        scene.redraw(&mut fb);
        let first = fb.as_bytes().to_vec();
        scene.redraw(&mut fb);
        assert_eq!(fb.as_bytes(), first.as_slice());
    }

    #[test]
    fn polygons_paint_over_point_markers() {
        let (scene, _) = triangle_scene();
        let mut fb = Framebuffer::new(100, 100);
        scene.redraw(&mut fb);

        // The apex marker's top arc lies inside the triangle, so the opaque
        // fill overwrites it.
        assert_eq!(fb.pixel(35, 56), Pixel::rgb(255, 0, 0));
    }
}
