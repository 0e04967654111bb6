//! Static scene configuration.
//!
//! Describes the startup scene: vertex triples, per-vertex base colors, a
//! global fill alpha, and polygons as index lists into the vertex array.
//! Where the configuration comes from (file, embedded constant, host app) is
//! the caller's concern.

use crate::paint::Color;
use crate::scene::{Point, PointId, Polygon, Scene, SceneError};

/// Startup scene description.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Vertex coordinates as `(x, y, z)` triples.
    pub vertices: Vec<[f32; 3]>,
    /// Base RGB color per vertex, parallel to `vertices`.
    pub colors: Vec<[u8; 3]>,
    /// Fill alpha applied to every polygon.
    pub alpha: f32,
    /// Polygons as index lists into `vertices`. A polygon's fill color is
    /// the base color of its first vertex combined with `alpha`.
    pub polygons: Vec<Vec<usize>>,
}

impl SceneConfig {
    /// Builds the scene, failing fast on the first invalid entry.
    ///
    /// A partial scene is not a supported state: any [`SceneError`] aborts
    /// construction and should be treated as a fatal configuration error.
    pub fn build(&self) -> Result<Scene, SceneError> {
        let mut scene = Scene::new(self.width, self.height);

        let ids: Vec<PointId> = self
            .vertices
            .iter()
            .map(|&[x, y, z]| scene.add_point(Point::new(x, y, z)))
            .collect::<Result<_, _>>()?;

        for indices in &self.polygons {
            let vertices: Vec<PointId> = indices
                .iter()
                .map(|&i| ids.get(i).copied().ok_or(SceneError::UnknownVertex(i)))
                .collect::<Result<_, _>>()?;

            let first = *indices.first().ok_or(SceneError::EmptyPolygon)?;
            let [r, g, b] = *self.colors.get(first).ok_or(SceneError::UnknownVertex(first))?;
            scene.add_polygon(Polygon::new(vertices, Color::new(r, g, b, self.alpha)))?;
        }

        log::debug!(
            "scene built: {} points, {} polygons on {}x{}",
            scene.points().len(),
            scene.polygons().len(),
            self.width,
            self.height
        );
        Ok(scene)
    }
}
