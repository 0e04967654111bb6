use thiserror::Error;

/// Errors raised while building a scene.
///
/// Both variants are construction-time failures; a partially built scene is
/// not a supported state, so callers are expected to abort initialization.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// Coordinate outside the inclusive surface rectangle.
    #[error("point ({x}, {y}) lies outside the {width}x{height} surface")]
    OutOfBounds { x: f32, y: f32, width: u32, height: u32 },

    /// Polygon vertex index with no point behind it.
    #[error("polygon references unknown vertex {0}")]
    UnknownVertex(usize),

    /// Configured polygon with no vertices at all.
    #[error("polygon has no vertices")]
    EmptyPolygon,
}
