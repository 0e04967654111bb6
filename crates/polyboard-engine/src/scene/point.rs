use crate::coords::Vec2;

/// A scene vertex.
///
/// `z` is carried for configuration fidelity but unused by the 2-D fill.
/// Points are mutated in place while dragging; identity is the arena slot,
/// so every polygon referencing the slot sees the mutation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The 2-D position the rasterizer works with.
    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Stable handle into a [`PointStore`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PointId(u32);

impl PointId {
    #[inline]
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Append-only point arena.
///
/// Points are never removed (they live as long as the scene), so ids stay
/// valid for the scene's whole lifetime.
#[derive(Debug, Default)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    pub fn push(&mut self, point: Point) -> PointId {
        let id = PointId::new(self.points.len());
        self.points.push(point);
        id
    }

    #[inline]
    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.points.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: PointId) -> Option<&mut Point> {
        self.points.get_mut(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &Point)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (PointId::new(i), p))
    }
}
