use crate::coords::Vec2;
use crate::render::Surface;
use crate::scene::{PointId, Scene};

use super::types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent};

/// Default distance within which a press grabs a point.
pub const DEFAULT_HIT_RADIUS: f32 = 10.0;

/// Interaction state of the controller.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DragState {
    Idle,
    /// A point is grabbed. `offset` is pointer minus point at grab time, so
    /// the point keeps its position relative to the pointer while moving.
    Dragging { point: PointId, offset: Vec2 },
}

/// Maps pointer events onto point mutations and redraws.
///
/// The controller never adds or removes points; it only moves existing ones.
/// Every drag-move runs its full redraw before the next event is applied —
/// the host must deliver events from a single thread in order.
#[derive(Debug)]
pub struct DragController {
    state: DragState,
    hit_radius: f32,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self::with_hit_radius(DEFAULT_HIT_RADIUS)
    }

    pub fn with_hit_radius(hit_radius: f32) -> Self {
        Self { state: DragState::Idle, hit_radius }
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Applies one pointer event to the scene.
    ///
    /// Press: grab the first point (insertion order) within the hit radius.
    /// Move while dragging: reposition the grabbed point and redraw.
    /// Release: drop the grab. Everything else is ignored.
    pub fn apply_event(&mut self, scene: &mut Scene, surface: &mut dyn Surface, ev: InputEvent) {
        match ev {
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x,
                y,
            }) => {
                let pointer = Vec2::new(x, y);
                if let Some(id) = scene.point_at(pointer, self.hit_radius) {
                    let grabbed = scene.points().get(id).map(|p| p.xy()).unwrap_or(pointer);
                    self.state = DragState::Dragging { point: id, offset: pointer - grabbed };
                    log::debug!("grabbed point {} at ({x}, {y})", id.index());
                }
            }

            InputEvent::PointerMoved(m) => {
                if let DragState::Dragging { point, offset } = self.state {
                    scene.move_point(point, Vec2::new(m.x, m.y) - offset);
                    scene.redraw(surface);
                }
            }

            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Released,
                ..
            }) => {
                if let DragState::Dragging { point, .. } = self.state {
                    log::debug!("released point {}", point.index());
                    self.state = DragState::Idle;
                }
            }

            InputEvent::PointerButton(_) => {}
        }
    }
}
