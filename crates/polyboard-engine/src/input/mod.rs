//! Pointer input handling.

mod drag;
mod types;

pub use drag::{DragController, DragState, DEFAULT_HIT_RADIUS};
pub use types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent};
