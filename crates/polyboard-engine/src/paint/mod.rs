//! Color types for CPU-side compositing.

mod color;

pub use color::Color;
