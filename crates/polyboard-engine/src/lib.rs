//! Polyboard engine crate.
//!
//! Scene model (points + filled polygons), scan-line rasterization onto a
//! software surface, and pointer-driven point dragging.

pub mod coords;
pub mod paint;

pub mod config;
pub mod input;
pub mod logging;
pub mod render;
pub mod scene;
