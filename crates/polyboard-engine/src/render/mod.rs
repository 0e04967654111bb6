//! Rasterization layer.
//!
//! The scene draws through the renderer-agnostic [`Surface`] trait;
//! [`Framebuffer`] is the built-in software implementation.

mod framebuffer;
mod surface;

pub use framebuffer::{Framebuffer, Pixel};
pub use surface::Surface;

#[cfg(test)]
pub(crate) use surface::test_support::RecordingSurface;
