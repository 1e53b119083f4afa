//! ShapeView Render Library
//!
//! The two-pass shadow/mask compositor and the renderer abstraction over
//! it. The default implementation uses Vello for GPU-accelerated
//! rendering.

mod compose;
mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use compose::{DrawOp, compose};
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
