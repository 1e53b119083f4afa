//! Renderer trait abstraction.

use kurbo::Size;
use peniko::Color;
use shapeview_core::view::ShapeViewState;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Shaped views to draw, back to front. Mutable because drawing runs
    /// each view's `on_draw` lifecycle callback.
    pub views: &'a mut [ShapeViewState],
    /// Viewport size in physical pixels; views framed entirely outside it
    /// are skipped.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI). View frames are in logical
    /// coordinates; backends scale them up to physical pixels.
    pub scale_factor: f64,
    /// Background color.
    pub background_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(views: &'a mut [ShapeViewState], viewport_size: Size) -> Self {
        Self {
            views,
            viewport_size,
            scale_factor: 1.0,
            background_color: Color::from_rgba8(250, 250, 250, 255),
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }
}

/// Trait for rendering backends.
///
/// Implementations can use Vello, wgpu directly, or other rendering
/// engines.
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    ///
    /// Called once per frame; prepares the draw operations for every view
    /// in the context.
    fn build_scene(&mut self, ctx: &mut RenderContext) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
