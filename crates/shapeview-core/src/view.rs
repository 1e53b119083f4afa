//! Per-view shape configuration and draw lifecycle.

use kurbo::Rect;
use uuid::Uuid;

use crate::path::{ResolvedPath, ShapePath};
use crate::shadow::{BlurEffect, SerializableColor, ShapeShadow};

/// Unique identifier for a shaped view.
pub type ViewId = Uuid;

/// Shape configuration and lifecycle state for one host view.
///
/// Each view owns its state privately; nothing here is shared across
/// views, matching the single-threaded UI event loop this is driven from.
/// Setters only record configuration - geometry is produced on
/// [`on_draw`](Self::on_draw), against the bounds snapshot taken by the
/// most recent [`on_bounds_changed`](Self::on_bounds_changed), so no
/// cached outline ever crosses a resize boundary.
#[derive(Debug, Clone)]
pub struct ShapeViewState {
    id: ViewId,
    path: ShapePath,
    outer_shadow: Option<ShapeShadow>,
    inner_shadow: Option<ShapeShadow>,
    background: SerializableColor,
    blur: Option<BlurEffect>,
    frame: Rect,
    needs_redraw: bool,
}

impl ShapeViewState {
    pub fn new(path: ShapePath) -> Self {
        Self {
            id: Uuid::new_v4(),
            path,
            outer_shadow: None,
            inner_shadow: None,
            background: SerializableColor::white(),
            blur: None,
            frame: Rect::ZERO,
            needs_redraw: true,
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    /// The frame set by the most recent layout pass, in parent
    /// coordinates.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// The frame translated to the origin; outlines are resolved in the
    /// view's own coordinate space.
    pub fn local_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.frame.width(), self.frame.height())
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn path(&self) -> &ShapePath {
        &self.path
    }

    pub fn outer_shadow(&self) -> Option<&ShapeShadow> {
        self.outer_shadow.as_ref()
    }

    pub fn inner_shadow(&self) -> Option<&ShapeShadow> {
        self.inner_shadow.as_ref()
    }

    pub fn background(&self) -> SerializableColor {
        self.background
    }

    pub fn blur(&self) -> Option<&BlurEffect> {
        self.blur.as_ref()
    }

    /// Replace the outline description; takes effect on the next draw.
    pub fn set_shape_path(&mut self, path: ShapePath) {
        self.path = path;
        self.needs_redraw = true;
    }

    pub fn set_outer_shadow(&mut self, shadow: Option<ShapeShadow>) {
        self.outer_shadow = shadow;
        self.needs_redraw = true;
    }

    pub fn set_inner_shadow(&mut self, shadow: Option<ShapeShadow>) {
        self.inner_shadow = shadow;
        self.needs_redraw = true;
    }

    pub fn set_background(&mut self, color: SerializableColor) {
        self.background = color;
        self.needs_redraw = true;
    }

    pub fn set_blur(&mut self, blur: Option<BlurEffect>) {
        self.blur = blur;
        self.needs_redraw = true;
    }

    /// Layout callback: snapshot the final measured frame.
    pub fn on_bounds_changed(&mut self, frame: Rect) {
        if frame != self.frame {
            log::trace!("view {} bounds changed to {frame:?}", self.id);
            self.frame = frame;
            self.needs_redraw = true;
        }
    }

    /// Draw callback: resolve the outline against the bounds snapshot.
    ///
    /// Produces a fresh command sequence every call and clears the redraw
    /// flag.
    pub fn on_draw(&mut self) -> ResolvedPath {
        self.needs_redraw = false;
        self.path.resolve(self.local_bounds())
    }
}
