//! Two-pass shadow and mask compositing.
//!
//! Ordering matters: the outer shadow is a separate pass drawn behind the
//! masked content, the inner shadow an overlay on top of it. Instead of
//! relying on implicit layer-stacking side effects, the compositor
//! returns the draw operations for one view in their fixed order and
//! leaves execution to the renderer backend.

use shapeview_core::path::ResolvedPath;
use shapeview_core::shadow::{BlurEffect, SerializableColor, ShapeShadow};
use shapeview_core::view::ShapeViewState;

/// One step of drawing a shaped view. All operations refer to the single
/// resolved outline the list was planned against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    /// Shadow rendered just outside the outline, behind the masked
    /// content.
    OuterShadow(ShapeShadow),
    /// Begin clipping to the outline; content outside it is not drawn.
    PushMask,
    /// Fill the masked region with the view's background color.
    FillBackground(SerializableColor),
    /// Translucent tint standing in for the backdrop blur.
    BlurOverlay(BlurEffect),
    /// Shadow rendered just inside the outline, over the content.
    InnerShadow(ShapeShadow),
    /// End clipping.
    PopMask,
}

/// Plan the draw operations for one view against its resolved outline.
///
/// The order is fixed: outer shadow, mask push, background fill, blur
/// overlay, inner shadow, mask pop - with the optional entries omitted
/// when unset. An empty outline (unmeasured view) produces no operations.
pub fn compose(view: &ShapeViewState, resolved: &ResolvedPath) -> Vec<DrawOp> {
    if resolved.is_empty() {
        return Vec::new();
    }

    let mut ops = Vec::with_capacity(6);
    if let Some(shadow) = view.outer_shadow() {
        ops.push(DrawOp::OuterShadow(*shadow));
    }
    ops.push(DrawOp::PushMask);
    ops.push(DrawOp::FillBackground(view.background()));
    if let Some(blur) = view.blur() {
        ops.push(DrawOp::BlurOverlay(*blur));
    }
    if let Some(shadow) = view.inner_shadow() {
        ops.push(DrawOp::InnerShadow(*shadow));
    }
    ops.push(DrawOp::PopMask);
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use shapeview_core::path::ShapePath;

    fn measured_view() -> ShapeViewState {
        let mut view = ShapeViewState::new(ShapePath::Corner { radius: 10.0 });
        view.on_bounds_changed(Rect::new(0.0, 0.0, 100.0, 80.0));
        view
    }

    #[test]
    fn test_full_op_order() {
        let mut view = measured_view();
        let green = SerializableColor::new(0, 255, 0, 255);
        view.set_outer_shadow(Some(ShapeShadow::new(20.0, green)));
        view.set_inner_shadow(Some(ShapeShadow::new(10.0, green)));
        view.set_blur(Some(BlurEffect::default()));

        let resolved = view.on_draw();
        let ops = compose(&view, &resolved);
        assert!(matches!(
            ops.as_slice(),
            [
                DrawOp::OuterShadow(_),
                DrawOp::PushMask,
                DrawOp::FillBackground(_),
                DrawOp::BlurOverlay(_),
                DrawOp::InnerShadow(_),
                DrawOp::PopMask,
            ]
        ));
    }

    #[test]
    fn test_optional_ops_omitted() {
        let mut view = measured_view();
        let resolved = view.on_draw();
        let ops = compose(&view, &resolved);
        assert!(matches!(
            ops.as_slice(),
            [DrawOp::PushMask, DrawOp::FillBackground(_), DrawOp::PopMask]
        ));
    }

    #[test]
    fn test_inner_shadow_only() {
        let mut view = measured_view();
        view.set_inner_shadow(Some(ShapeShadow::new(
            10.0,
            SerializableColor::new(0, 255, 0, 255),
        )));
        let resolved = view.on_draw();
        let ops = compose(&view, &resolved);
        assert!(matches!(
            ops.as_slice(),
            [
                DrawOp::PushMask,
                DrawOp::FillBackground(_),
                DrawOp::InnerShadow(_),
                DrawOp::PopMask,
            ]
        ));
    }

    #[test]
    fn test_empty_outline_draws_nothing() {
        // A view that was never measured resolves to an empty outline.
        let mut view = ShapeViewState::new(ShapePath::Corner { radius: 10.0 });
        view.set_outer_shadow(Some(ShapeShadow::new(
            20.0,
            SerializableColor::black(),
        )));
        let resolved = view.on_draw();
        assert!(compose(&view, &resolved).is_empty());
    }
}
