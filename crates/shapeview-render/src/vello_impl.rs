//! Vello-based renderer implementation.

use crate::compose::{DrawOp, compose};
use crate::renderer::{RenderContext, RenderResult, Renderer};
use kurbo::{Affine, BezPath, Point, Rect, Stroke};
use peniko::{Color, Fill, Mix};
use shapeview_core::shadow::ShapeShadow;
use shapeview_core::view::ShapeViewState;
use vello::Scene;

/// Flattening tolerance for arc segments.
const PATH_TOLERANCE: f64 = 0.1;

/// Number of concentric strokes approximating the shadow falloff.
const SHADOW_RINGS: usize = 8;

/// Vello-based renderer for GPU-accelerated 2D graphics.
#[derive(Default)]
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Execute the composed draw operations for one view.
    fn render_view(&mut self, view: &mut ShapeViewState, scale_factor: f64) {
        let resolved = view.on_draw();
        let ops = compose(view, &resolved);
        if ops.is_empty() {
            log::trace!("view {} composed no draw ops", view.id());
            return;
        }

        let transform = view_transform(scale_factor, view.frame());
        let outline = resolved.to_closed_bez_path(PATH_TOLERANCE);

        for op in ops {
            match op {
                DrawOp::OuterShadow(shadow) => {
                    self.draw_outer_shadow(&outline, &shadow, transform);
                }
                DrawOp::PushMask => {
                    self.scene.push_layer(Mix::Clip, 1.0, transform, &outline);
                }
                DrawOp::FillBackground(color) => {
                    self.scene
                        .fill(Fill::NonZero, transform, Color::from(color), None, &outline);
                }
                DrawOp::BlurOverlay(blur) => {
                    self.scene
                        .fill(Fill::NonZero, transform, blur.tint_with_alpha(), None, &outline);
                }
                DrawOp::InnerShadow(shadow) => {
                    self.draw_inner_shadow(&outline, &shadow, transform);
                }
                DrawOp::PopMask => {
                    self.scene.pop_layer();
                }
            }
        }
    }

    /// Outer shadow: a solid fill of the outline under the (later,
    /// masked) content plus falloff rings spreading outward.
    fn draw_outer_shadow(&mut self, outline: &BezPath, shadow: &ShapeShadow, transform: Affine) {
        let transform = transform * Affine::translate(shadow.offset);
        self.scene.fill(
            Fill::NonZero,
            transform,
            shadow.color_with_opacity(),
            None,
            outline,
        );
        self.draw_falloff_rings(outline, shadow, transform);
    }

    /// Inner shadow: the same rings, stroked on the boundary while the
    /// mask layer is active so only the inner half shows.
    fn draw_inner_shadow(&mut self, outline: &BezPath, shadow: &ShapeShadow, transform: Affine) {
        let transform = transform * Affine::translate(shadow.offset);
        self.draw_falloff_rings(outline, shadow, transform);
    }

    /// Approximate a gaussian falloff by stroking the outline with
    /// concentric rings of growing width and constant per-ring alpha:
    /// overlap makes the accumulated opacity ramp down linearly from the
    /// edge out to the shadow radius.
    fn draw_falloff_rings(&mut self, outline: &BezPath, shadow: &ShapeShadow, transform: Affine) {
        if shadow.radius <= 0.0 {
            return;
        }
        let base = shadow.color_with_opacity().to_rgba8();
        let ring_alpha = ((base.a as f64 / SHADOW_RINGS as f64).round() as u8).max(1);
        let color = Color::from_rgba8(base.r, base.g, base.b, ring_alpha);

        for i in 0..SHADOW_RINGS {
            let t = (i + 1) as f64 / SHADOW_RINGS as f64;
            let stroke = Stroke::new(2.0 * shadow.radius * t);
            self.scene.stroke(&stroke, transform, color, None, outline);
        }
    }
}

/// Transform from a view's local coordinates into physical scene
/// coordinates: place the frame, then scale everything (geometry and
/// shadow offsets alike) up to device pixels.
fn view_transform(scale_factor: f64, frame: Rect) -> Affine {
    Affine::scale(scale_factor) * Affine::translate((frame.x0, frame.y0))
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &mut RenderContext) -> RenderResult<()> {
        self.scene.reset();

        // Frames are laid out in logical coordinates, so cull against the
        // viewport divided back down by the scale factor.
        let viewport = Rect::from_origin_size(
            Point::ORIGIN,
            ctx.viewport_size / ctx.scale_factor,
        );
        for view in ctx.views.iter_mut() {
            let visible = view.frame().intersect(viewport);
            if visible.width() <= 0.0 || visible.height() <= 0.0 {
                log::trace!("view {} outside viewport, skipped", view.id());
                continue;
            }
            self.render_view(view, ctx.scale_factor);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use shapeview_core::path::ShapePath;
    use shapeview_core::shadow::SerializableColor;

    #[test]
    fn test_build_scene_clears_redraw_flags() {
        let mut views = vec![
            ShapeViewState::new(ShapePath::Corner { radius: 10.0 }),
            ShapeViewState::new(ShapePath::Star { vertices: 5 }),
        ];
        views[0].on_bounds_changed(Rect::new(0.0, 0.0, 100.0, 80.0));
        views[1].on_bounds_changed(Rect::new(0.0, 100.0, 50.0, 150.0));
        views[0].set_outer_shadow(Some(ShapeShadow::new(
            20.0,
            SerializableColor::new(0, 255, 0, 255),
        )));

        let mut renderer = VelloRenderer::new();
        let mut ctx = RenderContext::new(&mut views, Size::new(400.0, 300.0));
        renderer.build_scene(&mut ctx).unwrap();

        assert!(views.iter().all(|v| !v.needs_redraw()));
    }

    #[test]
    fn test_view_transform_scales_frame_origin() {
        let transform = view_transform(2.0, Rect::new(10.0, 20.0, 60.0, 70.0));
        // The view's local origin lands at the scaled frame origin.
        let origin = transform * Point::new(0.0, 0.0);
        assert!((origin - Point::new(20.0, 40.0)).hypot() < 1e-9);
        // A point inside the view is scaled around it.
        let inner = transform * Point::new(5.0, 5.0);
        assert!((inner - Point::new(30.0, 50.0)).hypot() < 1e-9);
    }

    #[test]
    fn test_offscreen_view_is_skipped() {
        let mut views = vec![
            ShapeViewState::new(ShapePath::Corner { radius: 10.0 }),
            ShapeViewState::new(ShapePath::Corner { radius: 10.0 }),
        ];
        views[0].on_bounds_changed(Rect::new(0.0, 0.0, 100.0, 80.0));
        views[1].on_bounds_changed(Rect::new(500.0, 500.0, 600.0, 580.0));

        let mut renderer = VelloRenderer::new();
        let mut ctx = RenderContext::new(&mut views, Size::new(400.0, 300.0));
        renderer.build_scene(&mut ctx).unwrap();

        // The offscreen view never reaches on_draw, so its flag stays set.
        assert!(!views[0].needs_redraw());
        assert!(views[1].needs_redraw());
    }

    #[test]
    fn test_culling_uses_logical_viewport() {
        // A 400x300 physical viewport at 2x is 200x150 logical; a frame
        // just past the logical edge is skipped.
        let mut views = vec![ShapeViewState::new(ShapePath::Corner { radius: 10.0 })];
        views[0].on_bounds_changed(Rect::new(210.0, 0.0, 260.0, 50.0));

        let mut renderer = VelloRenderer::new();
        let mut ctx =
            RenderContext::new(&mut views, Size::new(400.0, 300.0)).with_scale_factor(2.0);
        renderer.build_scene(&mut ctx).unwrap();

        assert!(views[0].needs_redraw());
    }
}
