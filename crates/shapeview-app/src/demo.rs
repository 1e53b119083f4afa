//! Demo screen: a stack of shaped views showing off each path variant.

use std::f64::consts::FRAC_PI_2;

use kurbo::{Rect, Size};
use shapeview_core::{
    ArrowPosition, BlurEffect, BlurStyle, SerializableColor, ShapePath, ShapeShadow,
    ShapeViewState,
};

/// Side inset of the stacked bubble rows.
const SIDE_INSET: f64 = 50.0;
/// Height of each bubble row.
const ROW_HEIGHT: f64 = 80.0;
/// Vertical gap between rows.
const ROW_GAP: f64 = 20.0;
/// Top offset of the first row.
const TOP_OFFSET: f64 = 70.0;
/// Star view edge length.
const STAR_SIZE: f64 = 50.0;

/// Message bubble pointer: distance from the left edge and pointer
/// height below the pill body.
const POINTER_LEFT: f64 = 80.0;
const POINTER_HEIGHT: f64 = 20.0;

/// Pill-with-pointer outline: a capsule whose bottom edge dips into a
/// small triangular pointer. Left open deliberately; masking closes it.
fn message_bubble_path() -> ShapePath {
    ShapePath::custom(|bounds, b| {
        let body_height = bounds.height() - POINTER_HEIGHT;
        let radius = body_height / 2.0;

        b.move_to((radius, 0.0));
        b.arc(
            (bounds.width() - radius, radius),
            radius,
            -FRAC_PI_2,
            FRAC_PI_2,
            true,
        );
        b.line_to((POINTER_LEFT + POINTER_HEIGHT, body_height));
        b.line_to((POINTER_LEFT + POINTER_HEIGHT / 2.0, bounds.height()));
        b.line_to((POINTER_LEFT, body_height));
        b.arc((radius, radius), radius, FRAC_PI_2, -FRAC_PI_2, true);
    })
}

/// Panel with a notched step cut out of its top edge.
fn notched_panel_path() -> ShapePath {
    ShapePath::custom(|bounds, b| {
        b.move_to((0.0, 0.0));
        b.line_to((bounds.width() / 2.0 - 20.0, 0.0));
        b.line_to((bounds.width() / 2.0, 30.0));
        b.line_to((bounds.width(), 30.0));
        b.line_to((bounds.width(), bounds.height()));
        b.line_to((0.0, bounds.height()));
        b.close();
    })
}

/// The alternative paths the message view cycles through.
fn message_path_variant(variant: usize) -> ShapePath {
    match variant % 3 {
        0 => message_bubble_path(),
        1 => ShapePath::Corner { radius: 10.0 },
        _ => ShapePath::Dialog {
            radius: 10.0,
            arrow: ArrowPosition::Right {
                center: 50.0,
                width: 40.0,
                height: 20.0,
            },
        },
    }
}

/// The demo views, back to front, plus their layout.
pub struct DemoScreen {
    views: Vec<ShapeViewState>,
    message_variant: usize,
}

impl DemoScreen {
    pub fn new() -> Self {
        let green = SerializableColor::new(0, 255, 0, 255);

        // Message bubble: white pill with green outer and inner shadows.
        let mut message = ShapeViewState::new(message_bubble_path());
        message.set_background(SerializableColor::white());
        message.set_outer_shadow(Some(ShapeShadow::new(20.0, green)));
        message.set_inner_shadow(Some(ShapeShadow::new(10.0, green)));

        // Error bubble: same outline, translucent white, inner glow only.
        let mut error = ShapeViewState::new(message_bubble_path());
        error.set_background(SerializableColor::new(255, 255, 255, 204));
        error.set_inner_shadow(Some(ShapeShadow::new(10.0, green)));

        // Notched panel over a dark blur.
        let mut panel = ShapeViewState::new(notched_panel_path());
        panel.set_background(SerializableColor::new(128, 128, 128, 128));
        panel.set_blur(Some(BlurEffect::new(BlurStyle::Dark).with_alpha(0.8)));

        let mut star = ShapeViewState::new(ShapePath::Star { vertices: 5 });
        star.set_background(SerializableColor::new(255, 255, 0, 255));

        Self {
            views: vec![message, error, panel, star],
            message_variant: 0,
        }
    }

    /// Lay out the demo stack for the given viewport, pushing a fresh
    /// frame into each view.
    pub fn layout(&mut self, viewport: Size) {
        let row_width = (viewport.width - 2.0 * SIDE_INSET).max(0.0);
        let mut y = TOP_OFFSET;
        let mut row = || {
            let frame = Rect::new(SIDE_INSET, y, SIDE_INSET + row_width, y + ROW_HEIGHT);
            y += ROW_HEIGHT + ROW_GAP;
            frame
        };

        let frames = [
            row(),
            row(),
            row(),
            // Star: fixed size, centered horizontally under the rows.
            Rect::new(
                (viewport.width - STAR_SIZE) / 2.0,
                y,
                (viewport.width + STAR_SIZE) / 2.0,
                y + STAR_SIZE,
            ),
        ];
        for (view, frame) in self.views.iter_mut().zip(frames) {
            view.on_bounds_changed(frame);
        }
    }

    pub fn views_mut(&mut self) -> &mut [ShapeViewState] {
        &mut self.views
    }

    /// Swap the message bubble to the next path variant.
    pub fn cycle_message_path(&mut self) {
        self.message_variant += 1;
        let path = message_path_variant(self.message_variant);
        log::info!("message bubble path -> {path:?}");
        self.views[0].set_shape_path(path);
    }
}

impl Default for DemoScreen {
    fn default() -> Self {
        Self::new()
    }
}
