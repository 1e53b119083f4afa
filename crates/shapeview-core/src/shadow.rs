//! Shadow and blur descriptors.
//!
//! These are purely descriptive configuration values; the render crate
//! decides how to realize them against a resolved outline.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Same color with the alpha channel scaled by `factor` (0..=1).
    pub fn scale_alpha(self, factor: f64) -> Self {
        let a = (self.a as f64 * factor.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

fn default_opacity() -> f64 {
    1.0
}

/// Descriptor for an outer or inner shadow, applied to the resolved
/// outline at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeShadow {
    /// Blur radius in pixels.
    pub radius: f64,
    pub color: SerializableColor,
    /// Offset of the shadow relative to the outline.
    #[serde(default)]
    pub offset: (f64, f64),
    /// Overall opacity (0.0 = invisible, 1.0 = full shadow color).
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl ShapeShadow {
    pub fn new(radius: f64, color: SerializableColor) -> Self {
        Self {
            radius,
            color,
            offset: (0.0, 0.0),
            opacity: 1.0,
        }
    }

    pub fn with_offset(mut self, dx: f64, dy: f64) -> Self {
        self.offset = (dx, dy);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Shadow color with the opacity folded into the alpha channel.
    pub fn color_with_opacity(&self) -> Color {
        self.color.scale_alpha(self.opacity).into()
    }
}

/// Visual style of the backdrop blur, named after the platform effect
/// styles of the original component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlurStyle {
    ExtraLight,
    Light,
    #[default]
    Regular,
    Prominent,
    Dark,
}

impl BlurStyle {
    /// Tint color standing in for the frosted-glass effect.
    pub fn tint(&self) -> SerializableColor {
        match self {
            BlurStyle::ExtraLight => SerializableColor::new(255, 255, 255, 235),
            BlurStyle::Light => SerializableColor::new(255, 255, 255, 200),
            BlurStyle::Regular => SerializableColor::new(235, 235, 235, 190),
            BlurStyle::Prominent => SerializableColor::new(215, 215, 215, 210),
            BlurStyle::Dark => SerializableColor::new(30, 30, 30, 200),
        }
    }
}

/// Backdrop blur configuration for a shaped view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlurEffect {
    pub style: BlurStyle,
    /// Effect strength (0.0 = off, 1.0 = full tint).
    #[serde(default = "default_opacity")]
    pub alpha: f64,
}

impl BlurEffect {
    pub fn new(style: BlurStyle) -> Self {
        Self { style, alpha: 1.0 }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Tint with the effect strength folded into the alpha channel.
    pub fn tint_with_alpha(&self) -> Color {
        self.style.tint().scale_alpha(self.alpha).into()
    }
}

impl Default for BlurEffect {
    fn default() -> Self {
        Self::new(BlurStyle::default())
    }
}
