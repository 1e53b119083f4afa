//! ShapeView Core Library
//!
//! Platform-agnostic model for custom-shaped views: declarative outline
//! descriptions, shadow and blur descriptors, and the per-view state that
//! ties them into a host view's layout/draw lifecycle.

pub mod path;
pub mod shadow;
pub mod view;

pub use path::{ArrowPosition, PathBuilder, PathCommand, ResolvedPath, ShapePath};
pub use shadow::{BlurEffect, BlurStyle, SerializableColor, ShapeShadow};
pub use view::{ShapeViewState, ViewId};
