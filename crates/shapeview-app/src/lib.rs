//! ShapeView Demo Application
//!
//! Window, surface, and frame loop wiring the shape renderer into a demo
//! screen of shaped views.

mod app;
mod demo;

pub use app::{App, AppConfig};
pub use demo::DemoScreen;
