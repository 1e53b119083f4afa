//! Main application entry point.

fn main() {
    env_logger::init();
    log::info!("Starting ShapeView demo");

    pollster::block_on(shapeview_app::App::run());
}
