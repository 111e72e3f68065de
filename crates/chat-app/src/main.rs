//! Chat App — native entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the stores, the event bus, and the assistant responder,
//! and hands them to the egui UI.

mod app;

fn main() -> eframe::Result {
    env_logger::init();
    log::info!("chat app starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("AI Assistant")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "AI Assistant",
        options,
        Box::new(|cc| Ok(Box::new(app::ChatApp::new(cc)))),
    )
}
