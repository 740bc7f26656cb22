use eframe::egui;

mod app;
mod math;
mod model;
mod render;


use app::NullspaceApp;


fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    log::info!("starting null space explorer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Null Space Explorer - Ax = b",
        options,
        Box::new(|_cc| Box::new(NullspaceApp::default())),
    )
}
