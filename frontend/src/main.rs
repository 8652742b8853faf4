#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use egui::Vec2;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let size: Vec2 = [720.0, 480.0].into();

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(size),
        min_window_size: Some([480.0, 320.0].into()),
        centered: true,
        ..Default::default()
    };
    eframe::run_native(
        "Users",
        native_options,
        Box::new(|cc| Box::new(frontend::UsersViewer::new(cc))),
    )
}
