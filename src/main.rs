#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use compositional_calendar::app::CalendarApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([280.0, 400.0])
            .with_title("Compositional Calendar"),
        ..Default::default()
    };

    eframe::run_native(
        "Compositional Calendar",
        options,
        Box::new(|cc| Ok(Box::new(CalendarApp::new(cc)))),
    )
}
