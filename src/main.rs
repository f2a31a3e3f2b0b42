mod config;
mod engine;
mod error;
mod ui;

use crate::config::AppConfig;
use crate::ui::app::App;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.inner_size),
        ..Default::default()
    };
    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, config)))),
    )
}
