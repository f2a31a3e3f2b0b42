//! Fixed application settings. There is no CLI or config file; everything is
//! carried in [`AppConfig`] so tests can point the log somewhere else.

use std::path::PathBuf;

pub struct AppConfig {
    pub title: String,
    /// Initial inner window size in logical points.
    pub inner_size: [f32; 2],
    /// Target of the save action, relative to the working directory.
    pub log_path: PathBuf,
    /// Gap between the root container edge and the text area.
    pub text_margin: i8,
    pub hint_text: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Weekly HW - Menu Demo".to_string(),
            inner_size: [900.0, 600.0],
            log_path: PathBuf::from("log.txt"),
            text_margin: 10,
            hint_text: "Select a menu item...".to_string(),
        }
    }
}
