//! Window controller: owns the text buffer and session colour, and implements
//! the four menu actions. Knows nothing about egui.

use chrono::NaiveDateTime;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::engine::{
    buffer::TextBuffer,
    clock,
    log_file,
    theme::{ColorCache, ColorOrigin, GreenColor},
};

/// What the UI should do after an action returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Continue,
    Close,
}

pub struct Controller {
    config: AppConfig,
    buffer: TextBuffer,
    colors: ColorCache,
}

impl Controller {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            buffer: TextBuffer::new(),
            colors: ColorCache::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    /// Colour currently applied as background, if the theme action ran.
    pub fn theme(&self) -> Option<GreenColor> {
        self.colors.get()
    }

    // ── Menu Item 1 ────────────────────────────────────────────────────────

    pub fn show_timestamp(&mut self) -> ActionOutcome {
        self.show_timestamp_at(clock::now_local())
    }

    pub fn show_timestamp_at(&mut self, at: NaiveDateTime) -> ActionOutcome {
        self.buffer.append_line(&clock::timestamp_line(at));
        ActionOutcome::Continue
    }

    // ── Menu Item 2 ────────────────────────────────────────────────────────

    /// Overwrite the log file with the buffer, then report the result in the
    /// buffer itself. Failures never escape this call.
    pub fn save_to_file(&mut self) -> ActionOutcome {
        let name = self.config.log_path.display().to_string();
        match log_file::save(&self.config.log_path, self.buffer.as_str()) {
            Ok(()) => {
                log::info!(
                    "saved {} bytes to {}",
                    self.buffer.as_str().len(),
                    self.config.log_path.display()
                );
                self.buffer.append_line(&format!("Saved text to {name}"));
            }
            Err(AppError::WriteLog { path, source }) => {
                log::warn!("save to {} failed: {source}", path.display());
                self.buffer
                    .append_line(&format!("ERROR writing to {name}: {source}"));
            }
        }
        ActionOutcome::Continue
    }

    // ── Menu Item 3 ────────────────────────────────────────────────────────

    pub fn apply_green_theme(&mut self) -> ActionOutcome {
        self.apply_green_theme_with(|| GreenColor::random(&mut rand::rng()))
    }

    /// Same as [`Self::apply_green_theme`] with the colour source supplied.
    /// `draw` runs at most once per controller.
    pub fn apply_green_theme_with<F>(&mut self, draw: F) -> ActionOutcome
    where
        F: FnOnce() -> GreenColor,
    {
        let (color, origin) = self.colors.get_or_generate_with(draw);
        match origin {
            ColorOrigin::Generated => {
                log::debug!("generated theme colour {color}");
                self.buffer
                    .append_line(&format!("Generated green hue: {color}"));
            }
            ColorOrigin::Reused => {
                log::debug!("reusing theme colour {color}");
                self.buffer
                    .append_line(&format!("Reusing stored green hue: {color}"));
            }
        }
        ActionOutcome::Continue
    }

    // ── Menu Item 4 ────────────────────────────────────────────────────────

    pub fn exit(&mut self) -> ActionOutcome {
        log::info!("exit requested");
        ActionOutcome::Close
    }
}
