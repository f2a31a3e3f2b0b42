//! Application orchestrator: owns the controller and draws the window.

use crate::config::AppConfig;
use crate::engine::controller::{ActionOutcome, Controller};
use crate::ui::colors;
use crate::ui::menu::{MENU_TITLE, MenuAction};

/// The top-level application, implementing [`eframe::App`].
///
/// All behaviour lives in [`Controller`]; `App` only:
/// 1. Draws the menu bar and forwards the picked [`MenuAction`].
/// 2. Draws the wrapped text area over the controller's buffer.
/// 3. Paints the theme colours and closes the viewport on request.
pub struct App {
    controller: Controller,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self {
            controller: Controller::new(config),
        }
    }

    fn show_menu_bar(&mut self, ctx: &egui::Context) -> Option<MenuAction> {
        let mut picked = None;
        egui::TopBottomPanel::top("menu_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.menu_button(MENU_TITLE, |ui| {
                        for action in MenuAction::ALL {
                            if ui.button(action.label()).clicked() {
                                picked = Some(action);
                            }
                        }
                    });
                });
            });
        picked
    }

    fn show_text_area(&mut self, ctx: &egui::Context) {
        let (outer, inner) = colors::backgrounds(self.controller.theme(), &ctx.style().visuals);
        let margin = egui::Margin::same(self.controller.config().text_margin);
        let hint = self.controller.config().hint_text.clone();

        egui::CentralPanel::default()
            .frame(
                egui::Frame::central_panel(&ctx.style())
                    .fill(outer)
                    .inner_margin(margin),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_sized(
                            ui.available_size(),
                            egui::TextEdit::multiline(self.controller.buffer_mut().text_mut())
                                .hint_text(hint)
                                .background_color(inner)
                                .desired_width(f32::INFINITY),
                        );
                    });
            });
    }
}

// ── eframe::App ────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── 1. Menu ───────────────────────────────────────────────────────────
        if let Some(action) = self.show_menu_bar(ctx) {
            if action.run(&mut self.controller) == ActionOutcome::Close {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }

        // ── 2. Body ───────────────────────────────────────────────────────────
        self.show_text_area(ctx);
    }
}
