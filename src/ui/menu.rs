//! Menu entries and their mapping onto controller actions.

use crate::engine::controller::{ActionOutcome, Controller};

pub const MENU_TITLE: &str = "Menu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ShowTimestamp,
    SaveToFile,
    ApplyGreenTheme,
    Exit,
}

impl MenuAction {
    /// Menu order, top to bottom.
    pub const ALL: [MenuAction; 4] = [
        MenuAction::ShowTimestamp,
        MenuAction::SaveToFile,
        MenuAction::ApplyGreenTheme,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::ShowTimestamp => "Menu Item 1",
            MenuAction::SaveToFile => "Menu Item 2",
            MenuAction::ApplyGreenTheme => "Menu Item 3",
            MenuAction::Exit => "Menu Item 4",
        }
    }

    pub fn run(self, controller: &mut Controller) -> ActionOutcome {
        match self {
            MenuAction::ShowTimestamp => controller.show_timestamp(),
            MenuAction::SaveToFile => controller.save_to_file(),
            MenuAction::ApplyGreenTheme => controller.apply_green_theme(),
            MenuAction::Exit => controller.exit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn labels_follow_menu_order() {
        let labels: Vec<_> = MenuAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(
            labels,
            ["Menu Item 1", "Menu Item 2", "Menu Item 3", "Menu Item 4"]
        );
    }

    #[test]
    fn only_exit_closes() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = Controller::new(AppConfig {
            log_path: dir.path().join("log.txt"),
            ..AppConfig::default()
        });
        for action in MenuAction::ALL {
            let expected = if action == MenuAction::Exit {
                ActionOutcome::Close
            } else {
                ActionOutcome::Continue
            };
            assert_eq!(action.run(&mut c), expected, "{action:?}");
        }
        assert!(dir.path().join("log.txt").exists());
        assert!(c.theme().is_some());
    }
}
