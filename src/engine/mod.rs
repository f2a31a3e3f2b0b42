//! Engine sub-modules: text buffer, clock, theme colour cache, log file, and the
//! window controller that ties them to the menu actions.

pub mod buffer;
pub mod clock;
pub mod controller;
pub mod log_file;
pub mod theme;
