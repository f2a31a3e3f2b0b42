//! UI layer: App orchestrator, menu wiring, and theme colours.

pub mod app;
pub mod colors;
pub mod menu;
