//! Reusable UI components

pub mod common;
pub mod log_panel;
pub mod scrollbar_helper;
pub mod status_bar;

pub use log_panel::LogPanel;
pub use scrollbar_helper::ScrollbarHelper;
pub use status_bar::StatusBar;
