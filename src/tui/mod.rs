//! Terminal User Interface module
//!
//! An interactive dashboard over one dataset using ratatui: a tab per
//! report and keys that move the selected date range.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;

pub use app::App;
pub use terminal::run_tui;
