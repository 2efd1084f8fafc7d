pub mod api;
pub mod app;
pub mod args;
pub mod bracket;
pub mod crossterm_event_handler;
pub mod headless;
pub mod store;
pub mod tui;
pub mod types;
pub mod ui;

