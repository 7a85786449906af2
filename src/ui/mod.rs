//! Ratatui front-end: a main view and a search view over the catalog.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
