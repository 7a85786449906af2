//! Core library surface for the bookstore TUI.
//!
//! The catalog and command layer have no UI dependencies, so tests and other
//! front-ends can drive them directly; the `ui` module only borrows them.
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod models;
pub mod ui;

pub use catalog::{Library, PurchaseOutcome};
pub use config::Config;
pub use controller::{Command, Controller, Feedback};
pub use error::CatalogError;
pub use models::{Book, Section};

pub use ui::{run_app, App};
