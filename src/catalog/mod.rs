//! In-memory catalog split across loading and querying.

mod library;
mod loader;

pub use library::{Library, PurchaseOutcome};
