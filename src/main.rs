//! Binary entry point: load the catalog once, then hand it to the TUI.
use anyhow::Context;
use bookstore::logging::init_logging;
use bookstore::{run_app, App, Config, Library};

/// A catalog that cannot be read or parsed stops startup before the terminal
/// is touched, so the error chain prints on a normal screen.
fn main() -> anyhow::Result<()> {
    let config = Config::default();
    if let Err(err) = init_logging(config.log_path.as_deref()) {
        eprintln!("logging disabled: {err:#}");
    }

    let mut library = Library::from_path(&config.catalog_path).with_context(|| {
        format!(
            "could not load catalog from {}",
            config.catalog_path.display()
        )
    })?;

    let mut app = App::new(&mut library);
    run_app(&mut app)
}
