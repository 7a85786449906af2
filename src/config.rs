use std::path::PathBuf;

use directories::BaseDirs;

/// Catalog file read once at startup, relative to the working directory.
pub const CATALOG_FILE_NAME: &str = "books.json";
/// Folder name used beneath the user's home directory for the log file.
const DATA_DIR_NAME: &str = ".bookstore";
/// Log file name stored inside the application data directory.
const LOG_FILE_NAME: &str = "bookstore.log";

/// Startup settings. There are no flags or environment overrides; `main`
/// builds this from the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub catalog_path: PathBuf,
    /// `None` turns file logging off.
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(CATALOG_FILE_NAME),
            log_path: default_log_path(),
        }
    }
}

/// Resolve `~/.bookstore/bookstore.log`, or `None` without a home directory.
fn default_log_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(DATA_DIR_NAME).join(LOG_FILE_NAME))
}
