//! Error type for catalog loading. Query and purchase misses are not errors;
//! they come back as ordinary values from the catalog.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be opened or read.
    #[error("failed to read catalog file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not valid JSON, or its top level is not an object.
    #[error("catalog is not a valid JSON object")]
    Parse(#[source] serde_json::Error),

    /// One entry lacks `author`, `cost` or `section`, or has the wrong type.
    #[error("invalid catalog entry {title:?}")]
    InvalidEntry {
        title: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
