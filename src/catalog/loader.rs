use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::models::Book;

use super::Library;

/// Shape of one value in the catalog object. The title is the object key, so
/// it is not repeated here.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    author: String,
    cost: f64,
    section: String,
}

impl Library {
    /// Read and parse the catalog file at `path`. Any failure aborts the whole
    /// load; a partially built library is never returned.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let library = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            sections = library.section_count(),
            books = library.book_count(),
            "catalog loaded"
        );
        Ok(library)
    }

    /// Parse a catalog from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: Map<String, Value> =
            serde_json::from_reader(reader).map_err(CatalogError::Parse)?;
        Self::from_document(document)
    }

    /// Parse a catalog from an in-memory JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let document: Map<String, Value> =
            serde_json::from_str(raw).map_err(CatalogError::Parse)?;
        Self::from_document(document)
    }

    /// Walk the object in document order. `serde_json` is built with
    /// `preserve_order`, so iteration order equals the order in the file.
    fn from_document(document: Map<String, Value>) -> Result<Self> {
        let mut library = Library::new();
        for (title, value) in document {
            let entry: CatalogEntry = match serde_json::from_value(value) {
                Ok(entry) => entry,
                Err(source) => return Err(CatalogError::InvalidEntry { title, source }),
            };
            let book = Book::new(title, entry.author, entry.cost);
            library.add_book_to_section(&entry.section, book);
        }
        debug!(sections = library.section_count(), "catalog document parsed");
        Ok(library)
    }
}
