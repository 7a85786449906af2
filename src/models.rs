//! Domain models for the bookstore catalog. These stay plain data holders so
//! the catalog module can focus on loading and querying, and the UI only has
//! to format them.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
/// A single book on the shelves. Books are never edited after they are built;
/// buying one removes it from its section.
pub struct Book {
    /// Title shown in listings; also the key a purchase matches against.
    pub title: String,
    /// Author field used for display and author search.
    pub author: String,
    /// Price as read from the catalog file.
    pub cost: f64,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, cost: f64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            cost,
        }
    }
}

impl fmt::Display for Book {
    /// Three-line card used by the results pane. The cost uses `f64`'s
    /// `Display`: whole numbers drop the fraction (`5.0` prints `5`) and
    /// large values print every digit instead of an exponent (`1e21` prints
    /// `1000000000000000000000`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}\nAuthor: {}\nCost: {}",
            self.title, self.author, self.cost
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Named grouping of books. The book order is the order the entries appeared
/// in the catalog file.
pub struct Section {
    pub title: String,
    pub books: Vec<Book>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            books: Vec::new(),
        }
    }

    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
