use tracing::debug;

use crate::models::{Book, Section};

/// Result of a purchase attempt. A miss is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseOutcome {
    /// The book was removed from its section and is handed back to the caller.
    Purchased(Book),
    NotFound,
}

/// The whole catalog: sections in the order they were first seen, each with
/// its books in file order. Section titles are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    sections: Vec<Section>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `book` to the section named `section_title`, creating the
    /// section at the end of the list the first time the name shows up.
    pub fn add_book_to_section(&mut self, section_title: &str, book: Book) {
        let index = match self
            .sections
            .iter()
            .position(|section| section.title == section_title)
        {
            Some(index) => index,
            None => {
                debug!(section = section_title, "creating section");
                self.sections.push(Section::new(section_title));
                self.sections.len() - 1
            }
        };
        self.sections[index].add_book(book);
    }

    /// Every section with its books, in insertion order.
    pub fn list_all(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }

    /// All books in scan order: section by section, then book by book.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.sections.iter().flat_map(|section| section.books.iter())
    }

    pub fn book_count(&self) -> usize {
        self.sections.iter().map(|section| section.books.len()).sum()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// True when no section holds a book. Emptied sections still count as
    /// sections.
    pub fn is_empty(&self) -> bool {
        self.book_count() == 0
    }

    /// Case-insensitive substring match on titles. The empty query matches
    /// every book.
    pub fn search_by_title(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Case-insensitive substring match on authors.
    pub fn search_by_author(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books()
            .filter(|book| book.author.to_lowercase().contains(&needle))
            .collect()
    }

    /// Remove the first book, in scan order, whose title equals `title`
    /// ignoring case.
    pub fn purchase(&mut self, title: &str) -> PurchaseOutcome {
        let needle = title.to_lowercase();
        for section in &mut self.sections {
            if let Some(index) = section
                .books
                .iter()
                .position(|book| book.title.to_lowercase() == needle)
            {
                let book = section.books.remove(index);
                debug!(title = %book.title, section = %section.title, "book removed");
                return PurchaseOutcome::Purchased(book);
            }
        }
        PurchaseOutcome::NotFound
    }
}
