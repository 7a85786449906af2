//! Thin command layer between the UI and the catalog. The UI raises a
//! [`Command`], the [`Controller`] calls the matching catalog operation, and
//! the [`Feedback`] it returns is what the results pane renders.

use tracing::{debug, info};

use crate::catalog::{Library, PurchaseOutcome};
use crate::models::Book;

/// Separator printed after every book card.
pub const SEPARATOR: &str = "--------------------";

pub const EMPTY_LIBRARY_MESSAGE: &str = "No books found in the library.";
pub const NO_TITLE_MATCH_MESSAGE: &str = "No books matching the title were found.";
pub const NO_AUTHOR_MATCH_MESSAGE: &str = "No books by this author were found.";
pub const PURCHASED_MESSAGE: &str = "Book is purchased and removed from the library.";
pub const NOT_FOUND_MESSAGE: &str = "Book not found.";

/// User intents raised by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListAll,
    SearchTitle(String),
    SearchAuthor(String),
    Buy(String),
}

/// One section as shown in the full listing.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionListing {
    pub title: String,
    pub books: Vec<Book>,
}

/// Outcome of a dispatched command, owned so the UI can keep it around after
/// the catalog changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    Listing(Vec<SectionListing>),
    Matches(Vec<Book>),
    NoMatch(&'static str),
    Purchased(Book),
    NotFound,
    EmptyLibrary,
}

impl Feedback {
    /// Plain text lines for the results pane.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Feedback::Listing(sections) => {
                let mut lines = Vec::new();
                for section in sections {
                    lines.push(String::new());
                    lines.push(format!("--- {} ---", section.title));
                    for book in &section.books {
                        push_card(&mut lines, book);
                    }
                }
                lines
            }
            Feedback::Matches(books) => {
                let mut lines = Vec::new();
                for book in books {
                    push_card(&mut lines, book);
                }
                lines
            }
            Feedback::NoMatch(message) => vec![(*message).to_string()],
            Feedback::Purchased(_) => vec![PURCHASED_MESSAGE.to_string()],
            Feedback::NotFound => vec![NOT_FOUND_MESSAGE.to_string()],
            Feedback::EmptyLibrary => vec![EMPTY_LIBRARY_MESSAGE.to_string()],
        }
    }

    /// Whether the outcome should be flagged as a miss in the status line.
    pub fn is_miss(&self) -> bool {
        matches!(
            self,
            Feedback::NoMatch(_) | Feedback::NotFound | Feedback::EmptyLibrary
        )
    }
}

fn push_card(lines: &mut Vec<String>, book: &Book) {
    lines.extend(book.to_string().lines().map(str::to_string));
    lines.push(SEPARATOR.to_string());
}

/// Dispatches commands against a borrowed catalog.
pub struct Controller<'a> {
    library: &'a mut Library,
}

impl<'a> Controller<'a> {
    pub fn new(library: &'a mut Library) -> Self {
        Self { library }
    }

    pub fn library(&self) -> &Library {
        self.library
    }

    pub fn dispatch(&mut self, command: Command) -> Feedback {
        debug!(?command, "dispatching command");
        match command {
            Command::ListAll => self.list_all(),
            Command::SearchTitle(query) => {
                let matches = self.library.search_by_title(&query);
                debug!(query = %query, matches = matches.len(), "title search");
                collect_matches(matches, NO_TITLE_MATCH_MESSAGE)
            }
            Command::SearchAuthor(query) => {
                let matches = self.library.search_by_author(&query);
                debug!(query = %query, matches = matches.len(), "author search");
                collect_matches(matches, NO_AUTHOR_MATCH_MESSAGE)
            }
            Command::Buy(title) => match self.library.purchase(&title) {
                PurchaseOutcome::Purchased(book) => {
                    info!(
                        title = %book.title,
                        remaining = self.library.book_count(),
                        "book purchased"
                    );
                    Feedback::Purchased(book)
                }
                PurchaseOutcome::NotFound => {
                    info!(title = %title, "purchase target not found");
                    Feedback::NotFound
                }
            },
        }
    }

    fn list_all(&self) -> Feedback {
        if self.library.is_empty() {
            return Feedback::EmptyLibrary;
        }
        let sections = self
            .library
            .list_all()
            .iter()
            .filter(|section| !section.is_empty())
            .map(|section| SectionListing {
                title: section.title.clone(),
                books: section.books.clone(),
            })
            .collect();
        Feedback::Listing(sections)
    }
}

fn collect_matches(matches: Vec<&Book>, miss: &'static str) -> Feedback {
    if matches.is_empty() {
        Feedback::NoMatch(miss)
    } else {
        Feedback::Matches(matches.into_iter().cloned().collect())
    }
}
