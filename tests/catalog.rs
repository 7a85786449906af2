use std::fs;

use bookstore::{CatalogError, Command, Controller, Feedback, Library, PurchaseOutcome};

fn write_catalog(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn counts_match_entries_and_distinct_sections() {
    let (_dir, path) = write_catalog(
        r#"{
            "Dune": {"author": "Frank Herbert", "cost": 9.99, "section": "Sci-Fi"},
            "Emma": {"author": "Jane Austen", "cost": 5, "section": "Classics"},
            "Hyperion": {"author": "Dan Simmons", "cost": 8, "section": "Sci-Fi"},
            "Walden": {"author": "Henry David Thoreau", "cost": 4, "section": "Essays"},
            "Persuasion": {"author": "Jane Austen", "cost": 6, "section": "Classics"}
        }"#,
    );
    let library = Library::from_path(&path).unwrap();
    assert_eq!(library.book_count(), 5);
    assert_eq!(library.section_count(), 3);

    let order: Vec<_> = library
        .list_all()
        .iter()
        .map(|section| section.title.as_str())
        .collect();
    assert_eq!(order, ["Sci-Fi", "Classics", "Essays"]);
    let classics: Vec<_> = library.list_all()[1]
        .books
        .iter()
        .map(|book| book.title.as_str())
        .collect();
    assert_eq!(classics, ["Emma", "Persuasion"]);
}

#[test]
fn two_books_in_one_section_list_in_order() {
    let (_dir, path) = write_catalog(
        r#"{"A": {"author": "X", "cost": 1, "section": "S1"},
            "B": {"author": "Y", "cost": 2, "section": "S1"}}"#,
    );
    let library = Library::from_path(&path).unwrap();
    let sections = library.list_all();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "S1");
    assert_eq!(sections[0].books[0].title, "A");
    assert_eq!(sections[0].books[1].title, "B");
}

#[test]
fn purchase_removes_exactly_one_book() {
    let (_dir, path) = write_catalog(
        r#"{"Dune": {"author": "Frank Herbert", "cost": 9.99, "section": "Sci-Fi"},
            "Emma": {"author": "Jane Austen", "cost": 5, "section": "Classics"}}"#,
    );
    let mut library = Library::from_path(&path).unwrap();
    assert!(matches!(library.purchase("Dune"), PurchaseOutcome::Purchased(_)));
    assert_eq!(library.book_count(), 1);
    assert!(library
        .list_all()
        .iter()
        .flat_map(|section| &section.books)
        .all(|book| book.title != "Dune"));

    assert_eq!(library.purchase("Nonexistent"), PurchaseOutcome::NotFound);
    assert_eq!(library.book_count(), 1);
    assert_eq!(library.purchase("Dune"), PurchaseOutcome::NotFound);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Library::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Read { .. }));
}

#[test]
fn malformed_file_is_fatal() {
    let (_dir, path) = write_catalog(r#"{"Dune": {"author": "Frank Herbert""#);
    assert!(matches!(
        Library::from_path(&path),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn controller_drives_the_loaded_catalog() {
    let (_dir, path) = write_catalog(
        r#"{"Dune": {"author": "Frank Herbert", "cost": 9.99, "section": "Sci-Fi"},
            "Dune Messiah": {"author": "Frank Herbert", "cost": 8, "section": "Sci-Fi"}}"#,
    );
    let mut library = Library::from_path(&path).unwrap();
    let mut controller = Controller::new(&mut library);

    match controller.dispatch(Command::SearchAuthor("herbert".into())) {
        Feedback::Matches(books) => assert_eq!(books.len(), 2),
        other => panic!("unexpected feedback: {other:?}"),
    }
    assert!(matches!(
        controller.dispatch(Command::Buy("DUNE".into())),
        Feedback::Purchased(_)
    ));
    match controller.dispatch(Command::SearchTitle(String::new())) {
        Feedback::Matches(books) => {
            assert_eq!(books.len(), 1);
            assert_eq!(books[0].title, "Dune Messiah");
        }
        other => panic!("unexpected feedback: {other:?}"),
    }
}

#[test]
fn shipped_catalog_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("books.json");
    let library = Library::from_path(path).unwrap();
    assert!(library.book_count() > 0);
}
