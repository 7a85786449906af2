use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tracing::debug;

use crate::catalog::Library;
use crate::controller::{Command, Controller, Feedback};

use super::forms::{SearchField, SearchForm};
use super::helpers::{centered_rect, key_hints};
use super::screens::{ResultsPane, Screen};

pub(crate) const WINDOW_TITLE: &str = "Book Store Management System";
const WELCOME_BANNER: &str = "Welcome to the Book Store Management System";
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height of one bordered text entry.
const FIELD_HEIGHT: u16 = 3;
/// Lines moved per PageUp/PageDown in the results pane.
const PAGE_STEP: i32 = 10;

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Application state for the bookstore TUI. The catalog itself is borrowed
/// through the [`Controller`]; the app only keeps view state.
pub struct App<'a> {
    controller: Controller<'a>,
    screen: Screen,
    form: SearchForm,
    results: ResultsPane,
    status: Option<StatusMessage>,
}

impl<'a> App<'a> {
    /// Start on the main view with the full listing already in the results
    /// pane, so the search view opens on the whole catalog.
    pub fn new(library: &'a mut Library) -> Self {
        let mut controller = Controller::new(library);
        let mut results = ResultsPane::default();
        results.show(&controller.dispatch(Command::ListAll));
        Self {
            controller,
            screen: Screen::Main,
            form: SearchForm::default(),
            results,
            status: None,
        }
    }

    pub fn library(&self) -> &Library {
        self.controller.library()
    }

    /// Handle one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.screen {
            Screen::Main => match code {
                KeyCode::Char('q') | KeyCode::Esc => return true,
                KeyCode::Enter | KeyCode::Char('s') => self.open_search(),
                _ => {}
            },
            Screen::Search => self.handle_search_key(code),
        }
        false
    }

    /// Handle a key press with its modifiers. Ctrl-C quits and Ctrl-L
    /// re-lists; any other Ctrl chord is ignored. Ctrl+Alt is left alone
    /// because AltGr layouts report printable characters that way.
    pub fn handle_key_event(&mut self, event: KeyEvent) -> bool {
        let chord = event.modifiers.contains(KeyModifiers::CONTROL)
            && !event.modifiers.contains(KeyModifiers::ALT);
        if chord {
            match event.code {
                KeyCode::Char('c') => return true,
                KeyCode::Char('l') => self.handle_ctrl_l(),
                _ => {}
            }
            return false;
        }
        self.handle_key(event.code)
    }

    /// Ctrl-L re-lists the whole catalog while on the search view.
    pub(crate) fn handle_ctrl_l(&mut self) {
        if self.screen == Screen::Search {
            self.run(Command::ListAll);
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.screen = Screen::Main;
                self.clear_status();
            }
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_previous(),
            KeyCode::PageUp => self.results.scroll_by(-PAGE_STEP),
            KeyCode::PageDown => self.results.scroll_by(PAGE_STEP),
            KeyCode::Enter => {
                let command = self.form.submit();
                self.run(command);
            }
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(ch) => {
                self.form.push_char(ch);
            }
            _ => {}
        }
    }

    fn open_search(&mut self) {
        debug!("opening search view");
        self.screen = Screen::Search;
    }

    fn run(&mut self, command: Command) {
        let feedback = self.controller.dispatch(command);
        self.results.show(&feedback);
        self.report(&feedback);
    }

    /// Summarize the outcome in the footer.
    fn report(&mut self, feedback: &Feedback) {
        match feedback {
            Feedback::Listing(sections) => {
                let books: usize = sections.iter().map(|s| s.books.len()).sum();
                self.set_status(
                    format!("Showing {books} books in {} sections.", sections.len()),
                    StatusKind::Info,
                );
            }
            Feedback::Matches(books) => {
                let noun = if books.len() == 1 { "book" } else { "books" };
                self.set_status(format!("{} {noun} found.", books.len()), StatusKind::Info);
            }
            Feedback::Purchased(book) => {
                self.set_status(format!("Purchased \"{}\".", book.title), StatusKind::Info)
            }
            miss => {
                let text = miss.lines().join(" ");
                self.set_status(text, StatusKind::Error);
            }
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match self.screen {
            Screen::Main => self.draw_main(frame, content_area),
            Screen::Search => self.draw_search(frame, content_area),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }
    }

    fn draw_main(&self, frame: &mut Frame, area: Rect) {
        let outer = Block::default().borders(Borders::ALL).title(WINDOW_TITLE);
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let library = self.library();
        let banner = Paragraph::new(vec![
            Line::from(Span::styled(
                WELCOME_BANNER,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "{} books across {} sections",
                    library.book_count(),
                    library.section_count()
                ),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled(
                    "[Enter]",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to search books"),
            ]),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(banner, centered_rect(80, 40, inner));
    }

    fn draw_search(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Min(3),
            ])
            .split(area);

        for (field, chunk) in SearchField::ALL.into_iter().zip(chunks.iter()) {
            self.draw_field(frame, *chunk, field);
        }

        let lines: Vec<Line> = self
            .results
            .lines
            .iter()
            .map(|line| Line::from(line.as_str()))
            .collect();
        let results = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Books Found:"))
            .scroll((self.results.scroll, 0));
        frame.render_widget(results, chunks[3]);
    }

    fn draw_field(&self, frame: &mut Frame, area: Rect, field: SearchField) {
        let active = self.form.active == field;
        let mut block = Block::default().borders(Borders::ALL).title(field.label());
        if active {
            block = block
                .border_style(Style::default().fg(Color::Yellow))
                .title_bottom(Line::from(format!("[Enter] {}", field.action())).right_aligned());
        }
        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(self.form.build_line(field)).block(block), area);

        if active && inner.width > 0 && inner.height > 0 {
            let offset = (self.form.value_len(field) as u16).min(inner.width - 1);
            frame.set_cursor_position((inner.x + offset, inner.y));
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        match self.screen {
            Screen::Main => key_hints(&[("Enter", "Search Books"), ("q", "Quit")]),
            Screen::Search => key_hints(&[
                ("Tab", "Next Field"),
                ("Enter", self.form.active.action()),
                ("Ctrl-L", "List All"),
                ("PgUp/PgDn", "Scroll"),
                ("Esc", "Back"),
            ]),
        }
    }
}
