use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::controller::Command;

/// The three text entries on the search screen, in focus order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum SearchField {
    #[default]
    Title,
    Author,
    Buy,
}

impl SearchField {
    pub(crate) const ALL: [SearchField; 3] =
        [SearchField::Title, SearchField::Author, SearchField::Buy];

    pub(crate) fn label(self) -> &'static str {
        match self {
            SearchField::Title => "Search Book by Title:",
            SearchField::Author => "Search Author's Books:",
            SearchField::Buy => "Buy Book by Title:",
        }
    }

    /// Caption of the action Enter triggers on this field.
    pub(crate) fn action(self) -> &'static str {
        match self {
            SearchField::Title | SearchField::Author => "Search",
            SearchField::Buy => "Buy",
        }
    }

    fn next(self) -> Self {
        match self {
            SearchField::Title => SearchField::Author,
            SearchField::Author => SearchField::Buy,
            SearchField::Buy => SearchField::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            SearchField::Title => SearchField::Buy,
            SearchField::Author => SearchField::Title,
            SearchField::Buy => SearchField::Author,
        }
    }
}

/// Text typed into the search screen's entries plus the focused one.
#[derive(Default, Clone)]
pub(crate) struct SearchForm {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) buy: String,
    pub(crate) active: SearchField,
}

impl SearchForm {
    pub(crate) fn focus_next(&mut self) {
        self.active = self.active.next();
    }

    pub(crate) fn focus_previous(&mut self) {
        self.active = self.active.previous();
    }

    /// Append a character to the focused entry. Control characters are
    /// rejected.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.value_mut(self.active).push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.value_mut(self.active).pop();
    }

    /// Turn the focused entry into the command it stands for. Entries are not
    /// cleared, so the same query can be re-run.
    pub(crate) fn submit(&self) -> Command {
        let text = self.value(self.active).to_string();
        match self.active {
            SearchField::Title => Command::SearchTitle(text),
            SearchField::Author => Command::SearchAuthor(text),
            SearchField::Buy => Command::Buy(text),
        }
    }

    pub(crate) fn value(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::Author => &self.author,
            SearchField::Buy => &self.buy,
        }
    }

    fn value_mut(&mut self, field: SearchField) -> &mut String {
        match field {
            SearchField::Title => &mut self.title,
            SearchField::Author => &mut self.author,
            SearchField::Buy => &mut self.buy,
        }
    }

    pub(crate) fn value_len(&self, field: SearchField) -> usize {
        self.value(field).chars().count()
    }

    /// Render the entry text, with a dim placeholder when it is empty.
    pub(crate) fn build_line(&self, field: SearchField) -> Line<'static> {
        let value = self.value(field);
        if value.is_empty() && field != self.active {
            return Line::from(Span::styled(
                format!("<{}>", field.action().to_lowercase()),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let style = if field == self.active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Line::from(Span::styled(value.to_string(), style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut form = SearchForm::default();
        assert_eq!(form.active, SearchField::Title);
        form.focus_next();
        form.focus_next();
        assert_eq!(form.active, SearchField::Buy);
        form.focus_next();
        assert_eq!(form.active, SearchField::Title);
        form.focus_previous();
        assert_eq!(form.active, SearchField::Buy);
    }

    #[test]
    fn typing_edits_only_the_focused_field() {
        let mut form = SearchForm::default();
        assert!(form.push_char('d'));
        form.focus_next();
        assert!(form.push_char('h'));
        assert!(!form.push_char('\n'));
        form.backspace();
        assert_eq!(form.title, "d");
        assert_eq!(form.author, "");
    }

    #[test]
    fn submit_maps_field_to_command() {
        let mut form = SearchForm {
            buy: "Dune".into(),
            active: SearchField::Buy,
            ..Default::default()
        };
        assert_eq!(form.submit(), Command::Buy("Dune".into()));
        form.active = SearchField::Author;
        assert_eq!(form.submit(), Command::SearchAuthor(String::new()));
    }
}
