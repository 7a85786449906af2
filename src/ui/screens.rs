use crate::controller::Feedback;

/// Which view is on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    Main,
    Search,
}

/// Scrollable text shown under "Books Found:".
#[derive(Default)]
pub(crate) struct ResultsPane {
    pub(crate) lines: Vec<String>,
    pub(crate) scroll: u16,
}

impl ResultsPane {
    /// Replace the contents with `feedback` and jump back to the top.
    pub(crate) fn show(&mut self, feedback: &Feedback) {
        self.lines = feedback.lines();
        self.scroll = 0;
    }

    pub(crate) fn scroll_by(&mut self, offset: i32) {
        let max = self.lines.len().saturating_sub(1).min(u16::MAX as usize) as i32;
        self.scroll = (self.scroll as i32 + offset).clamp(0, max) as u16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Book;

    #[test]
    fn scrolling_stays_within_content() {
        let mut pane = ResultsPane::default();
        pane.show(&Feedback::Matches(vec![
            Book::new("A", "X", 1.0),
            Book::new("B", "Y", 2.0),
        ]));
        assert_eq!(pane.lines.len(), 8);
        pane.scroll_by(-3);
        assert_eq!(pane.scroll, 0);
        pane.scroll_by(5);
        assert_eq!(pane.scroll, 5);
        pane.scroll_by(50);
        assert_eq!(pane.scroll, 7);

        pane.show(&Feedback::NotFound);
        assert_eq!(pane.scroll, 0);
        pane.scroll_by(1);
        assert_eq!(pane.scroll, 0);
    }
}
