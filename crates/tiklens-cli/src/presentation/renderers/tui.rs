//! Interactive card browser.
//!
//! Owns only UI state (selection, status line). Cards and their activation
//! hooks come from the handler.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};

use crate::presentation::view_models::{BrowseStatusViewModel, RelationshipCard, StatusLevel};
use crate::presentation::views::tui::{CardDetailView, CardListView, StatusBarView};

const PAGE_STEP: usize = 10;

pub struct BrowseRenderer<'a, 'b> {
    title: String,
    cards: &'a [RelationshipCard<'b>],
    selected: usize,
    should_quit: bool,
    status: Option<(String, StatusLevel)>,
}

impl<'a, 'b> BrowseRenderer<'a, 'b> {
    pub fn new(title: impl Into<String>, cards: &'a [RelationshipCard<'b>]) -> Self {
        Self {
            title: title.into(),
            cards,
            selected: 0,
            should_quit: false,
            status: None,
        }
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut terminal = match Self::enter_screen() {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(e);
            }
        };

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn enter_screen() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Ok(Terminal::new(CrosstermBackend::new(stdout))?)
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key_event(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_by(1),
            KeyCode::PageUp => self.move_by(-(PAGE_STEP as isize)),
            KeyCode::PageDown => self.move_by(PAGE_STEP as isize),
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = self.cards.len().saturating_sub(1);
            }
            KeyCode::Enter => self.activate_selected(),
            _ => {}
        }
    }

    fn move_by(&mut self, delta: isize) {
        let last = self.cards.len().saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    fn activate_selected(&mut self) {
        let Some(card) = self.cards.get(self.selected) else {
            return;
        };
        card.activate();
        self.status = Some(if card.has_action() {
            (format!("Opened {}", card.view.handle_label), StatusLevel::Success)
        } else {
            (format!("No action for {}", card.view.handle_label), StatusLevel::Info)
        });
    }

    fn status_model(&self) -> BrowseStatusViewModel {
        let (message, level) = match &self.status {
            Some((message, level)) => (Some(message.clone()), *level),
            None => (None, StatusLevel::Info),
        };
        BrowseStatusViewModel {
            title: self.title.clone(),
            position: if self.cards.is_empty() { 0 } else { self.selected + 1 },
            total: self.cards.len(),
            message,
            level,
        }
    }

    fn render(&self, f: &mut Frame) {
        let rows = Layout::vertical([Constraint::Min(5), Constraint::Length(3)]).split(f.area());
        let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        f.render_widget(
            CardListView::new(self.cards, self.selected, &self.title),
            columns[0],
        );
        f.render_widget(
            CardDetailView::new(self.cards.get(self.selected).map(|c| &c.view)),
            columns[1],
        );

        let status = self.status_model();
        f.render_widget(StatusBarView::new(&status), rows[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::{CardInput, render_card};
    use crossterm::event::KeyModifiers;
    use std::cell::Cell;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_is_clamped() {
        let cards: Vec<RelationshipCard> = ["a", "b", "c"]
            .into_iter()
            .map(|name| RelationshipCard::new(render_card(CardInput::new(name))))
            .collect();
        let mut browser = BrowseRenderer::new("Followers", &cards);

        browser.handle_key_event(press(KeyCode::Up));
        assert_eq!(browser.selected, 0);

        browser.handle_key_event(press(KeyCode::PageDown));
        assert_eq!(browser.selected, 2);

        browser.handle_key_event(press(KeyCode::Char('k')));
        assert_eq!(browser.selected, 1);

        browser.handle_key_event(press(KeyCode::Char('g')));
        assert_eq!(browser.status_model().position, 1);

        browser.handle_key_event(press(KeyCode::Char('q')));
        assert!(browser.should_quit);
    }

    #[test]
    fn test_enter_activates_selected_card() {
        let first = Cell::new(0);
        let second = Cell::new(0);
        let cards = vec![
            RelationshipCard::new(render_card(CardInput::new("alice")))
                .with_action(|| first.set(first.get() + 1)),
            RelationshipCard::new(render_card(CardInput::new("bob")))
                .with_action(|| second.set(second.get() + 1)),
        ];
        let mut browser = BrowseRenderer::new("Followers", &cards);

        browser.handle_key_event(press(KeyCode::Down));
        browser.handle_key_event(press(KeyCode::Enter));

        assert_eq!((first.get(), second.get()), (0, 1));
        assert_eq!(
            browser.status_model().message.as_deref(),
            Some("Opened @bob")
        );
        assert_eq!(browser.status_model().level, StatusLevel::Success);
    }

    #[test]
    fn test_enter_without_action_is_info() {
        let cards = vec![RelationshipCard::new(render_card(CardInput::new("carol")))];
        let mut browser = BrowseRenderer::new("Following", &cards);

        browser.handle_key_event(press(KeyCode::Enter));

        let status = browser.status_model();
        assert_eq!(status.message.as_deref(), Some("No action for @carol"));
        assert_eq!(status.level, StatusLevel::Info);
    }

    #[test]
    fn test_enter_on_empty_list_is_noop() {
        let cards: Vec<RelationshipCard> = Vec::new();
        let mut browser = BrowseRenderer::new("Mutuals", &cards);

        browser.handle_key_event(press(KeyCode::Enter));
        browser.handle_key_event(press(KeyCode::Down));

        assert_eq!(browser.selected, 0);
        assert_eq!(browser.status_model().position, 0);
        assert!(browser.status_model().message.is_none());
    }
}
