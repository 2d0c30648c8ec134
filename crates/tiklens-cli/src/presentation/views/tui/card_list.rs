use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::presentation::formatters::truncate;
use crate::presentation::view_models::RelationshipCard;

const HANDLE_WIDTH: usize = 28;

/// Scrollable list of cards with the selected one highlighted
pub struct CardListView<'a, 'b> {
    cards: &'a [RelationshipCard<'b>],
    selected: usize,
    title: &'a str,
}

impl<'a, 'b> CardListView<'a, 'b> {
    pub fn new(cards: &'a [RelationshipCard<'b>], selected: usize, title: &'a str) -> Self {
        Self {
            cards,
            selected,
            title,
        }
    }
}

impl<'a, 'b> Widget for CardListView<'a, 'b> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!("{} ({})", self.title, self.cards.len()))
            .borders(Borders::ALL);

        if self.cards.is_empty() {
            Paragraph::new("Nothing to show.").block(block).render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .cards
            .iter()
            .map(|card| {
                let view = &card.view;
                let mut spans = vec![
                    Span::styled(
                        format!("[{}] ", view.avatar_glyph),
                        Style::default().fg(Color::Magenta),
                    ),
                    Span::raw(format!(
                        "{:<width$}",
                        truncate(&view.handle_label, HANDLE_WIDTH),
                        width = HANDLE_WIDTH
                    )),
                ];
                if let Some(badge) = &view.mutual_badge {
                    spans.push(Span::styled(
                        format!(" {}", badge.icon.glyph()),
                        Style::default().fg(Color::Green),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
