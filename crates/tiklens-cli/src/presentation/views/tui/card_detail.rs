use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::profile_url;
use crate::presentation::view_models::RelationshipCardViewModel;

/// Full card for the current selection
pub struct CardDetailView<'a> {
    model: Option<&'a RelationshipCardViewModel>,
}

impl<'a> CardDetailView<'a> {
    pub fn new(model: Option<&'a RelationshipCardViewModel>) -> Self {
        Self { model }
    }
}

impl<'a> Widget for CardDetailView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title("Card").borders(Borders::ALL);

        let Some(card) = self.model else {
            Paragraph::new("No card selected.").block(block).render(area, buf);
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                format!(" {} ", card.avatar_glyph),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                card.handle_label.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        if let Some(badge) = &card.mutual_badge {
            lines.push(Line::from(Span::styled(
                format!("{} {}", badge.icon.glyph(), badge.label),
                Style::default().fg(Color::Green),
            )));
        }

        lines.push(Line::from(""));
        lines.extend(card.date_lines.iter().map(|l| Line::from(l.as_str())));

        if !card.username.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                profile_url(&card.username),
                Style::default().fg(Color::Cyan),
            )));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
