use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::BrowseStatusViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a BrowseStatusViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a BrowseStatusViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(inner);

        let mut status = vec![Span::raw(format!(
            "{} {}/{} ",
            self.model.title, self.model.position, self.model.total
        ))];
        if let Some(message) = &self.model.message {
            status.push(Span::raw("| "));
            status.push(Span::styled(
                message.as_str(),
                Style::default().fg(status_level_to_color(self.model.level)),
            ));
        }
        Paragraph::new(Line::from(status)).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help = Line::from(vec![
            Span::styled("[q]", key),
            Span::raw("uit "),
            Span::styled("[j/k]", key),
            Span::raw("move "),
            Span::styled("[enter]", key),
            Span::raw("open"),
        ]);
        Paragraph::new(help).render(chunks[1], buf);
    }
}
