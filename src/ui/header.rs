use crate::ui::theme::{ACCENT, BORDER, SEPARATOR, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    title: &'a str,
    service_url: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, service_url: &'a str) -> Self {
        Self { title, service_url }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled(
                self.title,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", Style::default().fg(SEPARATOR)),
            Span::styled(self.service_url, Style::default().fg(TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(BORDER)),
        )
    }
}
