use crate::ui::form::Phase;
use crate::ui::theme::{BORDER, TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the current phase, left-aligned, with the version on the
/// right.
pub struct Footer {
    phase: Phase,
}

impl Footer {
    pub fn new(phase: Phase) -> Self {
        Self { phase }
    }

    pub fn hints(&self) -> &'static str {
        match self.phase {
            Phase::Loading => " Waiting for the analysis service │ Esc/Ctrl+Q: Quit",
            Phase::Idle | Phase::Success | Phase::Error => {
                " Enter: Analyze │ Ctrl+U: Clear │ Esc/Ctrl+Q: Quit"
            }
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{VERSION} ");

        // Char count, not byte count, for the box-drawing separators
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::raw(hints),
            Span::raw(" ".repeat(padding)),
            Span::raw(version),
        ]);

        Paragraph::new(line).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER)),
        )
    }
}
