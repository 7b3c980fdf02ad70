use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::view::{FEEDBACK_HEADING, ISSUE_COLUMNS, ISSUE_HEADING, RESULT_HEADING};
use crate::ui::form::{FormView, ResultView};
use crate::ui::header::Header;
use crate::ui::layout::{form_regions, layout_regions};
use crate::ui::theme::{ACCENT, BORDER, BUTTON_BG, ERROR_TEXT, MUTED_TEXT, SPINNER, TEXT};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    draw_form(frame, &app.view(), app.spinner_frame(), app.service_url());
}

/// Draw a projected form. Reads nothing but its arguments.
pub fn draw_form(frame: &mut Frame<'_>, view: &FormView, spinner: &str, service_url: &str) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(view.title, service_url).widget(), header);
    frame.render_widget(Clear, body);

    let (input_area, button_area, outcome_area) = form_regions(body);
    render_input(frame, input_area, view);
    render_button(frame, button_area, view, spinner);

    if let Some(error) = &view.error {
        render_error(frame, outcome_area, error);
    } else if let Some(result) = &view.result {
        render_result(frame, outcome_area, result);
    }

    frame.render_widget(Footer::new(view.phase).widget(footer), footer);
}

fn render_input(frame: &mut Frame<'_>, area: Rect, view: &FormView) {
    let border_color = if view.input_enabled { TEXT } else { BORDER };
    let block = Block::default()
        .title(" Listing link ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    let text_width = inner.width.saturating_sub(1) as usize;
    let line = if view.input.is_empty() {
        Line::from(Span::styled(
            view.placeholder,
            Style::default().fg(MUTED_TEXT),
        ))
    } else {
        Line::from(Span::styled(
            visible_tail(&view.input, text_width),
            Style::default().fg(TEXT),
        ))
    };
    frame.render_widget(Paragraph::new(line).block(block), area);

    if view.input_enabled && inner.width > 0 && inner.height > 0 {
        let typed = view.input.chars().count().min(text_width) as u16;
        frame.set_cursor_position((inner.x + typed, inner.y));
    }
}

fn render_button(frame: &mut Frame<'_>, area: Rect, view: &FormView, spinner: &str) {
    let line = if view.input_enabled {
        let style = if view.submit_enabled {
            Style::default()
                .fg(TEXT)
                .bg(BUTTON_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        Line::from(Span::styled(format!(" {} ", view.submit_label), style))
    } else {
        Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(SPINNER)),
            Span::styled(view.submit_label, Style::default().fg(TEXT)),
        ])
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_error(frame: &mut Frame<'_>, area: Rect, error: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        error,
        Style::default().fg(ERROR_TEXT),
    )))
    .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_result(frame: &mut Frame<'_>, area: Rect, result: &ResultView) {
    let heading_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(TEXT);

    let mut lines = vec![Line::from(Span::styled(RESULT_HEADING, heading_style))];
    lines.extend(
        result
            .summary
            .iter()
            .map(|entry| Line::from(Span::styled(entry.as_str(), text_style))),
    );
    if let Some(items) = &result.recent_feedbacks {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(FEEDBACK_HEADING, heading_style)));
        lines.extend(
            items
                .iter()
                .map(|item| Line::from(Span::styled(format!("  • {item}"), text_style))),
        );
    }

    let Some(rows) = &result.issue_rows else {
        frame.render_widget(Paragraph::new(lines), area);
        return;
    };

    let text_height = (lines.len() as u16).saturating_add(1);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(text_height), Constraint::Min(0)])
        .split(area);
    frame.render_widget(Paragraph::new(lines), parts[0]);

    let header = Row::new(ISSUE_COLUMNS).style(heading_style);
    let body = rows.iter().map(|row| {
        Row::new([row.issue.as_str(), row.sentiment.as_str(), row.count.as_str()])
            .style(text_style)
    });
    let table = Table::new(
        body,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(Span::styled(format!(" {ISSUE_HEADING} "), heading_style))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER)),
    );
    frame.render_widget(table, parts[1]);
}

/// Last `width` chars of `text`, so the cursor end stays visible.
fn visible_tail(text: &str, width: usize) -> String {
    let count = text.chars().count();
    text.chars().skip(count.saturating_sub(width)).collect()
}
