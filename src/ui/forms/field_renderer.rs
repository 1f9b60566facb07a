//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a controlled field: the text shown is always the field's value
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let value_span = if field.is_empty() {
        let placeholder = match (field.kind.placeholder(), is_active) {
            ("", false) => "(empty)",
            (placeholder, _) => placeholder,
        };
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(field.value(), style)
    };

    // Cursor goes after the typed text, before any placeholder
    let spans = if field.is_empty() {
        vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            value_span,
        ]
    } else {
        vec![
            value_span,
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw a one-line help text of key/description pairs
pub fn draw_help_text(frame: &mut Frame, area: Rect, pairs: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, description) in pairs {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {description}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
