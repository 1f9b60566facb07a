//! Ledger panel: the expenses the form has handed over

use super::widgets::render_scrollable_list;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the list of recorded expenses with their total
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let ledger = &app.ledger;

    let block = Block::default()
        .title(format!(" Expenses ({}) ", ledger.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    if ledger.is_empty() {
        let empty = Paragraph::new("No expenses yet").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, chunks[0]);
    } else {
        let items: Vec<ListItem> = ledger
            .entries()
            .iter()
            .map(|entry| {
                let id = entry.id.simple().to_string();
                let date_style = if entry.record.date.is_valid() {
                    Style::default().fg(Color::Blue)
                } else {
                    Style::default().fg(Color::Red)
                };
                let title = if entry.record.title.is_empty() {
                    "(untitled)"
                } else {
                    entry.record.title.as_str()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", &id[..8]), Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{:<12} ", entry.record.date.to_string()), date_style),
                    Span::raw(format!("{:<24} ", truncate_str(title, 24))),
                    Span::styled(
                        format!("{:>10}", entry.record.amount),
                        Style::default().fg(Color::Green),
                    ),
                ]))
            })
            .collect();
        render_scrollable_list(frame, chunks[0], List::new(items), ledger.len() - 1);
    }

    let total = Paragraph::new(Line::from(vec![
        Span::raw("Total: "),
        Span::styled(
            format!("{:.2}", ledger.total_amount()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(total, chunks[1]);
}

/// Truncate a string to a maximum number of chars with ellipsis
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
