//! Expense form rendering

use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::state::{Form, InputConstraints};
use crate::ui::components::{button_width, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the expense form: three inputs, constraint hints and the submit button
pub fn draw_expense_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title
            Constraint::Length(3),             // Amount
            Constraint::Length(3),             // Date
            Constraint::Length(2),             // Constraint hints
            Constraint::Length(BUTTON_HEIGHT), // Add Expense
            Constraint::Min(0),
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" New Expense ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    for index in 0..3 {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, chunks[index], field, form.active_field() == index);
        }
    }

    draw_hints(frame, chunks[3], app);

    let label = "Add Expense";
    let button_area = Rect {
        width: chunks[4].width.min(button_width(label)),
        ..chunks[4]
    };
    render_button(
        frame,
        button_area,
        label,
        form.is_submit_button_active(),
        form.is_submit_blocked(),
    );

    draw_help_text(
        frame,
        chunks[6],
        &[
            ("Tab", "next field"),
            ("Enter", "add"),
            (crate::platform::SUBMIT_SHORTCUT, "add"),
            ("Esc", "quit"),
        ],
    );
}

/// Constraint summary, or the current values' violations when there are any
fn draw_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = app.state.form.advisory_hints();
    let lines: Vec<Line> = if hints.is_empty() {
        constraint_summary(&app.state.form.constraints)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::DarkGray))))
            .collect()
    } else {
        hints
            .iter()
            .map(|h| Line::from(Span::styled(format!("! {h}"), Style::default().fg(Color::Yellow))))
            .collect()
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn constraint_summary(constraints: &InputConstraints) -> [String; 2] {
    [
        format!(
            "Amount: min {:.2}, step {:.2}",
            constraints.amount_min, constraints.amount_step
        ),
        format!("Date: {} to {}", constraints.date_min, constraints.date_max),
    ]
}
