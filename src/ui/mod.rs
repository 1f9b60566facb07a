//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod ledger;
mod widgets;

use crate::app::App;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, ledger_area) = layout::create_layout(frame.area());

    forms::draw_expense_form(frame, form_area, app);
    ledger::draw(frame, ledger_area, app);
    layout::draw_status_bar(frame, app);

    // Modal error dialog on top of everything
    if let Some(error) = app.state.current_error() {
        let queued = app.state.error_queue.len().saturating_sub(1);
        render_error_dialog(frame, error, queued);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::host::ExpenseHost;
    use crate::state::{CalendarDate, ExpenseRecord};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_to_string(buf: &Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push_str(buf[(x, y)].symbol());
            }
            s.push('\n');
        }
        s
    }

    fn render(app: &App) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_labels_and_button() {
        let app = App::new(&TuiConfig::default());
        let output = render(&app);
        assert!(output.contains("New Expense"));
        assert!(output.contains("Title"));
        assert!(output.contains("Amount"));
        assert!(output.contains("Date"));
        assert!(output.contains("Add Expense"));
        assert!(output.contains("No expenses yet"));
        assert!(output.contains("2019-01-01 to 2023-12-31"));
    }

    #[test]
    fn test_renders_current_values() {
        let mut app = App::new(&TuiConfig::default());
        app.state.form.on_title_change("Groceries".to_string());
        app.state.form.on_amount_change("12.50".to_string());
        let output = render(&app);
        assert!(output.contains("Groceries"));
        assert!(output.contains("12.50"));
    }

    #[test]
    fn test_renders_advisory_hints() {
        let mut app = App::new(&TuiConfig::default());
        app.state.form.on_date_change("2030-01-01".to_string());
        let output = render(&app);
        assert!(output.contains("date must be on or before 2023-12-31"));
    }

    #[test]
    fn test_renders_ledger_entries_and_total() {
        let mut app = App::new(&TuiConfig::default());
        app.ledger
            .on_submit(ExpenseRecord {
                title: "Rent".to_string(),
                amount: "800".to_string(),
                date: CalendarDate::parse("2022-03-01"),
            })
            .unwrap();
        let output = render(&app);
        assert!(output.contains("Expenses (1)"));
        assert!(output.contains("Rent"));
        assert!(output.contains("2022-03-01"));
        assert!(output.contains("800.00"));
    }

    #[test]
    fn test_renders_error_dialog() {
        let mut app = App::new(&TuiConfig::default());
        app.push_error("ledger is full (0 expenses)");
        let output = render(&app);
        assert!(output.contains("Error"));
        assert!(output.contains("ledger is full"));
    }
}
