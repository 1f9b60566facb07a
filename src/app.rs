//! Application state and core logic

use crate::config::TuiConfig;
use crate::host::ExpenseLedger;
use crate::state::{AppState, ExpenseForm, Form, FormMessage, SubmitEvent, SubmitStatus};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Host that receives submitted expenses
    pub ledger: ExpenseLedger,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        let form = ExpenseForm::with_settings(config.input_constraints(), config.submit_policy());
        let mut ledger = ExpenseLedger::with_capacity_limit(config.ledger_capacity);
        ledger.watch_form(form.watch_phase());
        Self {
            state: AppState::new(form),
            ledger,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            _ => match self.message_for_key(key) {
                Some(FormMessage::Submit) => self.submit(),
                Some(message) => {
                    self.state.form.update(message, &mut self.ledger)?;
                }
                None => {}
            },
        }
        Ok(())
    }

    /// Translate a key into a form message.
    ///
    /// Text keys go through the active input surface, which proposes the
    /// field's whole new text (or swallows the key).
    fn message_for_key(&self, key: KeyEvent) -> Option<FormMessage> {
        let form = &self.state.form;
        let active = form.active_field();

        let proposed = match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(FormMessage::Submit)
            }
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                return Some(FormMessage::Submit)
            }
            // Enter submits from any input, like a single-line form
            KeyCode::Enter => return Some(FormMessage::Submit),
            KeyCode::Char(' ') if form.is_submit_button_active() => {
                return Some(FormMessage::Submit)
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => form
                .get_field(active)
                .and_then(|field| field.proposed_with_char(c))?,
            KeyCode::Backspace => form
                .get_field(active)
                .map(|field| field.proposed_with_backspace())?,
            _ => return None,
        };

        match active {
            0 => Some(FormMessage::ChangeTitle(proposed)),
            1 => Some(FormMessage::ChangeAmount(proposed)),
            2 => Some(FormMessage::ChangeDate(proposed)),
            _ => None,
        }
    }

    /// Fire a submit event at the form
    fn submit(&mut self) {
        let mut event = SubmitEvent::new();
        let result = self.state.form.on_submit(&mut event, &mut self.ledger);
        tracing::debug!(phase = ?self.state.form.phase(), "Submit handled");

        // Nobody handled the event: fall back to the default action, leaving the form
        if !event.default_prevented() {
            self.quit = true;
            return;
        }

        match result {
            Ok(SubmitStatus::Submitted) => {
                self.state.form.set_active_field(0);
                self.state.status_message =
                    Some(format!("Expense added ({} total)", self.ledger.len()));
            }
            Ok(SubmitStatus::Rejected(violations)) => {
                let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
                self.push_error(format!("Expense not added: {}", reasons.join("; ")));
            }
            Err(e) => {
                self.push_error(format!("{e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CalendarDate;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fill_groceries(app: &mut App) {
        type_text(app, "Groceries");
        press(app, KeyCode::Tab);
        type_text(app, "12.50");
        press(app, KeyCode::Tab);
        type_text(app, "2023-05-01");
    }

    mod typing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_active_field() {
            let mut app = App::new(&TuiConfig::default());
            fill_groceries(&mut app);

            let form = &app.state.form;
            assert_eq!(form.title().value(), "Groceries");
            assert_eq!(form.amount().value(), "12.50");
            assert_eq!(form.date().value(), "2023-05-01");
        }

        #[test]
        fn test_amount_input_swallows_letters() {
            let mut app = App::new(&TuiConfig::default());
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "1x2");
            assert_eq!(app.state.form.amount().value(), "12");
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut app = App::new(&TuiConfig::default());
            type_text(&mut app, "Tea");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.state.form.title().value(), "Te");
        }

        #[test]
        fn test_typing_on_button_is_ignored() {
            let mut app = App::new(&TuiConfig::default());
            press(&mut app, KeyCode::BackTab);
            type_text(&mut app, "abc");
            assert!(app.state.form.title().is_empty());
            assert!(app.ledger.is_empty());
        }
    }

    mod submitting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_enter_submits_and_resets() {
            let mut app = App::new(&TuiConfig::default());
            fill_groceries(&mut app);
            press(&mut app, KeyCode::Enter);

            assert_eq!(app.ledger.len(), 1);
            let record = &app.ledger.entries()[0].record;
            assert_eq!(record.title, "Groceries");
            assert_eq!(record.amount, "12.50");
            assert_eq!(record.date, CalendarDate::parse("2023-05-01"));

            let form = &app.state.form;
            assert!(form.title().is_empty());
            assert!(form.amount().is_empty());
            assert!(form.date().is_empty());
            assert_eq!(form.active_field(), 0);
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Expense added (1 total)")
            );
            assert!(!app.should_quit());
        }

        #[test]
        fn test_ctrl_s_submits() {
            let mut app = App::new(&TuiConfig::default());
            type_text(&mut app, "Bus");
            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
                .unwrap();
            assert_eq!(app.ledger.len(), 1);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_space_on_button_submits() {
            let mut app = App::new(&TuiConfig::default());
            press(&mut app, KeyCode::BackTab);
            press(&mut app, KeyCode::Char(' '));
            assert_eq!(app.ledger.len(), 1);
        }

        #[test]
        fn test_host_failure_keeps_input_and_shows_error() {
            let config = TuiConfig {
                ledger_capacity: Some(0),
                ..Default::default()
            };
            let mut app = App::new(&config);
            fill_groceries(&mut app);
            press(&mut app, KeyCode::Enter);

            assert!(app.ledger.is_empty());
            assert!(app.state.has_errors());
            assert!(app
                .state
                .current_error()
                .is_some_and(|e| e.contains("ledger is full")));
            assert_eq!(app.state.form.title().value(), "Groceries");

            // Esc dismisses the dialog instead of quitting
            press(&mut app, KeyCode::Esc);
            assert!(!app.state.has_errors());
            assert!(!app.should_quit());
        }

        #[test]
        fn test_enforced_constraints_report_violations() {
            let config = TuiConfig {
                enforce_constraints: Some(true),
                ..Default::default()
            };
            let mut app = App::new(&config);
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "0");
            press(&mut app, KeyCode::Enter);

            assert!(app.ledger.is_empty());
            assert!(app
                .state
                .current_error()
                .is_some_and(|e| e.contains("at least 0.01")));
            assert_eq!(app.state.form.amount().value(), "0");
        }
    }

    mod key_mapping {
        use super::*;
        use pretty_assertions::assert_eq;

        fn message(app: &App, code: KeyCode, modifiers: KeyModifiers) -> Option<FormMessage> {
            app.message_for_key(KeyEvent::new(code, modifiers))
        }

        #[test]
        fn test_char_proposes_whole_text() {
            let mut app = App::new(&TuiConfig::default());
            type_text(&mut app, "Te");
            assert_eq!(
                message(&app, KeyCode::Char('a'), KeyModifiers::NONE),
                Some(FormMessage::ChangeTitle("Tea".to_string()))
            );
        }

        #[test]
        fn test_submit_keys() {
            let app = App::new(&TuiConfig::default());
            assert_eq!(
                message(&app, KeyCode::Enter, KeyModifiers::NONE),
                Some(FormMessage::Submit)
            );
            assert_eq!(
                message(&app, KeyCode::Char('s'), KeyModifiers::CONTROL),
                Some(FormMessage::Submit)
            );
        }

        #[test]
        fn test_swallowed_and_unknown_keys() {
            let mut app = App::new(&TuiConfig::default());
            press(&mut app, KeyCode::Tab);
            assert_eq!(message(&app, KeyCode::Char('x'), KeyModifiers::NONE), None);
            assert_eq!(message(&app, KeyCode::F(5), KeyModifiers::NONE), None);
            assert_eq!(
                message(&app, KeyCode::Char('a'), KeyModifiers::CONTROL),
                None
            );
        }

        #[test]
        fn test_backspace_on_empty_field_proposes_empty_text() {
            let app = App::new(&TuiConfig::default());
            assert_eq!(
                message(&app, KeyCode::Backspace, KeyModifiers::NONE),
                Some(FormMessage::ChangeTitle(String::new()))
            );
        }
    }

    #[test]
    fn test_should_quit_initially_false() {
        let app = App::new(&TuiConfig::default());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_esc_quits() {
        let mut app = App::new(&TuiConfig::default());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_keys_blocked_while_error_shown() {
        let mut app = App::new(&TuiConfig::default());
        app.push_error("boom");
        type_text(&mut app, "abc");
        assert!(app.state.form.title().is_empty());
        press(&mut app, KeyCode::Enter);
        assert!(!app.state.has_errors());
    }
}
