//! Application state definitions

use super::forms::ExpenseForm;
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The expense entry form
    pub form: ExpenseForm,
    /// Errors waiting to be shown, oldest first
    pub error_queue: VecDeque<String>,
    /// One-line message shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(form: ExpenseForm) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!(%message, "Error queued");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently displayed
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the displayed error, revealing the next one
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
