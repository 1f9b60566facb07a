//! Expense entry form: three controlled fields and the submit lifecycle

use super::constraints::{ConstraintViolation, InputConstraints};
use super::field::{FormField, InputKind};
use crate::host::ExpenseHost;
use crate::state::expense::{CalendarDate, ExpenseRecord};
use anyhow::{Context, Result};
use std::cell::Cell;
use std::rc::Rc;

/// Index of the "Add Expense" button in the focus order
pub const SUBMIT_BUTTON_INDEX: usize = 3;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Messages the expense form reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    ChangeTitle(String),
    ChangeAmount(String),
    ChangeDate(String),
    Submit,
}

/// Aggregate phase of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    /// The record is being handed to the host; fields reset right after
    JustSubmitted,
}

/// Read-only handle on a form's phase.
///
/// The host runs while the form is mutably borrowed, so this is how it can
/// tell that a record arrived from a submission in progress.
#[derive(Debug, Clone)]
pub struct PhaseWatch(Rc<Cell<FormPhase>>);

impl PhaseWatch {
    pub fn get(&self) -> FormPhase {
        self.0.get()
    }
}

/// A submission signal. Unless a handler prevents it, the shell runs the
/// default submit action (leaving the form).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// How the form behaves around the host call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmitPolicy {
    /// Clear the fields even when the host returns an error
    pub reset_on_host_failure: bool,
    /// Refuse to submit values that break the input constraints
    pub enforce_constraints: bool,
}

/// Result of a submission the host did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStatus {
    /// The record reached the host and the fields were reset
    Submitted,
    /// Constraint enforcement blocked the submission; fields kept
    Rejected(Vec<ConstraintViolation>),
}

/// The expense form controller.
///
/// Owns the title, amount and date fields. They change only through the
/// `on_*_change` reactions (or `update`), and are cleared after a submission.
#[derive(Debug)]
pub struct ExpenseForm {
    title: FormField,
    amount: FormField,
    date: FormField,
    phase: Rc<Cell<FormPhase>>,
    pub constraints: InputConstraints,
    pub policy: SubmitPolicy,
    pub active_field_index: usize,
}

impl ExpenseForm {
    pub fn new() -> Self {
        Self::with_settings(InputConstraints::default(), SubmitPolicy::default())
    }

    pub fn with_settings(constraints: InputConstraints, policy: SubmitPolicy) -> Self {
        Self {
            title: FormField::new("title", "Title", InputKind::Text),
            amount: FormField::new("amount", "Amount", InputKind::Amount),
            date: FormField::new("date", "Date", InputKind::Date),
            phase: Rc::new(Cell::new(FormPhase::Editing)),
            constraints,
            policy,
            active_field_index: 0,
        }
    }

    pub fn title(&self) -> &FormField {
        &self.title
    }

    pub fn amount(&self) -> &FormField {
        &self.amount
    }

    pub fn date(&self) -> &FormField {
        &self.date
    }

    pub fn phase(&self) -> FormPhase {
        self.phase.get()
    }

    pub fn watch_phase(&self) -> PhaseWatch {
        PhaseWatch(Rc::clone(&self.phase))
    }

    /// Returns true if the submit button currently has focus
    pub fn is_submit_button_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    pub fn on_title_change(&mut self, new_text: String) {
        tracing::debug!(field = self.title.name, value = %new_text, "Field changed");
        self.title.set_value(new_text);
    }

    pub fn on_amount_change(&mut self, new_text: String) {
        tracing::debug!(field = self.amount.name, value = %new_text, "Field changed");
        self.amount.set_value(new_text);
    }

    pub fn on_date_change(&mut self, new_text: String) {
        tracing::debug!(field = self.date.name, value = %new_text, "Field changed");
        self.date.set_value(new_text);
    }

    /// Constraint violations of the current values, for display
    pub fn advisory_hints(&self) -> Vec<ConstraintViolation> {
        [
            self.constraints.check_amount(self.amount.value()),
            self.constraints.check_date(self.date.value()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// True when constraints are enforced and the current values break one
    pub fn is_submit_blocked(&self) -> bool {
        self.policy.enforce_constraints && !self.advisory_hints().is_empty()
    }

    /// Assemble a record from the current values
    pub fn record(&self) -> ExpenseRecord {
        ExpenseRecord {
            title: self.title.value().to_string(),
            amount: self.amount.value().to_string(),
            date: CalendarDate::parse(self.date.value()),
        }
    }

    /// Submit the current values to `host`.
    ///
    /// Always prevents the event's default action. Fields are reset once the
    /// host accepts the record; if the host fails they are kept (unless
    /// `reset_on_host_failure`) and the host's error is returned.
    pub fn on_submit(
        &mut self,
        event: &mut SubmitEvent,
        host: &mut dyn ExpenseHost,
    ) -> Result<SubmitStatus> {
        event.prevent_default();

        if self.is_submit_blocked() {
            let violations = self.advisory_hints();
            tracing::info!(count = violations.len(), "Submission blocked by constraints");
            return Ok(SubmitStatus::Rejected(violations));
        }

        let record = self.record();
        tracing::info!(?record, "Submitting expense");

        self.phase.set(FormPhase::JustSubmitted);
        let result = host.on_submit(record);

        if result.is_ok() || self.policy.reset_on_host_failure {
            self.reset();
        }
        self.phase.set(FormPhase::Editing);

        result.context("Host did not accept the expense")?;
        Ok(SubmitStatus::Submitted)
    }

    /// Dispatch a message. Change messages always yield `None`.
    pub fn update(
        &mut self,
        message: FormMessage,
        host: &mut dyn ExpenseHost,
    ) -> Result<Option<SubmitStatus>> {
        match message {
            FormMessage::ChangeTitle(text) => self.on_title_change(text),
            FormMessage::ChangeAmount(text) => self.on_amount_change(text),
            FormMessage::ChangeDate(text) => self.on_date_change(text),
            FormMessage::Submit => {
                let mut event = SubmitEvent::new();
                return self.on_submit(&mut event, host).map(Some);
            }
        }
        Ok(None)
    }

    fn reset(&mut self) {
        self.title.clear();
        self.amount.clear();
        self.date.clear();
    }
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ExpenseForm {
    fn field_count(&self) -> usize {
        4 // title, amount, date, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.title),
            1 => Some(&self.amount),
            2 => Some(&self.date),
            // Index 3 is the submit button, no FormField for it
            _ => None,
        }
    }
}
