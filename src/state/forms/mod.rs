//! Form domain layer
//!
//! Controlled fields, input constraints and the expense form controller.

mod constraints;
mod expense_form;
mod field;

pub use constraints::InputConstraints;
pub use expense_form::{
    ExpenseForm, Form, FormMessage, FormPhase, PhaseWatch, SubmitEvent, SubmitPolicy,
    SubmitStatus,
};
pub use field::FormField;
