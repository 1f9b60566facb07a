//! Trait abstraction for the form's host to enable mocking in tests

use crate::state::ExpenseRecord;
use anyhow::Result;

/// The submission capability a host hands to the expense form.
///
/// The record is moved in; the form keeps no reference to it afterwards.
#[cfg_attr(test, mockall::automock)]
pub trait ExpenseHost {
    /// Receive a submitted record
    fn on_submit(&mut self, record: ExpenseRecord) -> Result<()>;
}
