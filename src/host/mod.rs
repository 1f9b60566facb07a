//! Host side of the expense form: whoever receives submitted records

mod ledger;
mod traits;

pub use ledger::ExpenseLedger;
pub use traits::ExpenseHost;

#[cfg(test)]
pub use traits::MockExpenseHost;
