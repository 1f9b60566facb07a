//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `expense_form`: The expense entry form

mod expense_form;
mod field_renderer;

pub use expense_form::draw_expense_form;
