//! Application state module

mod app_state;
mod expense;
mod forms;

pub use app_state::*;
pub use expense::*;
pub use forms::*;
