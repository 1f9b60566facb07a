//! Expense record handed from the form to the host

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// Date format used by the date input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar day parsed from the date input.
///
/// Parsing never fails: text that is not a `YYYY-MM-DD` day becomes
/// `Invalid`, keeping the raw text so the host can decide what to do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarDate {
    Valid(NaiveDate),
    Invalid(String),
}

impl CalendarDate {
    /// Parse the date input's text
    pub fn parse(text: &str) -> Self {
        match NaiveDate::parse_from_str(text, DATE_FORMAT) {
            Ok(date) => CalendarDate::Valid(date),
            Err(_) => CalendarDate::Invalid(text.to_string()),
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CalendarDate::Valid(date) => Some(*date),
            CalendarDate::Invalid(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, CalendarDate::Valid(_))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarDate::Valid(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            CalendarDate::Invalid(_) => f.write_str("Invalid Date"),
        }
    }
}

// Invalid dates serialize as null, valid ones as "YYYY-MM-DD"
impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CalendarDate::Valid(date) => {
                serializer.collect_str(&date.format(DATE_FORMAT))
            }
            CalendarDate::Invalid(_) => serializer.serialize_none(),
        }
    }
}

/// The record assembled from the form at submission time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseRecord {
    pub title: String,
    /// Numeric-looking text, copied verbatim from the amount input
    pub amount: String,
    pub date: CalendarDate,
}

impl ExpenseRecord {
    /// Amount as a number, if the text parses as one
    pub fn amount_value(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}
