//! Input-level constraints declared on the amount and date inputs
//!
//! By default these are advisory: the form shows them as hints and still
//! submits whatever the user typed. `TuiConfig::enforce_constraints` turns
//! them into submission gates.

use crate::state::expense::CalendarDate;
use chrono::NaiveDate;
use thiserror::Error;

/// A value that falls outside its input's declared constraints
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstraintViolation {
    #[error("amount '{0}' is not a number")]
    AmountNotNumeric(String),
    #[error("amount must be at least {min:.2}")]
    AmountBelowMinimum { min: f64 },
    #[error("amount must be a multiple of {step:.2}")]
    AmountStepMismatch { step: f64 },
    #[error("date '{0}' is not a YYYY-MM-DD day")]
    DateNotParseable(String),
    #[error("date must be on or after {0}")]
    DateTooEarly(NaiveDate),
    #[error("date must be on or before {0}")]
    DateTooLate(NaiveDate),
}

/// Declared bounds of the amount and date inputs
#[derive(Debug, Clone, PartialEq)]
pub struct InputConstraints {
    pub amount_min: f64,
    pub amount_step: f64,
    pub date_min: NaiveDate,
    pub date_max: NaiveDate,
}

impl Default for InputConstraints {
    fn default() -> Self {
        Self {
            amount_min: 0.01,
            amount_step: 0.01,
            date_min: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap_or(NaiveDate::MIN),
            date_max: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }
}

impl InputConstraints {
    /// Check the amount text. Empty text is not a violation.
    pub fn check_amount(&self, text: &str) -> Option<ConstraintViolation> {
        if text.is_empty() {
            return None;
        }
        let value = match text.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => return Some(ConstraintViolation::AmountNotNumeric(text.to_string())),
        };
        if value < self.amount_min {
            return Some(ConstraintViolation::AmountBelowMinimum {
                min: self.amount_min,
            });
        }
        if self.amount_step > 0.0 {
            // Steps count from the minimum, like a number input's step base
            let steps = (value - self.amount_min) / self.amount_step;
            // Rounding error grows with the operands, so the slack scales with them
            let slack = (value.abs() + self.amount_min.abs()) / self.amount_step
                * f64::EPSILON
                * 16.0
                + 1e-9;
            if (steps - steps.round()).abs() > slack {
                return Some(ConstraintViolation::AmountStepMismatch {
                    step: self.amount_step,
                });
            }
        }
        None
    }

    /// Check the date text. Empty text is not a violation.
    pub fn check_date(&self, text: &str) -> Option<ConstraintViolation> {
        if text.is_empty() {
            return None;
        }
        let Some(date) = CalendarDate::parse(text).as_date() else {
            return Some(ConstraintViolation::DateNotParseable(text.to_string()));
        };
        if date < self.date_min {
            Some(ConstraintViolation::DateTooEarly(self.date_min))
        } else if date > self.date_max {
            Some(ConstraintViolation::DateTooLate(self.date_max))
        } else {
            None
        }
    }
}
