//! In-memory expense ledger, the host used by the application shell

use super::traits::ExpenseHost;
use crate::state::{ExpenseRecord, FormPhase, PhaseWatch};
use anyhow::Result;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the ledger when it refuses a record
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("ledger is full ({capacity} expenses)")]
    Full { capacity: usize },
}

/// A submitted record together with the id the ledger gave it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseEntry {
    pub id: Uuid,
    #[serde(flatten)]
    pub record: ExpenseRecord,
}

/// Keeps submitted expenses in memory, newest last
#[derive(Debug, Default)]
pub struct ExpenseLedger {
    entries: Vec<ExpenseEntry>,
    capacity: Option<usize>,
    form_phase: Option<PhaseWatch>,
}

impl ExpenseLedger {
    /// Create a ledger that refuses records once it holds `capacity` entries
    pub fn with_capacity_limit(capacity: Option<usize>) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            form_phase: None,
        }
    }

    /// Follow the phase of the form that submits into this ledger
    pub fn watch_form(&mut self, phase: PhaseWatch) {
        self.form_phase = Some(phase);
    }

    pub fn entries(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the amounts that parse as numbers; others are skipped
    pub fn total_amount(&self) -> f64 {
        self.entries
            .iter()
            .filter_map(|e| e.record.amount_value())
            .sum()
    }
}

impl ExpenseHost for ExpenseLedger {
    fn on_submit(&mut self, record: ExpenseRecord) -> Result<()> {
        if let Some(phase) = self.form_phase.as_ref().map(PhaseWatch::get) {
            if phase != FormPhase::JustSubmitted {
                tracing::warn!(?phase, "Expense arrived outside a form submission");
            }
        }

        if let Some(capacity) = self.capacity {
            if self.entries.len() >= capacity {
                tracing::warn!(capacity, "Ledger full, rejecting expense");
                return Err(LedgerError::Full { capacity }.into());
            }
        }

        let entry = ExpenseEntry {
            id: Uuid::new_v4(),
            record,
        };
        match serde_json::to_string(&entry) {
            Ok(json) => tracing::info!(%json, "Expense recorded"),
            Err(e) => tracing::warn!(id = %entry.id, "Expense recorded, not serializable: {e}"),
        }
        self.entries.push(entry);
        Ok(())
    }
}
