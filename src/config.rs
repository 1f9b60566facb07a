//! Configuration handling for the TUI

use crate::state::{InputConstraints, SubmitPolicy};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TuiConfig {
    /// Clear the form even when the ledger refuses a record
    pub reset_on_host_failure: Option<bool>,
    /// Block submissions that break the amount/date input constraints
    pub enforce_constraints: Option<bool>,
    /// Maximum number of expenses the ledger accepts
    pub ledger_capacity: Option<usize>,
    /// Earliest date offered by the date input
    pub date_min: Option<NaiveDate>,
    /// Latest date offered by the date input
    pub date_max: Option<NaiveDate>,
    /// Smallest amount offered by the amount input
    pub amount_min: Option<f64>,
    /// Amount step
    pub amount_step: Option<f64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "expense-tui", "expense-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user's config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        tracing::debug!(?config, path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Input constraints with configured overrides applied
    pub fn input_constraints(&self) -> InputConstraints {
        let defaults = InputConstraints::default();
        InputConstraints {
            amount_min: self.amount_min.unwrap_or(defaults.amount_min),
            amount_step: self.amount_step.unwrap_or(defaults.amount_step),
            date_min: self.date_min.unwrap_or(defaults.date_min),
            date_max: self.date_max.unwrap_or(defaults.date_max),
        }
    }

    pub fn submit_policy(&self) -> SubmitPolicy {
        SubmitPolicy {
            reset_on_host_failure: self.reset_on_host_failure.unwrap_or(false),
            enforce_constraints: self.enforce_constraints.unwrap_or(false),
        }
    }
}
