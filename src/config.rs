use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::models::Amount;

pub(crate) const CURRENCY_VAR: &str = "EXPENSE_TRACKER_CURRENCY";
pub(crate) const LOG_VAR: &str = "EXPENSE_TRACKER_LOG";
pub(crate) const BUDGET_VAR: &str = "EXPENSE_TRACKER_BUDGET";

const DEFAULT_CURRENCY: &str = "₹";

#[derive(Debug, Clone)]
pub(crate) struct Config {
    /// Symbol printed in front of every amount.
    pub(crate) currency: String,
    /// Log file override; the platform data directory is used otherwise.
    pub(crate) log_path: Option<PathBuf>,
    /// Budget applied when the session starts.
    pub(crate) initial_budget: Option<Amount>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            log_path: None,
            initial_budget: None,
        }
    }
}

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(currency) = non_empty(CURRENCY_VAR) {
            config.currency = currency.trim().to_string();
        }
        if let Some(path) = non_empty(LOG_VAR) {
            config.log_path = Some(PathBuf::from(crate::run::shellexpand(path.trim())));
        }
        if let Some(budget) = non_empty(BUDGET_VAR) {
            let amount = budget
                .parse::<Amount>()
                .with_context(|| format!("Invalid {BUDGET_VAR}"))?;
            config.initial_budget = Some(amount);
        }

        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
