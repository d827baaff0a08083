//! Rule thresholds and evaluation configuration
//!
//! Every threshold the rules compare against lives here as a named value so
//! it can be tested and tuned independently. Config can be loaded from a
//! TOML file; missing keys keep their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fraction of a budget's limit that triggers the early warning
pub const DEFAULT_WARNING_RATIO: f64 = 0.8;

/// Days before a debt's due date to start reminding
pub const DEFAULT_DEBT_LOOKAHEAD_DAYS: i64 = 5;

/// Days before a goal's deadline to warn about unmet progress
pub const DEFAULT_GOAL_DEADLINE_DAYS: i64 = 14;

/// Days before a pantry item's expiry date to warn
pub const DEFAULT_PANTRY_EXPIRY_DAYS: i64 = 3;

/// Pending shopping-list size that triggers the backlog notice
pub const DEFAULT_SHOPPING_ITEM_THRESHOLD: usize = 10;

/// Estimated pending shopping cost that triggers the backlog notice
pub const DEFAULT_SHOPPING_COST_THRESHOLD: f64 = 100.0;

/// Seconds between scheduled evaluation passes
pub const DEFAULT_EVAL_INTERVAL_SECS: u64 = 300;

/// Thresholds consumed by the rule evaluator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub warning_ratio: f64,
    pub debt_lookahead_days: i64,
    pub goal_deadline_days: i64,
    pub pantry_expiry_days: i64,
    pub shopping_item_threshold: usize,
    pub shopping_cost_threshold: f64,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            warning_ratio: DEFAULT_WARNING_RATIO,
            debt_lookahead_days: DEFAULT_DEBT_LOOKAHEAD_DAYS,
            goal_deadline_days: DEFAULT_GOAL_DEADLINE_DAYS,
            pantry_expiry_days: DEFAULT_PANTRY_EXPIRY_DAYS,
            shopping_item_threshold: DEFAULT_SHOPPING_ITEM_THRESHOLD,
            shopping_cost_threshold: DEFAULT_SHOPPING_COST_THRESHOLD,
        }
    }
}

impl RuleConfig {
    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file, or defaults when the file doesn't exist
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(path)
                    .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;
                Self::from_toml(&content)
            }
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.warning_ratio) {
            return Err(Error::Config(format!(
                "warning_ratio must be within 0.0..=1.0, got {}",
                self.warning_ratio
            )));
        }
        if self.debt_lookahead_days < 0 || self.goal_deadline_days < 0 || self.pantry_expiry_days < 0
        {
            return Err(Error::Config(
                "lookahead windows must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
