//! Completion configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Completion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Number of completions returned when the caller does not ask for a count
    pub default_max_results: usize,

    /// Upper bound applied to every requested count
    pub hard_limit: usize,
}

impl CompletionConfig {
    /// Resolves the number of completions to request.
    ///
    /// Falls back to `default_max_results` and never exceeds `hard_limit`.
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_max_results)
            .min(self.hard_limit)
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            default_max_results: 10,
            hard_limit: 1000,
        }
    }
}

impl Validate for CompletionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.hard_limit == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "completion.hard_limit".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.default_max_results > self.hard_limit {
            return Err(ConfigError::ValidationError(format!(
                "default_max_results ({}) must be less than or equal to hard_limit ({})",
                self.default_max_results, self.hard_limit
            )));
        }

        Ok(())
    }
}
