//! Dictionary configuration module.
//!
//! Controls where the word list comes from and how each line of it is turned
//! into a word.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Word list to load at startup, one word per line
    pub word_list: Option<PathBuf>,

    /// Whether to strip surrounding whitespace from each line
    pub trim_whitespace: bool,

    /// Lines starting with this prefix are ignored
    pub comment_prefix: Option<String>,

    /// Maximum word length in characters
    pub max_word_length: usize,

    /// Skip overlong words with a warning instead of failing the load
    pub skip_invalid: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            word_list: None,
            trim_whitespace: true,
            comment_prefix: Some("#".to_string()),
            max_word_length: 64,
            skip_invalid: true,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "dictionary.max_word_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if let Some(prefix) = &self.comment_prefix {
            if prefix.is_empty() {
                return Err(ConfigError::ValidationError(
                    "comment_prefix cannot be empty; omit it to disable comments".to_string(),
                ));
            }
        }

        Ok(())
    }
}
