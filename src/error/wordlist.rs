//! Word-list loading error module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a word list into a dictionary.
#[derive(Error, Debug)]
pub enum WordListError {
    /// The word-list file does not exist.
    #[error("Word list not found: {0}")]
    FileNotFound(PathBuf),

    /// Reading the word list failed.
    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    /// A line holds a word longer than the configured maximum.
    #[error("Word on line {line} has {length} characters, maximum is {max}")]
    WordTooLong {
        /// 1-based line number.
        line: usize,
        /// Length of the word in characters.
        length: usize,
        /// The configured maximum length.
        max: usize,
    },

    /// A line is not valid UTF-8.
    #[error("Line {line} of the word list is not valid UTF-8")]
    InvalidUtf8 {
        /// 1-based line number.
        line: usize,
    },
}
