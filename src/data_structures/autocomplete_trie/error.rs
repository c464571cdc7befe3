// Copyright (c) 2025 Olelo Authors
//
// Licensed under the MIT License (https://opensource.org/licenses/MIT)

//! Error types for the autocomplete trie.

/// Errors that can occur in autocomplete trie operations.
///
/// Lookups that find nothing are not errors; they report `false` or an empty
/// completion list.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum AutoCompleteTrieError {
    /// A string argument was required but absent.
    #[error("Missing input for {operation}")]
    MissingInput {
        /// The operation that received no input.
        operation: &'static str,
    },
}

/// Result type for autocomplete trie operations
pub type AutoCompleteTrieResult<T> = Result<T, AutoCompleteTrieError>;
