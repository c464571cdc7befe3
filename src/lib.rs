//! Olelo Library
//!
//! A case-folding character trie that answers exact membership queries and
//! returns bounded, breadth-first ordered completions for a prefix, together
//! with the word-list loading, configuration and error reporting used by the
//! `olelo` binary.
//!
//! # Architecture
//!
//! - `data_structures`: the trie node and engine
//! - `wordlist`: feeds newline-separated word lists into a dictionary
//! - `config`: layered configuration (defaults, file, environment)
//! - `error`: component errors and the crate-wide error type

pub mod config;
pub mod data_structures;
pub mod error;
pub mod wordlist;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Olelo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
