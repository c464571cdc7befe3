//! Data structures for Olelo.
//!
//! This module contains the dictionary and autocompletion structures.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Single ownership of every node, no shared or cyclic references
//! - Deterministic iteration order wherever results are observable

pub mod autocomplete_trie;

// Re-export common data structures
pub use autocomplete_trie::{
    AutoComplete, AutoCompleteTrie, AutoCompleteTrieError, AutoCompleteTrieResult, Dictionary,
};
