// Copyright (c) 2025 Olelo Authors
//
// Licensed under the MIT License (https://opensource.org/licenses/MIT)

//! Autocomplete Trie Implementation
//!
//! A character trie that serves both as an exact-membership dictionary and as
//! an autocomplete engine. All input is folded to lowercase on insertion and
//! lookup.
//!
//! # Completion order
//!
//! Completions are discovered breadth-first from the node reached by the
//! prefix, so shorter words always come before longer ones. Among words of the
//! same length, siblings are explored in ascending code point order of their
//! edge characters. Frequency and insertion order play no part.
//!
//! # Example
//!
//! ```
//! use olelo_lib::data_structures::autocomplete_trie::{AutoComplete, AutoCompleteTrie, Dictionary};
//!
//! let mut trie = AutoCompleteTrie::new();
//! for word in ["hello", "help", "helmet", "hell"] {
//!     trie.add_word(word);
//! }
//!
//! assert!(trie.is_word("HELP"));
//! assert_eq!(trie.size(), 4);
//! assert_eq!(
//!     trie.predict_completions("hel", 10),
//!     vec!["hell", "help", "hello", "helmet"]
//! );
//! ```

mod error;
mod node;

use std::collections::VecDeque;

use tracing::{debug, trace};

pub use error::{AutoCompleteTrieError, AutoCompleteTrieResult};
pub use node::{fold_char, ChildSlot, TrieNode};

/// Exact-membership dictionary capability.
pub trait Dictionary {
    /// Adds a word. Returns `true` if the word was not already present.
    fn add_word(&mut self, word: &str) -> bool;

    /// Returns whether `word` was previously added.
    fn is_word(&self, word: &str) -> bool;

    /// Number of distinct words added.
    fn size(&self) -> usize;
}

/// Bounded prefix completion capability.
pub trait AutoComplete {
    /// Returns up to `max_results` known words that start with `prefix`,
    /// including `prefix` itself when it is a word.
    fn predict_completions(&self, prefix: &str, max_results: usize) -> Vec<String>;
}

/// Trie-backed dictionary with breadth-first autocompletion.
///
/// `size()` counts distinct words, not nodes; use
/// [`node_count`](Self::node_count) for the latter.
#[derive(Debug)]
pub struct AutoCompleteTrie {
    /// The root node; empty text, never terminal
    root: TrieNode,

    /// Number of nodes marked terminal by insertion
    word_count: usize,

    /// Number of nodes including the root
    node_count: usize,
}

impl AutoCompleteTrie {
    /// Creates a new empty `AutoCompleteTrie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            word_count: 0,
            node_count: 1,
        }
    }

    /// Adds a word supplied by a caller that may have none.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - Same as [`Dictionary::add_word`].
    /// * `Err(AutoCompleteTrieError::MissingInput)` - If `word` is `None`.
    pub fn try_add_word(&mut self, word: Option<&str>) -> AutoCompleteTrieResult<bool> {
        let word = word.ok_or(AutoCompleteTrieError::MissingInput {
            operation: "add_word",
        })?;
        Ok(self.add_word(word))
    }

    /// Completes a prefix supplied by a caller that may have none.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - Same as [`AutoComplete::predict_completions`].
    /// * `Err(AutoCompleteTrieError::MissingInput)` - If `prefix` is `None`.
    pub fn try_predict_completions(
        &self,
        prefix: Option<&str>,
        max_results: usize,
    ) -> AutoCompleteTrieResult<Vec<String>> {
        let prefix = prefix.ok_or(AutoCompleteTrieError::MissingInput {
            operation: "predict_completions",
        })?;
        Ok(self.predict_completions(prefix, max_results))
    }

    /// Returns `true` if some stored word starts with the folded `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.find_node(prefix).is_some()
    }

    /// Number of nodes in the trie, including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns `true` if no word has been added.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Texts of every node in pre-order, children visited in sibling order.
    ///
    /// The first entry is always the root's empty text.
    pub fn pre_order(&self) -> Vec<String> {
        let mut texts = Vec::with_capacity(self.node_count);
        let mut stack = vec![&self.root];

        while let Some(node) = stack.pop() {
            texts.push(node.text().to_owned());
            let first = stack.len();
            stack.extend(node.children());
            stack[first..].reverse();
        }

        texts
    }

    /// Writes the pre-order dump to the `tracing` DEBUG level.
    pub fn log_tree(&self) {
        for text in self.pre_order() {
            debug!(node = %text, "trie node");
        }
    }

    /// Walks the folded path for `text` from the root.
    fn find_node(&self, text: &str) -> Option<&TrieNode> {
        text.chars()
            .try_fold(&self.root, |node, c| node.get_child(c))
    }
}

impl Dictionary for AutoCompleteTrie {
    fn add_word(&mut self, word: &str) -> bool {
        // The root is never marked terminal.
        if word.is_empty() {
            trace!("ignoring empty word");
            return false;
        }

        let mut current = &mut self.root;
        for c in word.chars() {
            let slot = current.insert_child(c);
            if slot.is_created() {
                self.node_count += 1;
            }
            current = slot.into_node();
        }

        if current.is_terminal() {
            trace!(word = current.text(), "word already present");
            return false;
        }

        current.set_terminal(true);
        self.word_count += 1;
        trace!(word = current.text(), size = self.word_count, "word added");
        true
    }

    fn is_word(&self, word: &str) -> bool {
        self.find_node(word).map_or(false, TrieNode::is_terminal)
    }

    fn size(&self) -> usize {
        self.word_count
    }
}

impl AutoComplete for AutoCompleteTrie {
    fn predict_completions(&self, prefix: &str, max_results: usize) -> Vec<String> {
        if max_results == 0 {
            return Vec::new();
        }

        let start = match self.find_node(prefix) {
            Some(node) => node,
            None => {
                trace!(prefix, "prefix not present");
                return Vec::new();
            }
        };

        let mut completions = Vec::with_capacity(max_results.min(self.word_count));
        let mut queue = VecDeque::from([start]);
        let mut visited = 0usize;

        while let Some(node) = queue.pop_front() {
            visited += 1;
            if node.is_terminal() {
                completions.push(node.text().to_owned());
                if completions.len() >= max_results {
                    break;
                }
            }
            queue.extend(node.children());
        }

        debug!(
            prefix,
            max_results,
            found = completions.len(),
            visited,
            "completion search finished"
        );
        completions
    }
}

impl Default for AutoCompleteTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for AutoCompleteTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add_word(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for AutoCompleteTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_of(words: &[&str]) -> AutoCompleteTrie {
        words.iter().collect()
    }

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = AutoCompleteTrie::new();

        // Initial state
        assert!(trie.is_empty());
        assert_eq!(trie.size(), 0);
        assert_eq!(trie.node_count(), 1);

        // Insertion
        assert!(trie.add_word("hello"));
        assert_eq!(trie.size(), 1);
        assert!(!trie.is_empty());

        // Lookup
        assert!(trie.is_word("hello"));
        assert!(!trie.is_word("hell"));
        assert!(!trie.is_word("nonexistent"));

        // Case-insensitivity
        assert!(trie.is_word("HeLLo"));

        // Re-insertion is a no-op
        assert!(!trie.add_word("HELLO"));
        assert_eq!(trie.size(), 1);
    }

    #[test]
    fn test_size_counts_words_not_nodes() {
        let trie = trie_of(&["car", "cart", "care"]);
        assert_eq!(trie.size(), 3);
        // root + c, a, r, t, e
        assert_eq!(trie.node_count(), 6);
    }

    #[test]
    fn test_prefix_word_added_after_longer_word() {
        let mut trie = trie_of(&["cart"]);
        let nodes = trie.node_count();
        assert!(!trie.is_word("car"));

        assert!(trie.add_word("car"));
        assert!(trie.is_word("car"));
        assert_eq!(trie.size(), 2);
        assert_eq!(trie.node_count(), nodes);
    }

    #[test]
    fn test_empty_word_is_a_no_op() {
        let mut trie = AutoCompleteTrie::new();
        assert!(!trie.add_word(""));
        assert_eq!(trie.size(), 0);
        assert_eq!(trie.node_count(), 1);
        assert!(!trie.root().is_terminal());
        assert!(!trie.is_word(""));
    }

    #[test]
    fn test_try_add_word() {
        let mut trie = AutoCompleteTrie::new();
        assert_eq!(trie.try_add_word(Some("cat")), Ok(true));
        assert_eq!(trie.try_add_word(Some("")), Ok(false));
        assert_eq!(
            trie.try_add_word(None),
            Err(AutoCompleteTrieError::MissingInput { operation: "add_word" })
        );
        assert_eq!(trie.size(), 1);
    }

    #[test]
    fn test_try_predict_completions() {
        let trie = trie_of(&["cat", "car"]);
        assert_eq!(
            trie.try_predict_completions(Some("ca"), 5),
            Ok(vec!["car".to_string(), "cat".to_string()])
        );
        assert_eq!(
            trie.try_predict_completions(None, 5),
            Err(AutoCompleteTrieError::MissingInput {
                operation: "predict_completions"
            })
        );
    }

    #[test]
    fn test_cat_scenario() {
        let trie = trie_of(&["cat"]);
        assert!(trie.is_word("CAT"));
        assert!(!trie.is_word("ca"));
        assert_eq!(trie.predict_completions("ca", 5), vec!["cat"]);
    }

    #[test]
    fn test_empty_trie() {
        let trie = AutoCompleteTrie::new();
        assert!(!trie.is_word("anything"));
        assert_eq!(trie.size(), 0);
        assert!(trie.predict_completions("a", 3).is_empty());
    }

    #[test]
    fn test_completions_breadth_first() {
        let trie = trie_of(&["hello", "help", "helmet", "hell"]);
        assert_eq!(
            trie.predict_completions("hel", 10),
            vec!["hell", "help", "hello", "helmet"]
        );
    }

    #[test]
    fn test_completions_bounded() {
        let trie = trie_of(&["hello", "help", "helmet", "hell"]);
        assert_eq!(trie.predict_completions("hel", 2), vec!["hell", "help"]);
        assert_eq!(trie.predict_completions("hel", 1), vec!["hell"]);
        assert!(trie.predict_completions("hel", 0).is_empty());
    }

    #[test]
    fn test_prefix_is_its_own_completion() {
        let trie = trie_of(&["do", "dog", "dot", "done"]);
        assert_eq!(
            trie.predict_completions("do", 10),
            vec!["do", "dog", "dot", "done"]
        );
    }

    #[test]
    fn test_completions_for_missing_prefix() {
        let trie = trie_of(&["apple", "apply"]);
        assert!(trie.predict_completions("b", 5).is_empty());
        // Matches partially, then diverges
        assert!(trie.predict_completions("apx", 5).is_empty());
        assert!(trie.predict_completions("applesauce", 5).is_empty());
    }

    #[test]
    fn test_completions_fold_prefix_case() {
        let trie = trie_of(&["Rust", "rusty"]);
        assert_eq!(trie.predict_completions("RU", 5), vec!["rust", "rusty"]);
    }

    #[test]
    fn test_sibling_order_ignores_insertion_order() {
        let forward = trie_of(&["ab", "ac", "aa"]);
        let backward = trie_of(&["aa", "ac", "ab"]);
        assert_eq!(forward.predict_completions("a", 10), vec!["aa", "ab", "ac"]);
        assert_eq!(
            forward.predict_completions("a", 10),
            backward.predict_completions("a", 10)
        );
    }

    #[test]
    fn test_empty_prefix_lists_all_words() {
        let trie = trie_of(&["b", "abc", "a", "ab"]);
        assert_eq!(trie.predict_completions("", 10), vec!["a", "b", "ab", "abc"]);
    }

    #[test]
    fn test_contains_prefix() {
        let trie = trie_of(&["interior"]);
        assert!(trie.contains_prefix(""));
        assert!(trie.contains_prefix("INTER"));
        assert!(trie.contains_prefix("interior"));
        assert!(!trie.contains_prefix("interiors"));
    }

    #[test]
    fn test_pre_order_dump() {
        let trie = trie_of(&["ab", "b", "aa"]);
        assert_eq!(trie.pre_order(), vec!["", "a", "aa", "ab", "b"]);
    }

    #[test]
    fn test_non_ascii_case_folding() {
        let mut trie = AutoCompleteTrie::new();
        assert!(trie.add_word("École"));
        assert!(trie.is_word("ÉCOLE"));
        assert!(trie.is_word("école"));
        assert!(!trie.add_word("ÉCOLE"));
        assert_eq!(trie.predict_completions("ÉC", 5), vec!["école"]);
    }

    #[test]
    fn test_dotted_capital_i_shares_the_i_edge() {
        // U+0130 folds to 'i', so "İstanbul" and "istanbul" are one word.
        let mut trie = AutoCompleteTrie::new();
        assert!(trie.add_word("\u{130}stanbul"));
        assert!(trie.is_word("istanbul"));
        assert!(!trie.add_word("istanbul"));
        assert_eq!(trie.size(), 1);
        assert_eq!(trie.root().valid_next_characters().collect::<Vec<_>>(), vec!['i']);
    }

    #[test]
    fn test_long_word_survives_drop() {
        let word = "a".repeat(20_000);
        let mut trie = AutoCompleteTrie::new();
        assert!(trie.add_word(&word));
        assert!(trie.is_word(&word));
        assert_eq!(trie.predict_completions("aaa", 1).len(), 1);
        assert_eq!(trie.node_count(), 20_001);
        drop(trie);
    }

    #[test]
    fn test_extend() {
        let mut trie = AutoCompleteTrie::new();
        trie.extend(vec!["one".to_string(), "two".to_string(), "one".to_string()]);
        assert_eq!(trie.size(), 2);
    }
}
