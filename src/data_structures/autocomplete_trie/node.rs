// Copyright (c) 2025 Olelo Authors
//
// Licensed under the MIT License (https://opensource.org/licenses/MIT)

//! Node implementation for the autocomplete trie.
//!
//! Each node owns its children directly, so the trie is a strict tree with
//! exactly one incoming edge per non-root node. Children are kept in a
//! `BTreeMap`, which fixes sibling enumeration to ascending code point order.

use std::collections::btree_map::{BTreeMap, Entry};

/// Folds a single character to the case convention used for edge labels.
///
/// Characters whose lowercase form expands to several scalar values keep only
/// the first one, so every input character maps to exactly one edge.
#[inline]
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Outcome of [`TrieNode::insert_child`].
///
/// Distinguishes a freshly created child from one that was already present,
/// while handing back the child in both cases.
#[derive(Debug)]
pub enum ChildSlot<'a> {
    /// No edge existed for the character; this node was just created.
    Created(&'a mut TrieNode),
    /// The edge already existed; this is the existing child.
    Existing(&'a mut TrieNode),
}

impl<'a> ChildSlot<'a> {
    /// Returns `true` if the child was created by this call.
    pub fn is_created(&self) -> bool {
        matches!(self, ChildSlot::Created(_))
    }

    /// Unwraps the child regardless of whether it was created.
    pub fn into_node(self) -> &'a mut TrieNode {
        match self {
            ChildSlot::Created(node) | ChildSlot::Existing(node) => node,
        }
    }
}

/// A node in the autocomplete trie.
///
/// `text` is the concatenation of edge labels from the root to this node. It
/// is computed when the node is created and never changes afterwards.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Map of folded characters to child nodes
    children: BTreeMap<char, TrieNode>,

    /// Whether this node represents the end of an inserted word
    is_terminal: bool,

    /// Full path text from the root
    text: String,
}

impl TrieNode {
    /// Creates a root node with empty text.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_text(text: String) -> Self {
        Self {
            children: BTreeMap::new(),
            is_terminal: false,
            text,
        }
    }

    /// Attempts to create the child reachable by `c`.
    ///
    /// The character is folded before use. If the edge is missing a new node is
    /// created with `text` equal to this node's text plus the folded character,
    /// and [`ChildSlot::Created`] is returned. Otherwise the existing child is
    /// returned as [`ChildSlot::Existing`]. Repeating the call never creates a
    /// second edge for the same character.
    pub fn insert_child(&mut self, c: char) -> ChildSlot<'_> {
        let c = fold_char(c);
        match self.children.entry(c) {
            Entry::Occupied(entry) => ChildSlot::Existing(entry.into_mut()),
            Entry::Vacant(entry) => {
                let mut text = String::with_capacity(self.text.len() + c.len_utf8());
                text.push_str(&self.text);
                text.push(c);
                ChildSlot::Created(entry.insert(TrieNode::with_text(text)))
            }
        }
    }

    /// Returns the child reachable by `c`, folding case the same way as
    /// [`insert_child`](Self::insert_child).
    pub fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&fold_char(c))
    }

    /// Edge labels present on this node, in ascending code point order.
    pub fn valid_next_characters(&self) -> impl Iterator<Item = char> + '_ {
        self.children.keys().copied()
    }

    /// Children in the same order as [`valid_next_characters`](Self::valid_next_characters).
    pub fn children(&self) -> impl Iterator<Item = &TrieNode> + '_ {
        self.children.values()
    }

    /// Number of outgoing edges.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The full path text from the root to this node.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the path to this node spells an inserted word.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Sets the terminal flag.
    pub fn set_terminal(&mut self, terminal: bool) {
        self.is_terminal = terminal;
    }
}

// Descendants are released from a heap stack so dropping a deep path does not
// recurse once per level.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> =
            std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
