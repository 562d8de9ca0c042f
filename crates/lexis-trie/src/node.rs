// Trie node layout.

use std::collections::BTreeMap;

/// A single node in the character trie.
///
/// Each node is exclusively owned by its parent; the [`TrieIndex`] owns the
/// root. The child map is a `BTreeMap` so that iteration order is the
/// character order, giving every traversal a reproducible visit order
/// across runs (a hash map would reorder children per process).
///
/// The usage counter is only meaningful on terminal nodes. It never
/// decreases; every insert of the word ending here bumps it by one.
///
/// [`TrieIndex`]: crate::TrieIndex
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Children keyed by the next character on the path.
    pub(crate) children: BTreeMap<char, TrieNode>,
    /// Whether the path from the root to this node spells a stored word.
    pub(crate) terminal: bool,
    /// Number of times the word ending at this node has been inserted.
    pub(crate) usage: u64,
}

impl TrieNode {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Follow `chars` downward from this node, returning the node at the
    /// end of the path if every edge exists.
    pub(crate) fn walk(&self, chars: impl Iterator<Item = char>) -> Option<&TrieNode> {
        let mut node = self;
        for ch in chars {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_empty() {
        let node = TrieNode::new();
        assert!(node.children.is_empty());
        assert!(!node.terminal);
        assert_eq!(node.usage, 0);
    }

    #[test]
    fn walk_empty_path_is_self() {
        let node = TrieNode::new();
        assert!(node.walk("".chars()).is_some());
    }

    #[test]
    fn walk_missing_edge() {
        let node = TrieNode::new();
        assert!(node.walk("a".chars()).is_none());
    }

    #[test]
    fn children_iterate_in_character_order() {
        let mut node = TrieNode::new();
        node.children.insert('c', TrieNode::new());
        node.children.insert('a', TrieNode::new());
        node.children.insert('b', TrieNode::new());
        let keys: Vec<char> = node.children.keys().copied().collect();
        assert_eq!(keys, vec!['a', 'b', 'c']);
    }
}
