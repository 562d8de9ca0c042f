// TrieIndex: the vocabulary store.

use hashbrown::HashSet;

use lexis_core::character::normalize_word;

use crate::node::TrieNode;

/// Character-trie vocabulary store with per-word usage counters.
///
/// Besides the trie itself, the index keeps a flat registry of every
/// distinct word ever inserted, in insertion order, mirrored by a hash set
/// for O(1) "is this word new" checks during insert. The registry order is
/// the canonical scan order for fuzzy matching and frequency ranking.
///
/// Invariant: a word is in the registry iff walking its characters from
/// the root ends on a terminal node.
///
/// All entry points lower-case their input, so `"Cat"`, `"CAT"` and
/// `"cat"` address the same terminal node.
#[derive(Debug, Default)]
pub struct TrieIndex {
    pub(crate) root: TrieNode,
    /// All distinct words, in first-insertion order.
    words: Vec<String>,
    /// Set mirror of `words` for membership checks during insert.
    known: HashSet<String>,
}

impl TrieIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, creating trie nodes as needed.
    ///
    /// Re-inserting a known word is not an error: it is the mechanism for
    /// recording repeated usage, and bumps the word's usage counter by one.
    /// The first-ever insert of a word also appends it to the registry.
    ///
    /// The empty string is a legal degenerate word; it marks the root
    /// terminal.
    pub fn insert(&mut self, word: &str) {
        let word = normalize_word(word);

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }

        node.terminal = true;
        node.usage += 1;

        if !self.known.contains(&word) {
            self.known.insert(word.clone());
            self.words.push(word);
        }
    }

    /// Exact membership test.
    ///
    /// Returns true iff the full path exists and ends on a terminal node.
    /// Does not mutate usage counters.
    pub fn search(&self, word: &str) -> bool {
        let word = normalize_word(word);
        match self.root.walk(word.chars()) {
            Some(node) => node.terminal,
            None => false,
        }
    }

    /// Probe whether the first `limit` characters of `word` exist as a
    /// literal path in the trie.
    ///
    /// This is deliberately looser than full prefix existence: only the
    /// truncated path has to exist, and no terminal node is required. The
    /// classifier uses it as a cheap test of whether a fuzzy or
    /// autocomplete attempt is worth paying for.
    pub fn starts_with(&self, word: &str, limit: usize) -> bool {
        let word = normalize_word(word);
        self.root.walk(word.chars().take(limit)).is_some()
    }

    /// Usage counter of a word, or 0 if the word is absent or the path
    /// does not end on a terminal node.
    pub fn node_frequency(&self, word: &str) -> u64 {
        let word = normalize_word(word);
        match self.root.walk(word.chars()) {
            Some(node) if node.terminal => node.usage,
            _ => 0,
        }
    }

    /// All distinct words in first-insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of distinct words stored.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Whether the index holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
