// LexiconHandle: top-level integration point for the lexicon engine.
//
// Owns the trie index and the bigram model and provides a unified API for
// seeding, membership and prefix queries, fuzzy matching, frequency
// ranking, next-word prediction and batch classification.
//
// Design notes:
// - One handle per configured vocabulary; it lives for the process and is
//   mutated by seeding, classification side effects and explicit
//   "add to dictionary" actions.
// - Mutating calls take `&mut self`, so exclusive ownership enforces the
//   single-writer discipline: a host wanting concurrent access wraps the
//   handle in its own lock.
// - Boundary validation happens here: overlong queries are rejected before
//   any quadratic edit-distance work.

use lexis_core::character::normalize_word;
use lexis_core::{LexiconError, MAX_WORD_CHARS};
use lexis_trie::TrieIndex;

use crate::classify::{Classification, ClassifyOptions, classify_tokens};
use crate::frequency;
use crate::fuzzy;
use crate::predict::BigramPredictor;
use crate::tokenizer;

/// Top-level handle owning the vocabulary trie and the bigram model.
pub struct LexiconHandle {
    trie: TrieIndex,
    bigrams: BigramPredictor,
    options: ClassifyOptions,
}

impl LexiconHandle {
    /// Create an empty handle with default classification options.
    pub fn new() -> Self {
        Self::with_options(ClassifyOptions::default())
    }

    /// Create an empty handle with explicit classification options.
    pub fn with_options(options: ClassifyOptions) -> Self {
        Self {
            trie: TrieIndex::new(),
            bigrams: BigramPredictor::new(),
            options,
        }
    }

    /// Create a handle seeded from a word source (a word list, possibly
    /// pre-expanded with morphological forms by the caller).
    pub fn from_words<I, T>(words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut handle = Self::new();
        handle.insert_all(words);
        handle
    }

    // -- Mutation surface ---------------------------------------------------

    /// Add one word to the vocabulary, or record one more usage of it.
    pub fn insert(&mut self, word: &str) {
        self.trie.insert(word);
    }

    /// Bulk-seed the vocabulary, one insert per word.
    pub fn insert_all<I, T>(&mut self, words: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for word in words {
            self.trie.insert(word.as_ref());
        }
    }

    /// Classify a token stream into found / similar / unfound buckets,
    /// updating usage counters and the bigram model as a side effect.
    pub fn classify<T: AsRef<str>>(&mut self, tokens: &[T]) -> Classification {
        classify_tokens(&mut self.trie, &mut self.bigrams, tokens, &self.options)
    }

    /// Tokenize raw text and classify the resulting word stream.
    pub fn classify_text(&mut self, text: &str) -> Classification {
        let words = tokenizer::split_words(text);
        self.classify(&words)
    }

    /// Record adjacency observations without classifying.
    pub fn observe<T: AsRef<str>>(&mut self, tokens: &[T]) {
        self.bigrams.observe(tokens);
    }

    // -- Query surface ------------------------------------------------------

    /// Exact membership test.
    pub fn search(&self, word: &str) -> bool {
        self.trie.search(word)
    }

    /// Probe whether the first `limit` characters exist as a trie path.
    pub fn starts_with(&self, word: &str, limit: usize) -> bool {
        self.trie.starts_with(word, limit)
    }

    /// Stored words starting with `prefix`, capped at `max_results`.
    pub fn autocomplete(
        &self,
        prefix: &str,
        max_results: usize,
    ) -> Result<Vec<String>, LexiconError> {
        check_query_length(prefix)?;
        Ok(self.trie.autocomplete(prefix, max_results))
    }

    /// Vocabulary words within `max_distance` edits of `query`.
    pub fn similar_words(
        &self,
        query: &str,
        max_distance: u64,
        result_limit: usize,
    ) -> Result<Vec<String>, LexiconError> {
        fuzzy::similar_words(&self.trie, query, max_distance, result_limit)
    }

    /// The `n` most-used words with their usage counters, descending.
    pub fn top_n(&self, n: usize) -> Vec<(String, u64)> {
        frequency::top_n(&self.trie, n)
    }

    /// The top `n` words observed immediately after `word`.
    pub fn predict(&self, word: &str, n: usize) -> Vec<String> {
        self.bigrams.predict(word, n)
    }

    /// Usage counter of a word (0 if unknown).
    pub fn node_frequency(&self, word: &str) -> u64 {
        self.trie.node_frequency(word)
    }

    /// Number of distinct words in the vocabulary.
    pub fn word_count(&self) -> usize {
        self.trie.word_count()
    }

    // -- Options ------------------------------------------------------------

    /// Current classification options.
    pub fn options(&self) -> &ClassifyOptions {
        &self.options
    }

    /// Replace the classification options.
    pub fn set_options(&mut self, options: ClassifyOptions) {
        self.options = options;
    }

    /// Cap on candidates attached to a similar token during
    /// classification.
    pub fn set_max_suggestions(&mut self, max_suggestions: usize) {
        self.options.max_suggestions = max_suggestions;
    }

    /// Edit-distance bound used by the classification fuzzy fallback.
    pub fn set_max_edit_distance(&mut self, max_edit_distance: u64) {
        self.options.max_edit_distance = max_edit_distance;
    }
}

impl Default for LexiconHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject queries too long to edit-distance-match or traverse safely.
fn check_query_length(query: &str) -> Result<(), LexiconError> {
    let length = normalize_word(query).chars().count();
    if length > MAX_WORD_CHARS {
        return Err(LexiconError::WordTooLong {
            length,
            max: MAX_WORD_CHARS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_and_query() {
        let handle = LexiconHandle::from_words(["cat", "car", "cab"]);
        assert_eq!(handle.word_count(), 3);
        assert!(handle.search("cat"));
        assert!(!handle.search("dog"));
        assert!(handle.starts_with("caXXX", 2));
    }

    #[test]
    fn add_to_dictionary() {
        let mut handle = LexiconHandle::new();
        assert!(!handle.search("neologism"));
        handle.insert("neologism");
        assert!(handle.search("neologism"));
        assert_eq!(handle.node_frequency("neologism"), 1);
    }

    #[test]
    fn autocomplete_through_handle() {
        let handle = LexiconHandle::from_words(["cat", "car", "cab"]);
        let results = handle.autocomplete("ca", 2).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn autocomplete_rejects_overlong_prefix() {
        let handle = LexiconHandle::new();
        let long = "a".repeat(MAX_WORD_CHARS + 1);
        assert!(handle.autocomplete(&long, 5).is_err());
    }

    #[test]
    fn similar_words_through_handle() {
        let handle = LexiconHandle::from_words(["hello"]);
        assert_eq!(handle.similar_words("helo", 2, 5).unwrap(), ["hello"]);
    }

    #[test]
    fn top_n_scenario() {
        let mut handle = LexiconHandle::new();
        handle.insert("cat");
        handle.insert("cat");
        handle.insert("cat");
        handle.insert("dog");
        assert_eq!(
            handle.top_n(2),
            vec![("cat".to_string(), 3), ("dog".to_string(), 1)]
        );
    }

    #[test]
    fn classify_updates_state() {
        let mut handle = LexiconHandle::from_words(["the", "cat", "sat"]);
        let result = handle.classify(&["the", "cat", "sat"]);
        assert_eq!(result.found.len(), 3);
        assert_eq!(handle.node_frequency("cat"), 2);
        assert_eq!(handle.predict("the", 5), ["cat"]);
    }

    #[test]
    fn classify_text_tokenizes() {
        let mut handle = LexiconHandle::from_words(["the", "cat", "sat"]);
        let result = handle.classify_text("The cat sat.");
        assert_eq!(result.found, ["the", "cat", "sat"]);
    }

    #[test]
    fn observe_without_classification() {
        let mut handle = LexiconHandle::new();
        handle.observe(&["the", "cat"]);
        assert_eq!(handle.predict("the", 5), ["cat"]);
    }

    #[test]
    fn options_are_adjustable() {
        let mut handle = LexiconHandle::new();
        handle.set_max_suggestions(1);
        handle.set_max_edit_distance(1);
        assert_eq!(handle.options().max_suggestions, 1);
        assert_eq!(handle.options().max_edit_distance, 1);
    }
}
