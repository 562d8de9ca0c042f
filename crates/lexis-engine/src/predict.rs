// Bigram next-word prediction model.

use hashbrown::HashMap;

use lexis_core::character::normalize_word;

/// Next-word predictor built from pairwise adjacency counts.
///
/// Maps a predecessor word to the list of words observed immediately after
/// it, with observation counts. Successor lists keep first-observation
/// order, so ranking ties are deterministic. Counts only ever grow.
///
/// The model starts empty alongside the trie and has no seeding step; it
/// learns purely from the token streams passed to [`observe`].
///
/// [`observe`]: BigramPredictor::observe
#[derive(Debug, Default)]
pub struct BigramPredictor {
    successors: HashMap<String, Vec<(String, u64)>>,
}

impl BigramPredictor {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every adjacent pair in a token sequence.
    ///
    /// Tokens are lower-cased; entries are created as needed. A sequence
    /// of fewer than two tokens records nothing.
    pub fn observe<T: AsRef<str>>(&mut self, tokens: &[T]) {
        for pair in tokens.windows(2) {
            let first = normalize_word(pair[0].as_ref());
            let second = normalize_word(pair[1].as_ref());

            let followers = self.successors.entry(first).or_default();
            match followers.iter_mut().find(|(word, _)| *word == second) {
                Some((_, count)) => *count += 1,
                None => followers.push((second, 1)),
            }
        }
    }

    /// The top `n` words observed after `word`, descending by count.
    ///
    /// Returns an empty list for a never-observed predecessor. Equal
    /// counts rank in first-observation order.
    pub fn predict(&self, word: &str, n: usize) -> Vec<String> {
        let word = normalize_word(word);
        let Some(followers) = self.successors.get(&word) else {
            return Vec::new();
        };

        let mut ranked: Vec<(&str, u64)> = followers
            .iter()
            .map(|(w, count)| (w.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(w, _)| w.to_string())
            .collect()
    }

    /// How many times `successor` was observed immediately after
    /// `predecessor`.
    pub fn count(&self, predecessor: &str, successor: &str) -> u64 {
        let predecessor = normalize_word(predecessor);
        let successor = normalize_word(successor);
        self.successors
            .get(&predecessor)
            .and_then(|followers| {
                followers
                    .iter()
                    .find(|(word, _)| *word == successor)
                    .map(|(_, count)| *count)
            })
            .unwrap_or(0)
    }

    /// Number of distinct predecessor words in the model.
    pub fn predecessor_count(&self) -> usize {
        self.successors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observes_adjacent_pairs() {
        let mut model = BigramPredictor::new();
        model.observe(&["the", "cat", "sat"]);
        assert_eq!(model.count("the", "cat"), 1);
        assert_eq!(model.count("cat", "sat"), 1);
        assert_eq!(model.count("the", "sat"), 0);
    }

    #[test]
    fn counts_accumulate_across_calls() {
        let mut model = BigramPredictor::new();
        model.observe(&["the", "cat"]);
        model.observe(&["the", "cat"]);
        model.observe(&["the", "dog"]);
        assert_eq!(model.count("the", "cat"), 2);
        assert_eq!(model.count("the", "dog"), 1);
    }

    #[test]
    fn predict_ranks_by_count() {
        let mut model = BigramPredictor::new();
        model.observe(&["the", "dog"]);
        model.observe(&["the", "cat"]);
        model.observe(&["the", "cat"]);
        assert_eq!(model.predict("the", 5), ["cat", "dog"]);
    }

    #[test]
    fn predict_ties_keep_first_observation_order() {
        let mut model = BigramPredictor::new();
        model.observe(&["the", "cat", "sat"]);
        model.observe(&["the", "dog", "ran"]);
        let predicted = model.predict("the", 5);
        assert_eq!(predicted, ["cat", "dog"]);
    }

    #[test]
    fn predict_excludes_unrelated_words() {
        let mut model = BigramPredictor::new();
        model.observe(&["the", "cat", "sat"]);
        model.observe(&["the", "dog", "ran"]);
        let predicted = model.predict("the", 5);
        assert!(!predicted.contains(&"sat".to_string()));
        assert!(!predicted.contains(&"ran".to_string()));
    }

    #[test]
    fn predict_unknown_word_is_empty() {
        let model = BigramPredictor::new();
        assert!(model.predict("never", 5).is_empty());
    }

    #[test]
    fn predict_caps_results() {
        let mut model = BigramPredictor::new();
        model.observe(&["a", "b"]);
        model.observe(&["a", "c"]);
        model.observe(&["a", "d"]);
        assert_eq!(model.predict("a", 2).len(), 2);
    }

    #[test]
    fn observe_lowercases() {
        let mut model = BigramPredictor::new();
        model.observe(&["The", "Cat"]);
        assert_eq!(model.count("the", "cat"), 1);
        assert_eq!(model.predict("THE", 1), ["cat"]);
    }

    #[test]
    fn short_sequences_record_nothing() {
        let mut model = BigramPredictor::new();
        model.observe(&["lonely"]);
        model.observe::<&str>(&[]);
        assert_eq!(model.predecessor_count(), 0);
    }

    #[test]
    fn prediction_is_deterministic() {
        let mut model = BigramPredictor::new();
        for w in ["b", "c", "d", "e"] {
            model.observe(&["a", w]);
        }
        let first = model.predict("a", 4);
        for _ in 0..10 {
            assert_eq!(model.predict("a", 4), first);
        }
    }
}
