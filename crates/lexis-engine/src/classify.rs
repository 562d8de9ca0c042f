// Batch document classification.
//
// Ties the trie, the fuzzy matcher and the bigram model together: every
// token of a document is classified into one of three buckets in a single
// pass, and frequency and bigram state are updated as a side effect.

use serde::Serialize;

use lexis_core::character::normalize_word;
use lexis_trie::TrieIndex;

use crate::fuzzy::similar_words;
use crate::predict::BigramPredictor;

/// Options controlling how tokens are classified.
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// How many leading characters must exist in the trie before a
    /// fallback lookup (autocomplete, then fuzzy) is attempted at all.
    pub prefix_probe_len: usize,
    /// Maximum edit distance for the fuzzy fallback.
    pub max_edit_distance: u64,
    /// Result cap passed to the fuzzy registry scan.
    pub fuzzy_scan_limit: usize,
    /// Maximum number of candidates attached to a similar token.
    pub max_suggestions: usize,
    /// Result cap for the autocomplete fallback.
    pub autocomplete_limit: usize,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            prefix_probe_len: 2,
            max_edit_distance: 2,
            fuzzy_scan_limit: 5,
            max_suggestions: 3,
            autocomplete_limit: 3,
        }
    }
}

/// Result of classifying a token stream: three buckets of lower-cased
/// tokens.
///
/// Serializable so hosts can dump a classification pass; the engine itself
/// does no persistence or rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Tokens found exactly in the vocabulary.
    pub found: Vec<String>,
    /// Tokens not found exactly, paired with their candidate corrections.
    pub similar: Vec<(String, Vec<String>)>,
    /// Tokens with no exact match and no candidates.
    pub unfound: Vec<String>,
}

/// Classify every token of a document and update the usage and bigram
/// models.
///
/// Each token is classified independently:
/// 1. An exact hit is re-inserted (recording one more usage) and bucketed
///    as found.
/// 2. Otherwise, if the first `prefix_probe_len` characters exist in the
///    trie, autocomplete over the whole token is tried first; if it yields
///    nothing, the bounded fuzzy scan runs. Either producing candidates
///    buckets the token as similar.
/// 3. Tokens failing the probe, or whose fallbacks both come up empty, are
///    unfound. A token too long to fuzzy-match safely is unfound as well.
///
/// The fuzzy scan runs only under the prefix probe: a token whose first
/// characters are unknown to the trie is not worth an O(V * L^2) pass.
///
/// After all tokens are classified, the whole sequence is handed to the
/// bigram model in one `observe` call.
pub fn classify_tokens<T: AsRef<str>>(
    trie: &mut TrieIndex,
    bigrams: &mut BigramPredictor,
    tokens: &[T],
    options: &ClassifyOptions,
) -> Classification {
    let mut result = Classification::default();

    for token in tokens {
        let word = normalize_word(token.as_ref());

        if trie.search(&word) {
            // Recording usage is the point of the re-insert: corpus
            // frequency and session usage share one counter.
            trie.insert(&word);
            result.found.push(word);
            continue;
        }

        if !trie.starts_with(&word, options.prefix_probe_len) {
            result.unfound.push(word);
            continue;
        }

        let completions = trie.autocomplete(&word, options.autocomplete_limit);
        if !completions.is_empty() {
            result.similar.push((word, completions));
            continue;
        }

        match similar_words(
            trie,
            &word,
            options.max_edit_distance,
            options.fuzzy_scan_limit,
        ) {
            Ok(mut candidates) => {
                candidates.truncate(options.max_suggestions);
                if candidates.is_empty() {
                    result.unfound.push(word);
                } else {
                    result.similar.push((word, candidates));
                }
            }
            // Overlong tokens are skipped, not fatal: treat as unfound.
            Err(_) => result.unfound.push(word),
        }
    }

    bigrams.observe(tokens);

    result
}
