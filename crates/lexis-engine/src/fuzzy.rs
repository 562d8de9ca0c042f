// Bounded edit-distance fuzzy matching over the vocabulary registry.

use lexis_core::character::normalize_word;
use lexis_core::{LexiconError, MAX_WORD_CHARS};
use lexis_trie::TrieIndex;

/// Outcome of a bounded edit-distance computation.
///
/// `TooFar` means the distance is definitely beyond any threshold the
/// caller would accept. It carries no numeric value on purpose: it must
/// never enter distance arithmetic, only be treated exactly like "greater
/// than `max_distance`".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    /// The exact Levenshtein distance, at most the requested bound.
    Within(u64),
    /// The distance exceeds the bound (possibly never fully computed).
    TooFar,
}

impl Distance {
    /// The distance value if it is at most `max_distance`.
    pub fn within(self, max_distance: u64) -> Option<u64> {
        match self {
            Distance::Within(d) if d <= max_distance => Some(d),
            _ => None,
        }
    }
}

/// Length-difference cutoff for pruning rule (a).
///
/// Word pairs whose character counts differ by more than this are reported
/// `TooFar` without computing the table, independent of the caller's
/// `max_distance`. This is a documented approximation inherited from the
/// scan's role as a misspelling fallback, where thresholds above 2 are not
/// useful; it is not a bug to preserve away.
const MAX_LENGTH_DIFF: usize = 2;

/// Bounded Levenshtein distance between `a` and `b`.
///
/// Classic dynamic programming over a `(|a|+1) x (|b|+1)` table, kept as
/// two rolling rows. Insertion, deletion and substitution each cost 1.
///
/// Two pruning rules trade exactness for speed:
/// (a) a length difference above [`MAX_LENGTH_DIFF`] short-circuits to
///     `TooFar` without touching the table;
/// (b) once a completed row's minimum exceeds `max_distance` the scan
///     aborts with `TooFar`, since no later row can come back under it.
pub fn edit_distance(a: &str, b: &str, max_distance: u64) -> Distance {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > MAX_LENGTH_DIFF {
        return Distance::TooFar;
    }

    let cols = b.len() + 1;
    let mut prev: Vec<u64> = (0..cols as u64).collect();
    let mut curr: Vec<u64> = vec![0; cols];

    for i in 1..=a.len() {
        curr[0] = i as u64;
        let mut row_min = curr[0];

        for j in 1..cols {
            let delete_cost = prev[j] + 1;
            let insert_cost = curr[j - 1] + 1;
            let subst_cost = if a[i - 1] == b[j - 1] {
                prev[j - 1]
            } else {
                prev[j - 1] + 1
            };

            let cost = delete_cost.min(insert_cost).min(subst_cost);
            curr[j] = cost;
            row_min = row_min.min(cost);
        }

        if row_min > max_distance {
            return Distance::TooFar;
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    Distance::Within(prev[cols - 1])
}

/// Scan the whole vocabulary for words within `max_distance` edits of
/// `query`.
///
/// Candidates whose length differs from the query by more than
/// `max_distance` are skipped before any table work. Matches are sorted
/// ascending by distance; the sort is stable, so equal distances keep
/// registry (first-insertion) order. At most `result_limit` words are
/// returned.
///
/// This is an O(V * L^2) worst-case scan, acceptable because it only runs
/// on the fallback path after an exact search failed, and both pruning
/// rules cut most of the table work.
///
/// Queries longer than [`MAX_WORD_CHARS`] are rejected before the scan.
pub fn similar_words(
    trie: &TrieIndex,
    query: &str,
    max_distance: u64,
    result_limit: usize,
) -> Result<Vec<String>, LexiconError> {
    let query = normalize_word(query);
    let query_len = query.chars().count();
    if query_len > MAX_WORD_CHARS {
        return Err(LexiconError::WordTooLong {
            length: query_len,
            max: MAX_WORD_CHARS,
        });
    }

    let mut matches: Vec<(&str, u64)> = Vec::new();
    for word in trie.words() {
        if word.chars().count().abs_diff(query_len) > max_distance as usize {
            continue;
        }
        if let Some(d) = edit_distance(&query, word, max_distance).within(max_distance) {
            matches.push((word.as_str(), d));
        }
    }

    matches.sort_by_key(|&(_, d)| d);
    Ok(matches
        .into_iter()
        .take(result_limit)
        .map(|(word, _)| word.to_string())
        .collect())
}
