// Usage-frequency ranking over the vocabulary registry.

use lexis_trie::TrieIndex;

/// The `n` most-used words with their usage counters, descending.
///
/// Performs a full registry scan, reading each word's counter from its
/// terminal node. The vocabulary is assumed to fit in memory and this call
/// is infrequent (a user-triggered "show frequent words"), so no
/// incremental top-K structure is maintained. The sort is stable: equal
/// frequencies keep registry (first-insertion) order.
pub fn top_n(trie: &TrieIndex, n: usize) -> Vec<(String, u64)> {
    let mut ranked: Vec<(String, u64)> = trie
        .words()
        .iter()
        .map(|word| (word.clone(), trie.node_frequency(word)))
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}
