// Prefix autocomplete via explicit-stack DFS traversal.
//
// The traversal uses an explicit stack instead of recursion so that a
// pathological vocabulary with very long shared prefixes cannot overflow
// the call stack. Children are pushed in reverse character order, so nodes
// pop in ascending character order and the visit order matches a
// depth-first walk of the ordered child maps.

use lexis_core::character::normalize_word;

use crate::index::TrieIndex;
use crate::node::TrieNode;

impl TrieIndex {
    /// Collect up to `max_results` stored words starting with `prefix`.
    ///
    /// Returns an empty list if the prefix path does not exist or the
    /// prefix is empty. The traversal appends a word every time it visits
    /// a terminal node and stops as soon as the cap is reached, bounding
    /// the cost on dense subtrees. Results come out in depth-first
    /// character order, not frequency order; callers wanting ranking must
    /// post-process.
    pub fn autocomplete(&self, prefix: &str, max_results: usize) -> Vec<String> {
        let prefix = normalize_word(prefix);
        if prefix.is_empty() || max_results == 0 {
            return Vec::new();
        }

        let Some(start) = self.root.walk(prefix.chars()) else {
            return Vec::new();
        };

        let mut results = Vec::new();
        let mut stack: Vec<(&TrieNode, String)> = vec![(start, prefix)];

        while let Some((node, path)) = stack.pop() {
            if node.terminal {
                results.push(path.clone());
                if results.len() >= max_results {
                    break;
                }
            }
            for (&ch, child) in node.children.iter().rev() {
                let mut next = path.clone();
                next.push(ch);
                stack.push((child, next));
            }
        }

        results
    }
}
