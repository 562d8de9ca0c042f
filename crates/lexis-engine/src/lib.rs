//! Adaptive lexicon engine.
//!
//! Maintains a large vocabulary with per-word usage frequency, answers
//! exact-membership and prefix queries, finds near-matches for misspelled
//! input via bounded edit-distance search, and learns pairwise
//! word-adjacency statistics to predict likely next words. This crate is
//! the substrate beneath an interactive spell-assist editor; it performs no
//! rendering, persistence or I/O of its own.
//!
//! # Architecture
//!
//! - [`fuzzy`] -- Bounded Levenshtein distance with pruning, and the
//!   vocabulary-wide similar-word scan
//! - [`frequency`] -- Usage-frequency ranking over the word registry
//! - [`predict`] -- Bigram next-word prediction model
//! - [`classify`] -- Batch classification of a token stream into
//!   found / similar / unfound buckets
//! - [`tokenizer`] -- Word extraction from raw text
//! - [`handle`] -- [`LexiconHandle`], the top-level facade owning the trie
//!   and the bigram model
//!
//! The engine is single-owner and synchronous: one logical owner issues one
//! call at a time, and mutating calls require `&mut` access.

pub mod classify;
pub mod frequency;
pub mod fuzzy;
pub mod handle;
pub mod predict;
pub mod tokenizer;

pub use classify::{Classification, ClassifyOptions};
pub use fuzzy::Distance;
pub use handle::LexiconHandle;
pub use predict::BigramPredictor;
