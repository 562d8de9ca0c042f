//! Character-trie vocabulary storage.
//!
//! This crate provides the storage structure underneath the lexicon engine:
//! a character trie with per-terminal usage counters and a flat
//! insertion-order registry of every distinct word ever stored.
//!
//! # Architecture
//!
//! - [`node`] -- Trie node layout (child map, terminal flag, usage counter)
//! - [`index`] -- [`TrieIndex`]: insert, exact search, prefix probe,
//!   usage counter lookup, registry access
//! - [`complete`] -- Prefix autocomplete via explicit-stack DFS traversal
//!
//! Child maps are ordered by character so that every traversal visits
//! children in the same order on every run. The registry defines the
//! canonical scan order used by fuzzy matching and frequency ranking in the
//! engine crate.

pub mod complete;
pub mod index;
pub mod node;

pub use index::TrieIndex;
