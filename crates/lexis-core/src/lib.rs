//! Shared types and utilities for the lexis lexicon engine.
//!
//! This crate is the dependency-free leaf of the workspace. It holds the
//! token types produced by the tokenizer, character classification helpers,
//! the boundary error type, and the engine-wide limits.

pub mod character;
pub mod error;
pub mod token;

pub use error::LexiconError;
pub use token::{Token, TokenType};

/// Maximum number of characters in a query word.
///
/// Queries longer than this are rejected at the engine boundary before any
/// quadratic edit-distance work is attempted.
pub const MAX_WORD_CHARS: usize = 255;
