// Boundary error type shared by the engine crates.

/// Errors reported at the engine boundary.
///
/// Absence is never an error in this engine: a missing word is `false`, an
/// empty candidate list, or a `TooFar` distance. The only failures worth
/// signaling are malformed or pathological inputs that are rejected before
/// any traversal work starts. All of them are local and recoverable; the
/// caller can skip the offending token and carry on.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LexiconError {
    /// A query exceeded the maximum supported word length.
    #[error("query of {length} characters exceeds the {max} character limit")]
    WordTooLong { length: usize, max: usize },
}
