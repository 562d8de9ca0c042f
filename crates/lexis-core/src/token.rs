// Token types produced by the tokenizer.

/// Token types for string tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// End of text or error.
    None,
    /// Word token.
    Word,
    /// Punctuation token.
    Punctuation,
    /// Whitespace token.
    Whitespace,
    /// Character not used in any supported natural language.
    Unknown,
}

/// A text token produced by the tokenizer.
///
/// Carries the token text and its character offset within the source so a
/// host editor can map classifications back to positions. The engine itself
/// never uses the position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The type of this token.
    pub token_type: TokenType,

    /// The text content of this token.
    pub text: String,

    /// Length of the token in characters.
    pub token_len: usize,

    /// Position of this token within the source text (character offset).
    pub pos: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(token_type: TokenType, text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let token_len = text.chars().count();
        Self {
            token_type,
            text,
            token_len,
            pos,
        }
    }

    /// Create an empty `None` token at position 0, signaling end-of-text.
    pub fn none() -> Self {
        Self {
            token_type: TokenType::None,
            text: String::new(),
            token_len: 0,
            pos: 0,
        }
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_new() {
        let tok = Token::new(TokenType::Word, "lexicon", 0);
        assert_eq!(tok.token_type, TokenType::Word);
        assert_eq!(tok.text, "lexicon");
        assert_eq!(tok.token_len, 7);
        assert_eq!(tok.pos, 0);
    }

    #[test]
    fn token_new_with_position() {
        let tok = Token::new(TokenType::Punctuation, ".", 10);
        assert_eq!(tok.token_type, TokenType::Punctuation);
        assert_eq!(tok.text, ".");
        assert_eq!(tok.token_len, 1);
        assert_eq!(tok.pos, 10);
    }

    #[test]
    fn token_unicode_length() {
        // "café" is 4 characters, 5 bytes in UTF-8
        let tok = Token::new(TokenType::Word, "caf\u{00E9}", 0);
        assert_eq!(tok.token_len, 4); // character count, not byte count
    }

    #[test]
    fn token_none() {
        let tok = Token::none();
        assert_eq!(tok.token_type, TokenType::None);
        assert!(tok.text.is_empty());
        assert_eq!(tok.token_len, 0);
    }

    #[test]
    fn token_default_is_none() {
        assert_eq!(Token::default().token_type, TokenType::None);
    }
}
