// Character classification and normalization utilities.

/// Character type classification used by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if c.is_whitespace() {
        return CharType::Whitespace;
    }
    if c.is_numeric() {
        return CharType::Digit;
    }
    if is_punctuation_char(c) {
        return CharType::Punctuation;
    }
    CharType::Unknown
}

/// Check whether a character is a punctuation character recognized by the
/// tokenizer.
fn is_punctuation_char(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{2018}' | '\u{2019}'        // curly single quotes
            | '\u{201C}' | '\u{201D}'      // curly double quotes
            | '\u{2013}' | '\u{2014}'      // en/em dash
            | '\u{2026}'                   // ellipsis
        )
}

/// Lower-case a word the way every trie entry point does.
///
/// All storage and lookup paths normalize through this single function so
/// that "Cat", "CAT" and "cat" address the same terminal node.
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_letter() {
        assert_eq!(get_char_type('a'), CharType::Letter);
        assert_eq!(get_char_type('Z'), CharType::Letter);
        assert_eq!(get_char_type('\u{00E9}'), CharType::Letter); // é
    }

    #[test]
    fn classify_digit() {
        assert_eq!(get_char_type('0'), CharType::Digit);
        assert_eq!(get_char_type('9'), CharType::Digit);
    }

    #[test]
    fn classify_whitespace() {
        assert_eq!(get_char_type(' '), CharType::Whitespace);
        assert_eq!(get_char_type('\t'), CharType::Whitespace);
        assert_eq!(get_char_type('\n'), CharType::Whitespace);
    }

    #[test]
    fn classify_punctuation() {
        assert_eq!(get_char_type('.'), CharType::Punctuation);
        assert_eq!(get_char_type(','), CharType::Punctuation);
        assert_eq!(get_char_type('\u{2019}'), CharType::Punctuation);
    }

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize_word("Cat"), "cat");
        assert_eq!(normalize_word("CAT"), "cat");
        assert_eq!(normalize_word("caf\u{00C9}"), "caf\u{00E9}");
    }

    #[test]
    fn normalize_passes_lowercase_through() {
        assert_eq!(normalize_word("already"), "already");
        assert_eq!(normalize_word(""), "");
    }
}
