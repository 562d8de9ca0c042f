// Word extraction from raw text.
//
// The engine core only consumes a word stream; this module turns raw text
// into one. Words are runs of letters or digits, with apostrophes and
// hyphens kept when they sit between two letters ("don't", "well-known").
// Everything else becomes punctuation, whitespace or unknown tokens.

use lexis_core::character::{CharType, get_char_type};
use lexis_core::{Token, TokenType};

/// Is this character a connector that may appear inside a word?
fn is_word_connector(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '-')
}

/// Split text into a full token stream, including whitespace and
/// punctuation tokens with their character offsets.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let start = pos;
        match get_char_type(chars[pos]) {
            CharType::Letter | CharType::Digit => {
                pos = scan_word(&chars, pos);
                let text: String = chars[start..pos].iter().collect();
                tokens.push(Token::new(TokenType::Word, text, start));
            }
            CharType::Whitespace => {
                while pos < chars.len() && get_char_type(chars[pos]) == CharType::Whitespace {
                    pos += 1;
                }
                let text: String = chars[start..pos].iter().collect();
                tokens.push(Token::new(TokenType::Whitespace, text, start));
            }
            CharType::Punctuation => {
                pos += 1;
                tokens.push(Token::new(TokenType::Punctuation, chars[start], start));
            }
            CharType::Unknown => {
                pos += 1;
                tokens.push(Token::new(TokenType::Unknown, chars[start], start));
            }
        }
    }

    tokens
}

/// Scan a word starting at `pos`, returning the position one past its end.
///
/// Consumes letter/digit runs, and crosses a single connector whenever a
/// letter follows it, so a trailing apostrophe or hyphen stays outside the
/// word.
fn scan_word(chars: &[char], mut pos: usize) -> usize {
    while pos < chars.len() {
        let ct = get_char_type(chars[pos]);
        if ct == CharType::Letter || ct == CharType::Digit {
            pos += 1;
        } else if is_word_connector(chars[pos])
            && pos + 1 < chars.len()
            && get_char_type(chars[pos + 1]) == CharType::Letter
        {
            pos += 2;
        } else {
            break;
        }
    }
    pos
}

/// Extract just the word texts from raw text, in order.
///
/// This is the tokenizer surface the batch classifier CLI feeds from.
pub fn split_words(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.token_type == TokenType::Word)
        .map(|t| t.text)
        .collect()
}
