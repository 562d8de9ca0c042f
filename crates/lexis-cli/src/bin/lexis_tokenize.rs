// lexis-tokenize: Tokenize text from stdin.
//
// Reads text from stdin and prints tokens with their types and character
// offsets. Needs no word list; tokenization is purely lexical.
//
// Usage:
//   lexis-tokenize [OPTIONS]
//
// Options:
//   --words-only   Print only word tokens, one per line
//   -h, --help     Print help

use std::io::{self, Read, Write};

use lexis_core::TokenType;
use lexis_engine::tokenizer::{split_words, tokenize};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if lexis_cli::wants_help(&args) {
        println!("lexis-tokenize: Tokenize text.");
        println!();
        println!("Usage: lexis-tokenize [OPTIONS]");
        println!();
        println!("Reads text from stdin, prints tokens with types:");
        println!("  WORD:        <text>");
        println!("  PUNCTUATION: <text>");
        println!("  WHITESPACE:  <text>");
        println!("  UNKNOWN:     <text>");
        println!();
        println!("Options:");
        println!("  --words-only   Print only word tokens, one per line");
        println!("  -h, --help     Print this help");
        return;
    }

    let words_only = args.iter().any(|a| a == "--words-only");

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| lexis_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words_only {
        for word in split_words(&input) {
            let _ = writeln!(out, "{word}");
        }
        return;
    }

    for token in tokenize(&input) {
        let type_str = match token.token_type {
            TokenType::Word => "WORD",
            TokenType::Punctuation => "PUNCTUATION",
            TokenType::Whitespace => "WHITESPACE",
            TokenType::Unknown => "UNKNOWN",
            TokenType::None => "NONE",
        };
        let display_text = token
            .text
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t");
        let _ = writeln!(
            out,
            "{type_str:13} [{:>4}..{:>4}]: {display_text}",
            token.pos,
            token.pos + token.token_len
        );
    }
}
