// lexis-spell: Check words against the lexicon.
//
// Reads words from stdin (one per line) and reports whether each word is
// in the vocabulary:
//   C: word    (known)
//   W: word    (unknown)
//
// Usage:
//   lexis-spell [-w WORDLIST] [OPTIONS]
//
// Options:
//   -w, --wordlist PATH    Seed word list (one word per line)
//   -s, --suggest          Also print suggestions for unknown words
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (wordlist_path, args) = lexis_cli::parse_wordlist_path(&args);

    if lexis_cli::wants_help(&args) {
        println!("lexis-spell: Check words against the lexicon.");
        println!();
        println!("Usage: lexis-spell [-w WORDLIST] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (known)");
        println!("  W: word    (unknown)");
        println!();
        println!("Options:");
        println!("  -w, --wordlist PATH    Seed word list (one word per line)");
        println!("  -s, --suggest          Also print suggestions for unknown words");
        println!("  -h, --help             Print this help");
        return;
    }

    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");

    let handle =
        lexis_cli::load_handle(wordlist_path.as_deref()).unwrap_or_else(|e| lexis_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        if handle.search(word) {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if show_suggestions {
                match handle.similar_words(word, 2, 5) {
                    Ok(suggestions) => {
                        for suggestion in suggestions {
                            let _ = writeln!(out, "S: {suggestion}");
                        }
                    }
                    Err(e) => eprintln!("skipping {word}: {e}"),
                }
            }
        }
    }
}
