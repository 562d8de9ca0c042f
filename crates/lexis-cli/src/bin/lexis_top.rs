// lexis-top: Show the most-used words in the lexicon.
//
// Optionally classifies one or more text files first, so their word usage
// counts towards the ranking. Without files, the ranking reflects the seed
// list alone (every word at frequency 1).
//
// Usage:
//   lexis-top [-w WORDLIST] [OPTIONS] [TEXT_FILE...]
//
// Options:
//   -w, --wordlist PATH   Seed word list (one word per line)
//   -n, --count N         Number of words to show (default: 10)
//   -h, --help            Print help

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (wordlist_path, args) = lexis_cli::parse_wordlist_path(&args);

    if lexis_cli::wants_help(&args) {
        println!("lexis-top: Show the most-used words in the lexicon.");
        println!();
        println!("Usage: lexis-top [-w WORDLIST] [OPTIONS] [TEXT_FILE...]");
        println!();
        println!("Classifies each TEXT_FILE first so its word usage counts,");
        println!("then prints the most frequent words with their counters.");
        println!();
        println!("Options:");
        println!("  -w, --wordlist PATH   Seed word list (one word per line)");
        println!("  -n, --count N         Number of words to show (default: 10)");
        println!("  -h, --help            Print this help");
        return;
    }

    let (count, args) = lexis_cli::parse_count(&args, "-n", "--count", 10);
    let files: Vec<String> = args.into_iter().filter(|a| !a.starts_with('-')).collect();

    let mut handle =
        lexis_cli::load_handle(wordlist_path.as_deref()).unwrap_or_else(|e| lexis_cli::fatal(&e));

    for file in &files {
        let text = std::fs::read_to_string(file)
            .unwrap_or_else(|e| lexis_cli::fatal(&format!("failed to read {file}: {e}")));
        handle.classify_text(&text);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for (word, frequency) in handle.top_n(count) {
        let _ = writeln!(out, "{frequency:>8}  {word}");
    }
}
