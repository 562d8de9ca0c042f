// lexis-suggest: Generate spelling suggestions for words.
//
// Reads words from stdin (one per line) or from the command line and
// prints suggestions for unknown words. Known words are printed as-is.
//
// Usage:
//   lexis-suggest [-w WORDLIST] [OPTIONS] [WORD...]
//
// Options:
//   -w, --wordlist PATH       Seed word list (one word per line)
//   -n, --max-suggestions N   Maximum number of suggestions (default: 5)
//   -D, --max-distance N      Maximum edit distance (default: 2)
//   -h, --help                Print help

use std::io::{self, BufRead, Write};

use lexis_engine::LexiconHandle;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (wordlist_path, args) = lexis_cli::parse_wordlist_path(&args);

    if lexis_cli::wants_help(&args) {
        println!("lexis-suggest: Generate spelling suggestions.");
        println!();
        println!("Usage: lexis-suggest [-w WORDLIST] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -w, --wordlist PATH       Seed word list (one word per line)");
        println!("  -n, --max-suggestions N   Maximum number of suggestions (default: 5)");
        println!("  -D, --max-distance N      Maximum edit distance (default: 2)");
        println!("  -h, --help                Print this help");
        return;
    }

    let (max_suggestions, args) = lexis_cli::parse_count(&args, "-n", "--max-suggestions", 5);
    let (max_distance, args) = lexis_cli::parse_count(&args, "-D", "--max-distance", 2);
    let words: Vec<String> = args.into_iter().filter(|a| !a.starts_with('-')).collect();

    let handle =
        lexis_cli::load_handle(wordlist_path.as_deref()).unwrap_or_else(|e| lexis_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let suggest_word = |word: &str, handle: &LexiconHandle, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        if handle.search(word) {
            let _ = writeln!(out, "{word} (known)");
            return;
        }
        match handle.similar_words(word, max_distance as u64, max_suggestions) {
            Ok(suggestions) if suggestions.is_empty() => {
                let _ = writeln!(out, "{word}: (no suggestions)");
            }
            Ok(suggestions) => {
                let _ = writeln!(out, "{word}:");
                for s in &suggestions {
                    let _ = writeln!(out, "  {s}");
                }
            }
            Err(e) => {
                let _ = writeln!(out, "{word}: skipped ({e})");
            }
        }
    };

    if words.is_empty() {
        // Read from stdin
        let stdin = io::stdin();
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
            suggest_word(word, &handle, &mut out);
        }
    } else {
        for word in &words {
            suggest_word(word, &handle, &mut out);
        }
    }
}
