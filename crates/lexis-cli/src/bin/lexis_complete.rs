// lexis-complete: List vocabulary words starting with a prefix.
//
// Usage:
//   lexis-complete [-w WORDLIST] [OPTIONS] [PREFIX...]
//
// Options:
//   -w, --wordlist PATH   Seed word list (one word per line)
//   -n, --max-results N   Maximum completions per prefix (default: 10)
//   -h, --help            Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (wordlist_path, args) = lexis_cli::parse_wordlist_path(&args);

    if lexis_cli::wants_help(&args) {
        println!("lexis-complete: List vocabulary words starting with a prefix.");
        println!();
        println!("Usage: lexis-complete [-w WORDLIST] [OPTIONS] [PREFIX...]");
        println!();
        println!("If PREFIX arguments are given, completes each one.");
        println!("Otherwise reads prefixes from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -w, --wordlist PATH   Seed word list (one word per line)");
        println!("  -n, --max-results N   Maximum completions per prefix (default: 10)");
        println!("  -h, --help            Print this help");
        return;
    }

    let (max_results, args) = lexis_cli::parse_count(&args, "-n", "--max-results", 10);
    let prefixes: Vec<String> = args.into_iter().filter(|a| !a.starts_with('-')).collect();

    let handle =
        lexis_cli::load_handle(wordlist_path.as_deref()).unwrap_or_else(|e| lexis_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let complete = |prefix: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        match handle.autocomplete(prefix, max_results) {
            Ok(completions) if completions.is_empty() => {
                let _ = writeln!(out, "{prefix}: (no completions)");
            }
            Ok(completions) => {
                let _ = writeln!(out, "{prefix}:");
                for word in &completions {
                    let _ = writeln!(out, "  {word}");
                }
            }
            Err(e) => {
                let _ = writeln!(out, "{prefix}: skipped ({e})");
            }
        }
    };

    if prefixes.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let prefix = line.trim();
            if prefix.is_empty() {
                continue;
            }
            complete(prefix, &mut out);
        }
    } else {
        for prefix in &prefixes {
            complete(prefix, &mut out);
        }
    }
}
