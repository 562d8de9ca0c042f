// lexis-classify: Classify every word of a document.
//
// Reads text from stdin, tokenizes it and buckets every word as found,
// similar (with correction candidates) or unfound.
//
// Usage:
//   lexis-classify [-w WORDLIST] [OPTIONS]
//
// Options:
//   -w, --wordlist PATH       Seed word list (one word per line)
//   -n, --max-suggestions N   Candidates per similar word (default: 3)
//   --json                    Emit the classification as JSON
//   -h, --help                Print help

use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (wordlist_path, args) = lexis_cli::parse_wordlist_path(&args);

    if lexis_cli::wants_help(&args) {
        println!("lexis-classify: Classify every word of a document.");
        println!();
        println!("Usage: lexis-classify [-w WORDLIST] [OPTIONS]");
        println!();
        println!("Reads text from stdin. Buckets every word as found, similar");
        println!("(with correction candidates) or unfound, and updates the");
        println!("usage and next-word models as a side effect.");
        println!();
        println!("Options:");
        println!("  -w, --wordlist PATH       Seed word list (one word per line)");
        println!("  -n, --max-suggestions N   Candidates per similar word (default: 3)");
        println!("  --json                    Emit the classification as JSON");
        println!("  -h, --help                Print this help");
        return;
    }

    let (max_suggestions, args) = lexis_cli::parse_count(&args, "-n", "--max-suggestions", 3);
    let as_json = args.iter().any(|a| a == "--json");

    let mut handle =
        lexis_cli::load_handle(wordlist_path.as_deref()).unwrap_or_else(|e| lexis_cli::fatal(&e));
    handle.set_max_suggestions(max_suggestions);

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| lexis_cli::fatal(&format!("failed to read stdin: {e}")));

    let result = handle.classify_text(&input);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if as_json {
        let json = serde_json::to_string_pretty(&result)
            .unwrap_or_else(|e| lexis_cli::fatal(&format!("failed to serialize result: {e}")));
        let _ = writeln!(out, "{json}");
        return;
    }

    let _ = writeln!(out, "=== Found ({}) ===", result.found.len());
    for word in &result.found {
        let _ = writeln!(out, "  {word}");
    }

    let _ = writeln!(out, "=== Similar ({}) ===", result.similar.len());
    for (word, candidates) in &result.similar {
        let _ = writeln!(out, "  {word}: {}", candidates.join(", "));
    }

    let _ = writeln!(out, "=== Unfound ({}) ===", result.unfound.len());
    for word in &result.unfound {
        let _ = writeln!(out, "  {word}");
    }
}
