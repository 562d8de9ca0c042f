// lexis-predict: Predict likely next words from a training text.
//
// Reads training text from stdin, builds the bigram model from it, then
// prints predictions for each WORD argument.
//
// Usage:
//   lexis-predict [OPTIONS] WORD...
//
// Options:
//   -n, --count N   Number of predictions per word (default: 5)
//   -h, --help      Print help

use std::io::{self, Read, Write};

use lexis_engine::LexiconHandle;
use lexis_engine::tokenizer::split_words;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if lexis_cli::wants_help(&args) || args.is_empty() {
        println!("lexis-predict: Predict likely next words from a training text.");
        println!();
        println!("Usage: lexis-predict [OPTIONS] WORD...");
        println!();
        println!("Reads training text from stdin, observes its word adjacencies,");
        println!("then prints the most likely next words for each WORD.");
        println!();
        println!("Options:");
        println!("  -n, --count N   Number of predictions per word (default: 5)");
        println!("  -h, --help      Print this help");
        return;
    }

    let (count, args) = lexis_cli::parse_count(&args, "-n", "--count", 5);
    let words: Vec<String> = args.into_iter().filter(|a| !a.starts_with('-')).collect();
    if words.is_empty() {
        lexis_cli::fatal("no WORD arguments given");
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| lexis_cli::fatal(&format!("failed to read stdin: {e}")));

    let mut handle = LexiconHandle::new();
    handle.observe(&split_words(&input));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for word in &words {
        let predicted = handle.predict(word, count);
        if predicted.is_empty() {
            let _ = writeln!(out, "{word}: (no observations)");
        } else {
            let _ = writeln!(out, "{word}: {}", predicted.join(" "));
        }
    }
}
