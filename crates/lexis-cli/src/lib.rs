// lexis-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use lexis_engine::LexiconHandle;

/// Default word list file name searched for in the standard locations.
const WORDLIST_FILE: &str = "words.txt";

/// Search for a seed word list and create a seeded LexiconHandle.
///
/// Search order:
/// 1. `wordlist_path` argument (if provided)
/// 2. `LEXIS_WORDLIST` environment variable
/// 3. `~/.lexis/words.txt`
/// 4. `/usr/share/dict/words` (common on Unix systems)
/// 5. `words.txt` in the current working directory
///
/// The word list is plain text, one word per line; blank lines and lines
/// starting with `#` are skipped.
pub fn load_handle(wordlist_path: Option<&str>) -> Result<LexiconHandle, String> {
    let search_paths = build_search_paths(wordlist_path);

    for path in &search_paths {
        if path.is_file() {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
            let words = contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'));
            return Ok(LexiconHandle::from_words(words));
        }
    }

    Err(format!(
        "could not find a word list in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of word list file candidates.
fn build_search_paths(wordlist_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = wordlist_path {
        paths.push(PathBuf::from(p));
    }

    // 2. LEXIS_WORDLIST environment variable
    if let Ok(env_path) = std::env::var("LEXIS_WORDLIST") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".lexis").join(WORDLIST_FILE));
    }

    // 4. System dictionary
    paths.push(PathBuf::from("/usr/share/dict/words"));

    // 5. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDLIST_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--wordlist=PATH` or `-w PATH` argument from command line args.
///
/// Returns `(wordlist_path, remaining_args)`.
pub fn parse_wordlist_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut wordlist_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--wordlist=") {
            wordlist_path = Some(val.to_string());
        } else if arg == "--wordlist" || arg == "-w" {
            if i + 1 < args.len() {
                wordlist_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (wordlist_path, remaining)
}

/// Parse a `-n N` / `--count N` style numeric flag out of the args.
///
/// Returns `(value, remaining_args)`; `default` is used when the flag is
/// absent.
pub fn parse_count(args: &[String], short: &str, long: &str, default: usize) -> (usize, Vec<String>) {
    let mut value = default;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == short || arg == long {
            if i + 1 < args.len() {
                value = args[i + 1]
                    .parse()
                    .unwrap_or_else(|_| fatal(&format!("invalid number for {long}")));
                skip_next = true;
            } else {
                fatal(&format!("{long} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
