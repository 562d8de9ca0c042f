//! End-to-end tests of the engine surface against a seeded vocabulary.
//!
//! These exercise the full path a spell-assist host would take: bulk
//! seeding, document classification, and the interactive query surface
//! (suggestions, completions, frequency ranking, next-word prediction).

use lexis_engine::classify::ClassifyOptions;
use lexis_engine::{Classification, LexiconHandle};

/// A small but realistic seed list (what a corpus bootstrap would feed
/// through the bulk-insert interface).
const SEED: &[&str] = &[
    "the", "a", "an", "and", "of", "to", "in", "is", "are", "was", "cat", "cats", "car", "cars",
    "cab", "dog", "dogs", "sat", "sit", "ran", "run", "mat", "hello", "help", "world", "word",
    "words", "work", "climate", "change", "problem", "planet", "storm", "storms", "weather",
    "future", "healthy", "really", "serious", "every", "year", "many", "people", "how",
];

fn seeded_handle() -> LexiconHandle {
    LexiconHandle::from_words(SEED.iter().copied())
}

#[test]
fn seeding_is_idempotent_for_membership() {
    let mut handle = seeded_handle();
    assert!(handle.search("climate"));
    // Membership survives any number of further inserts of other words.
    handle.insert("glacier");
    handle.insert("iceberg");
    assert!(handle.search("climate"));
    assert!(handle.search("glacier"));
}

#[test]
fn classify_a_misspelled_document() {
    let mut handle = seeded_handle();
    let result =
        handle.classify_text("The climate change problem is really serius, and the wether is wors");

    assert!(result.found.contains(&"climate".to_string()));
    assert!(result.found.contains(&"problem".to_string()));

    let similar_tokens: Vec<&str> = result.similar.iter().map(|(w, _)| w.as_str()).collect();
    assert!(similar_tokens.contains(&"serius"));
    assert!(similar_tokens.contains(&"wors"));

    let (_, candidates) = result
        .similar
        .iter()
        .find(|(w, _)| w == "serius")
        .expect("serius should be in the similar bucket");
    assert!(candidates.contains(&"serious".to_string()));
}

#[test]
fn classification_feeds_the_predictor() {
    let mut handle = seeded_handle();
    handle.classify_text("the cat sat");
    handle.classify_text("the dog ran");

    let predicted = handle.predict("the", 5);
    assert!(predicted.contains(&"cat".to_string()));
    assert!(predicted.contains(&"dog".to_string()));
    assert!(!predicted.contains(&"sat".to_string()));
    assert!(!predicted.contains(&"ran".to_string()));
}

#[test]
fn repeated_phrases_rank_higher_in_prediction() {
    let mut handle = seeded_handle();
    handle.classify_text("the cat sat");
    handle.classify_text("the cat sat");
    handle.classify_text("the dog ran");
    assert_eq!(handle.predict("the", 1), ["cat"]);
}

#[test]
fn found_words_accumulate_usage_frequency() {
    let mut handle = seeded_handle();
    handle.classify_text("the cat and the dog and the cat");

    // Seeded once each, then bumped per appearance in the document.
    assert_eq!(handle.node_frequency("the"), 4);
    assert_eq!(handle.node_frequency("cat"), 3);
    assert_eq!(handle.node_frequency("dog"), 2);

    let top = handle.top_n(3);
    assert_eq!(top[0], ("the".to_string(), 4));
    for pair in top.windows(2) {
        assert!(pair[0].1 >= pair[1].1);
    }
}

#[test]
fn add_to_dictionary_moves_token_out_of_unfound() {
    let mut handle = seeded_handle();
    let before = handle.classify(&["zyzzyva"]);
    assert_eq!(before.unfound, ["zyzzyva"]);

    // The user's explicit "add to dictionary" action.
    handle.insert("zyzzyva");

    let after = handle.classify(&["zyzzyva"]);
    assert_eq!(after.found, ["zyzzyva"]);
    assert_eq!(handle.node_frequency("zyzzyva"), 2);
}

#[test]
fn interactive_completion_flow() {
    let handle = seeded_handle();
    let completions = handle.autocomplete("wor", 10).unwrap();
    assert_eq!(completions, ["word", "words", "work", "world"]);

    let capped = handle.autocomplete("wor", 2).unwrap();
    assert_eq!(capped.len(), 2);
}

#[test]
fn suggestions_for_a_misspelling() {
    let handle = seeded_handle();
    assert!(!handle.search("helo"));
    let suggestions = handle.similar_words("helo", 2, 5).unwrap();
    assert!(suggestions.contains(&"hello".to_string()));
    assert!(suggestions.contains(&"help".to_string()));
    // Distance 1 beats distance 2.
    assert_eq!(suggestions[0], "hello");
}

#[test]
fn classification_options_take_effect() {
    let mut handle = LexiconHandle::with_options(ClassifyOptions {
        max_suggestions: 1,
        ..ClassifyOptions::default()
    });
    handle.insert_all(["mast", "most", "mist"]);

    let result = handle.classify(&["masst"]);
    assert_eq!(result.similar.len(), 1);
    assert_eq!(result.similar[0].1.len(), 1);
}

#[test]
fn classification_serializes_to_json() {
    let mut handle = seeded_handle();
    let result = handle.classify(&["the", "helo", "qqqq"]);

    let json = serde_json::to_value(&result).expect("classification should serialize");
    assert_eq!(json["found"][0], "the");
    assert_eq!(json["similar"][0][0], "helo");
    assert_eq!(json["unfound"][0], "qqqq");
}

#[test]
fn empty_document_classifies_to_empty_buckets() {
    let mut handle = seeded_handle();
    assert_eq!(handle.classify_text("   ...   "), Classification::default());
}
