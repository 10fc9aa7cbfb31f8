//! Basic tests for wordlink-core

use wordlink_core::*;

fn keywords_of<P>(matches: &[Match<P>]) -> Vec<String> {
    matches.iter().map(|m| m.keyword_str().into_owned()).collect()
}

#[test]
fn test_span_ordering_and_equality() {
    let a = Match::new(&b"foo"[..], 0, 3, 1);
    let b = Match::new(&b"bar"[..], 0, 3, 2);
    let c = Match::new(&b"foobar"[..], 0, 6, 3);

    assert_eq!(a, b);
    assert!(a < c);
    assert_eq!(a.span, Span::new(0, 3));
    assert!(a.overlaps(&c));
}

#[test]
fn test_scan_reports_whole_words_only() {
    let automaton = Automaton::with_keywords(["cat", "dog"]);

    let matches = automaton.scan(b"cat, concatenate, dogma, dog.");
    assert_eq!(keywords_of(&matches), vec!["cat", "dog"]);
    assert_eq!(matches[0].span, Span::new(0, 3));
    assert_eq!(matches[1].span, Span::new(25, 28));
}

#[test]
fn test_payload_flows_through_scan() {
    let mut automaton = Automaton::new();
    automaton.add("rust", "https://www.rust-lang.org").unwrap();
    automaton.add("cargo", "https://doc.rust-lang.org/cargo").unwrap();

    let matches = automaton.scan(b"cargo builds rust");
    let urls: Vec<&str> = matches.iter().map(|m| m.payload).collect();
    assert_eq!(
        urls,
        vec!["https://doc.rust-lang.org/cargo", "https://www.rust-lang.org"]
    );
}

#[test]
fn test_add_all_shares_payload() {
    let mut automaton = Automaton::new();
    automaton.add_all(&["red", "green", "blue"], 7u8).unwrap();
    assert_eq!(automaton.len(), 3);

    let matches = automaton.scan(b"red and blue");
    assert!(matches.iter().all(|m| m.payload == 7));
    assert_eq!(matches.len(), 2);
}

#[test]
fn test_sealed_automaton_rejects_keywords() {
    let mut automaton = Automaton::with_keywords(["alpha"]);
    assert!(automaton.is_sealed());

    let err = automaton.add_keyword("beta").unwrap_err();
    assert_eq!(
        err,
        CoreError::Sealed {
            keyword: "beta".to_string()
        }
    );
}

#[test]
fn test_filtered_scan_prefers_longer() {
    let automaton = Automaton::with_keywords(["New York", "York Times", "New York Times"]);
    let text = b"I read the New York Times";

    let filtered = automaton.scan_with(text, ScanOptions::filtered());
    assert_eq!(keywords_of(&filtered), vec!["New York Times"]);
}

#[test]
fn test_chain_prefers_later_source_for_identical_span() {
    let mut general = Automaton::new();
    general.add("Paris", "general").unwrap();
    let mut specific = Automaton::new();
    specific.add("Paris", "specific").unwrap();

    let chain = MatchChain::new().with(general).with(specific);
    let merged = chain.process(b"Paris in spring");

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].payload, "specific");
}

#[test]
fn test_chain_sources_behind_arc() {
    use std::sync::Arc;

    let shared = Arc::new(Automaton::with_keywords(["shared"]));
    let chain = MatchChain::new()
        .with(Arc::clone(&shared))
        .with(Automaton::with_keywords(["local"]));

    let merged = chain.process(b"shared and local");
    assert_eq!(keywords_of(&merged), vec!["shared", "local"]);
    assert_eq!(shared.scan(b"shared").len(), 1);
}

#[test]
fn test_word_byte_classification() {
    assert!(is_word_byte(b'a'));
    assert!(is_word_byte(b'Z'));
    assert!(is_word_byte(b'5'));
    assert!(is_word_byte(b'_'));
    assert!(is_word_delimiter(b' '));
    assert!(is_word_delimiter(b'-'));
    assert!(is_word_delimiter(0xC3));
}
