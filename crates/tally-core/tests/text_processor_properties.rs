//! Property tests for the text processor.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use tally_core::domain::{TextProcessor, is_space};

/// Text biased towards whitespace so tab runs, newlines, separators and
/// blank input show up often.
fn texty() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[ \t\n\r\x0b\x0c\x1c-\x1f\u{85}\u{a0}\u{2028}\u{3000}a-cA-C.,]{0,40}",
    ]
}

/// Reference whitespace set, listed code point by code point.
fn reference_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{b}' | '\u{c}' | '\r' | '\u{1c}'..='\u{1f}' | ' '
            | '\u{85}' | '\u{a0}' | '\u{1680}' | '\u{2000}'..='\u{200a}'
            | '\u{2028}' | '\u{2029}' | '\u{202f}' | '\u{205f}' | '\u{3000}'
    )
}

#[test]
fn is_space_matches_reference_for_every_char() {
    for c in (0..=u32::from(char::MAX)).filter_map(char::from_u32) {
        assert_eq!(is_space(c), reference_space(c), "U+{:04X}", u32::from(c));
    }
}

#[test]
fn separator_splits_words() {
    assert_eq!(TextProcessor::new("a\u{1f}b").count_words(), 2);
    assert_eq!(TextProcessor::new("a\u{85}b\u{a0}c").tokenize(), vec!["a", "b", "c"]);
}

proptest! {
    #[test]
    fn token_count_equals_tokenize_length(text in texty()) {
        let processor = TextProcessor::new(text);
        prop_assert_eq!(processor.tokenize().len(), processor.count_words());
    }

    #[test]
    fn sum_of_frequencies_equals_count(text in texty()) {
        let processor = TextProcessor::new(text);
        let tokens = processor.tokenize();
        let count = processor.count_words();

        if tokens.is_empty() {
            prop_assert_eq!(count, 0);
        } else {
            let unique: HashSet<&str> = tokens.iter().copied().collect();
            let sum: usize = unique.iter().map(|t| processor.word_frequency(t)).sum();
            prop_assert_eq!(sum, count);
        }
    }

    #[test]
    fn normalize_is_idempotent(text in texty()) {
        let first = TextProcessor::new(text).normalize();
        let second = TextProcessor::new(first.clone()).normalize();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tokens_match_reference_split_of_normalized_text(text in texty()) {
        let processor = TextProcessor::new(text);
        let normalized = processor.normalize();
        let expected: Vec<&str> = normalized
            .split(reference_space)
            .filter(|t| !t.is_empty())
            .collect();
        prop_assert_eq!(processor.tokenize(), expected);
    }

    #[test]
    fn word_frequency_matches_reference_count(text in texty(), word in ".{1,6}") {
        let processor = TextProcessor::new(text);
        let mut counter: HashMap<&str, usize> = HashMap::new();
        for token in processor.tokenize() {
            *counter.entry(token).or_default() += 1;
        }
        let expected = counter.get(word.as_str()).copied().unwrap_or(0);
        prop_assert_eq!(processor.word_frequency(&word), expected);
    }

    #[test]
    fn empty_word_frequency_is_zero(text in texty()) {
        prop_assert_eq!(TextProcessor::new(text).word_frequency(""), 0);
    }

    #[test]
    fn nonblank_text_has_positive_count(text in texty().prop_filter("non-blank", |t| !t.trim_matches(reference_space).is_empty())) {
        let processor = TextProcessor::new(text);
        if !processor.normalize().is_empty() {
            prop_assert!(processor.count_words() > 0);
        }
    }

    #[test]
    fn normalized_text_has_no_tabs_or_outer_whitespace(text in texty()) {
        let normalized = TextProcessor::new(text).normalize();
        prop_assert!(!normalized.contains('\t'));
        prop_assert_eq!(normalized.trim_matches(reference_space), normalized.as_str());
    }
}
