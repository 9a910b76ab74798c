//! Property tests for substitution over generated vocabularies.

use oovsub_lookup::{OovSubstitutor, Vocabulary};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-f]{1,8}"
}

fn vocabulary_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 1..12)
}

proptest! {
    #[test]
    fn vocabulary_words_map_to_themselves(words in vocabulary_words()) {
        let vocab = Vocabulary::from_words(words.iter().cloned()).unwrap();
        let sub = OovSubstitutor::without_marks(&vocab);
        for w in &words {
            prop_assert_eq!(sub.substitute(w), w.clone());
        }
    }

    #[test]
    fn result_is_a_word_or_unknown(
        words in vocabulary_words(),
        // The corpus separator may appear in arbitrary input.
        query in "[a-h\\x00]{0,10}",
    ) {
        let vocab = Vocabulary::from_words(words.iter().cloned()).unwrap();
        let sub = OovSubstitutor::without_marks(&vocab);
        let result = sub.substitute(&query);
        prop_assert!(result == "<unk>" || vocab.contains_word(&result), "got {:?}", result);
    }

    #[test]
    fn substitution_is_a_fixed_point(words in vocabulary_words(), query in "[a-h]{1,10}") {
        let vocab = Vocabulary::from_words(words.iter().cloned()).unwrap();
        let sub = OovSubstitutor::without_marks(&vocab);
        let once = sub.substitute(&query);
        if vocab.contains_word(&once) {
            prop_assert_eq!(sub.substitute(&once), once);
        }
    }

    #[test]
    fn disjoint_alphabet_is_unknown(words in vocabulary_words(), query in "[u-z]{1,10}") {
        let vocab = Vocabulary::from_words(words.iter().cloned()).unwrap();
        let sub = OovSubstitutor::without_marks(&vocab);
        prop_assert_eq!(sub.substitute(&query), "<unk>");
    }

    #[test]
    fn single_sharing_entry_is_found(
        prefix in "[u-z]{0,4}",
        shared in "[a-f]{2,5}",
        suffix in "[u-z]{0,4}",
        others in prop::collection::vec("[g-m]{1,6}", 0..6),
    ) {
        // The only vocabulary word that shares anything with the query.
        let target = format!("q{shared}r");
        let mut words = others.clone();
        words.push(target.clone());
        let vocab = Vocabulary::from_words(words.iter().cloned()).unwrap();
        let sub = OovSubstitutor::without_marks(&vocab);
        let query = format!("{prefix}{shared}{suffix}");
        prop_assert_eq!(sub.substitute(&query), target);
    }
}
