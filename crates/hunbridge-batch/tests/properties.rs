//! Length, ordering and default-slot properties of batch results.

use std::path::PathBuf;

use proptest::prelude::*;
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    aff: PathBuf,
    dic: PathBuf,
}

fn latin1() -> Fixture {
    let dir = TempDir::new().unwrap();
    let aff = dir.path().join("de.aff");
    let dic = dir.path().join("de.dic");
    std::fs::write(&aff, b"SET ISO8859-1\nSFX N Y 1\nSFX N 0 n .\n").unwrap();
    std::fs::write(&dic, b"4\nhaus\nstra\xDFe/N\nm\xFCller\nweg\n").unwrap();
    Fixture { _dir: dir, aff, dic }
}

/// ISO-8859-1 holds exactly U+0000..=U+00FF.
fn representable(word: &str) -> bool {
    word.chars().all(|c| u32::from(c) <= 0xFF)
}

/// Mixes dictionary words, Latin-1 noise, C1 controls, Windows-1252-only
/// punctuation and characters outside Latin-1.
fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("haus".to_string()),
        Just("straße".to_string()),
        Just("straßen".to_string()),
        Just("müller".to_string()),
        "[a-zäöüß]{1,8}",
        "[a-z]{0,3}[\u{0080}-\u{009F}€‘’“”…][a-z]{0,3}",
        "[a-z]{0,3}[\u{3040}-\u{309F}\u{1F600}-\u{1F64F}][a-z]{0,3}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_operation_preserves_length(words in prop::collection::vec(word(), 0..12)) {
        let f = latin1();
        prop_assert_eq!(hunbridge_batch::check(&f.aff, &f.dic, &words, hunbridge_batch::NO_IGNORE).unwrap().len(), words.len());
        prop_assert_eq!(hunbridge_batch::suggest(&f.aff, &f.dic, &words).unwrap().len(), words.len());
        prop_assert_eq!(hunbridge_batch::analyze(&f.aff, &f.dic, &words).unwrap().len(), words.len());
        prop_assert_eq!(hunbridge_batch::stem(&f.aff, &f.dic, &words).unwrap().len(), words.len());
    }

    #[test]
    fn batch_equals_words_checked_one_at_a_time(words in prop::collection::vec(word(), 1..10)) {
        let f = latin1();
        let batch = hunbridge_batch::check(&f.aff, &f.dic, &words, hunbridge_batch::NO_IGNORE).unwrap();
        for (word, flag) in words.iter().zip(&batch) {
            let single = hunbridge_batch::check(&f.aff, &f.dic, std::slice::from_ref(word), hunbridge_batch::NO_IGNORE).unwrap();
            prop_assert_eq!(single, vec![*flag]);
        }

        let mut reversed = words.clone();
        reversed.reverse();
        let mut flags = hunbridge_batch::check(&f.aff, &f.dic, &reversed, hunbridge_batch::NO_IGNORE).unwrap();
        flags.reverse();
        prop_assert_eq!(flags, batch);
    }

    #[test]
    fn unrepresentable_words_take_the_default(words in prop::collection::vec(word(), 1..10)) {
        let f = latin1();
        let flags = hunbridge_batch::check(&f.aff, &f.dic, &words, &words).unwrap();
        let stems = hunbridge_batch::stem(&f.aff, &f.dic, &words).unwrap();
        for ((word, flag), stem) in words.iter().zip(&flags).zip(&stems) {
            if representable(word) {
                prop_assert!(*flag, "ignored word {:?} should be accepted", word);
            } else {
                prop_assert!(!*flag, "{:?} cannot be represented", word);
                prop_assert!(stem.is_empty());
            }
        }
    }

    #[test]
    fn stems_round_trip_through_the_dictionary_encoding(word in "(haus|straße|müller|weg)") {
        let f = latin1();
        let stems = hunbridge_batch::stem(&f.aff, &f.dic, std::slice::from_ref(&word)).unwrap();
        prop_assert_eq!(stems, vec![vec![word]]);
    }
}
