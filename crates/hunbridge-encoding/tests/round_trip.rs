//! Round-trip properties: any word representable in the engine encoding
//! comes back from the engine unchanged.

use hunbridge_encoding::{ConverterPair, EncodingError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn latin1_words_round_trip(word in "[\u{0000}-\u{00FF}]{0,24}") {
        let pair = ConverterPair::for_engine("ISO8859-1").unwrap();
        let bytes = pair.to_engine(&word).unwrap();
        prop_assert_eq!(bytes.len(), word.chars().count());
        prop_assert!(bytes.iter().zip(word.chars()).all(|(&b, c)| u32::from(b) == c as u32));
        prop_assert_eq!(pair.to_host(&bytes).unwrap(), word);
    }

    #[test]
    fn latin1_rejects_everything_above_ff(prefix in "[a-z]{0,8}", c in "[\u{0100}-\u{FFFF}]") {
        let pair = ConverterPair::for_engine("ISO8859-1").unwrap();
        let is_conversion_failure =
            matches!(pair.to_engine(&format!("{prefix}{c}")), Err(EncodingError::ConversionFailure { .. }));
        prop_assert!(is_conversion_failure);
    }

    #[test]
    fn koi8r_cyrillic_round_trip(word in "[а-яА-ЯёЁ]{1,16}") {
        let pair = ConverterPair::for_engine("KOI8-R").unwrap();
        let bytes = pair.to_engine(&word).unwrap();
        prop_assert_eq!(pair.to_host(&bytes).unwrap(), word);
    }

    #[test]
    fn utf8_round_trips_anything(word in "\\PC{0,16}") {
        let pair = ConverterPair::for_engine("UTF-8").unwrap();
        let bytes = pair.to_engine(&word).unwrap();
        prop_assert_eq!(pair.to_host(&bytes).unwrap(), word);
    }

    #[test]
    fn astral_characters_never_fit_single_byte(prefix in "[a-z]{0,8}", c in "[\u{1F300}-\u{1F5FF}]") {
        let pair = ConverterPair::for_engine("ISO8859-15").unwrap();
        let word = format!("{prefix}{c}");
        let is_conversion_failure =
            matches!(pair.to_engine(&word), Err(EncodingError::ConversionFailure { .. }));
        prop_assert!(is_conversion_failure);
    }
}
