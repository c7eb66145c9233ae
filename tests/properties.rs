//! Property-based tests for the integer codec.
//!
//! 1. **Round-trip**: every 32-bit and 64-bit value survives encode/decode
//! 2. **Shape**: encodings are never longer than the width allows, negatives always hit that bound
//! 3. **Alphabets**: any permutation of 64 distinct symbols round-trips on its own
//! 4. **Robustness**: decoding arbitrary text never panics

use base64a::{Codec, Error, Word};
use proptest::prelude::*;

const DEFAULT: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.:";

// ─────────────────────────────────────────────────────────────────────────────
// Strategies
// ─────────────────────────────────────────────────────────────────────────────

/// Shuffled permutations of the default alphabet plus two non-ASCII symbols.
fn shuffled_alphabet() -> impl Strategy<Value = Vec<char>> {
    let symbols: Vec<char> = DEFAULT.replace('.', "é").replace(':', "ß").chars().collect();
    Just(symbols).prop_shuffle()
}

proptest! {
    #[test]
    fn round_trip_i32(value in any::<i32>()) {
        let codec = Codec::new();
        prop_assert_eq!(codec.decode_i32(codec.encode_i32(value)), Ok(value));
    }

    #[test]
    fn round_trip_i64(value in any::<i64>()) {
        let codec = Codec::new();
        prop_assert_eq!(codec.decode_i64(codec.encode_i64(value)), Ok(value));
    }

    #[test]
    fn round_trip_unsigned(value in any::<u64>()) {
        let codec = Codec::new();
        prop_assert_eq!(codec.decode::<u64>(codec.encode(value)), Ok(value));
        prop_assert_eq!(codec.encode(value), codec.encode(value as i64));
    }

    #[test]
    fn encoded_length_bounds(value in any::<i64>()) {
        let codec = Codec::new();
        let encoded = codec.encode_i64(value);
        prop_assert!(!encoded.is_empty());
        prop_assert!(encoded.len() <= <i64 as Word>::MAX_SYMBOLS);
        if value != 0 {
            prop_assert!(!encoded.starts_with('0'));
        }
    }

    #[test]
    fn negatives_take_full_width(value in i32::MIN..0) {
        let codec = Codec::new();
        prop_assert_eq!(codec.encode_i32(value).len(), <i32 as Word>::MAX_SYMBOLS);
        prop_assert_eq!(codec.encode_i64(i64::from(value)).len(), <i64 as Word>::MAX_SYMBOLS);
    }

    #[test]
    fn shuffled_alphabets_round_trip(symbols in shuffled_alphabet(), value in any::<i64>(), small in any::<i32>()) {
        let codec = Codec::with_alphabet(symbols.iter().copied()).unwrap();
        prop_assert!(codec.alphabet().is_unique());
        prop_assert_eq!(codec.decode_i64(codec.encode_i64(value)), Ok(value));
        prop_assert_eq!(codec.decode_i32(codec.encode_i32(small)), Ok(small));
        prop_assert_eq!(codec.encode_i64(0), symbols[0].to_string());
    }

    #[test]
    fn wrong_alphabet_length(length in 0usize..200) {
        prop_assume!(length != 64);
        let symbols = (0..length as u32).filter_map(|offset| char::from_u32(0x100 + offset));
        prop_assert!(matches!(Codec::with_alphabet(symbols), Err(Error::InvalidAlphabet(_))));
    }

    #[test]
    fn decode_never_panics(input in ".{0,24}") {
        let codec = Codec::new();
        match codec.decode_i64(&input) {
            Ok(_) => prop_assert!(input.chars().all(|character| DEFAULT.contains(character))),
            Err(Error::InvalidCharacter { character, index }) => {
                prop_assert!(!DEFAULT.contains(character));
                prop_assert_eq!(input[index..].chars().next(), Some(character));
            }
            Err(error) => prop_assert!(false, "unexpected error {}", error),
        }
        let _ = codec.decode_i32(&input);
    }

    #[test]
    fn decoded_values_reencode(input in "[0-9a-zA-Z.:]{1,11}") {
        let codec = Codec::new();
        let value = codec.decode_i64(&input).unwrap();
        let trimmed = input.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        if input.len() < 11 || input.starts_with(|c: char| "01234567".contains(c)) {
            prop_assert_eq!(codec.encode_i64(value), expected);
        }
    }
}

#[test]
fn default_and_alternate_differ() {
    let standard = Codec::new();
    let alternate: Codec = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789+=".parse().unwrap();
    for value in [1i64, 1673, 167300, -1673, i64::MAX, i64::MIN] {
        let encoded = standard.encode_i64(value);
        let alternate_encoded = alternate.encode_i64(value);
        assert_ne!(encoded, alternate_encoded);
        assert_eq!(standard.decode_i64(&encoded), Ok(value));
        assert_eq!(alternate.decode_i64(&alternate_encoded), Ok(value));
    }
}

#[test]
fn module_functions_use_default_alphabet() {
    assert_eq!(base64a::encode_i32(0), "0");
    assert_eq!(base64a::encode_i64(1673), "q9");
    assert_eq!(base64a::decode_i64("nHkl3S4B"), Ok(104131835420965));
    assert_eq!(base64a::decode_i32("200000"), Ok(i32::MIN));

    let mut output = String::new();
    base64a::encode_into(7i32, &mut output);
    base64a::encode_into(-1i64, &mut output);
    assert_eq!(output, "7f::::::::::");
}
