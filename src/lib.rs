//! Reversible conversion between fixed-width integers and short strings over a
//! 64-symbol alphabet (`0-9a-zA-Z.:` by default), for compact identifiers derived
//! from numeric ids or timestamps.
//!
//! ```
//! assert_eq!(base64a::encode_i64(1673), "q9");
//! assert_eq!(base64a::decode_i64("q9"), Ok(1673));
//! ```

pub mod base64a;
pub mod base_common;
pub mod base_word;
pub mod error;

pub use self::{
    base64a::{decode, decode_i32, decode_i64, encode, encode_i32, encode_i64, encode_into, Codec, ALPHABET},
    base_common::Alphabet,
    base_word::Word,
    error::Error,
};
