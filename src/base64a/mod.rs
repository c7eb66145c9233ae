pub mod codec;
pub mod decode;
pub mod encode;

pub use crate::base_common::Alphabet;

pub const ALPHABET: Alphabet = match Alphabet::from_ascii(b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.:") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub use codec::Codec;
pub use decode::{decode, decode_i32, decode_i64};
pub use encode::{encode, encode_i32, encode_i64, encode_into};
