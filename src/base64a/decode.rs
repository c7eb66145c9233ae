use super::Codec;
use crate::{base_word::Word, Error};

pub fn decode<W: Word>(input: impl AsRef<str>) -> Result<W, Error> {
    Codec::standard().decode(input)
}

pub fn decode_i32(input: impl AsRef<str>) -> Result<i32, Error> {
    Codec::standard().decode_i32(input)
}

pub fn decode_i64(input: impl AsRef<str>) -> Result<i64, Error> {
    Codec::standard().decode_i64(input)
}
