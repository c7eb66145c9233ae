use super::{Alphabet, Bits, Word};
use crate::base_common::alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
        }
    }
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Rebuilds the bit pattern of `input`, least significant symbol first.
    ///
    /// Partial sums wrap at the width of `W`, so input longer than `W::MAX_SYMBOLS`
    /// keeps only its low-order bits. The empty string decodes to zero. On invalid
    /// input the right-most offending symbol is reported along with its byte offset.
    pub fn decode<W: Word>(&self, input: impl AsRef<str>) -> Result<W, Error> {
        let mut accumulator = <W::Bits as Bits>::ZERO;
        let mut magnitude = <W::Bits as Bits>::ONE;
        for (index, character) in input.as_ref().char_indices().rev() {
            let group = self.alphabet.decode(character, index)?;
            accumulator = accumulator.weighted_add(group, magnitude);
            magnitude = magnitude.shift_in();
        }
        Ok(W::from_bits(accumulator))
    }
}
