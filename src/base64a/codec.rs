use super::{Alphabet, ALPHABET};
use crate::{
    base_word::{Decoder, Encoder, Word},
    Error,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Converts 32-bit and 64-bit integers to and from short strings over a 64-symbol alphabet.
///
/// The integer's two's-complement bits are written six at a time, most significant group
/// first, with leading zero groups dropped. Negative values therefore always take the
/// longest form for their width (6 symbols for 32 bits, 11 for 64 bits), and
/// `decode(encode(n)) == n` holds for every value of the same width.
///
/// ```
/// use base64a::Codec;
///
/// let codec = Codec::new();
/// assert_eq!(codec.encode_i64(1673), "q9");
/// assert_eq!(codec.decode_i64("q9"), Ok(1673));
/// assert_eq!(codec.decode_i32(&codec.encode_i32(-1673)), Ok(-1673));
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Codec {
    alphabet: Alphabet,
}

impl Codec {
    pub const fn new() -> Self {
        Self::from_alphabet(ALPHABET)
    }

    pub const fn from_alphabet(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// Fails with [`Error::InvalidAlphabet`] unless exactly 64 symbols are supplied.
    pub fn with_alphabet(symbols: impl IntoIterator<Item = char>) -> Result<Self, Error> {
        Ok(Self::from_alphabet(Alphabet::new(symbols)?))
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn encoder(&self) -> Encoder<'_> {
        Encoder::new(&self.alphabet)
    }

    fn decoder(&self) -> Decoder<'_> {
        Decoder::new(&self.alphabet)
    }

    pub fn encode<W: Word>(&self, value: W) -> String {
        self.encoder().encode(value)
    }

    pub fn encode_into<W: Word>(&self, value: W, output: &mut String) -> usize {
        self.encoder().encode_into(value, output)
    }

    pub fn decode<W: Word>(&self, input: impl AsRef<str>) -> Result<W, Error> {
        Ok(self.decoder().decode(input)?)
    }

    pub fn encode_i32(&self, value: i32) -> String {
        self.encode(value)
    }

    pub fn encode_i64(&self, value: i64) -> String {
        self.encode(value)
    }

    pub fn decode_i32(&self, input: impl AsRef<str>) -> Result<i32, Error> {
        self.decode(input)
    }

    pub fn decode_i64(&self, input: impl AsRef<str>) -> Result<i64, Error> {
        self.decode(input)
    }

    /// Codec over the built-in alphabet, shared by the module-level functions.
    pub fn standard() -> &'static Self {
        &STANDARD
    }
}

static STANDARD: Codec = Codec::new();

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Codec {
    type Err = Error;

    fn from_str(symbols: &str) -> Result<Self, Error> {
        Self::with_alphabet(symbols.chars())
    }
}
