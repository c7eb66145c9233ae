use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::{error, fmt, str::FromStr};

/// Number of symbols in an alphabet, one per 6-bit group value.
pub const SIZE: usize = 64;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidLength { length: usize },
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { length } => write!(f, "Invalid alphabet length {}, must be {}", length, SIZE),
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
        }
    }
}

/// An ordered set of 64 symbols; the symbol at position `i` stands for the group value `i`.
///
/// Duplicate symbols are tolerated unless the alphabet is built with [`Alphabet::new_unique`].
/// Decoding a duplicated symbol always yields the position of its first occurrence.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Alphabet {
    encode: [char; SIZE],
    ascii: [Option<u8>; 128],
    unique: bool,
}

impl Alphabet {
    pub const fn from_symbols(symbols: &[char; SIZE]) -> Self {
        let mut ascii: [Option<u8>; 128] = [None; 128];
        let mut unique = true;

        let mut index = 0;
        while index < SIZE {
            if first_position(symbols, symbols[index]) < index {
                unique = false;
            } else if (symbols[index] as u32) < 128 {
                ascii[symbols[index] as usize] = Some(index as u8);
            }
            index += 1;
        }

        Self {
            encode: *symbols,
            ascii,
            unique,
        }
    }

    pub const fn from_ascii(characters: &[u8; SIZE]) -> Result<Self, Error> {
        let mut symbols = ['\0'; SIZE];

        let mut index = 0;
        while index < SIZE {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { character, index });
            }
            symbols[index] = character as char;
            index += 1;
        }

        Ok(Self::from_symbols(&symbols))
    }

    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self, Error> {
        let symbols: Vec<char> = symbols.into_iter().collect();
        let symbols: [char; SIZE] = symbols
            .try_into()
            .map_err(|symbols: Vec<char>| Error::InvalidLength { length: symbols.len() })?;

        let alphabet = Self::from_symbols(&symbols);
        if !alphabet.unique {
            tracing::warn!(alphabet = %alphabet, "alphabet contains duplicate symbols, decoding resolves them to their first position");
        }
        Ok(alphabet)
    }

    pub fn new_unique(symbols: impl IntoIterator<Item = char>) -> Result<Self, Error> {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.len() != SIZE {
            return Err(Error::InvalidLength { length: symbols.len() });
        }
        for (second, &character) in symbols.iter().enumerate() {
            if let Some(first) = symbols[..second].iter().position(|&symbol| symbol == character) {
                return Err(Error::DuplicateCharacter { character, first, second });
            }
        }
        Self::new(symbols)
    }

    pub fn encode(&self, value: usize) -> char {
        self.encode[value]
    }

    pub fn decode(&self, character: char, index: usize) -> Result<u8, DecodeError> {
        let value = if (character as u32) < 128 {
            self.ascii[character as usize]
        } else {
            self.encode.iter().position(|&symbol| symbol == character).map(|value| value as u8)
        };
        value.ok_or(DecodeError::InvalidCharacter { character, index })
    }

    /// The symbol emitted for a zero group.
    pub const fn zero(&self) -> char {
        self.encode[0]
    }

    pub const fn is_unique(&self) -> bool {
        self.unique
    }

    pub fn symbols(&self) -> impl ExactSizeIterator<Item = char> + '_ {
        self.encode.iter().copied()
    }

    pub const fn len(&self) -> usize {
        self.encode.len()
    }
}

const fn first_position(symbols: &[char; SIZE], character: char) -> usize {
    let mut index = 0;
    while index < SIZE {
        if symbols[index] as u32 == character as u32 {
            return index;
        }
        index += 1;
    }
    SIZE
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            fmt::Write::write_char(f, symbol)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.to_string()).finish()
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(symbols: &str) -> Result<Self, Error> {
        Self::new(symbols.chars())
    }
}

impl Serialize for Alphabet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Alphabet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AlphabetVisitor;

        impl<'de> Visitor<'de> for AlphabetVisitor {
            type Value = Alphabet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string of 64 symbols")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(AlphabetVisitor)
    }
}
