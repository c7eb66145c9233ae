use crate::{base_common::alphabet, base_word::decode};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidAlphabet(alphabet::Error),
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidAlphabet(error) => Some(error),
            Self::InvalidCharacter { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidAlphabet(error) => write!(f, "Invalid alphabet: {}", error),
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
        }
    }
}

impl From<alphabet::Error> for Error {
    fn from(error: alphabet::Error) -> Self {
        Error::InvalidAlphabet(error)
    }
}

impl From<decode::Error> for Error {
    fn from(error: decode::Error) -> Self {
        match error {
            decode::Error::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
        }
    }
}
