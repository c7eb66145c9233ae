use crate::logger::Format;
use base64a::{Alphabet, Codec};
use std::{env, error};

const ALTERNATE_ALPHABET: Alphabet = match Alphabet::from_ascii(b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789+=") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

#[derive(Debug, Clone)]
pub struct Configuration {
    alternate: Codec,
    format: Format,
}

fn var(key: &str, default: Option<String>) -> Result<String, String> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(_) => default.ok_or(format!("Missing {}", key)),
    }
}

fn var_map<T, E: error::Error>(key: &str, mut f: impl FnMut(&str) -> Result<T, E>, default: Option<T>) -> Result<T, String> {
    match var(key, None) {
        Ok(value) => f(&value).map_err(|error| format!("Invalid {} {} ({})", key, value, error)),
        Err(err) => default.ok_or(err),
    }
}

impl Configuration {
    pub fn new() -> Result<Self, String> {
        let alternate = var_map(
            "BASE64A_ALPHABET",
            |symbols| symbols.parse(),
            Some(Codec::from_alphabet(ALTERNATE_ALPHABET)),
        )?;
        let format = var_map("BASE64A_FORMAT", |format| format.parse(), Some(Format::Table))?;
        Ok(Self { alternate, format })
    }

    pub fn alternate(&self) -> &Codec {
        &self.alternate
    }

    pub fn format(&self) -> Format {
        self.format
    }
}
