use crate::{configuration::Configuration, logger::Logger};
use base64a::{Codec, Word};
use serde::Serialize;
use std::{
    error, fmt, mem,
    time::{SystemTime, UNIX_EPOCH},
};

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Sample {
    name: &'static str,
    bits: usize,
    input: i64,
    encoded: String,
    output: i64,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:>16}: {:>20} -> {:>11} -> {:>20}", self.name, self.input, self.encoded, self.output)
    }
}

#[derive(Debug)]
pub enum Error {
    Mismatch { name: &'static str, input: i64, output: i64 },
    Codec(base64a::Error),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Mismatch { name, input, output } => write!(f, "{} does not survive encoding: {} (decoded {})", name, input, output),
            Self::Codec(error) => write!(f, "{}", error),
        }
    }
}

impl From<base64a::Error> for Error {
    fn from(error: base64a::Error) -> Self {
        Error::Codec(error)
    }
}

#[derive(Clone, Copy)]
enum Input {
    Int(i32),
    Long(i64),
}

fn check<W: Word + Into<i64> + PartialEq>(codec: &Codec, name: &'static str, input: W) -> Result<Sample, Error> {
    let encoded = codec.encode(input);
    let output: W = codec.decode(&encoded)?;
    if output != input {
        return Err(Error::Mismatch {
            name,
            input: input.into(),
            output: output.into(),
        });
    }
    Ok(Sample {
        name,
        bits: mem::size_of::<W>() * 8,
        input: input.into(),
        encoded,
        output: output.into(),
    })
}

fn run_inputs(codec: &Codec, logger: &Logger, inputs: &[(&'static str, Input)]) -> Result<(), Error> {
    for &(name, input) in inputs {
        let sample = match input {
            Input::Int(value) => check(codec, name, value)?,
            Input::Long(value) => check(codec, name, value)?,
        };
        logger.sample(&sample);
    }
    Ok(())
}

pub fn run(configuration: &Configuration, logger: &Logger) -> Result<(), Error> {
    let standard = Codec::standard();
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    let now_milli = i64::try_from(now.as_millis()).unwrap_or(i64::MAX);
    let now_nano = i64::try_from(now.as_nanos()).unwrap_or(i64::MAX);

    run_inputs(
        standard,
        logger,
        &[
            ("small-int", Input::Int(1673)),
            ("small-int", Input::Int(167300)),
            ("small-long", Input::Long(1673)),
            ("small-long", Input::Long(167300)),
            ("ZERO_INT", Input::Int(0)),
            ("MAX_INT-1", Input::Int(i32::MAX - 1)),
            ("MAX_INT", Input::Int(i32::MAX)),
            ("ZERO_LONG", Input::Long(0)),
            ("MAX_LONG-1", Input::Long(i64::MAX - 1)),
            ("MAX_LONG", Input::Long(i64::MAX)),
            ("FULL", Input::Long(standard.decode_i64("12345678901")?)),
            ("DOUBLE_CLICK", Input::Long(standard.decode_i64("1.3:5.7:9.1")?)),
            ("NOW_MILLI", Input::Long(now_milli)),
            ("NOW_NANO", Input::Long(now_nano)),
        ],
    )?;

    logger.log("--negative numbers--");
    run_inputs(
        standard,
        logger,
        &[
            ("neg-int", Input::Int(-1673)),
            ("neg-int", Input::Int(-167300)),
            ("neg-long", Input::Long(-1673)),
            ("neg-long", Input::Long(-167300)),
            ("MIN_INT", Input::Int(i32::MIN)),
            ("MIN_INT+1", Input::Int(i32::MIN + 1)),
            ("MIN_LONG", Input::Long(i64::MIN)),
            ("MIN_LONG+1", Input::Long(i64::MIN + 1)),
        ],
    )?;

    logger.log(format!("1673 encoded with alternate alphabet: {}", configuration.alternate().encode_i64(1673)));
    logger.log(format!("nHkl3S4B decoded from standard: {}", standard.decode_i64("nHkl3S4B")?));
    logger.log(format!(
        "32442342 encoded to standard and back again: {}",
        standard.decode_i64(standard.encode_i64(32442342))?
    ));

    match standard.decode_i64("_j+j%") {
        Ok(value) => logger.log(value),
        Err(error) => tracing::warn!(%error, input = "_j+j%", "decoding rejected"),
    }

    Ok(())
}
