pub mod decode;
pub mod encode;
pub mod word;

pub use crate::base_common::Alphabet;
pub use decode::Decoder;
pub use encode::Encoder;
pub use word::{Bits, Word};
