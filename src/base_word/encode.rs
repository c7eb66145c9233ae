use super::{word::MAX_SYMBOLS, Alphabet, Bits, Word};

pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Appends the encoding of `value` to `output`, most significant group first, and
    /// returns the number of symbols written. Zero is written as the alphabet's zero symbol.
    pub fn encode_into<W: Word>(&self, value: W, output: &mut String) -> usize {
        let mut groups = [0u8; MAX_SYMBOLS];
        let mut bits = value.to_bits();
        let mut index = groups.len();
        loop {
            index -= 1;
            groups[index] = bits.low_group();
            bits = bits.shift_out();
            if bits == <W::Bits as Bits>::ZERO {
                break;
            }
        }
        output.extend(groups[index..].iter().map(|&group| self.alphabet.encode(group as usize)));
        groups.len() - index
    }

    pub fn encode<W: Word>(&self, value: W) -> String {
        let mut output = String::with_capacity(W::MAX_SYMBOLS);
        self.encode_into(value, &mut output);
        output
    }
}
