use super::Codec;
use crate::base_word::Word;

pub fn encode<W: Word>(value: W) -> String {
    Codec::standard().encode(value)
}

pub fn encode_into<W: Word>(value: W, output: &mut String) -> usize {
    Codec::standard().encode_into(value, output)
}

pub fn encode_i32(value: i32) -> String {
    Codec::standard().encode_i32(value)
}

pub fn encode_i64(value: i64) -> String {
    Codec::standard().encode_i64(value)
}

#[cfg(test)]
mod tests {
    #[test]
    fn encode() {
        assert_eq!(super::encode_i32(0), "0");
        assert_eq!(super::encode_i32(1673), "q9");
        assert_eq!(super::encode_i32(-1673), "3:::BT");
        assert_eq!(super::encode_i64(0), "0");
        assert_eq!(super::encode_i64(32442342), "1XMvC");
        assert_eq!(super::encode_i64(-1673), "f::::::::BT");
        assert_eq!(super::encode(u32::MAX), "3:::::");
    }
}
