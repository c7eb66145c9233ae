use std::fmt;

mod private {
    pub trait Sealed {}
}

/// Width of one group, in bits.
pub const GROUP_BITS: u32 = 6;

const GROUP_MASK: u8 = 0x3F;

/// Upper bound of [`Word::MAX_SYMBOLS`] across every implemented width.
pub const MAX_SYMBOLS: usize = 11;

/// Fixed-width unsigned bit pattern of a [`Word`].
///
/// Every operation stays within the native width: right shifts shift in zeros and
/// the decoding arithmetic wraps on overflow.
pub trait Bits: Copy + Eq + fmt::Debug + private::Sealed {
    const ZERO: Self;
    const ONE: Self;

    fn low_group(self) -> u8;

    fn shift_out(self) -> Self;

    fn shift_in(self) -> Self;

    fn weighted_add(self, group: u8, magnitude: Self) -> Self;
}

/// Integer type that can be written as a sequence of 6-bit groups.
pub trait Word: Copy + private::Sealed {
    type Bits: Bits;

    /// Longest encoding of this width, `ceil(BITS / 6)`.
    const MAX_SYMBOLS: usize;

    /// Reinterprets the two's-complement pattern as unsigned, without sign extension.
    fn to_bits(self) -> Self::Bits;

    fn from_bits(bits: Self::Bits) -> Self;
}

macro_rules! impl_bits {
    ($unsigned:ty) => {
        impl private::Sealed for $unsigned {}

        impl Bits for $unsigned {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline(always)]
            fn low_group(self) -> u8 {
                (self as u8) & GROUP_MASK
            }

            #[inline(always)]
            fn shift_out(self) -> Self {
                self >> GROUP_BITS
            }

            #[inline(always)]
            fn shift_in(self) -> Self {
                self << GROUP_BITS
            }

            #[inline(always)]
            fn weighted_add(self, group: u8, magnitude: Self) -> Self {
                self.wrapping_add(Self::from(group).wrapping_mul(magnitude))
            }
        }

        impl Word for $unsigned {
            type Bits = $unsigned;

            const MAX_SYMBOLS: usize = <$unsigned>::BITS.div_ceil(GROUP_BITS) as usize;

            #[inline(always)]
            fn to_bits(self) -> Self::Bits {
                self
            }

            #[inline(always)]
            fn from_bits(bits: Self::Bits) -> Self {
                bits
            }
        }
    };
}

macro_rules! impl_word {
    ($signed:ty => $unsigned:ty) => {
        impl private::Sealed for $signed {}

        impl Word for $signed {
            type Bits = $unsigned;

            const MAX_SYMBOLS: usize = <$unsigned as Word>::MAX_SYMBOLS;

            #[inline(always)]
            fn to_bits(self) -> Self::Bits {
                self as $unsigned
            }

            #[inline(always)]
            fn from_bits(bits: Self::Bits) -> Self {
                bits as $signed
            }
        }
    };
}

impl_bits!(u32);
impl_bits!(u64);
impl_word!(i32 => u32);
impl_word!(i64 => u64);

#[cfg(test)]
mod tests {
    use super::{Bits, Word, MAX_SYMBOLS};

    #[test]
    fn max_symbols() {
        assert_eq!(<i32 as Word>::MAX_SYMBOLS, 6);
        assert_eq!(<u32 as Word>::MAX_SYMBOLS, 6);
        assert_eq!(<i64 as Word>::MAX_SYMBOLS, 11);
        assert_eq!(<u64 as Word>::MAX_SYMBOLS, MAX_SYMBOLS);
    }

    #[test]
    fn shift_out_does_not_extend_sign() {
        assert_eq!((-1i32).to_bits().shift_out(), 0x03FF_FFFF);
        assert_eq!(i64::MIN.to_bits().shift_out(), 0x0200_0000_0000_0000);
        assert_eq!((-64i32).to_bits().low_group(), 0);
        assert_eq!((-1i64).to_bits().low_group(), 63);
    }

    #[test]
    fn weighted_add_wraps() {
        assert_eq!(u32::MAX.weighted_add(1, 1), 0);
        assert_eq!(0u32.weighted_add(63, 1 << 30), 0xC000_0000);
        assert_eq!((1u64 << 60).shift_in(), 0);
        assert_eq!(i32::from_bits(u32::MAX), -1);
    }
}
