//! Constant-time comparisons on secret integers.
//!
//! All comparisons run on the unsigned counterpart of the type. Signed
//! values have their sign bit flipped first, which maps two's-complement
//! order onto unsigned order. No comparison branches on its inputs.

use super::{I128, I16, I32, I64, I8, U128, U16, U32, U64, U8};

/// Branch-free predicates on unsigned words, returning `0` or `1`.
pub(crate) trait CtWord: Copy {
    /// `1` if `self != other`
    fn ct_ne_bit(self, other: Self) -> Self;
    /// `1` if `self > other`
    fn ct_gt_bit(self, other: Self) -> Self;
}

macro_rules! impl_ct_word {
    ($($ut:ty),*) => {$(
        impl CtWord for $ut {
            #[inline]
            fn ct_ne_bit(self, other: Self) -> Self {
                let x = self ^ other;
                // Top bit of x | -x is set exactly when x != 0.
                (x | x.wrapping_neg()) >> (<$ut>::BITS - 1)
            }

            #[inline]
            fn ct_gt_bit(self, other: Self) -> Self {
                let z = other.wrapping_sub(self);
                (z ^ ((self ^ other) & (self ^ z))) >> (<$ut>::BITS - 1)
            }
        }
    )*};
}

impl_ct_word!(u8, u16, u32, u64, u128);

macro_rules! impl_secret_compare {
    ($name:ident, $base:ty, $ut:ty, $flip:expr) => {
        impl $name {
            #[inline]
            fn ordered_word(self) -> $ut {
                (self.0 as $ut) ^ $flip
            }

            #[inline]
            fn from_bit(bit: $ut) -> Self {
                Self(bit.wrapping_neg() as $base)
            }

            /// All ones if `self == rhs`, zero otherwise.
            pub fn comp_eq(self, rhs: Self) -> Self {
                Self::from_bit(self.ordered_word().ct_ne_bit(rhs.ordered_word()) ^ 1)
            }

            /// All ones if `self != rhs`, zero otherwise.
            pub fn comp_ne(self, rhs: Self) -> Self {
                Self::from_bit(self.ordered_word().ct_ne_bit(rhs.ordered_word()))
            }

            /// All ones if `self > rhs`, zero otherwise.
            pub fn comp_gt(self, rhs: Self) -> Self {
                Self::from_bit(self.ordered_word().ct_gt_bit(rhs.ordered_word()))
            }

            /// All ones if `self >= rhs`, zero otherwise.
            pub fn comp_gte(self, rhs: Self) -> Self {
                Self::from_bit(rhs.ordered_word().ct_gt_bit(self.ordered_word()) ^ 1)
            }

            /// All ones if `self < rhs`, zero otherwise.
            pub fn comp_lt(self, rhs: Self) -> Self {
                Self::from_bit(rhs.ordered_word().ct_gt_bit(self.ordered_word()))
            }

            /// All ones if `self <= rhs`, zero otherwise.
            pub fn comp_lte(self, rhs: Self) -> Self {
                Self::from_bit(self.ordered_word().ct_gt_bit(rhs.ordered_word()) ^ 1)
            }

            /// `a` where `mask` is all ones, `b` where it is zero.
            ///
            /// `mask` must be a comparison mask; other values mix bits of
            /// both inputs.
            #[inline]
            pub fn select(mask: Self, a: Self, b: Self) -> Self {
                Self((a.0 & mask.0) | (b.0 & !mask.0))
            }
        }
    };
}

impl_secret_compare!(U8, u8, u8, 0u8);
impl_secret_compare!(U16, u16, u16, 0u16);
impl_secret_compare!(U32, u32, u32, 0u32);
impl_secret_compare!(U64, u64, u64, 0u64);
impl_secret_compare!(U128, u128, u128, 0u128);

impl_secret_compare!(I8, i8, u8, 1u8 << 7);
impl_secret_compare!(I16, i16, u16, 1u16 << 15);
impl_secret_compare!(I32, i32, u32, 1u32 << 31);
impl_secret_compare!(I64, i64, u64, 1u64 << 63);
impl_secret_compare!(I128, i128, u128, 1u128 << 127);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ct_gt_bit_exhaustive_u8() {
        for a in 0..=u8::MAX {
            for b in 0..=u8::MAX {
                assert_eq!(a.ct_gt_bit(b) == 1, a > b, "{a} > {b}");
                assert_eq!(a.ct_ne_bit(b) == 1, a != b, "{a} != {b}");
            }
        }
    }

    #[test]
    fn test_signed_comparisons_exhaustive_i8() {
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                let (x, y) = (I8::classify(a), I8::classify(b));
                let m = |c: bool| if c { -1 } else { 0 };
                assert_eq!(x.comp_eq(y).declassify(), m(a == b));
                assert_eq!(x.comp_ne(y).declassify(), m(a != b));
                assert_eq!(x.comp_gt(y).declassify(), m(a > b));
                assert_eq!(x.comp_gte(y).declassify(), m(a >= b));
                assert_eq!(x.comp_lt(y).declassify(), m(a < b));
                assert_eq!(x.comp_lte(y).declassify(), m(a <= b));
            }
        }
    }

    #[test]
    fn test_wide_comparisons_at_extremes() {
        let (lo, hi) = (U128::classify(0), U128::classify(u128::MAX));
        assert_eq!(hi.comp_gt(lo).declassify(), u128::MAX);
        assert_eq!(lo.comp_gt(hi).declassify(), 0);
        let (neg, pos) = (I64::classify(i64::MIN), I64::classify(i64::MAX));
        assert_eq!(neg.comp_lt(pos).declassify(), -1);
        assert_eq!(pos.comp_lte(neg).declassify(), 0);
    }

    #[test]
    fn test_select() {
        let a = U32::classify(7);
        let b = U32::classify(9);
        let yes = a.comp_lt(b);
        let no = a.comp_gt(b);
        assert_eq!(U32::select(yes, a, b).declassify(), 7);
        assert_eq!(U32::select(no, a, b).declassify(), 9);
    }
}
