//! The numeric traits for the built-in machine integers
//! `u8, u16, u32, u64, u128, i8, i16, i32, i64, i128`.
//!
//! Public integers compare and branch freely; use the secret integers in
//! [`crate::secret`] for anything that must not leak through timing.

use tracing::debug;

use crate::error::{MachintError, Result};
use crate::modular::ModArith;
use crate::traits::{Integer, Numeric, NumericBase};

macro_rules! public_abs {
    (signed, $v:expr) => {
        $v.wrapping_abs()
    };
    (unsigned, $v:expr) => {
        $v
    };
}

// Mask helper: all ones when `cond` holds, zero otherwise.
macro_rules! public_mask {
    ($t:ty, $cond:expr) => {
        if $cond {
            !(0 as $t)
        } else {
            0 as $t
        }
    };
}

macro_rules! implement_public_mi {
    ($t:ty, $bits:literal, $sign:ident) => {
        impl Numeric for $t {}

        impl Integer for $t {
            const NUM_BITS: u32 = $bits;
            const SIGNED: bool = <$t>::MIN != 0;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TWO: Self = 2;

            #[inline]
            fn from_literal(val: u128) -> Self {
                val as $t
            }

            #[inline]
            fn to_literal(self) -> u128 {
                self as i128 as u128
            }

            #[inline]
            fn get_bit(self, i: u32) -> Self {
                (self >> i) & 1
            }

            #[inline]
            fn rotate_left(self, n: u32) -> Self {
                <$t>::rotate_left(self, n)
            }

            #[inline]
            fn rotate_right(self, n: u32) -> Self {
                <$t>::rotate_right(self, n)
            }
        }

        impl NumericBase for $t {
            fn max_val() -> Self {
                <$t>::MAX
            }

            fn wrap_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }
            fn wrap_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }
            fn wrap_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }
            fn wrap_div(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }

            fn pow(self, exp: u32) -> Self {
                self.wrapping_pow(exp)
            }
            fn pow_self(self, exp: Self) -> Self {
                let mut acc: $t = 1;
                for i in (0..<$t>::BITS).rev() {
                    acc = acc.wrapping_mul(acc);
                    if (exp >> i) & 1 == 1 {
                        acc = acc.wrapping_mul(self);
                    }
                }
                acc
            }

            fn sub_mod(self, rhs: Self, n: Self) -> Self {
                ModArith::sub_mod(self, rhs, n)
            }
            fn add_mod(self, rhs: Self, n: Self) -> Self {
                ModArith::add_mod(self, rhs, n)
            }
            fn mul_mod(self, rhs: Self, n: Self) -> Self {
                ModArith::mul_mod(self, rhs, n)
            }
            fn pow_mod(self, exp: Self, n: Self) -> Self {
                ModArith::pow_mod(self, exp, n)
            }

            fn div(self, rhs: Self) -> Self {
                self / rhs
            }
            fn rem(self, n: Self) -> Self {
                ModArith::reduce(self, n)
            }
            fn inv(self, n: Self) -> Result<Self> {
                if n.less_than_or_equal(0) {
                    debug!(type_name = stringify!($t), "inverse requested with non-positive modulus");
                    return Err(MachintError::DivisionByZero);
                }
                ModArith::inv_mod(self, n).ok_or_else(|| {
                    debug!(type_name = stringify!($t), "value shares a factor with the modulus");
                    MachintError::NotInvertible {
                        type_name: stringify!($t),
                    }
                })
            }
            fn abs(self) -> Self {
                public_abs!($sign, self)
            }

            fn equal(self, other: Self) -> bool {
                self == other
            }
            fn greater_than(self, other: Self) -> bool {
                self > other
            }
            fn greater_than_or_equal(self, other: Self) -> bool {
                self >= other
            }
            fn less_than(self, other: Self) -> bool {
                self < other
            }
            fn less_than_or_equal(self, other: Self) -> bool {
                self <= other
            }

            fn not_equal_bm(self, other: Self) -> Self {
                public_mask!($t, self != other)
            }
            fn equal_bm(self, other: Self) -> Self {
                public_mask!($t, self == other)
            }
            fn greater_than_bm(self, other: Self) -> Self {
                public_mask!($t, self > other)
            }
            fn greater_than_or_equal_bm(self, other: Self) -> Self {
                public_mask!($t, self >= other)
            }
            fn less_than_bm(self, other: Self) -> Self {
                public_mask!($t, self < other)
            }
            fn less_than_or_equal_bm(self, other: Self) -> Self {
                public_mask!($t, self <= other)
            }
        }
    };
}

implement_public_mi!(u8, 8, unsigned);
implement_public_mi!(u16, 16, unsigned);
implement_public_mi!(u32, 32, unsigned);
implement_public_mi!(u64, 64, unsigned);
implement_public_mi!(u128, 128, unsigned);

implement_public_mi!(i8, 8, signed);
implement_public_mi!(i16, 16, signed);
implement_public_mi!(i32, 32, signed);
implement_public_mi!(i64, 64, signed);
implement_public_mi!(i128, 128, signed);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_masks_are_all_ones() {
        assert_eq!(NumericBase::equal_bm(-5i16, -5), -1);
        assert_eq!(NumericBase::less_than_bm(3i8, 2), 0);
    }

    #[test]
    fn test_pow_self_matches_wrapping_pow() {
        assert_eq!(NumericBase::pow_self(3u32, 13), 3u32.wrapping_pow(13));
        assert_eq!(NumericBase::pow_self(7u8, 200), 7u8.wrapping_pow(200));
        assert_eq!(NumericBase::pow_self(5u64, 0), 1);
    }

    #[test]
    fn test_to_literal_sign_extends() {
        assert_eq!((-1i8).to_literal(), u128::MAX);
        assert_eq!(255u8.to_literal(), 255);
    }
}
