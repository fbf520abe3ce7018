//! The numeric traits for secret machine integers.
//!
//! Wrapping arithmetic, exponentiation, `abs` and the mask comparisons are
//! constant time. Division, remainder and the modular operations are NOT:
//! they declassify their operands, compute on public values and classify
//! the result.

use tracing::debug;

use super::{I128, I16, I32, I64, I8, U128, U16, U32, U64, U8};
use crate::error::{MachintError, Result};
use crate::modular::ModArith;
use crate::traits::{Integer, Numeric, NumericBase};

macro_rules! secret_abs {
    (signed, $v:expr, $bits:literal) => {{
        let v = $v;
        // All ones for negative values, zero otherwise.
        let m = v.0 >> ($bits - 1);
        Self((v.0 ^ m).wrapping_sub(m))
    }};
    (unsigned, $v:expr, $bits:literal) => {
        $v
    };
}

macro_rules! implement_secret_mi {
    ($t:ident, $base:ty, $bits:literal, $sign:ident) => {
        impl Numeric for $t {}

        impl Integer for $t {
            const NUM_BITS: u32 = $bits;
            const SIGNED: bool = <$base>::MIN != 0;
            const ZERO: Self = $t(0);
            const ONE: Self = $t(1);
            const TWO: Self = $t(2);

            #[inline]
            fn from_literal(val: u128) -> Self {
                Self::classify(val as $base)
            }

            #[inline]
            fn to_literal(self) -> u128 {
                self.declassify() as i128 as u128
            }

            #[inline]
            fn get_bit(self, i: u32) -> Self {
                Self((self.0 >> i) & 1)
            }

            #[inline]
            fn rotate_left(self, n: u32) -> Self {
                Self(self.0.rotate_left(n))
            }

            #[inline]
            fn rotate_right(self, n: u32) -> Self {
                Self(self.0.rotate_right(n))
            }
        }

        impl NumericBase for $t {
            fn max_val() -> Self {
                Self::classify(<$base>::MAX)
            }

            fn wrap_add(self, rhs: Self) -> Self {
                self + rhs
            }
            fn wrap_sub(self, rhs: Self) -> Self {
                self - rhs
            }
            fn wrap_mul(self, rhs: Self) -> Self {
                self * rhs
            }
            fn wrap_div(self, rhs: Self) -> Self {
                Self::classify(self.declassify().wrapping_div(rhs.declassify()))
            }

            /// The exponent is public, so the loop may depend on it.
            fn pow(self, exp: u32) -> Self {
                let mut acc = Self::ONE;
                let mut base = self;
                let mut e = exp;
                while e > 0 {
                    if e & 1 == 1 {
                        acc = acc * base;
                    }
                    base = base * base;
                    e >>= 1;
                }
                acc
            }

            /// Both base and exponent are secret: one square and one
            /// multiply per exponent bit, combined with a mask.
            fn pow_self(self, exp: Self) -> Self {
                let mut acc = Self::ONE;
                for i in (0..$bits).rev() {
                    acc = acc * acc;
                    let bit = exp.get_bit(i);
                    let mask = Self(bit.0.wrapping_neg());
                    acc = Self::select(mask, acc * self, acc);
                }
                acc
            }

            fn sub_mod(self, rhs: Self, n: Self) -> Self {
                let (s, o, n) = (self.declassify(), rhs.declassify(), n.declassify());
                Self::classify(ModArith::sub_mod(s, o, n))
            }
            fn add_mod(self, rhs: Self, n: Self) -> Self {
                let (s, o, n) = (self.declassify(), rhs.declassify(), n.declassify());
                Self::classify(ModArith::add_mod(s, o, n))
            }
            fn mul_mod(self, rhs: Self, n: Self) -> Self {
                let (s, o, n) = (self.declassify(), rhs.declassify(), n.declassify());
                Self::classify(ModArith::mul_mod(s, o, n))
            }
            fn pow_mod(self, exp: Self, n: Self) -> Self {
                let (s, e, n) = (self.declassify(), exp.declassify(), n.declassify());
                Self::classify(ModArith::pow_mod(s, e, n))
            }

            fn div(self, rhs: Self) -> Self {
                Self::classify(self.declassify() / rhs.declassify())
            }
            fn rem(self, n: Self) -> Self {
                Self::classify(ModArith::reduce(self.declassify(), n.declassify()))
            }
            fn inv(self, n: Self) -> Result<Self> {
                let (s, n) = (self.declassify(), n.declassify());
                if n.less_than_or_equal(0) {
                    debug!(type_name = stringify!($t), "inverse requested with non-positive modulus");
                    return Err(MachintError::DivisionByZero);
                }
                ModArith::inv_mod(s, n).map(Self::classify).ok_or_else(|| {
                    debug!(type_name = stringify!($t), "value shares a factor with the modulus");
                    MachintError::NotInvertible {
                        type_name: stringify!($t),
                    }
                })
            }
            fn abs(self) -> Self {
                secret_abs!($sign, self, $bits)
            }

            // Only the boolean outcome leaves the secret domain.
            fn equal(self, other: Self) -> bool {
                self.comp_eq(other).declassify() != 0
            }
            fn greater_than(self, other: Self) -> bool {
                self.comp_gt(other).declassify() != 0
            }
            fn greater_than_or_equal(self, other: Self) -> bool {
                self.comp_gte(other).declassify() != 0
            }
            fn less_than(self, other: Self) -> bool {
                self.comp_lt(other).declassify() != 0
            }
            fn less_than_or_equal(self, other: Self) -> bool {
                self.comp_lte(other).declassify() != 0
            }

            fn not_equal_bm(self, other: Self) -> Self {
                self.comp_ne(other)
            }
            fn equal_bm(self, other: Self) -> Self {
                self.comp_eq(other)
            }
            fn greater_than_bm(self, other: Self) -> Self {
                self.comp_gt(other)
            }
            fn greater_than_or_equal_bm(self, other: Self) -> Self {
                self.comp_gte(other)
            }
            fn less_than_bm(self, other: Self) -> Self {
                self.comp_lt(other)
            }
            fn less_than_or_equal_bm(self, other: Self) -> Self {
                self.comp_lte(other)
            }
        }
    };
}

implement_secret_mi!(U8, u8, 8, unsigned);
implement_secret_mi!(U16, u16, 16, unsigned);
implement_secret_mi!(U32, u32, 32, unsigned);
implement_secret_mi!(U64, u64, 64, unsigned);
implement_secret_mi!(U128, u128, 128, unsigned);

implement_secret_mi!(I8, i8, 8, signed);
implement_secret_mi!(I16, i16, 16, signed);
implement_secret_mi!(I32, i32, 32, signed);
implement_secret_mi!(I64, i64, 64, signed);
implement_secret_mi!(I128, i128, 128, signed);
