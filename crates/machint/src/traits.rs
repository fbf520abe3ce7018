//! The numeric trait family shared by public and secret machine integers.
//!
//! Specification code is written against [`Numeric`] so the same function
//! runs over `u32` while debugging and over [`U32`](crate::U32) when the
//! value has to stay secret.

use std::fmt::Debug;
use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Not, Shl, Shr, Sub};

use crate::error::Result;

/// Fixed-width integer constants and bit-level access.
pub trait Integer: Copy {
    /// Width of the type in bits
    const NUM_BITS: u32;
    /// Whether the type is two's-complement signed
    const SIGNED: bool;
    /// `0`
    const ZERO: Self;
    /// `1`
    const ONE: Self;
    /// `2`
    const TWO: Self;

    /// Build a value from the low `NUM_BITS` bits of `val`.
    fn from_literal(val: u128) -> Self;

    /// The value's bit pattern widened to 128 bits, sign-extended for
    /// signed types. Declassifies secret values.
    fn to_literal(self) -> u128;

    /// Bit `i` of `self`, as `0` or `1`.
    fn get_bit(self, i: u32) -> Self;

    /// Rotate left by `n` bits.
    fn rotate_left(self, n: u32) -> Self;

    /// Rotate right by `n` bits.
    fn rotate_right(self, n: u32) -> Self;
}

/// Arithmetic, modular arithmetic and comparisons.
///
/// The `*_mod` operations always return a value in `[0, n)` and never
/// overflow internally. They panic when `n` is zero or negative, the same
/// way primitive division panics on a zero divisor.
pub trait NumericBase: Sized {
    /// Largest value that can be represented.
    fn max_val() -> Self;

    /// Wrapping `self + rhs`.
    fn wrap_add(self, rhs: Self) -> Self;
    /// Wrapping `self - rhs`.
    fn wrap_sub(self, rhs: Self) -> Self;
    /// Wrapping `self * rhs`.
    fn wrap_mul(self, rhs: Self) -> Self;
    /// Wrapping `self / rhs`. Panics if `rhs` is zero.
    fn wrap_div(self, rhs: Self) -> Self;

    /// `self ^ exp` (wrapping) where `exp` is a public `u32`.
    fn pow(self, exp: u32) -> Self;
    /// `self ^ exp` (wrapping) where `exp` is a `Self`. The exponent's bit
    /// pattern is read as unsigned.
    fn pow_self(self, exp: Self) -> Self;

    /// `(self - rhs) mod n`
    fn sub_mod(self, rhs: Self, n: Self) -> Self;
    /// `(self + rhs) mod n`
    fn add_mod(self, rhs: Self, n: Self) -> Self;
    /// `(self * rhs) mod n`
    fn mul_mod(self, rhs: Self, n: Self) -> Self;
    /// `(self ^ exp) mod n`
    fn pow_mod(self, exp: Self, n: Self) -> Self;

    /// Truncating division. Panics if `rhs` is zero, and for signed types
    /// on `MIN / -1`, whose quotient overflows.
    fn div(self, rhs: Self) -> Self;
    /// `self mod n`, in `[0, n)`.
    fn rem(self, n: Self) -> Self;
    /// Invert `self` modulo `n`.
    fn inv(self, n: Self) -> Result<Self>;
    /// `|self|`, wrapping (`MIN.abs() == MIN`).
    fn abs(self) -> Self;

    // Comparison functions returning bool.
    /// `self == other`
    fn equal(self, other: Self) -> bool;
    /// `self > other`
    fn greater_than(self, other: Self) -> bool;
    /// `self >= other`
    fn greater_than_or_equal(self, other: Self) -> bool;
    /// `self < other`
    fn less_than(self, other: Self) -> bool;
    /// `self <= other`
    fn less_than_or_equal(self, other: Self) -> bool;

    // Comparison functions returning a bit mask (0x0..0 or 0xF..F).
    /// Mask for `self != other`
    fn not_equal_bm(self, other: Self) -> Self;
    /// Mask for `self == other`
    fn equal_bm(self, other: Self) -> Self;
    /// Mask for `self > other`
    fn greater_than_bm(self, other: Self) -> Self;
    /// Mask for `self >= other`
    fn greater_than_or_equal_bm(self, other: Self) -> Self;
    /// Mask for `self < other`
    fn less_than_bm(self, other: Self) -> Self;
    /// Mask for `self <= other`
    fn less_than_or_equal_bm(self, other: Self) -> Self;
}

/// Everything a specification needs from an integer type.
pub trait Numeric:
    NumericBase
    + Integer
    + Copy
    + Default
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + BitXor<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
}
