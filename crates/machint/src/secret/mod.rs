//! Secret machine integers `U8, U16, U32, U64, U128, I8, I16, I32, I64, I128`.
//!
//! A secret integer wraps its public counterpart and only leaves the secret
//! domain through [`declassify`](U8::declassify). The types deliberately
//! have no `PartialEq`, `PartialOrd` or `Display`: equality and ordering are
//! available as constant-time masks (`comp_eq`, `comp_lt`, ...), and `Debug`
//! never prints the value.
//!
//! Arithmetic operators wrap on overflow. Shift and rotate amounts are
//! public `u32`s.

mod compare;
mod numeric;

use std::fmt;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul,
    MulAssign, Neg, Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

macro_rules! secret_binop {
    ($name:ident, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, |$a:ident, $b:ident| $body:expr) => {
        impl $trait for $name {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                let ($a, $b) = (self.0, rhs.0);
                Self($body)
            }
        }

        impl $assign_trait for $name {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $trait::$method(*self, rhs);
            }
        }
    };
}

macro_rules! define_secret_integer {
    ($(#[$doc:meta])* $name:ident, $base:ty) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Default)]
        pub struct $name($base);

        impl $name {
            /// Move a public value into the secret domain.
            #[inline]
            pub const fn classify(x: $base) -> Self {
                Self(x)
            }

            /// Reveal the value. Every call site is a place where secret
            /// data becomes public.
            #[inline]
            pub const fn declassify(self) -> $base {
                self.0
            }
        }

        impl From<$base> for $name {
            #[inline]
            fn from(x: $base) -> Self {
                Self::classify(x)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(<secret>)", stringify!($name))
            }
        }

        secret_binop!($name, Add, add, AddAssign, add_assign, |a, b| a.wrapping_add(b));
        secret_binop!($name, Sub, sub, SubAssign, sub_assign, |a, b| a.wrapping_sub(b));
        secret_binop!($name, Mul, mul, MulAssign, mul_assign, |a, b| a.wrapping_mul(b));
        secret_binop!($name, BitXor, bitxor, BitXorAssign, bitxor_assign, |a, b| a ^ b);
        secret_binop!($name, BitAnd, bitand, BitAndAssign, bitand_assign, |a, b| a & b);
        secret_binop!($name, BitOr, bitor, BitOrAssign, bitor_assign, |a, b| a | b);

        impl Not for $name {
            type Output = Self;

            #[inline]
            fn not(self) -> Self {
                Self(!self.0)
            }
        }

        impl Shl<u32> for $name {
            type Output = Self;

            #[inline]
            fn shl(self, rhs: u32) -> Self {
                Self(self.0 << rhs)
            }
        }

        impl ShlAssign<u32> for $name {
            #[inline]
            fn shl_assign(&mut self, rhs: u32) {
                self.0 <<= rhs;
            }
        }

        impl Shr<u32> for $name {
            type Output = Self;

            #[inline]
            fn shr(self, rhs: u32) -> Self {
                Self(self.0 >> rhs)
            }
        }

        impl ShrAssign<u32> for $name {
            #[inline]
            fn shr_assign(&mut self, rhs: u32) {
                self.0 >>= rhs;
            }
        }
    };
}

macro_rules! secret_neg {
    ($name:ident) => {
        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self(self.0.wrapping_neg())
            }
        }
    };
}

define_secret_integer!(
    /// Secret `u8`
    U8, u8
);
define_secret_integer!(
    /// Secret `u16`
    U16, u16
);
define_secret_integer!(
    /// Secret `u32`
    U32, u32
);
define_secret_integer!(
    /// Secret `u64`
    U64, u64
);
define_secret_integer!(
    /// Secret `u128`
    U128, u128
);
define_secret_integer!(
    /// Secret `i8`
    I8, i8
);
define_secret_integer!(
    /// Secret `i16`
    I16, i16
);
define_secret_integer!(
    /// Secret `i32`
    I32, i32
);
define_secret_integer!(
    /// Secret `i64`
    I64, i64
);
define_secret_integer!(
    /// Secret `i128`
    I128, i128
);

secret_neg!(I8);
secret_neg!(I16);
secret_neg!(I32);
secret_neg!(I64);
secret_neg!(I128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_value() {
        assert_eq!(format!("{:?}", U32::classify(0xdead_beef)), "U32(<secret>)");
        assert_eq!(format!("{:?}", I8::classify(-3)), "I8(<secret>)");
    }

    #[test]
    fn test_operators_wrap() {
        assert_eq!((U8::classify(250) + U8::classify(10)).declassify(), 4);
        assert_eq!((U8::classify(3) - U8::classify(5)).declassify(), 254);
        assert_eq!((I8::classify(100) * I8::classify(2)).declassify(), -56);
        assert_eq!((-I8::classify(i8::MIN)).declassify(), i8::MIN);
    }

    #[test]
    fn test_assign_operators() {
        let mut x = U16::classify(0x00ff);
        x ^= U16::classify(0x0f0f);
        assert_eq!(x.declassify(), 0x0ff0);
        x <<= 4;
        assert_eq!(x.declassify(), 0xff00);
        x >>= 8;
        assert_eq!(x.declassify(), 0x00ff);
        x += U16::classify(1);
        assert_eq!(x.declassify(), 0x0100);
    }

    #[test]
    fn test_not_complements_every_bit() {
        assert_eq!((!U64::classify(0)).declassify(), u64::MAX);
        assert_eq!((!I32::classify(0)).declassify(), -1);
        assert_eq!((!U8::classify(0b1010_0101)).declassify(), 0b0101_1010);
    }
}
