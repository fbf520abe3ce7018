//! Runtime names for the twenty integer types, for tools that pick a type
//! from user input.

use std::fmt;
use std::str::FromStr;

use crate::error::MachintError;

/// One of the public or secret machine integer types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntKind {
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `u128`
    U128,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `i128`
    I128,
    /// Secret `U8`
    SecretU8,
    /// Secret `U16`
    SecretU16,
    /// Secret `U32`
    SecretU32,
    /// Secret `U64`
    SecretU64,
    /// Secret `U128`
    SecretU128,
    /// Secret `I8`
    SecretI8,
    /// Secret `I16`
    SecretI16,
    /// Secret `I32`
    SecretI32,
    /// Secret `I64`
    SecretI64,
    /// Secret `I128`
    SecretI128,
}

impl IntKind {
    /// Every kind, public types first.
    pub const ALL: [IntKind; 20] = [
        IntKind::U8,
        IntKind::U16,
        IntKind::U32,
        IntKind::U64,
        IntKind::U128,
        IntKind::I8,
        IntKind::I16,
        IntKind::I32,
        IntKind::I64,
        IntKind::I128,
        IntKind::SecretU8,
        IntKind::SecretU16,
        IntKind::SecretU32,
        IntKind::SecretU64,
        IntKind::SecretU128,
        IntKind::SecretI8,
        IntKind::SecretI16,
        IntKind::SecretI32,
        IntKind::SecretI64,
        IntKind::SecretI128,
    ];

    /// The Rust type name (`u8`, `U8`, ...).
    pub fn name(self) -> &'static str {
        match self {
            IntKind::U8 => "u8",
            IntKind::U16 => "u16",
            IntKind::U32 => "u32",
            IntKind::U64 => "u64",
            IntKind::U128 => "u128",
            IntKind::I8 => "i8",
            IntKind::I16 => "i16",
            IntKind::I32 => "i32",
            IntKind::I64 => "i64",
            IntKind::I128 => "i128",
            IntKind::SecretU8 => "U8",
            IntKind::SecretU16 => "U16",
            IntKind::SecretU32 => "U32",
            IntKind::SecretU64 => "U64",
            IntKind::SecretU128 => "U128",
            IntKind::SecretI8 => "I8",
            IntKind::SecretI16 => "I16",
            IntKind::SecretI32 => "I32",
            IntKind::SecretI64 => "I64",
            IntKind::SecretI128 => "I128",
        }
    }

    /// Width in bits.
    pub fn bits(self) -> u32 {
        match self {
            IntKind::U8 | IntKind::I8 | IntKind::SecretU8 | IntKind::SecretI8 => 8,
            IntKind::U16 | IntKind::I16 | IntKind::SecretU16 | IntKind::SecretI16 => 16,
            IntKind::U32 | IntKind::I32 | IntKind::SecretU32 | IntKind::SecretI32 => 32,
            IntKind::U64 | IntKind::I64 | IntKind::SecretU64 | IntKind::SecretI64 => 64,
            IntKind::U128 | IntKind::I128 | IntKind::SecretU128 | IntKind::SecretI128 => 128,
        }
    }

    /// Whether the type is signed.
    pub fn is_signed(self) -> bool {
        self.name().starts_with(['i', 'I'])
    }

    /// Whether the type is a secret integer.
    pub fn is_secret(self) -> bool {
        self.name().starts_with(['U', 'I'])
    }
}

impl FromStr for IntKind {
    type Err = MachintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| MachintError::UnknownType(s.to_string()))
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run a generic function with the concrete type named by an [`IntKind`].
///
/// ```
/// use machint::{with_int_kind, IntKind, Integer};
///
/// fn width<T: Integer>() -> u32 {
///     T::NUM_BITS
/// }
///
/// let kind: IntKind = "I64".parse().unwrap();
/// assert_eq!(with_int_kind!(kind, width()), 64);
/// ```
#[macro_export]
macro_rules! with_int_kind {
    ($kind:expr, $f:ident ( $($arg:expr),* $(,)? )) => {
        match $kind {
            $crate::IntKind::U8 => $f::<u8>($($arg),*),
            $crate::IntKind::U16 => $f::<u16>($($arg),*),
            $crate::IntKind::U32 => $f::<u32>($($arg),*),
            $crate::IntKind::U64 => $f::<u64>($($arg),*),
            $crate::IntKind::U128 => $f::<u128>($($arg),*),
            $crate::IntKind::I8 => $f::<i8>($($arg),*),
            $crate::IntKind::I16 => $f::<i16>($($arg),*),
            $crate::IntKind::I32 => $f::<i32>($($arg),*),
            $crate::IntKind::I64 => $f::<i64>($($arg),*),
            $crate::IntKind::I128 => $f::<i128>($($arg),*),
            $crate::IntKind::SecretU8 => $f::<$crate::U8>($($arg),*),
            $crate::IntKind::SecretU16 => $f::<$crate::U16>($($arg),*),
            $crate::IntKind::SecretU32 => $f::<$crate::U32>($($arg),*),
            $crate::IntKind::SecretU64 => $f::<$crate::U64>($($arg),*),
            $crate::IntKind::SecretU128 => $f::<$crate::U128>($($arg),*),
            $crate::IntKind::SecretI8 => $f::<$crate::I8>($($arg),*),
            $crate::IntKind::SecretI16 => $f::<$crate::I16>($($arg),*),
            $crate::IntKind::SecretI32 => $f::<$crate::I32>($($arg),*),
            $crate::IntKind::SecretI64 => $f::<$crate::I64>($($arg),*),
            $crate::IntKind::SecretI128 => $f::<$crate::I128>($($arg),*),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for kind in IntKind::ALL {
            assert_eq!(kind.name().parse::<IntKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(
            "u7".parse::<IntKind>(),
            Err(MachintError::UnknownType("u7".to_string()))
        );
    }

    #[test]
    fn test_properties() {
        assert!(IntKind::I8.is_signed());
        assert!(IntKind::SecretI128.is_signed());
        assert!(!IntKind::SecretU32.is_signed());
        assert!(IntKind::SecretU32.is_secret());
        assert!(!IntKind::U32.is_secret());
        assert_eq!(IntKind::SecretU64.bits(), 64);
    }
}
