//! Prime-field elements over a `u128` modulus.
//!
//! A [`FieldElement`] always holds its canonical representative in
//! `[0, MODULUS)`. Field elements are public values; arithmetic is not
//! constant time.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Not, Sub, SubAssign};

use tracing::debug;

use crate::error::{MachintError, Result};
use crate::modular::ModArith;

/// An element of `Z / MODULUS Z`.
///
/// The modulus must be at least 2; smaller moduli are rejected when the
/// field's constants or constructors are instantiated.
///
/// ```compile_fail
/// use machint::FieldElement;
///
/// println!("{}", FieldElement::<1>::ONE.value());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldElement<const MODULUS: u128>(u128);

/// The field modulo the Mersenne prime `2^61 - 1`.
pub type Mersenne61 = FieldElement<{ (1 << 61) - 1 }>;

/// The field modulo the Mersenne prime `2^127 - 1`.
pub type Mersenne127 = FieldElement<{ (1 << 127) - 1 }>;

/// The field modulo `2^64 - 2^32 + 1`.
pub type Goldilocks = FieldElement<0xffff_ffff_0000_0001>;

impl<const MODULUS: u128> FieldElement<MODULUS> {
    const VALID: () = assert!(MODULUS >= 2, "field modulus must be at least 2");

    /// The modulus of this field.
    pub const MODULUS: u128 = MODULUS;

    /// `0`
    #[allow(clippy::let_unit_value)]
    pub const ZERO: Self = {
        let () = Self::VALID;
        Self(0)
    };

    /// `1`
    #[allow(clippy::let_unit_value)]
    pub const ONE: Self = {
        let () = Self::VALID;
        Self(1)
    };

    /// Reduce an arbitrary literal into the field.
    pub fn from_literal(val: u128) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID;
        Self(val % MODULUS)
    }

    /// Accept a literal only if it is already a canonical representative.
    pub fn try_from_literal(val: u128) -> Result<Self> {
        if val >= MODULUS {
            debug!(literal = val, modulus = MODULUS, "literal outside the field");
            return Err(MachintError::LiteralOutOfRange {
                literal: val.to_string(),
                type_name: std::any::type_name::<Self>(),
            });
        }
        Ok(Self::from_literal(val))
    }

    /// Parse a big-endian hex string (optional `0x` prefix) that names a
    /// canonical representative.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.is_empty() {
            debug!("empty hex literal");
            return Err(MachintError::InvalidHex(hex::FromHexError::InvalidStringLength));
        }
        // Pad to an even number of digits so `hex` accepts it.
        let padded = if digits.len() % 2 == 1 {
            format!("0{digits}")
        } else {
            digits.to_string()
        };
        let bytes = hex::decode(&padded)?;
        let significant: Vec<u8> = bytes.iter().copied().skip_while(|b| *b == 0).collect();
        if significant.len() > 16 {
            return Err(MachintError::LiteralOutOfRange {
                literal: s.to_string(),
                type_name: std::any::type_name::<Self>(),
            });
        }
        let val = significant
            .iter()
            .fold(0u128, |acc, b| (acc << 8) | u128::from(*b));
        Self::try_from_literal(val)
    }

    /// Lower-case hex of the representative, without prefix or padding.
    pub fn to_hex(self) -> String {
        format!("{:x}", self.0)
    }

    /// The canonical representative.
    pub fn value(self) -> u128 {
        self.0
    }

    /// `self ^ exp`
    pub fn pow(self, exp: u128) -> Self {
        Self(ModArith::pow_mod(self.0, exp, MODULUS))
    }

    /// `self ^ other`, reading the exponent's representative.
    pub fn pow_self(self, exp: Self) -> Self {
        self.pow(exp.0)
    }

    /// Multiplicative inverse. Zero (and, for composite moduli, any
    /// element sharing a factor with the modulus) has none.
    pub fn inv(self) -> Result<Self> {
        ModArith::inv_mod(self.0, MODULUS).map(Self).ok_or_else(|| {
            debug!(modulus = MODULUS, "field element has no inverse");
            MachintError::NotInvertible {
                type_name: std::any::type_name::<Self>(),
            }
        })
    }

    /// `self / rhs`
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        if rhs.0 == 0 {
            return Err(MachintError::DivisionByZero);
        }
        Ok(self * rhs.inv()?)
    }
}

impl<const MODULUS: u128> Default for FieldElement<MODULUS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const MODULUS: u128> Add for FieldElement<MODULUS> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(ModArith::add_mod(self.0, rhs.0, MODULUS))
    }
}

impl<const MODULUS: u128> Sub for FieldElement<MODULUS> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(ModArith::sub_mod(self.0, rhs.0, MODULUS))
    }
}

impl<const MODULUS: u128> Mul for FieldElement<MODULUS> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(ModArith::mul_mod(self.0, rhs.0, MODULUS))
    }
}

impl<const MODULUS: u128> AddAssign for FieldElement<MODULUS> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const MODULUS: u128> SubAssign for FieldElement<MODULUS> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const MODULUS: u128> MulAssign for FieldElement<MODULUS> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const MODULUS: u128> Neg for FieldElement<MODULUS> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

/// Complement within the field: `!x == MODULUS - 1 - x`.
impl<const MODULUS: u128> Not for FieldElement<MODULUS> {
    type Output = Self;

    fn not(self) -> Self {
        Self(MODULUS - 1 - self.0)
    }
}

impl<const MODULUS: u128> From<u128> for FieldElement<MODULUS> {
    fn from(val: u128) -> Self {
        Self::from_literal(val)
    }
}

impl<const MODULUS: u128> fmt::Display for FieldElement<MODULUS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl<const MODULUS: u128> fmt::Debug for FieldElement<MODULUS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:x} mod 0x{:x})", self.0, MODULUS)
    }
}
