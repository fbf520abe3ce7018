//! Operation table and generic evaluation over any `Numeric` type.

use std::fmt;
use std::str::FromStr;

use machint::{MachintError, Numeric, Result};

/// An operation the CLI can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Wrapping addition
    Add,
    /// Wrapping subtraction
    Sub,
    /// Wrapping multiplication
    Mul,
    /// Wrapping division (`MIN / -1 == MIN`)
    WrapDiv,
    /// Truncating division; `MIN / -1` is an overflow error
    Div,
    /// Euclidean remainder
    Rem,
    /// `(a + b) mod n`
    AddMod,
    /// `(a - b) mod n`
    SubMod,
    /// `(a * b) mod n`
    MulMod,
    /// `(a ^ e) mod n`
    PowMod,
    /// `a ^ e` with a public `u32` exponent
    Pow,
    /// `a ^ e` with an exponent of the same type
    PowSelf,
    /// Modular inverse
    Inv,
    /// Wrapping absolute value
    Abs,
    /// Bitwise complement
    Not,
    /// Bitwise and
    And,
    /// Bitwise or
    Or,
    /// Bitwise xor
    Xor,
    /// Shift left by a public amount
    Shl,
    /// Shift right by a public amount
    Shr,
    /// Rotate left by a public amount
    Rotl,
    /// Rotate right by a public amount
    Rotr,
    /// Single bit
    GetBit,
    /// `a == b`
    Eq,
    /// `a > b`
    Gt,
    /// `a >= b`
    Gte,
    /// `a < b`
    Lt,
    /// `a <= b`
    Lte,
    /// Mask for `a == b`
    EqBm,
    /// Mask for `a != b`
    NeBm,
    /// Mask for `a > b`
    GtBm,
    /// Mask for `a >= b`
    GteBm,
    /// Mask for `a < b`
    LtBm,
    /// Mask for `a <= b`
    LteBm,
    /// Largest representable value
    Max,
}

/// How many operands an operation takes and whether the last one is a
/// public `u32` amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// Number of operands
    pub arity: usize,
    /// The last operand is a `u32` amount rather than a value
    pub amount_last: bool,
}

impl Operation {
    /// Every operation, in help order.
    pub const ALL: [Operation; 35] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::WrapDiv,
        Operation::Div,
        Operation::Rem,
        Operation::AddMod,
        Operation::SubMod,
        Operation::MulMod,
        Operation::PowMod,
        Operation::Pow,
        Operation::PowSelf,
        Operation::Inv,
        Operation::Abs,
        Operation::Not,
        Operation::And,
        Operation::Or,
        Operation::Xor,
        Operation::Shl,
        Operation::Shr,
        Operation::Rotl,
        Operation::Rotr,
        Operation::GetBit,
        Operation::Eq,
        Operation::Gt,
        Operation::Gte,
        Operation::Lt,
        Operation::Lte,
        Operation::EqBm,
        Operation::NeBm,
        Operation::GtBm,
        Operation::GteBm,
        Operation::LtBm,
        Operation::LteBm,
        Operation::Max,
    ];

    /// Command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::WrapDiv => "wrap-div",
            Operation::Div => "div",
            Operation::Rem => "rem",
            Operation::AddMod => "add-mod",
            Operation::SubMod => "sub-mod",
            Operation::MulMod => "mul-mod",
            Operation::PowMod => "pow-mod",
            Operation::Pow => "pow",
            Operation::PowSelf => "pow-self",
            Operation::Inv => "inv",
            Operation::Abs => "abs",
            Operation::Not => "not",
            Operation::And => "and",
            Operation::Or => "or",
            Operation::Xor => "xor",
            Operation::Shl => "shl",
            Operation::Shr => "shr",
            Operation::Rotl => "rotl",
            Operation::Rotr => "rotr",
            Operation::GetBit => "get-bit",
            Operation::Eq => "eq",
            Operation::Gt => "gt",
            Operation::Gte => "gte",
            Operation::Lt => "lt",
            Operation::Lte => "lte",
            Operation::EqBm => "eq-bm",
            Operation::NeBm => "ne-bm",
            Operation::GtBm => "gt-bm",
            Operation::GteBm => "gte-bm",
            Operation::LtBm => "lt-bm",
            Operation::LteBm => "lte-bm",
            Operation::Max => "max",
        }
    }

    /// Operand layout.
    pub fn signature(self) -> Signature {
        use Operation::*;
        let (arity, amount_last) = match self {
            Max => (0, false),
            Abs | Not => (1, false),
            Pow | Shl | Shr | Rotl | Rotr | GetBit => (2, true),
            AddMod | SubMod | MulMod | PowMod => (3, false),
            _ => (2, false),
        };
        Signature { arity, amount_last }
    }
}

impl FromStr for Operation {
    type Err = MachintError;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| MachintError::UnknownOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A value of the operand type, as its sign-extended bit pattern
    Value(u128),
    /// A comparison verdict
    Bool(bool),
}

fn nonzero<T: Numeric>(n: T) -> Result<T> {
    if n.equal(T::ZERO) {
        return Err(MachintError::DivisionByZero);
    }
    Ok(n)
}

fn positive<T: Numeric>(n: T) -> Result<T> {
    if n.less_than_or_equal(T::ZERO) {
        return Err(MachintError::DivisionByZero);
    }
    Ok(n)
}

fn no_overflow<T: Numeric>(a: T, b: T) -> Result<T> {
    if T::SIGNED && b.equal(!T::ZERO) && a.equal(!T::max_val()) {
        let type_name = std::any::type_name::<T>();
        return Err(MachintError::Overflow {
            type_name: type_name.rsplit("::").next().unwrap_or(type_name),
        });
    }
    Ok(b)
}

/// Evaluate `op` over `T`.
///
/// `args` holds operand bit patterns; an amount operand holds a `u32`
/// already checked against the type width. The arity must match
/// [`Operation::signature`].
pub fn evaluate<T: Numeric>(op: Operation, args: &[u128]) -> Result<Outcome> {
    let v = |i: usize| T::from_literal(args[i]);
    let amount = |i: usize| args[i] as u32;
    let value = |x: T| Ok(Outcome::Value(x.to_literal()));
    let verdict = |b: bool| Ok(Outcome::Bool(b));

    match op {
        Operation::Add => value(v(0).wrap_add(v(1))),
        Operation::Sub => value(v(0).wrap_sub(v(1))),
        Operation::Mul => value(v(0).wrap_mul(v(1))),
        Operation::WrapDiv => value(v(0).wrap_div(nonzero(v(1))?)),
        Operation::Div => value(v(0).div(no_overflow(v(0), nonzero(v(1))?)?)),
        Operation::Rem => value(v(0).rem(positive(v(1))?)),
        Operation::AddMod => value(v(0).add_mod(v(1), positive(v(2))?)),
        Operation::SubMod => value(v(0).sub_mod(v(1), positive(v(2))?)),
        Operation::MulMod => value(v(0).mul_mod(v(1), positive(v(2))?)),
        Operation::PowMod => value(v(0).pow_mod(v(1), positive(v(2))?)),
        Operation::Pow => value(v(0).pow(amount(1))),
        Operation::PowSelf => value(v(0).pow_self(v(1))),
        Operation::Inv => value(v(0).inv(v(1))?),
        Operation::Abs => value(v(0).abs()),
        Operation::Not => value(!v(0)),
        Operation::And => value(v(0) & v(1)),
        Operation::Or => value(v(0) | v(1)),
        Operation::Xor => value(v(0) ^ v(1)),
        Operation::Shl => value(v(0) << amount(1)),
        Operation::Shr => value(v(0) >> amount(1)),
        Operation::Rotl => value(v(0).rotate_left(amount(1))),
        Operation::Rotr => value(v(0).rotate_right(amount(1))),
        Operation::GetBit => value(v(0).get_bit(amount(1))),
        Operation::Eq => verdict(v(0).equal(v(1))),
        Operation::Gt => verdict(v(0).greater_than(v(1))),
        Operation::Gte => verdict(v(0).greater_than_or_equal(v(1))),
        Operation::Lt => verdict(v(0).less_than(v(1))),
        Operation::Lte => verdict(v(0).less_than_or_equal(v(1))),
        Operation::EqBm => value(v(0).equal_bm(v(1))),
        Operation::NeBm => value(v(0).not_equal_bm(v(1))),
        Operation::GtBm => value(v(0).greater_than_bm(v(1))),
        Operation::GteBm => value(v(0).greater_than_or_equal_bm(v(1))),
        Operation::LtBm => value(v(0).less_than_bm(v(1))),
        Operation::LteBm => value(v(0).less_than_or_equal_bm(v(1))),
        Operation::Max => value(T::max_val()),
    }
}
