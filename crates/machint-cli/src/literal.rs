//! Operand literals: decimal, negative decimal and `0x` hex.

use machint::{IntKind, MachintError};

/// Parse `s` as a value of `kind`, returning its bit pattern sign-extended
/// to 128 bits.
///
/// Hex literals may use the full width of signed types (`0xff` is `-1` as
/// an `i8`); positive decimal literals for signed types must fit the
/// positive range.
pub fn parse_literal(s: &str, kind: IntKind) -> Result<u128, MachintError> {
    let out_of_range = || MachintError::LiteralOutOfRange {
        literal: s.to_string(),
        type_name: kind.name(),
    };

    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (is_hex, magnitude) = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(digits) => (true, u128::from_str_radix(digits, 16)),
        None => (false, body.parse::<u128>()),
    };
    let magnitude = magnitude.map_err(|_| out_of_range())?;

    let bits = kind.bits();
    let sign_bit = 1u128 << (bits - 1);
    let unsigned_limit_ok = bits == 128 || magnitude >> bits == 0;

    let fits = if negative {
        kind.is_signed() && magnitude <= sign_bit
    } else if kind.is_signed() && !is_hex {
        magnitude < sign_bit
    } else {
        unsigned_limit_ok
    };
    if !fits {
        return Err(out_of_range());
    }

    let pattern = if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    };
    Ok(sign_extend(pattern, bits, kind.is_signed()))
}

/// Parse a public `u32` amount (exponent, shift, bit index).
pub fn parse_amount(s: &str) -> Result<u32, MachintError> {
    let parsed = match s.strip_prefix("0x") {
        Some(digits) => u32::from_str_radix(digits, 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|_| MachintError::LiteralOutOfRange {
        literal: s.to_string(),
        type_name: "u32",
    })
}

fn sign_extend(pattern: u128, bits: u32, signed: bool) -> u128 {
    if bits == 128 {
        return pattern;
    }
    let low = pattern & ((1u128 << bits) - 1);
    if signed && (low >> (bits - 1)) & 1 == 1 {
        low | !((1u128 << bits) - 1)
    } else {
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decimal_and_hex() {
        assert_eq!(parse_literal("200", IntKind::U8).unwrap(), 200);
        assert_eq!(parse_literal("0xff", IntKind::U8).unwrap(), 255);
        assert_eq!(parse_literal("0XFF", IntKind::SecretU16).unwrap(), 255);
    }

    #[test]
    fn test_negative_literals_sign_extend() {
        assert_eq!(parse_literal("-1", IntKind::I8).unwrap(), u128::MAX);
        assert_eq!(parse_literal("-128", IntKind::I8).unwrap() as i128, -128);
        assert_eq!(parse_literal("0xff", IntKind::I8).unwrap() as i128, -1);
        assert_eq!(parse_literal("-5", IntKind::SecretI128).unwrap() as i128, -5);
    }

    #[test]
    fn test_out_of_range() {
        assert!(parse_literal("256", IntKind::U8).is_err());
        assert!(parse_literal("-1", IntKind::U32).is_err());
        assert!(parse_literal("128", IntKind::I8).is_err());
        assert!(parse_literal("-129", IntKind::I8).is_err());
        assert!(parse_literal("0x100", IntKind::I8).is_err());
        assert!(parse_literal("banana", IntKind::U64).is_err());
        assert_eq!(
            parse_literal(&u128::MAX.to_string(), IntKind::U128).unwrap(),
            u128::MAX
        );
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("31").unwrap(), 31);
        assert_eq!(parse_amount("0x10").unwrap(), 16);
        assert!(parse_amount("-1").is_err());
    }
}
