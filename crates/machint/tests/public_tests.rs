//! Tests for the numeric traits on public machine integers

use machint::*;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════
// Integer constants and bit access
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_constants() {
    assert_eq!(<u8 as Integer>::NUM_BITS, 8);
    assert_eq!(<i128 as Integer>::NUM_BITS, 128);
    assert!(<i32 as Integer>::SIGNED);
    assert!(!<u64 as Integer>::SIGNED);
    assert_eq!(<u16 as Integer>::ZERO, 0);
    assert_eq!(<u16 as Integer>::ONE, 1);
    assert_eq!(<i64 as Integer>::TWO, 2);
}

#[test]
fn test_from_literal_truncates() {
    assert_eq!(<u8 as Integer>::from_literal(0x1ff), 0xff);
    assert_eq!(<i8 as Integer>::from_literal(0xff), -1);
    assert_eq!(<u128 as Integer>::from_literal(u128::MAX), u128::MAX);
}

#[test]
fn test_get_bit_and_rotate() {
    assert_eq!(Integer::get_bit(0b1010u8, 1), 1);
    assert_eq!(Integer::get_bit(0b1010u8, 2), 0);
    assert_eq!(Integer::get_bit(-1i16, 15), 1);
    assert_eq!(Integer::rotate_left(0x80u8, 1), 0x01);
    assert_eq!(Integer::rotate_right(0x01u32, 4), 0x1000_0000);
}

// ═══════════════════════════════════════════════════════════════════════
// Wrapping arithmetic
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_wrapping_ops() {
    assert_eq!(u8::max_val(), 255);
    assert_eq!(i16::max_val(), i16::MAX);
    assert_eq!(200u8.wrap_add(100), 44);
    assert_eq!(0u32.wrap_sub(1), u32::MAX);
    assert_eq!(i8::MIN.wrap_sub(1), i8::MAX);
    assert_eq!(16u8.wrap_mul(16), 0);
    assert_eq!(i32::MIN.wrap_div(-1), i32::MIN);
    assert_eq!(17u64.wrap_div(5), 3);
}

#[test]
fn test_pow_wraps() {
    assert_eq!(NumericBase::pow(3u32, 4), 81);
    assert_eq!(NumericBase::pow(2u8, 8), 0);
    assert_eq!(NumericBase::pow(-2i32, 3), -8);
    assert_eq!(NumericBase::pow(7u64, 0), 1);
}

#[test]
fn test_pow_self() {
    assert_eq!(NumericBase::pow_self(2u32, 10), 1024);
    assert_eq!(NumericBase::pow_self(3u16, 0), 1);
    // -1 as an exponent is the bit pattern 0xff: 3^255 mod 2^8
    assert_eq!(NumericBase::pow_self(3i8, -1), 3u8.wrapping_pow(255) as i8);
}

#[test]
fn test_abs() {
    assert_eq!(NumericBase::abs(-42i32), 42);
    assert_eq!(NumericBase::abs(42i32), 42);
    assert_eq!(NumericBase::abs(i64::MIN), i64::MIN);
    assert_eq!(NumericBase::abs(200u8), 200);
}

// ═══════════════════════════════════════════════════════════════════════
// Modular arithmetic
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_add_sub_mul_mod() {
    assert_eq!(5u32.add_mod(9, 7), 0);
    assert_eq!(2u32.sub_mod(5, 7), 4);
    assert_eq!(6u32.mul_mod(6, 7), 1);
    assert_eq!(u64::MAX.add_mod(u64::MAX, u64::MAX - 1), 2);
}

#[test]
fn test_signed_mod_results_are_non_negative() {
    assert_eq!((-9i32).rem(7), 5);
    assert_eq!((-1i64).add_mod(-1, 5), 3);
    assert_eq!(3i16.sub_mod(10, 4), 1);
    assert_eq!((-4i8).mul_mod(3, 5), 3);
}

#[test]
fn test_pow_mod() {
    assert_eq!(4u32.pow_mod(13, 497), 445);
    assert_eq!(2u128.pow_mod(127, (1 << 127) - 1), 1);
    assert_eq!(10u8.pow_mod(0, 7), 1);
}

#[test]
#[should_panic(expected = "modulus must be positive")]
fn test_mod_by_zero_panics() {
    let _ = 5u32.add_mod(1, 0);
}

#[test]
fn test_div_and_rem() {
    assert_eq!(NumericBase::div(17u32, 5), 3);
    assert_eq!(NumericBase::div(-17i32, 5), -3);
    assert_eq!(NumericBase::rem(17u32, 5), 2);
}

#[test]
fn test_inv() {
    assert_eq!(3u32.inv(7), Ok(5));
    assert_eq!(17u64.inv(3120), Ok(2753));
    assert_eq!(
        6u32.inv(9),
        Err(MachintError::NotInvertible { type_name: "u32" })
    );
    assert_eq!(3i32.inv(0), Err(MachintError::DivisionByZero));
    assert_eq!(3i32.inv(-7), Err(MachintError::DivisionByZero));
}

// ═══════════════════════════════════════════════════════════════════════
// Comparisons
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_bool_comparisons() {
    assert!(3u8.equal(3));
    assert!(4u8.greater_than(3));
    assert!(4u8.greater_than_or_equal(4));
    assert!((-4i8).less_than(3));
    assert!(3i8.less_than_or_equal(3));
    assert!(!3i8.less_than(3));
}

#[test]
fn test_mask_comparisons() {
    assert_eq!(3u16.equal_bm(3), 0xffff);
    assert_eq!(3u16.not_equal_bm(3), 0);
    assert_eq!(5u32.greater_than_bm(3), u32::MAX);
    assert_eq!(5u32.greater_than_or_equal_bm(6), 0);
    assert_eq!((-1i64).less_than_bm(0), -1);
    assert_eq!(1i64.less_than_or_equal_bm(0), 0);
}
