//! Specifications written once against `Numeric`, run over public and
//! secret integers.

use machint::*;
use pretty_assertions::assert_eq;

/// ChaCha quarter round (RFC 8439, section 2.1).
fn quarter_round<T: Numeric>(mut a: T, mut b: T, mut c: T, mut d: T) -> (T, T, T, T) {
    a = a.wrap_add(b);
    d = (d ^ a).rotate_left(16);
    c = c.wrap_add(d);
    b = (b ^ c).rotate_left(12);
    a = a.wrap_add(b);
    d = (d ^ a).rotate_left(8);
    c = c.wrap_add(d);
    b = (b ^ c).rotate_left(7);
    (a, b, c, d)
}

/// Horner evaluation of a polynomial modulo `p`.
fn poly_eval<T: Numeric>(coeffs: &[T], x: T, p: T) -> T {
    coeffs
        .iter()
        .fold(T::ZERO, |acc, c| acc.mul_mod(x, p).add_mod(*c, p))
}

/// Branch-free conditional swap driven by a mask comparison.
fn cswap<T: Numeric>(a: T, b: T, swap_if_greater: T) -> (T, T) {
    let mask = a.greater_than_bm(b) & swap_if_greater;
    let t = (a ^ b) & mask;
    (a ^ t, b ^ t)
}

#[test]
fn test_quarter_round_public() {
    let out = quarter_round(0x1111_1111u32, 0x0102_0304, 0x9b8d_6f43, 0x0123_4567);
    assert_eq!(out, (0xea2a_92f4, 0xcb1c_f8ce, 0x4581_472e, 0x5881_c4bb));
}

#[test]
fn test_quarter_round_secret() {
    let (a, b, c, d) = quarter_round(
        U32::classify(0x1111_1111),
        U32::classify(0x0102_0304),
        U32::classify(0x9b8d_6f43),
        U32::classify(0x0123_4567),
    );
    assert_eq!(
        (a.declassify(), b.declassify(), c.declassify(), d.declassify()),
        (0xea2a_92f4, 0xcb1c_f8ce, 0x4581_472e, 0x5881_c4bb)
    );
}

#[test]
fn test_poly_eval_public_and_secret_agree() {
    // 3x^2 + 2x + 1 at x = 5 mod 17 = 86 mod 17 = 1
    let public = poly_eval(&[3u64, 2, 1], 5, 17);
    assert_eq!(public, 1);

    let coeffs = [U64::classify(3), U64::classify(2), U64::classify(1)];
    let secret = poly_eval(&coeffs, U64::classify(5), U64::classify(17));
    assert_eq!(secret.declassify(), public);
}

#[test]
fn test_cswap() {
    assert_eq!(cswap(9u16, 4, u16::MAX), (4, 9));
    assert_eq!(cswap(9u16, 4, 0), (9, 4));
    assert_eq!(cswap(4u16, 9, u16::MAX), (4, 9));

    let (lo, hi) = cswap(I32::classify(7), I32::classify(-7), I32::classify(-1));
    assert_eq!((lo.declassify(), hi.declassify()), (-7, 7));
}

#[test]
fn test_from_literal_is_generic() {
    fn all_ones<T: Numeric>() -> T {
        !T::ZERO
    }
    assert_eq!(all_ones::<u8>(), 0xff);
    assert_eq!(all_ones::<I64>().declassify(), -1);
    assert_eq!(<U16 as Integer>::from_literal(0xabcd).to_literal(), 0xabcd);
}
