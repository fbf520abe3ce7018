// Coverage tests for error messages
use machint::*;

#[test]
fn test_error_display() {
    assert_eq!(MachintError::DivisionByZero.to_string(), "Division by zero");
    assert_eq!(
        MachintError::NotInvertible { type_name: "U32" }.to_string(),
        "Value of type U32 is not invertible modulo the given modulus"
    );
    assert_eq!(
        MachintError::LiteralOutOfRange {
            literal: "300".to_string(),
            type_name: "u8",
        }
        .to_string(),
        "Literal 300 is out of range for u8"
    );
    assert_eq!(
        MachintError::Overflow { type_name: "i32" }.to_string(),
        "Arithmetic overflow in i32"
    );
    assert_eq!(
        MachintError::LengthMismatch {
            expected: 32,
            got: 31
        }
        .to_string(),
        "Length mismatch: expected 32 bytes, got 31"
    );
    assert_eq!(
        MachintError::UnknownType("u7".to_string()).to_string(),
        "Unknown integer type: u7"
    );
    assert_eq!(
        MachintError::UnknownOperation("frob".to_string()).to_string(),
        "Unknown operation: frob"
    );
}

#[test]
fn test_hex_error_converts() {
    let err = Digest256::from_hex("xyz").unwrap_err();
    assert!(matches!(err, MachintError::InvalidHex(_)));
    assert!(err.to_string().starts_with("Invalid hex: "));
}

#[test]
fn test_secret_errors_do_not_leak_values() {
    let err = U128::classify(0x5ec2e7).inv(U128::classify(0x5ec2e7 * 3)).unwrap_err();
    let msg = err.to_string();
    assert!(!msg.contains("5ec2e7"));
    assert!(!msg.contains(&0x5ec2e7u128.to_string()));
}

#[test]
fn test_errors_are_std_errors() {
    fn takes_std_error(_: &dyn std::error::Error) {}
    takes_std_error(&MachintError::DivisionByZero);
}
