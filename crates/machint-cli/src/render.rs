//! Text and JSON presentation of evaluation results.

use serde::Serialize;

use machint::IntKind;

use crate::eval::Outcome;

/// One evaluated expression, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Operand type name
    #[serde(rename = "type")]
    pub ty: String,
    /// Operation name
    pub op: String,
    /// Operands in decimal
    pub operands: Vec<String>,
    /// Result in decimal, or `true`/`false` for comparisons
    pub result: String,
    /// Result as zero-padded hex of the type width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

impl Report {
    /// Build a report from already-parsed operand patterns.
    pub fn new(kind: IntKind, op: &str, operands: &[u128], outcome: Outcome) -> Self {
        let (result, hex) = match outcome {
            Outcome::Value(v) => (decimal(v, kind), Some(hex(v, kind))),
            Outcome::Bool(b) => (b.to_string(), None),
        };
        Self {
            ty: kind.name().to_string(),
            op: op.to_string(),
            operands: operands.iter().map(|v| decimal(*v, kind)).collect(),
            result,
            hex,
        }
    }

    /// Single-line text form: `u8 add 200 100 = 44 (0x2c)`.
    pub fn to_text(&self) -> String {
        let mut line = format!("{} {}", self.ty, self.op);
        for operand in &self.operands {
            line.push(' ');
            line.push_str(operand);
        }
        line.push_str(" = ");
        line.push_str(&self.result);
        if let Some(hex) = &self.hex {
            line.push_str(&format!(" ({hex})"));
        }
        line
    }
}

/// Decimal form of a sign-extended pattern.
pub fn decimal(v: u128, kind: IntKind) -> String {
    if kind.is_signed() {
        (v as i128).to_string()
    } else {
        v.to_string()
    }
}

/// Hex form truncated and padded to the width of `kind`.
pub fn hex(v: u128, kind: IntKind) -> String {
    let bits = kind.bits();
    let masked = if bits == 128 {
        v
    } else {
        v & ((1u128 << bits) - 1)
    };
    format!("0x{:0width$x}", masked, width = (bits / 4) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decimal_signed_and_unsigned() {
        assert_eq!(decimal(u128::MAX, IntKind::I8), "-1");
        assert_eq!(decimal(0xff, IntKind::SecretU8), "255");
    }

    #[test]
    fn test_hex_masks_to_width() {
        assert_eq!(hex(u128::MAX, IntKind::I16), "0xffff");
        assert_eq!(hex(0x2c, IntKind::U32), "0x0000002c");
        assert_eq!(hex(1, IntKind::U128), format!("0x{:032x}", 1));
    }

    #[test]
    fn test_text_report() {
        let report = Report::new(IntKind::U8, "add", &[200, 100], Outcome::Value(44));
        assert_eq!(report.to_text(), "u8 add 200 100 = 44 (0x2c)");

        let report = Report::new(IntKind::SecretI32, "lt", &[u128::MAX, 0], Outcome::Bool(true));
        assert_eq!(report.to_text(), "I32 lt -1 0 = true");
    }

    #[test]
    fn test_json_report() {
        let report = Report::new(IntKind::I8, "neg-ish", &[5], Outcome::Value(u128::MAX));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["type"], "i8");
        assert_eq!(json["result"], "-1");
        assert_eq!(json["hex"], "0xff");

        let report = Report::new(IntKind::U8, "eq", &[1, 1], Outcome::Bool(true));
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("hex").is_none());
    }
}
