//! Command dispatch: parse operands, evaluate, render.

use anyhow::{bail, Context, Result};
use tracing::debug;

use machint::{with_int_kind, ByteSeq, IntKind, MachintError};

use crate::eval::{evaluate, Operation};
use crate::literal::{parse_amount, parse_literal};
use crate::parser::{Cli, Commands};
use crate::render::Report;

const COMPARISONS: [Operation; 11] = [
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
];

/// Run a parsed command line and return what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Eval { ty, op, operands } => {
            let report = eval_command(*ty, *op, operands)?;
            render_one(&report, cli.json)
        }
        Commands::Compare { ty, a, b } => {
            let reports = compare_command(*ty, a, b)?;
            if cli.json {
                return Ok(serde_json::to_string_pretty(&reports)?);
            }
            Ok(reports
                .iter()
                .map(Report::to_text)
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Commands::NotHex { hex } => {
            let seq = ByteSeq::from_hex(hex)?;
            let out = (!seq).to_hex();
            if cli.json {
                return Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "op": "not",
                    "input": hex,
                    "result": out,
                }))?);
            }
            Ok(out)
        }
    }
}

fn render_one(report: &Report, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(report.to_text())
    }
}

/// Parse the operands for `op` over `kind` and evaluate it.
pub fn eval_command(kind: IntKind, op: Operation, operands: &[String]) -> Result<Report> {
    let signature = op.signature();
    if operands.len() != signature.arity {
        bail!(
            "{} takes {} operand(s), got {}",
            op,
            signature.arity,
            operands.len()
        );
    }

    let mut args = Vec::with_capacity(operands.len());
    for (i, raw) in operands.iter().enumerate() {
        let is_amount = signature.amount_last && i + 1 == operands.len();
        let parsed = if is_amount {
            let amount = parse_amount(raw)?;
            check_amount(op, amount, kind)?;
            u128::from(amount)
        } else {
            parse_literal(raw, kind).with_context(|| format!("operand {}", i + 1))?
        };
        args.push(parsed);
    }
    debug!(%kind, %op, operands = args.len(), "evaluating");

    let outcome = with_int_kind!(kind, evaluate(op, &args))?;
    // Amounts are small non-negative values and render the same either way.
    Ok(Report::new(kind, op.name(), &args, outcome))
}

/// Every boolean and mask comparison between `a` and `b`.
pub fn compare_command(kind: IntKind, a: &str, b: &str) -> Result<Vec<Report>> {
    let args = [parse_literal(a, kind)?, parse_literal(b, kind)?];
    COMPARISONS
        .iter()
        .map(|op| -> Result<Report> {
            let outcome = with_int_kind!(kind, evaluate(*op, &args))?;
            Ok(Report::new(kind, op.name(), &args, outcome))
        })
        .collect()
}

/// Shifts and bit indices must stay below the type width.
fn check_amount(op: Operation, amount: u32, kind: IntKind) -> Result<(), MachintError> {
    let bounded = matches!(op, Operation::Shl | Operation::Shr | Operation::GetBit);
    if bounded && amount >= kind.bits() {
        debug!(%op, amount, bits = kind.bits(), "amount exceeds type width");
        return Err(MachintError::LiteralOutOfRange {
            literal: amount.to_string(),
            type_name: "u32",
        });
    }
    Ok(())
}
