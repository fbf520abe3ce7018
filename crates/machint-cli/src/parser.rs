//! Main CLI parser and top-level argument handling.

use clap::{Parser, Subcommand};

use machint::IntKind;

use crate::eval::Operation;

/// Evaluate machine integer operations from the command line.
#[derive(Debug, Parser)]
#[command(name = "machint")]
#[command(about = "Evaluate public and secret machine integer operations")]
#[command(version)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply one operation to operands of a given type
    Eval {
        /// Integer type (u8..i128 public, U8..I128 secret)
        ty: IntKind,
        /// Operation name (add, mul-mod, rotl, gt-bm, ...); `div` rejects
        /// MIN / -1, `wrap-div` wraps it
        op: Operation,
        /// Operands: decimal, negative decimal or 0x hex
        #[arg(allow_hyphen_values = true)]
        operands: Vec<String>,
    },

    /// Show every comparison between two values
    Compare {
        /// Integer type
        ty: IntKind,
        /// Left operand
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Right operand
        #[arg(allow_hyphen_values = true)]
        b: String,
    },

    /// Complement every byte of a hex string as secret bytes
    NotHex {
        /// Hex input, optionally 0x-prefixed
        hex: String,
    },
}
