//! Command-line front end for `machint`.
//!
//! Picks an integer type by name at runtime, parses operand literals for
//! it, and evaluates one operation through the generic [`machint::Numeric`]
//! interface, so public and secret types share a single code path.

pub mod commands;
pub mod eval;
pub mod literal;
pub mod parser;
pub mod render;

pub use commands::run;
pub use eval::{evaluate, Operation, Outcome};
pub use parser::{Cli, Commands};
pub use render::Report;
