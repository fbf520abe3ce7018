//! # machint
//!
//! Machine integers for executable cryptographic specifications.
//!
//! Specifications are written once against the [`Numeric`] trait family and
//! run over either public integers (`u8` .. `i128`, handy while debugging)
//! or secret integers ([`U8`] .. [`I128`]) that keep values out of branches
//! and memory indices.
//!
//! ## Architecture
//!
//! - **Traits**: [`Integer`], [`NumericBase`], [`Numeric`]
//! - **Public integers**: the ten primitive integer types
//! - **Secret integers**: classify/declassify newtypes with constant-time
//!   comparison masks
//! - **Field elements**: [`FieldElement`] over a `u128` prime
//! - **Bytes**: [`Bytes`] digests and [`ByteSeq`] sequences of secret bytes
//! - **Kinds**: [`IntKind`] names the integer types at runtime
//!
//! ## Example
//!
//! ```
//! use machint::prelude::*;
//!
//! fn mac_tag<T: Numeric>(a: T, b: T, p: T) -> T {
//!     a.mul_mod(b, p).add_mod(T::ONE, p)
//! }
//!
//! assert_eq!(mac_tag(6u32, 7, 11), 10);
//! assert_eq!(mac_tag(U32::classify(6), U32::classify(7), U32::classify(11)).declassify(), 10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bytes;
pub mod error;
pub mod field;
pub mod kind;
mod modular;
pub mod public;
pub mod secret;
pub mod traits;

// Re-export main types
pub use bytes::{ByteSeq, Bytes, Digest256, Digest384, Digest512};
pub use error::{MachintError, Result};
pub use field::{FieldElement, Goldilocks, Mersenne127, Mersenne61};
pub use kind::IntKind;
pub use secret::{I128, I16, I32, I64, I8, U128, U16, U32, U64, U8};
pub use traits::{Integer, Numeric, NumericBase};

/// Everything a specification usually imports.
pub mod prelude {
    pub use crate::bytes::{ByteSeq, Bytes, Digest256, Digest384, Digest512};
    pub use crate::error::{MachintError, Result};
    pub use crate::field::FieldElement;
    pub use crate::secret::{I128, I16, I32, I64, I8, U128, U16, U32, U64, U8};
    pub use crate::traits::{Integer, Numeric, NumericBase};
}

/// machint version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
