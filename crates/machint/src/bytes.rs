//! Secret byte arrays: fixed-length [`Bytes`] (digests, keys, blocks) and
//! variable-length [`ByteSeq`].
//!
//! Elements are [`U8`], so the bitwise operators, including `Not`, act on
//! secret data. Hex output and `declassify` reveal the contents.

use std::ops::{BitAnd, BitOr, BitXor, Index, IndexMut, Not};

use tracing::debug;

use crate::error::{MachintError, Result};
use crate::secret::U8;

/// Fold a mask over all byte pairs; zero only when every pair matched.
fn diff_accumulator(a: &[U8], b: &[U8]) -> U8 {
    a.iter()
        .zip(b.iter())
        .fold(U8::classify(0), |acc, (x, y)| acc | (*x ^ *y))
}

fn length_check(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        debug!(expected, got, "byte length mismatch");
        return Err(MachintError::LengthMismatch { expected, got });
    }
    Ok(())
}

fn decode_hex(s: &str) -> Result<Vec<u8>> {
    hex::decode(s.strip_prefix("0x").unwrap_or(s)).map_err(|e| {
        debug!(error = %e, "hex decoding failed");
        MachintError::from(e)
    })
}

/// A fixed-length array of secret bytes.
#[derive(Clone, Copy, Debug)]
pub struct Bytes<const N: usize>([U8; N]);

/// A 256-bit digest (SHA-256, SHA3-256, BLAKE2s).
pub type Digest256 = Bytes<32>;

/// A 384-bit digest (SHA-384).
pub type Digest384 = Bytes<48>;

/// A 512-bit digest (SHA-512, BLAKE2b).
pub type Digest512 = Bytes<64>;

impl<const N: usize> Bytes<N> {
    /// All-zero array.
    pub fn new() -> Self {
        Self([U8::classify(0); N])
    }

    /// Classify a public array.
    pub fn from_public_array(bytes: [u8; N]) -> Self {
        Self(bytes.map(U8::classify))
    }

    /// Classify a public slice of exactly `N` bytes.
    pub fn from_public_slice(bytes: &[u8]) -> Result<Self> {
        length_check(N, bytes.len())?;
        let mut out = Self::new();
        for (dst, src) in out.0.iter_mut().zip(bytes) {
            *dst = U8::classify(*src);
        }
        Ok(out)
    }

    /// Parse exactly `N` bytes of hex (optional `0x` prefix).
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_public_slice(&decode_hex(s)?)
    }

    /// Lower-case hex of the contents.
    pub fn to_hex(&self) -> String {
        hex::encode(self.declassify())
    }

    /// Reveal the contents.
    pub fn declassify(&self) -> [u8; N] {
        self.0.map(U8::declassify)
    }

    /// Number of bytes.
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` for the zero-length array.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Iterate over the secret bytes.
    pub fn iter(&self) -> std::slice::Iter<'_, U8> {
        self.0.iter()
    }

    /// Compare contents without branching on them; only the verdict is
    /// revealed.
    pub fn declassify_eq(&self, other: &Self) -> bool {
        diff_accumulator(&self.0, &other.0).declassify() == 0
    }
}

impl<const N: usize> Default for Bytes<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Index<usize> for Bytes<N> {
    type Output = U8;

    fn index(&self, i: usize) -> &U8 {
        &self.0[i]
    }
}

impl<const N: usize> IndexMut<usize> for Bytes<N> {
    fn index_mut(&mut self, i: usize) -> &mut U8 {
        &mut self.0[i]
    }
}

impl<const N: usize> Not for Bytes<N> {
    type Output = Self;

    fn not(self) -> Self {
        Self(self.0.map(|b| !b))
    }
}

macro_rules! bytes_bitop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<const N: usize> $trait for Bytes<N> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                let mut out = self;
                for (dst, src) in out.0.iter_mut().zip(rhs.0) {
                    *dst = *dst $op src;
                }
                out
            }
        }
    };
}

bytes_bitop!(BitXor, bitxor, ^);
bytes_bitop!(BitAnd, bitand, &);
bytes_bitop!(BitOr, bitor, |);

impl<const N: usize> From<[u8; N]> for Bytes<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self::from_public_array(bytes)
    }
}

impl<const N: usize> TryFrom<&ByteSeq> for Bytes<N> {
    type Error = MachintError;

    fn try_from(seq: &ByteSeq) -> Result<Self> {
        length_check(N, seq.len())?;
        let mut out = Self::new();
        out.0.copy_from_slice(&seq.0);
        Ok(out)
    }
}

/// A variable-length sequence of secret bytes.
#[derive(Clone, Debug, Default)]
pub struct ByteSeq(Vec<U8>);

impl ByteSeq {
    /// `len` zero bytes.
    pub fn new(len: usize) -> Self {
        Self(vec![U8::classify(0); len])
    }

    /// Classify a public slice.
    pub fn from_public_slice(bytes: &[u8]) -> Self {
        Self(bytes.iter().copied().map(U8::classify).collect())
    }

    /// Parse hex (optional `0x` prefix).
    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self::from_public_slice(&decode_hex(s)?))
    }

    /// Lower-case hex of the contents.
    pub fn to_hex(&self) -> String {
        hex::encode(self.declassify())
    }

    /// Reveal the contents.
    pub fn declassify(&self) -> Vec<u8> {
        self.0.iter().map(|b| b.declassify()).collect()
    }

    /// Number of bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the sequence holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the secret bytes.
    pub fn iter(&self) -> std::slice::Iter<'_, U8> {
        self.0.iter()
    }

    /// Copy `len` bytes starting at `start`.
    pub fn slice(&self, start: usize, len: usize) -> Result<Self> {
        let end = start.checked_add(len).filter(|end| *end <= self.0.len());
        match end {
            Some(end) => Ok(Self(self.0[start..end].to_vec())),
            None => {
                debug!(start, len, available = self.0.len(), "slice out of bounds");
                Err(MachintError::LengthMismatch {
                    expected: start.saturating_add(len),
                    got: self.0.len(),
                })
            }
        }
    }

    /// `self || other`
    pub fn concat(&self, other: &Self) -> Self {
        let mut out = self.0.clone();
        out.extend_from_slice(&other.0);
        Self(out)
    }

    /// Append one byte.
    pub fn push(&mut self, b: U8) {
        self.0.push(b);
    }

    /// Elementwise xor of two sequences of equal length.
    pub fn xor(&self, other: &Self) -> Result<Self> {
        length_check(self.len(), other.len())?;
        Ok(Self(
            self.0.iter().zip(&other.0).map(|(a, b)| *a ^ *b).collect(),
        ))
    }

    /// Compare contents without branching on them. Sequences of different
    /// length are unequal; the length itself is public.
    pub fn declassify_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && diff_accumulator(&self.0, &other.0).declassify() == 0
    }
}

impl Index<usize> for ByteSeq {
    type Output = U8;

    fn index(&self, i: usize) -> &U8 {
        &self.0[i]
    }
}

impl IndexMut<usize> for ByteSeq {
    fn index_mut(&mut self, i: usize) -> &mut U8 {
        &mut self.0[i]
    }
}

impl Not for ByteSeq {
    type Output = Self;

    fn not(self) -> Self {
        Self(self.0.into_iter().map(|b| !b).collect())
    }
}

impl Not for &ByteSeq {
    type Output = ByteSeq;

    fn not(self) -> ByteSeq {
        ByteSeq(self.0.iter().map(|b| !*b).collect())
    }
}

impl<const N: usize> From<Bytes<N>> for ByteSeq {
    fn from(bytes: Bytes<N>) -> Self {
        Self(bytes.0.to_vec())
    }
}

impl From<Vec<U8>> for ByteSeq {
    fn from(bytes: Vec<U8>) -> Self {
        Self(bytes)
    }
}
