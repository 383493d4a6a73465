//! Errors raised while building or driving a linear block code.
//!
//! Channel errors are not represented here: an uncorrectable received word is an
//! ordinary [`DecodeStatus`](crate::ecc::hamming::DecodeStatus), not an `Error`.

use thiserror::Error;

/// Errors for matrix construction and codec contract violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed matrix or word contents.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The left k×k block of the generator has no pivot in `column`.
    #[error("generator matrix is singular: no pivot found for column {column}")]
    SingularGenerator { column: usize },

    /// A matrix expected in `[I_k | P]` form is not.
    #[error("generator matrix is not in systematic form")]
    NotSystematic,

    /// `G · Hᵗ` is not the zero matrix.
    #[error("generator and parity-check matrices are not orthogonal")]
    NotOrthogonal,

    /// A word passed to the codec has the wrong number of bits.
    #[error("word length mismatch: expected {expected} bits, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Result type for all fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
