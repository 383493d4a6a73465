//! Linear block codes over GF(2).
//!
//! This module provides:
//! - [`gf2::BitMatrix`], a small dense bit matrix with the row and product
//!   operations needed by the code constructions
//! - Systematic reduction of a generator matrix ([`systematic`])
//! - Parity-check matrix derivation ([`parity_check`])
//! - A (10,6) Hamming-style codec with syndrome decoding ([`hamming`])
//!
//! # Examples
//!
//! ```rust
//! use hamming_link::ecc::hamming::{construct_codec, word, DecodeStatus};
//!
//! let codec = construct_codec().unwrap();
//! let data = word(&[0, 1, 1, 0, 1, 1]).unwrap();
//! let mut sent = codec.encode(&data).unwrap();
//!
//! // Flip one bit on the way
//! let flipped = !sent[4];
//! sent.set(4, flipped);
//!
//! let decoded = codec.decode(&sent).unwrap();
//! assert_eq!(decoded.status, DecodeStatus::Corrected);
//! assert_eq!(decoded.data, Some(data));
//! ```

use bitvec::prelude::*;

pub use crate::error::{Error, Result};

/// A word of bits as exchanged with the codec.
pub type Word = BitVec<u8, Msb0>;

/// Borrowed view of a [`Word`].
pub type Bits = BitSlice<u8, Msb0>;

/// Trait for block codes that map fixed-size data words to fixed-size blocks
pub trait BlockCode {
    /// Outcome of decoding one block
    type Decoded;

    /// Number of data bits per block
    fn data_len(&self) -> usize;

    /// Number of transmitted bits per block
    fn block_len(&self) -> usize;

    /// Encode one data word into a transmitted block
    fn encode(&self, data: &Bits) -> Result<Word>;

    /// Decode one received block, correcting errors if possible
    fn decode(&self, received: &Bits) -> Result<Self::Decoded>;
}

/// Dense GF(2) matrices
pub mod gf2;

/// Gauss-Jordan reduction of generator matrices
pub mod systematic;

/// Parity-check matrix construction
pub mod parity_check;

/// The (10,6) Hamming-style codec
pub mod hamming;

pub use gf2::BitMatrix;
pub use hamming::{
    construct_codec, word, DecodeStatus, Decoded, Framing, HammingCode,
    NON_SYSTEMATIC_GENERATOR,
};
pub use parity_check::{derive_parity_check, verify_orthogonal};
pub use systematic::{is_systematic, systematize};
