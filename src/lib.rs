//! A (10,6) systematic linear block code over GF(2) for short data words on
//! noisy links, with syndrome decoding and single-bit error correction.

pub mod ecc;
pub mod error;

pub use ecc::{construct_codec, word, DecodeStatus, Decoded, Framing, HammingCode};
pub use error::{Error, Result};
