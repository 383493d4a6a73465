//! (10,6) Hamming-style code with syndrome decoding.
//!
//! The code is defined by a hand-specified, non-systematic 6×10 generator
//! matrix. At construction it is reduced to `G = [I_6 | P]` and the
//! parity-check matrix `H = [Pᵗ | I_4]` is derived; both are immutable for the
//! lifetime of the codec. Every column of `H` is distinct and non-zero, so any
//! single-bit error yields a syndrome equal to exactly one column and can be
//! corrected.
//!
//! This implementation provides:
//! - Systematic encoding of 6-bit data words into 10-bit codewords
//! - Syndrome decoding with single-bit error correction
//! - An optional extended framing with an overall parity bit that turns the
//!   code into a single-error-correcting, double-error-detecting (SECDED) one
//!
//! # Applications
//!
//! - Short command and sensor words on lossy robot links
//! - Any channel where a retransmission request is cheaper than a larger code

use crate::ecc::gf2::{bits_from_values, BitMatrix};
use crate::ecc::parity_check::{derive_parity_check, verify_orthogonal};
use crate::ecc::systematic::systematize;
use crate::ecc::{BlockCode, Bits, Word};
use crate::error::{Error, Result};
use std::fmt::{Display, Formatter};

/// The non-systematic generator matrix `G'` the link code is built from.
pub const NON_SYSTEMATIC_GENERATOR: [[u8; 10]; 6] = [
    [1, 1, 1, 0, 0, 0, 0, 1, 0, 0],
    [0, 1, 0, 0, 1, 0, 0, 1, 0, 0],
    [1, 0, 0, 1, 0, 1, 0, 0, 0, 0],
    [0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
    [1, 1, 0, 1, 0, 0, 0, 1, 1, 0],
    [1, 0, 0, 1, 0, 0, 0, 1, 0, 1],
];

/// Outcome of decoding one received word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeStatus {
    /// Zero syndrome, the word is a codeword.
    Valid,
    /// A single-bit error was located and flipped back.
    Corrected,
    /// The error pattern is outside what the code can correct.
    Uncorrectable,
}

impl DecodeStatus {
    /// Short result code used on the link.
    pub fn code(&self) -> &'static str {
        match self {
            DecodeStatus::Valid => "OK",
            DecodeStatus::Corrected => "FIXED",
            DecodeStatus::Uncorrectable => "ERROR",
        }
    }
}

impl Display for DecodeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of [`HammingCode::decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The recovered data word, `None` when uncorrectable.
    pub data: Option<Word>,
    /// Whether the word was valid, corrected or uncorrectable.
    pub status: DecodeStatus,
    /// Index of the flipped bit for [`DecodeStatus::Corrected`].
    pub error_position: Option<usize>,
}

impl Decoded {
    fn valid(data: Word) -> Self {
        Decoded {
            data: Some(data),
            status: DecodeStatus::Valid,
            error_position: None,
        }
    }

    fn corrected(data: Word, position: usize) -> Self {
        Decoded {
            data: Some(data),
            status: DecodeStatus::Corrected,
            error_position: Some(position),
        }
    }

    fn uncorrectable() -> Self {
        Decoded {
            data: None,
            status: DecodeStatus::Uncorrectable,
            error_position: None,
        }
    }

    /// Splits into the `(data, status)` pair consumers usually match on.
    pub fn into_parts(self) -> (Option<Word>, DecodeStatus) {
        (self.data, self.status)
    }
}

/// How codewords are laid out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Framing {
    /// Bare n-bit codewords.
    #[default]
    Plain,
    /// n-bit codeword followed by an overall parity bit. The bit is 1 iff the
    /// codeword has even weight, so every transmitted word has odd weight.
    Extended,
}

/// A systematic linear block code with cached generator and parity-check
/// matrices.
#[derive(Debug, Clone)]
pub struct HammingCode {
    generator: BitMatrix,
    parity_check: BitMatrix,
    framing: Framing,
}

impl HammingCode {
    /// Builds the (10,6) link code with plain framing.
    pub fn new() -> Result<Self> {
        Self::with_framing(Framing::Plain)
    }

    /// Builds the (10,6) link code with the SECDED parity bit appended.
    pub fn extended() -> Result<Self> {
        Self::with_framing(Framing::Extended)
    }

    /// Builds the (10,6) link code with the given framing.
    pub fn with_framing(framing: Framing) -> Result<Self> {
        let generator = BitMatrix::from_rows(&NON_SYSTEMATIC_GENERATOR)?;
        Self::from_generator(&generator, framing)
    }

    /// Builds a code from any k×n generator whose left k×k block is
    /// invertible over GF(2).
    ///
    /// # Arguments
    ///
    /// * `generator` - Non-systematic (or systematic) generator matrix
    /// * `framing` - Whether to append the overall parity bit
    ///
    /// # Returns
    ///
    /// The codec, or an error if the generator cannot be brought into
    /// systematic form
    pub fn from_generator(generator: &BitMatrix, framing: Framing) -> Result<Self> {
        let g = systematize(generator)?;
        let h = derive_parity_check(&g)?;
        verify_orthogonal(&g, &h)?;

        let k = g.rows();
        let n = g.cols();
        if h.rows() != n - k || h.cols() != n {
            return Err(Error::InvalidInput(format!(
                "Parity-check matrix is {}x{}, expected {}x{}",
                h.rows(),
                h.cols(),
                n - k,
                n
            )));
        }

        let columns: Vec<Word> = h.iter_columns().collect();
        for (i, col) in columns.iter().enumerate() {
            if col.not_any() {
                log::warn!("parity-check column {} is zero; errors there go undetected", i);
            }
            if columns[..i].contains(col) {
                log::warn!(
                    "parity-check column {} repeats an earlier column; the first match wins",
                    i
                );
            }
        }

        log::debug!(
            "constructed ({},{}) code with {} parity checks, {:?} framing",
            n,
            k,
            h.rows(),
            framing
        );

        Ok(HammingCode {
            generator: g,
            parity_check: h,
            framing,
        })
    }

    /// The systematic generator matrix `[I_k | P]`.
    pub fn generator(&self) -> &BitMatrix {
        &self.generator
    }

    /// The parity-check matrix `[Pᵗ | I_{n-k}]`.
    pub fn parity_check(&self) -> &BitMatrix {
        &self.parity_check
    }

    /// Wire layout of transmitted words.
    pub fn framing(&self) -> Framing {
        self.framing
    }

    /// k
    pub fn data_bits(&self) -> usize {
        self.generator.rows()
    }

    /// n
    pub fn total_bits(&self) -> usize {
        self.generator.cols()
    }

    /// n − k, the number of rows of `H`.
    pub fn parity_bits(&self) -> usize {
        self.parity_check.rows()
    }

    /// Length of a transmitted word, including the overall parity bit when
    /// extended.
    pub fn codeword_len(&self) -> usize {
        match self.framing {
            Framing::Plain => self.total_bits(),
            Framing::Extended => self.total_bits() + 1,
        }
    }

    /// Computes `H · r[0..n]ᵗ`.
    pub fn syndrome(&self, received: &Bits) -> Result<Word> {
        self.parity_check.mul_vec(received)
    }

    /// Encodes a k-bit data word.
    ///
    /// Each output bit is the parity of the data word against one column of
    /// `G`; the first k bits reproduce the data word. A word of the wrong
    /// length is rejected and the codec remains usable.
    pub fn encode(&self, data: &Bits) -> Result<Word> {
        let k = self.data_bits();
        if data.len() != k {
            log::warn!(
                "incorrect source word length: got {} bits, expected {}",
                data.len(),
                k
            );
            return Err(Error::LengthMismatch {
                expected: k,
                actual: data.len(),
            });
        }

        let mut codeword = self.generator.vec_mul(data)?;
        if self.framing == Framing::Extended {
            let even = codeword.count_ones() % 2 == 0;
            codeword.push(even);
        }
        Ok(codeword)
    }

    /// Decodes a received word, correcting a single-bit error.
    ///
    /// Only the first [`codeword_len`](Self::codeword_len) bits are read;
    /// trailing bits are ignored. The caller's buffer is never modified.
    /// An uncorrectable word is an `Ok` result with
    /// [`DecodeStatus::Uncorrectable`].
    pub fn decode(&self, received: &Bits) -> Result<Decoded> {
        let needed = self.codeword_len();
        if received.len() < needed {
            log::warn!(
                "received word too short: got {} bits, need at least {}",
                received.len(),
                needed
            );
            return Err(Error::LengthMismatch {
                expected: needed,
                actual: received.len(),
            });
        }

        let n = self.total_bits();
        let syndrome = self.syndrome(&received[..n])?;
        let location = self.locate(&syndrome);

        let decoded = match self.framing {
            Framing::Plain => self.classify(&received[..n], &syndrome, location),
            Framing::Extended => {
                // Valid transmitted words have odd weight
                let parity_ok = received[..=n].count_ones() % 2 == 1;
                match (syndrome.not_any(), parity_ok) {
                    (true, true) => self.classify(&received[..n], &syndrome, None),
                    (true, false) => {
                        log::trace!("overall parity bit {} flipped", n);
                        Decoded::corrected(received[..self.data_bits()].to_bitvec(), n)
                    }
                    (false, false) => self.classify(&received[..n], &syndrome, location),
                    (false, true) => {
                        log::trace!("double error detected, syndrome {:b}", syndrome);
                        Decoded::uncorrectable()
                    }
                }
            }
        };

        Ok(decoded)
    }

    /// First column of `H` equal to `syndrome`, scanning left to right.
    fn locate(&self, syndrome: &Bits) -> Option<usize> {
        if syndrome.not_any() {
            return None;
        }
        self.parity_check
            .iter_columns()
            .position(|col| col.as_bitslice() == syndrome)
    }

    fn classify(&self, word: &Bits, syndrome: &Bits, location: Option<usize>) -> Decoded {
        let k = self.data_bits();
        if syndrome.not_any() {
            return Decoded::valid(word[..k].to_bitvec());
        }

        match location {
            Some(i) => {
                log::trace!("correcting bit {}, syndrome {:b}", i, syndrome);
                let mut corrected = word.to_bitvec();
                let bit = corrected[i];
                corrected.set(i, !bit);
                corrected.truncate(k);
                Decoded::corrected(corrected, i)
            }
            None => {
                log::trace!("syndrome {:b} matches no column", syndrome);
                Decoded::uncorrectable()
            }
        }
    }
}

impl BlockCode for HammingCode {
    type Decoded = Decoded;

    fn data_len(&self) -> usize {
        self.data_bits()
    }

    fn block_len(&self) -> usize {
        self.codeword_len()
    }

    fn encode(&self, data: &Bits) -> Result<Word> {
        HammingCode::encode(self, data)
    }

    fn decode(&self, received: &Bits) -> Result<Decoded> {
        HammingCode::decode(self, received)
    }
}

/// Builds the (10,6) link code with plain framing.
pub fn construct_codec() -> Result<HammingCode> {
    HammingCode::new()
}

/// Builds a word from `0`/`1` values, e.g. `word(&[0, 1, 1, 0, 1, 1])`.
pub fn word(values: &[u8]) -> Result<Word> {
    bits_from_values(values)
}
