//! Dense matrices over GF(2).
//!
//! Addition is XOR and multiplication is AND, so a row operation is a plain
//! row XOR and no scaling step ever exists. Rows are stored as `BitVec`s in
//! row-major order.

use crate::ecc::{Bits, Word};
use crate::error::{Error, Result};
use bitvec::prelude::*;
use std::fmt::{Display, Formatter};
use std::ops::Range;

/// A rows × cols matrix of bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Word>,
}

impl BitMatrix {
    /// Creates an all-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        BitMatrix {
            rows,
            cols,
            data: vec![bitvec![u8, Msb0; 0; cols]; rows],
        }
    }

    /// Creates the `size` × `size` identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 0..size {
            m.data[i].set(i, true);
        }
        m
    }

    /// Builds a matrix from rows of `0`/`1` values.
    ///
    /// # Arguments
    ///
    /// * `rows` - Row slices, all of the same non-zero length
    ///
    /// # Returns
    ///
    /// The matrix, or an error if the input is empty, ragged, or contains a
    /// value other than 0 or 1
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::InvalidInput("Matrix cannot be empty".to_string()));
        }

        let cols = rows[0].as_ref().len();
        if cols == 0 {
            return Err(Error::InvalidInput(
                "Matrix rows cannot be empty".to_string(),
            ));
        }

        let mut data = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::InvalidInput(format!(
                    "Row {} has {} columns, expected {}",
                    r,
                    row.len(),
                    cols
                )));
            }
            data.push(bits_from_values(row)?);
        }

        Ok(BitMatrix {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Reads the bit at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.data[row][col]
    }

    /// Borrows row `r`.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows`.
    pub fn row(&self, r: usize) -> &Bits {
        &self.data[r]
    }

    /// Copies column `c` out as a word of length `rows`.
    ///
    /// # Panics
    ///
    /// Panics if `c >= cols`.
    pub fn column(&self, c: usize) -> Word {
        self.data.iter().map(|row| row[c]).collect()
    }

    /// Iterates over all columns from left to right.
    pub fn iter_columns(&self) -> impl Iterator<Item = Word> + '_ {
        (0..self.cols).map(move |c| self.column(c))
    }

    /// Returns the cols × rows transpose as a new matrix.
    pub fn transpose(&self) -> Self {
        let mut t = Self::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in self.data[r].iter_ones() {
                t.data[c].set(r, true);
            }
        }
        t
    }

    /// Returns the submatrix formed by the rows in `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` extends past `rows`.
    pub fn row_range(&self, range: Range<usize>) -> Self {
        let data: Vec<Word> = self.data[range].to_vec();
        BitMatrix {
            rows: data.len(),
            cols: self.cols,
            data,
        }
    }

    /// Returns the submatrix formed by the columns in `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` extends past `cols`.
    pub fn column_range(&self, range: Range<usize>) -> Self {
        let cols = range.len();
        let data = self
            .data
            .iter()
            .map(|row| row[range.clone()].to_bitvec())
            .collect();
        BitMatrix {
            rows: self.rows,
            cols,
            data,
        }
    }

    /// Concatenates `other` to the right of `self`.
    pub fn hconcat(&self, other: &BitMatrix) -> Result<Self> {
        if self.rows != other.rows {
            return Err(Error::InvalidInput(format!(
                "Cannot concatenate a {}-row matrix with a {}-row matrix",
                self.rows, other.rows
            )));
        }

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(left, right)| {
                let mut row = left.clone();
                row.extend_from_bitslice(right);
                row
            })
            .collect();

        Ok(BitMatrix {
            rows: self.rows,
            cols: self.cols + other.cols,
            data,
        })
    }

    /// Exchanges rows `a` and `b`.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    /// Row operation `row[dst] ← row[dst] XOR row[src]`.
    pub fn xor_row_into(&mut self, src: usize, dst: usize) {
        if src == dst {
            // x XOR x = 0
            self.data[dst].fill(false);
            return;
        }
        for c in 0..self.cols {
            if self.data[src][c] {
                let bit = self.data[dst][c];
                self.data[dst].set(c, !bit);
            }
        }
    }

    /// Computes `M · vᵗ`, one output bit per row.
    ///
    /// Only the first `cols` bits of `v` are read.
    pub fn mul_vec(&self, v: &Bits) -> Result<Word> {
        if v.len() < self.cols {
            return Err(Error::LengthMismatch {
                expected: self.cols,
                actual: v.len(),
            });
        }
        let v = &v[..self.cols];
        Ok(self.data.iter().map(|row| dot(row, v)).collect())
    }

    /// Computes `v · M`, one output bit per column.
    pub fn vec_mul(&self, v: &Bits) -> Result<Word> {
        if v.len() != self.rows {
            return Err(Error::LengthMismatch {
                expected: self.rows,
                actual: v.len(),
            });
        }

        let mut out = bitvec![u8, Msb0; 0; self.cols];
        for r in v.iter_ones() {
            for c in self.data[r].iter_ones() {
                let bit = out[c];
                out.set(c, !bit);
            }
        }
        Ok(out)
    }

    /// Computes `self · otherᵗ`.
    pub fn mul_transpose(&self, other: &BitMatrix) -> Result<Self> {
        if self.cols != other.cols {
            return Err(Error::InvalidInput(format!(
                "Cannot multiply a {}-column matrix by the transpose of a {}-column matrix",
                self.cols, other.cols
            )));
        }

        let mut out = Self::zeros(self.rows, other.rows);
        for (i, a) in self.data.iter().enumerate() {
            for (j, b) in other.data.iter().enumerate() {
                out.data[i].set(j, dot(a, b));
            }
        }
        Ok(out)
    }

    /// True if every entry is 0.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|row| row.not_any())
    }
}

impl Display for BitMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in &self.data {
            for bit in row.iter().by_vals() {
                write!(f, "{}", u8::from(bit))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Inner product over GF(2): parity of the bitwise AND.
pub fn dot(a: &Bits, b: &Bits) -> bool {
    a.iter()
        .by_vals()
        .zip(b.iter().by_vals())
        .filter(|&(x, y)| x && y)
        .count()
        % 2
        == 1
}

/// Converts a slice of `0`/`1` integers into a word.
pub fn bits_from_values(values: &[u8]) -> Result<Word> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| match v {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(Error::InvalidInput(format!(
                "Bit {} has value {}, expected 0 or 1",
                i, other
            ))),
        })
        .collect()
}
