//! Reduction of a generator matrix to systematic form.
//!
//! A generator matrix `G'` (k×n, full row rank) spans the same code as any
//! matrix obtained from it by row operations. Gauss-Jordan elimination over
//! GF(2) turns the left k×k block into the identity, giving `G = [I_k | P]`,
//! so the data word appears unchanged as the codeword prefix.

use crate::ecc::gf2::BitMatrix;
use crate::error::{Error, Result};

/// Row-reduces `generator` into `[I_k | P]`.
///
/// For each column `c` of the left block the first row at or below `c` with a
/// 1 in that column becomes the pivot; it is swapped into row `c` and XORed
/// into every other row that has a 1 in column `c`. The input is not modified.
///
/// # Arguments
///
/// * `generator` - A k×n generator matrix with k ≤ n
///
/// # Returns
///
/// The systematic generator matrix, or [`Error::SingularGenerator`] if the left
/// k×k block is not invertible over GF(2)
pub fn systematize(generator: &BitMatrix) -> Result<BitMatrix> {
    let k = generator.rows();
    let n = generator.cols();

    if k > n {
        return Err(Error::InvalidInput(format!(
            "Generator has more rows ({}) than columns ({})",
            k, n
        )));
    }

    let mut g = generator.clone();

    for col in 0..k {
        let pivot = (col..k)
            .find(|&r| g.get(r, col))
            .ok_or(Error::SingularGenerator { column: col })?;

        if pivot != col {
            g.swap_rows(pivot, col);
        }

        for row in 0..k {
            if row != col && g.get(row, col) {
                g.xor_row_into(col, row);
            }
        }
    }

    log::debug!("systematized {}x{} generator matrix", k, n);
    Ok(g)
}

/// Returns true if the left `rows × rows` block of `matrix` is the identity.
pub fn is_systematic(matrix: &BitMatrix) -> bool {
    let k = matrix.rows();
    k <= matrix.cols() && matrix.column_range(0..k) == BitMatrix::identity(k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_systematic() -> BitMatrix {
        BitMatrix::from_rows(&[
            [1u8, 1, 1, 0, 0, 0, 0, 1, 0, 0],
            [0, 1, 0, 0, 1, 0, 0, 1, 0, 0],
            [1, 0, 0, 1, 0, 1, 0, 0, 0, 0],
            [0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
            [1, 1, 0, 1, 0, 0, 0, 1, 1, 0],
            [1, 0, 0, 1, 0, 0, 0, 1, 0, 1],
        ])
        .unwrap()
    }

    #[test]
    fn test_systematize_embedded_matrix() {
        let g = systematize(&non_systematic()).unwrap();
        let expected = BitMatrix::from_rows(&[
            [1u8, 0, 0, 0, 0, 0, 1, 0, 0, 1],
            [0, 1, 0, 0, 0, 0, 0, 0, 1, 1],
            [0, 0, 1, 0, 0, 0, 1, 1, 1, 0],
            [0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
            [0, 0, 0, 0, 1, 0, 0, 1, 1, 1],
            [0, 0, 0, 0, 0, 1, 0, 1, 0, 1],
        ])
        .unwrap();
        assert_eq!(g, expected);
        assert!(is_systematic(&g));
        assert!(!is_systematic(&non_systematic()));
    }

    #[test]
    fn test_input_left_untouched() {
        let original = non_systematic();
        let copy = original.clone();
        let _ = systematize(&original).unwrap();
        assert_eq!(original, copy);
    }

    #[test]
    fn test_already_systematic_is_fixed_point() {
        let g = systematize(&non_systematic()).unwrap();
        assert_eq!(systematize(&g).unwrap(), g);
    }

    #[test]
    fn test_pivot_requires_row_swap() {
        // Column 0 only has a 1 in the last row
        let m = BitMatrix::from_rows(&[[0u8, 1, 1, 0], [1, 1, 0, 1]]).unwrap();
        let g = systematize(&m).unwrap();
        assert_eq!(
            g,
            BitMatrix::from_rows(&[[1u8, 0, 1, 1], [0, 1, 1, 0]]).unwrap()
        );
    }

    #[test]
    fn test_singular_left_block() {
        // Rows 0 and 1 are equal on the left block
        let m = BitMatrix::from_rows(&[
            [1u8, 1, 0, 1, 0],
            [1, 1, 0, 0, 1],
            [0, 0, 1, 1, 1],
        ])
        .unwrap();
        assert_eq!(
            systematize(&m),
            Err(Error::SingularGenerator { column: 1 })
        );
    }

    #[test]
    fn test_more_rows_than_columns() {
        let tall = BitMatrix::from_rows(&[[1u8, 0], [0, 1], [1, 1]]).unwrap();
        assert!(matches!(systematize(&tall), Err(Error::InvalidInput(_))));
    }
}
