//! Parity-check matrix derivation.
//!
//! For a systematic generator `G = [I_k | P]` the matrix `H = [Pᵗ | I_{n-k}]`
//! satisfies `G · Hᵗ = P + P = 0` over GF(2), so its null space is exactly the
//! code.

use crate::ecc::gf2::BitMatrix;
use crate::ecc::systematic::is_systematic;
use crate::error::{Error, Result};

/// Builds `H = [Pᵗ | I_{n-k}]` from a systematic generator matrix.
///
/// `Pᵗ` is read off the transpose of `G`: rows `k..n` of `Gᵗ` are the columns
/// of `P`.
pub fn derive_parity_check(generator: &BitMatrix) -> Result<BitMatrix> {
    if !is_systematic(generator) {
        return Err(Error::NotSystematic);
    }

    let k = generator.rows();
    let n = generator.cols();
    if n == k {
        return Err(Error::InvalidInput(
            "Generator has no parity columns".to_string(),
        ));
    }

    let p_t = generator.transpose().row_range(k..n);
    let h = p_t.hconcat(&BitMatrix::identity(n - k))?;

    log::debug!("derived {}x{} parity-check matrix", h.rows(), h.cols());
    Ok(h)
}

/// Checks that `G · Hᵗ` is the zero matrix.
pub fn verify_orthogonal(generator: &BitMatrix, parity_check: &BitMatrix) -> Result<()> {
    if generator.mul_transpose(parity_check)?.is_zero() {
        Ok(())
    } else {
        Err(Error::NotOrthogonal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecc::systematic::systematize;

    fn generator() -> BitMatrix {
        BitMatrix::from_rows(&[
            [1u8, 0, 0, 0, 0, 0, 1, 0, 0, 1],
            [0, 1, 0, 0, 0, 0, 0, 0, 1, 1],
            [0, 0, 1, 0, 0, 0, 1, 1, 1, 0],
            [0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
            [0, 0, 0, 0, 1, 0, 0, 1, 1, 1],
            [0, 0, 0, 0, 0, 1, 0, 1, 0, 1],
        ])
        .unwrap()
    }

    #[test]
    fn test_derive_embedded_parity_check() {
        let h = derive_parity_check(&generator()).unwrap();
        let expected = BitMatrix::from_rows(&[
            [1u8, 0, 1, 1, 0, 0, 1, 0, 0, 0],
            [0, 0, 1, 1, 1, 1, 0, 1, 0, 0],
            [0, 1, 1, 0, 1, 0, 0, 0, 1, 0],
            [1, 1, 0, 0, 1, 1, 0, 0, 0, 1],
        ])
        .unwrap();
        assert_eq!(h, expected);
        assert_eq!(h.column_range(6..10), BitMatrix::identity(4));
        assert!(verify_orthogonal(&generator(), &h).is_ok());
    }

    #[test]
    fn test_columns_are_distinct() {
        let h = derive_parity_check(&generator()).unwrap();
        let columns: Vec<_> = h.iter_columns().collect();
        for i in 0..columns.len() {
            assert!(columns[i].any());
            for j in (i + 1)..columns.len() {
                assert_ne!(columns[i], columns[j]);
            }
        }
    }

    #[test]
    fn test_small_code() {
        // (7,4) Hamming code in a non-systematic row order
        let g = systematize(
            &BitMatrix::from_rows(&[
                [0u8, 1, 0, 0, 1, 0, 1],
                [1, 0, 0, 0, 1, 1, 0],
                [0, 0, 1, 0, 0, 1, 1],
                [0, 0, 0, 1, 1, 1, 1],
            ])
            .unwrap(),
        )
        .unwrap();
        let h = derive_parity_check(&g).unwrap();
        assert_eq!(h.rows(), 3);
        assert_eq!(h.cols(), 7);
        assert!(verify_orthogonal(&g, &h).is_ok());
    }

    #[test]
    fn test_rejects_non_systematic() {
        let m = BitMatrix::from_rows(&[[0u8, 1, 1], [1, 0, 1]]).unwrap();
        assert_eq!(derive_parity_check(&m), Err(Error::NotSystematic));

        assert!(matches!(
            derive_parity_check(&BitMatrix::identity(3)),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_verify_orthogonal_detects_mismatch() {
        let h = BitMatrix::identity(10).row_range(0..4);
        assert_eq!(
            verify_orthogonal(&generator(), &h),
            Err(Error::NotOrthogonal)
        );
    }
}
