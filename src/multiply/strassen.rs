//! Strassen's recursive matrix multiplication
//!
//! Both operands are split into quadrants, seven half-size products are
//! formed from specific quadrant sums and differences, and the output
//! quadrants are recombined from those products. The recursion halves the
//! dimension each level, so it terminates at the scalar base case after
//! log2(n) levels with overall cost ≈ O(n^log2(7)).
//!
//! The dimension must divide evenly at every recursion level, i.e. callers
//! should use power-of-two matrices. This is a documented precondition, not
//! something the algorithm repairs: an odd dimension at any depth surfaces
//! as [`MatrixError::InvalidDimension`]. Pad irregular inputs first with
//! [`DenseMatrix::padded`].

use num_traits::Num;
use std::ops::AddAssign;

use crate::matrix::{DenseMatrix, MatrixError};
use crate::multiply::reference::multiply;

/// Multiplies two square matrices with Strassen's algorithm
///
/// # Arguments
///
/// * `a` - Left operand
/// * `b` - Right operand, same dimension as `a`
///
/// # Returns
///
/// The product `A×B`, [`MatrixError::DimensionMismatch`] if the operands
/// differ in dimension, or [`MatrixError::InvalidDimension`] if an odd
/// dimension is reached before the scalar base case.
pub fn strassen_multiply<T>(
    a: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
) -> Result<DenseMatrix<T>, MatrixError>
where
    T: Copy + Num + AddAssign,
{
    strassen_with_cutoff(a, b, 1)
}

/// Strassen recursion with a cubic base case at `cutoff`
///
/// At `cutoff = 1` this is plain Strassen (the 1×1 cubic product is the
/// scalar base case). Larger cutoffs bottom the recursion out early, which
/// is how the hybrid dispatcher prunes recursion depth for small
/// sub-products.
pub(crate) fn strassen_with_cutoff<T>(
    a: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
    cutoff: usize,
) -> Result<DenseMatrix<T>, MatrixError>
where
    T: Copy + Num + AddAssign,
{
    if a.dim() != b.dim() {
        return Err(MatrixError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }

    let n = a.dim();
    if n == 1 || n <= cutoff {
        return multiply(a, b);
    }

    let (a11, a12, a21, a22) = a.split()?;
    let (b11, b12, b21, b22) = b.split()?;

    // The seven Strassen products. Kept in M1..M7 order for numerical
    // reproducibility.
    let m1 = strassen_with_cutoff(&a11.add(&a22)?, &b11.add(&b22)?, cutoff)?;
    let m2 = strassen_with_cutoff(&a21.add(&a22)?, &b11, cutoff)?;
    let m3 = strassen_with_cutoff(&a11, &b12.sub(&b22)?, cutoff)?;
    let m4 = strassen_with_cutoff(&a22, &b21.sub(&b11)?, cutoff)?;
    let m5 = strassen_with_cutoff(&a11.add(&a12)?, &b22, cutoff)?;
    let m6 = strassen_with_cutoff(&a21.sub(&a11)?, &b11.add(&b12)?, cutoff)?;
    let m7 = strassen_with_cutoff(&a12.sub(&a22)?, &b21.add(&b22)?, cutoff)?;

    combine(&m1, &m2, &m3, &m4, &m5, &m6, &m7)
}

/// Recombines the seven sub-products into the joined result
///
/// C11 = M1+M4−M5+M7, C12 = M3+M5, C21 = M2+M4, C22 = M1−M2+M3+M6.
pub(crate) fn combine<T>(
    m1: &DenseMatrix<T>,
    m2: &DenseMatrix<T>,
    m3: &DenseMatrix<T>,
    m4: &DenseMatrix<T>,
    m5: &DenseMatrix<T>,
    m6: &DenseMatrix<T>,
    m7: &DenseMatrix<T>,
) -> Result<DenseMatrix<T>, MatrixError>
where
    T: Copy + Num,
{
    let c11 = m1.add(m4)?.sub(m5)?.add(m7)?;
    let c12 = m3.add(m5)?;
    let c21 = m2.add(m4)?;
    let c22 = m1.sub(m2)?.add(m3)?.add(m6)?;

    DenseMatrix::join(&c11, &c12, &c21, &c22)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_by_two() {
        // Same worked example the reference implementation is tested with
        let a = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = DenseMatrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]);

        let c = strassen_multiply(&a, &b).unwrap();
        assert_eq!(c, DenseMatrix::from_rows(&[vec![19.0, 22.0], vec![43.0, 50.0]]));
    }

    #[test]
    fn test_scalar_base_case() {
        let a = DenseMatrix::from_vec(1, vec![7.0]);
        let b = DenseMatrix::from_vec(1, vec![6.0]);
        assert_eq!(strassen_multiply(&a, &b).unwrap().get(0, 0), 42.0);
    }

    #[test]
    fn test_matches_reference_four_by_four() {
        let a = DenseMatrix::<f64>::from_rows(&[
            vec![2.0, 0.0, 1.0, 3.0],
            vec![1.0, 4.0, 0.0, 2.0],
            vec![0.0, 1.0, 3.0, 1.0],
            vec![5.0, 2.0, 1.0, 0.0],
        ]);
        let b = DenseMatrix::from_rows(&[
            vec![1.0, 2.0, 0.0, 1.0],
            vec![0.0, 1.0, 2.0, 3.0],
            vec![4.0, 0.0, 1.0, 2.0],
            vec![1.0, 1.0, 0.0, 0.0],
        ]);

        let expected = multiply(&a, &b).unwrap();
        let got = strassen_multiply(&a, &b).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                let diff: f64 = (got.get(i, j) - expected.get(i, j)).abs();
                assert!(diff < 1.0e-10);
            }
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = DenseMatrix::<f64>::zeros(4);
        let b = DenseMatrix::<f64>::zeros(2);
        assert_eq!(
            strassen_multiply(&a, &b),
            Err(MatrixError::DimensionMismatch { left: 4, right: 2 })
        );
    }

    #[test]
    fn test_odd_dimension_rejected() {
        // 6 splits once into 3×3 quadrants, which cannot split again
        let a = DenseMatrix::<f64>::identity(6);
        let b = DenseMatrix::<f64>::identity(6);
        assert_eq!(
            strassen_multiply(&a, &b),
            Err(MatrixError::InvalidDimension { dim: 3 })
        );
    }

    #[test]
    fn test_padded_odd_input() {
        // The documented remedy for irregular sizes: pad to a power of two,
        // multiply, read back the top-left corner.
        let a = DenseMatrix::from_rows(&[
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ]);
        let b = DenseMatrix::<f64>::identity(3);

        let target = a.next_power_of_two_dim();
        let product = strassen_multiply(&a.padded(target).unwrap(), &b.padded(target).unwrap())
            .unwrap();

        for i in 0..3 {
            for j in 0..3 {
                let diff: f64 = (product.get(i, j) - a.get(i, j)).abs();
                assert!(diff < 1.0e-10);
            }
        }
    }
}
