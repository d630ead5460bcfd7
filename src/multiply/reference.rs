//! Reference implementation of dense multiplication
//!
//! This provides a baseline for correctness testing and performance
//! comparison. The classic triple loop is O(n³) but correct for every
//! dimension n >= 1, so the recursive strategies are validated against it.

use num_traits::Num;
use std::ops::AddAssign;

use crate::matrix::{DenseMatrix, MatrixError};

/// Multiplies two square matrices with the cubic schoolbook algorithm
///
/// Every output cell (i, j) accumulates `Σ_k A[i,k]·B[k,j]`. Uses O(n²)
/// extra space for the result and nothing else.
///
/// # Arguments
///
/// * `a` - Left operand
/// * `b` - Right operand, same dimension as `a`
///
/// # Returns
///
/// The product `A×B`, or [`MatrixError::DimensionMismatch`] if the
/// operands differ in dimension.
pub fn multiply<T>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> Result<DenseMatrix<T>, MatrixError>
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
    let mut result = DenseMatrix::zeros(n);

    for i in 0..n {
        for j in 0..n {
            let mut sum = T::zero();
            for k in 0..n {
                sum += a.get(i, k) * b.get(k, j);
            }
            result.set(i, j, sum);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_by_two() {
        // [[1,2],[3,4]] * [[5,6],[7,8]] = [[19,22],[43,50]]
        let a = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = DenseMatrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]);

        let c = multiply(&a, &b).unwrap();
        assert_eq!(c, DenseMatrix::from_rows(&[vec![19.0, 22.0], vec![43.0, 50.0]]));
    }

    #[test]
    fn test_identity_multiplication() {
        let a = DenseMatrix::from_rows(&[
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ]);
        let id = DenseMatrix::<f64>::identity(3);

        assert_eq!(multiply(&a, &id).unwrap(), a);
        assert_eq!(multiply(&id, &a).unwrap(), a);
    }

    #[test]
    fn test_one_by_one() {
        let a = DenseMatrix::from_vec(1, vec![3.0]);
        let b = DenseMatrix::from_vec(1, vec![-2.0]);
        assert_eq!(multiply(&a, &b).unwrap().get(0, 0), -6.0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = DenseMatrix::<f64>::zeros(2);
        let b = DenseMatrix::<f64>::zeros(4);
        assert_eq!(
            multiply(&a, &b),
            Err(MatrixError::DimensionMismatch { left: 2, right: 4 })
        );
    }
}
