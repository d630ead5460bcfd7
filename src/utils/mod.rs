//! Utilities for converting between our matrix format and external libraries

use crate::matrix::{DenseMatrix, MatrixError};
use ndarray::Array2;
use num_traits::Num;

/// Converts a dense matrix to an ndarray `Array2`
pub fn to_ndarray<T>(matrix: &DenseMatrix<T>) -> Array2<T>
where
    T: Copy + Num,
{
    let n = matrix.dim();
    Array2::from_shape_fn((n, n), |(i, j)| matrix.get(i, j))
}

/// Converts an ndarray `Array2` to a dense matrix
///
/// Fails with [`MatrixError::NonSquare`] if the array is not square; the
/// dense format only models square matrices.
pub fn from_ndarray<T>(array: &Array2<T>) -> Result<DenseMatrix<T>, MatrixError>
where
    T: Copy + Num,
{
    let (rows, cols) = (array.nrows(), array.ncols());
    if rows != cols {
        return Err(MatrixError::NonSquare { rows, cols });
    }

    let mut matrix = DenseMatrix::zeros(rows);
    for i in 0..rows {
        for j in 0..cols {
            matrix.set(i, j, array[(i, j)]);
        }
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_round_trip() {
        let m = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let arr = to_ndarray(&m);
        assert_eq!(arr, array![[1.0, 2.0], [3.0, 4.0]]);

        let back = from_ndarray(&arr).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_non_square_rejected() {
        let arr = Array2::<f64>::zeros((2, 3));
        assert_eq!(
            from_ndarray(&arr),
            Err(MatrixError::NonSquare { rows: 2, cols: 3 })
        );
    }
}
