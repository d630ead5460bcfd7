//! Dense square matrix storage and quadrant arithmetic
//!
//! The dense format stores every cell of an n×n matrix explicitly in a
//! single row-major buffer. All arithmetic operations allocate fresh
//! result matrices; operands are never mutated or aliased, so recursive
//! callers may hold quadrants from different levels without interaction.

use num_traits::Num;
use std::fmt;

/// Errors produced by dense matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Two operands were required to share a dimension but did not
    DimensionMismatch {
        /// Dimension of the left operand
        left: usize,
        /// Dimension of the right operand
        right: usize,
    },
    /// A quadrant split was requested on an odd-dimensioned matrix
    InvalidDimension {
        /// The offending dimension
        dim: usize,
    },
    /// An external array was not square
    NonSquare {
        /// Number of rows in the input
        rows: usize,
        /// Number of columns in the input
        cols: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::DimensionMismatch { left, right } => {
                write!(f, "matrix dimensions must match: {} vs {}", left, right)
            }
            MatrixError::InvalidDimension { dim } => {
                write!(f, "dimension {} is not divisible into quadrants", dim)
            }
            MatrixError::NonSquare { rows, cols } => {
                write!(f, "expected a square array, got {} × {}", rows, cols)
            }
        }
    }
}

impl std::error::Error for MatrixError {}

/// A dense square matrix stored in row-major order
///
/// This is the shared data model for both the multiplication family and the
/// alignment scoring table. Element access is deliberately unchecked beyond
/// the slice bounds of the backing buffer: callers are responsible for
/// keeping `i, j < dim()`, mirroring the "assume valid indices" contract of
/// the quadrant arithmetic built on top.
#[derive(Clone, PartialEq)]
pub struct DenseMatrix<T> {
    /// Matrix dimension (the matrix is n × n)
    n: usize,

    /// Cell values in row-major order (size: n * n)
    data: Vec<T>,
}

impl<T> DenseMatrix<T>
where
    T: Copy + Num,
{
    /// Creates an all-zero matrix of the given dimension
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero; the dense format has no empty matrix.
    pub fn zeros(n: usize) -> Self {
        assert!(n >= 1, "matrix dimension must be at least 1");
        Self {
            n,
            data: vec![T::zero(); n * n],
        }
    }

    /// Creates a matrix from a row-major buffer
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero or `data.len()` is not `n * n`.
    pub fn from_vec(n: usize, data: Vec<T>) -> Self {
        assert!(n >= 1, "matrix dimension must be at least 1");
        assert_eq!(data.len(), n * n, "data.len() must be n * n");
        Self { n, data }
    }

    /// Creates a matrix from nested rows
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or any row's length differs from the
    /// number of rows.
    pub fn from_rows(rows: &[Vec<T>]) -> Self {
        let n = rows.len();
        assert!(n >= 1, "matrix dimension must be at least 1");
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            assert_eq!(row.len(), n, "every row must have length n");
            data.extend_from_slice(row);
        }
        Self { n, data }
    }

    /// Creates an identity matrix of the given dimension
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m.set(i, i, T::one());
        }
        m
    }

    /// Returns the matrix dimension
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Returns the value at cell (i, j)
    ///
    /// Indices are assumed valid (`i, j < dim()`); this accessor performs
    /// no bounds checking of its own.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.n + j]
    }

    /// Writes `value` into cell (i, j)
    ///
    /// Indices are assumed valid (`i, j < dim()`); this accessor performs
    /// no bounds checking of its own.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.data[i * self.n + j] = value;
    }

    /// Returns the backing buffer in row-major order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Elementwise sum, allocated fresh
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] if the operands differ
    /// in dimension.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_dim(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Self { n: self.n, data })
    }

    /// Elementwise difference, allocated fresh
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] if the operands differ
    /// in dimension.
    pub fn sub(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_dim(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Self { n: self.n, data })
    }

    /// Splits the matrix into four independent half-dimension quadrants
    ///
    /// Quadrants are returned in row-major block order: top-left, top-right,
    /// bottom-left, bottom-right. Each is a copy, not a view.
    ///
    /// Fails with [`MatrixError::InvalidDimension`] if the dimension is odd.
    pub fn split(&self) -> Result<(Self, Self, Self, Self), MatrixError> {
        if self.n % 2 != 0 {
            return Err(MatrixError::InvalidDimension { dim: self.n });
        }
        let half = self.n / 2;

        let mut q00 = Self::zeros(half);
        let mut q01 = Self::zeros(half);
        let mut q10 = Self::zeros(half);
        let mut q11 = Self::zeros(half);

        for i in 0..half {
            for j in 0..half {
                q00.set(i, j, self.get(i, j));
                q01.set(i, j, self.get(i, j + half));
                q10.set(i, j, self.get(i + half, j));
                q11.set(i, j, self.get(i + half, j + half));
            }
        }

        Ok((q00, q01, q10, q11))
    }

    /// Joins four same-dimension quadrants into one matrix, the inverse of
    /// [`DenseMatrix::split`]
    ///
    /// `q00` lands top-left, `q01` top-right, `q10` bottom-left and `q11`
    /// bottom-right; the result has twice the quadrant dimension.
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] if the quadrants do not
    /// all share one dimension.
    pub fn join(q00: &Self, q01: &Self, q10: &Self, q11: &Self) -> Result<Self, MatrixError> {
        let half = q00.n;
        for q in [q01, q10, q11] {
            if q.n != half {
                return Err(MatrixError::DimensionMismatch {
                    left: half,
                    right: q.n,
                });
            }
        }

        let mut result = Self::zeros(half * 2);
        for i in 0..half {
            for j in 0..half {
                result.set(i, j, q00.get(i, j));
                result.set(i, j + half, q01.get(i, j));
                result.set(i + half, j, q10.get(i, j));
                result.set(i + half, j + half, q11.get(i, j));
            }
        }
        Ok(result)
    }

    /// Returns a copy zero-padded to `target` dimension
    ///
    /// The original cells occupy the top-left corner. This is the intended
    /// preparation step for running the Strassen path on matrices whose
    /// dimension is not a power of two; it is never applied implicitly.
    ///
    /// Fails with [`MatrixError::InvalidDimension`] if `target` is smaller
    /// than the current dimension.
    pub fn padded(&self, target: usize) -> Result<Self, MatrixError> {
        if target < self.n {
            return Err(MatrixError::InvalidDimension { dim: target });
        }
        let mut result = Self::zeros(target);
        for i in 0..self.n {
            for j in 0..self.n {
                result.set(i, j, self.get(i, j));
            }
        }
        Ok(result)
    }

    /// Smallest power of two that is >= the current dimension
    pub fn next_power_of_two_dim(&self) -> usize {
        self.n.next_power_of_two()
    }

    fn check_same_dim(&self, other: &Self) -> Result<(), MatrixError> {
        if self.n != other.n {
            return Err(MatrixError::DimensionMismatch {
                left: self.n,
                right: other.n,
            });
        }
        Ok(())
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DenseMatrix {{")?;
        writeln!(f, "  dimension: {} × {}", self.n, self.n)?;

        // Print a sample of the matrix content
        let max_rows_to_print = 5.min(self.n);
        let max_cols_to_print = 8.min(self.n);

        writeln!(f, "  content sample:")?;
        for i in 0..max_rows_to_print {
            write!(f, "    row {}: ", i)?;
            for j in 0..max_cols_to_print {
                write!(f, "{:?} ", self.get(i, j))?;
            }
            if self.n > max_cols_to_print {
                write!(f, "... ({} more)", self.n - max_cols_to_print)?;
            }
            writeln!(f)?;
        }
        if self.n > max_rows_to_print {
            writeln!(f, "    ... ({} more rows)", self.n - max_rows_to_print)?;
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_and_access() {
        let mut m = DenseMatrix::<f64>::zeros(3);
        assert_eq!(m.dim(), 3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m.get(i, j), 0.0);
            }
        }

        m.set(1, 2, 4.5);
        assert_eq!(m.get(1, 2), 4.5);
        assert_eq!(m.get(2, 1), 0.0);
    }

    #[test]
    fn test_from_rows() {
        let m = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.get(1, 0), 3.0);
        assert_eq!(m.get(1, 1), 4.0);
    }

    #[test]
    fn test_add_sub() {
        let a = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = DenseMatrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]);

        let sum = a.add(&b).unwrap();
        assert_eq!(sum, DenseMatrix::from_rows(&[vec![6.0, 8.0], vec![10.0, 12.0]]));

        let diff = b.sub(&a).unwrap();
        assert_eq!(diff, DenseMatrix::from_rows(&[vec![4.0, 4.0], vec![4.0, 4.0]]));

        // Operands are untouched
        assert_eq!(a.get(0, 0), 1.0);
        assert_eq!(b.get(1, 1), 8.0);
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let a = DenseMatrix::<f64>::zeros(2);
        let b = DenseMatrix::<f64>::zeros(3);
        assert_eq!(
            a.add(&b),
            Err(MatrixError::DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn test_split_quadrant_order() {
        let m = DenseMatrix::from_rows(&[
            vec![1.0, 2.0, 3.0, 4.0],
            vec![5.0, 6.0, 7.0, 8.0],
            vec![9.0, 10.0, 11.0, 12.0],
            vec![13.0, 14.0, 15.0, 16.0],
        ]);

        let (q00, q01, q10, q11) = m.split().unwrap();
        assert_eq!(q00, DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![5.0, 6.0]]));
        assert_eq!(q01, DenseMatrix::from_rows(&[vec![3.0, 4.0], vec![7.0, 8.0]]));
        assert_eq!(q10, DenseMatrix::from_rows(&[vec![9.0, 10.0], vec![13.0, 14.0]]));
        assert_eq!(q11, DenseMatrix::from_rows(&[vec![11.0, 12.0], vec![15.0, 16.0]]));
    }

    #[test]
    fn test_split_odd_dimension() {
        let m = DenseMatrix::<f64>::zeros(3);
        assert_eq!(m.split(), Err(MatrixError::InvalidDimension { dim: 3 }));
    }

    #[test]
    fn test_join_inverts_split() {
        let m = DenseMatrix::from_rows(&[
            vec![1.0, 2.0, 3.0, 4.0],
            vec![5.0, 6.0, 7.0, 8.0],
            vec![9.0, 10.0, 11.0, 12.0],
            vec![13.0, 14.0, 15.0, 16.0],
        ]);

        let (q00, q01, q10, q11) = m.split().unwrap();
        let rejoined = DenseMatrix::join(&q00, &q01, &q10, &q11).unwrap();
        assert_eq!(rejoined, m);
    }

    #[test]
    fn test_join_dimension_mismatch() {
        let h = DenseMatrix::<f64>::zeros(2);
        let bad = DenseMatrix::<f64>::zeros(3);
        assert_eq!(
            DenseMatrix::join(&h, &h, &bad, &h),
            Err(MatrixError::DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn test_padded() {
        let m = DenseMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]]);
        assert_eq!(m.next_power_of_two_dim(), 4);

        let p = m.padded(4).unwrap();
        assert_eq!(p.dim(), 4);
        assert_eq!(p.get(1, 1), 5.0);
        assert_eq!(p.get(3, 3), 0.0);
        assert_eq!(p.get(0, 3), 0.0);

        assert_eq!(m.padded(2), Err(MatrixError::InvalidDimension { dim: 2 }));
    }

    #[test]
    fn test_identity() {
        let id = DenseMatrix::<f64>::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(id.get(i, j), if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    #[should_panic(expected = "matrix dimension must be at least 1")]
    fn test_zero_dimension() {
        DenseMatrix::<f64>::zeros(0);
    }

    #[test]
    #[should_panic(expected = "data.len() must be n * n")]
    fn test_inconsistent_buffer() {
        DenseMatrix::from_vec(2, vec![1.0, 2.0, 3.0]);
    }
}
