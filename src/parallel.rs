//! # Parallel Strassen multiplication
//!
//! The seven Strassen sub-products are mutually independent: every
//! recursive call owns freshly allocated quadrant copies, so no
//! synchronization is needed to run them concurrently. This module forks
//! the sub-products onto Rayon's pool while the dimension is large enough
//! to amortize the forking cost, then drops to the sequential hybrid path.

use num_traits::Num;
use rayon::join;
use std::ops::AddAssign;

use crate::matrix::{DenseMatrix, MatrixError, MultiplyConfig};
use crate::multiply::strassen::{combine, strassen_with_cutoff};

/// Multiplies two square matrices with Strassen recursion, running the
/// seven sub-products of each level in parallel
///
/// Externally equivalent to [`crate::multiply::strassen_multiply`]: same
/// product, same error conditions, same power-of-two precondition. Below
/// `config.parallel_cutoff` the recursion stops forking and runs the
/// sequential hybrid path with `config.hybrid_cutoff`.
///
/// # Arguments
///
/// * `a` - Left operand
/// * `b` - Right operand, same dimension as `a`
/// * `config` - Cutoff configuration
///
/// # Returns
///
/// The product `A×B`, [`MatrixError::DimensionMismatch`] on unequal
/// dimensions, or [`MatrixError::InvalidDimension`] when an odd dimension
/// is reached mid-recursion.
pub fn strassen_multiply_parallel<T>(
    a: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
    config: &MultiplyConfig,
) -> Result<DenseMatrix<T>, MatrixError>
where
    T: Copy + Num + AddAssign + Send + Sync,
{
    if a.dim() != b.dim() {
        return Err(MatrixError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }

    let n = a.dim();
    if n <= config.parallel_cutoff || n == 1 {
        return strassen_with_cutoff(a, b, config.hybrid_cutoff);
    }

    let (a11, a12, a21, a22) = a.split()?;
    let (b11, b12, b21, b22) = b.split()?;

    // Operand sums and differences for M1..M7, formed up front so the
    // forked closures only borrow finished matrices.
    let s1 = a11.add(&a22)?;
    let s2 = b11.add(&b22)?;
    let s3 = a21.add(&a22)?;
    let s4 = b12.sub(&b22)?;
    let s5 = b21.sub(&b11)?;
    let s6 = a11.add(&a12)?;
    let s7 = a21.sub(&a11)?;
    let s8 = b11.add(&b12)?;
    let s9 = a12.sub(&a22)?;
    let s10 = b21.add(&b22)?;

    let rec = |x: &DenseMatrix<T>, y: &DenseMatrix<T>| strassen_multiply_parallel(x, y, config);

    let ((m1, m2), (m3, m4)) = join(
        || join(|| rec(&s1, &s2), || rec(&s3, &b11)),
        || join(|| rec(&a11, &s4), || rec(&a22, &s5)),
    );
    let ((m5, m6), m7) = join(
        || join(|| rec(&s6, &b22), || rec(&s7, &s8)),
        || rec(&s9, &s10),
    );

    combine(&m1?, &m2?, &m3?, &m4?, &m5?, &m6?, &m7?)
}
