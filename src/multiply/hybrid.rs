//! Size-gated hybrid multiplication
//!
//! Strassen's win over the cubic algorithm is asymptotic; its constant
//! factor (quadrant copies, seven recursive calls, the recombination
//! additions) loses below a machine-dependent size. The hybrid dispatcher
//! runs the cubic algorithm at or below a cutoff dimension and Strassen
//! recursion above it, with sub-products inside the recursion bottoming out
//! at the same cutoff.

use num_traits::Num;
use std::ops::AddAssign;

use crate::matrix::{DenseMatrix, MatrixError, MultiplyConfig};
use crate::multiply::strassen::strassen_with_cutoff;

/// Multiplies two square matrices, choosing the algorithm by size
///
/// Dimensions at or below `cutoff` use cubic multiplication; larger ones
/// use Strassen recursion whose sub-products also fall back to cubic below
/// the cutoff. The result is identical (up to floating-point association)
/// to either algorithm run alone, for any cutoff.
///
/// # Arguments
///
/// * `a` - Left operand
/// * `b` - Right operand, same dimension as `a`
/// * `cutoff` - Hybrid cutoff dimension; see
///   [`crate::constants::DEFAULT_HYBRID_CUTOFF`] for the benchmarked default
///
/// # Returns
///
/// The product `A×B`, or the same errors as the dispatched algorithm.
pub fn hybrid_multiply<T>(
    a: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
    cutoff: usize,
) -> Result<DenseMatrix<T>, MatrixError>
where
    T: Copy + Num + AddAssign,
{
    strassen_with_cutoff(a, b, cutoff)
}

/// Convenience wrapper dispatching with a [`MultiplyConfig`]'s cutoff
pub fn hybrid_multiply_with_config<T>(
    a: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
    config: &MultiplyConfig,
) -> Result<DenseMatrix<T>, MatrixError>
where
    T: Copy + Num + AddAssign,
{
    hybrid_multiply(a, b, config.hybrid_cutoff)
}
