//! # gemmalign: dense matrix multiplication and global sequence alignment
//!
//! Two algorithmically distinct capabilities share one dense-matrix data
//! model:
//!
//! 1. **Recursive matrix multiplication**: Strassen's divide-and-conquer
//!    algorithm over quadrant splits, a cubic reference baseline, and a
//!    size-gated hybrid that falls back to cubic multiplication below a
//!    tunable cutoff. A Rayon-backed driver runs the seven independent
//!    Strassen sub-products in parallel.
//!
//! 2. **Global sequence alignment**: Needleman-Wunsch dynamic programming
//!    that reuses the same dense matrix as its scoring table, with a fixed
//!    deterministic traceback tie-break.
//!
//! ## Usage
//!
//! Basic matrix multiplication:
//!
//! ```
//! use gemmalign::{multiply, strassen_multiply, DenseMatrix};
//!
//! let a = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
//! let b = DenseMatrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]);
//!
//! let cubic = multiply(&a, &b).unwrap();
//! let strassen = strassen_multiply(&a, &b).unwrap();
//! assert_eq!(cubic, strassen);
//! assert_eq!(cubic.get(1, 1), 50.0);
//! ```
//!
//! Global alignment:
//!
//! ```
//! use gemmalign::needleman_wunsch;
//!
//! let result = needleman_wunsch("GATTACA", "GCATGCU");
//! assert_eq!(result.score, 0.0);
//! assert_eq!(result.aligned_a.len(), result.aligned_b.len());
//! ```
//!
//! Strassen's path requires power-of-two dimensions; pad irregular inputs
//! first with [`DenseMatrix::padded`]. Element access assumes in-bounds
//! indices by contract — see [`matrix::dense`].

pub mod align;
pub mod constants;
pub mod matrix;
pub mod multiply;
pub mod parallel;
pub mod utils;

// Re-export primary components
pub use align::{needleman_wunsch, Alignment};
pub use matrix::{DenseMatrix, MatrixError, MultiplyConfig};
pub use multiply::{hybrid_multiply, multiply, strassen_multiply};
pub use parallel::strassen_multiply_parallel;
pub use utils::{from_ndarray, to_ndarray};

/// Version information for the gemmalign library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
