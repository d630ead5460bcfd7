// Matrix data structures and configuration

pub mod config;
pub mod dense;

pub use config::MultiplyConfig;
pub use dense::{DenseMatrix, MatrixError};
