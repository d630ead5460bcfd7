//! Dense square-matrix multiplication strategies
//!
//! Three entry points share one contract: multiply two same-dimension
//! square matrices and return a freshly allocated product, or fail with a
//! dimension mismatch. The cubic reference is always correct and anchors
//! the test suite; Strassen trades multiplications for additions and wins
//! asymptotically; the hybrid dispatcher picks between them by size.

pub mod hybrid;
pub mod reference;
pub mod strassen;

pub use hybrid::{hybrid_multiply, hybrid_multiply_with_config};
pub use reference::multiply;
pub use strassen::strassen_multiply;
