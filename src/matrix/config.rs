//! Configuration for the multiplication strategies

use crate::constants::{DEFAULT_HYBRID_CUTOFF, DEFAULT_PARALLEL_CUTOFF};

/// Configuration for the dense multiplication family
///
/// The cutoffs are tunable parameters, not fixed constants: the shipped
/// defaults come from benchmarking on power-of-two sizes (see
/// `benches/matrix_multiply.rs`), and callers with different cache or core
/// budgets are expected to override them.
#[derive(Debug, Clone)]
pub struct MultiplyConfig {
    /// Dimension at or below which the cubic algorithm is used instead of
    /// recursing (Strassen's constant-factor overhead dominates below this)
    pub hybrid_cutoff: usize,

    /// Dimension at or below which the parallel driver stops forking and
    /// runs the sequential hybrid path
    pub parallel_cutoff: usize,

    /// Number of worker threads available to the parallel driver
    pub n_threads: usize,
}

impl Default for MultiplyConfig {
    fn default() -> Self {
        Self {
            hybrid_cutoff: DEFAULT_HYBRID_CUTOFF,
            parallel_cutoff: DEFAULT_PARALLEL_CUTOFF,
            n_threads: num_cpus::get(), // Use all available cores
        }
    }
}

impl MultiplyConfig {
    /// Create a config with a specific hybrid cutoff, defaults elsewhere
    pub fn with_cutoff(hybrid_cutoff: usize) -> Self {
        Self {
            hybrid_cutoff,
            ..Self::default()
        }
    }
}
