//! Centralized constants for the gemmalign library
//!
//! This module contains all hardcoded constants used throughout the codebase.
//! All new constants should be added here rather than scattered throughout
//! the code. Constants are organized by category for easy reference and
//! maintenance.

// ============================================================================
// MULTIPLICATION CUTOFFS
// ============================================================================

/// Default dimension at or below which the hybrid dispatcher uses cubic
/// multiplication instead of Strassen recursion.
///
/// 256 came out ahead across the power-of-two sweep in
/// `benches/matrix_multiply.rs`; override via `MultiplyConfig` when tuning
/// for a specific machine.
pub const DEFAULT_HYBRID_CUTOFF: usize = 256;

/// Default dimension at or below which the parallel driver stops forking
/// sub-products and runs the sequential hybrid path
pub const DEFAULT_PARALLEL_CUTOFF: usize = 128;

// ============================================================================
// ALIGNMENT SCORING
// ============================================================================

/// Score contributed by a pair of identical symbols
pub const MATCH_SCORE: f64 = 1.0;

/// Score contributed by a pair of differing symbols
pub const MISMATCH_SCORE: f64 = -1.0;

/// Linear penalty per inserted or deleted position
pub const GAP_PENALTY: f64 = -1.0;

/// Marker emitted into an aligned string for an insertion or deletion
pub const GAP_CHAR: char = '-';
