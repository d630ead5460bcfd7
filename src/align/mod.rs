//! Needleman-Wunsch global sequence alignment
//!
//! Aligns two symbol sequences end-to-end against a fixed scoring scheme
//! (+1 match, −1 mismatch, −1 per gap position) using the dense matrix as
//! the dynamic-programming scoring table. Cell (i, j) holds the optimal
//! score for aligning the length-i prefix of A against the length-j prefix
//! of B; a row-major fill is a valid topological order because every cell
//! depends only on its diagonal, upper and left neighbors.
//!
//! The traceback tie-break is fixed at diagonal > up > left so identical
//! inputs always reproduce identical alignment strings, not merely
//! identical scores.

use crate::constants::{GAP_CHAR, GAP_PENALTY, MATCH_SCORE, MISMATCH_SCORE};
use crate::matrix::DenseMatrix;

/// The result of a global alignment
///
/// The two aligned strings have equal length; stripping the gap markers
/// from either reproduces the corresponding input sequence exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    /// First input sequence with gap markers inserted
    pub aligned_a: String,

    /// Second input sequence with gap markers inserted
    pub aligned_b: String,

    /// Optimal global alignment score
    pub score: f64,
}

/// Score for pairing two symbols
fn score_pair(a: char, b: char) -> f64 {
    if a == b {
        MATCH_SCORE
    } else {
        MISMATCH_SCORE
    }
}

/// Computes the optimal global alignment of two sequences
///
/// Any finite strings over any alphabet are valid input, including empty
/// sequences (which align as all gaps). The call owns its scoring table and
/// discards it after traceback; only the alignment triple is returned.
///
/// # Arguments
///
/// * `seq_a` - First sequence
/// * `seq_b` - Second sequence
///
/// # Returns
///
/// The aligned pair of equal-length strings and the optimal score,
/// deterministic for given inputs.
pub fn needleman_wunsch(seq_a: &str, seq_b: &str) -> Alignment {
    let a: Vec<char> = seq_a.chars().collect();
    let b: Vec<char> = seq_b.chars().collect();
    let len_a = a.len();
    let len_b = b.len();

    // Square table sized to the longer sequence; only the
    // (len_a + 1) × (len_b + 1) corner is used.
    let size = len_a.max(len_b) + 1;
    let mut table = DenseMatrix::<f64>::zeros(size);

    // Running gap cost for aligning a prefix against nothing
    for i in 0..=len_a {
        table.set(i, 0, -(i as f64));
    }
    for j in 0..=len_b {
        table.set(0, j, -(j as f64));
    }

    for i in 1..=len_a {
        for j in 1..=len_b {
            let diag = table.get(i - 1, j - 1) + score_pair(a[i - 1], b[j - 1]);
            let up = table.get(i - 1, j) + GAP_PENALTY;
            let left = table.get(i, j - 1) + GAP_PENALTY;
            table.set(i, j, diag.max(up).max(left));
        }
    }

    // Traceback from (len_a, len_b) to (0, 0). All cell values are exact
    // integer-valued f64, so the equality tests against the fill's own
    // arithmetic are exact. Tie-break order: diagonal, then up, then left.
    let mut i = len_a;
    let mut j = len_b;
    let mut rev_a = Vec::with_capacity(len_a + len_b);
    let mut rev_b = Vec::with_capacity(len_a + len_b);

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && table.get(i, j) == table.get(i - 1, j - 1) + score_pair(a[i - 1], b[j - 1])
        {
            rev_a.push(a[i - 1]);
            rev_b.push(b[j - 1]);
            i -= 1;
            j -= 1;
        } else if i > 0 && table.get(i, j) == table.get(i - 1, j) + GAP_PENALTY {
            // Deletion from A: consume a symbol of A, gap in B
            rev_a.push(a[i - 1]);
            rev_b.push(GAP_CHAR);
            i -= 1;
        } else {
            // Insertion: gap in A, consume a symbol of B
            rev_a.push(GAP_CHAR);
            rev_b.push(b[j - 1]);
            j -= 1;
        }
    }

    Alignment {
        aligned_a: rev_a.iter().rev().collect(),
        aligned_b: rev_b.iter().rev().collect(),
        score: table.get(len_a, len_b),
    }
}
