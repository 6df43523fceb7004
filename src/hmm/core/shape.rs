//! Model dimensions (N, M) for discrete HMMs.
//!
//! - `n_states`: number of hidden states N (rows of A, B, length of π).
//! - `n_symbols`: size of the discrete observation alphabet M (columns of B).
//!
//! Both must be at least 1 for the recursions to be defined.
use crate::hmm::errors::{HmmError, HmmResult};

/// Dimensions of a discrete HMM.
///
/// - `n_states`: hidden-state count N
/// - `n_symbols`: observation-alphabet size M
///
/// Invariant: both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HmmShape {
    pub n_states: usize,
    pub n_symbols: usize,
}

impl HmmShape {
    /// Construct an [`HmmShape`] with N hidden states and an M-symbol alphabet.
    ///
    /// # Invariants
    /// - `n_states >= 1`: at least one hidden state.
    /// - `n_symbols >= 1`: at least one observable symbol.
    ///
    /// # Errors
    /// - [`HmmError::InvalidStateCount`] if `n_states == 0`.
    /// - [`HmmError::InvalidSymbolCount`] if `n_symbols == 0`.
    ///
    /// # Rationale
    /// Every downstream container (π of length N, A of N×N, B of N×M, and the
    /// T×N recursion matrices) is sized from this shape, so guarding here lets
    /// the rest of the stack assume non-empty dimensions.
    pub fn new(n_states: usize, n_symbols: usize) -> HmmResult<Self> {
        if n_states == 0 {
            return Err(HmmError::InvalidStateCount { n_states });
        }
        if n_symbols == 0 {
            return Err(HmmError::InvalidSymbolCount { n_symbols });
        }
        Ok(HmmShape { n_states, n_symbols })
    }
}
