//! Observation-sequence containers for discrete HMMs.
//!
//! Purpose
//! -------
//! Provide a small, validated container for observation sequences so the
//! recursion code can assume clean input: non-empty, every symbol inside the
//! model's alphabet. This module also centralizes the raw-feed conventions of
//! upstream observation suppliers (negative sentinel for the unobserved
//! suffix, trailing-window truncation).
//!
//! Key behaviors
//! -------------
//! - [`ObsSequence::new`] validates an already-clean symbol vector against an
//!   alphabet size.
//! - [`ObsSequence::from_raw`] converts a raw signed feed: truncate at the
//!   first negative sentinel, optionally keep only the trailing window of
//!   observations, then validate.
//!
//! Invariants & assumptions
//! ------------------------
//! - A constructed sequence is non-empty and every symbol is `< n_symbols`.
//! - The sequence is read-only after construction; the engine never mutates
//!   observations during training or inference.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; time runs oldest-first (index 0 is the earliest
//!   observation, the last index is the most recent).
//! - In raw feeds, the first negative value marks the start of the
//!   unobserved/truncated suffix; everything from it onward is dropped.
//!
//! Downstream usage
//! ----------------
//! - Construct an [`ObsSequence`] at the boundary where observations enter
//!   the HMM stack; pass it by reference into `HmmModel::train`,
//!   `predict_next_emission`, and `sequence_score`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path, the empty and out-of-range rejections,
//!   sentinel stripping, windowing, and the all-sentinel edge case.
use crate::hmm::errors::{HmmError, HmmResult};

/// A validated observation sequence over a fixed discrete alphabet.
///
/// Purpose
/// -------
/// Carry the ordered symbols together with the alphabet size they were
/// validated against, so models can detect alphabet mismatches instead of
/// indexing out of bounds.
///
/// Fields
/// ------
/// - `symbols`: ordered observation indices, each `< n_symbols`.
/// - `n_symbols`: alphabet size the sequence was validated against.
///
/// Invariants
/// ----------
/// - `symbols.len() > 0`.
/// - `symbols[t] < n_symbols` for every `t`.
///
/// Notes
/// -----
/// - Validation is O(T) in the sequence length; after construction this type
///   is a plain read-only container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsSequence {
    symbols: Vec<usize>,
    n_symbols: usize,
}

impl ObsSequence {
    /// Construct a validated [`ObsSequence`] from already-clean symbols.
    ///
    /// Parameters
    /// ----------
    /// - `symbols`: ordered observation indices; must be non-empty.
    /// - `n_symbols`: alphabet size; every symbol must be strictly below it.
    ///
    /// Returns
    /// -------
    /// `HmmResult<ObsSequence>`
    ///   - `Ok(ObsSequence)` if all invariants hold.
    ///   - `Err(HmmError::EmptySequence)` when `symbols` is empty.
    ///   - `Err(HmmError::SymbolOutOfRange { index, symbol, n_symbols })` for
    ///     the first out-of-alphabet symbol.
    ///
    /// Panics
    /// ------
    /// - Never panics; all invalid inputs are reported via `HmmError`.
    pub fn new(symbols: Vec<usize>, n_symbols: usize) -> HmmResult<Self> {
        if symbols.is_empty() {
            return Err(HmmError::EmptySequence);
        }
        for (index, &symbol) in symbols.iter().enumerate() {
            if symbol >= n_symbols {
                return Err(HmmError::SymbolOutOfRange { index, symbol, n_symbols });
            }
        }
        Ok(ObsSequence { symbols, n_symbols })
    }

    /// Build a sequence from a raw signed observation feed.
    ///
    /// Upstream suppliers deliver fixed-size buffers where a negative value
    /// marks the beginning of the unobserved suffix. This constructor:
    /// 1. truncates the feed at the first negative value,
    /// 2. keeps only the trailing `window` observations when `window` is
    ///    `Some(w)` (the most recent data dominate the re-estimation),
    /// 3. validates the remainder like [`ObsSequence::new`].
    ///
    /// Parameters
    /// ----------
    /// - `raw`: signed observation feed, oldest-first.
    /// - `n_symbols`: alphabet size for validation.
    /// - `window`: optional cap on the number of trailing observations kept.
    ///
    /// Returns
    /// -------
    /// `HmmResult<ObsSequence>`
    ///   - `Err(HmmError::EmptySequence)` when the feed is empty, starts with
    ///     a sentinel, or `window == Some(0)`.
    ///   - Range errors as in [`ObsSequence::new`], with indices relative to
    ///     the kept window.
    pub fn from_raw(raw: &[i64], n_symbols: usize, window: Option<usize>) -> HmmResult<Self> {
        let observed = raw.iter().position(|&v| v < 0).unwrap_or(raw.len());
        let prefix = &raw[..observed];
        let start = match window {
            Some(w) => prefix.len().saturating_sub(w),
            None => 0,
        };
        let symbols: Vec<usize> = prefix[start..].iter().map(|&v| v as usize).collect();
        ObsSequence::new(symbols, n_symbols)
    }

    /// Number of observations T.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed sequence; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The ordered observation indices.
    pub fn symbols(&self) -> &[usize] {
        &self.symbols
    }

    /// Alphabet size this sequence was validated against.
    pub fn n_symbols(&self) -> usize {
        self.n_symbols
    }
}
