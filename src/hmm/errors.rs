//! Errors for discrete HMMs (shape/data validation, parameter invariants,
//! and numerical degeneracy during the recursions).
//!
//! This module defines a single error type, [`HmmError`], used across the
//! Python-facing API and the internal Rust core, plus the crate-wide result
//! alias [`HmmResult`].
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy). `t` is a time index into the
//!   observation sequence; `row` indexes states in a parameter matrix.
//! - Observation symbols are integers in `[0, n_symbols)`.
//! - Degeneracy variants (`Degenerate*`) report a normalization denominator
//!   that collapsed to zero; they are surfaced instead of letting NaN/Inf
//!   propagate through the recursions, and a failed re-estimation never
//!   commits partial parameters.

#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Crate-wide result alias for HMM operations.
pub type HmmResult<T> = Result<T, HmmError>;

/// Unified error type for discrete HMM modeling.
///
/// Variants cover construction/shape checks, observation-sequence validation,
/// parameter-matrix invariants, options validation, and numerical degeneracy
/// inside the forward/backward/re-estimation recursions. The error implements
/// `Display`, `Error`, and converts to a Python `ValueError` at PyO3
/// boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum HmmError {
    // ---- Shape / construction ----
    /// The model must have at least one hidden state.
    InvalidStateCount { n_states: usize },

    /// The observation alphabet must have at least one symbol.
    InvalidSymbolCount { n_symbols: usize },

    // ---- Observation-sequence validation ----
    /// Observation sequence is empty (possibly after sentinel stripping).
    EmptySequence,

    /// A symbol lies outside the model's alphabet `[0, n_symbols)`.
    SymbolOutOfRange { index: usize, symbol: usize, n_symbols: usize },

    /// A sequence was built for a different alphabet size than the model's.
    SymbolCountMismatch { expected: usize, actual: usize },

    // ---- Parameter validation ----
    /// A parameter container has the wrong dimensions for the model shape.
    ShapeMismatch { what: &'static str, expected: (usize, usize), actual: (usize, usize) },

    /// A parameter entry is NaN/±inf.
    NonFiniteEntry { what: &'static str, row: usize, col: usize, value: f64 },

    /// A parameter entry is negative (probabilities must be in [0, 1]).
    NegativeEntry { what: &'static str, row: usize, col: usize, value: f64 },

    /// A parameter row does not sum to 1 within tolerance.
    NotRowStochastic { what: &'static str, row: usize, sum: f64 },

    // ---- Options validation ----
    /// The additive smoothing floor must be a finite value in [0, 1).
    InvalidSmoothing { value: f64 },

    // ---- Numerical degeneracy ----
    /// Forward recursion produced an all-zero row at time `t`.
    DegenerateForward { t: usize },

    /// Backward recursion produced an all-zero row at time `t`.
    DegenerateBackward { t: usize },

    /// The state-occupation posterior normalizer collapsed to zero at time `t`.
    DegeneratePosterior { t: usize },

    /// The transition-posterior normalizer collapsed to zero between `t` and `t + 1`.
    DegenerateTransition { t: usize },

    /// A re-estimated parameter row accumulated zero mass and cannot be normalized.
    DegenerateRow { what: &'static str, row: usize },

    // ---- Prediction ----
    /// `most_likely_symbol` received a zero-length distribution.
    EmptyDistribution,
}

impl std::error::Error for HmmError {}

impl std::fmt::Display for HmmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HmmError::InvalidStateCount { n_states } => {
                write!(f, "Hidden-state count must be >= 1; got: {n_states}")
            }
            HmmError::InvalidSymbolCount { n_symbols } => {
                write!(f, "Observation-alphabet size must be >= 1; got: {n_symbols}")
            }
            HmmError::EmptySequence => {
                write!(f, "Observation sequence is empty.")
            }
            HmmError::SymbolOutOfRange { index, symbol, n_symbols } => {
                write!(
                    f,
                    "Observation at index {index} is {symbol}, outside the alphabet [0, {n_symbols})"
                )
            }
            HmmError::SymbolCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Sequence alphabet size ({actual}) does not match the model's ({expected})"
                )
            }
            HmmError::ShapeMismatch { what, expected, actual } => {
                write!(
                    f,
                    "{what} has shape {actual:?}, expected {expected:?} for this model"
                )
            }
            HmmError::NonFiniteEntry { what, row, col, value } => {
                write!(f, "{what}[{row}][{col}] is non-finite: {value}")
            }
            HmmError::NegativeEntry { what, row, col, value } => {
                write!(f, "{what}[{row}][{col}] is negative: {value}")
            }
            HmmError::NotRowStochastic { what, row, sum } => {
                write!(f, "{what} row {row} sums to {sum}, expected 1.0")
            }
            HmmError::InvalidSmoothing { value } => {
                write!(f, "Smoothing floor must be finite and in [0, 1); got: {value}")
            }
            HmmError::DegenerateForward { t } => {
                write!(f, "Forward recursion degenerated to an all-zero row at t = {t}")
            }
            HmmError::DegenerateBackward { t } => {
                write!(f, "Backward recursion degenerated to an all-zero row at t = {t}")
            }
            HmmError::DegeneratePosterior { t } => {
                write!(f, "State-occupation posterior normalizer is zero at t = {t}")
            }
            HmmError::DegenerateTransition { t } => {
                write!(f, "Transition posterior normalizer is zero between t = {t} and t + 1")
            }
            HmmError::DegenerateRow { what, row } => {
                write!(f, "Re-estimated {what} row {row} has zero mass; update rejected")
            }
            HmmError::EmptyDistribution => {
                write!(f, "Cannot pick the most likely symbol of an empty distribution.")
            }
        }
    }
}

/// Convert an [`HmmError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<HmmError> for PyErr {
    fn from(err: HmmError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
