//! HMM validation helpers — reusable checks for stochastic rows, options,
//! and alphabet agreement.
//!
//! Purpose
//! -------
//! Centralize the small validation routines used across the HMM stack so
//! higher-level constructors fail fast with structured errors. These helpers
//! enforce the row-stochastic invariant on parameter matrices, sanity-check
//! the smoothing floor, and verify sequence/model alphabet agreement.
//!
//! Key behaviors
//! -------------
//! - Validate a single probability row (finite, non-negative, sums to 1
//!   within [`ROW_SUM_TOL`]) and whole row-stochastic matrices.
//! - Validate the additive smoothing floor (finite, non-negative).
//! - Validate that a sequence's alphabet size matches the model's.
//!
//! Conventions
//! -----------
//! - Indices are 0-based. The `what` tag names the offending container
//!   ("initial", "transition", "emission") so errors read well at the API
//!   boundary.
//! - Validation functions return [`HmmResult`] and never panic on invalid
//!   *inputs*; panics are reserved for programming errors elsewhere.
//! - This module contains no I/O and no logging; it only inspects numeric
//!   values and array lengths.
//!
//! Downstream usage
//! ----------------
//! - Call these helpers from constructors (`HmmParams`, `HmmOptions`,
//!   `HmmModel`) to enforce documented invariants at the boundaries of the
//!   API; inner recursion loops assume already-validated state.
//!
//! Testing notes
//! -------------
//! - Unit tests exercise each helper on representative valid and invalid
//!   inputs, including boundary cases (zero rows, NaN, sums just inside and
//!   outside the tolerance).
use crate::hmm::errors::{HmmError, HmmResult};
use ndarray::{ArrayView1, ArrayView2};

/// Tolerance for a probability row's deviation from summing to exactly 1.
///
/// Freshly normalized rows sum to 1 up to floating-point rounding; this
/// tolerance admits accumulated rounding over re-estimation without letting
/// genuinely unnormalized rows through.
pub const ROW_SUM_TOL: f64 = 1e-6;

/// Validate a single probability row: finite, non-negative entries summing
/// to 1 within [`ROW_SUM_TOL`].
///
/// Parameters
/// ----------
/// - `row`: the candidate distribution.
/// - `what`: container tag used in error payloads ("initial", "transition",
///   "emission").
/// - `row_idx`: row index used in error payloads (0 for vectors).
///
/// Errors
/// ------
/// - `HmmError::NonFiniteEntry` for the first NaN/±inf entry.
/// - `HmmError::NegativeEntry` for the first negative entry.
/// - `HmmError::NotRowStochastic` when the sum deviates from 1 by more than
///   the tolerance.
///
/// Panics
/// ------
/// - Never panics.
pub fn validate_stochastic_row(
    row: ArrayView1<f64>, what: &'static str, row_idx: usize,
) -> HmmResult<()> {
    for (col, &value) in row.iter().enumerate() {
        if !value.is_finite() {
            return Err(HmmError::NonFiniteEntry { what, row: row_idx, col, value });
        }
        if value < 0.0 {
            return Err(HmmError::NegativeEntry { what, row: row_idx, col, value });
        }
    }
    let sum = row.sum();
    if (sum - 1.0).abs() > ROW_SUM_TOL {
        return Err(HmmError::NotRowStochastic { what, row: row_idx, sum });
    }
    Ok(())
}

/// Validate every row of a matrix as a probability distribution.
///
/// Applies [`validate_stochastic_row`] row by row, stopping at the first
/// violation.
pub fn validate_row_stochastic(matrix: ArrayView2<f64>, what: &'static str) -> HmmResult<()> {
    for (row_idx, row) in matrix.rows().into_iter().enumerate() {
        validate_stochastic_row(row, what, row_idx)?;
    }
    Ok(())
}

/// Validate the additive smoothing floor.
///
/// The floor is added to every accumulator of the re-estimation step before
/// row normalization, so it must be a finite value in `[0, 1)`: zero
/// disables smoothing and preserves the raw Baum-Welch update, while a
/// floor of 1 or more would dominate the accumulated posterior mass.
///
/// Errors
/// ------
/// - `HmmError::InvalidSmoothing` when `value` is NaN, ±inf, negative, or
///   ≥ 1.
pub fn validate_smoothing(value: f64) -> HmmResult<f64> {
    if !value.is_finite() || value < 0.0 || value >= 1.0 {
        return Err(HmmError::InvalidSmoothing { value });
    }
    Ok(value)
}

/// Validate that a sequence's alphabet size matches the model's.
///
/// Errors
/// ------
/// - `HmmError::SymbolCountMismatch` when the two sizes differ.
pub fn validate_alphabet(expected: usize, actual: usize) -> HmmResult<()> {
    if expected != actual {
        return Err(HmmError::SymbolCountMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // Each validation helper on representative valid and invalid inputs.
    // Constructors that *call* these helpers are tested in their own modules
    // and do not re-test the raw validation logic.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Accept well-formed rows, including ones off by less than the tolerance.
    //
    // Given
    // -----
    // - A uniform row and a row summing to 1 + 1e-9.
    //
    // Expect
    // ------
    // - Both pass.
    fn stochastic_row_accepts_within_tolerance() {
        let uniform = array![0.25, 0.25, 0.25, 0.25];
        assert!(validate_stochastic_row(uniform.view(), "transition", 0).is_ok());

        let nearly = array![0.5, 0.5 + 1e-9];
        assert!(validate_stochastic_row(nearly.view(), "initial", 0).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Reject NaN entries, negative entries, and off-sum rows with the matching
    // variants and locations.
    //
    // Given
    // -----
    // - Rows with a NaN at column 1, a negative at column 0, and a sum of 0.9.
    //
    // Expect
    // ------
    // - NonFiniteEntry, NegativeEntry, and NotRowStochastic respectively.
    fn stochastic_row_rejects_bad_rows() {
        let nan_row = array![0.5, f64::NAN, 0.5];
        assert!(matches!(
            validate_stochastic_row(nan_row.view(), "emission", 2),
            Err(HmmError::NonFiniteEntry { what: "emission", row: 2, col: 1, .. })
        ));

        let neg_row = array![-0.1, 1.1];
        assert!(matches!(
            validate_stochastic_row(neg_row.view(), "transition", 0),
            Err(HmmError::NegativeEntry { col: 0, .. })
        ));

        let short_row = array![0.4, 0.5];
        assert!(matches!(
            validate_stochastic_row(short_row.view(), "initial", 0),
            Err(HmmError::NotRowStochastic { row: 0, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Matrix validation reports the first offending row, not just a failure.
    //
    // Given
    // -----
    // - A 3x2 matrix whose middle row sums to 0.8.
    //
    // Expect
    // ------
    // - NotRowStochastic with row == 1.
    fn row_stochastic_reports_offending_row() {
        let mut m = Array2::from_elem((3, 2), 0.5);
        m[[1, 0]] = 0.3;
        assert!(matches!(
            validate_row_stochastic(m.view(), "transition"),
            Err(HmmError::NotRowStochastic { row: 1, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Smoothing accepts floors in [0, 1), rejects negatives, 1, and NaN.
    //
    // Given
    // -----
    // - 0.0, 1e-10, -1e-3, 1.0, NaN.
    //
    // Expect
    // ------
    // - First two pass through unchanged; the rest yield InvalidSmoothing.
    fn smoothing_floor_validation() {
        assert_eq!(validate_smoothing(0.0), Ok(0.0));
        assert_eq!(validate_smoothing(1e-10), Ok(1e-10));
        assert!(matches!(validate_smoothing(-1e-3), Err(HmmError::InvalidSmoothing { .. })));
        assert!(matches!(validate_smoothing(1.0), Err(HmmError::InvalidSmoothing { .. })));
        assert!(matches!(validate_smoothing(f64::NAN), Err(HmmError::InvalidSmoothing { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Alphabet agreement is an equality check with a typed error.
    //
    // Given
    // -----
    // - Matching sizes (4, 4) and mismatching (4, 3).
    //
    // Expect
    // ------
    // - Ok for the former, SymbolCountMismatch for the latter.
    fn alphabet_agreement() {
        assert!(validate_alphabet(4, 4).is_ok());
        assert_eq!(
            validate_alphabet(4, 3),
            Err(HmmError::SymbolCountMismatch { expected: 4, actual: 3 })
        );
    }
}
