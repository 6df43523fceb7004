//! Row-stochastic parameter set (π, A, B) for discrete HMMs.
//!
//! Purpose
//! -------
//! Provide the validated **model-space** parameter container [`HmmParams`]
//! holding the initial-state distribution π, the state-transition matrix A,
//! and the emission matrix B. Constructors enforce the row-stochastic
//! invariant so the recursions elsewhere in the crate can assume valid
//! probability rows.
//!
//! Key behaviors
//! -------------
//! - [`HmmParams::new`] validates dimensions against an [`HmmShape`] and the
//!   row-stochastic invariant on every row of π, A, and B.
//! - [`HmmParams::uniform`] builds the maximum-entropy parameter set (all
//!   rows uniform), useful as a deterministic baseline.
//!
//! Invariants validated by constructors
//! ------------------------------------
//! - `initial.len() == n_states`, `transition` is N×N, `emission` is N×M.
//! - Every row of each container: finite, non-negative, sums to 1 within
//!   [`ROW_SUM_TOL`](crate::hmm::core::validation::ROW_SUM_TOL).
//!
//! Conventions
//! -----------
//! - `transition[[i, j]]` = P(state j at t+1 | state i at t) — rows index the
//!   source state.
//! - `emission[[i, k]]` = P(symbol k | state i).
//! - Parameters are mutated only by committing a fully validated replacement
//!   (`Baum-Welch` re-estimation builds a new `HmmParams` and swaps it in);
//!   no in-place partial writes.
use crate::hmm::{
    core::{
        shape::HmmShape,
        validation::{validate_row_stochastic, validate_stochastic_row},
    },
    errors::{HmmError, HmmResult},
};
use ndarray::{Array1, Array2};

/// Validated model-space parameters of a discrete HMM.
///
/// Invariants are enforced at construction; use this type to run the
/// forward/backward recursions, re-estimation, prediction, and scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct HmmParams {
    /// Initial-state distribution π (length N, sums to 1).
    pub initial: Array1<f64>,
    /// State-transition matrix A (N×N, row-stochastic).
    pub transition: Array2<f64>,
    /// Emission matrix B (N×M, row-stochastic).
    pub emission: Array2<f64>,
}

impl HmmParams {
    /// Create a validated parameter set.
    ///
    /// Validates, in order:
    /// - `initial.len() == shape.n_states`
    /// - `transition.dim() == (N, N)` and `emission.dim() == (N, M)`
    /// - every row of π, A, B is a probability distribution (finite,
    ///   non-negative, sums to 1 within tolerance)
    ///
    /// Errors
    /// ------
    /// - `HmmError::ShapeMismatch` for wrong dimensions; the `what` tag names
    ///   the offending container.
    /// - `HmmError::NonFiniteEntry` / `NegativeEntry` / `NotRowStochastic`
    ///   from row validation.
    pub fn new(
        initial: Array1<f64>, transition: Array2<f64>, emission: Array2<f64>, shape: &HmmShape,
    ) -> HmmResult<Self> {
        let n = shape.n_states;
        let m = shape.n_symbols;
        if initial.len() != n {
            return Err(HmmError::ShapeMismatch {
                what: "initial",
                expected: (1, n),
                actual: (1, initial.len()),
            });
        }
        if transition.dim() != (n, n) {
            return Err(HmmError::ShapeMismatch {
                what: "transition",
                expected: (n, n),
                actual: transition.dim(),
            });
        }
        if emission.dim() != (n, m) {
            return Err(HmmError::ShapeMismatch {
                what: "emission",
                expected: (n, m),
                actual: emission.dim(),
            });
        }
        validate_stochastic_row(initial.view(), "initial", 0)?;
        validate_row_stochastic(transition.view(), "transition")?;
        validate_row_stochastic(emission.view(), "emission")?;
        Ok(HmmParams { initial, transition, emission })
    }

    /// Maximum-entropy parameter set: every row uniform.
    ///
    /// π[i] = 1/N, A[i][j] = 1/N, B[i][k] = 1/M. Always valid for a valid
    /// shape; used as a deterministic baseline and in tests.
    pub fn uniform(shape: &HmmShape) -> Self {
        let n = shape.n_states;
        let m = shape.n_symbols;
        HmmParams {
            initial: Array1::from_elem(n, 1.0 / n as f64),
            transition: Array2::from_elem((n, n), 1.0 / n as f64),
            emission: Array2::from_elem((n, m), 1.0 / m as f64),
        }
    }

    /// Hidden-state count N.
    pub fn n_states(&self) -> usize {
        self.initial.len()
    }

    /// Observation-alphabet size M.
    pub fn n_symbols(&self) -> usize {
        self.emission.ncols()
    }

    /// The shape these parameters were validated against.
    pub fn shape(&self) -> HmmShape {
        HmmShape { n_states: self.n_states(), n_symbols: self.n_symbols() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // Constructor validation for HmmParams (dimension and row-stochastic
    // paths) and the uniform baseline. Recursion behavior on top of valid
    // parameters is covered in filters/posteriors/models tests.
    // -------------------------------------------------------------------------

    fn valid_2x2() -> (Array1<f64>, Array2<f64>, Array2<f64>) {
        (
            array![0.5, 0.5],
            array![[0.9, 0.1], [0.1, 0.9]],
            array![[0.9, 0.1], [0.2, 0.8]],
        )
    }

    #[test]
    // Purpose
    // -------
    // Accept a well-formed 2-state, 2-symbol parameter set and expose its
    // dimensions through the accessors.
    //
    // Given
    // -----
    // - A sticky 2-state chain with nearly separated emissions.
    //
    // Expect
    // ------
    // - Construction succeeds; n_states == 2, n_symbols == 2.
    fn new_accepts_valid_params() {
        let shape = HmmShape::new(2, 2).unwrap();
        let (pi, a, b) = valid_2x2();
        let params = HmmParams::new(pi, a, b, &shape).expect("valid parameters must be accepted");
        assert_eq!(params.n_states(), 2);
        assert_eq!(params.n_symbols(), 2);
        assert_eq!(params.shape(), shape);
    }

    #[test]
    // Purpose
    // -------
    // Reject dimension mismatches with the container named in the error.
    //
    // Given
    // -----
    // - A 3-long π for a 2-state shape; a 2×3 emission for a 2-symbol shape.
    //
    // Expect
    // ------
    // - ShapeMismatch tagged "initial" and "emission" respectively.
    fn new_rejects_wrong_dimensions() {
        let shape = HmmShape::new(2, 2).unwrap();
        let (_, a, b) = valid_2x2();
        assert!(matches!(
            HmmParams::new(array![0.4, 0.3, 0.3], a.clone(), b.clone(), &shape),
            Err(HmmError::ShapeMismatch { what: "initial", .. })
        ));

        let (pi, a, _) = valid_2x2();
        let wide_b = Array2::from_elem((2, 3), 1.0 / 3.0);
        assert!(matches!(
            HmmParams::new(pi, a, wide_b, &shape),
            Err(HmmError::ShapeMismatch { what: "emission", .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Reject rows that are not probability distributions.
    //
    // Given
    // -----
    // - A transition matrix whose second row sums to 1.1.
    //
    // Expect
    // ------
    // - NotRowStochastic tagged "transition" at row 1.
    fn new_rejects_unnormalized_rows() {
        let shape = HmmShape::new(2, 2).unwrap();
        let (pi, _, b) = valid_2x2();
        let bad_a = array![[0.9, 0.1], [0.2, 0.9]];
        assert!(matches!(
            HmmParams::new(pi, bad_a, b, &shape),
            Err(HmmError::NotRowStochastic { what: "transition", row: 1, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // The uniform baseline is valid for any shape and has exact row sums.
    //
    // Given
    // -----
    // - Shape (3, 4).
    //
    // Expect
    // ------
    // - Re-validation through HmmParams::new succeeds on the same data.
    fn uniform_is_valid() {
        let shape = HmmShape::new(3, 4).unwrap();
        let params = HmmParams::uniform(&shape);
        assert!(HmmParams::new(
            params.initial.clone(),
            params.transition.clone(),
            params.emission.clone(),
            &shape
        )
        .is_ok());
    }
}
