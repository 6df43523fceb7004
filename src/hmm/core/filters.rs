//! Scaled forward and backward recursions.
//!
//! Purpose
//! -------
//! Implement the per-step-normalized α (forward) and β (backward) passes that
//! underpin everything downstream: posterior computation, Baum-Welch
//! re-estimation, belief tracking, and sequence scoring.
//!
//! Key behaviors
//! -------------
//! - Every α and β row is renormalized to sum to 1 immediately after it is
//!   computed, so no entry can underflow on long sequences.
//! - The forward pass accumulates the log of each step's normalizer; their
//!   sum is the sequence log-likelihood under the current parameters, and it
//!   is the quantity used for comparative scoring.
//! - A row whose pre-normalization sum is zero or non-finite aborts the pass
//!   with a degenerate-distribution error rather than dividing by it.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are a validated [`HmmParams`] and a non-empty [`ObsSequence`];
//!   the only extra check here is that their alphabet sizes agree.
//! - After a successful pass, each returned row sums to 1 within floating
//!   point error.
//!
//! Conventions
//! -----------
//! - `alpha[[t, i]]` = P(state i at t | o₀..oₜ); `beta` rows are the scaled
//!   backward messages, normalized per step (only ratios within a row are
//!   meaningful).
//!
//! Downstream usage
//! ----------------
//! - [`posteriors`](crate::hmm::core::posteriors) combines both passes into
//!   γ and ξ; [`HmmModel`](crate::hmm::models::discrete::HmmModel) uses the
//!   forward pass alone for belief tracking and scoring.
use crate::hmm::{
    core::{data::ObsSequence, params::HmmParams, validation::validate_alphabet},
    errors::{HmmError, HmmResult},
};
use ndarray::{Array2, ArrayViewMut1};

/// Result of the scaled forward pass.
#[derive(Debug, Clone)]
pub struct Forward {
    /// Filtered state posteriors, T×N; row t sums to 1.
    pub alpha: Array2<f64>,
    /// Σₜ ln cₜ where cₜ is step t's pre-normalization row sum; equals the
    /// sequence log-likelihood ln P(o₀..o_{T-1}).
    pub log_likelihood: f64,
}

/// Normalize a row in place, returning its pre-normalization sum.
///
/// Returns `None` when the sum is zero, negative, or non-finite; callers map
/// that to the degenerate-distribution error for their pass.
pub fn normalize_row(mut row: ArrayViewMut1<f64>) -> Option<f64> {
    let sum = row.sum();
    if !sum.is_finite() || sum <= 0.0 {
        return None;
    }
    row.mapv_inplace(|v| v / sum);
    Some(sum)
}

/// Scaled forward pass over `seq`.
///
/// Runs the recursion
/// α[0][i] ∝ π[i]·B[i][o₀], α[t][i] ∝ (Σⱼ α[t-1][j]·A[j][i])·B[i][oₜ],
/// renormalizing each row and accumulating the log normalizers.
///
/// Errors
/// ------
/// - `HmmError::SymbolCountMismatch` if `seq` was validated against a
///   different alphabet size than `params` carries.
/// - `HmmError::DegenerateForward` if a step's row sums to zero, i.e. the
///   parameters assign probability 0 to the observed prefix.
pub fn forward(params: &HmmParams, seq: &ObsSequence) -> HmmResult<Forward> {
    validate_alphabet(params.n_symbols(), seq.n_symbols())?;
    let obs = seq.symbols();
    let n = params.n_states();
    let mut alpha = Array2::zeros((obs.len(), n));
    let mut log_likelihood = 0.0;

    {
        let mut row = alpha.row_mut(0);
        let emit = params.emission.column(obs[0]);
        row.assign(&(&params.initial * &emit));
        let sum = normalize_row(row).ok_or(HmmError::DegenerateForward { t: 0 })?;
        log_likelihood += sum.ln();
    }

    for t in 1..obs.len() {
        let predicted = params.transition.t().dot(&alpha.row(t - 1));
        let mut row = alpha.row_mut(t);
        row.assign(&(&predicted * &params.emission.column(obs[t])));
        let sum = normalize_row(row).ok_or(HmmError::DegenerateForward { t })?;
        log_likelihood += sum.ln();
    }

    Ok(Forward { alpha, log_likelihood })
}

/// Scaled backward pass over `seq`.
///
/// Fills the last row with the uniform distribution (the unit message
/// renormalized) and recurses
/// β[t][i] ∝ Σⱼ A[i][j]·B[j][o_{t+1}]·β[t+1][j], renormalizing each row.
///
/// Errors
/// ------
/// - `HmmError::SymbolCountMismatch` on alphabet disagreement.
/// - `HmmError::DegenerateBackward` if a step's row sums to zero.
pub fn backward(params: &HmmParams, seq: &ObsSequence) -> HmmResult<Array2<f64>> {
    validate_alphabet(params.n_symbols(), seq.n_symbols())?;
    let obs = seq.symbols();
    let n = params.n_states();
    let t_len = obs.len();
    let mut beta = Array2::zeros((t_len, n));
    beta.row_mut(t_len - 1).fill(1.0 / n as f64);

    for t in (0..t_len - 1).rev() {
        let weighted = &params.emission.column(obs[t + 1]) * &beta.row(t + 1);
        let message = params.transition.dot(&weighted);
        let mut row = beta.row_mut(t);
        row.assign(&message);
        normalize_row(row).ok_or(HmmError::DegenerateBackward { t })?;
    }

    Ok(beta)
}
