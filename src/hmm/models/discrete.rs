//! Discrete-emission HMM: training, prediction, and scoring.
//!
//! This module wires the core recursions into the user-facing [`HmmModel`]:
//! a fixed-iteration Baum-Welch `train`, next-emission prediction from the
//! tracked belief state, and a comparative sequence score for choosing the
//! best-matching model among candidates.
//!
//! Key ideas:
//! - The model owns its parameters exclusively; training replaces them with
//!   a fully validated set or not at all. Each tracked entity gets its own
//!   independent instance.
//! - Prediction uses the filtered posterior at the last observed step
//!   (α[T-1], the belief state) propagated one step through Aᵀ and then Bᵀ.
//!   The belief is cached across calls via [`HmmModel::belief`].
//! - The sequence score is the accumulated log of the per-step forward
//!   normalizers. It is a **comparative** quantity: meaningful for ranking
//!   models on the same sequence, not an absolute probability.
use crate::hmm::{
    core::{
        data::ObsSequence,
        filters::forward,
        options::HmmOptions,
        params::HmmParams,
        posteriors::reestimate,
        shape::HmmShape,
    },
    errors::{HmmError, HmmResult},
};
use ndarray::{Array1, ArrayView1};

/// Discrete-emission hidden Markov model with Baum-Welch training.
///
/// Encapsulates the dimensions (`shape`), runtime options (`options`), the
/// current row-stochastic parameters (`params`), and the belief state cached
/// by the most recent `train` or `predict_next_emission` call.
///
/// # Notes
/// - Not thread-safe by design: the model is exclusively owned mutable
///   state. Run independent instances concurrently instead of sharing one.
#[derive(Debug, Clone)]
pub struct HmmModel {
    /// Model dimensions (N states, M symbols).
    pub shape: HmmShape,
    /// Runtime options (initialization policy, smoothing floor).
    pub options: HmmOptions,
    /// Current parameters; replaced wholesale by `train` and `reset`.
    pub params: HmmParams,
    /// Filtered state posterior at the last observed step, if any.
    belief: Option<Array1<f64>>,
}

impl HmmModel {
    /// Construct a model with parameters drawn per `options.init`.
    ///
    /// With `Init::Random { seed: Some(_) }` construction is deterministic;
    /// with `seed: None` every construction draws fresh parameters.
    ///
    /// ## Errors
    /// - `HmmError::ShapeMismatch` when `Init::Fixed` parameters were built
    ///   for different dimensions than `shape`.
    pub fn new(shape: HmmShape, options: HmmOptions) -> HmmResult<HmmModel> {
        let params = options.init.draw(&shape)?;
        Ok(HmmModel { shape, options, params, belief: None })
    }

    /// Construct a model around caller-supplied parameters.
    ///
    /// `params` was validated when it was built; the shape is derived from
    /// it. `options.init` only matters if [`reset`](Self::reset) is called
    /// later.
    pub fn from_params(params: HmmParams, options: HmmOptions) -> HmmModel {
        let shape = params.shape();
        HmmModel { shape, options, params, belief: None }
    }

    /// Run `iterations` Baum-Welch steps on `seq` and return the sequence
    /// log-likelihood under the final parameters.
    ///
    /// ## Steps
    /// 1. Re-estimate (π, A, B) from the forward/backward posteriors,
    ///    `iterations` times, each step re-deriving α and β from the
    ///    previous step's parameters. No convergence check; the loop always
    ///    runs the fixed count.
    /// 2. Run one more forward pass under the final parameters to cache the
    ///    belief state and compute the returned score.
    /// 3. Commit parameters and belief to `self`.
    ///
    /// The whole call is atomic: an error at any step leaves the model's
    /// parameters and belief exactly as they were. `train(seq, 0)` leaves
    /// the parameters untouched but still refreshes the belief and returns
    /// the current score.
    ///
    /// ## Errors
    /// - Alphabet mismatch between `seq` and the model.
    /// - Degeneracy faults from the recursions (e.g. the parameters assign
    ///   probability 0 to the observed sequence with smoothing disabled).
    pub fn train(&mut self, seq: &ObsSequence, iterations: usize) -> HmmResult<f64> {
        let mut params = self.params.clone();
        for _ in 0..iterations {
            params = reestimate(&params, seq, self.options.smoothing)?;
        }
        let fwd = forward(&params, seq)?;
        self.belief = Some(fwd.alpha.row(seq.len() - 1).to_owned());
        self.params = params;
        Ok(fwd.log_likelihood)
    }

    /// Distribution over the next emission given the observed `seq`.
    ///
    /// Runs a forward pass, takes the belief state b = α[T-1], and returns
    /// e[k] = Σⱼ B[j][k] · Σᵢ A[i][j] · b[i] — the predicted next-state
    /// distribution pushed through the emission matrix. The belief is cached
    /// on the model. The returned vector sums to 1; reduce it with
    /// [`most_likely_symbol`] to pick a single symbol.
    ///
    /// ## Errors
    /// - Same conditions as the forward pass.
    pub fn predict_next_emission(&mut self, seq: &ObsSequence) -> HmmResult<Array1<f64>> {
        let fwd = forward(&self.params, seq)?;
        let belief = fwd.alpha.row(seq.len() - 1).to_owned();
        let next_state = self.params.transition.t().dot(&belief);
        let emission = self.params.emission.t().dot(&next_state);
        self.belief = Some(belief);
        Ok(emission)
    }

    /// Comparative log-score of `seq` under the current parameters.
    ///
    /// Returns Σₜ ln cₜ, the log of the (unscaled) forward likelihood
    /// P(seq | model). Valid for ranking models evaluated on the **same**
    /// sequence; not an absolute probability statement about one model.
    /// Does not touch the tracked belief.
    pub fn sequence_score(&self, seq: &ObsSequence) -> HmmResult<f64> {
        Ok(forward(&self.params, seq)?.log_likelihood)
    }

    /// Belief state cached by the most recent `train` or
    /// `predict_next_emission` call, if any.
    pub fn belief(&self) -> Option<&Array1<f64>> {
        self.belief.as_ref()
    }

    /// Discard everything learned: re-draw parameters per `options.init`
    /// and clear the tracked belief.
    ///
    /// With a seeded `Init::Random` this restores the exact
    /// post-construction parameters, which makes per-round model rebuilds
    /// reproducible. A failed re-draw (mismatched `Init::Fixed`
    /// parameters) leaves the model untouched.
    pub fn reset(&mut self) -> HmmResult<()> {
        self.params = self.options.init.draw(&self.shape)?;
        self.belief = None;
        Ok(())
    }
}

/// Index of the largest entry of `distribution`; the first index wins ties.
///
/// ## Errors
/// - `HmmError::EmptyDistribution` on a zero-length vector.
pub fn most_likely_symbol(distribution: ArrayView1<f64>) -> HmmResult<usize> {
    if distribution.is_empty() {
        return Err(HmmError::EmptyDistribution);
    }
    let mut best = 0;
    for (k, &v) in distribution.iter().enumerate().skip(1) {
        if v > distribution[best] {
            best = k;
        }
    }
    Ok(best)
}
