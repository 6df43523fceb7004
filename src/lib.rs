//! rust_hmm — discrete-emission hidden Markov models with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the HMM engine to Python via the `_rust_hmm` extension module.
//! When the `python-bindings` feature is enabled, this module defines the
//! Python-facing classes and submodules used by the `rust_hmm` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`hmm`) as the public crate surface.
//! - Define the `#[pyclass]` wrapper and the `#[pymodule]` initializer for
//!   the `_rust_hmm` Python extension.
//! - Create and register the `models` Python submodule under `rust_hmm` so
//!   that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible type mirrors the
//!   invariants and signatures of its Rust counterpart ([`HmmModel`]).
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_rust_hmm.models` and are typically
//!   wrapped by thin pure-Python facades in the top-level `rust_hmm`
//!   package.
//! - Indexing and probability conventions follow the documentation of the
//!   underlying Rust modules (`hmm::core`, `hmm::models`).
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted into Python `ValueError` exceptions at this
//!   boundary.

pub mod hmm;
pub mod utils;

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    hmm::models::discrete::{HmmModel, most_likely_symbol as most_likely_symbol_impl},
    utils::{build_hmm_model, extract_obs_sequence},
};

/// HMM — Python-facing wrapper for the discrete-emission HMM engine.
///
/// Purpose
/// -------
/// Expose the [`HmmModel`] API to Python callers while preserving the core
/// Rust invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Build an [`HmmModel`] with randomly drawn row-stochastic parameters
///   from Python-friendly arguments (dimensions, optional seed and
///   smoothing floor).
/// - Provide `train`, `predict_next_emission`, and `sequence_score` methods
///   that convert Python observation arrays into validated sequences and
///   delegate to the core implementation.
/// - Expose the current parameters and the tracked belief state as
///   copy-on-access property getters.
///
/// Parameters
/// ----------
/// Constructed from Python via `HMM(n_states, n_symbols, seed=None,
/// smoothing=None)`:
/// - `n_states`: `usize`
///   Hidden-state count N, > 0.
/// - `n_symbols`: `usize`
///   Emission-alphabet size M, > 0.
/// - `seed`: `Option<u64>`
///   Optional RNG seed for reproducible initialization.
/// - `smoothing`: `Option<f64>`
///   Optional re-estimation floor in [0, 1); defaults to the crate's
///   documented default.
///
/// Fields
/// ------
/// - `inner`: [`HmmModel`]
///   Fully configured model owning its parameters and belief state.
///
/// Invariants
/// ----------
/// - `inner` always holds a validated row-stochastic parameter set; failed
///   training calls leave it untouched.
///
/// Performance
/// -----------
/// - All heavy numerical work occurs inside `inner`; this wrapper performs
///   only input conversion, dispatch, and error mapping.
///
/// Notes
/// -----
/// - Observation arrays may carry a negative sentinel value; everything
///   from the first negative entry onward is ignored, and an optional
///   `window` keeps only the trailing observations.
/// - Native Rust callers should use [`HmmModel`] directly; this type exists
///   solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_hmm.models", unsendable)]
pub struct HMM {
    /// Underlying Rust HmmModel.
    pub inner: HmmModel,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl HMM {
    #[new]
    #[pyo3(
        signature = (n_states, n_symbols, seed = None, smoothing = None),
        text_signature = "(n_states, n_symbols, /, seed=None, smoothing=None)"
    )]
    pub fn new(
        n_states: usize, n_symbols: usize, seed: Option<u64>, smoothing: Option<f64>,
    ) -> PyResult<Self> {
        let inner = build_hmm_model(n_states, n_symbols, seed, smoothing)?;
        Ok(HMM { inner })
    }

    /// Run fixed-count Baum-Welch training on the observations and return
    /// the sequence log-score under the final parameters.
    #[pyo3(
        signature = (observations, iterations, window = None),
        text_signature = "(self, observations, iterations, /, window=None)"
    )]
    pub fn train<'py>(
        &mut self, py: Python<'py>, observations: &Bound<'py, PyAny>, iterations: usize,
        window: Option<usize>,
    ) -> PyResult<f64> {
        let seq = extract_obs_sequence(py, observations, self.inner.shape.n_symbols, window)?;
        Ok(self.inner.train(&seq, iterations)?)
    }

    /// Distribution over the next emission given the observations.
    #[pyo3(
        signature = (observations, window = None),
        text_signature = "(self, observations, /, window=None)"
    )]
    pub fn predict_next_emission<'py>(
        &mut self, py: Python<'py>, observations: &Bound<'py, PyAny>, window: Option<usize>,
    ) -> PyResult<Vec<f64>> {
        let seq = extract_obs_sequence(py, observations, self.inner.shape.n_symbols, window)?;
        Ok(self.inner.predict_next_emission(&seq)?.to_vec())
    }

    /// Comparative log-score of the observations under the current
    /// parameters; only meaningful for ranking models on the same sequence.
    #[pyo3(
        signature = (observations, window = None),
        text_signature = "(self, observations, /, window=None)"
    )]
    pub fn sequence_score<'py>(
        &self, py: Python<'py>, observations: &Bound<'py, PyAny>, window: Option<usize>,
    ) -> PyResult<f64> {
        let seq = extract_obs_sequence(py, observations, self.inner.shape.n_symbols, window)?;
        Ok(self.inner.sequence_score(&seq)?)
    }

    /// Re-draw parameters per the configured initialization policy and
    /// clear the tracked belief.
    pub fn reset(&mut self) -> PyResult<()> {
        Ok(self.inner.reset()?)
    }

    /// Index of the largest entry of `distribution`; the first index wins
    /// ties.
    #[staticmethod]
    pub fn most_likely_symbol(distribution: Vec<f64>) -> PyResult<usize> {
        Ok(most_likely_symbol_impl(Array1::from(distribution).view())?)
    }

    #[getter]
    pub fn n_states(&self) -> usize {
        self.inner.shape.n_states
    }

    #[getter]
    pub fn n_symbols(&self) -> usize {
        self.inner.shape.n_symbols
    }

    #[getter]
    pub fn belief(&self) -> Option<Vec<f64>> {
        self.inner.belief().map(|b| b.to_vec())
    }

    #[getter]
    pub fn initial(&self) -> Vec<f64> {
        self.inner.params.initial.to_vec()
    }

    #[getter]
    pub fn transition(&self) -> Vec<Vec<f64>> {
        self.inner.params.transition.rows().into_iter().map(|r| r.to_vec()).collect()
    }

    #[getter]
    pub fn emission(&self) -> Vec<Vec<f64>> {
        self.inner.params.emission.rows().into_iter().map(|r| r.to_vec()).collect()
    }
}

/// _rust_hmm — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_hmm` Python module and register the `models` submodule
/// used by the public `rust_hmm` package.
///
/// Key behaviors
/// -------------
/// - Create the `models` submodule and attach it to the parent `_rust_hmm`
///   module.
/// - Register the submodule in `sys.modules` so it is importable via the
///   dotted path from Python.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_hmm<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let models_mod = PyModule::new(_py, "models")?;
    models(_py, m, &models_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_hmm.models", models_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn models<'py>(
    _py: Python, rust_hmm: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<HMM>()?;
    rust_hmm.add_submodule(m)?;
    Ok(())
}
