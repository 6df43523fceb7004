//! utils — Python input-extraction helpers for the FFI surface.
//!
//! Purpose
//! -------
//! Convert Python objects (numpy arrays, pandas Series, plain sequences)
//! into the validated Rust containers the HMM stack consumes, keeping the
//! `#[pymethods]` bodies in `lib.rs` to dispatch and error mapping only.
//!
//! Key behaviors
//! -------------
//! - [`extract_i64_array`] accepts a 1-D `numpy.ndarray`, anything with a
//!   `to_numpy` method, or a plain sequence of integers, and yields a
//!   contiguous read-only int64 view.
//! - [`extract_obs_sequence`] turns raw observations into an
//!   [`ObsSequence`], applying the negative-sentinel truncation and the
//!   optional trailing window before validation.
//! - [`build_hmm_model`] assembles an [`HmmModel`] from Python-friendly
//!   scalar arguments (dimensions, optional seed, optional smoothing).
//!
//! Invariants & assumptions
//! ------------------------
//! - Everything here is FFI glue: no numerical work, only conversion and
//!   validation delegation. All functions are compiled only under the
//!   `python-bindings` feature.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
use crate::hmm::{
    core::{data::ObsSequence, init::Init, options::HmmOptions, shape::HmmShape},
    models::discrete::HmmModel,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_i64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, i64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<i64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<i64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<i64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of int64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Build a validated [`ObsSequence`] from raw Python observations.
///
/// Truncates at the first negative sentinel, keeps at most the trailing
/// `window` observations if given, then validates symbols against
/// `n_symbols`. Errors from the Rust validators surface as `ValueError`.
#[cfg(feature = "python-bindings")]
pub fn extract_obs_sequence<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, n_symbols: usize, window: Option<usize>,
) -> PyResult<ObsSequence> {
    let arr = extract_i64_array(py, raw_data)?;
    let slice = arr.as_slice().map_err(|_| {
        PyTypeError::new_err("observations must be a 1-D contiguous int64 array or sequence")
    })?;
    Ok(ObsSequence::from_raw(slice, n_symbols, window)?)
}

/// Assemble an [`HmmModel`] from Python-friendly scalar arguments.
#[cfg(feature = "python-bindings")]
pub fn build_hmm_model(
    n_states: usize, n_symbols: usize, seed: Option<u64>, smoothing: Option<f64>,
) -> PyResult<HmmModel> {
    let shape = HmmShape::new(n_states, n_symbols)?;
    let init = Init::Random { seed };
    let options = match smoothing {
        Some(value) => HmmOptions::new(init, value)?,
        None => HmmOptions { init, ..HmmOptions::default() },
    };
    Ok(HmmModel::new(shape, options)?)
}
