//! User-facing configuration for [`HmmModel`](crate::hmm::models::discrete::HmmModel).
//!
//! Purpose
//! -------
//! Bundle the knobs a caller can turn — initialization policy and the
//! re-estimation smoothing floor — into one validated options struct, so the
//! model constructor takes a single coherent argument instead of a growing
//! parameter list.
//!
//! Key behaviors
//! -------------
//! - [`HmmOptions::new`] validates the smoothing floor (finite, in [0, 1)).
//! - [`HmmOptions::default`] gives random unseeded initialization and a
//!   smoothing floor of [`DEFAULT_SMOOTHING`].
//!
//! Conventions
//! -----------
//! - `smoothing` is added to every re-estimation count before its row is
//!   renormalized; 0.0 disables smoothing entirely.
use crate::hmm::{
    core::{init::Init, validation::validate_smoothing},
    errors::HmmResult,
};

/// Smoothing floor applied during re-estimation unless overridden.
///
/// Small enough not to bias estimates on realistic sequence lengths, large
/// enough to keep rows strictly positive after renormalization.
pub const DEFAULT_SMOOTHING: f64 = 1e-10;

/// Validated configuration for a discrete HMM.
#[derive(Debug, Clone)]
pub struct HmmOptions {
    /// How starting parameters are produced.
    pub init: Init,
    /// Additive floor applied to re-estimated counts before renormalization.
    pub smoothing: f64,
}

impl HmmOptions {
    /// Build options with a validated smoothing floor.
    ///
    /// Errors
    /// ------
    /// - `HmmError::InvalidSmoothing` if `smoothing` is non-finite, negative,
    ///   or ≥ 1.
    pub fn new(init: Init, smoothing: f64) -> HmmResult<Self> {
        let smoothing = validate_smoothing(smoothing)?;
        Ok(HmmOptions { init, smoothing })
    }

    /// Random initialization with the given seed, default smoothing.
    pub fn seeded(seed: u64) -> Self {
        HmmOptions { init: Init::Random { seed: Some(seed) }, smoothing: DEFAULT_SMOOTHING }
    }
}

impl Default for HmmOptions {
    fn default() -> Self {
        HmmOptions { init: Init::default(), smoothing: DEFAULT_SMOOTHING }
    }
}
