//! models — user-facing discrete-HMM model types.
//!
//! Purpose
//! -------
//! Expose the high-level model API built on `hmm::core`: the [`HmmModel`]
//! engine (construction, Baum-Welch training, next-emission prediction,
//! comparative scoring, belief tracking, reset) and the
//! [`most_likely_symbol`] reducer for turning a predicted distribution into
//! a single symbol.
//!
//! Invariants & assumptions
//! ------------------------
//! - A model's parameters are always a validated row-stochastic set;
//!   training replaces them atomically or not at all.
//! - Each model instance is exclusively owned mutable state; concurrent use
//!   of one instance is not supported — run independent instances instead.
//!
//! Downstream usage
//! ----------------
//! - Construct an [`HmmShape`](crate::hmm::core::shape::HmmShape) and an
//!   [`HmmOptions`](crate::hmm::core::options::HmmOptions), then
//!   `HmmModel::new(shape, options)`; feed it validated
//!   [`ObsSequence`](crate::hmm::core::data::ObsSequence) values through
//!   `train`, `predict_next_emission`, and `sequence_score`.
//! - Front-ends (Python bindings, classification drivers) are expected to
//!   depend on the items re-exported below or via the [`prelude`].

pub mod discrete;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::discrete::{HmmModel, most_likely_symbol};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::discrete::{HmmModel, most_likely_symbol};
}
