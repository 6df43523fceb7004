//! core — shared discrete-HMM data, parameters, and recursions.
//!
//! Purpose
//! -------
//! Collect the core building blocks for discrete-emission hidden Markov
//! models: observation-sequence containers, validated parameter sets,
//! initialization policies, the scaled forward/backward recursions, and the
//! γ/ξ posterior machinery that drives Baum-Welch re-estimation. The
//! user-facing model in [`models`](crate::hmm::models) builds on top of
//! these primitives.
//!
//! Key behaviors
//! -------------
//! - Define model configuration and shape types ([`HmmShape`],
//!   [`HmmOptions`], [`Init`]) plus the owned parameter container
//!   ([`HmmParams`]) and the validated observation container
//!   ([`ObsSequence`]).
//! - Implement the scaled forward/backward passes ([`forward`],
//!   [`backward`]) and the posterior layer ([`Posteriors`], [`reestimate`]).
//! - Centralize row-stochastic and range validation in [`validation`] so
//!   every container can assume well-formed inputs after construction.
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameters stored in [`HmmParams`] are row-stochastic: finite,
//!   non-negative entries, each row summing to 1 within
//!   [`ROW_SUM_TOL`](validation::ROW_SUM_TOL).
//! - Observation symbols stored in [`ObsSequence`] are in-range for the
//!   alphabet size they were validated against; sequences are non-empty.
//! - α, β, and γ rows sum to 1 after each pass; degenerate normalizers are
//!   surfaced as errors, never divided by.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout; `transition[[i, j]]` is
//!   P(j at t+1 | i at t) and `emission[[i, k]]` is P(symbol k | state i).
//! - This module avoids I/O and logging; it operates purely on `ndarray`
//!   containers and scalar values. Error conditions are reported via
//!   [`HmmResult`](crate::hmm::errors::HmmResult).
//!
//! Downstream usage
//! ----------------
//! - [`HmmModel`](crate::hmm::models::discrete::HmmModel) composes these
//!   pieces into train / predict / score operations; Python bindings depend
//!   on that surface rather than on this module directly.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover container validation, normalization
//!   invariants, hand-computable recursion values, posterior identities,
//!   and re-estimation edge cases; full pipelines are exercised by the
//!   model-level and integration tests.

pub mod data;
pub mod filters;
pub mod init;
pub mod options;
pub mod params;
pub mod posteriors;
pub mod shape;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::ObsSequence;
pub use self::filters::{Forward, backward, forward};
pub use self::init::Init;
pub use self::options::{DEFAULT_SMOOTHING, HmmOptions};
pub use self::params::HmmParams;
pub use self::posteriors::{Posteriors, reestimate};
pub use self::shape::HmmShape;
pub use self::validation::{
    ROW_SUM_TOL, validate_alphabet, validate_row_stochastic, validate_smoothing,
    validate_stochastic_row,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_hmm::hmm::core::prelude::*;
//
// to import the main core surface in a single line.

pub mod prelude {
    pub use super::data::ObsSequence;
    pub use super::filters::{backward, forward};
    pub use super::init::Init;
    pub use super::options::HmmOptions;
    pub use super::params::HmmParams;
    pub use super::posteriors::{Posteriors, reestimate};
    pub use super::shape::HmmShape;
}
