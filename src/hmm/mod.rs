//! hmm — discrete-emission hidden-Markov-model stack: core numerics,
//! models, and errors.
//!
//! Purpose
//! -------
//! Provide a cohesive discrete-HMM layer that bundles validated data and
//! parameter containers, the scaled forward/backward recursions, Baum-Welch
//! re-estimation, a user-facing model API, and shared error types under a
//! single namespace. This is the surface most consumers (including Python
//! bindings) should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect core numerical and structural building blocks in [`core`]:
//!   observation sequences, shapes, options, parameter sets, initialization
//!   policies, filters, posteriors, and validation.
//! - Expose the user-facing engine in [`models`] via [`HmmModel`]:
//!   fixed-iteration Baum-Welch training, next-emission prediction from the
//!   tracked belief state, comparative sequence scoring, and reset.
//! - Centralize error types in [`errors`] (`HmmError` and the `HmmResult`
//!   alias) so callers see a uniform error surface across the stack.
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameters are row-stochastic by construction and stay that way
//!   through training; updates are atomic.
//! - Observation sequences are validated against the model's alphabet
//!   before any recursion runs; all recursions renormalize per step so no
//!   probability underflows on long sequences.
//! - Model instances are exclusively owned mutable state; concurrency means
//!   independent instances, never a shared one.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; `transition[[i, j]]` is P(j at t+1 | i at t),
//!   `emission[[i, k]]` is P(symbol k | state i).
//! - The stack performs no I/O and no logging; error conditions are
//!   surfaced as [`HmmResult`], and panics indicate programming errors.
//!
//! Downstream usage
//! ----------------
//! - Typical end-to-end flow:
//!   1. Build an [`HmmShape`] (N, M) and [`HmmOptions`] (init policy,
//!      smoothing floor).
//!   2. Construct an [`HmmModel`] (`new` for drawn parameters, `from_params`
//!      for caller-supplied ones).
//!   3. Wrap observations in an [`ObsSequence`] (`from_raw` strips sentinel
//!      suffixes and applies a trailing window).
//!   4. Call `train(seq, iterations)`, then `predict_next_emission(seq)`
//!      (reduced via [`most_likely_symbol`]) or `sequence_score(seq)` for
//!      cross-model classification.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`core`] cover container validation, normalization
//!   invariants, posterior identities, and re-estimation edge cases; tests
//!   in [`models`] cover training idempotence and improvement, prediction,
//!   scoring, and reset. The integration test file exercises the full
//!   sample → train → predict → classify pipeline.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the “everyday” types most users need. More specialized items
// (validation helpers, low-level recursions) remain under their submodules.

pub use self::core::{HmmOptions, HmmParams, HmmShape, Init, ObsSequence};

pub use self::errors::{HmmError, HmmResult};

pub use self::models::{HmmModel, most_likely_symbol};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_hmm::hmm::prelude::*;
//
// to import the main model surface in a single line.

pub mod prelude {
    pub use super::{
        HmmError, HmmModel, HmmOptions, HmmParams, HmmResult, HmmShape, Init, ObsSequence,
        most_likely_symbol,
    };
}
