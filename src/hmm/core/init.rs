//! Initialization policies for HMM parameters.
//!
//! Purpose
//! -------
//! Define how a model obtains its starting parameters before training:
//! either drawn randomly (independent uniform entries renormalized per row,
//! the standard symmetry-breaking start for Baum-Welch) or fixed to
//! user-supplied, pre-validated values.
//!
//! Key behaviors
//! -------------
//! - [`Init::Random`] draws every entry of a row independently uniform on
//!   [0, 1) and divides by the row's sum. The resulting asymmetry is what
//!   lets Baum-Welch escape the symmetric fixed point; near-uniform rows
//!   would leave re-estimation stuck producing barely differentiated
//!   states.
//! - An optional `seed` makes random draws reproducible; `None` seeds from
//!   OS entropy.
//! - [`Init::Fixed`] re-validates the stored parameters against the
//!   requested shape, so a model can never silently pair its dimensions
//!   with differently sized matrices.
use crate::hmm::{
    core::{params::HmmParams, shape::HmmShape},
    errors::HmmResult,
};
use ndarray::{Array1, Array2};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Parameter-initialization policy for [`HmmModel`](crate::hmm::models::discrete::HmmModel).
#[derive(Debug, Clone)]
pub enum Init {
    /// Draw uniform row-stochastic parameters, optionally seeded.
    Random { seed: Option<u64> },
    /// Use the given pre-validated parameters, checked against the shape.
    Fixed(HmmParams),
}

impl Default for Init {
    fn default() -> Self {
        Init::Random { seed: None }
    }
}

impl Init {
    /// Materialize starting parameters for `shape`.
    ///
    /// For `Random`, every row of π, A, and B is drawn independently; for
    /// `Fixed`, the stored parameters are re-validated against `shape` and
    /// cloned out.
    ///
    /// Errors
    /// ------
    /// - `HmmError::ShapeMismatch` when `Fixed` parameters were built for
    ///   different dimensions than `shape`; the `what` tag names the first
    ///   offending container.
    pub fn draw(&self, shape: &HmmShape) -> HmmResult<HmmParams> {
        match self {
            Init::Fixed(params) => HmmParams::new(
                params.initial.clone(),
                params.transition.clone(),
                params.emission.clone(),
                shape,
            ),
            Init::Random { seed } => {
                let mut rng = match seed {
                    Some(s) => StdRng::seed_from_u64(*s),
                    None => StdRng::from_entropy(),
                };
                let n = shape.n_states;
                let m = shape.n_symbols;
                Ok(HmmParams {
                    initial: draw_row(&mut rng, n),
                    transition: draw_matrix(&mut rng, n, n),
                    emission: draw_matrix(&mut rng, n, m),
                })
            }
        }
    }
}

/// One stochastic row of length `len`: independent uniform entries divided
/// by their sum.
fn draw_row(rng: &mut StdRng, len: usize) -> Array1<f64> {
    let mut row = Array1::from_shape_fn(len, |_| rng.gen::<f64>());
    let sum = row.sum();
    row.mapv_inplace(|v| v / sum);
    row
}

fn draw_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Array2<f64> {
    let mut matrix = Array2::zeros((rows, cols));
    for mut row in matrix.rows_mut() {
        row.assign(&draw_row(rng, cols));
    }
    matrix
}
