//! # Adapter Module
//!
//! Glue between the encoder and decoder stages of a seq2seq forecaster.
//!
//! The encoder produces a static summary shaped `(batch, static_features)`
//! and a per-timestep dynamic summary shaped `(batch, time, dynamic_features)`.
//! Alongside these, the pipeline carries covariates known ahead of time for
//! the forecast horizon, shaped `(batch, time, horizon, future_features)`.
//! An [`Enc2Dec`] adapter decides how much of that future information reaches
//! the decoder.

mod integrator;
mod passthrough;

pub use integrator::FutureFeatIntegrator;
pub use passthrough::PassThrough;

use ndarray::{Array2, Array3, Array4};

use crate::error::Result;

/// Input tensors for the decoder stage.
#[derive(Debug, Clone, PartialEq)]
pub struct DecoderInput {
    /// Static features, shape (batch, static_features)
    pub static_input: Array2<f64>,

    /// Dynamic features, shape (batch, time, dynamic_features)
    pub dynamic_input: Array3<f64>,
}

/// Adapts encoder outputs and future covariates into decoder inputs.
///
/// Implementations are pure: no state, no side effects, and the same inputs
/// always produce the same outputs. The static tensor passes through
/// unchanged; only the dynamic tensor's feature axis may grow.
pub trait Enc2Dec {
    /// Transforms the encoder outputs into the decoder input tensors.
    ///
    /// * `static_input` - shape (batch, static_features)
    /// * `dynamic_input` - shape (batch, time, dynamic_features)
    /// * `future_input` - shape (batch, time, horizon, future_features)
    fn forward(
        &self,
        static_input: &Array2<f64>,
        dynamic_input: &Array3<f64>,
        future_input: &Array4<f64>,
    ) -> Result<DecoderInput>;

    /// Feature width of the dynamic tensor this adapter hands the decoder,
    /// given the input widths. Lets a model wire layer sizes before any
    /// data flows.
    fn dynamic_output_size(
        &self,
        dynamic_features: usize,
        horizon: usize,
        future_features: usize,
    ) -> usize;
}
