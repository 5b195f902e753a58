//! Future-feature integrator adapter.
//!
//! Folds the known future covariates into the dynamic decoder input, so each
//! timestep carries its full forecast-horizon context.

use ndarray::{concatenate, Array2, Array3, Array4, Axis};

use super::{DecoderInput, Enc2Dec};
use crate::error::{AdapterError, Result};

/// Concatenates flattened future covariates onto the dynamic encoder output.
///
/// The `(horizon, future_features)` tail of the future tensor is flattened
/// into one feature axis, row-major, and appended to the dynamic output along
/// the feature axis. The result has
/// `dynamic_features + horizon * future_features` channels per timestep.
///
/// Batch and time dimensions are validated before concatenating; mismatched
/// inputs return [`AdapterError`] instead of panicking inside the tensor op.
#[derive(Debug, Clone, Copy, Default)]
pub struct FutureFeatIntegrator;

impl Enc2Dec for FutureFeatIntegrator {
    fn forward(
        &self,
        static_input: &Array2<f64>,
        dynamic_input: &Array3<f64>,
        future_input: &Array4<f64>,
    ) -> Result<DecoderInput> {
        let (future_batch, future_steps, horizon, future_features) = future_input.dim();
        let (dynamic_batch, dynamic_steps, dynamic_features) = dynamic_input.dim();
        let static_batch = static_input.nrows();

        if static_batch != dynamic_batch || future_batch != dynamic_batch {
            return Err(AdapterError::BatchMismatch {
                static_batch,
                dynamic_batch,
                future_batch,
            });
        }
        if future_steps != dynamic_steps {
            return Err(AdapterError::TimeMismatch {
                dynamic_steps,
                future_steps,
            });
        }

        // (batch, time, horizon, features) -> (batch, time, horizon * features)
        let flattened = future_input
            .as_standard_layout()
            .into_owned()
            .into_shape((future_batch, future_steps, horizon * future_features))?;

        log::debug!(
            "integrating future covariates: dynamic {:?} + future {:?} -> {} channels",
            dynamic_input.dim(),
            future_input.dim(),
            dynamic_features + horizon * future_features
        );

        let combined = concatenate(Axis(2), &[dynamic_input.view(), flattened.view()])?;

        Ok(DecoderInput {
            static_input: static_input.clone(),
            dynamic_input: combined,
        })
    }

    fn dynamic_output_size(
        &self,
        dynamic_features: usize,
        horizon: usize,
        future_features: usize,
    ) -> usize {
        dynamic_features + horizon * future_features
    }
}
