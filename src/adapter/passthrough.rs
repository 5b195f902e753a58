//! Pass-through adapter.

use ndarray::{Array2, Array3, Array4};

use super::{DecoderInput, Enc2Dec};
use crate::error::Result;

/// Forwards the encoder outputs to the decoder unchanged.
///
/// The future covariates are accepted and dropped without being inspected.
/// Use this when the decoder needs no knowledge of the forecast horizon
/// beyond what the encoder already folded into its state.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl Enc2Dec for PassThrough {
    fn forward(
        &self,
        static_input: &Array2<f64>,
        dynamic_input: &Array3<f64>,
        _future_input: &Array4<f64>,
    ) -> Result<DecoderInput> {
        Ok(DecoderInput {
            static_input: static_input.clone(),
            dynamic_input: dynamic_input.clone(),
        })
    }

    fn dynamic_output_size(
        &self,
        dynamic_features: usize,
        _horizon: usize,
        _future_features: usize,
    ) -> usize {
        dynamic_features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3, Array4};

    #[test]
    fn test_passthrough_identity() {
        let static_input = Array2::from_shape_fn((2, 6), |(i, j)| (i * 10 + j) as f64);
        let dynamic_input = Array3::from_shape_fn((2, 5, 3), |(i, j, k)| (i + j + k) as f64);
        let future_input = Array4::from_elem((2, 5, 4, 2), 99.0);

        let out = PassThrough
            .forward(&static_input, &dynamic_input, &future_input)
            .unwrap();

        assert_eq!(out.static_input, static_input);
        assert_eq!(out.dynamic_input, dynamic_input);
    }

    #[test]
    fn test_passthrough_ignores_future() {
        let static_input = Array2::<f64>::zeros((2, 6));
        let dynamic_input = Array3::<f64>::zeros((2, 5, 3));

        // Wrong batch, wrong time, empty feature axis: none of it matters,
        // the future tensor is never read.
        let malformed = Array4::<f64>::zeros((7, 1, 0, 3));

        let out = PassThrough
            .forward(&static_input, &dynamic_input, &malformed)
            .unwrap();

        assert_eq!(out.static_input.dim(), (2, 6));
        assert_eq!(out.dynamic_input.dim(), (2, 5, 3));
    }

    #[test]
    fn test_passthrough_output_size() {
        assert_eq!(PassThrough.dynamic_output_size(3, 4, 2), 3);
        assert_eq!(PassThrough.dynamic_output_size(0, 100, 100), 0);
    }
}
