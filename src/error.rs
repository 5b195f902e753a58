//! Error types for the adapter layer.

use thiserror::Error;

/// Errors raised while adapting encoder outputs into decoder inputs.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error(
        "batch size mismatch: static {static_batch}, dynamic {dynamic_batch}, future {future_batch}"
    )]
    BatchMismatch {
        static_batch: usize,
        dynamic_batch: usize,
        future_batch: usize,
    },

    #[error("time dimension mismatch: dynamic has {dynamic_steps} steps, future has {future_steps}")]
    TimeMismatch {
        dynamic_steps: usize,
        future_steps: usize,
    },

    #[error("tensor shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Result of an adapter operation.
pub type Result<T> = std::result::Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AdapterError::BatchMismatch {
            static_batch: 2,
            dynamic_batch: 2,
            future_batch: 3,
        };
        assert_eq!(
            err.to_string(),
            "batch size mismatch: static 2, dynamic 2, future 3"
        );

        let err = AdapterError::TimeMismatch {
            dynamic_steps: 5,
            future_steps: 7,
        };
        assert_eq!(
            err.to_string(),
            "time dimension mismatch: dynamic has 5 steps, future has 7"
        );
    }
}
