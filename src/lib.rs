//! # enc2dec
//!
//! Encoder-to-decoder adapters for sequence-to-sequence forecasting models.
//!
//! A seq2seq forecaster splits into an encoder that summarizes history and a
//! decoder that turns that summary into a forecast. The adapters in this crate
//! sit between the two stages: they take the encoder's static and dynamic
//! outputs together with the covariates known for the forecast horizon and
//! produce the tensors the decoder consumes.
//!
//! ## Modules
//!
//! - `adapter` - The [`Enc2Dec`] trait and its two implementations
//! - `config` - Serde-friendly adapter selection for model configs
//! - `error` - Error types
//!
//! ## Example
//!
//! ```
//! use enc2dec::{Enc2Dec, FutureFeatIntegrator};
//! use ndarray::{Array2, Array3, Array4};
//!
//! // batch 2, 5 timesteps, 3 dynamic features, horizon 4 with 2 known covariates
//! let static_input = Array2::<f64>::zeros((2, 6));
//! let dynamic_input = Array3::<f64>::zeros((2, 5, 3));
//! let future_input = Array4::<f64>::zeros((2, 5, 4, 2));
//!
//! let adapter = FutureFeatIntegrator;
//! let decoder_input = adapter
//!     .forward(&static_input, &dynamic_input, &future_input)
//!     .unwrap();
//!
//! // 3 dynamic channels + 4 * 2 flattened future channels
//! assert_eq!(decoder_input.dynamic_input.dim(), (2, 5, 11));
//! assert_eq!(decoder_input.static_input.dim(), (2, 6));
//! ```

pub mod adapter;
pub mod config;
pub mod error;

pub use adapter::{DecoderInput, Enc2Dec, FutureFeatIntegrator, PassThrough};
pub use config::AdapterKind;
pub use error::{AdapterError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
