//! Wavelet-domain sparse fine-tuning (WaveFT) for candle linear layers.
//!
//! A WaveFT adapter learns a handful of coefficients in the 2-D wavelet
//! domain of a frozen weight matrix. The coefficients sit at fixed,
//! seed-determined coordinates; the dense weight update is recovered by an
//! inverse discrete wavelet transform:
//!
//! ```text
//! grid   = zeros(padded_out, padded_in); grid[coords + offset] = spectrum
//! delta  = crop(IDWT2(split_quadrants(grid), family)) * scaling
//! W'     = W + delta
//! ```
//!
//! With `use_idwt = false` the spectrum is scattered straight into the
//! weight grid instead.
//!
//! # Quick Start
//!
//! ```ignore
//! use candle_core::{Device, Tensor};
//! use candle_nn::Linear;
//! use waveft_rs::{WaveFtConfig, WaveFtLinear};
//!
//! let device = Device::Cpu;
//! let base = Linear::new(Tensor::randn(0.0f32, 1.0, (256, 128), &device)?, None);
//!
//! let config = WaveFtConfig::default()
//!     .with_n_frequency(512)
//!     .with_wavelet_family("db2");
//! let mut layer = WaveFtLinear::new(base, "default", &config)?;
//!
//! // Training: only the spectra are trainable.
//! let vars = layer.trainable_vars();
//! let input = Tensor::randn(0.0f32, 1.0, (4, 128), &device)?;
//! let output = layer.forward(&input)?;
//!
//! // Inference: fold the adapter into the base weight.
//! layer.merge(true, None)?;
//! ```
//!
//! # Feature Flags
//!
//! - `default`: CPU-only
//! - `cuda`: Enable CUDA tensors in candle
//!
//! # Wavelet Families
//!
//! Daubechies (`db1`..`db38`), Symlets (`sym2`..`sym20`) and Coiflets
//! (`coif1`..`coif17`) are supported, and the built-in inverse transform
//! ships filters for all of them. A custom [`WaveletReconstruct`] backend can
//! replace it per layer.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::doc_markdown)]

mod adapter;
mod config;
mod error;
pub mod io;
pub mod layer;
pub mod wavelet;

pub use adapter::{sample_indices, validate_n_frequency, AdapterRecord, WaveFtAdapter};
pub use config::{ReconstructionMode, SpectrumInit, WaveFtConfig};
pub use error::{Result, WaveFtError};
pub use layer::{BaseLinear, Conv1D, WaveFtLayer, WaveFtLinear, WeightLayout};
pub use wavelet::{FilterBankIdwt, SubBands, WaveletFamily, WaveletReconstruct};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{ReconstructionMode, WaveFtConfig};
    pub use crate::error::{Result, WaveFtError};
    pub use crate::layer::{BaseLinear, WaveFtLinear};
    pub use crate::wavelet::WaveletFamily;
}
