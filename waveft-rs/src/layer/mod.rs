//! WaveFT layers.
//!
//! - [`WaveFtLayer`]: adapter registry and delta-weight reconstruction
//! - [`WaveFtLinear`]: wraps a base layer, handles merge/unmerge and forward
//! - [`BaseLinear`]: the seam to the wrapped layer (`candle_nn::Linear`, [`Conv1D`])

mod base;
mod linear;
mod state;

pub use base::{BaseLinear, Conv1D, WeightLayout};
pub use linear::WaveFtLinear;
pub use state::{indices_key, spectrum_key, PaddedGrid, WaveFtLayer};
