//! Error types for waveft-rs.

use thiserror::Error;

/// Result type alias for WaveFT operations.
pub type Result<T> = std::result::Result<T, WaveFtError>;

/// Errors that can occur while configuring, merging or running WaveFT adapters.
#[derive(Debug, Error)]
pub enum WaveFtError {
    /// Invalid adapter configuration (bad `n_frequency`, unknown wavelet family, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The wrapped base layer does not expose a usable 2-D weight.
    #[error("unsupported base layer: {0}")]
    UnsupportedBaseLayer(String),

    /// Safe merge produced non-finite weights.
    #[error("NaNs detected in the merged weights. The adapter {adapter} seems to be broken")]
    MergeCorruption {
        /// Name of the adapter whose delta corrupted the weights.
        adapter: String,
    },

    /// Adapter name not registered on this layer.
    #[error("unknown adapter: {0}")]
    UnknownAdapter(String),

    /// Shape mismatch in tensor operations.
    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// Expected shape.
        expected: Vec<usize>,
        /// Actual shape.
        actual: Vec<usize>,
    },

    /// Candle tensor operation error.
    #[error("tensor error: {0}")]
    Tensor(#[from] candle_core::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for WaveFtError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_corruption_names_adapter() {
        let err = WaveFtError::MergeCorruption {
            adapter: "default".to_string(),
        };
        assert!(err.to_string().contains("default"));
    }

    #[test]
    fn test_candle_error_converts() {
        let err: WaveFtError = candle_core::Error::Msg("boom".into()).into();
        assert!(matches!(err, WaveFtError::Tensor(_)));
    }
}
