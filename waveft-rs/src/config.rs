//! Configuration for WaveFT adapters.

use serde::{Deserialize, Serialize};

use crate::wavelet::WaveletFamily;

/// How the sparse spectrum is expanded into a dense delta weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconstructionMode {
    /// Scatter into a padded grid, split into sub-bands and run the inverse DWT.
    #[default]
    Idwt,
    /// Scatter the spectrum straight into the weight grid.
    Direct,
}

impl ReconstructionMode {
    /// Map the `use_idwt` flag onto a mode.
    #[must_use]
    pub const fn from_use_idwt(use_idwt: bool) -> Self {
        if use_idwt {
            Self::Idwt
        } else {
            Self::Direct
        }
    }

    /// Whether this mode runs the inverse DWT.
    #[must_use]
    pub const fn uses_idwt(self) -> bool {
        matches!(self, Self::Idwt)
    }
}

/// Initial values of a freshly created spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpectrumInit {
    /// All zeros: the adapter starts as a no-op.
    Zeros,
    /// Independent draws from `N(0, 0.01^2)`.
    Gaussian,
}

impl SpectrumInit {
    /// Standard deviation of the Gaussian initialization.
    pub const GAUSSIAN_STD: f64 = 0.01;
}

impl From<bool> for SpectrumInit {
    /// `init_weights = true` requests zero initialization.
    fn from(init_weights: bool) -> Self {
        if init_weights {
            Self::Zeros
        } else {
            Self::Gaussian
        }
    }
}

/// Configuration for a WaveFT-wrapped linear layer.
///
/// # Example
///
/// ```
/// use waveft_rs::WaveFtConfig;
///
/// let config = WaveFtConfig::default()
///     .with_n_frequency(64)
///     .with_wavelet_family("sym4")
///     .with_scaling(25.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveFtConfig {
    /// Number of trainable spectrum coefficients.
    /// Must not exceed `out_features * in_features` of the wrapped layer.
    pub n_frequency: usize,

    /// Multiplier applied to the reconstructed delta.
    pub scaling: f64,

    /// Set when the base layer stores its weight as `(in, out)` (GPT-2 `Conv1D`).
    #[serde(default)]
    pub fan_in_fan_out: bool,

    /// Zero-initialize the spectrum instead of drawing small Gaussian values.
    #[serde(default)]
    pub init_weights: bool,

    /// Seed for sampling spectrum coordinates.
    pub random_loc_seed: u64,

    /// Wavelet family name, see [`crate::wavelet::WAVELET_REDUCTIONS`].
    pub wavelet_family: String,

    /// Dense-delta construction path.
    #[serde(default)]
    pub reconstruction: ReconstructionMode,
}

impl Default for WaveFtConfig {
    fn default() -> Self {
        Self {
            n_frequency: 1000,
            scaling: 150.0,
            fan_in_fan_out: false,
            init_weights: false,
            random_loc_seed: 777,
            wavelet_family: "db1".to_string(),
            reconstruction: ReconstructionMode::Idwt,
        }
    }
}

impl WaveFtConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of spectrum coefficients.
    #[must_use]
    pub const fn with_n_frequency(mut self, n_frequency: usize) -> Self {
        self.n_frequency = n_frequency;
        self
    }

    /// Set the delta scaling factor.
    #[must_use]
    pub const fn with_scaling(mut self, scaling: f64) -> Self {
        self.scaling = scaling;
        self
    }

    /// Set the weight layout convention.
    #[must_use]
    pub const fn with_fan_in_fan_out(mut self, fan_in_fan_out: bool) -> Self {
        self.fan_in_fan_out = fan_in_fan_out;
        self
    }

    /// Request zero (`true`) or Gaussian (`false`) spectrum initialization.
    #[must_use]
    pub const fn with_init_weights(mut self, init_weights: bool) -> Self {
        self.init_weights = init_weights;
        self
    }

    /// Set the coordinate sampling seed.
    #[must_use]
    pub const fn with_random_loc_seed(mut self, seed: u64) -> Self {
        self.random_loc_seed = seed;
        self
    }

    /// Set the wavelet family by name.
    #[must_use]
    pub fn with_wavelet_family(mut self, family: impl Into<String>) -> Self {
        self.wavelet_family = family.into();
        self
    }

    /// Choose between IDWT and direct reconstruction.
    #[must_use]
    pub const fn with_use_idwt(mut self, use_idwt: bool) -> Self {
        self.reconstruction = ReconstructionMode::from_use_idwt(use_idwt);
        self
    }

    /// Spectrum initialization implied by `init_weights`.
    #[must_use]
    pub fn spectrum_init(&self) -> SpectrumInit {
        SpectrumInit::from(self.init_weights)
    }

    /// Resolve the configured wavelet family.
    ///
    /// # Errors
    ///
    /// Returns error if the family name is not registered.
    pub fn family(&self) -> crate::Result<WaveletFamily> {
        WaveletFamily::from_name(&self.wavelet_family)
    }

    /// Validate the shape-independent parts of the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if configuration is invalid.
    pub fn validate(&self) -> crate::Result<()> {
        if self.n_frequency == 0 {
            return Err(crate::WaveFtError::InvalidConfig(format!(
                "`n_frequency` should be a positive integer value but the value passed is {}",
                self.n_frequency
            )));
        }

        if !self.scaling.is_finite() {
            return Err(crate::WaveFtError::InvalidConfig(format!(
                "`scaling` must be finite, got {}",
                self.scaling
            )));
        }

        self.family()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WaveFtConfig::default();
        assert_eq!(config.n_frequency, 1000);
        assert!((config.scaling - 150.0).abs() < f64::EPSILON);
        assert!(!config.fan_in_fan_out);
        assert!(!config.init_weights);
        assert_eq!(config.random_loc_seed, 777);
        assert_eq!(config.wavelet_family, "db1");
        assert_eq!(config.reconstruction, ReconstructionMode::Idwt);
        assert_eq!(config.spectrum_init(), SpectrumInit::Gaussian);
    }

    #[test]
    fn test_builder_pattern() {
        let config = WaveFtConfig::new()
            .with_n_frequency(3)
            .with_scaling(2.0)
            .with_init_weights(true)
            .with_random_loc_seed(42)
            .with_wavelet_family("coif1")
            .with_use_idwt(false)
            .with_fan_in_fan_out(true);

        assert_eq!(config.n_frequency, 3);
        assert_eq!(config.random_loc_seed, 42);
        assert_eq!(config.wavelet_family, "coif1");
        assert_eq!(config.reconstruction, ReconstructionMode::Direct);
        assert_eq!(config.spectrum_init(), SpectrumInit::Zeros);
        assert!(config.fan_in_fan_out);
    }

    #[test]
    fn test_validation() {
        assert!(WaveFtConfig::default().validate().is_ok());

        let zero = WaveFtConfig::default().with_n_frequency(0);
        let err = zero.validate().unwrap_err();
        assert!(err.to_string().contains("positive integer"));

        let bad_family = WaveFtConfig::default().with_wavelet_family("mexh");
        let err = bad_family.validate().unwrap_err();
        assert!(err.to_string().contains("Supported wavelet families"));

        let bad_scaling = WaveFtConfig::default().with_scaling(f64::NAN);
        assert!(bad_scaling.validate().is_err());
    }

    #[test]
    fn test_serde_defaults() {
        let json = r#"{
            "n_frequency": 16,
            "scaling": 1.5,
            "random_loc_seed": 3,
            "wavelet_family": "db2"
        }"#;
        let config: WaveFtConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.n_frequency, 16);
        assert_eq!(config.reconstruction, ReconstructionMode::Idwt);
        assert!(!config.init_weights);

        let direct = serde_json::to_string(&config.with_use_idwt(false)).unwrap();
        assert!(direct.contains("\"reconstruction\":\"direct\""));
    }
}
