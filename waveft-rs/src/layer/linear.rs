//! Linear layer wrapper carrying WaveFT adapters.

use std::path::Path;
use std::sync::Arc;

use candle_core::{DType, Tensor, Var};
use candle_nn::{Linear, Module};

use super::base::BaseLinear;
use super::state::WaveFtLayer;
use crate::config::WaveFtConfig;
use crate::error::{Result, WaveFtError};
use crate::wavelet::{FilterBankIdwt, WaveletReconstruct};

/// A base layer plus any number of named WaveFT adapters.
///
/// The base weight is frozen; only the adapters' spectra are trainable.
/// Adapters can be applied on the fly in [`forward`](Self::forward) or
/// folded into the base weight with [`merge`](Self::merge).
///
/// # Example
///
/// ```ignore
/// use candle_core::{DType, Device, Tensor};
/// use candle_nn::Linear;
/// use waveft_rs::{WaveFtConfig, WaveFtLinear};
///
/// let device = Device::Cpu;
/// let base = Linear::new(Tensor::randn(0.0f32, 1.0, (64, 32), &device)?, None);
/// let config = WaveFtConfig::default().with_n_frequency(128);
/// let mut layer = WaveFtLinear::new(base, "default", &config)?;
///
/// let x = Tensor::randn(0.0f32, 1.0, (4, 32), &device)?;
/// let y = layer.forward(&x)?;
/// layer.merge(true, None)?;
/// ```
#[derive(Debug)]
pub struct WaveFtLinear<B: BaseLinear> {
    base: B,
    layer: WaveFtLayer,
    fan_in_fan_out: bool,
    merged_adapters: Vec<String>,
    disable_adapters: bool,
}

impl<B: BaseLinear> WaveFtLinear<B> {
    /// Wrap `base` and register `adapter_name` from `config`.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the base weight is
    /// not a matrix.
    pub fn new(base: B, adapter_name: &str, config: &WaveFtConfig) -> Result<Self> {
        Self::with_reconstructor(base, adapter_name, config, Arc::new(FilterBankIdwt::new()))
    }

    /// Like [`new`](Self::new), with a custom inverse-DWT backend.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid, the base weight is not
    /// a matrix, or the backend cannot reconstruct the configured family.
    pub fn with_reconstructor(
        base: B,
        adapter_name: &str,
        config: &WaveFtConfig,
        reconstructor: Arc<dyn WaveletReconstruct>,
    ) -> Result<Self> {
        config.validate()?;
        let (in_features, out_features) = base.linear_shape()?;

        let layout_fan_in_fan_out = base.weight_layout().is_fan_in_fan_out();
        if config.fan_in_fan_out != layout_fan_in_fan_out {
            tracing::warn!(
                configured = config.fan_in_fan_out,
                "fan_in_fan_out does not match the base layer's weight layout. \
                 Setting fan_in_fan_out to {}.",
                layout_fan_in_fan_out
            );
        }

        let device = base.weight().device().clone();
        let layer = WaveFtLayer::new(in_features, out_features, config.reconstruction, device)
            .with_reconstructor(reconstructor);

        let mut wrapped = Self {
            base,
            layer,
            fan_in_fan_out: layout_fan_in_fan_out,
            merged_adapters: Vec::new(),
            disable_adapters: false,
        };
        wrapped.update_layer(adapter_name, config)?;
        Ok(wrapped)
    }

    /// Register (or overwrite) an adapter from `config`.
    ///
    /// The reconstruction mode is fixed per layer; `config.reconstruction`
    /// is ignored here.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or `adapter_name` is
    /// currently merged into the base weight.
    pub fn update_layer(&mut self, adapter_name: &str, config: &WaveFtConfig) -> Result<()> {
        if self.merged_adapters.iter().any(|name| name == adapter_name) {
            return Err(WaveFtError::InvalidConfig(format!(
                "adapter {adapter_name} is merged; unmerge before updating it"
            )));
        }
        self.layer.update_layer(
            adapter_name,
            config.n_frequency,
            config.scaling,
            config.spectrum_init(),
            config.random_loc_seed,
            &config.wavelet_family,
        )
    }

    /// Remove an adapter.
    ///
    /// # Errors
    ///
    /// Returns error if the adapter is unknown or currently merged.
    pub fn delete_adapter(&mut self, adapter_name: &str) -> Result<()> {
        if self.merged_adapters.iter().any(|name| name == adapter_name) {
            return Err(WaveFtError::InvalidConfig(format!(
                "adapter {adapter_name} is merged; unmerge before deleting it"
            )));
        }
        self.layer
            .delete_adapter(adapter_name)
            .map(|_| ())
            .ok_or_else(|| WaveFtError::UnknownAdapter(adapter_name.to_string()))
    }

    /// Delta of `adapter_name` in the base weight's storage layout.
    ///
    /// # Errors
    ///
    /// Returns [`WaveFtError::UnknownAdapter`] for an unregistered name.
    pub fn get_delta_weight(&self, adapter_name: &str) -> Result<Tensor> {
        let delta = self.layer.get_delta_weight(adapter_name)?;
        if self.fan_in_fan_out {
            Ok(delta.t()?.contiguous()?)
        } else {
            Ok(delta)
        }
    }

    fn adapters_to_merge(&self, adapter_names: Option<&[&str]>) -> Vec<String> {
        let requested: Vec<String> = match adapter_names {
            Some(names) => names.iter().map(|name| (*name).to_string()).collect(),
            None => self.layer.active_adapters().to_vec(),
        };

        let mut selected: Vec<String> = Vec::with_capacity(requested.len());
        for name in requested {
            if self.merged_adapters.contains(&name) {
                tracing::warn!(adapter = %name, "adapter already merged, skipping");
                continue;
            }
            if !self.layer.contains(&name) {
                tracing::warn!(adapter = %name, "skipping unknown adapter during merge");
                continue;
            }
            if !selected.contains(&name) {
                selected.push(name);
            }
        }
        selected
    }

    /// Fold adapter deltas into the base weight.
    ///
    /// `adapter_names` defaults to the active adapters. With `safe_merge`
    /// each candidate weight is checked for non-finite values before it is
    /// committed; on failure that adapter leaves the weight untouched.
    ///
    /// # Errors
    ///
    /// Returns [`WaveFtError::MergeCorruption`] if a safe merge produces
    /// NaN or infinite values.
    pub fn merge(&mut self, safe_merge: bool, adapter_names: Option<&[&str]>) -> Result<()> {
        let to_merge = self.adapters_to_merge(adapter_names);
        if to_merge.is_empty() {
            return Ok(());
        }

        for name in to_merge {
            let weight = self.base.weight();
            let delta = self.get_delta_weight(&name)?.to_dtype(weight.dtype())?;
            let merged = (weight + delta)?.detach();

            if safe_merge && !all_finite(&merged)? {
                return Err(WaveFtError::MergeCorruption { adapter: name });
            }

            self.base.set_weight(merged)?;
            tracing::debug!(adapter = %name, safe_merge, "merged WaveFT adapter");
            self.merged_adapters.push(name);
        }
        Ok(())
    }

    /// Subtract merged deltas from the base weight, most recent first.
    ///
    /// # Errors
    ///
    /// Returns error if a delta cannot be computed.
    pub fn unmerge(&mut self) -> Result<()> {
        if !self.merged() {
            tracing::warn!("Already unmerged. Nothing to do.");
            return Ok(());
        }

        while let Some(name) = self.merged_adapters.last() {
            let weight = self.base.weight();
            let delta = self.get_delta_weight(name)?.to_dtype(weight.dtype())?;
            let restored = (weight - delta)?.detach();
            self.base.set_weight(restored)?;
            tracing::debug!(adapter = %name, "unmerged WaveFT adapter");
            self.merged_adapters.pop();
        }
        Ok(())
    }

    /// Apply the layer.
    ///
    /// - adapters disabled: unmerge if needed, then base only
    /// - merged: base only
    /// - otherwise: base plus `x @ deltaᵀ` for every active adapter
    ///
    /// The output has the input's dtype.
    ///
    /// # Errors
    ///
    /// Returns error if any tensor operation fails.
    pub fn forward(&mut self, x: &Tensor) -> Result<Tensor> {
        let input_dtype = x.dtype();

        let result = if self.disable_adapters {
            if self.merged() {
                self.unmerge()?;
            }
            self.base.forward(x)?
        } else if self.merged() {
            self.base.forward(x)?
        } else {
            let mut result = self.base.forward(x)?;
            for name in self.layer.active_adapters() {
                if !self.layer.contains(name) {
                    continue;
                }
                let delta = self.layer.get_delta_weight(name)?;
                let x = x.to_dtype(delta.dtype())?;
                let update = Module::forward(&Linear::new(delta, None), &x)?
                    .to_dtype(result.dtype())?;
                result = (result + update)?;
            }
            result
        };

        Ok(result.to_dtype(input_dtype)?)
    }

    /// Enable or disable the adapters for subsequent forward passes.
    pub fn enable_adapters(&mut self, enabled: bool) {
        self.disable_adapters = !enabled;
    }

    /// Whether adapters are disabled.
    #[must_use]
    pub const fn disable_adapters(&self) -> bool {
        self.disable_adapters
    }

    /// Set the active adapters.
    ///
    /// # Errors
    ///
    /// Returns [`WaveFtError::UnknownAdapter`] if any name is unregistered.
    pub fn set_adapter(&mut self, adapter_names: &[&str]) -> Result<()> {
        self.layer.set_adapter(adapter_names)
    }

    /// Active adapter names.
    #[must_use]
    pub fn active_adapters(&self) -> &[String] {
        self.layer.active_adapters()
    }

    /// Whether any adapter is merged into the base weight.
    #[must_use]
    pub fn merged(&self) -> bool {
        !self.merged_adapters.is_empty()
    }

    /// Merged adapter names, in merge order.
    #[must_use]
    pub fn merged_adapters(&self) -> &[String] {
        &self.merged_adapters
    }

    /// Whether the weight is treated as `[in, out]`.
    #[must_use]
    pub const fn fan_in_fan_out(&self) -> bool {
        self.fan_in_fan_out
    }

    /// The wrapped base layer.
    #[must_use]
    pub const fn base_layer(&self) -> &B {
        &self.base
    }

    /// Unwrap the base layer, keeping any merged deltas in its weight.
    #[must_use]
    pub fn into_base_layer(self) -> B {
        self.base
    }

    /// Adapter state.
    #[must_use]
    pub const fn layer(&self) -> &WaveFtLayer {
        &self.layer
    }

    pub(crate) fn layer_mut(&mut self) -> &mut WaveFtLayer {
        &mut self.layer
    }

    /// Spectra of the active adapters.
    #[must_use]
    pub fn trainable_vars(&self) -> Vec<Var> {
        self.layer.trainable_vars()
    }

    /// Trainable parameter count across active adapters.
    #[must_use]
    pub fn num_trainable_parameters(&self) -> usize {
        self.layer.num_trainable_parameters()
    }

    /// Save `adapter_name` to `dir`. See [`crate::io::save_adapter`].
    ///
    /// # Errors
    ///
    /// Returns error if the adapter is unknown or writing fails.
    pub fn save_adapter(&self, dir: impl AsRef<Path>, adapter_name: &str) -> Result<()> {
        crate::io::save_adapter(dir, &self.layer, adapter_name)
    }

    /// Load `adapter_name` from `dir`. See [`crate::io::load_adapter`].
    ///
    /// # Errors
    ///
    /// Returns error if the adapter is merged, the files are missing, or the
    /// saved shapes do not match this layer.
    pub fn load_adapter(&mut self, dir: impl AsRef<Path>, adapter_name: &str) -> Result<()> {
        if self.merged_adapters.iter().any(|name| name == adapter_name) {
            return Err(WaveFtError::InvalidConfig(format!(
                "adapter {adapter_name} is merged; unmerge before loading over it"
            )));
        }
        crate::io::load_adapter(dir, self.layer_mut(), adapter_name)
    }
}

/// `x - x` is zero for finite `x` and NaN for NaN or infinity, so the sum
/// is finite exactly when every element is. Only the scalar leaves the device.
fn all_finite(t: &Tensor) -> Result<bool> {
    let total = (t - t)?.sum_all()?.to_dtype(DType::F64)?.to_scalar::<f64>()?;
    Ok(total.is_finite())
}

#[cfg(test)]
mod tests {
    use candle_core::Device;

    use super::*;
    use crate::layer::Conv1D;

    fn max_abs_diff(a: &Tensor, b: &Tensor) -> f32 {
        (a - b)
            .unwrap()
            .abs()
            .unwrap()
            .max_all()
            .unwrap()
            .to_dtype(DType::F32)
            .unwrap()
            .to_scalar()
            .unwrap()
    }

    fn base(out: usize, inp: usize, device: &Device) -> Linear {
        Linear::new(
            Tensor::randn(0.0f32, 1.0, (out, inp), device).unwrap(),
            Some(Tensor::randn(0.0f32, 1.0, out, device).unwrap()),
        )
    }

    fn config(n: usize) -> WaveFtConfig {
        WaveFtConfig::default()
            .with_n_frequency(n)
            .with_scaling(2.0)
            .with_wavelet_family("db2")
    }

    #[test]
    fn test_merge_unmerge_restores_weight() {
        let device = Device::Cpu;
        let mut layer = WaveFtLinear::new(base(12, 8, &device), "a", &config(20)).unwrap();
        let original = layer.base_layer().weight().clone();

        layer.merge(true, None).unwrap();
        assert!(layer.merged());
        assert!(max_abs_diff(layer.base_layer().weight(), &original) > 0.0);

        layer.unmerge().unwrap();
        assert!(!layer.merged());
        assert!(max_abs_diff(layer.base_layer().weight(), &original) < 1e-5);
    }

    #[test]
    fn test_forward_matches_merged_forward() {
        let device = Device::Cpu;
        let mut layer = WaveFtLinear::new(base(12, 8, &device), "a", &config(30)).unwrap();
        let x = Tensor::randn(0.0f32, 1.0, (3, 8), &device).unwrap();

        let unmerged = layer.forward(&x).unwrap();
        layer.merge(false, None).unwrap();
        let merged = layer.forward(&x).unwrap();
        assert!(max_abs_diff(&unmerged, &merged) < 1e-4);
    }

    #[test]
    fn test_disabled_adapters_use_base_only() {
        let device = Device::Cpu;
        let linear = base(6, 6, &device);
        let x = Tensor::randn(0.0f32, 1.0, (2, 6), &device).unwrap();
        let expected = BaseLinear::forward(&linear, &x).unwrap();

        let mut layer = WaveFtLinear::new(linear, "a", &config(10)).unwrap();
        layer.merge(true, None).unwrap();
        layer.enable_adapters(false);

        let y = layer.forward(&x).unwrap();
        assert!(!layer.merged());
        assert!(max_abs_diff(&y, &expected) < 1e-5);
    }

    #[test]
    fn test_merge_skips_already_merged_and_unknown() {
        let device = Device::Cpu;
        let mut layer = WaveFtLinear::new(base(8, 8, &device), "a", &config(10)).unwrap();
        layer.update_layer("b", &config(12)).unwrap();

        layer.merge(true, Some(&["a"])).unwrap();
        layer.merge(true, Some(&["a", "b", "nope"])).unwrap();
        assert_eq!(layer.merged_adapters(), &["a".to_string(), "b".to_string()]);

        assert!(layer.update_layer("a", &config(4)).is_err());
        layer.unmerge().unwrap();
        assert!(layer.merged_adapters().is_empty());
        layer.unmerge().unwrap();
    }

    #[test]
    fn test_safe_merge_rejects_nan_and_keeps_weight() {
        let device = Device::Cpu;
        let mut layer = WaveFtLinear::new(base(8, 8, &device), "a", &config(5)).unwrap();
        let original = layer.base_layer().weight().clone();

        layer
            .layer()
            .adapter("a")
            .unwrap()
            .set_spectrum(&Tensor::new(&[f32::NAN, 0.0, 0.0, 0.0, 0.0], &device).unwrap())
            .unwrap();

        let err = layer.merge(true, None).unwrap_err();
        assert!(matches!(err, WaveFtError::MergeCorruption { .. }));
        assert!(err.to_string().contains("The adapter a seems to be broken"));
        assert!(!layer.merged());

        let before: Vec<Vec<f32>> = original.to_vec2().unwrap();
        let after: Vec<Vec<f32>> = layer.base_layer().weight().to_vec2().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_safe_merge_rejects_infinity() {
        let device = Device::Cpu;
        let mut layer = WaveFtLinear::new(base(8, 8, &device), "a", &config(3)).unwrap();
        layer
            .layer()
            .adapter("a")
            .unwrap()
            .set_spectrum(&Tensor::new(&[0.0f32, f32::INFINITY, 0.0], &device).unwrap())
            .unwrap();

        let err = layer.merge(true, None).unwrap_err();
        assert!(matches!(err, WaveFtError::MergeCorruption { .. }));
        assert!(!layer.merged());
    }

    #[test]
    fn test_all_finite_across_dtypes() {
        let device = Device::Cpu;
        for dtype in [DType::F16, DType::BF16, DType::F32, DType::F64] {
            let finite = Tensor::new(&[[1.0f32, -2.5], [0.0, 1e3]], &device)
                .unwrap()
                .to_dtype(dtype)
                .unwrap();
            assert!(all_finite(&finite).unwrap(), "{dtype:?}");

            for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
                let t = Tensor::new(&[[1.0f32, bad], [0.0, 2.0]], &device)
                    .unwrap()
                    .to_dtype(dtype)
                    .unwrap();
                assert!(!all_finite(&t).unwrap(), "{dtype:?} with {bad}");
            }
        }
    }

    #[test]
    fn test_conv1d_fan_in_fan_out() {
        let device = Device::Cpu;
        let w = Tensor::randn(0.0f32, 1.0, (8, 12), &device).unwrap();
        let conv = Conv1D::new(w, None).unwrap();
        let mut layer =
            WaveFtLinear::new(conv, "a", &config(16).with_fan_in_fan_out(true)).unwrap();
        assert!(layer.fan_in_fan_out());
        assert_eq!(layer.get_delta_weight("a").unwrap().dims(), &[8, 12]);
        assert_eq!(layer.layer().get_delta_weight("a").unwrap().dims(), &[12, 8]);

        let x = Tensor::randn(0.0f32, 1.0, (3, 8), &device).unwrap();
        let unmerged = layer.forward(&x).unwrap();
        assert_eq!(unmerged.dims(), &[3, 12]);
        layer.merge(true, None).unwrap();
        let merged = layer.forward(&x).unwrap();
        assert!(max_abs_diff(&unmerged, &merged) < 1e-4);
    }

    #[test]
    fn test_fan_in_fan_out_mismatch_is_corrected() {
        let device = Device::Cpu;
        let layer = WaveFtLinear::new(
            base(4, 4, &device),
            "a",
            &config(4).with_fan_in_fan_out(true),
        )
        .unwrap();
        assert!(!layer.fan_in_fan_out());
    }
}
