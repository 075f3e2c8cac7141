//! Adapter bookkeeping and delta-weight reconstruction for one wrapped layer.

use std::collections::HashMap;
use std::sync::Arc;

use candle_core::{Device, Tensor, Var};

use crate::adapter::{validate_n_frequency, WaveFtAdapter};
use crate::config::{ReconstructionMode, SpectrumInit};
use crate::error::{Result, WaveFtError};
use crate::wavelet::{FilterBankIdwt, SubBands, WaveletFamily, WaveletReconstruct};

/// Geometry of the zero-padded coefficient grid used in IDWT mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddedGrid {
    /// Padded row count (even).
    pub rows: usize,
    /// Padded column count (even).
    pub cols: usize,
    /// Row shift applied to every coordinate.
    pub row_offset: usize,
    /// Column shift applied to every coordinate.
    pub col_offset: usize,
}

impl PaddedGrid {
    /// Pad `out_features x in_features` by the family's reduction, round
    /// each side up to even, and center the original grid inside.
    #[must_use]
    pub const fn new(out_features: usize, in_features: usize, family: WaveletFamily) -> Self {
        let (reduction_rows, reduction_cols) = family.reduction();
        let rows = round_up_even(out_features + reduction_rows);
        let cols = round_up_even(in_features + reduction_cols);
        Self {
            rows,
            cols,
            row_offset: (rows - out_features) / 2,
            col_offset: (cols - in_features) / 2,
        }
    }

    /// Number of cells in the padded grid.
    #[must_use]
    pub const fn numel(&self) -> usize {
        self.rows * self.cols
    }
}

const fn round_up_even(n: usize) -> usize {
    n + (n % 2)
}

/// Per-layer WaveFT state.
///
/// Owns the adapters keyed by name and the ordered list of active adapters.
/// The frozen base weight is not held here; [`super::WaveFtLinear`] owns it.
#[derive(Debug, Clone)]
pub struct WaveFtLayer {
    in_features: usize,
    out_features: usize,
    mode: ReconstructionMode,
    device: Device,
    adapters: HashMap<String, WaveFtAdapter>,
    active_adapters: Vec<String>,
    reconstructor: Arc<dyn WaveletReconstruct>,
}

impl WaveFtLayer {
    /// Create an empty layer state for an `out_features x in_features` weight.
    #[must_use]
    pub fn new(
        in_features: usize,
        out_features: usize,
        mode: ReconstructionMode,
        device: Device,
    ) -> Self {
        Self {
            in_features,
            out_features,
            mode,
            device,
            adapters: HashMap::new(),
            active_adapters: Vec::new(),
            reconstructor: Arc::new(FilterBankIdwt::new()),
        }
    }

    /// Replace the inverse-DWT backend.
    #[must_use]
    pub fn with_reconstructor(mut self, reconstructor: Arc<dyn WaveletReconstruct>) -> Self {
        self.reconstructor = reconstructor;
        self
    }

    /// Create or overwrite the adapter `adapter_name` and mark it active.
    ///
    /// Nothing is registered if validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`WaveFtError::InvalidConfig`] if `n_frequency` is zero or
    /// exceeds the weight size, if the family is unknown, or if IDWT mode is
    /// selected and the reconstruction backend cannot handle the family.
    #[allow(clippy::too_many_arguments)]
    pub fn update_layer(
        &mut self,
        adapter_name: &str,
        n_frequency: usize,
        scaling: f64,
        init: SpectrumInit,
        random_loc_seed: u64,
        wavelet_family: &str,
    ) -> Result<()> {
        let adapter =
            self.build_adapter(n_frequency, scaling, init, random_loc_seed, wavelet_family)?;

        tracing::debug!(
            adapter = adapter_name,
            n_frequency,
            scaling,
            family = wavelet_family,
            seed = random_loc_seed,
            "registered WaveFT adapter"
        );

        self.insert_adapter(adapter_name, adapter);
        Ok(())
    }

    /// Validate the settings against this layer and build a detached adapter.
    ///
    /// The layer itself is not touched.
    pub(crate) fn build_adapter(
        &self,
        n_frequency: usize,
        scaling: f64,
        init: SpectrumInit,
        random_loc_seed: u64,
        wavelet_family: &str,
    ) -> Result<WaveFtAdapter> {
        validate_n_frequency(n_frequency, self.out_features, self.in_features)?;
        let family = WaveletFamily::from_name(wavelet_family)?;

        if self.mode.uses_idwt() {
            if !self.reconstructor.supports(family) {
                return Err(WaveFtError::InvalidConfig(format!(
                    "wavelet family {family} is not supported by the reconstruction backend"
                )));
            }
            let grid = PaddedGrid::new(self.out_features, self.in_features, family);
            if u32::try_from(grid.numel()).is_err() {
                return Err(WaveFtError::InvalidConfig(format!(
                    "padded grid {}x{} exceeds u32 index range",
                    grid.rows, grid.cols
                )));
            }
        } else if u32::try_from(self.out_features * self.in_features).is_err() {
            return Err(WaveFtError::InvalidConfig(format!(
                "weight grid {}x{} exceeds u32 index range",
                self.out_features, self.in_features
            )));
        }

        WaveFtAdapter::new(
            self.out_features,
            self.in_features,
            n_frequency,
            scaling,
            init,
            random_loc_seed,
            family,
            &self.device,
        )
    }

    /// Remove `adapter_name` and drop it from the active list.
    ///
    /// Returns the removed adapter, if it was registered.
    pub fn delete_adapter(&mut self, adapter_name: &str) -> Option<WaveFtAdapter> {
        self.active_adapters.retain(|name| name != adapter_name);
        self.adapters.remove(adapter_name)
    }

    /// Register `adapter` under `adapter_name`.
    ///
    /// A replaced adapter keeps its slot in the active list; a new name is
    /// appended to it.
    pub(crate) fn insert_adapter(&mut self, adapter_name: &str, adapter: WaveFtAdapter) {
        self.adapters.insert(adapter_name.to_string(), adapter);
        if !self.active_adapters.iter().any(|name| name == adapter_name) {
            self.active_adapters.push(adapter_name.to_string());
        }
    }

    /// Zero the spectrum of `adapter_name`. Unknown names are ignored.
    ///
    /// # Errors
    ///
    /// Returns error if the tensor update fails.
    pub fn reset_wave_parameters(&self, adapter_name: &str) -> Result<()> {
        if let Some(adapter) = self.adapters.get(adapter_name) {
            adapter.reset_parameters()?;
        }
        Ok(())
    }

    /// Dense `[out_features, in_features]` delta for `adapter_name`.
    ///
    /// The result stays attached to the spectrum's graph, so it can be used
    /// directly in a training forward pass.
    ///
    /// # Errors
    ///
    /// Returns [`WaveFtError::UnknownAdapter`] for an unregistered name, or a
    /// tensor/backend error.
    pub fn get_delta_weight(&self, adapter_name: &str) -> Result<Tensor> {
        let adapter = self.adapter(adapter_name)?;
        match self.mode {
            ReconstructionMode::Direct => self.direct_delta(adapter),
            ReconstructionMode::Idwt => self.idwt_delta(adapter),
        }
    }

    fn direct_delta(&self, adapter: &WaveFtAdapter) -> Result<Tensor> {
        let spectrum = adapter.spectrum().as_tensor();
        let positions: Vec<usize> = adapter
            .coords()
            .iter()
            .map(|&(r, c)| r * self.in_features + c)
            .collect();

        let dense = scatter(spectrum, &positions, self.out_features * self.in_features)?
            .reshape((self.out_features, self.in_features))?;
        Ok(dense.affine(adapter.scaling(), 0.0)?)
    }

    fn idwt_delta(&self, adapter: &WaveFtAdapter) -> Result<Tensor> {
        let family = adapter.wavelet_family();
        let grid = PaddedGrid::new(self.out_features, self.in_features, family);
        let spectrum = adapter.spectrum().as_tensor();

        let mut kept = Vec::with_capacity(adapter.n_frequency());
        let mut positions = Vec::with_capacity(adapter.n_frequency());
        for (i, &(r, c)) in adapter.coords().iter().enumerate() {
            let (row, col) = (r + grid.row_offset, c + grid.col_offset);
            if row < grid.rows && col < grid.cols {
                kept.push(i as u32);
                positions.push(row * grid.cols + col);
            }
        }

        let values = if kept.len() == adapter.n_frequency() {
            spectrum.clone()
        } else {
            tracing::warn!(
                dropped = adapter.n_frequency() - kept.len(),
                rows = grid.rows,
                cols = grid.cols,
                "shifted spectrum coordinates fell outside the padded grid"
            );
            let kept_len = kept.len();
            let kept = Tensor::from_vec(kept, kept_len, spectrum.device())?;
            spectrum.index_select(&kept, 0)?
        };

        let dense = scatter(&values, &positions, grid.numel())?.reshape((grid.rows, grid.cols))?;
        let bands = SubBands::split_quadrants(&dense)?;
        let reconstructed = self
            .reconstructor
            .reconstruct(&bands, family)?
            .affine(adapter.scaling(), 0.0)?;

        let (rows, cols) = reconstructed.dims2()?;
        if (rows, cols) == (self.out_features, self.in_features) {
            return Ok(reconstructed);
        }
        if rows < self.out_features || cols < self.in_features {
            return Err(WaveFtError::ShapeMismatch {
                expected: vec![self.out_features, self.in_features],
                actual: vec![rows, cols],
            });
        }

        // Center crop.
        let start_row = (rows - self.out_features) / 2;
        let start_col = (cols - self.in_features) / 2;
        Ok(reconstructed
            .narrow(0, start_row, self.out_features)?
            .narrow(1, start_col, self.in_features)?
            .contiguous()?)
    }

    /// Set the active adapters.
    ///
    /// # Errors
    ///
    /// Returns [`WaveFtError::UnknownAdapter`] if any name is unregistered;
    /// the active list is left unchanged in that case.
    pub fn set_adapter(&mut self, adapter_names: &[&str]) -> Result<()> {
        if let Some(missing) = adapter_names.iter().find(|name| !self.contains(name)) {
            return Err(WaveFtError::UnknownAdapter((*missing).to_string()));
        }
        self.active_adapters.clear();
        for name in adapter_names {
            if !self.active_adapters.iter().any(|n| n == name) {
                self.active_adapters.push((*name).to_string());
            }
        }
        Ok(())
    }

    /// Active adapter names, in activation order.
    #[must_use]
    pub fn active_adapters(&self) -> &[String] {
        &self.active_adapters
    }

    /// Look up an adapter.
    ///
    /// # Errors
    ///
    /// Returns [`WaveFtError::UnknownAdapter`] if `adapter_name` is unregistered.
    pub fn adapter(&self, adapter_name: &str) -> Result<&WaveFtAdapter> {
        self.adapters
            .get(adapter_name)
            .ok_or_else(|| WaveFtError::UnknownAdapter(adapter_name.to_string()))
    }

    /// Whether `adapter_name` is registered.
    #[must_use]
    pub fn contains(&self, adapter_name: &str) -> bool {
        self.adapters.contains_key(adapter_name)
    }

    /// Registered adapter names, sorted.
    #[must_use]
    pub fn adapter_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.adapters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Spectra of the active adapters, for handing to an optimizer.
    #[must_use]
    pub fn trainable_vars(&self) -> Vec<Var> {
        self.active_adapters
            .iter()
            .filter_map(|name| self.adapters.get(name))
            .map(|adapter| adapter.spectrum().clone())
            .collect()
    }

    /// Trainable parameter count across active adapters.
    #[must_use]
    pub fn num_trainable_parameters(&self) -> usize {
        self.active_adapters
            .iter()
            .filter_map(|name| self.adapters.get(name))
            .map(WaveFtAdapter::num_parameters)
            .sum()
    }

    /// Tensors of every adapter, keyed `<name>.waveft_spectrum` and
    /// `<name>.waveft_indices`.
    #[must_use]
    pub fn state_dict(&self) -> HashMap<String, Tensor> {
        let mut state = HashMap::with_capacity(2 * self.adapters.len());
        for (name, adapter) in &self.adapters {
            state.insert(spectrum_key(name), adapter.spectrum().as_tensor().detach());
            state.insert(indices_key(name), adapter.indices().clone());
        }
        state
    }

    /// Input dimension of the wrapped weight.
    #[must_use]
    pub const fn in_features(&self) -> usize {
        self.in_features
    }

    /// Output dimension of the wrapped weight.
    #[must_use]
    pub const fn out_features(&self) -> usize {
        self.out_features
    }

    /// Reconstruction mode fixed at construction.
    #[must_use]
    pub const fn mode(&self) -> ReconstructionMode {
        self.mode
    }

    /// Device adapters are allocated on.
    #[must_use]
    pub const fn device(&self) -> &Device {
        &self.device
    }
}

/// State-dict key of an adapter's spectrum.
#[must_use]
pub fn spectrum_key(adapter_name: &str) -> String {
    format!("{adapter_name}.waveft_spectrum")
}

/// State-dict key of an adapter's coordinates.
#[must_use]
pub fn indices_key(adapter_name: &str) -> String {
    format!("{adapter_name}.waveft_indices")
}

/// Scatter `values[i]` into a flat zero buffer of `numel` cells at
/// `positions[i]`. On repeated positions the later value wins.
fn scatter(values: &Tensor, positions: &[usize], numel: usize) -> Result<Tensor> {
    let device = values.device();
    let zeros = Tensor::zeros(numel, values.dtype(), device)?;
    if positions.is_empty() {
        return Ok(zeros);
    }

    let mut last_writer: HashMap<usize, usize> = HashMap::with_capacity(positions.len());
    for (i, &pos) in positions.iter().enumerate() {
        last_writer.insert(pos, i);
    }

    let (src, dst): (Vec<u32>, Vec<u32>) = positions
        .iter()
        .enumerate()
        .filter(|&(i, pos)| last_writer[pos] == i)
        .map(|(i, &pos)| (i as u32, pos as u32))
        .unzip();

    let count = dst.len();
    let values = if count == positions.len() {
        values.clone()
    } else {
        values.index_select(&Tensor::from_vec(src, count, device)?, 0)?
    };
    let dst = Tensor::from_vec(dst, count, device)?;
    Ok(zeros.index_add(&dst, &values, 0)?)
}

#[cfg(test)]
mod tests {
    use candle_core::DType;

    use super::*;

    fn layer(out: usize, inp: usize, mode: ReconstructionMode) -> WaveFtLayer {
        WaveFtLayer::new(inp, out, mode, Device::Cpu)
    }

    fn to_rows(t: &Tensor) -> Vec<Vec<f32>> {
        t.to_dtype(DType::F32).unwrap().to_vec2().unwrap()
    }

    #[test]
    fn test_padded_grid_geometry() {
        let db1 = WaveletFamily::from_name("db1").unwrap();
        assert_eq!(
            PaddedGrid::new(4, 4, db1),
            PaddedGrid {
                rows: 4,
                cols: 4,
                row_offset: 0,
                col_offset: 0,
            }
        );
        assert_eq!(
            PaddedGrid::new(5, 7, db1),
            PaddedGrid {
                rows: 6,
                cols: 8,
                row_offset: 0,
                col_offset: 0,
            }
        );

        let db2 = WaveletFamily::from_name("db2").unwrap();
        assert_eq!(
            PaddedGrid::new(5, 7, db2),
            PaddedGrid {
                rows: 8,
                cols: 10,
                row_offset: 1,
                col_offset: 1,
            }
        );

        let coif1 = WaveletFamily::from_name("coif1").unwrap();
        let grid = PaddedGrid::new(16, 10, coif1);
        assert_eq!((grid.rows, grid.cols), (20, 14));
        assert_eq!((grid.row_offset, grid.col_offset), (2, 2));
    }

    #[test]
    fn test_scatter_last_write_wins() {
        let device = Device::Cpu;
        let values = Tensor::new(&[1.0f32, 2.0, 3.0], &device).unwrap();
        let out = scatter(&values, &[4, 1, 4], 6).unwrap();
        let out: Vec<f32> = out.to_vec1().unwrap();
        assert_eq!(out, vec![0.0, 2.0, 0.0, 0.0, 3.0, 0.0]);
    }

    #[test]
    fn test_update_layer_validation() {
        let mut state = layer(4, 4, ReconstructionMode::Idwt);
        assert!(state
            .update_layer("full", 16, 1.0, SpectrumInit::Zeros, 0, "db1")
            .is_ok());

        let err = state
            .update_layer("too_many", 17, 1.0, SpectrumInit::Zeros, 0, "db1")
            .unwrap_err();
        assert!(matches!(err, WaveFtError::InvalidConfig(_)));
        assert!(!state.contains("too_many"));

        let err = state
            .update_layer("zero", 0, 1.0, SpectrumInit::Zeros, 0, "db1")
            .unwrap_err();
        assert!(matches!(err, WaveFtError::InvalidConfig(_)));

        let err = state
            .update_layer("bad", 4, 1.0, SpectrumInit::Zeros, 0, "morlet")
            .unwrap_err();
        assert!(err.to_string().contains("Supported wavelet families"));
        assert_eq!(state.active_adapters(), &["full".to_string()]);
    }

    /// Backend that only knows the Haar filters.
    #[derive(Debug)]
    struct HaarOnly;

    impl WaveletReconstruct for HaarOnly {
        fn reconstruct(&self, coeffs: &SubBands, family: WaveletFamily) -> Result<Tensor> {
            FilterBankIdwt::new().reconstruct(coeffs, family)
        }

        fn supports(&self, family: WaveletFamily) -> bool {
            family == WaveletFamily::default()
        }
    }

    #[test]
    fn test_idwt_rejects_family_without_backend() {
        let mut state =
            layer(8, 8, ReconstructionMode::Idwt).with_reconstructor(Arc::new(HaarOnly));
        let err = state
            .update_layer("a", 4, 1.0, SpectrumInit::Zeros, 0, "db8")
            .unwrap_err();
        assert!(err.to_string().contains("not supported by the reconstruction backend"));
        assert!(!state.contains("a"));
        assert!(state
            .update_layer("a", 4, 1.0, SpectrumInit::Zeros, 0, "db1")
            .is_ok());

        // Direct mode never reconstructs, so any registered family is fine.
        let mut direct =
            layer(8, 8, ReconstructionMode::Direct).with_reconstructor(Arc::new(HaarOnly));
        assert!(direct
            .update_layer("a", 4, 1.0, SpectrumInit::Zeros, 0, "db8")
            .is_ok());
    }

    #[test]
    fn test_update_layer_overwrites() {
        let mut state = layer(6, 6, ReconstructionMode::Direct);
        state
            .update_layer("a", 4, 1.0, SpectrumInit::Zeros, 1, "db1")
            .unwrap();
        state
            .update_layer("a", 9, 2.0, SpectrumInit::Zeros, 2, "db2")
            .unwrap();

        let adapter = state.adapter("a").unwrap();
        assert_eq!(adapter.n_frequency(), 9);
        assert_eq!(adapter.random_loc_seed(), 2);
        assert_eq!(adapter.wavelet_family().name(), "db2");
        assert_eq!(state.active_adapters().len(), 1);
    }

    #[test]
    fn test_direct_delta_places_scaled_spectrum() {
        let device = Device::Cpu;
        let mut state = layer(4, 4, ReconstructionMode::Direct);
        state
            .update_layer("a", 3, 2.0, SpectrumInit::Zeros, 777, "db1")
            .unwrap();
        let adapter = state.adapter("a").unwrap();
        adapter
            .set_spectrum(&Tensor::new(&[0.5f32, -1.0, 0.25], &device).unwrap())
            .unwrap();

        let delta = to_rows(&state.get_delta_weight("a").unwrap());
        let expected = [1.0f32, -2.0, 0.5];
        let coords = adapter.coords().to_vec();

        let mut nonzero = 0;
        for (r, row) in delta.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                match coords.iter().position(|&rc| rc == (r, c)) {
                    Some(i) => assert_eq!(v, expected[i]),
                    None => assert_eq!(v, 0.0),
                }
                if v != 0.0 {
                    nonzero += 1;
                }
            }
        }
        assert_eq!(nonzero, 3);
    }

    #[test]
    fn test_idwt_haar_single_coefficient() {
        // A single approximation coefficient c at (0, 0) of a 4x4 Haar grid
        // reconstructs to c/2 on the top-left 2x2 block.
        let device = Device::Cpu;
        let mut state = layer(4, 4, ReconstructionMode::Idwt);
        let mut adapter = state
            .build_adapter(1, 3.0, SpectrumInit::Zeros, 0, "db1")
            .unwrap();
        adapter
            .restore_indices(&Tensor::new(&[[0u32], [0]], &device).unwrap(), 4, 4)
            .unwrap();
        adapter
            .set_spectrum(&Tensor::new(&[2.0f32], &device).unwrap())
            .unwrap();
        state.insert_adapter("a", adapter);

        let delta = to_rows(&state.get_delta_weight("a").unwrap());
        for (r, row) in delta.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                let expected = if r < 2 && c < 2 { 3.0 } else { 0.0 };
                assert!((v - expected).abs() < 1e-5, "({r}, {c}) = {v}");
            }
        }
    }

    #[test]
    fn test_idwt_delta_shape_for_every_family() {
        for name in WaveletFamily::supported_names() {
            for (out, inp) in [(7, 5), (16, 12), (3, 9)] {
                let mut state = layer(out, inp, ReconstructionMode::Idwt);
                state
                    .update_layer("a", 3, 1.0, SpectrumInit::Gaussian, 5, name)
                    .unwrap();
                let delta = state.get_delta_weight("a").unwrap();
                assert_eq!(delta.dims(), &[out, inp], "{name} {out}x{inp}");
            }
        }
    }

    #[test]
    fn test_zero_spectrum_gives_zero_delta() {
        for mode in [ReconstructionMode::Idwt, ReconstructionMode::Direct] {
            for name in ["db1", "db3", "sym4", "coif1", "db20", "sym13", "coif9"] {
                let mut state = layer(10, 6, mode);
                state
                    .update_layer("a", 20, 150.0, SpectrumInit::Zeros, 777, name)
                    .unwrap();
                let delta = state.get_delta_weight("a").unwrap();
                assert_eq!(delta.dims(), &[10, 6]);
                let max: f32 = delta.abs().unwrap().max_all().unwrap().to_scalar().unwrap();
                assert!(max < 1e-6);
            }
        }
    }

    #[test]
    fn test_unknown_adapter_fails_fast() {
        let state = layer(4, 4, ReconstructionMode::Idwt);
        assert!(matches!(
            state.get_delta_weight("missing"),
            Err(WaveFtError::UnknownAdapter(_))
        ));
    }

    #[test]
    fn test_set_adapter_and_trainable_vars() {
        let mut state = layer(8, 8, ReconstructionMode::Idwt);
        state
            .update_layer("a", 4, 1.0, SpectrumInit::Zeros, 0, "db1")
            .unwrap();
        state
            .update_layer("b", 6, 1.0, SpectrumInit::Zeros, 1, "db2")
            .unwrap();
        assert_eq!(state.num_trainable_parameters(), 10);

        state.set_adapter(&["b"]).unwrap();
        assert_eq!(state.active_adapters(), &["b".to_string()]);
        assert_eq!(state.trainable_vars().len(), 1);
        assert_eq!(state.num_trainable_parameters(), 6);

        assert!(state.set_adapter(&["b", "zzz"]).is_err());
        assert_eq!(state.active_adapters(), &["b".to_string()]);
        assert_eq!(state.adapter_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_delete_adapter() {
        let mut state = layer(4, 4, ReconstructionMode::Direct);
        state
            .update_layer("a", 2, 1.0, SpectrumInit::Zeros, 0, "db1")
            .unwrap();
        assert!(state.delete_adapter("a").is_some());
        assert!(state.delete_adapter("a").is_none());
        assert!(state.active_adapters().is_empty());
        assert!(!state.contains("a"));
    }

    #[test]
    fn test_reset_wave_parameters() {
        let mut state = layer(8, 8, ReconstructionMode::Idwt);
        state
            .update_layer("a", 16, 1.0, SpectrumInit::Gaussian, 0, "db1")
            .unwrap();
        state.reset_wave_parameters("a").unwrap();
        state.reset_wave_parameters("missing").unwrap();

        let values: Vec<f32> = state
            .adapter("a")
            .unwrap()
            .spectrum()
            .as_tensor()
            .to_vec1()
            .unwrap();
        assert!(values.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_state_dict_keys() {
        let mut state = layer(4, 4, ReconstructionMode::Idwt);
        state
            .update_layer("default", 5, 1.0, SpectrumInit::Zeros, 0, "db1")
            .unwrap();
        let dict = state.state_dict();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict["default.waveft_spectrum"].dims(), &[5]);
        assert_eq!(dict["default.waveft_indices"].dims(), &[2, 5]);
    }
}
