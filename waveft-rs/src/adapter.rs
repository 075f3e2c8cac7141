//! Per-adapter WaveFT state: the trainable spectrum and its fixed coordinates.

use candle_core::{DType, Device, Tensor, Var};
use rand::seq::index;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::SpectrumInit;
use crate::error::{Result, WaveFtError};
use crate::wavelet::WaveletFamily;

/// Check `0 < n_frequency <= out_features * in_features`.
///
/// # Errors
///
/// Returns [`WaveFtError::InvalidConfig`] describing the violated bound.
pub fn validate_n_frequency(
    n_frequency: usize,
    out_features: usize,
    in_features: usize,
) -> Result<()> {
    if n_frequency == 0 {
        return Err(WaveFtError::InvalidConfig(format!(
            "`n_frequency` should be a positive integer value but the value passed is {n_frequency}"
        )));
    }
    let grid = out_features.checked_mul(in_features).ok_or_else(|| {
        WaveFtError::InvalidConfig(format!(
            "weight grid {out_features}x{in_features} overflows usize"
        ))
    })?;
    if n_frequency > grid {
        return Err(WaveFtError::InvalidConfig(format!(
            "`n_frequency` should be less than or equal to the product of the input and output \
             dimensions but the value passed is {n_frequency} and the product is {grid}"
        )));
    }
    Ok(())
}

/// Sample `n_frequency` distinct `(row, col)` coordinates of an
/// `out_features x in_features` grid.
///
/// Flat positions are drawn without replacement from a ChaCha8 stream seeded
/// with `seed`; the draw is fully shuffled, so it is distributed as the first
/// `n_frequency` entries of a uniform permutation. Identical arguments always
/// give identical coordinates.
///
/// # Errors
///
/// Returns error if `n_frequency` is out of range for the grid.
pub fn sample_indices(
    out_features: usize,
    in_features: usize,
    n_frequency: usize,
    seed: u64,
) -> Result<Vec<(usize, usize)>> {
    validate_n_frequency(n_frequency, out_features, in_features)?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let flat = index::sample(&mut rng, out_features * in_features, n_frequency).into_vec();

    Ok(flat
        .into_iter()
        .map(|pos| (pos / in_features, pos % in_features))
        .collect())
}

/// Scalar settings of one adapter, as persisted next to its tensors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterRecord {
    /// Number of spectrum coefficients.
    pub n_frequency: usize,
    /// Delta scaling factor.
    pub scaling: f64,
    /// Coordinate sampling seed.
    pub random_loc_seed: u64,
    /// Wavelet family.
    pub wavelet_family: WaveletFamily,
}

/// One named WaveFT adapter.
///
/// `spectrum` is the only trainable tensor. `indices` is a `(2, n_frequency)`
/// `U32` tensor of `(row, col)` coordinates that never changes after
/// creation; a host-side copy is kept for building scatter positions.
#[derive(Debug, Clone)]
pub struct WaveFtAdapter {
    record: AdapterRecord,
    spectrum: Var,
    indices: Tensor,
    coords: Vec<(usize, usize)>,
}

impl WaveFtAdapter {
    /// Create an adapter for an `out_features x in_features` weight.
    ///
    /// # Errors
    ///
    /// Returns error if `n_frequency` is out of range or tensor allocation fails.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        out_features: usize,
        in_features: usize,
        n_frequency: usize,
        scaling: f64,
        init: SpectrumInit,
        random_loc_seed: u64,
        wavelet_family: WaveletFamily,
        device: &Device,
    ) -> Result<Self> {
        if u32::try_from(out_features.max(in_features)).is_err() {
            return Err(WaveFtError::InvalidConfig(format!(
                "weight dimensions {out_features}x{in_features} exceed u32 index range"
            )));
        }
        let coords = sample_indices(out_features, in_features, n_frequency, random_loc_seed)?;
        let indices = coords_to_tensor(&coords, device)?;

        let spectrum = match init {
            SpectrumInit::Zeros => Var::zeros(n_frequency, DType::F32, device)?,
            SpectrumInit::Gaussian => {
                Var::randn(0.0f32, SpectrumInit::GAUSSIAN_STD as f32, n_frequency, device)?
            }
        };

        Ok(Self {
            record: AdapterRecord {
                n_frequency,
                scaling,
                random_loc_seed,
                wavelet_family,
            },
            spectrum,
            indices,
            coords,
        })
    }

    /// Scalar settings of this adapter.
    #[must_use]
    pub const fn record(&self) -> &AdapterRecord {
        &self.record
    }

    /// Number of spectrum coefficients.
    #[must_use]
    pub const fn n_frequency(&self) -> usize {
        self.record.n_frequency
    }

    /// Delta scaling factor.
    #[must_use]
    pub const fn scaling(&self) -> f64 {
        self.record.scaling
    }

    /// Coordinate sampling seed.
    #[must_use]
    pub const fn random_loc_seed(&self) -> u64 {
        self.record.random_loc_seed
    }

    /// Wavelet family used for reconstruction.
    #[must_use]
    pub const fn wavelet_family(&self) -> WaveletFamily {
        self.record.wavelet_family
    }

    /// Trainable spectrum `[n_frequency]`.
    #[must_use]
    pub const fn spectrum(&self) -> &Var {
        &self.spectrum
    }

    /// Coordinate tensor `[2, n_frequency]` (`U32`, rows then cols).
    #[must_use]
    pub const fn indices(&self) -> &Tensor {
        &self.indices
    }

    /// Host copy of the `(row, col)` coordinates.
    #[must_use]
    pub fn coords(&self) -> &[(usize, usize)] {
        &self.coords
    }

    /// Number of trainable parameters.
    #[must_use]
    pub const fn num_parameters(&self) -> usize {
        self.record.n_frequency
    }

    /// Zero the spectrum in place.
    ///
    /// # Errors
    ///
    /// Returns error if the tensor update fails.
    pub fn reset_parameters(&self) -> Result<()> {
        self.spectrum.set(&self.spectrum.zeros_like()?)?;
        Ok(())
    }

    /// Overwrite the spectrum values.
    ///
    /// # Errors
    ///
    /// Returns [`WaveFtError::ShapeMismatch`] unless `values` is `[n_frequency]`.
    pub fn set_spectrum(&self, values: &Tensor) -> Result<()> {
        if values.dims() != [self.record.n_frequency] {
            return Err(WaveFtError::ShapeMismatch {
                expected: vec![self.record.n_frequency],
                actual: values.dims().to_vec(),
            });
        }
        let values = values
            .to_dtype(self.spectrum.dtype())?
            .to_device(self.spectrum.device())?;
        self.spectrum.set(&values)?;
        Ok(())
    }

    /// Replace the coordinates with previously saved ones.
    ///
    /// Only used to restore checkpoints, where the stored coordinates are
    /// authoritative.
    ///
    /// # Errors
    ///
    /// Returns error if `indices` is not `[2, n_frequency]` or a coordinate
    /// falls outside the grid.
    pub(crate) fn restore_indices(
        &mut self,
        indices: &Tensor,
        out_features: usize,
        in_features: usize,
    ) -> Result<()> {
        let expected = [2, self.record.n_frequency];
        if indices.dims() != expected {
            return Err(WaveFtError::ShapeMismatch {
                expected: expected.to_vec(),
                actual: indices.dims().to_vec(),
            });
        }
        let rows_cols: Vec<Vec<u32>> = indices.to_dtype(DType::U32)?.to_vec2()?;
        let coords: Vec<(usize, usize)> = rows_cols[0]
            .iter()
            .zip(rows_cols[1].iter())
            .map(|(&r, &c)| (r as usize, c as usize))
            .collect();
        if let Some(&(r, c)) = coords
            .iter()
            .find(|&&(r, c)| r >= out_features || c >= in_features)
        {
            return Err(WaveFtError::InvalidConfig(format!(
                "stored coordinate ({r}, {c}) outside {out_features}x{in_features} grid"
            )));
        }

        self.indices = coords_to_tensor(&coords, self.spectrum.device())?;
        self.coords = coords;
        Ok(())
    }
}

fn coords_to_tensor(coords: &[(usize, usize)], device: &Device) -> Result<Tensor> {
    let n = coords.len();
    let mut data = Vec::with_capacity(2 * n);
    data.extend(coords.iter().map(|&(r, _)| r as u32));
    data.extend(coords.iter().map(|&(_, c)| c as u32));
    Ok(Tensor::from_vec(data, (2, n), device)?)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn haar() -> WaveletFamily {
        WaveletFamily::default()
    }

    #[test]
    fn test_sample_indices_distinct_and_in_range() {
        let coords = sample_indices(12, 7, 40, 777).unwrap();
        assert_eq!(coords.len(), 40);

        let unique: HashSet<_> = coords.iter().copied().collect();
        assert_eq!(unique.len(), 40);
        assert!(coords.iter().all(|&(r, c)| r < 12 && c < 7));
    }

    #[test]
    fn test_sample_indices_deterministic() {
        let a = sample_indices(4, 4, 3, 777).unwrap();
        let b = sample_indices(4, 4, 3, 777).unwrap();
        assert_eq!(a, b);

        let c = sample_indices(32, 32, 64, 1).unwrap();
        let d = sample_indices(32, 32, 64, 2).unwrap();
        assert_ne!(c, d, "different seeds should give different coordinates");
    }

    #[test]
    fn test_sample_indices_full_grid() {
        let coords = sample_indices(3, 5, 15, 9).unwrap();
        let unique: HashSet<_> = coords.into_iter().collect();
        assert_eq!(unique.len(), 15);
    }

    #[test]
    fn test_n_frequency_bounds() {
        assert!(validate_n_frequency(16, 4, 4).is_ok());
        assert!(validate_n_frequency(17, 4, 4).is_err());
        assert!(validate_n_frequency(0, 4, 4).is_err());
    }

    #[test]
    fn test_zero_init() {
        let adapter =
            WaveFtAdapter::new(8, 8, 10, 1.0, SpectrumInit::Zeros, 0, haar(), &Device::Cpu)
                .unwrap();
        let values: Vec<f32> = adapter.spectrum().as_tensor().to_vec1().unwrap();
        assert!(values.iter().all(|&v| v == 0.0));
        assert_eq!(adapter.num_parameters(), 10);
    }

    #[test]
    fn test_gaussian_init_is_small() {
        let adapter =
            WaveFtAdapter::new(64, 64, 512, 1.0, SpectrumInit::Gaussian, 0, haar(), &Device::Cpu)
                .unwrap();
        let values: Vec<f32> = adapter.spectrum().as_tensor().to_vec1().unwrap();
        assert!(values.iter().any(|&v| v != 0.0));
        assert!(values.iter().all(|v| v.abs() < 0.1));
    }

    #[test]
    fn test_indices_tensor_matches_coords() {
        let adapter =
            WaveFtAdapter::new(6, 9, 5, 1.0, SpectrumInit::Zeros, 11, haar(), &Device::Cpu)
                .unwrap();
        assert_eq!(adapter.indices().dims(), &[2, 5]);
        assert_eq!(adapter.indices().dtype(), DType::U32);

        let rows_cols: Vec<Vec<u32>> = adapter.indices().to_vec2().unwrap();
        for (i, &(r, c)) in adapter.coords().iter().enumerate() {
            assert_eq!(rows_cols[0][i] as usize, r);
            assert_eq!(rows_cols[1][i] as usize, c);
        }
    }

    #[test]
    fn test_reset_and_set_spectrum() {
        let device = Device::Cpu;
        let adapter =
            WaveFtAdapter::new(4, 4, 3, 1.0, SpectrumInit::Gaussian, 0, haar(), &device).unwrap();

        adapter
            .set_spectrum(&Tensor::new(&[1.0f32, 2.0, 3.0], &device).unwrap())
            .unwrap();
        let values: Vec<f32> = adapter.spectrum().as_tensor().to_vec1().unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);

        adapter.reset_parameters().unwrap();
        let values: Vec<f32> = adapter.spectrum().as_tensor().to_vec1().unwrap();
        assert_eq!(values, vec![0.0, 0.0, 0.0]);

        let wrong = Tensor::new(&[1.0f32, 2.0], &device).unwrap();
        assert!(matches!(
            adapter.set_spectrum(&wrong),
            Err(WaveFtError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_restore_indices_rejects_out_of_grid() {
        let device = Device::Cpu;
        let mut adapter =
            WaveFtAdapter::new(4, 4, 2, 1.0, SpectrumInit::Zeros, 0, haar(), &device).unwrap();

        let stored = Tensor::new(&[[0u32, 3], [1, 2]], &device).unwrap();
        adapter.restore_indices(&stored, 4, 4).unwrap();
        assert_eq!(adapter.coords(), &[(0, 1), (3, 2)]);

        let outside = Tensor::new(&[[0u32, 4], [1, 2]], &device).unwrap();
        assert!(adapter.restore_indices(&outside, 4, 4).is_err());
    }

    fn json_record(family: &str) -> String {
        format!(
            r#"{{
                "n_frequency": 64,
                "scaling": 25.0,
                "random_loc_seed": 7,
                "wavelet_family": "{family}"
            }}"#
        )
    }

    #[test]
    fn test_record_deserializes_from_owned_json() {
        let json = json_record("coif5");
        let record: AdapterRecord = serde_json::from_str(&json).unwrap();
        drop(json);

        assert_eq!(record.n_frequency, 64);
        assert_eq!(record.wavelet_family.name(), "coif5");
        assert_eq!(record.wavelet_family.reduction(), (28, 28));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["wavelet_family"], "coif5");

        let unknown = json_record("db99");
        assert!(serde_json::from_str::<AdapterRecord>(&unknown).is_err());
    }
}
