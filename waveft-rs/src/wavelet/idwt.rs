//! Single-level 2-D inverse DWT.

use std::fmt::Debug;

use candle_core::{DType, Device, Tensor};

use super::filters::FilterBank;
use super::WaveletFamily;
use crate::error::{Result, WaveFtError};

/// The four sub-bands of one decomposition level.
///
/// Naming follows PyWavelets: `horizontal` carries detail along rows
/// (axis 0), `vertical` along columns (axis 1).
#[derive(Debug, Clone)]
pub struct SubBands {
    /// Approximation (cA).
    pub approx: Tensor,
    /// Horizontal detail (cH).
    pub horizontal: Tensor,
    /// Vertical detail (cV).
    pub vertical: Tensor,
    /// Diagonal detail (cD).
    pub diagonal: Tensor,
}

impl SubBands {
    /// Bundle four sub-bands, checking they are 2-D and share one shape.
    ///
    /// # Errors
    ///
    /// Returns [`WaveFtError::ShapeMismatch`] if the shapes disagree.
    pub fn new(
        approx: Tensor,
        horizontal: Tensor,
        vertical: Tensor,
        diagonal: Tensor,
    ) -> Result<Self> {
        let expected = approx.dims().to_vec();
        if expected.len() != 2 {
            return Err(WaveFtError::ShapeMismatch {
                expected: vec![0, 0],
                actual: expected,
            });
        }
        for band in [&horizontal, &vertical, &diagonal] {
            if band.dims() != expected.as_slice() {
                return Err(WaveFtError::ShapeMismatch {
                    expected,
                    actual: band.dims().to_vec(),
                });
            }
        }
        Ok(Self {
            approx,
            horizontal,
            vertical,
            diagonal,
        })
    }

    /// Split a dense coefficient grid into quadrants: top-left cA,
    /// top-right cH, bottom-left cV, bottom-right cD.
    ///
    /// Split points are `rows / 2` and `cols / 2`. With an odd dimension the
    /// bottom/right quadrants would take the extra row/column and the shapes
    /// would no longer agree; WaveFT always pads to even sizes first.
    ///
    /// # Errors
    ///
    /// Returns an error if `grid` is not 2-D or has an odd dimension.
    pub fn split_quadrants(grid: &Tensor) -> Result<Self> {
        let (rows, cols) = grid.dims2()?;
        let (h2, w2) = (rows / 2, cols / 2);

        let top = grid.narrow(0, 0, h2)?;
        let bottom = grid.narrow(0, h2, rows - h2)?;

        let approx = top.narrow(1, 0, w2)?;
        let horizontal = top.narrow(1, w2, cols - w2)?;
        let vertical = bottom.narrow(1, 0, w2)?;
        let diagonal = bottom.narrow(1, w2, cols - w2)?;

        Self::new(approx, horizontal, vertical, diagonal)
    }

    /// Shared `(rows, cols)` of the sub-bands.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        let dims = self.approx.dims();
        (dims[0], dims[1])
    }
}

/// Inverse 2-D wavelet transform used to expand a WaveFT spectrum.
///
/// Contract: sub-bands of shape `(r, c)` reconstruct to at least
/// `(2r - reduction_rows, 2c - reduction_cols)`, deterministically.
pub trait WaveletReconstruct: Debug + Send + Sync {
    /// Reconstruct a dense matrix from one level of sub-bands.
    ///
    /// # Errors
    ///
    /// Returns error if the family is not supported or a tensor op fails.
    fn reconstruct(&self, coeffs: &SubBands, family: WaveletFamily) -> Result<Tensor>;

    /// Whether this backend can reconstruct `family`.
    fn supports(&self, _family: WaveletFamily) -> bool {
        true
    }
}

/// Built-in reconstruction from orthogonal filter banks.
///
/// Each axis is synthesized by a banded matrix `S` of shape
/// `(2n - L + 2, n)` with `S[o, i] = rec[o + L - 2 - 2i]`, which keeps the
/// central part of the upsampled convolution (PyWavelets' valid region).
/// The 2-D result is
/// `S_lo_r (cA S_lo_c^T + cV S_hi_c^T) + S_hi_r (cH S_lo_c^T + cD S_hi_c^T)`,
/// expressed as matmuls so it stays on-device and differentiable.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilterBankIdwt;

impl FilterBankIdwt {
    /// Create the backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn synthesis_matrices(
        bank: &FilterBank,
        n: usize,
        dtype: DType,
        device: &Device,
    ) -> Result<(Tensor, Tensor)> {
        let taps = bank.len();
        if 2 * n + 2 < taps + 1 {
            return Err(WaveFtError::ShapeMismatch {
                expected: vec![taps.div_ceil(2)],
                actual: vec![n],
            });
        }
        let out_len = 2 * n + 2 - taps;

        let mut lo = vec![0.0f64; out_len * n];
        let mut hi = vec![0.0f64; out_len * n];
        for o in 0..out_len {
            for i in 0..n {
                let k = (o + taps) as isize - 2 - 2 * i as isize;
                if (0..taps as isize).contains(&k) {
                    lo[o * n + i] = bank.rec_lo[k as usize];
                    hi[o * n + i] = bank.rec_hi[k as usize];
                }
            }
        }

        let lo = Tensor::from_vec(lo, (out_len, n), device)?.to_dtype(dtype)?;
        let hi = Tensor::from_vec(hi, (out_len, n), device)?.to_dtype(dtype)?;
        Ok((lo, hi))
    }
}

impl WaveletReconstruct for FilterBankIdwt {
    fn reconstruct(&self, coeffs: &SubBands, family: WaveletFamily) -> Result<Tensor> {
        let bank = FilterBank::for_family(family).ok_or_else(|| {
            WaveFtError::InvalidConfig(format!(
                "no built-in filter bank for wavelet family {family}"
            ))
        })?;

        let (rows, cols) = coeffs.shape();
        let dtype = coeffs.approx.dtype();
        let device = coeffs.approx.device();

        let (lo_r, hi_r) = Self::synthesis_matrices(&bank, rows, dtype, device)?;
        let (lo_c, hi_c) = Self::synthesis_matrices(&bank, cols, dtype, device)?;
        let lo_ct = lo_c.t()?.contiguous()?;
        let hi_ct = hi_c.t()?.contiguous()?;

        // Columns first, then rows.
        let low = coeffs
            .approx
            .contiguous()?
            .matmul(&lo_ct)?
            .add(&coeffs.vertical.contiguous()?.matmul(&hi_ct)?)?;
        let high = coeffs
            .horizontal
            .contiguous()?
            .matmul(&lo_ct)?
            .add(&coeffs.diagonal.contiguous()?.matmul(&hi_ct)?)?;

        Ok(lo_r.matmul(&low)?.add(&hi_r.matmul(&high)?)?)
    }

    fn supports(&self, family: WaveletFamily) -> bool {
        FilterBank::for_family(family).is_some()
    }
}
