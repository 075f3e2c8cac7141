//! Orthogonal filter banks for the built-in reconstruction backend.
//!
//! Only the decomposition low-pass filter is stored (PyWavelets ordering).
//! For orthogonal wavelets the synthesis filters follow from it:
//! - `rec_lo[k] = dec_lo[L-1-k]`
//! - `rec_hi[k] = (-1)^k * dec_lo[k]`

use super::coefficients::DEC_LO;
use super::WaveletFamily;

/// Synthesis filter pair for one wavelet family.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBank {
    /// Low-pass reconstruction filter.
    pub rec_lo: Vec<f64>,
    /// High-pass reconstruction filter.
    pub rec_hi: Vec<f64>,
}

impl FilterBank {
    /// Built-in filter bank for `family`.
    ///
    /// Every registered family ships coefficients; `None` means the family
    /// table and the coefficient table have drifted apart.
    #[must_use]
    pub fn for_family(family: WaveletFamily) -> Option<Self> {
        DEC_LO
            .iter()
            .find(|(name, _)| *name == family.name())
            .map(|(_, dec_lo)| Self::from_dec_lo(dec_lo))
    }

    /// Derive synthesis filters from an orthogonal decomposition low-pass filter.
    #[must_use]
    pub fn from_dec_lo(dec_lo: &[f64]) -> Self {
        let rec_lo = dec_lo.iter().rev().copied().collect();
        let rec_hi = dec_lo
            .iter()
            .enumerate()
            .map(|(k, &h)| if k % 2 == 0 { h } else { -h })
            .collect();
        Self { rec_lo, rec_hi }
    }

    /// Filter length `L`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rec_lo.len()
    }

    /// Whether the bank has no taps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rec_lo.is_empty()
    }
}
