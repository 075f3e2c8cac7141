//! Wavelet families and the inverse-DWT reconstruction primitive.
//!
//! Reconstructing a single level from half-sized sub-bands with a filter of
//! length `L` yields `2r - L + 2` samples per axis instead of `2r`. The
//! shortfall `L - 2` is the family's *reduction*, recorded per axis in
//! [`WAVELET_REDUCTIONS`]. WaveFT pads its coefficient grid by that amount
//! so the reconstruction lands back on the adapted weight's shape.

mod coefficients;
mod filters;
mod idwt;

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{Result, WaveFtError};

pub use filters::FilterBank;
pub use idwt::{FilterBankIdwt, SubBands, WaveletReconstruct};

/// Row/column reduction per supported wavelet family.
///
/// Daubechies and Symlet families of order `N` lose `2N - 2` samples,
/// Coiflets of order `N` lose `6N - 2`.
#[rustfmt::skip]
pub const WAVELET_REDUCTIONS: &[(&str, (usize, usize))] = &[
    ("db1", (0, 0)), ("db2", (2, 2)), ("db3", (4, 4)), ("db4", (6, 6)), ("db5", (8, 8)),
    ("db6", (10, 10)), ("db7", (12, 12)), ("db8", (14, 14)), ("db9", (16, 16)),
    ("db10", (18, 18)), ("db11", (20, 20)), ("db12", (22, 22)), ("db13", (24, 24)),
    ("db14", (26, 26)), ("db15", (28, 28)), ("db16", (30, 30)), ("db17", (32, 32)),
    ("db18", (34, 34)), ("db19", (36, 36)), ("db20", (38, 38)), ("db21", (40, 40)),
    ("db22", (42, 42)), ("db23", (44, 44)), ("db24", (46, 46)), ("db25", (48, 48)),
    ("db26", (50, 50)), ("db27", (52, 52)), ("db28", (54, 54)), ("db29", (56, 56)),
    ("db30", (58, 58)), ("db31", (60, 60)), ("db32", (62, 62)), ("db33", (64, 64)),
    ("db34", (66, 66)), ("db35", (68, 68)), ("db36", (70, 70)), ("db37", (72, 72)),
    ("db38", (74, 74)), ("sym2", (2, 2)), ("sym3", (4, 4)), ("sym4", (6, 6)), ("sym5", (8, 8)),
    ("sym6", (10, 10)), ("sym7", (12, 12)), ("sym8", (14, 14)), ("sym9", (16, 16)),
    ("sym10", (18, 18)), ("sym11", (20, 20)), ("sym12", (22, 22)), ("sym13", (24, 24)),
    ("sym14", (26, 26)), ("sym15", (28, 28)), ("sym16", (30, 30)), ("sym17", (32, 32)),
    ("sym18", (34, 34)), ("sym19", (36, 36)), ("sym20", (38, 38)), ("coif1", (4, 4)),
    ("coif2", (10, 10)), ("coif3", (16, 16)), ("coif4", (22, 22)), ("coif5", (28, 28)),
    ("coif6", (34, 34)), ("coif7", (40, 40)), ("coif8", (46, 46)), ("coif9", (52, 52)),
    ("coif10", (58, 58)), ("coif11", (64, 64)), ("coif12", (70, 70)), ("coif13", (76, 76)),
    ("coif14", (82, 82)), ("coif15", (88, 88)), ("coif16", (94, 94)), ("coif17", (100, 100)),
];

/// A supported wavelet family together with its reduction pair.
///
/// Only constructible through [`WaveletFamily::from_name`] (or `FromStr` /
/// serde), so every value is guaranteed to have a registered reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct WaveletFamily {
    name: &'static str,
    reduction: (usize, usize),
}

impl WaveletFamily {
    /// Look up a family by its canonical name (`"db1"`, `"sym4"`, `"coif2"`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`WaveFtError::InvalidConfig`] listing every supported family
    /// if `name` is not registered.
    pub fn from_name(name: &str) -> Result<Self> {
        WAVELET_REDUCTIONS
            .iter()
            .find(|(key, _)| *key == name)
            .map(|&(key, reduction)| Self {
                name: key,
                reduction,
            })
            .ok_or_else(|| {
                WaveFtError::InvalidConfig(format!(
                    "Unsupported wavelet family: {name}. Supported wavelet families: {:?}",
                    Self::supported_names()
                ))
            })
    }

    /// Canonical family name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// `(row_reduction, col_reduction)` for this family.
    #[must_use]
    pub const fn reduction(&self) -> (usize, usize) {
        self.reduction
    }

    /// Every registered family name, in table order.
    #[must_use]
    pub fn supported_names() -> Vec<&'static str> {
        WAVELET_REDUCTIONS.iter().map(|(name, _)| *name).collect()
    }
}

impl Default for WaveletFamily {
    fn default() -> Self {
        Self {
            name: "db1",
            reduction: (0, 0),
        }
    }
}

impl fmt::Display for WaveletFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for WaveletFamily {
    type Err = WaveFtError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl<'de> Deserialize<'de> for WaveletFamily {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name).map_err(de::Error::custom)
    }
}

impl From<WaveletFamily> for String {
    fn from(family: WaveletFamily) -> Self {
        family.name.to_string()
    }
}
