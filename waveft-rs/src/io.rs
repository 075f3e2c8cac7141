//! Saving and loading adapters.
//!
//! An adapter is stored in its own directory as two files:
//! - `adapter_config.json`: layer shape, reconstruction mode and [`AdapterRecord`]
//! - `adapter_model.safetensors`: `<name>.waveft_spectrum` (`F32`, `[n]`) and
//!   `<name>.waveft_indices` (`U32`, `[2, n]`)

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use candle_core::Tensor;
use serde::{Deserialize, Serialize};

use crate::adapter::AdapterRecord;
use crate::config::{ReconstructionMode, SpectrumInit};
use crate::error::{Result, WaveFtError};
use crate::layer::{indices_key, spectrum_key, WaveFtLayer};

/// Adapter configuration file name.
pub const ADAPTER_CONFIG_FILENAME: &str = "adapter_config.json";

/// Adapter tensor file name.
pub const ADAPTER_WEIGHTS_FILENAME: &str = "adapter_model.safetensors";

/// Contents of `adapter_config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedAdapter {
    /// Name the adapter was saved under; prefixes the tensor keys.
    pub adapter_name: String,
    /// Input dimension of the layer it was trained on.
    pub in_features: usize,
    /// Output dimension of the layer it was trained on.
    pub out_features: usize,
    /// Reconstruction mode of that layer.
    pub reconstruction: ReconstructionMode,
    /// Adapter settings.
    #[serde(flatten)]
    pub record: AdapterRecord,
}

/// Write `adapter_name` of `layer` into `dir`, creating it if needed.
///
/// # Errors
///
/// Returns error if the adapter is unknown or a file cannot be written.
pub fn save_adapter(dir: impl AsRef<Path>, layer: &WaveFtLayer, adapter_name: &str) -> Result<()> {
    let dir = dir.as_ref();
    let adapter = layer.adapter(adapter_name)?;
    fs::create_dir_all(dir)?;

    let saved = SavedAdapter {
        adapter_name: adapter_name.to_string(),
        in_features: layer.in_features(),
        out_features: layer.out_features(),
        reconstruction: layer.mode(),
        record: adapter.record().clone(),
    };
    fs::write(dir.join(ADAPTER_CONFIG_FILENAME), serde_json::to_string_pretty(&saved)?)?;

    let mut tensors: HashMap<String, Tensor> = HashMap::with_capacity(2);
    tensors.insert(spectrum_key(adapter_name), adapter.spectrum().as_tensor().detach());
    tensors.insert(indices_key(adapter_name), adapter.indices().clone());
    candle_core::safetensors::save(&tensors, dir.join(ADAPTER_WEIGHTS_FILENAME))?;

    tracing::info!(
        adapter = adapter_name,
        n_frequency = adapter.n_frequency(),
        "Saved WaveFT adapter to {:?}",
        dir
    );
    Ok(())
}

/// Read `adapter_config.json` from `dir`.
///
/// # Errors
///
/// Returns error if the file is missing or malformed.
pub fn read_adapter_config(dir: impl AsRef<Path>) -> Result<SavedAdapter> {
    let content = fs::read_to_string(dir.as_ref().join(ADAPTER_CONFIG_FILENAME))?;
    Ok(serde_json::from_str(&content)?)
}

/// Load the adapter stored in `dir` into `layer` under `adapter_name`.
///
/// Any existing adapter with that name is replaced. The stored coordinates
/// are used as-is rather than re-sampled from the seed.
///
/// # Errors
///
/// Returns error if the files are missing, the saved layer shape or
/// reconstruction mode differs from `layer`, or the tensors are malformed.
/// On error `layer` is left exactly as it was, active list included.
pub fn load_adapter(
    dir: impl AsRef<Path>,
    layer: &mut WaveFtLayer,
    adapter_name: &str,
) -> Result<()> {
    let dir = dir.as_ref();
    let saved = read_adapter_config(dir)?;

    if (saved.out_features, saved.in_features) != (layer.out_features(), layer.in_features()) {
        return Err(WaveFtError::ShapeMismatch {
            expected: vec![layer.out_features(), layer.in_features()],
            actual: vec![saved.out_features, saved.in_features],
        });
    }
    if saved.reconstruction != layer.mode() {
        return Err(WaveFtError::InvalidConfig(format!(
            "adapter was saved with {:?} reconstruction, layer uses {:?}",
            saved.reconstruction,
            layer.mode()
        )));
    }

    let mut tensors =
        candle_core::safetensors::load(dir.join(ADAPTER_WEIGHTS_FILENAME), layer.device())?;
    let mut take = |key: String| {
        tensors
            .remove(&key)
            .ok_or_else(|| WaveFtError::Serialization(format!("missing tensor {key}")))
    };
    let spectrum = take(spectrum_key(&saved.adapter_name))?;
    let indices = take(indices_key(&saved.adapter_name))?;

    let record = &saved.record;
    let mut adapter = layer.build_adapter(
        record.n_frequency,
        record.scaling,
        SpectrumInit::Zeros,
        record.random_loc_seed,
        record.wavelet_family.name(),
    )?;
    adapter.restore_indices(&indices, layer.out_features(), layer.in_features())?;
    adapter.set_spectrum(&spectrum)?;
    layer.insert_adapter(adapter_name, adapter);

    tracing::info!(
        adapter = adapter_name,
        n_frequency = record.n_frequency,
        family = record.wavelet_family.name(),
        "Loaded WaveFT adapter from {:?}",
        dir
    );
    Ok(())
}
