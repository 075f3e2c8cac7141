//! Integration tests for waveft-rs.
//!
//! These exercise the public surface end to end: adapter creation,
//! delta reconstruction in both modes, the merge/unmerge state machine,
//! training through the spectrum and checkpoint round trips.

use std::collections::HashSet;
use std::sync::Arc;

use candle_core::{DType, Device, Tensor};
use candle_nn::{Linear, Optimizer, SGD};
use waveft_rs::{
    BaseLinear, Conv1D, FilterBankIdwt, ReconstructionMode, SpectrumInit, SubBands, WaveFtConfig,
    WaveFtError, WaveFtLayer, WaveFtLinear, WaveletFamily, WaveletReconstruct,
};

fn random_linear(out: usize, inp: usize, device: &Device) -> Linear {
    Linear::new(
        Tensor::randn(0.0f32, 1.0, (out, inp), device).unwrap(),
        Some(Tensor::randn(0.0f32, 1.0, out, device).unwrap()),
    )
}

fn max_abs_diff(a: &Tensor, b: &Tensor) -> f32 {
    (a - b)
        .unwrap()
        .abs()
        .unwrap()
        .flatten_all()
        .unwrap()
        .max(0)
        .unwrap()
        .to_dtype(DType::F32)
        .unwrap()
        .to_scalar()
        .unwrap()
}

fn max_abs(t: &Tensor) -> f32 {
    t.abs()
        .unwrap()
        .flatten_all()
        .unwrap()
        .max(0)
        .unwrap()
        .to_scalar()
        .unwrap()
}

#[test]
fn test_indices_distinct_in_range_and_reproducible() {
    let device = Device::Cpu;
    for (out, inp, n, seed) in [(4, 4, 16, 0), (33, 17, 100, 777), (8, 64, 7, 12345)] {
        let mut layer = WaveFtLayer::new(inp, out, ReconstructionMode::Idwt, device.clone());
        layer
            .update_layer("a", n, 1.0, SpectrumInit::Zeros, seed, "db1")
            .unwrap();
        layer
            .update_layer("b", n, 1.0, SpectrumInit::Zeros, seed, "db1")
            .unwrap();

        let a = layer.adapter("a").unwrap();
        let b = layer.adapter("b").unwrap();
        assert_eq!(a.coords().len(), n);
        assert_eq!(a.coords(), b.coords());

        let unique: HashSet<_> = a.coords().iter().collect();
        assert_eq!(unique.len(), n);
        assert!(a.coords().iter().all(|&(r, c)| r < out && c < inp));

        let indices: Vec<Vec<u32>> = a.indices().to_vec2().unwrap();
        for (i, &(r, c)) in a.coords().iter().enumerate() {
            assert_eq!((indices[0][i] as usize, indices[1][i] as usize), (r, c));
        }
    }
}

#[test]
fn test_zero_init_gives_zero_delta_for_every_mode() {
    let device = Device::Cpu;
    for use_idwt in [true, false] {
        for family in ["db1", "db2", "db4", "sym3", "sym4", "coif1"] {
            let config = WaveFtConfig::default()
                .with_n_frequency(40)
                .with_init_weights(true)
                .with_wavelet_family(family)
                .with_use_idwt(use_idwt);
            let layer = WaveFtLinear::new(random_linear(12, 9, &device), "a", &config).unwrap();
            let delta = layer.get_delta_weight("a").unwrap();
            assert_eq!(delta.dims(), &[12, 9]);
            assert!(max_abs(&delta) < 1e-7, "{family} use_idwt={use_idwt}");
        }
    }
}

#[test]
fn test_direct_mode_example_scenario() {
    let device = Device::Cpu;
    let config = WaveFtConfig::default()
        .with_n_frequency(3)
        .with_random_loc_seed(777)
        .with_wavelet_family("db1")
        .with_scaling(2.0)
        .with_use_idwt(false);
    let layer = WaveFtLinear::new(random_linear(4, 4, &device), "default", &config).unwrap();
    let again = WaveFtLinear::new(random_linear(4, 4, &device), "default", &config).unwrap();

    let adapter = layer.layer().adapter("default").unwrap();
    assert_eq!(
        adapter.coords(),
        again.layer().adapter("default").unwrap().coords()
    );

    let spectrum: Vec<f32> = adapter.spectrum().as_tensor().to_vec1().unwrap();
    let delta: Vec<Vec<f32>> = layer.get_delta_weight("default").unwrap().to_vec2().unwrap();

    let mut nonzero = 0;
    for (r, row) in delta.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            match adapter.coords().iter().position(|&rc| rc == (r, c)) {
                Some(i) => assert_eq!(v, spectrum[i] * 2.0),
                None => assert_eq!(v, 0.0),
            }
            if v != 0.0 {
                nonzero += 1;
            }
        }
    }
    assert!(nonzero <= 3);
}

#[test]
fn test_n_frequency_boundaries() {
    let device = Device::Cpu;
    let config = WaveFtConfig::default().with_wavelet_family("db1");

    let full = config.clone().with_n_frequency(16);
    assert!(WaveFtLinear::new(random_linear(4, 4, &device), "a", &full).is_ok());

    let over = config.clone().with_n_frequency(17);
    let err = WaveFtLinear::new(random_linear(4, 4, &device), "a", &over).unwrap_err();
    assert!(matches!(err, WaveFtError::InvalidConfig(_)));

    let zero = config.with_n_frequency(0);
    let err = WaveFtLinear::new(random_linear(4, 4, &device), "a", &zero).unwrap_err();
    assert!(matches!(err, WaveFtError::InvalidConfig(_)));
}

#[test]
fn test_unsupported_family_lists_supported_keys() {
    let device = Device::Cpu;
    let config = WaveFtConfig::default()
        .with_n_frequency(4)
        .with_wavelet_family("haar");
    let err = WaveFtLinear::new(random_linear(4, 4, &device), "a", &config).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Unsupported wavelet family: haar"));
    for key in ["db1", "db38", "sym20", "coif17"] {
        assert!(message.contains(key), "missing {key} in {message}");
    }
}

#[test]
fn test_merge_unmerge_round_trip_multiple_adapters() {
    let device = Device::Cpu;
    let config = WaveFtConfig::default()
        .with_n_frequency(50)
        .with_scaling(5.0)
        .with_wavelet_family("sym4");
    let mut layer = WaveFtLinear::new(random_linear(16, 24, &device), "a", &config).unwrap();
    layer
        .update_layer("b", &config.clone().with_random_loc_seed(1).with_wavelet_family("db3"))
        .unwrap();
    let original = layer.base_layer().weight().clone();

    layer.merge(true, None).unwrap();
    assert_eq!(layer.merged_adapters(), &["a".to_string(), "b".to_string()]);

    let expected = (&original
        + layer.get_delta_weight("a").unwrap()
        + layer.get_delta_weight("b").unwrap())
    .unwrap();
    assert!(max_abs_diff(layer.base_layer().weight(), &expected) < 1e-5);

    layer.unmerge().unwrap();
    assert!(!layer.merged());
    let scale = max_abs(&original).max(1.0);
    assert!(max_abs_diff(layer.base_layer().weight(), &original) / scale < 1e-5);
}

#[test]
fn test_safe_merge_nan_leaves_weight_unchanged() {
    let device = Device::Cpu;
    let config = WaveFtConfig::default()
        .with_n_frequency(6)
        .with_wavelet_family("db2");
    let mut layer = WaveFtLinear::new(random_linear(8, 8, &device), "broken", &config).unwrap();
    let before: Vec<Vec<f32>> = layer.base_layer().weight().to_vec2().unwrap();

    let mut values = vec![0.0f32; 6];
    values[3] = f32::NAN;
    layer
        .layer()
        .adapter("broken")
        .unwrap()
        .set_spectrum(&Tensor::new(values.as_slice(), &device).unwrap())
        .unwrap();

    match layer.merge(true, None) {
        Err(WaveFtError::MergeCorruption { adapter }) => assert_eq!(adapter, "broken"),
        other => panic!("expected MergeCorruption, got {other:?}"),
    }
    assert!(layer.merged_adapters().is_empty());

    let after: Vec<Vec<f32>> = layer.base_layer().weight().to_vec2().unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_forward_equivalence() {
    let device = Device::Cpu;
    let base = random_linear(20, 12, &device);
    let config = WaveFtConfig::default()
        .with_n_frequency(60)
        .with_scaling(3.0)
        .with_wavelet_family("coif1");
    let mut layer = WaveFtLinear::new(base.clone(), "a", &config).unwrap();

    let x = Tensor::randn(0.0f32, 1.0, (2, 5, 12), &device).unwrap();
    let delta = layer.get_delta_weight("a").unwrap();
    let expected = (BaseLinear::forward(&base, &x).unwrap()
        + x.broadcast_matmul(&delta.t().unwrap()).unwrap())
    .unwrap();

    let unmerged = layer.forward(&x).unwrap();
    assert_eq!(unmerged.dims(), &[2, 5, 20]);
    assert!(max_abs_diff(&unmerged, &expected) < 1e-4);

    layer.merge(false, None).unwrap();
    let merged = layer.forward(&x).unwrap();
    let fused = BaseLinear::forward(layer.base_layer(), &x).unwrap();
    assert!(max_abs_diff(&merged, &fused) < 1e-6);
    assert!(max_abs_diff(&merged, &expected) < 1e-4);
}

#[test]
fn test_disable_adapters_unmerges() {
    let device = Device::Cpu;
    let base = random_linear(10, 10, &device);
    let config = WaveFtConfig::default().with_n_frequency(20);
    let mut layer = WaveFtLinear::new(base.clone(), "a", &config).unwrap();
    let x = Tensor::randn(0.0f32, 1.0, (3, 10), &device).unwrap();

    layer.merge(true, None).unwrap();
    layer.enable_adapters(false);
    let y = layer.forward(&x).unwrap();
    assert!(!layer.merged());
    assert!(max_abs_diff(&y, &BaseLinear::forward(&base, &x).unwrap()) < 1e-5);

    layer.enable_adapters(true);
    let with_adapter = layer.forward(&x).unwrap();
    assert!(max_abs_diff(&with_adapter, &y) > 0.0);
}

#[test]
fn test_unmerge_without_merge_is_noop() {
    let device = Device::Cpu;
    let config = WaveFtConfig::default().with_n_frequency(4);
    let mut layer = WaveFtLinear::new(random_linear(4, 4, &device), "a", &config).unwrap();
    let before: Vec<Vec<f32>> = layer.base_layer().weight().to_vec2().unwrap();
    layer.unmerge().unwrap();
    let after: Vec<Vec<f32>> = layer.base_layer().weight().to_vec2().unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_gradient_reaches_spectrum() {
    let device = Device::Cpu;
    for use_idwt in [true, false] {
        let config = WaveFtConfig::default()
            .with_n_frequency(24)
            .with_scaling(1.0)
            .with_init_weights(true)
            .with_wavelet_family("db2")
            .with_use_idwt(use_idwt);
        let mut layer = WaveFtLinear::new(random_linear(8, 6, &device), "a", &config).unwrap();
        let x = Tensor::randn(0.0f32, 1.0, (16, 6), &device).unwrap();
        let target = Tensor::randn(0.0f32, 1.0, (16, 8), &device).unwrap();

        let loss = (layer.forward(&x).unwrap() - &target)
            .unwrap()
            .sqr()
            .unwrap()
            .mean_all()
            .unwrap();
        let grads = loss.backward().unwrap();

        let spectrum = layer.layer().adapter("a").unwrap().spectrum().clone();
        let grad = grads.get(spectrum.as_tensor()).expect("spectrum gradient");
        assert_eq!(grad.dims(), &[24]);
        assert!(max_abs(grad) > 0.0, "use_idwt={use_idwt}");
    }
}

#[test]
fn test_sgd_step_reduces_loss() {
    let device = Device::Cpu;
    let config = WaveFtConfig::default()
        .with_n_frequency(48)
        .with_scaling(1.0)
        .with_init_weights(true)
        .with_wavelet_family("db1");
    let mut layer = WaveFtLinear::new(random_linear(8, 8, &device), "a", &config).unwrap();
    let x = Tensor::randn(0.0f32, 1.0, (32, 8), &device).unwrap();
    let target = Tensor::randn(0.0f32, 1.0, (32, 8), &device).unwrap();

    let mut sgd = SGD::new(layer.trainable_vars(), 0.05).unwrap();
    let mut losses = Vec::new();
    for _ in 0..5 {
        let loss = (layer.forward(&x).unwrap() - &target)
            .unwrap()
            .sqr()
            .unwrap()
            .mean_all()
            .unwrap();
        losses.push(loss.to_scalar::<f32>().unwrap());
        sgd.backward_step(&loss).unwrap();
    }
    assert!(losses[4] < losses[0], "losses: {losses:?}");
}

#[test]
fn test_conv1d_base_layer() {
    let device = Device::Cpu;
    let conv = Conv1D::new(
        Tensor::randn(0.0f32, 1.0, (12, 20), &device).unwrap(),
        Some(Tensor::randn(0.0f32, 1.0, 20, &device).unwrap()),
    )
    .unwrap();
    let config = WaveFtConfig::default()
        .with_n_frequency(30)
        .with_fan_in_fan_out(true)
        .with_wavelet_family("sym2");
    let mut layer = WaveFtLinear::new(conv, "a", &config).unwrap();
    assert_eq!(layer.layer().in_features(), 12);
    assert_eq!(layer.layer().out_features(), 20);

    let original = layer.base_layer().weight().clone();
    let x = Tensor::randn(0.0f32, 1.0, (4, 12), &device).unwrap();
    let unmerged = layer.forward(&x).unwrap();
    layer.merge(true, None).unwrap();
    assert!(max_abs_diff(&layer.forward(&x).unwrap(), &unmerged) < 1e-4);
    layer.unmerge().unwrap();
    assert!(max_abs_diff(layer.base_layer().weight(), &original) < 1e-5);
}

/// Reconstructs every family with the Haar bank and refuses `db8`. Only the
/// output-size contract matters here.
#[derive(Debug)]
struct HaarEverywhere;

impl WaveletReconstruct for HaarEverywhere {
    fn reconstruct(
        &self,
        coeffs: &SubBands,
        _family: WaveletFamily,
    ) -> waveft_rs::Result<Tensor> {
        FilterBankIdwt::new().reconstruct(coeffs, WaveletFamily::default())
    }

    fn supports(&self, family: WaveletFamily) -> bool {
        family.name() != "db8"
    }
}

#[test]
fn test_custom_reconstructor_is_consulted() {
    let device = Device::Cpu;
    let config = WaveFtConfig::default()
        .with_n_frequency(10)
        .with_wavelet_family("db8");

    let builtin = WaveFtLinear::new(random_linear(6, 6, &device), "a", &config).unwrap();
    assert_eq!(builtin.get_delta_weight("a").unwrap().dims(), &[6, 6]);

    let err = WaveFtLinear::with_reconstructor(
        random_linear(6, 6, &device),
        "a",
        &config,
        Arc::new(HaarEverywhere),
    )
    .unwrap_err();
    assert!(matches!(err, WaveFtError::InvalidConfig(_)));

    let layer = WaveFtLinear::with_reconstructor(
        random_linear(6, 6, &device),
        "a",
        &config.with_wavelet_family("coif17"),
        Arc::new(HaarEverywhere),
    )
    .unwrap();
    assert_eq!(layer.get_delta_weight("a").unwrap().dims(), &[6, 6]);
}

#[test]
fn test_long_filters_merge_round_trip() {
    let device = Device::Cpu;
    for family in ["db38", "sym20", "coif17"] {
        let config = WaveFtConfig::default()
            .with_n_frequency(40)
            .with_init_weights(false)
            .with_wavelet_family(family);
        let mut layer = WaveFtLinear::new(random_linear(10, 7, &device), "a", &config).unwrap();
        let original = layer.base_layer().weight().clone();

        let x = Tensor::randn(0.0f32, 1.0, (3, 7), &device).unwrap();
        let unmerged = layer.forward(&x).unwrap();
        layer.merge(true, None).unwrap();
        assert!(max_abs_diff(&layer.forward(&x).unwrap(), &unmerged) < 1e-3, "{family}");
        layer.unmerge().unwrap();
        assert!(max_abs_diff(layer.base_layer().weight(), &original) < 1e-5, "{family}");
    }
}

#[test]
fn test_checkpoint_round_trip_through_wrapper() {
    let device = Device::Cpu;
    let dir = tempfile::tempdir().unwrap();
    let config = WaveFtConfig::default()
        .with_n_frequency(25)
        .with_wavelet_family("db4");

    let trained = WaveFtLinear::new(random_linear(9, 11, &device), "task", &config).unwrap();
    trained.save_adapter(dir.path(), "task").unwrap();

    let mut fresh = WaveFtLinear::new(
        random_linear(9, 11, &device),
        "other",
        &config.clone().with_random_loc_seed(5),
    )
    .unwrap();
    fresh.load_adapter(dir.path(), "task").unwrap();

    assert!(
        max_abs_diff(
            &trained.get_delta_weight("task").unwrap(),
            &fresh.get_delta_weight("task").unwrap()
        ) == 0.0
    );
    assert_eq!(
        fresh.active_adapters(),
        &["other".to_string(), "task".to_string()]
    );

    fresh.merge(true, Some(&["task"])).unwrap();
    assert!(fresh.load_adapter(dir.path(), "task").is_err());
}
