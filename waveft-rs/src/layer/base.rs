//! Base layers a WaveFT adapter can wrap.

use candle_core::Tensor;
use candle_nn::{Linear, Module};

use crate::error::{Result, WaveFtError};

/// Storage layout of a base layer's weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeightLayout {
    /// `[out_features, in_features]`, as in `candle_nn::Linear`.
    #[default]
    OutIn,
    /// `[in_features, out_features]`, as in GPT-2 style `Conv1D`.
    InOut,
}

impl WeightLayout {
    /// Whether the weight is stored transposed relative to `Linear`.
    #[must_use]
    pub const fn is_fan_in_fan_out(self) -> bool {
        matches!(self, Self::InOut)
    }
}

/// A dense layer whose weight can be read and replaced.
pub trait BaseLinear {
    /// The weight tensor in this layer's storage layout.
    fn weight(&self) -> &Tensor;

    /// Replace the weight. The shape must not change.
    ///
    /// # Errors
    ///
    /// Returns [`WaveFtError::ShapeMismatch`] if the shape differs.
    fn set_weight(&mut self, weight: Tensor) -> Result<()>;

    /// Apply the layer.
    ///
    /// # Errors
    ///
    /// Returns error if the forward pass fails.
    fn forward(&self, x: &Tensor) -> Result<Tensor>;

    /// Storage layout of [`Self::weight`].
    fn weight_layout(&self) -> WeightLayout {
        WeightLayout::OutIn
    }

    /// `(in_features, out_features)` of the weight.
    ///
    /// # Errors
    ///
    /// Returns [`WaveFtError::UnsupportedBaseLayer`] if the weight is not 2-D.
    fn linear_shape(&self) -> Result<(usize, usize)> {
        let (rows, cols) = self.weight().dims2().map_err(|_| {
            WaveFtError::UnsupportedBaseLayer(format!(
                "expected a 2-D weight, got shape {:?}",
                self.weight().dims()
            ))
        })?;
        Ok(match self.weight_layout() {
            WeightLayout::OutIn => (cols, rows),
            WeightLayout::InOut => (rows, cols),
        })
    }
}

fn check_same_shape(current: &Tensor, new: &Tensor) -> Result<()> {
    if current.dims() != new.dims() {
        return Err(WaveFtError::ShapeMismatch {
            expected: current.dims().to_vec(),
            actual: new.dims().to_vec(),
        });
    }
    Ok(())
}

impl BaseLinear for Linear {
    fn weight(&self) -> &Tensor {
        Linear::weight(self)
    }

    fn set_weight(&mut self, weight: Tensor) -> Result<()> {
        check_same_shape(Linear::weight(self), &weight)?;
        *self = Linear::new(weight, self.bias().cloned());
        Ok(())
    }

    fn forward(&self, x: &Tensor) -> Result<Tensor> {
        Ok(Module::forward(self, x)?)
    }
}

/// Dense layer with an `[in_features, out_features]` weight.
///
/// Computes `x @ W + b`.
#[derive(Debug, Clone)]
pub struct Conv1D {
    weight: Tensor,
    bias: Option<Tensor>,
}

impl Conv1D {
    /// Wrap an `[in_features, out_features]` weight and optional `[out_features]` bias.
    ///
    /// # Errors
    ///
    /// Returns error if the weight is not 2-D or the bias length differs
    /// from `out_features`.
    pub fn new(weight: Tensor, bias: Option<Tensor>) -> Result<Self> {
        let (_, out_features) = weight.dims2()?;
        if let Some(bias) = &bias {
            if bias.dims() != [out_features] {
                return Err(WaveFtError::ShapeMismatch {
                    expected: vec![out_features],
                    actual: bias.dims().to_vec(),
                });
            }
        }
        Ok(Self { weight, bias })
    }

    /// Optional bias.
    #[must_use]
    pub const fn bias(&self) -> Option<&Tensor> {
        self.bias.as_ref()
    }
}

impl BaseLinear for Conv1D {
    fn weight(&self) -> &Tensor {
        &self.weight
    }

    fn set_weight(&mut self, weight: Tensor) -> Result<()> {
        check_same_shape(&self.weight, &weight)?;
        self.weight = weight;
        Ok(())
    }

    fn forward(&self, x: &Tensor) -> Result<Tensor> {
        let y = x.broadcast_matmul(&self.weight)?;
        match &self.bias {
            Some(bias) => Ok(y.broadcast_add(bias)?),
            None => Ok(y),
        }
    }

    fn weight_layout(&self) -> WeightLayout {
        WeightLayout::InOut
    }
}

#[cfg(test)]
mod tests {
    use candle_core::{DType, Device};

    use super::*;

    #[test]
    fn test_linear_shape() {
        let device = Device::Cpu;
        let linear = Linear::new(Tensor::zeros((6, 4), DType::F32, &device).unwrap(), None);
        assert_eq!(linear.linear_shape().unwrap(), (4, 6));
        assert_eq!(linear.weight_layout(), WeightLayout::OutIn);

        let conv = Conv1D::new(Tensor::zeros((4, 6), DType::F32, &device).unwrap(), None).unwrap();
        assert_eq!(conv.linear_shape().unwrap(), (4, 6));
        assert!(conv.weight_layout().is_fan_in_fan_out());
    }

    #[test]
    fn test_non_matrix_weight_is_unsupported() {
        let device = Device::Cpu;
        let linear = Linear::new(Tensor::zeros((2, 3, 4), DType::F32, &device).unwrap(), None);
        assert!(matches!(
            linear.linear_shape(),
            Err(WaveFtError::UnsupportedBaseLayer(_))
        ));
    }

    #[test]
    fn test_set_weight_keeps_bias() {
        let device = Device::Cpu;
        let bias = Tensor::new(&[1.0f32, 2.0], &device).unwrap();
        let mut linear = Linear::new(
            Tensor::zeros((2, 3), DType::F32, &device).unwrap(),
            Some(bias),
        );
        linear
            .set_weight(Tensor::ones((2, 3), DType::F32, &device).unwrap())
            .unwrap();

        let x = Tensor::ones((1, 3), DType::F32, &device).unwrap();
        let y: Vec<Vec<f32>> = BaseLinear::forward(&linear, &x).unwrap().to_vec2().unwrap();
        assert_eq!(y, vec![vec![4.0, 5.0]]);

        let wrong = Tensor::ones((3, 2), DType::F32, &device).unwrap();
        assert!(linear.set_weight(wrong).is_err());
    }

    #[test]
    fn test_conv1d_matches_transposed_linear() {
        let device = Device::Cpu;
        let w = Tensor::randn(0.0f32, 1.0, (5, 3), &device).unwrap();
        let b = Tensor::randn(0.0f32, 1.0, 3, &device).unwrap();
        let x = Tensor::randn(0.0f32, 1.0, (2, 4, 5), &device).unwrap();

        let conv = Conv1D::new(w.clone(), Some(b.clone())).unwrap();
        let linear = Linear::new(w.t().unwrap().contiguous().unwrap(), Some(b));

        let a = BaseLinear::forward(&conv, &x).unwrap();
        let c = BaseLinear::forward(&linear, &x).unwrap();
        let diff: f32 = (a - c)
            .unwrap()
            .abs()
            .unwrap()
            .max_all()
            .unwrap()
            .to_scalar()
            .unwrap();
        assert!(diff < 1e-5);
    }
}
