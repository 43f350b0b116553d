use candle_core::{DType, Device, Tensor};
use candle_nn::ops;
use rand::Rng;

use crate::error::{Result, SamplerError};

/// Maximum distance from one tolerated when validating a probability vector.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// Rank-1 `f64` tensor of non-negative entries summing to one.
#[derive(Debug, Clone)]
pub struct ProbabilityVector {
    tensor: Tensor,
}

impl ProbabilityVector {
    /// Draws `dim` uniform [0, 1) values and pushes them through a softmax,
    /// i.e. exponentiates them and divides by their sum.
    pub fn random<R: Rng + ?Sized>(dim: usize, rng: &mut R, device: &Device) -> Result<Self> {
        if dim == 0 {
            return Err(SamplerError::EmptyDimension);
        }
        let uniforms: Vec<f64> = (0..dim).map(|_| rng.gen::<f64>()).collect();
        let uniforms = Tensor::from_vec(uniforms, dim, device)?;
        let tensor = ops::softmax(&uniforms, 0)?;
        tracing::debug!(dim, "generated probability vector");

        Ok(Self { tensor })
    }

    pub fn from_tensor(tensor: Tensor) -> Result<Self> {
        let dim = tensor.dims1().map_err(|_| SamplerError::ShapeMismatch {
            expected: "a rank-1 probability vector".to_string(),
            got: tensor.dims().to_vec(),
        })?;
        if dim == 0 {
            return Err(SamplerError::EmptyDimension);
        }
        let tensor = tensor.to_dtype(DType::F64)?;
        let entries = tensor.to_vec1::<f64>()?;
        if entries.iter().any(|&p| !p.is_finite() || p < 0.0) {
            return Err(SamplerError::NegativeProbability);
        }
        let sum: f64 = entries.iter().sum();
        if !((sum - 1.0).abs() <= NORMALIZATION_TOLERANCE) {
            return Err(SamplerError::NotNormalized { sum });
        }

        Ok(Self { tensor })
    }

    pub fn dim(&self) -> usize {
        self.tensor.elem_count()
    }

    pub fn tensor(&self) -> &Tensor {
        &self.tensor
    }

    pub fn to_vec(&self) -> Result<Vec<f64>> {
        Ok(self.tensor.to_vec1::<f64>()?)
    }
}
