use candle_core::{DType, Tensor, D};
use rand::Rng;

use crate::error::{Result, SamplerError};
use crate::probability_vector::ProbabilityVector;
use crate::sampling::sample_categorical;

/// A named variable that always takes the same value.
///
/// Model parameters are held in one of these, so their log-probability is
/// always zero.
#[derive(Debug, Clone)]
pub struct DeterministicVariable {
    name: String,
    value: Tensor,
}

impl DeterministicVariable {
    pub fn new(name: impl Into<String>, value: Tensor) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Tensor {
        &self.value
    }

    pub fn log_probability(&self) -> f64 {
        0.0
    }

    /// Repeats the value along a new leading batch axis.
    pub fn get_sample(&self, number_samples: usize) -> Result<Tensor> {
        let mut repeats = vec![number_samples];
        repeats.extend(std::iter::repeat(1).take(self.value.rank()));
        Ok(self.value.unsqueeze(0)?.repeat(repeats)?)
    }
}

/// A named categorical random variable over `dim` outcomes.
///
/// Samples are rank-1 `u32` tensors of category indices. Wherever a batch is
/// consumed, an `n x dim` one-hot tensor is accepted as well.
pub struct CategoricalVariable {
    name: String,
    probabilities: DeterministicVariable,
    prob: ProbabilityVector,
    latest_sample: Option<Tensor>,
    observed_value: Option<Tensor>,
}

impl CategoricalVariable {
    pub fn new(name: impl Into<String>, probabilities: DeterministicVariable) -> Result<Self> {
        let prob = ProbabilityVector::from_tensor(probabilities.value().clone())?;
        Ok(Self {
            name: name.into(),
            probabilities,
            prob,
            latest_sample: None,
            observed_value: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dim(&self) -> usize {
        self.prob.dim()
    }

    pub fn probabilities(&self) -> &DeterministicVariable {
        &self.probabilities
    }

    pub fn is_observed(&self) -> bool {
        self.observed_value.is_some()
    }

    /// Draws a fresh batch, or hands back the observed data when observed.
    pub fn get_sample<R: Rng + ?Sized>(
        &mut self,
        number_samples: usize,
        rng: &mut R,
    ) -> Result<Tensor> {
        if let Some(observed) = &self.observed_value {
            return Ok(observed.clone());
        }
        let prs = self.prob.to_vec()?;
        let categories = sample_categorical(rng, &prs, number_samples)?;
        tracing::debug!(variable = %self.name, ?categories, "sampled categorical variable");
        let sample = Tensor::from_vec(categories, number_samples, self.prob.tensor().device())?;
        self.latest_sample = Some(sample.clone());

        Ok(sample)
    }

    pub fn current_sample(&self) -> Option<&Tensor> {
        self.latest_sample.as_ref()
    }

    pub fn reset(&mut self) {
        self.latest_sample = None;
    }

    pub fn observe(&mut self, data: &Tensor) -> Result<()> {
        let indices = self.category_indices(data)?;
        tracing::info!(variable = %self.name, count = indices.elem_count(), "observed data");
        self.observed_value = Some(indices);
        Ok(())
    }

    pub fn unobserve(&mut self) {
        self.observed_value = None;
    }

    /// `ln(prob[i])` for every outcome `i` in `values`, in order.
    pub fn calculate_log_probability(&self, values: &Tensor) -> Result<Tensor> {
        let indices = self.category_indices(values)?;
        let log_prob = self.prob.tensor().log()?.index_select(&indices, 0)?;
        Ok(log_prob.affine(1.0, self.probabilities.log_probability())?)
    }

    /// Joint log-probability of the observed data, treated as i.i.d. draws.
    pub fn observed_log_probability(&self) -> Result<Option<f64>> {
        match &self.observed_value {
            Some(observed) => {
                let total = self.calculate_log_probability(observed)?.sum_all()?;
                Ok(Some(total.to_scalar::<f64>()?))
            }
            None => Ok(None),
        }
    }

    pub fn to_one_hot(&self, values: &Tensor) -> Result<Tensor> {
        let indices = self.category_indices(values)?;
        let device = indices.device();
        let categories = Tensor::arange(0u32, self.dim() as u32, device)?;
        let one_hot = indices
            .unsqueeze(1)?
            .broadcast_eq(&categories.unsqueeze(0)?)?
            .to_dtype(DType::F64)?;
        Ok(one_hot)
    }

    /// Normalizes a batch to a rank-1 `u32` index tensor and checks its range.
    fn category_indices(&self, values: &Tensor) -> Result<Tensor> {
        let dim = self.dim();
        let indices: Vec<i64> = match values.dims() {
            [_] => match values.dtype() {
                DType::U8 | DType::U32 | DType::I64 => values.to_dtype(DType::I64)?.to_vec1()?,
                dtype => return Err(SamplerError::CategoryDtype { dtype }),
            },
            [_, width] if *width == dim => {
                let rows = values.to_dtype(DType::F64)?.to_vec2::<f64>()?;
                if let Some(row) = rows.iter().position(|row| !is_one_hot(row)) {
                    return Err(SamplerError::NotOneHot { row });
                }
                values.argmax(D::Minus1)?.to_dtype(DType::I64)?.to_vec1()?
            }
            got => {
                return Err(SamplerError::ShapeMismatch {
                    expected: format!("(n,) indices or (n, {dim}) one-hot"),
                    got: got.to_vec(),
                })
            }
        };
        if let Some(&index) = indices
            .iter()
            .find(|&&index| index < 0 || index as usize >= dim)
        {
            return Err(SamplerError::CategoryOutOfRange { index, dim });
        }
        let indices: Vec<u32> = indices.into_iter().map(|index| index as u32).collect();
        let count = indices.len();

        Ok(Tensor::from_vec(indices, count, values.device())?)
    }
}

fn is_one_hot(row: &[f64]) -> bool {
    row.iter().all(|&x| x == 0.0 || x == 1.0) && row.iter().filter(|&&x| x == 1.0).count() == 1
}
