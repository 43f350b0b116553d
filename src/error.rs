use thiserror::Error;

pub type Result<T> = std::result::Result<T, SamplerError>;

#[derive(Debug, Error)]
pub enum SamplerError {
    #[error(transparent)]
    Candle(#[from] candle_core::Error),

    #[error("invalid categorical weights: {0}")]
    InvalidWeights(#[from] rand::distributions::WeightedError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("a categorical distribution needs at least one category")]
    EmptyDimension,

    #[error("negative or non-finite probability encountered")]
    NegativeProbability,

    #[error("probability vector not normalized: sum = {sum} (expected 1.0)")]
    NotNormalized { sum: f64 },

    #[error("category {index} out of range for {dim} categories")]
    CategoryOutOfRange { index: i64, dim: usize },

    #[error("category indices must be an integer tensor, got {dtype:?}")]
    CategoryDtype { dtype: candle_core::DType },

    #[error("row {row} is not a one-hot encoding")]
    NotOneHot { row: usize },

    #[error("shape mismatch: expected {expected}, got {got:?}")]
    ShapeMismatch { expected: String, got: Vec<usize> },
}
