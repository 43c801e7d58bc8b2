use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport policy: min_points={min_points}, step={step}")]
    InvalidPolicy { min_points: usize, step: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
