use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid plot dimensions: width={width}, height={height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("axis contract violated: {0}")]
    AxisContract(String),

    #[error("chart root `{id}` is not mounted on the drawing surface")]
    RootNotMounted { id: String },

    #[error("{axis}-axis would produce more than {limit} ticks")]
    TooManyTicks { axis: char, limit: usize },
}
