use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Month window must have 12 labels, got {actual}")]
    WindowSize { actual: usize },

    #[error("Invalid window start: year {year}, month {month}")]
    InvalidWindowStart { year: i32, month: u32 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ForecastResult<T> = Result<T, ForecastError>;
