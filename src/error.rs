use thiserror::Error;

pub type Result<T> = std::result::Result<T, FincalcError>;

#[derive(Debug, Error)]
pub enum FincalcError {
    #[error("Unknown calculator: {0}")]
    UnknownCalculator(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
