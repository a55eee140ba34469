use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("invalid area unit: {unit}")]
    InvalidUnit {
        unit: String,
    },

    #[error("invalid amount: {value}")]
    InvalidAmount {
        value: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
