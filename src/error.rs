use thiserror::Error;

use crate::models::CarType;

#[derive(Error, Debug)]
pub enum FootprintError {
    #[error("No emission factor configured for car type '{0}'")]
    MissingCarFactor(CarType),

    #[error("Unknown car type: '{0}'. Must be one of gas, diesel, hybrid, electric")]
    UnknownCarType(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid data in log row {row}: {message}")]
    InvalidData { row: usize, message: String },

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FootprintError>;
