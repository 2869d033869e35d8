use thiserror::Error;

#[derive(Error, Debug)]
pub enum KidVestError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Invalid question bank: {0}")]
    InvalidQuestionBank(String),
}

pub type Result<T> = std::result::Result<T, KidVestError>;
