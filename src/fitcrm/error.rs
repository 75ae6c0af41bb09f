use crate::model::ClientId;
use crate::validation::ValidationFailure;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FitcrmError {
    #[error("Client not found: {0}")]
    ClientNotFound(ClientId),

    #[error("{0}")]
    Validation(ValidationFailure),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl From<ValidationFailure> for FitcrmError {
    fn from(failure: ValidationFailure) -> Self {
        FitcrmError::Validation(failure)
    }
}

pub type Result<T> = std::result::Result<T, FitcrmError>;
