use thiserror::Error;
use validator::ValidationErrors;

use crate::repositories::StoreError;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// A caller broke a precondition, e.g. passed an empty owner id
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    /// The payload points at a workout or exercise type the caller cannot use
    #[error("{0}")]
    InvalidReference(String),
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Store(#[from] StoreError),
}
