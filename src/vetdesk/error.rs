use thiserror::Error;

#[derive(Error, Debug)]
pub enum VetError {
    /// A required field was missing or a submitted value was malformed.
    /// Blocks the mutation; surfaced inline, never logged or retried.
    #[error("{0}")]
    Validation(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Auth(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, VetError>;
