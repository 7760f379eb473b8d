use thiserror::Error;

/// errors for the ambient surface of the library (configuration and
/// serialization). business inputs never produce an error; calculations
/// report failures through their result records instead.
#[derive(Error, Debug)]
pub enum FinanceError {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FinanceError>;
