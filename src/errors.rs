use thiserror::Error;

/// Error type that captures record-store and persistence failures.
#[derive(Debug, Error)]
pub enum BookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Validation(String),
    #[error("index {index} is out of range for {len} records")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("custom page `{0}` already exists")]
    DuplicatePage(String),
    #[error("unknown custom page `{0}`")]
    UnknownPage(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl BookError {
    pub fn validation(message: impl Into<String>) -> Self {
        BookError::Validation(message.into())
    }
}

impl From<serde_json::Error> for BookError {
    fn from(err: serde_json::Error) -> Self {
        BookError::Persistence(err.to_string())
    }
}
