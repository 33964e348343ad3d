use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShipmateError {
    #[error("Failed to read {path}: {source}")]
    DocumentRead {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShipmateError>;
