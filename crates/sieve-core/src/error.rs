use thiserror::Error;

#[derive(Error, Debug)]
pub enum SieveError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SieveError>;
