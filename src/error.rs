use thiserror::Error;

pub type Result<T> = std::result::Result<T, WmError>;

#[derive(Debug, Error)]
pub enum WmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}
