use thiserror::Error;

#[derive(Debug, Error)]
pub enum KmeansError {
    #[error("index {index} out of range for container of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("line {line}: {msg}")]
    Parse { line: usize, msg: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KmeansError>;
