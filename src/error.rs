use thiserror::Error;

// Unified error type for algobench

#[derive(Error, Debug)]
pub enum AlgoError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl AlgoError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        AlgoError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AlgoError>;
