//! Error types for lanzar

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("data preparation failed: {0}")]
    Data(String),

    #[error("tracking error: {0}")]
    Tracking(String),

    #[error("training failed: {0}")]
    Training(String),

    #[error("interrupted by user")]
    Interrupted,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
