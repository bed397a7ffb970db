use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("source error: {0}")]
    Source(#[from] csv::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("delivery rejected with status {status} for event at {timestamp}")]
    Delivery { status: u16, timestamp: String },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type ImportResult<T> = Result<T, ImportError>;
