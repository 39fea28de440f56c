use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    /// The declared length does not match the number of elements in the slice.
    #[error("declared length {len} does not match slice length {actual}")]
    LengthMismatch { len: usize, actual: usize },

    #[error("invalid integer '{token}': {source}")]
    Parse {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SortError>;
