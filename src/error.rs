use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NeuralError>;

#[derive(Error, Debug)]
pub enum NeuralError {
    /// A sequence did not have the length the network was built for.
    #[error("shape mismatch for {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{0} layer must have at least one unit")]
    EmptyLayer(&'static str),

    /// A weight matrix would hold more than `usize::MAX` entries.
    #[error("{from} x {to} weight matrix is too large")]
    LayerTooLarge { from: usize, to: usize },

    /// Learning rates must be finite and strictly positive.
    #[error("invalid learning rate {0}: must be finite and > 0")]
    InvalidLearningRate(f64),

    #[error("dataset is empty")]
    EmptyDataset,

    /// A dataset line could not be parsed. `line` is 1-based.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("{0}")]
    Usage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fails with `ShapeMismatch` unless `actual == expected`.
pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NeuralError::ShapeMismatch { what, expected, actual })
    }
}
