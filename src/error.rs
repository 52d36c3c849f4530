use thiserror::Error;

/// Errors surfaced by the encoder, decoder and the intermediate solver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FecError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    #[error("insufficient symbols: need at least {need}, got {got}")]
    InsufficientSymbols { need: usize, got: usize },
    #[error("decoding failed: constraint matrix is singular")]
    DecodeFailure,
    #[error("symbol index out of range")]
    InvalidIndex,
    #[error("constraint matrix is inconsistent")]
    MatrixInconsistency,
}

pub type Result<T> = std::result::Result<T, FecError>;
