use thiserror::Error;

/// Errors that can occur while computing an analysis
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Computation produced a non-finite value: {0}")]
    NonFinite(String),
}
