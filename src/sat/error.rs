//! Errors raised before or around solving. The solvers themselves never fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SatError {
    /// Unknown strategy name, or a strategy the chosen method does not offer.
    #[error("invalid strategy `{0}`")]
    InvalidStrategy(String),

    #[error("invalid solving method `{0}`, expected one of dp, dpll, resolution")]
    InvalidMethod(String),

    /// The DIMACS text could not be read as a formula.
    #[error("malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SatError>;
