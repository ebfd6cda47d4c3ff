//! Error types for structure integration.

use thiserror::Error;
use tov_eos::EosError;

/// Errors encountered while integrating a stellar model.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Requested value lies outside the EOS envelope; raised before any step.
    #[error("Central {quantity} {value:.5e} is outside the EOS range [{min:.5e}, {max:.5e}]")]
    OutOfRange {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Iteration cap reached or the state stopped being finite.
    #[error("Integration diverged after {steps} steps (pressure {pressure:.5e} Ba)")]
    Divergence { steps: usize, pressure: f64 },

    #[error("EOS error: {0}")]
    Eos(EosError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<EosError> for SolverError {
    fn from(e: EosError) -> Self {
        match e {
            EosError::OutOfRange {
                quantity,
                value,
                min,
                max,
            } => SolverError::OutOfRange {
                quantity,
                value,
                min,
                max,
            },
            other => SolverError::Eos(other),
        }
    }
}
