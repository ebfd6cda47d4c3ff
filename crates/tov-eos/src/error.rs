//! Equation-of-state errors.

use std::path::PathBuf;
use thiserror::Error;
use tov_core::CoreError;

/// Result type for EOS operations.
pub type EosResult<T> = Result<T, EosError>;

/// Errors that can occur while building or querying an equation of state.
#[derive(Error, Debug)]
pub enum EosError {
    /// Malformed sample set; no EOS is produced.
    #[error("Cannot build equation of state: {reason}")]
    Construction { reason: String },

    /// Value outside the validity envelope of the EOS.
    #[error("{quantity} {value:.5e} is outside the EOS range [{min:.5e}, {max:.5e}]")]
    OutOfRange {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Unreadable row in an EOS table.
    #[error("EOS table line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Failed to read EOS table: {path}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl EosError {
    pub(crate) fn construction(reason: impl Into<String>) -> Self {
        EosError::Construction {
            reason: reason.into(),
        }
    }
}

impl From<CoreError> for EosError {
    fn from(err: CoreError) -> Self {
        EosError::Construction {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_reports_bounds() {
        let err = EosError::OutOfRange {
            quantity: "density",
            value: 5.0,
            min: 1.0,
            max: 2.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("density"));
        assert!(msg.contains("5.00000e0"));
        assert!(msg.contains("2.00000e0"));
    }

    #[test]
    fn core_error_becomes_construction() {
        let err: EosError = CoreError::NonPositive {
            what: "pressure sample",
            value: -1.0,
        }
        .into();
        assert!(matches!(err, EosError::Construction { .. }));
        assert!(err.to_string().contains("pressure sample"));
    }
}
