//! Optimizer error type.

use std::fmt;

use crate::validation::ValidationError;

/// Errors raised by the optimizer and its input conversions.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizeError {
    /// Mode name is neither `"Heuristic"` nor `"Simulated AI"`.
    UnknownMode(String),
    /// Priority class outside 1..=5.
    InvalidPriority(u8),
    /// The train list failed structural validation.
    InvalidInput(Vec<ValidationError>),
}

impl fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMode(mode) => write!(f, "unknown optimization mode '{mode}'"),
            Self::InvalidPriority(p) => write!(f, "priority {p} is outside 1..=5"),
            Self::InvalidInput(errors) => {
                write!(f, "invalid train list ({} issue(s))", errors.len())?;
                for e in errors {
                    write!(f, "; {}", e.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for OptimizeError {}

impl From<Vec<ValidationError>> for OptimizeError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}
