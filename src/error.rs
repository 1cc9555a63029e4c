//! Error type shared by the whole crate.

use crate::types::Var;

/// Errors raised while evaluating formulas or running a learner.
///
/// All of these are precondition violations except [`HornError::NotConverged`],
/// which reports an exhausted iteration cap.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum HornError {
    /// Two assignments being intersected are defined over different variables.
    DomainMismatch,
    /// A bit string does not have one character per variable of the universe.
    LengthMismatch { expected: usize, found: usize },
    /// A bit string contains a character other than `0` or `1`.
    InvalidBit(char),
    /// A clause mentions a variable the assignment does not define.
    UnknownVariable(Var),
    /// The hypothesis mentions a variable outside the target universe.
    UniverseMismatch(Var),
    /// The learner did not converge within the configured number of iterations.
    NotConverged { iterations: usize },
}

impl std::fmt::Display for HornError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HornError::DomainMismatch => write!(f, "Assignments are defined over different variables"),
            HornError::LengthMismatch { expected, found } => {
                write!(f, "Bit string has length {}, expected {}", found, expected)
            }
            HornError::InvalidBit(c) => write!(f, "Invalid bit '{}' in bit string", c),
            HornError::UnknownVariable(v) => write!(f, "Variable '{}' is not defined by the assignment", v),
            HornError::UniverseMismatch(v) => write!(f, "Variable '{}' is outside the target universe", v),
            HornError::NotConverged { iterations } => {
                write!(f, "Learner did not converge after {} iterations", iterations)
            }
        }
    }
}

impl std::error::Error for HornError {}

pub type Result<T, E = HornError> = std::result::Result<T, E>;
