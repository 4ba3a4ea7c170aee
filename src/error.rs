use crate::operator::Operator;
use std::fmt::Display;

/// A error which is produced when trying to build a malformed proposition or to evaluate an
/// operator with the wrong number of inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    /// An atomic proposition was named with something other than exactly one character
    InvalidName(String),
    /// A compound proposition was given a number of places its operator does not take
    ArityMismatch {
        operator: Operator,
        expected: usize,
        found: usize,
    },
    /// An operator was evaluated on a valuation of the wrong length
    InvalidArity {
        operator: Operator,
        expected: usize,
        found: usize,
    },
}

impl Display for LogicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogicError::InvalidName(name) => {
                write!(f, "atomic proposition name {:?} is not a single character", name)
            }
            LogicError::ArityMismatch {
                operator,
                expected,
                found,
            } => write!(
                f,
                "{} takes {} place(s) but {} were supplied",
                operator.name(),
                expected,
                found
            ),
            LogicError::InvalidArity {
                operator,
                expected,
                found,
            } => write!(
                f,
                "{} evaluated on {} value(s), expected {}",
                operator.name(),
                found,
                expected
            ),
        }
    }
}

impl std::error::Error for LogicError {}
