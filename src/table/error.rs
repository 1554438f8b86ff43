//! Error types for truth table generation

use crate::expression::EvaluationError;
use std::fmt;
use std::io;

/// Errors that can occur while generating a truth table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The expression has more variables than the configured limit
    ///
    /// Raised before any row is enumerated, since the table would have `2^count` rows.
    TooManyVariables {
        /// Number of distinct variables in the expression
        count: usize,
        /// The maximum number of variables allowed
        limit: usize,
    },
    /// Evaluating a row failed
    Evaluation(EvaluationError),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::TooManyVariables { count, limit } => write!(
                f,
                "Expression has {} variables, more than the limit of {} ({} rows would be needed)",
                count,
                limit,
                RowCount(*count)
            ),
            TableError::Evaluation(e) => write!(f, "{}", e),
        }
    }
}

/// Formats `2^n` without overflowing
struct RowCount(usize);

impl fmt::Display for RowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match u32::try_from(self.0).ok().and_then(|n| 1u128.checked_shl(n)) {
            Some(rows) => write!(f, "{}", rows),
            None => write!(f, "2^{}", self.0),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::TooManyVariables { .. } => None,
            TableError::Evaluation(e) => Some(e),
        }
    }
}

impl From<EvaluationError> for TableError {
    fn from(err: EvaluationError) -> Self {
        TableError::Evaluation(err)
    }
}

impl From<TableError> for io::Error {
    fn from(err: TableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
