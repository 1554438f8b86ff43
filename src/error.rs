//! Crate-level error type
//!
//! Each module has its own error enum; [`TruthTableError`] wraps all of them so the
//! whole parse → generate → write pipeline can use a single `?`.

use crate::expression::{EvaluationError, ExpressionParseError};
use crate::table::TableError;
use std::fmt;
use std::io;

/// Any error produced by this crate
#[derive(Debug)]
pub enum TruthTableError {
    /// The input text is not a valid boolean expression
    Parse(ExpressionParseError),

    /// An expression could not be evaluated
    Evaluation(EvaluationError),

    /// The expression has too many variables for a truth table
    TooManyVariables {
        /// Number of distinct variables in the expression
        count: usize,
        /// The configured limit
        limit: usize,
    },

    /// Reading input or writing output failed
    Io(io::Error),
}

impl fmt::Display for TruthTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruthTableError::Parse(err) => write!(f, "{}", err),
            TruthTableError::Evaluation(err) => write!(f, "{}", err),
            TruthTableError::TooManyVariables { count, limit } => write!(
                f,
                "{}",
                TableError::TooManyVariables {
                    count: *count,
                    limit: *limit
                }
            ),
            TruthTableError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for TruthTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TruthTableError::Parse(err) => Some(err),
            TruthTableError::Evaluation(err) => Some(err),
            TruthTableError::TooManyVariables { .. } => None,
            TruthTableError::Io(err) => Some(err),
        }
    }
}

impl From<ExpressionParseError> for TruthTableError {
    fn from(err: ExpressionParseError) -> Self {
        TruthTableError::Parse(err)
    }
}

impl From<EvaluationError> for TruthTableError {
    fn from(err: EvaluationError) -> Self {
        TruthTableError::Evaluation(err)
    }
}

// Flatten table errors so callers match on one level
impl From<TableError> for TruthTableError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::TooManyVariables { count, limit } => {
                TruthTableError::TooManyVariables { count, limit }
            }
            TableError::Evaluation(err) => TruthTableError::Evaluation(err),
        }
    }
}

impl From<io::Error> for TruthTableError {
    fn from(err: io::Error) -> Self {
        TruthTableError::Io(err)
    }
}

impl From<TruthTableError> for io::Error {
    fn from(err: TruthTableError) -> Self {
        match err {
            TruthTableError::Io(io_err) => io_err,
            TruthTableError::Parse(err) => err.into(),
            other => io::Error::new(io::ErrorKind::InvalidInput, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Expr, Symbol};
    use std::error::Error;

    #[test]
    fn test_table_error_is_flattened() {
        let err: TruthTableError = TableError::TooManyVariables {
            count: 17,
            limit: 16,
        }
        .into();
        assert!(matches!(
            err,
            TruthTableError::TooManyVariables {
                count: 17,
                limit: 16
            }
        ));
        assert!(err.to_string().contains("131072 rows"));

        let err: TruthTableError = TableError::Evaluation(EvaluationError::UnboundVariable {
            symbol: Symbol::new("X"),
        })
        .into();
        assert!(matches!(err, TruthTableError::Evaluation(_)));
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let err: TruthTableError = Expr::parse("A &").unwrap_err().into();
        assert!(err.source().is_some());
        assert!(err.to_string().contains("\"A &\""));
    }

    #[test]
    fn test_io_conversion_round_trip() {
        let original = io::Error::new(io::ErrorKind::NotFound, "missing.txt");
        let err: TruthTableError = original.into();
        assert!(matches!(err, TruthTableError::Io(_)));

        let back: io::Error = err.into();
        assert_eq!(back.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_parse_error_to_io_is_invalid_data() {
        let err: TruthTableError = Expr::parse("A + 1").unwrap_err().into();
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
