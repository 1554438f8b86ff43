//! Error types for parsing and evaluating expressions

use super::Symbol;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to boolean expression parsing
///
/// These errors occur when turning input text into an [`Expr`](super::Expr) fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionParseError {
    /// Failed to parse an expression due to invalid syntax
    InvalidSyntax {
        /// The error message from the parser
        message: Arc<str>,
        /// The original input string that failed to parse
        input: Arc<str>,
        /// Optional byte position in the normalised input where the error occurred
        position: Option<usize>,
    },
    /// The input is well-formed but does not denote a boolean value (e.g. `A + 1`)
    NotBoolean {
        /// The original input string
        input: Arc<str>,
        /// The non-boolean sub-expression that was rejected
        fragment: Arc<str>,
    },
    /// The input nests parentheses or operators deeper than the parser accepts
    ///
    /// See [`MAX_NESTING_DEPTH`](super::MAX_NESTING_DEPTH).
    TooDeep {
        /// The original input string
        input: Arc<str>,
        /// The deepest nesting that is accepted
        limit: usize,
    },
}

impl fmt::Display for ExpressionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionParseError::InvalidSyntax {
                message,
                input,
                position,
            } => {
                if let Some(pos) = position {
                    write!(
                        f,
                        "Failed to parse logical expression at position {}: {}. Input: {:?}",
                        pos, message, input
                    )
                } else {
                    write!(
                        f,
                        "Failed to parse logical expression: {}. Input: {:?}",
                        message, input
                    )
                }
            }
            ExpressionParseError::NotBoolean { input, fragment } => write!(
                f,
                "Not a valid boolean expression: `{}` is not boolean-valued. Input: {:?}",
                fragment, input
            ),
            ExpressionParseError::TooDeep { input, limit } => write!(
                f,
                "Expression nests deeper than {} levels. Input: {:?}",
                limit, input
            ),
        }
    }
}

impl std::error::Error for ExpressionParseError {}

impl From<ExpressionParseError> for io::Error {
    fn from(err: ExpressionParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur when evaluating an expression under an assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// The assignment has no value for a variable of the expression
    UnboundVariable {
        /// The variable without a value
        symbol: Symbol,
    },
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::UnboundVariable { symbol } => {
                write!(f, "No value assigned to variable '{}'", symbol)
            }
        }
    }
}

impl std::error::Error for EvaluationError {}

impl From<EvaluationError> for io::Error {
    fn from(err: EvaluationError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
