//! Propositional logic expressions
//!
//! This module provides the expression tree and everything that works on it
//! directly: parsing, evaluation, rendering, normal-form conversion and
//! structural analysis.
//!
//! # Main Types
//!
//! - [`Expr`] - An immutable expression tree over named symbols. It can be built
//!   in three ways:
//!   1. Parsing: `Expr::parse("(P >> Q) & ~Q")`
//!   2. Method API and operators: `(&p >> &q) & !&q`
//!   3. The `expr!` macro: `expr!((p >> q) & !q)`
//!
//! - [`Symbol`] - A propositional variable, compared and sorted by name.
//!
//! # Syntax
//!
//! | ASCII | Unicode | Meaning | Precedence |
//! |-------|---------|---------|------------|
//! | `~`   | `¬`     | NOT     | highest    |
//! | `>>`  | `→`     | IMPLIES |            |
//! | `&`   | `∧`     | AND     |            |
//! | `^`   | `⊕`     | XOR     |            |
//! | `\|`  | `∨`     | OR      | lowest     |
//!
//! All binary operators are left-associative. `True` and `False` are constants,
//! any other identifier is a symbol. Arithmetic (`+`, `-`, `*`, `/`, numbers)
//! is recognised only to be rejected as [`ExpressionParseError::NotBoolean`].
//! Input nesting deeper than [`MAX_NESTING_DEPTH`] levels is rejected as
//! [`ExpressionParseError::TooDeep`].
//!
//! # Quick Start
//!
//! ```
//! use truth_table::{Expr, Notation};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let expr = Expr::parse("¬(A ∨ B) → C")?;
//!
//! println!("{}", expr);                          // ~(A | B) >> C
//! println!("{}", expr.render(Notation::Latex));  // \neg \left(A \vee B\right) \Rightarrow C
//! println!("{}", expr.to_cnf());                 // A | B | C
//!
//! assert_eq!(expr.count_operators(), 3);
//! # Ok(())
//! # }
//! ```

mod analysis;
mod ast;
mod display;
pub mod error;
mod eval;
mod normal_form;
mod operators;
mod parser;

pub use analysis::{ExprStats, NodeKind, TreeDescription, TreeNode};
pub use ast::{Expr, ExprNode, Symbol};
pub use display::Notation;
pub use error::{EvaluationError, ExpressionParseError};
pub use eval::Assignment;
pub use normal_form::NormalForm;
pub use parser::{normalize_symbols, MAX_NESTING_DEPTH, UNICODE_ALIASES};

#[cfg(test)]
mod tests;
