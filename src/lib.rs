//! # Truth Table
//!
//! This crate parses propositional logic formulas, evaluates them under every
//! assignment of their variables and reports the resulting truth table. It also
//! converts formulas to negation, conjunctive and disjunctive normal form and
//! describes their structure for rendering.
//!
//! ## Overview
//!
//! A formula goes through a short pipeline:
//!
//! 1. **Parse** text (ASCII `& | ~ >> ^` or Unicode `∧ ∨ ¬ → ⊕`) into an [`Expr`]
//! 2. **Collect** its variables, sorted by name
//! 3. **Enumerate** all `2^n` assignments in binary counting order
//! 4. **Evaluate** the formula for each one into a [`TruthTable`]
//!
//! ```
//! use truth_table::{truth_table, TableFormat};
//!
//! # fn main() -> Result<(), truth_table::TruthTableError> {
//! let table = truth_table("(P → Q) ∧ ¬Q")?;
//!
//! assert_eq!(table.columns(), vec!["P", "Q", "Result"]);
//! assert_eq!(table.results(), vec![true, false, false, false]);
//!
//! print!("{}", table.to_table_string(TableFormat::Markdown)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Building Expressions
//!
//! Expressions can be parsed, built with methods and operators, or written with
//! the [`expr!`] macro:
//!
//! ```
//! use truth_table::{expr, Expr};
//!
//! let p = Expr::symbol("P");
//! let q = Expr::symbol("Q");
//!
//! let parsed = Expr::parse("(P >> Q) & ~Q").unwrap();
//! let built = (&p >> &q) & !&q;
//! let with_macro = expr!((p >> q) & !q);
//!
//! assert_eq!(parsed, built);
//! assert_eq!(parsed, with_macro);
//! ```
//!
//! ## Normal Forms and Structure
//!
//! ```
//! use truth_table::{Expr, NormalForm};
//!
//! let expr = Expr::parse("A ^ B").unwrap();
//!
//! assert_eq!(expr.to_normal_form(NormalForm::Disjunctive).to_string(), "~A & B | A & ~B");
//! assert_eq!(expr.to_cnf().to_string(), "(~A | ~B) & (A | B)");
//! assert_eq!(expr.count_operators(), 1);
//! assert_eq!(expr.build_tree().len(), 3);
//! ```
//!
//! ## Limits
//!
//! A table has `2^n` rows, so generation refuses expressions with more variables
//! than [`TableConfig::max_variables`] before enumerating anything.

pub mod error;
pub mod expression;
pub mod table;

pub use error::TruthTableError;
pub use expression::{
    normalize_symbols, Assignment, EvaluationError, Expr, ExprNode, ExprStats,
    ExpressionParseError, NodeKind, NormalForm, Notation, Symbol, TreeDescription, TreeNode,
    MAX_NESTING_DEPTH,
};
pub use table::{generate_table, Assignments, TableError, TableFormat, TruthRow, TruthTable};

/// Build an [`Expr`] with Rust syntax
///
/// Identifiers refer to existing `Expr` values (cloned), string literals become
/// symbols and `true`/`false` become constants. Operators and precedence follow
/// the parser: `!`/`~` (NOT), `>>` (IMPLIES), `&` (AND), `^` (XOR), `|` (OR).
///
/// ```
/// use truth_table::{expr, Expr};
///
/// let a = Expr::symbol("A");
/// assert_eq!(expr!(a & !"B" | false), Expr::parse("A & ~B | False").unwrap());
/// ```
pub use truth_table_macros::expr;

/// Default limit on the number of variables in a generated table
pub const DEFAULT_MAX_VARIABLES: usize = 16;

/// Configuration for truth table generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Largest number of distinct variables a table may have
    ///
    /// Tables with more variables fail with [`TableError::TooManyVariables`].
    /// Values above what `usize` row indexing supports are capped.
    ///
    /// **Default:** 16 (65536 rows)
    pub max_variables: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            max_variables: DEFAULT_MAX_VARIABLES,
        }
    }
}

impl TableConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the variable limit
    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables;
        self
    }
}

/// Parse a formula
///
/// Shorthand for [`Expr::parse`].
pub fn parse(input: &str) -> Result<Expr, ExpressionParseError> {
    Expr::parse(input)
}

/// Parse a formula and generate its truth table with the default configuration
pub fn truth_table(input: &str) -> Result<TruthTable, TruthTableError> {
    truth_table_with_config(input, &TableConfig::default())
}

/// Parse a formula and generate its truth table
pub fn truth_table_with_config(
    input: &str,
    config: &TableConfig,
) -> Result<TruthTable, TruthTableError> {
    let expr = Expr::parse(input)?;
    Ok(TruthTable::generate_with_config(&expr, config)?)
}
