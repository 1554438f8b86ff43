//! Truth table generation
//!
//! A [`TruthTable`] lists the value of an expression under every assignment of its
//! variables. Columns are the variables sorted by name followed by the result;
//! rows follow binary counting over the columns with the first variable as the most
//! significant bit, `False` = 0 and `True` = 1.
//!
//! # Examples
//!
//! ```
//! use truth_table::{Expr, TruthTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let expr = Expr::parse("A & (B | C)")?;
//! let table = TruthTable::generate(&expr)?;
//!
//! assert_eq!(table.columns(), vec!["A", "B", "C", "Result"]);
//! assert_eq!(table.num_rows(), 8);
//!
//! // Row 5 is A=True, B=False, C=True
//! let row = table.row(5).unwrap();
//! assert_eq!(row.values(), &[true, false, true]);
//! assert!(row.result());
//! # Ok(())
//! # }
//! ```

pub mod error;
mod writer;

pub use error::TableError;
pub use writer::TableFormat;

use crate::expression::{Assignment, Expr, Symbol};
use crate::TableConfig;
use log::{debug, trace};

/// Header of the result column
pub const RESULT_COLUMN: &str = "Result";

/// Largest variable count whose rows can be indexed by `usize`
pub const MAX_SUPPORTED_VARIABLES: usize = (usize::BITS - 1) as usize;

/// One row of a truth table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TruthRow {
    values: Vec<bool>,
    result: bool,
}

impl TruthRow {
    /// Variable values, in column order
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Value of the expression for this row
    pub fn result(&self) -> bool {
        self.result
    }
}

/// The complete truth table of an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<Symbol>,
    rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Generate the truth table of an expression with the default [`TableConfig`]
    ///
    /// # Errors
    ///
    /// [`TableError::TooManyVariables`] if the expression has more variables than the
    /// configured limit; evaluation errors are propagated unchanged.
    pub fn generate(expr: &Expr) -> Result<Self, TableError> {
        Self::generate_with_config(expr, &TableConfig::default())
    }

    /// Generate the truth table of an expression with a custom configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_table::{Expr, TableConfig, TableError, TruthTable};
    ///
    /// let expr = Expr::parse("A & B & C").unwrap();
    /// let config = TableConfig { max_variables: 2 };
    ///
    /// let err = TruthTable::generate_with_config(&expr, &config).unwrap_err();
    /// assert_eq!(err, TableError::TooManyVariables { count: 3, limit: 2 });
    /// ```
    pub fn generate_with_config(expr: &Expr, config: &TableConfig) -> Result<Self, TableError> {
        let variables: Vec<Symbol> = expr.variables().into_iter().collect();
        let assignments = Assignments::with_config(&variables, config)?;
        debug!(
            "generating {} rows for {} variables of {}",
            assignments.len(),
            variables.len(),
            expr
        );

        let mut rows = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            let result = expr.evaluate(&assignment)?;
            // BTreeMap iteration follows the sorted variable order
            let values: Vec<bool> = assignment.values().copied().collect();
            trace!("{:?} -> {}", values, result);
            rows.push(TruthRow { values, result });
        }

        Ok(TruthTable { variables, rows })
    }

    /// The variables, sorted by name (column order)
    pub fn variables(&self) -> &[Symbol] {
        &self.variables
    }

    /// Column headers: the variable names followed by `"Result"`
    pub fn columns(&self) -> Vec<String> {
        self.variables
            .iter()
            .map(|v| v.to_string())
            .chain(std::iter::once(RESULT_COLUMN.to_string()))
            .collect()
    }

    /// Number of rows (`2^variables`)
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (`variables + 1`)
    pub fn num_columns(&self) -> usize {
        self.variables.len() + 1
    }

    /// All rows in canonical order
    pub fn rows(&self) -> &[TruthRow] {
        &self.rows
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Option<&TruthRow> {
        self.rows.get(index)
    }

    /// The assignment a row was evaluated under
    pub fn assignment(&self, index: usize) -> Option<Assignment> {
        self.rows.get(index).map(|row| {
            self.variables
                .iter()
                .cloned()
                .zip(row.values.iter().copied())
                .collect()
        })
    }

    /// The result column
    pub fn results(&self) -> Vec<bool> {
        self.rows.iter().map(|r| r.result).collect()
    }

    /// Indices of the rows where the expression is true
    ///
    /// Because rows follow binary counting, each index is also the minterm number.
    pub fn minterms(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.result)
            .map(|(i, _)| i)
            .collect()
    }

    /// Assignments under which the expression is true
    pub fn satisfying_assignments(&self) -> Vec<Assignment> {
        self.minterms()
            .into_iter()
            .filter_map(|i| self.assignment(i))
            .collect()
    }

    /// True in every row
    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|r| r.result)
    }

    /// False in every row
    pub fn is_contradiction(&self) -> bool {
        !self.is_satisfiable()
    }

    /// True in at least one row
    pub fn is_satisfiable(&self) -> bool {
        self.rows.iter().any(|r| r.result)
    }
}

/// Generate the truth table of an expression with the default configuration
pub fn generate_table(expr: &Expr) -> Result<TruthTable, TableError> {
    TruthTable::generate(expr)
}

/// Iterator over every assignment of a sorted variable list, in canonical order
///
/// Counts from `0` to `2^n - 1`; the first variable is the most significant bit.
///
/// # Examples
///
/// ```
/// use truth_table::{Assignments, Symbol, TableConfig};
///
/// let vars = [Symbol::new("A"), Symbol::new("B")];
/// let order: Vec<(bool, bool)> = Assignments::with_config(&vars, &TableConfig::default())
///     .unwrap()
///     .map(|a| (a["A"], a["B"]))
///     .collect();
///
/// assert_eq!(
///     order,
///     vec![(false, false), (false, true), (true, false), (true, true)]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Assignments<'a> {
    variables: &'a [Symbol],
    next: usize,
    end: usize,
}

impl<'a> Assignments<'a> {
    /// Start enumerating, failing fast if there are more variables than allowed
    pub fn with_config(variables: &'a [Symbol], config: &TableConfig) -> Result<Self, TableError> {
        let limit = config.max_variables.min(MAX_SUPPORTED_VARIABLES);
        if variables.len() > limit {
            debug!(
                "refusing to enumerate {} variables (limit {})",
                variables.len(),
                limit
            );
            return Err(TableError::TooManyVariables {
                count: variables.len(),
                limit,
            });
        }
        Ok(Assignments {
            variables,
            next: 0,
            end: 1usize << variables.len(),
        })
    }
}

impl Iterator for Assignments<'_> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let width = self.variables.len();
        let assignment = self
            .variables
            .iter()
            .enumerate()
            .map(|(position, var)| {
                let bit = width - 1 - position;
                (var.clone(), (index >> bit) & 1 == 1)
            })
            .collect();
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments<'_> {}
