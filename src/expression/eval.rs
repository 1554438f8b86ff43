//! Evaluation and equivalence checking for expressions

use super::error::EvaluationError;
use super::{Expr, Symbol};
use crate::table::{Assignments, TableError};
use crate::TableConfig;
use std::collections::{BTreeMap, BTreeSet};

/// A mapping from variables to truth values
///
/// A `BTreeMap` keeps assignments ordered by variable name, matching the column order
/// of a truth table. Because [`Symbol`] borrows as `str`, lookups by name work directly.
pub type Assignment = BTreeMap<Symbol, bool>;

impl Expr {
    /// Collect the free variables of this expression, sorted by name
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_table::Expr;
    ///
    /// let expr = Expr::parse("C & (A | ~B) & A").unwrap();
    /// let names: Vec<String> = expr.variables().iter().map(|s| s.to_string()).collect();
    /// assert_eq!(names, vec!["A", "B", "C"]);
    /// ```
    pub fn variables(&self) -> BTreeSet<Symbol> {
        let mut vars = BTreeSet::new();
        self.collect_into(&mut vars);
        vars
    }

    fn collect_into(&self, vars: &mut BTreeSet<Symbol>) {
        match self {
            Expr::Symbol(symbol) => {
                vars.insert(symbol.clone());
            }
            Expr::Constant(_) => {}
            _ => {
                for child in self.children() {
                    child.collect_into(vars);
                }
            }
        }
    }

    /// Evaluate the expression with a given variable assignment
    ///
    /// Every child is evaluated (no short-circuiting), so a missing variable is
    /// reported no matter where it occurs. Variables in the assignment that do not
    /// occur in the expression are ignored.
    ///
    /// # Errors
    ///
    /// [`EvaluationError::UnboundVariable`] if a variable of the expression has no value.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_table::{Assignment, Expr, Symbol};
    ///
    /// let expr = Expr::parse("(P >> Q) & ~Q").unwrap();
    ///
    /// let mut assignment = Assignment::new();
    /// assignment.insert(Symbol::new("P"), false);
    /// assignment.insert(Symbol::new("Q"), false);
    /// assert_eq!(expr.evaluate(&assignment), Ok(true));
    ///
    /// assignment.insert(Symbol::new("P"), true);
    /// assert_eq!(expr.evaluate(&assignment), Ok(false));
    /// ```
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvaluationError> {
        match self {
            Expr::Symbol(symbol) => assignment.get(symbol).copied().ok_or_else(|| {
                EvaluationError::UnboundVariable {
                    symbol: symbol.clone(),
                }
            }),
            Expr::Constant(value) => Ok(*value),
            Expr::Not(inner) => Ok(!inner.evaluate(assignment)?),
            Expr::And(children) => {
                let values = evaluate_all(children, assignment)?;
                Ok(values.iter().all(|&v| v))
            }
            Expr::Or(children) => {
                let values = evaluate_all(children, assignment)?;
                Ok(values.iter().any(|&v| v))
            }
            Expr::Implies(premise, conclusion) => {
                let p = premise.evaluate(assignment)?;
                let c = conclusion.evaluate(assignment)?;
                Ok(!p || c)
            }
            Expr::Xor(children) => {
                let values = evaluate_all(children, assignment)?;
                Ok(values.iter().filter(|&&v| v).count() % 2 == 1)
            }
        }
    }

    /// Check if two expressions are logically equivalent
    ///
    /// Compares both expressions under every assignment of the union of their
    /// variables, so the cost is exponential in the number of distinct variables.
    /// The default [`TableConfig`] limit applies to that union.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_table::Expr;
    ///
    /// let implication = Expr::parse("P >> Q").unwrap();
    /// let disjunction = Expr::parse("~P | Q").unwrap();
    /// assert!(implication.equivalent_to(&disjunction).unwrap());
    /// ```
    pub fn equivalent_to(&self, other: &Expr) -> Result<bool, TableError> {
        let mut vars = self.variables();
        vars.extend(other.variables());
        let vars: Vec<Symbol> = vars.into_iter().collect();

        let assignments = Assignments::with_config(&vars, &TableConfig::default())?;
        for assignment in assignments {
            if self.evaluate(&assignment)? != other.evaluate(&assignment)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn evaluate_all(children: &[Expr], assignment: &Assignment) -> Result<Vec<bool>, EvaluationError> {
    children.iter().map(|c| c.evaluate(assignment)).collect()
}
