//! AST representation and tree traversal operations
//!
//! This module contains the expression tree types and the fold operation used to
//! analyse them.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A named boolean variable
///
/// Two symbols are the same variable exactly when their names are equal. Symbols order
/// lexicographically by name, which fixes the column order of a truth table.
///
/// Uses `Arc<str>` internally, so cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Create a symbol with the given name
    ///
    /// The name must satisfy [`Symbol::is_valid_name`], otherwise the rendered
    /// expression does not parse back to the same tree. Checked in debug builds.
    pub fn new(name: &str) -> Self {
        debug_assert!(
            Symbol::is_valid_name(name),
            "{:?} is not a valid symbol name",
            name
        );
        Symbol(Arc::from(name))
    }

    /// Check whether `name` reads back as a symbol in the expression syntax
    ///
    /// Valid names match `[A-Za-z_][A-Za-z0-9_]*` and are neither `True` nor `False`.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_table::Symbol;
    ///
    /// assert!(Symbol::is_valid_name("x_1"));
    /// assert!(!Symbol::is_valid_name("True"));
    /// assert!(!Symbol::is_valid_name("a b"));
    /// ```
    pub fn is_valid_name(name: &str) -> bool {
        let mut chars = name.chars();
        let head = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
        head && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            && name != "True"
            && name != "False"
    }

    /// The name of this symbol
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl From<Arc<str>> for Symbol {
    fn from(name: Arc<str>) -> Self {
        Symbol(name)
    }
}

/// A propositional logic expression
///
/// Expressions are immutable trees. `And`, `Or` and `Xor` are n-ary; a chain such as
/// `A & B & C` is held as a single node with three children.
///
/// # Examples
///
/// ```
/// use truth_table::Expr;
///
/// let a = Expr::symbol("A");
/// let b = Expr::symbol("B");
/// let c = Expr::symbol("C");
///
/// // A & (B | C)
/// let expr = a.and(&b.or(&c));
/// assert_eq!(expr, Expr::parse("A & (B | C)").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A named variable
    Symbol(Symbol),
    /// A constant value (`True` or `False`)
    Constant(bool),
    /// Logical NOT of an expression
    Not(Box<Expr>),
    /// Logical AND of all children
    And(Vec<Expr>),
    /// Logical OR of all children
    Or(Vec<Expr>),
    /// Material implication `premise >> conclusion`
    Implies(Box<Expr>, Box<Expr>),
    /// Exclusive OR of all children (true iff an odd number of children are true)
    Xor(Vec<Expr>),
}

/// Node type for expression tree folding
///
/// This enum represents one expression node with the already-folded results of its
/// children. It is used with [`Expr::fold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<'a, T> {
    /// A variable
    Symbol(&'a Symbol),
    /// A constant boolean value
    Constant(bool),
    /// Logical NOT with the result from its operand
    Not(T),
    /// Logical AND with results from every child
    And(Vec<T>),
    /// Logical OR with results from every child
    Or(Vec<T>),
    /// Implication with results from premise and conclusion
    Implies(T, T),
    /// Exclusive OR with results from every child
    Xor(Vec<T>),
}

impl Expr {
    /// Create a variable expression with the given name
    ///
    /// See [`Symbol::new`] for the accepted names.
    pub fn symbol(name: &str) -> Self {
        Expr::Symbol(Symbol::new(name))
    }

    /// Create a constant expression (true or false)
    pub fn constant(value: bool) -> Self {
        Expr::Constant(value)
    }

    /// Logical NOT
    pub fn not(&self) -> Self {
        Expr::Not(Box::new(self.clone()))
    }

    /// Logical AND, extending `self` when it already is an AND chain
    ///
    /// `a.and(&b).and(&c)` is the single node of `A & B & C`. Build
    /// `Expr::And` directly for the nesting of `(A & B) & C`.
    pub fn and(&self, other: &Expr) -> Self {
        match self {
            Expr::And(children) => {
                let mut children = children.clone();
                children.push(other.clone());
                Expr::And(children)
            }
            _ => Expr::And(vec![self.clone(), other.clone()]),
        }
    }

    /// Logical OR, extending `self` when it already is an OR chain
    pub fn or(&self, other: &Expr) -> Self {
        match self {
            Expr::Or(children) => {
                let mut children = children.clone();
                children.push(other.clone());
                Expr::Or(children)
            }
            _ => Expr::Or(vec![self.clone(), other.clone()]),
        }
    }

    /// Exclusive OR, extending `self` when it already is an XOR chain
    pub fn xor(&self, other: &Expr) -> Self {
        match self {
            Expr::Xor(children) => {
                let mut children = children.clone();
                children.push(other.clone());
                Expr::Xor(children)
            }
            _ => Expr::Xor(vec![self.clone(), other.clone()]),
        }
    }

    /// Material implication `self >> other`
    pub fn implies(&self, other: &Expr) -> Self {
        Expr::Implies(Box::new(self.clone()), Box::new(other.clone()))
    }

    /// Check whether this is a symbol or a negated symbol
    pub fn is_literal(&self) -> bool {
        match self {
            Expr::Symbol(_) => true,
            Expr::Not(inner) => matches!(inner.as_ref(), Expr::Symbol(_)),
            _ => false,
        }
    }

    /// Child expressions in left-to-right order
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Symbol(_) | Expr::Constant(_) => Vec::new(),
            Expr::Not(inner) => vec![inner.as_ref()],
            Expr::Implies(premise, conclusion) => vec![premise.as_ref(), conclusion.as_ref()],
            Expr::And(children) | Expr::Or(children) | Expr::Xor(children) => {
                children.iter().collect()
            }
        }
    }

    /// Fold the expression tree depth-first from leaves to root
    ///
    /// The function `f` is called once per node with an [`ExprNode`] carrying the
    /// results already computed for the node's children.
    ///
    /// # Examples
    ///
    /// Count the number of leaves in an expression:
    ///
    /// ```
    /// use truth_table::{Expr, ExprNode};
    ///
    /// let expr = Expr::parse("A & (B | ~A)").unwrap();
    ///
    /// let leaves = expr.fold(|node| match node {
    ///     ExprNode::Symbol(_) | ExprNode::Constant(_) => 1usize,
    ///     ExprNode::Not(inner) => inner,
    ///     ExprNode::Implies(l, r) => l + r,
    ///     ExprNode::And(children) | ExprNode::Or(children) | ExprNode::Xor(children) => {
    ///         children.into_iter().sum::<usize>()
    ///     }
    /// });
    ///
    /// assert_eq!(leaves, 3);
    /// ```
    pub fn fold<T, F>(&self, f: F) -> T
    where
        F: Fn(ExprNode<T>) -> T,
    {
        self.fold_impl(&f)
    }

    fn fold_impl<T, F>(&self, f: &F) -> T
    where
        F: Fn(ExprNode<T>) -> T,
    {
        match self {
            Expr::Symbol(symbol) => f(ExprNode::Symbol(symbol)),
            Expr::Constant(value) => f(ExprNode::Constant(*value)),
            Expr::Not(inner) => {
                let inner_result = inner.fold_impl(f);
                f(ExprNode::Not(inner_result))
            }
            Expr::And(children) => {
                let results = children.iter().map(|c| c.fold_impl(f)).collect();
                f(ExprNode::And(results))
            }
            Expr::Or(children) => {
                let results = children.iter().map(|c| c.fold_impl(f)).collect();
                f(ExprNode::Or(results))
            }
            Expr::Implies(premise, conclusion) => {
                let premise_result = premise.fold_impl(f);
                let conclusion_result = conclusion.fold_impl(f);
                f(ExprNode::Implies(premise_result, conclusion_result))
            }
            Expr::Xor(children) => {
                let results = children.iter().map(|c| c.fold_impl(f)).collect();
                f(ExprNode::Xor(results))
            }
        }
    }
}

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        Expr::Symbol(symbol)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::Constant(value)
    }
}
