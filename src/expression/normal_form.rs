//! Negation, conjunctive and disjunctive normal forms
//!
//! NNF is produced by pushing negations down to the variables with De Morgan's laws,
//! after eliminating implications and exclusive ORs. CNF and DNF are computed from the
//! NNF by distribution into sets of clauses or cubes.
//!
//! Clauses and cubes are represented as maps from variable to polarity:
//! - `true` means the variable appears positively (e.g., `A`)
//! - `false` means the variable appears negatively (e.g., `~A`)
//!
//! Distribution can grow exponentially with the input; no minimisation beyond
//! removing tautological, duplicate and subsumed terms is attempted.

use super::{Expr, Symbol};
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet};

/// A conjunction (cube) or disjunction (clause) of literals
type Term = BTreeMap<Symbol, bool>;

/// The normal forms an expression can be converted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalForm {
    /// Negation Normal Form: negations only directly above variables
    Negation,
    /// Conjunctive Normal Form: an AND of ORs of literals
    Conjunctive,
    /// Disjunctive Normal Form: an OR of ANDs of literals
    Disjunctive,
}

impl Expr {
    /// Convert to the requested normal form
    pub fn to_normal_form(&self, form: NormalForm) -> Expr {
        match form {
            NormalForm::Negation => self.to_nnf(),
            NormalForm::Conjunctive => self.to_cnf(),
            NormalForm::Disjunctive => self.to_dnf(),
        }
    }

    /// Check whether this expression has the shape of the given normal form
    pub fn is_normal_form(&self, form: NormalForm) -> bool {
        match form {
            NormalForm::Negation => self.is_nnf(),
            NormalForm::Conjunctive => self.is_cnf(),
            NormalForm::Disjunctive => self.is_dnf(),
        }
    }

    /// Convert to Negation Normal Form
    ///
    /// Implications and exclusive ORs are expanded, negations are pushed down to the
    /// variables, nested ANDs/ORs are flattened and constants are absorbed. The result
    /// is a fixed point: converting it again returns an equal expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_table::Expr;
    ///
    /// let expr = Expr::parse("~(A | B) >> C").unwrap();
    /// assert_eq!(expr.to_nnf().to_string(), "A | B | C");
    /// ```
    pub fn to_nnf(&self) -> Expr {
        let nnf = nnf(self, false);
        trace!("to_nnf({}) = {}", self, nnf);
        nnf
    }

    /// Convert to Conjunctive Normal Form
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_table::Expr;
    ///
    /// let expr = Expr::parse("A | (B & C)").unwrap();
    /// let cnf = expr.to_cnf();
    /// assert!(cnf.is_cnf());
    /// assert_eq!(cnf.to_string(), "(A | B) & (A | C)");
    /// assert!(cnf.equivalent_to(&expr).unwrap());
    /// ```
    pub fn to_cnf(&self) -> Expr {
        let clauses = distribute(&self.to_nnf(), Shape::Conjunctive);
        debug!("to_cnf: {} clauses", clauses.len());
        build(clauses, Shape::Conjunctive)
    }

    /// Convert to Disjunctive Normal Form
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_table::Expr;
    ///
    /// let expr = Expr::parse("A ^ B").unwrap();
    /// let dnf = expr.to_dnf();
    /// assert!(dnf.is_dnf());
    /// assert_eq!(dnf.to_string(), "~A & B | A & ~B");
    /// ```
    pub fn to_dnf(&self) -> Expr {
        let cubes = distribute(&self.to_nnf(), Shape::Disjunctive);
        debug!("to_dnf: {} cubes", cubes.len());
        build(cubes, Shape::Disjunctive)
    }

    /// Check for Negation Normal Form: only AND, OR, constants and literals
    pub fn is_nnf(&self) -> bool {
        match self {
            Expr::Symbol(_) | Expr::Constant(_) => true,
            Expr::Not(inner) => matches!(inner.as_ref(), Expr::Symbol(_)),
            Expr::And(children) | Expr::Or(children) => children.iter().all(Expr::is_nnf),
            Expr::Implies(..) | Expr::Xor(_) => false,
        }
    }

    /// Check for Conjunctive Normal Form: an AND of clauses, each an OR of literals
    pub fn is_cnf(&self) -> bool {
        match self {
            Expr::Constant(_) => true,
            Expr::And(clauses) => clauses.iter().all(|c| is_flat(c, Shape::Conjunctive)),
            other => is_flat(other, Shape::Conjunctive),
        }
    }

    /// Check for Disjunctive Normal Form: an OR of cubes, each an AND of literals
    pub fn is_dnf(&self) -> bool {
        match self {
            Expr::Constant(_) => true,
            Expr::Or(cubes) => cubes.iter().all(|c| is_flat(c, Shape::Disjunctive)),
            other => is_flat(other, Shape::Disjunctive),
        }
    }
}

/// Which two-level shape is being built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// Outer AND, inner OR
    Conjunctive,
    /// Outer OR, inner AND
    Disjunctive,
}

/// A literal, or an inner-level node of literals
fn is_flat(expr: &Expr, shape: Shape) -> bool {
    match (expr, shape) {
        (Expr::Or(literals), Shape::Conjunctive) | (Expr::And(literals), Shape::Disjunctive) => {
            literals.iter().all(Expr::is_literal)
        }
        (other, _) => other.is_literal(),
    }
}

fn negate_if(expr: Expr, negate: bool) -> Expr {
    if negate {
        Expr::Not(Box::new(expr))
    } else {
        expr
    }
}

/// Push a pending negation down through `expr`
fn nnf(expr: &Expr, negate: bool) -> Expr {
    match expr {
        Expr::Symbol(_) => negate_if(expr.clone(), negate),
        Expr::Constant(value) => Expr::Constant(*value != negate),
        Expr::Not(inner) => nnf(inner, !negate),
        // De Morgan: ~(A & B) = ~A | ~B
        Expr::And(children) => {
            let parts = children.iter().map(|c| nnf(c, negate)).collect();
            if negate {
                or_of(parts)
            } else {
                and_of(parts)
            }
        }
        // De Morgan: ~(A | B) = ~A & ~B
        Expr::Or(children) => {
            let parts = children.iter().map(|c| nnf(c, negate)).collect();
            if negate {
                and_of(parts)
            } else {
                or_of(parts)
            }
        }
        // A >> B = ~A | B, ~(A >> B) = A & ~B
        Expr::Implies(premise, conclusion) => {
            if negate {
                and_of(vec![nnf(premise, false), nnf(conclusion, true)])
            } else {
                or_of(vec![nnf(premise, true), nnf(conclusion, false)])
            }
        }
        Expr::Xor(children) => nnf_xor(children, negate),
    }
}

/// Expand `children[0] ^ (children[1] ^ ...)`, negated when `negate` is set
fn nnf_xor(children: &[Expr], negate: bool) -> Expr {
    match children {
        [] => Expr::Constant(negate),
        [only] => nnf(only, negate),
        [head, rest @ ..] => {
            // H ^ R = H & ~R | ~H & R, ~(H ^ R) = H & R | ~H & ~R
            let with_head = and_of(vec![nnf(head, false), nnf_xor(rest, !negate)]);
            let without_head = and_of(vec![nnf(head, true), nnf_xor(rest, negate)]);
            or_of(vec![with_head, without_head])
        }
    }
}

/// Flattening AND with constant absorption
fn and_of(parts: Vec<Expr>) -> Expr {
    let mut children = Vec::new();
    for part in parts {
        match part {
            Expr::Constant(true) => {}
            Expr::Constant(false) => return Expr::Constant(false),
            Expr::And(inner) => children.extend(inner),
            other => children.push(other),
        }
    }
    match children.len() {
        0 => Expr::Constant(true),
        1 => children.remove(0),
        _ => Expr::And(children),
    }
}

/// Flattening OR with constant absorption
fn or_of(parts: Vec<Expr>) -> Expr {
    let mut children = Vec::new();
    for part in parts {
        match part {
            Expr::Constant(false) => {}
            Expr::Constant(true) => return Expr::Constant(true),
            Expr::Or(inner) => children.extend(inner),
            other => children.push(other),
        }
    }
    match children.len() {
        0 => Expr::Constant(false),
        1 => children.remove(0),
        _ => Expr::Or(children),
    }
}

/// Compute the clauses (CNF) or cubes (DNF) of an NNF expression
///
/// The outer operator of the shape unions term sets; the inner operator takes the
/// cross product. An empty set is the outer identity (`True` for CNF, `False` for
/// DNF); a set holding the empty term is the opposite constant.
fn distribute(nnf: &Expr, shape: Shape) -> Vec<Term> {
    match nnf {
        Expr::Symbol(symbol) => vec![Term::from([(symbol.clone(), true)])],
        Expr::Not(inner) => match inner.as_ref() {
            Expr::Symbol(symbol) => vec![Term::from([(symbol.clone(), false)])],
            other => unreachable!("NNF negation above non-variable: {}", other),
        },
        Expr::Constant(value) => {
            // True is the empty CNF and the empty DNF cube; False the reverse
            let is_identity = *value == (shape == Shape::Conjunctive);
            if is_identity {
                Vec::new()
            } else {
                vec![Term::new()]
            }
        }
        Expr::And(children) | Expr::Or(children) => {
            let outer = matches!(
                (nnf, shape),
                (Expr::And(_), Shape::Conjunctive) | (Expr::Or(_), Shape::Disjunctive)
            );
            let child_terms = children.iter().map(|c| distribute(c, shape));
            if outer {
                simplify(child_terms.flatten().collect())
            } else {
                child_terms.fold(vec![Term::new()], |acc, terms| cross(&acc, &terms))
            }
        }
        Expr::Implies(..) | Expr::Xor(_) => {
            unreachable!("implication or XOR left in NNF: {}", nnf)
        }
    }
}

/// Cross product of two term sets, dropping terms with complementary literals
fn cross(left: &[Term], right: &[Term]) -> Vec<Term> {
    let mut result = Vec::with_capacity(left.len() * right.len());
    for l in left {
        'pairs: for r in right {
            let mut merged = l.clone();
            for (symbol, &polarity) in r {
                match merged.insert(symbol.clone(), polarity) {
                    Some(existing) if existing != polarity => continue 'pairs,
                    _ => {}
                }
            }
            result.push(merged);
        }
    }
    simplify(result)
}

/// Remove duplicate terms and terms subsumed by a smaller one
fn simplify(terms: Vec<Term>) -> Vec<Term> {
    let unique: BTreeSet<Term> = terms.into_iter().collect();
    let mut sorted: Vec<Term> = unique.into_iter().collect();
    sorted.sort_by_key(|t| t.len());

    let mut kept: Vec<Term> = Vec::with_capacity(sorted.len());
    for term in sorted {
        let subsumed = kept
            .iter()
            .any(|k| k.iter().all(|(s, p)| term.get(s) == Some(p)));
        if !subsumed {
            kept.push(term);
        }
    }
    // Deterministic output order: by the literals themselves
    kept.sort();
    kept
}

/// Build the two-level expression for a term set
fn build(terms: Vec<Term>, shape: Shape) -> Expr {
    let (outer_empty, inner_empty) = match shape {
        Shape::Conjunctive => (true, false),
        Shape::Disjunctive => (false, true),
    };
    if terms.is_empty() {
        return Expr::Constant(outer_empty);
    }
    if terms.iter().any(|t| t.is_empty()) {
        return Expr::Constant(inner_empty);
    }

    let mut parts: Vec<Expr> = terms
        .into_iter()
        .map(|term| {
            let mut literals: Vec<Expr> = term
                .into_iter()
                .map(|(symbol, polarity)| negate_if(Expr::Symbol(symbol), !polarity))
                .collect();
            match (literals.len(), shape) {
                (1, _) => literals.remove(0),
                (_, Shape::Conjunctive) => Expr::Or(literals),
                (_, Shape::Disjunctive) => Expr::And(literals),
            }
        })
        .collect();

    match (parts.len(), shape) {
        (1, _) => parts.remove(0),
        (_, Shape::Conjunctive) => Expr::And(parts),
        (_, Shape::Disjunctive) => Expr::Or(parts),
    }
}
