//! Parsing support for logical expressions

use super::error::ExpressionParseError;
use super::Expr;
use lalrpop_util::ParseError;
use log::{debug, trace};
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/expression/bool_expr.rs"));
}

/// Deepest nesting of parentheses and operators accepted by [`Expr::parse`]
///
/// Every parenthesised group, negation and operator node counts as one level;
/// a chain of the same operator such as `A & B & C` counts once. Deeper input
/// fails with [`ExpressionParseError::TooDeep`] instead of exhausting the stack
/// in the recursive passes over the tree.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Unicode glyphs accepted as aliases of the ASCII operators
pub const UNICODE_ALIASES: [(char, &str); 5] = [
    ('∧', "&"),
    ('∨', "|"),
    ('¬', "~"),
    ('→', ">>"),
    ('⊕', "^"),
];

/// Syntax tree produced by the grammar, before the boolean type check
///
/// Arithmetic is parsed so that it can be reported as a type error; it is collapsed
/// to [`RawExpr::NonBoolean`] with its byte span in the normalised input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawExpr {
    Symbol(Arc<str>),
    Constant(bool),
    Not(Box<RawExpr>),
    And(Box<RawExpr>, Box<RawExpr>),
    Or(Box<RawExpr>, Box<RawExpr>),
    Xor(Box<RawExpr>, Box<RawExpr>),
    Implies(Box<RawExpr>, Box<RawExpr>),
    Group(Box<RawExpr>),
    NonBoolean(usize, usize),
}

impl RawExpr {
    /// Move the boxed children out, leaving leaves behind
    fn take_children(&mut self, out: &mut Vec<RawExpr>) {
        let mut take = |child: &mut Box<RawExpr>| {
            out.push(std::mem::replace(child.as_mut(), RawExpr::Constant(false)))
        };
        match self {
            RawExpr::Not(inner) | RawExpr::Group(inner) => take(inner),
            RawExpr::And(l, r)
            | RawExpr::Or(l, r)
            | RawExpr::Xor(l, r)
            | RawExpr::Implies(l, r) => {
                take(l);
                take(r);
            }
            RawExpr::Symbol(_) | RawExpr::Constant(_) | RawExpr::NonBoolean(..) => {}
        }
    }

    /// Nesting depth as it will be after lowering, computed without recursion
    fn nesting_depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            match node {
                RawExpr::Not(inner) | RawExpr::Group(inner) => {
                    stack.push((&**inner, depth + 1));
                }
                RawExpr::Implies(l, r) => {
                    stack.push((&**l, depth + 1));
                    stack.push((&**r, depth + 1));
                }
                RawExpr::And(l, r) | RawExpr::Or(l, r) | RawExpr::Xor(l, r) => {
                    // An ungrouped left operand of the same operator joins this node
                    let left_depth = if chain_op(l) == chain_op(node) {
                        depth
                    } else {
                        depth + 1
                    };
                    stack.push((&**l, left_depth));
                    stack.push((&**r, depth + 1));
                }
                RawExpr::Symbol(_) | RawExpr::Constant(_) | RawExpr::NonBoolean(..) => {}
            }
        }
        deepest
    }
}

impl Drop for RawExpr {
    // Iterative: a rejected deep tree must not be dropped recursively
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChainOp {
    And,
    Or,
    Xor,
}

fn chain_op(raw: &RawExpr) -> Option<ChainOp> {
    match raw {
        RawExpr::And(..) => Some(ChainOp::And),
        RawExpr::Or(..) => Some(ChainOp::Or),
        RawExpr::Xor(..) => Some(ChainOp::Xor),
        _ => None,
    }
}

/// Replace the Unicode logic glyphs with their ASCII operators
///
/// `∧`→`&`, `∨`→`|`, `¬`→`~`, `→`→`>>`, `⊕`→`^`. The substitution is purely
/// textual; every other character is kept.
///
/// # Examples
///
/// ```
/// use truth_table::normalize_symbols;
///
/// assert_eq!(normalize_symbols("(P → Q) ∧ ¬Q"), "(P >> Q) & ~Q");
/// ```
pub fn normalize_symbols(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match UNICODE_ALIASES.iter().find(|(glyph, _)| *glyph == c) {
            Some((_, ascii)) => out.push_str(ascii),
            None => out.push(c),
        }
    }
    out
}

impl Expr {
    /// Parse a logical expression from a string
    ///
    /// Supports these operators, from lowest to highest precedence:
    /// - `|` or `∨` for OR
    /// - `^` or `⊕` for XOR
    /// - `&` or `∧` for AND
    /// - `>>` or `→` for IMPLIES
    /// - `~` or `¬` for NOT
    /// - Parentheses for grouping
    /// - Constants: `True`, `False`
    ///
    /// Parsing keeps the structure of the input: nothing is simplified, and only
    /// chains of the same operator (`A & B & C`) are merged into one node.
    ///
    /// # Errors
    ///
    /// [`ExpressionParseError::InvalidSyntax`] for malformed input such as `A +`, and
    /// [`ExpressionParseError::NotBoolean`] for well-formed input that is not
    /// boolean-valued, such as `A + 1`, and [`ExpressionParseError::TooDeep`] when
    /// the input nests deeper than [`MAX_NESTING_DEPTH`].
    pub fn parse(input: &str) -> Result<Self, ExpressionParseError> {
        let normalized = normalize_symbols(input);
        trace!("parse({:?}) normalised to {:?}", input, normalized);

        let raw = parser_impl::ExprParser::new()
            .parse(&normalized)
            .map_err(|e| {
                let position = error_position(&e);
                debug!("syntax error in {:?}: {}", input, e);
                ExpressionParseError::InvalidSyntax {
                    message: Arc::from(e.to_string().as_str()),
                    input: Arc::from(input),
                    position,
                }
            })?;

        let depth = raw.nesting_depth();
        if depth > MAX_NESTING_DEPTH {
            debug!(
                "rejecting {:?}: nesting depth {} exceeds {}",
                input, depth, MAX_NESTING_DEPTH
            );
            return Err(ExpressionParseError::TooDeep {
                input: Arc::from(input),
                limit: MAX_NESTING_DEPTH,
            });
        }

        lower(&raw).map_err(|(lo, hi)| {
            let fragment = normalized.get(lo..hi).unwrap_or(normalized.as_str());
            debug!("non-boolean fragment {:?} in {:?}", fragment, input);
            ExpressionParseError::NotBoolean {
                input: Arc::from(input),
                fragment: Arc::from(fragment.trim()),
            }
        })
    }
}

impl std::str::FromStr for Expr {
    type Err = ExpressionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expr::parse(s)
    }
}

/// Byte offset at which the parser gave up, when the error carries one
fn error_position<T, E>(error: &ParseError<usize, T, E>) -> Option<usize> {
    match error {
        ParseError::InvalidToken { location } => Some(*location),
        ParseError::UnrecognizedEof { location, .. } => Some(*location),
        ParseError::UnrecognizedToken {
            token: (start, _, _),
            ..
        } => Some(*start),
        ParseError::ExtraToken {
            token: (start, _, _),
        } => Some(*start),
        ParseError::User { .. } => None,
    }
}

/// Boolean type check: convert the raw tree into an [`Expr`]
///
/// Fails with the span of the leftmost non-boolean node. Recursion follows the
/// nesting depth; same-operator chains are walked in a loop.
fn lower(raw: &RawExpr) -> Result<Expr, (usize, usize)> {
    match raw {
        RawExpr::Symbol(name) => Ok(Expr::Symbol(Arc::clone(name).into())),
        RawExpr::Constant(value) => Ok(Expr::Constant(*value)),
        RawExpr::Group(inner) => lower(inner),
        RawExpr::NonBoolean(lo, hi) => Err((*lo, *hi)),
        RawExpr::Not(inner) => Ok(Expr::Not(Box::new(lower(inner)?))),
        RawExpr::Implies(premise, conclusion) => Ok(Expr::Implies(
            Box::new(lower(premise)?),
            Box::new(lower(conclusion)?),
        )),
        RawExpr::And(..) | RawExpr::Or(..) | RawExpr::Xor(..) => lower_chain(raw),
    }
}

/// Lower `A op B op C ...` into one n-ary node
fn lower_chain(raw: &RawExpr) -> Result<Expr, (usize, usize)> {
    let op = chain_op(raw);
    let mut operands = Vec::new();
    let mut head = raw;
    // Walk down the left spine while it continues the chain
    while let RawExpr::And(left, right) | RawExpr::Or(left, right) | RawExpr::Xor(left, right) =
        head
    {
        if chain_op(head) != op {
            break;
        }
        operands.push(right.as_ref());
        head = left.as_ref();
    }
    operands.push(head);
    operands.reverse();

    let children = operands
        .into_iter()
        .map(lower)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(match op {
        Some(ChainOp::And) => Expr::And(children),
        Some(ChainOp::Or) => Expr::Or(children),
        _ => Expr::Xor(children),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn sym(name: &str) -> Expr {
        Expr::symbol(name)
    }

    #[test]
    fn test_normalize_all_glyphs() {
        assert_eq!(normalize_symbols("A ∧ B"), "A & B");
        assert_eq!(normalize_symbols("A ∨ B"), "A | B");
        assert_eq!(normalize_symbols("¬A"), "~A");
        assert_eq!(normalize_symbols("A → B"), "A >> B");
        assert_eq!(normalize_symbols("A ⊕ B"), "A ^ B");
        assert_eq!(normalize_symbols("plain & text"), "plain & text");
    }

    #[test]
    fn test_parse_and_or_structure() {
        let expr = Expr::parse("A & (B | C)").unwrap();
        assert_eq!(
            expr,
            Expr::And(vec![sym("A"), Expr::Or(vec![sym("B"), sym("C")])])
        );
    }

    #[test]
    fn test_chains_become_nary() {
        assert_eq!(
            Expr::parse("A & B & C").unwrap(),
            Expr::And(vec![sym("A"), sym("B"), sym("C")])
        );
        assert_eq!(
            Expr::parse("A ^ B ^ C").unwrap(),
            Expr::Xor(vec![sym("A"), sym("B"), sym("C")])
        );
    }

    #[test]
    fn test_parentheses_are_preserved() {
        assert_eq!(
            Expr::parse("(A & B) & C").unwrap(),
            Expr::And(vec![Expr::And(vec![sym("A"), sym("B")]), sym("C")])
        );
        assert_eq!(
            Expr::parse("A | (B | C)").unwrap(),
            Expr::Or(vec![sym("A"), Expr::Or(vec![sym("B"), sym("C")])])
        );
    }

    #[test]
    fn test_double_negation_not_simplified() {
        assert_eq!(Expr::parse("~~A").unwrap(), sym("A").not().not());
    }

    #[test]
    fn test_implies_is_left_associative() {
        let expr = Expr::parse("A >> B >> C").unwrap();
        assert_eq!(expr, sym("A").implies(&sym("B")).implies(&sym("C")));
    }

    #[test]
    fn test_precedence_levels() {
        // >> binds tighter than &, & tighter than ^, ^ tighter than |
        let expr = Expr::parse("A | B ^ C & D >> E").unwrap();
        let expected = Expr::Or(vec![
            sym("A"),
            Expr::Xor(vec![
                sym("B"),
                Expr::And(vec![sym("C"), sym("D").implies(&sym("E"))]),
            ]),
        ]);
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_constants() {
        assert_eq!(
            Expr::parse("True ^ False").unwrap(),
            Expr::Xor(vec![Expr::Constant(true), Expr::Constant(false)])
        );
        // Identifiers that merely start with a keyword are variables
        assert_eq!(Expr::parse("Trueish").unwrap(), sym("Trueish"));
    }

    #[test]
    fn test_unicode_matches_ascii() {
        let unicode = Expr::parse("(P → Q) ∧ ¬Q").unwrap();
        let ascii = Expr::parse("(P >> Q) & ~Q").unwrap();
        assert_eq!(unicode, ascii);
    }

    #[test]
    fn test_syntax_error_reports_position() {
        let err = Expr::parse("A +").unwrap_err();
        match err {
            ExpressionParseError::InvalidSyntax {
                input, position, ..
            } => {
                assert_eq!(input.as_ref(), "A +");
                assert_eq!(position, Some(3));
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_unexpected_token() {
        let err = Expr::parse("A & & B").unwrap_err();
        assert!(matches!(
            err,
            ExpressionParseError::InvalidSyntax {
                position: Some(4),
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_character() {
        assert!(matches!(
            Expr::parse("A $ B"),
            Err(ExpressionParseError::InvalidSyntax { .. })
        ));
        assert!(matches!(
            Expr::parse(""),
            Err(ExpressionParseError::InvalidSyntax { .. })
        ));
    }

    #[test]
    fn test_arithmetic_is_not_boolean() {
        let err = Expr::parse("A + 1").unwrap_err();
        assert_eq!(
            err,
            ExpressionParseError::NotBoolean {
                input: Arc::from("A + 1"),
                fragment: Arc::from("A + 1"),
            }
        );
    }

    #[test]
    fn test_nested_arithmetic_fragment() {
        let err = Expr::parse("P & (Q * 2)").unwrap_err();
        match err {
            ExpressionParseError::NotBoolean { fragment, .. } => {
                assert_eq!(fragment.as_ref(), "Q * 2");
            }
            other => panic!("expected type error, got {:?}", other),
        }
        assert!(matches!(
            Expr::parse("A & 1"),
            Err(ExpressionParseError::NotBoolean { .. })
        ));
        assert!(matches!(
            Expr::parse("-A"),
            Err(ExpressionParseError::NotBoolean { .. })
        ));
    }

    #[test]
    fn test_from_str() {
        let expr: Expr = "A | B".parse().unwrap();
        assert_eq!(expr, Expr::Or(vec![sym("A"), sym("B")]));
    }

    fn nested(open: &str, depth: usize, close: &str) -> String {
        format!("{}A{}", open.repeat(depth), close.repeat(depth))
    }

    #[test]
    fn test_deep_parentheses_are_rejected() {
        let input = nested("(", 10_000, ")");
        let err = Expr::parse(&input).unwrap_err();
        assert_eq!(
            err,
            ExpressionParseError::TooDeep {
                input: Arc::from(input.as_str()),
                limit: MAX_NESTING_DEPTH,
            }
        );
    }

    #[test]
    fn test_deep_negation_is_rejected() {
        let input = nested("~", 5_000, "");
        assert!(matches!(
            Expr::parse(&input),
            Err(ExpressionParseError::TooDeep { .. })
        ));
        let input = nested("¬", 5_000, "");
        assert!(matches!(
            Expr::parse(&input),
            Err(ExpressionParseError::TooDeep { .. })
        ));
    }

    #[test]
    fn test_nesting_limit_boundary() {
        // Each group is one level and the symbol is one more
        let deepest = Expr::parse(&nested("(", MAX_NESTING_DEPTH - 1, ")")).unwrap();
        assert_eq!(deepest, sym("A"));
        assert!(matches!(
            Expr::parse(&nested("(", MAX_NESTING_DEPTH, ")")),
            Err(ExpressionParseError::TooDeep { .. })
        ));

        let negations = Expr::parse(&nested("~", MAX_NESTING_DEPTH - 1, "")).unwrap();
        assert_eq!(negations.depth(), MAX_NESTING_DEPTH);
    }

    #[test]
    fn test_long_chain_is_not_deep() {
        let input = (0..10_000)
            .map(|i| format!("x{}", i))
            .collect::<Vec<_>>()
            .join(" & ");
        match Expr::parse(&input).unwrap() {
            Expr::And(children) => assert_eq!(children.len(), 10_000),
            other => panic!("expected a single AND node, got {}", other),
        }

        let implications = format!("A{}", " >> A".repeat(MAX_NESTING_DEPTH));
        assert!(matches!(
            Expr::parse(&implications),
            Err(ExpressionParseError::TooDeep { .. })
        ));
    }
}
