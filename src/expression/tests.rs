//! Cross-cutting tests for the expression module

use super::*;
use std::collections::BTreeMap;
use test_log::test;

fn assignment(pairs: &[(&str, bool)]) -> Assignment {
    pairs.iter().map(|(n, v)| (Symbol::new(n), *v)).collect()
}

#[test]
fn test_parse_then_evaluate() {
    let expr = Expr::parse("A & (B | C)").unwrap();

    let row = assignment(&[("A", true), ("B", false), ("C", true)]);
    assert!(expr.evaluate(&row).unwrap());

    let row = assignment(&[("A", false), ("B", true), ("C", true)]);
    assert!(!expr.evaluate(&row).unwrap());
}

#[test]
fn test_unicode_and_ascii_are_the_same_expression() {
    let unicode = Expr::parse("(P → Q) ∧ ¬Q").unwrap();
    let ascii = Expr::parse("(P >> Q) & ~Q").unwrap();
    assert_eq!(unicode, ascii);

    assert!(!ascii
        .evaluate(&assignment(&[("P", true), ("Q", true)]))
        .unwrap());
    assert!(ascii
        .evaluate(&assignment(&[("P", false), ("Q", false)]))
        .unwrap());
}

#[test]
fn test_parse_errors_are_distinguished() {
    assert!(matches!(
        Expr::parse("A +"),
        Err(ExpressionParseError::InvalidSyntax { .. })
    ));
    assert!(matches!(
        Expr::parse("A + 1"),
        Err(ExpressionParseError::NotBoolean { .. })
    ));
}

#[test]
fn test_normal_forms_preserve_meaning() {
    let inputs = [
        "A & (B | C)",
        "(P >> Q) & ~Q",
        "~(A ^ B) | C",
        "A >> (B >> C)",
        "~(A & ~(B | ~C))",
        "True & A | False",
    ];
    for input in inputs {
        let expr = Expr::parse(input).unwrap();
        for form in [
            NormalForm::Negation,
            NormalForm::Conjunctive,
            NormalForm::Disjunctive,
        ] {
            let converted = expr.to_normal_form(form);
            assert!(
                converted.is_normal_form(form),
                "{:?} of {} is {}",
                form,
                input,
                converted
            );
            assert!(
                expr.equivalent_to(&converted).unwrap(),
                "{:?} of {} changed its meaning: {}",
                form,
                input,
                converted
            );
        }
    }
}

#[test]
fn test_every_notation_mentions_every_symbol() {
    let expr = Expr::parse("alpha & ~beta >> gamma").unwrap();
    for notation in [Notation::Ascii, Notation::Unicode, Notation::Latex] {
        let text = expr.render(notation);
        for name in ["alpha", "beta", "gamma"] {
            assert!(text.contains(name), "{} missing from {}", name, text);
        }
    }
}

#[test]
fn test_rendered_text_reparses() {
    let expr = Expr::parse("~(A | B) ^ (C >> D) & E").unwrap();
    for notation in [Notation::Ascii, Notation::Unicode] {
        let text = expr.render(notation);
        assert_eq!(Expr::parse(&text).unwrap(), expr, "{}", text);
    }
}

#[test]
fn test_stats_agree_with_tree() {
    let expr = Expr::parse("(A & B) | ~(C ^ A) | (B >> True)").unwrap();
    let stats = expr.stats();
    let tree = expr.build_tree();

    let operators = tree
        .nodes()
        .iter()
        .filter(|n| n.kind.is_operator())
        .count();
    assert_eq!(stats.operators, operators);
    assert_eq!(stats.leaves, tree.len() - operators);
    assert_eq!(stats.variables, 3);
    assert_eq!(tree.edges().len(), tree.len() - 1);

    let mut counts: BTreeMap<NodeKind, usize> = BTreeMap::new();
    for node in tree.nodes() {
        if node.kind.is_operator() {
            *counts.entry(node.kind).or_default() += 1;
        }
    }
    assert_eq!(stats.operator_counts, counts);
}
