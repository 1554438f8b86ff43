//! Display formatting for expressions

use super::Expr;
use std::fmt;

/// Output notation for rendering expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Notation {
    /// ASCII operators accepted by the parser: `&`, `|`, `~`, `>>`, `^`
    #[default]
    Ascii,
    /// Unicode logic glyphs: `∧`, `∨`, `¬`, `→`, `⊕`
    Unicode,
    /// LaTeX math mode: `\wedge`, `\vee`, `\neg`, `\Rightarrow`, `\veebar`
    Latex,
}

struct Glyphs {
    and: &'static str,
    or: &'static str,
    not: &'static str,
    implies: &'static str,
    xor: &'static str,
    open: &'static str,
    close: &'static str,
    truth: &'static str,
    falsity: &'static str,
}

impl Notation {
    fn glyphs(self) -> Glyphs {
        match self {
            Notation::Ascii => Glyphs {
                and: " & ",
                or: " | ",
                not: "~",
                implies: " >> ",
                xor: " ^ ",
                open: "(",
                close: ")",
                truth: "True",
                falsity: "False",
            },
            Notation::Unicode => Glyphs {
                and: " ∧ ",
                or: " ∨ ",
                not: "¬",
                implies: " → ",
                xor: " ⊕ ",
                open: "(",
                close: ")",
                truth: "True",
                falsity: "False",
            },
            Notation::Latex => Glyphs {
                and: " \\wedge ",
                or: " \\vee ",
                not: "\\neg ",
                implies: " \\Rightarrow ",
                xor: " \\veebar ",
                open: "\\left(",
                close: "\\right)",
                truth: "\\text{True}",
                falsity: "\\text{False}",
            },
        }
    }
}

// Binding strength, mirroring the parser (higher binds tighter)
const PREC_OR: u8 = 1;
const PREC_XOR: u8 = 2;
const PREC_AND: u8 = 3;
const PREC_IMPLIES: u8 = 4;
const PREC_NOT: u8 = 5;
const PREC_ATOM: u8 = 6;

impl Expr {
    fn precedence(&self) -> u8 {
        match self {
            Expr::Symbol(_) | Expr::Constant(_) => PREC_ATOM,
            Expr::Not(_) => PREC_NOT,
            Expr::Implies(..) => PREC_IMPLIES,
            Expr::And(children) | Expr::Or(children) | Expr::Xor(children)
                if children.len() < 2 =>
            {
                // Degenerate nodes render as their only child or a constant
                children.first().map_or(PREC_ATOM, Expr::precedence)
            }
            Expr::And(_) => PREC_AND,
            Expr::Xor(_) => PREC_XOR,
            Expr::Or(_) => PREC_OR,
        }
    }

    /// Render this expression in the given notation with minimal parentheses
    ///
    /// ASCII and Unicode renderings parse back to the same expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_table::{Expr, Notation};
    ///
    /// let expr = Expr::parse("~(A | B) >> C").unwrap();
    /// assert_eq!(expr.render(Notation::Ascii), "~(A | B) >> C");
    /// assert_eq!(expr.render(Notation::Unicode), "¬(A ∨ B) → C");
    /// assert_eq!(
    ///     expr.render(Notation::Latex),
    ///     "\\neg \\left(A \\vee B\\right) \\Rightarrow C"
    /// );
    /// ```
    pub fn render(&self, notation: Notation) -> String {
        let mut out = String::new();
        self.render_into(&mut out, &notation.glyphs());
        out
    }

    fn render_child(&self, out: &mut String, glyphs: &Glyphs, parenthesize: bool) {
        if parenthesize {
            out.push_str(glyphs.open);
            self.render_into(out, glyphs);
            out.push_str(glyphs.close);
        } else {
            self.render_into(out, glyphs);
        }
    }

    fn render_into(&self, out: &mut String, glyphs: &Glyphs) {
        match self {
            Expr::Symbol(symbol) => out.push_str(symbol.name()),
            Expr::Constant(true) => out.push_str(glyphs.truth),
            Expr::Constant(false) => out.push_str(glyphs.falsity),
            Expr::Not(inner) => {
                out.push_str(glyphs.not);
                inner.render_child(out, glyphs, inner.precedence() < PREC_NOT);
            }
            Expr::Implies(premise, conclusion) => {
                // Left-associative: only the right operand needs parentheses at equal precedence
                premise.render_child(out, glyphs, premise.precedence() < PREC_IMPLIES);
                out.push_str(glyphs.implies);
                conclusion.render_child(out, glyphs, conclusion.precedence() <= PREC_IMPLIES);
            }
            Expr::And(children) => {
                render_nary(out, glyphs, children, glyphs.and, PREC_AND, glyphs.truth)
            }
            Expr::Or(children) => {
                render_nary(out, glyphs, children, glyphs.or, PREC_OR, glyphs.falsity)
            }
            Expr::Xor(children) => {
                render_nary(out, glyphs, children, glyphs.xor, PREC_XOR, glyphs.falsity)
            }
        }
    }
}

fn render_nary(
    out: &mut String,
    glyphs: &Glyphs,
    children: &[Expr],
    separator: &str,
    precedence: u8,
    empty: &str,
) {
    match children {
        [] => out.push_str(empty),
        [only] => only.render_into(out, glyphs),
        _ => {
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    out.push_str(separator);
                }
                // Nested nodes of the same operator keep their parentheses, and
                // implications are always bracketed inside AND/OR/XOR for readability
                let parenthesize =
                    child.precedence() <= precedence || matches!(child, Expr::Implies(..));
                child.render_child(out, glyphs, parenthesize);
            }
        }
    }
}

/// Display formatting for expressions
///
/// Uses the ASCII notation accepted by the parser, with minimal parentheses.
///
/// # Examples
///
/// ```
/// use truth_table::Expr;
///
/// let a = Expr::symbol("A");
/// let b = Expr::symbol("B");
/// let c = Expr::symbol("C");
/// let expr = a.and(&b.or(&c));
///
/// assert_eq!(expr.to_string(), "A & (B | C)");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Notation::Ascii))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(input: &str) {
        let expr = Expr::parse(input).unwrap();
        let shown = expr.to_string();
        assert_eq!(shown, input);
        assert_eq!(Expr::parse(&shown).unwrap(), expr);
    }

    #[test]
    fn test_reference_examples() {
        round_trip("A & (B | C)");
        round_trip("(P >> Q) & ~Q");
        round_trip("~(A | B) >> C");
    }

    #[test]
    fn test_minimal_parentheses() {
        round_trip("A | B & C");
        round_trip("A & (B >> C)");
        round_trip("(A | B) ^ C");
        round_trip("A ^ B | C");
        round_trip("~~A");
        round_trip("A >> B >> C");
        round_trip("A >> (B >> C)");
        round_trip("(A & B) & C");
        round_trip("True ^ False");
    }

    #[test]
    fn test_redundant_parentheses_dropped() {
        let expr = Expr::parse("((A)) & (~B)").unwrap();
        assert_eq!(expr.to_string(), "A & ~B");
    }

    #[test]
    fn test_implication_bracketed_in_conjunction() {
        // `>>` binds tighter than `&`, so both inputs are the same expression
        let bare = Expr::parse("P >> Q & ~Q").unwrap();
        assert_eq!(bare.to_string(), "(P >> Q) & ~Q");
    }

    #[test]
    fn test_unicode_rendering_parses_back() {
        let expr = Expr::parse("(P >> Q) & ~Q ^ R | S").unwrap();
        let unicode = expr.render(Notation::Unicode);
        assert_eq!(unicode, "(P → Q) ∧ ¬Q ⊕ R ∨ S");
        assert_eq!(Expr::parse(&unicode).unwrap(), expr);
    }

    #[test]
    fn test_latex_rendering() {
        let expr = Expr::parse("A & (B | C)").unwrap();
        assert_eq!(
            expr.render(Notation::Latex),
            "A \\wedge \\left(B \\vee C\\right)"
        );
        let xor = Expr::parse("A ^ True").unwrap();
        assert_eq!(xor.render(Notation::Latex), "A \\veebar \\text{True}");
    }

    #[test]
    fn test_degenerate_nodes() {
        assert_eq!(Expr::And(vec![]).to_string(), "True");
        assert_eq!(Expr::Or(vec![]).to_string(), "False");
        let single = Expr::Or(vec![Expr::symbol("A").and(&Expr::symbol("B"))]);
        assert_eq!(single.not().to_string(), "~(A & B)");
    }
}
