//! Operator overloading for building expressions
//!
//! The operators match the parser's tokens: `&` for AND, `|` for OR, `^` for XOR,
//! `>>` for IMPLIES and `!` for NOT (the parser's `~`). Reference forms avoid
//! consuming the operands.

use super::Expr;
use std::ops::{BitAnd, BitOr, BitXor, Not, Shr};

/// Logical AND operator for references: `&a & &b`
///
/// # Examples
///
/// ```
/// use truth_table::Expr;
///
/// let a = Expr::symbol("A");
/// let b = Expr::symbol("B");
/// assert_eq!(&a & &b, a.and(&b));
/// ```
impl BitAnd for &Expr {
    type Output = Expr;

    fn bitand(self, rhs: &Expr) -> Expr {
        self.and(rhs)
    }
}

impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Expr {
        self.and(&rhs)
    }
}

/// Logical OR operator for references: `&a | &b`
impl BitOr for &Expr {
    type Output = Expr;

    fn bitor(self, rhs: &Expr) -> Expr {
        self.or(rhs)
    }
}

impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Expr {
        self.or(&rhs)
    }
}

/// Exclusive OR operator for references: `&a ^ &b`
impl BitXor for &Expr {
    type Output = Expr;

    fn bitxor(self, rhs: &Expr) -> Expr {
        self.xor(rhs)
    }
}

impl BitXor for Expr {
    type Output = Expr;

    fn bitxor(self, rhs: Expr) -> Expr {
        self.xor(&rhs)
    }
}

/// Implication operator for references: `&p >> &q`
///
/// # Examples
///
/// ```
/// use truth_table::Expr;
///
/// let p = Expr::symbol("P");
/// let q = Expr::symbol("Q");
/// assert_eq!((&p >> &q).to_string(), "P >> Q");
/// ```
impl Shr for &Expr {
    type Output = Expr;

    fn shr(self, rhs: &Expr) -> Expr {
        self.implies(rhs)
    }
}

impl Shr for Expr {
    type Output = Expr;

    fn shr(self, rhs: Expr) -> Expr {
        self.implies(&rhs)
    }
}

/// Logical NOT operator for references: `!&a`
impl Not for &Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::not(self)
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operators_match_parser() {
        let p = Expr::symbol("P");
        let q = Expr::symbol("Q");

        let built = (&p >> &q) & !&q;
        assert_eq!(built, Expr::parse("(P >> Q) & ~Q").unwrap());
    }

    #[test]
    fn test_owned_operators_chain() {
        let a = Expr::symbol("A");
        let b = Expr::symbol("B");
        let c = Expr::symbol("C");

        assert_eq!(
            a.clone() | b.clone() | c.clone(),
            Expr::parse("A | B | C").unwrap()
        );
        assert_eq!(a ^ b ^ c, Expr::parse("A ^ B ^ C").unwrap());
    }
}
