use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use std::mem;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, LitBool, LitStr, Token};

/// Formula tree as written inside the macro
enum Formula {
    Variable(Ident),
    Symbol(LitStr),
    Constant(bool),
    Group(Box<Formula>),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Xor(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Generate code that builds the `Expr` tree node by node
    ///
    /// Variables are cloned, so they stay usable after the macro call.
    fn to_tokens(&self) -> TokenStream2 {
        match self {
            Formula::Variable(ident) => quote! { Expr::clone(&#ident) },
            Formula::Symbol(lit) => quote! { Expr::symbol(#lit) },
            Formula::Constant(value) => quote! { Expr::constant(#value) },
            Formula::Group(inner) => inner.to_tokens(),
            Formula::Not(inner) => {
                let inner = inner.to_tokens();
                quote! { Expr::Not(::std::boxed::Box::new(#inner)) }
            }
            Formula::Implies(left, right) => {
                let left = left.to_tokens();
                let right = right.to_tokens();
                quote! {
                    Expr::Implies(::std::boxed::Box::new(#left), ::std::boxed::Box::new(#right))
                }
            }
            Formula::And(..) => self.nary(quote! { And }),
            Formula::Or(..) => self.nary(quote! { Or }),
            Formula::Xor(..) => self.nary(quote! { Xor }),
        }
    }

    /// One n-ary node for a chain such as `a & b & c`
    fn nary(&self, variant: TokenStream2) -> TokenStream2 {
        let operands = self.chain_operands().into_iter().map(Formula::to_tokens);
        quote! { Expr::#variant(::std::vec![#(#operands),*]) }
    }

    /// Operands of the chain rooted here, left to right
    ///
    /// The left spine is followed while it is the same operator; a parenthesised
    /// operand is a `Group` and so starts a node of its own.
    fn chain_operands(&self) -> Vec<&Formula> {
        let kind = mem::discriminant(self);
        let mut operands = Vec::new();
        let mut head = self;
        while let Formula::And(left, right) | Formula::Or(left, right) | Formula::Xor(left, right) =
            head
        {
            if mem::discriminant(head) != kind {
                break;
            }
            operands.push(right.as_ref());
            head = left.as_ref();
        }
        operands.push(head);
        operands.reverse();
        operands
    }
}

struct FormulaParser {
    formula: Formula,
}

impl Parse for FormulaParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let formula = parse_or(input)?;
        if !input.is_empty() {
            return Err(input.error("unexpected token in formula"));
        }
        Ok(FormulaParser { formula })
    }
}

/// Parse OR expressions (lowest precedence)
fn parse_or(input: ParseStream) -> Result<Formula> {
    let mut left = parse_xor(input)?;
    while input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        let right = parse_xor(input)?;
        left = Formula::Or(Box::new(left), Box::new(right));
    }
    Ok(left)
}

fn parse_xor(input: ParseStream) -> Result<Formula> {
    let mut left = parse_and(input)?;
    while input.peek(Token![^]) {
        input.parse::<Token![^]>()?;
        let right = parse_and(input)?;
        left = Formula::Xor(Box::new(left), Box::new(right));
    }
    Ok(left)
}

fn parse_and(input: ParseStream) -> Result<Formula> {
    let mut left = parse_implies(input)?;
    while input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        let right = parse_implies(input)?;
        left = Formula::And(Box::new(left), Box::new(right));
    }
    Ok(left)
}

/// Parse implications; binds tighter than AND, matching the string parser
fn parse_implies(input: ParseStream) -> Result<Formula> {
    let mut left = parse_unary(input)?;
    while input.peek(Token![>>]) {
        input.parse::<Token![>>]>()?;
        let right = parse_unary(input)?;
        left = Formula::Implies(Box::new(left), Box::new(right));
    }
    Ok(left)
}

/// Parse NOT (highest precedence)
fn parse_unary(input: ParseStream) -> Result<Formula> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        Ok(Formula::Not(Box::new(parse_unary(input)?)))
    } else if input.peek(Token![~]) {
        input.parse::<Token![~]>()?;
        Ok(Formula::Not(Box::new(parse_unary(input)?)))
    } else {
        parse_atom(input)
    }
}

/// Parse variables, string literals, `true`/`false` and parenthesised formulas
fn parse_atom(input: ParseStream) -> Result<Formula> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        let inner = parse_or(&content)?;
        if !content.is_empty() {
            return Err(content.error("unexpected token in parentheses"));
        }
        Ok(Formula::Group(Box::new(inner)))
    } else if input.peek(LitStr) {
        Ok(Formula::Symbol(input.parse()?))
    } else if input.peek(LitBool) {
        let lit: LitBool = input.parse()?;
        Ok(Formula::Constant(lit.value))
    } else if input.peek(syn::LitInt) {
        let lit: syn::LitInt = input.parse()?;
        Err(syn::Error::new(
            lit.span(),
            "numbers are not boolean; use `true` or `false`",
        ))
    } else {
        let ident: Ident = input.parse()?;
        Ok(Formula::Variable(ident))
    }
}

/// The `expr!` procedural macro for propositional formulas
///
/// Builds an `Expr` from Rust tokens with the same operators and precedence as
/// `Expr::parse`. `Expr` must be in scope.
///
/// # Supported Syntax
///
/// - `a` - any `Expr` (or `&Expr`) in scope, cloned rather than moved
/// - `"a"` - a symbol, as `Expr::symbol("a")`
/// - `true` / `false` - constants
/// - `!a` or `~a` - NOT
/// - `a >> b` - IMPLIES
/// - `a & b` - AND
/// - `a ^ b` - XOR
/// - `a | b` - OR
/// - `(a | b) & c` - grouping
///
/// # Operator Precedence
///
/// From highest to lowest:
/// 1. `( )`
/// 2. `!` / `~` (NOT)
/// 3. `>>` (IMPLIES)
/// 4. `&` (AND)
/// 5. `^` (XOR)
/// 6. `|` (OR)
///
/// Binary operators are left-associative. An unparenthesised chain of the same
/// operator builds a single n-ary node, while parentheses start a node of their
/// own, exactly as in `Expr::parse`: `a & b & c` is one `And` with three
/// children and `(a & b) & c` is an `And` nested inside another.
///
/// # Examples
///
/// ```ignore
/// use truth_table::{expr, Expr};
///
/// // String literals only
/// let modus_tollens = expr!(("P" >> "Q") & !"Q");
///
/// // Existing expressions
/// let p = Expr::symbol("P");
/// let q = Expr::symbol("Q");
/// let same = expr!((p >> q) & !q);
///
/// // Constants and composition
/// let padded = expr!(same | false);
/// ```
#[proc_macro]
pub fn expr(input: TokenStream) -> TokenStream {
    let parser = parse_macro_input!(input as FormulaParser);
    TokenStream::from(parser.formula.to_tokens())
}
