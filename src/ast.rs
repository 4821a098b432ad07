use std::{fmt, str::FromStr};

/// An arithmetic operator recognized in the head position of a list.
///
/// Every operator is prefix and variadic. `-` and `/` treat the first operand
/// specially: the remaining operands are first combined with `+` (for `-`)
/// or `*` (for `/`), and the result is subtracted from or divides the first
/// operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// The complete operator set, in symbol order `+ - * /`.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl FromStr for Operator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|op| op.symbol() == s).ok_or(())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A node of the expression tree built by the parser.
///
/// Each node exclusively owns its children, so a tree is acyclic and is
/// dropped as a whole once the line it came from has been evaluated.
///
/// The `Display` implementation renders the tree back to source text with
/// single spaces between list elements:
///
/// ```
/// use sexpr_calc::ast::Expr;
///
/// let expr = Expr::List(vec![Expr::atom("+"),
///                            Expr::atom("1"),
///                            Expr::List(vec![Expr::atom("*"), Expr::atom("2"), Expr::atom("3")])]);
/// assert_eq!(expr.to_string(), "(+ 1 (* 2 3))");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A leaf holding raw token text, either a numeric literal or an
    /// operator symbol.
    Atom(String),
    /// A parenthesized sub-expression. Children keep source order; the first
    /// one is the operator when the list is evaluated.
    List(Vec<Self>),
}

impl Expr {
    /// Builds an atom from any string-like value.
    pub fn atom(text: impl Into<String>) -> Self {
        Self::Atom(text.into())
    }

    /// Returns the text of an atom, or `None` for a list.
    #[must_use]
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Self::Atom(text) => Some(text),
            Self::List(_) => None,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom(text) => f.write_str(text),
            Self::List(elements) => {
                f.write_str("(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str(")")
            },
        }
    }
}
