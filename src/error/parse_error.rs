#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The tokens ran out while an expression or a closing `)` was still
    /// expected.
    UnexpectedEndOfExpression,
    /// A list had fewer elements than an operator application needs, or
    /// tokens were left over after a complete expression.
    InvalidExpression,
    /// Found a `)` with no matching `(`.
    UnexpectedClosingParen,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfExpression => {
                write!(f, "SYNTAX ERROR - Unexpected end of expression")
            },
            Self::InvalidExpression => write!(f, "SYNTAX ERROR - Invalid Expression"),
            Self::UnexpectedClosingParen => {
                write!(f, "SYNTAX ERROR - Unexpected closing parenthesis")
            },
        }
    }
}

impl std::error::Error for ParseError {}
