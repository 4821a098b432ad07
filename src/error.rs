/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into
/// an expression tree: running out of tokens, stray closing parentheses and
/// lists that are too short to be operator applications.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while walking an expression
/// tree: unknown operators, atoms that are not numbers and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure of a single input line, keeping parse-time and
/// evaluation-time errors apart.
pub enum Error {
    /// The line could not be parsed into an expression tree.
    Syntax(ParseError),
    /// The expression tree could not be evaluated.
    Eval(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Syntax(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => e.fmt(f),
            Self::Eval(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
