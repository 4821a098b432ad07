#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// The head of a list is not one of the recognized operator symbols.
    UnknownOperator {
        /// The offending head, rendered back to source text.
        op: String,
    },
    /// A list with no elements at all was evaluated.
    MissingOperator,
    /// An atom in operand position is not a numeric literal.
    InvalidNumber {
        /// The text of the atom.
        token: String,
    },
    /// The divisor of a `/` application evaluated to zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOperator { op } => write!(f, "SYNTAX ERROR - Unknown operator {op}"),
            Self::MissingOperator => write!(f, "SYNTAX ERROR - Missing operator"),
            Self::InvalidNumber { token } => {
                write!(f, "RUNTIME ERROR - Invalid number {token}")
            },
            Self::DivisionByZero => write!(f, "RUNTIME ERROR - Division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
