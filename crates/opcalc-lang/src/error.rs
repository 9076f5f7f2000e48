/// Errors that can occur when registering operations or calculating.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("an operation with symbol '{0}' is already registered")]
    DuplicateSymbol(String),

    #[error("invalid operation symbol '{0}': must be a non-empty token without whitespace, digits or '.digit'")]
    InvalidSymbol(String),

    #[error("operation '{symbol}' not found; registered: {}", .available.join(", "))]
    NotFound {
        symbol: String,
        available: Vec<String>,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Parse error for infix input lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
