/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens and literals
/// that cannot be represented.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a program runs, together
/// with the flat [`ErrorKind`] classification every runtime error maps onto.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::{ErrorKind, RuntimeError};

/// Any failure produced while turning source text into a finished run.
#[derive(Debug, thiserror::Error)]
pub enum InterpretError {
    /// The source did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program parsed but failed while running.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl InterpretError {
    /// Returns the runtime error kind, or `None` for syntax errors.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Parse(_) => None,
            Self::Runtime(e) => Some(e.kind()),
        }
    }
}
