use crate::ast::BinaryOperator;

/// The flat classification every runtime error belongs to.
///
/// A hosting harness inspects the kind rather than the message to decide which
/// failure fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unknown or duplicate names: variables, functions, `main`.
    Name,
    /// Values or nodes of the wrong shape for an operation.
    Type,
    /// Data-dependent runtime faults such as division by zero.
    Fault,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "NAME_ERROR"),
            Self::Type => write!(f, "TYPE_ERROR"),
            Self::Fault => write!(f, "FAULT_ERROR"),
        }
    }
}

/// Represents all errors that can occur during evaluation and runtime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// The program has no function named `main`.
    #[error("No main() function was found.")]
    MissingMain,
    /// Tried to use an undeclared variable.
    #[error("Error on line {line}: Variable '{name}' is not defined.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Read a variable that was declared but never assigned.
    #[error("Error on line {line}: Variable '{name}' has no value.")]
    UnassignedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Declared a variable whose name is already taken.
    #[error("Error on line {line}: Variable '{name}' is already defined.")]
    VariableRedefinition {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an unknown function, or a builtin where it cannot be used.
    #[error("Error on line {line}: Function '{name}' is undefined.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a builtin with more arguments than any of its forms accepts.
    #[error("Error on line {line}: No {name}() function found that takes {found} parameters.")]
    NoMatchingOverload {
        /// The name of the builtin.
        name:  String,
        /// The number of arguments supplied.
        found: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Met a statement that cannot be executed.
    #[error("Error on line {line}: Unknown statement kind.")]
    UnknownStatement {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Applied arithmetic to operands that are not both integers.
    #[error("Error on line {line}: Incompatible types for arithmetic operation: {left} {op} {right}.")]
    IncompatibleTypes {
        /// The operator.
        op:    BinaryOperator,
        /// Type name of the left operand.
        left:  &'static str,
        /// Type name of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The operator has no runtime implementation.
    #[error("Error on line {line}: Unsupported operator: {op}.")]
    UnsupportedOperator {
        /// The operator.
        op:   BinaryOperator,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The input stream ended while a value was requested.
    #[error("Error on line {line}: No more input available.")]
    InputExhausted {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An input line did not contain an integer.
    #[error("Error on line {line}: Input '{input}' is not an integer.")]
    InvalidInput {
        /// The text that was read.
        input: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl RuntimeError {
    /// Classifies this error into its [`ErrorKind`].
    ///
    /// # Example
    /// ```
    /// use brewin::error::{ErrorKind, RuntimeError};
    ///
    /// assert_eq!(RuntimeError::MissingMain.kind(), ErrorKind::Name);
    /// assert_eq!(RuntimeError::DivisionByZero { line: 3 }.kind(), ErrorKind::Fault);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingMain
            | Self::UnknownVariable { .. }
            | Self::UnassignedVariable { .. }
            | Self::VariableRedefinition { .. }
            | Self::UnknownFunction { .. }
            | Self::NoMatchingOverload { .. } => ErrorKind::Name,
            Self::UnknownStatement { .. }
            | Self::IncompatibleTypes { .. }
            | Self::UnsupportedOperator { .. } => ErrorKind::Type,
            Self::DivisionByZero { .. } | Self::InputExhausted { .. } | Self::InvalidInput { .. } => {
                ErrorKind::Fault
            },
        }
    }
}
