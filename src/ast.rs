/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code. The parser types them, so evaluation never has to re-parse
/// literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A string literal, stored without its quotes.
    Str(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions are reduced to a runtime value by the evaluator. Every node
/// records the source line it was parsed from for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal value (integer or string).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression (e.g. `inputi("x? ")`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

/// Binary operators recognized by the parser.
///
/// `Mod` is accepted syntactically but the evaluator has no arithmetic for it
/// and rejects it at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Integer division (`/`).
    Div,
    /// Remainder (`%`).
    Mod,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{symbol}")
    }
}

/// A statement inside a function body.
///
/// Statements are executed in order for their side effects on the variable
/// environment and the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A variable declaration, e.g. `var x;`.
    VariableDeclaration {
        /// Name of the declared variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An assignment, e.g. `x = 3 + 4;`.
    Assignment {
        /// Name of the variable being assigned.
        name:  String,
        /// Expression producing the new value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A function call used as a statement, e.g. `print(x);`.
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Expr>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Any other expression followed by `;`, e.g. `x + 1;`.
    ///
    /// The parser accepts these but they are not executable statements.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Returns the source line this statement was parsed from.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::VariableDeclaration { line, .. }
            | Self::Assignment { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::Expression { line, .. } => *line,
        }
    }
}

/// A function definition: `func name() { statements }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// Name of the function.
    pub name:       String,
    /// Body statements, in source order.
    pub statements: Vec<Statement>,
    /// Line number of the `func` keyword.
    pub line:       usize,
}

/// The root of a parsed source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Top-level function definitions, in source order.
    pub functions: Vec<FunctionDef>,
}
