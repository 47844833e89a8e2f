//! # brewin
//!
//! brewin is an interpreter for Brewin, a minimal imperative scripting
//! language, written in Rust. A program is a set of functions; execution
//! starts at `main`, whose body declares variables, assigns integer and string
//! values to them, does integer arithmetic, and talks to the outside world
//! through the builtins `print` and `inputi`.
//!
//! ```text
//! func main() {
//!     var x;
//!     x = inputi("Enter a number: ") * 2;
//!     print("Twice that is ", x);
//! }
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::InterpretError,
    interpreter::{
        console::Console,
        evaluator::{core::run_program, environment::Environment},
        parser::parse,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `FunctionDef`, `Statement` and `Expr`
/// types that represent the syntactic structure of source code as a tree. The
/// AST is built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines node types for every language construct.
/// - Attaches source line numbers to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code, and the `ErrorKind` classification of runtime errors.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Classifies runtime failures as name, type or fault errors.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and console I/O to provide a complete runtime for Brewin
/// programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides entry points for parsing and running programs.
/// - Keeps I/O behind the `Console` trait.
pub mod interpreter;

/// Parses and runs a Brewin program.
///
/// The source is parsed in full before anything runs, so a syntax error never
/// produces partial output. Execution starts at `main` with an empty
/// environment and performs all I/O through `console`.
///
/// # Errors
/// Returns an error if parsing fails or if the program raises a runtime
/// error. Output written before a runtime error remains in the console.
///
/// # Returns
/// The final variable environment of the run.
///
/// # Examples
/// ```
/// use brewin::{error::ErrorKind, interpreter::console::ScriptedConsole, run_source};
///
/// let mut console = ScriptedConsole::default();
/// let source = "func main() { var x; x = 3 + 4; print(\"x is \", x); }";
/// assert!(run_source(source, &mut console).is_ok());
/// assert_eq!(console.lines(), ["x is 7"]);
///
/// // Example with an intentional error (unknown variable).
/// let source = "func main() { y = 1; }";
/// let err = run_source(source, &mut console).unwrap_err();
/// assert_eq!(err.kind(), Some(ErrorKind::Name));
/// ```
pub fn run_source(source: &str, console: &mut dyn Console) -> Result<Environment, InterpretError> {
    let program = parse(source)?;
    tracing::debug!(functions = program.functions.len(), "parsed program");

    Ok(run_program(&program, console)?)
}
