/// The console module defines the I/O boundary of a running program.
///
/// Programs write output lines and read input lines through the `Console`
/// trait, so the same evaluator drives the terminal and in-memory test
/// consoles.
pub mod console;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, executes statements against the variable
/// environment, evaluates expressions and builtin calls, and reports runtime
/// errors classified by kind.
///
/// # Responsibilities
/// - Locates and runs the `main` function.
/// - Executes declarations, assignments and builtin calls.
/// - Evaluates literals, variables, arithmetic and `inputi` calls.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// paired with the line it appears on.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into function definitions, statements and expressions.
/// - Validates grammar and reports errors with line information.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are integers or strings; there are no implicit conversions between
/// them.
pub mod value;
