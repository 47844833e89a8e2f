/// Binary operator evaluation logic.
///
/// Handles the type check and integer arithmetic behind `+`, `-`, `*` and `/`.
pub mod binary;

/// Core evaluation logic, the evaluation context and the program driver.
///
/// Contains expression and statement dispatch, the per-run `Context`, and
/// `run_program`, which locates `main` and executes it.
pub mod core;

/// The variable environment.
///
/// A flat name to value table with distinct "declared" and "assigned" states.
pub mod environment;

/// Builtin function evaluation.
///
/// Resolves `print` and `inputi`, checks argument counts and runs them.
pub mod function;

/// Expression helpers shared by the dispatch in [`core`].
pub mod utils;
