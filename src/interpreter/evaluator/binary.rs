/// Binary operator dispatch.
///
/// Checks operand types and routes supported operators to the integer
/// arithmetic in [`scalar`].
pub mod core;

/// Integer arithmetic.
///
/// Implements the wrapping arithmetic behind `+`, `-`, `*` and `/`.
pub mod scalar;
