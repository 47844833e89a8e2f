/// Builtin resolution and call dispatch.
///
/// Holds the builtin table and the routine both call sites (statements and
/// expressions) go through.
pub mod core;
/// The `inputi` function implementation.
///
/// Optionally prints a prompt, then reads one integer from the console.
pub mod inputi;
/// The `print` function implementation.
///
/// Concatenates its arguments and writes them as one line.
pub mod print;
