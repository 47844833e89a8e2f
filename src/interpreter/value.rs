/// The runtime value representation.
///
/// Defines the `Value` enum produced by expression evaluation and stored in
/// the variable environment, along with its textual rendering.
pub mod core;
