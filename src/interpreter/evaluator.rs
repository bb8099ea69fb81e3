/// Core evaluation logic and the runtime environment.
///
/// Contains the interpreter state, the node dispatch and the statement
/// rules (assignment, declaration, blocks).
pub mod core;

/// Binary operator evaluation.
///
/// Arithmetic on two operands, always carried out in floating point.
pub mod binary;

/// Unary operator evaluation.
///
/// Prefix `+` and `-`, which accept integer operands only.
pub mod unary;
