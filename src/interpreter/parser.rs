/// Core parser state and the program entry point.
///
/// Holds the token cursor, the `eat`/`expect` helpers shared by every
/// production, and the top-level `program := MAIN statement EOF` rule.
pub mod core;

/// Binary expression parsing.
///
/// Implements the left-associative `expr` and `term` levels of the
/// precedence ladder.
pub mod binary;

/// Factor parsing.
///
/// Handles literals, variables, parenthesized expressions and the
/// right-recursive prefix `+`/`-` operators.
pub mod unary;

/// Statement parsing.
///
/// Implements compound blocks, assignments, `var` declarations, `proc`
/// declarations and the empty statement.
pub mod statement;
