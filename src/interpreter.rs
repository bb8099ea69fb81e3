/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// and maintains the runtime environment mapping variables to values. It is
/// independent of the semantic analyzer; both consume the same tree.
///
/// # Responsibilities
/// - Evaluates literals, arithmetic and variable references.
/// - Applies assignments and initialized declarations to the environment.
/// - Reports runtime errors such as unbound names and type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces tokens on
/// demand: numeric literals, identifiers, keywords, operators and
/// punctuation. Whitespace and `#` line comments are skipped.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line information.
/// - Distinguishes reserved words (`main`, `var`, `proc`, `Int`, `Float`)
///   from identifiers.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser applies a fixed LL(1) recursive-descent grammar to the token
/// stream and produces a single root node.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Encodes operator precedence and associativity in the tree shape.
/// - Reports syntax errors with the offending token and what was expected.
pub mod parser;
/// The semantic module checks declarations against a symbol table.
///
/// # Responsibilities
/// - Defines symbols and the flat, builtin-seeded symbol table.
/// - Rejects unknown types, duplicate declarations and use before
///   declaration.
pub mod semantic;
/// The value module defines the runtime data types for evaluation.
///
/// Values are tagged integers or floats; binary arithmetic promotes both
/// operands to floats.
pub mod value;
