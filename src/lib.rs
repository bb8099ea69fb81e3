//! # quill
//!
//! quill is a small imperative teaching language. This crate tokenizes quill
//! source, parses it into a syntax tree, checks declarations against a symbol
//! table and evaluates the tree directly.
//!
//! ```text
//! source -> Lexer -> (tokens) -> Parser -> (AST) -> SemanticAnalyzer | Interpreter
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

use tracing::debug;

use crate::{
    ast::Node,
    error::Error,
    interpreter::{
        evaluator::core::{Environment, Interpreter},
        lexer::Lexer,
        parser::core::Parser,
        semantic::{analyzer::SemanticAnalyzer, table::SymbolTable},
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the closed `Node` enum and the operator and literal
/// types it is built from. The tree is produced by the parser and walked by
/// the semantic analyzer and the evaluator.
///
/// # Responsibilities
/// - Defines one variant per language construct.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// analyzing or evaluating code, and a classification shared by all of them.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, analyzer,
///   evaluator).
/// - Attaches line numbers and the offending token or name for context.
pub mod error;
/// Orchestrates the stages of the language pipeline.
///
/// This module ties together lexing, parsing, semantic analysis, evaluation
/// and value representations.
pub mod interpreter;

/// What a successful interpretation leaves behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The value of the root node; `None` for every program whose root is a
    /// statement.
    pub result:    Option<Value>,
    /// The runtime environment at the end of the run.
    pub variables: Environment,
}

/// Parses a complete program.
///
/// # Errors
/// Returns the first lexical or syntax error.
pub fn parse(source: &str) -> Result<Node, Error> {
    Ok(Parser::new(Lexer::new(source))?.parse()?)
}

/// Parses and semantically checks a program, returning the symbol table.
///
/// # Errors
/// Returns an error if parsing fails or the program breaks a declaration
/// rule.
///
/// # Examples
/// ```
/// use quill::analyze;
///
/// let table = analyze("main { var x: Int = 1; x = x * 2 }").unwrap();
/// assert!(table.lookup("x").is_some());
///
/// // `y` is never declared.
/// assert!(analyze("main { var x: Int = 1; y = 2 }").is_err());
/// ```
pub fn analyze(source: &str) -> Result<SymbolTable, Error> {
    let root = parse(source)?;
    let table = SemanticAnalyzer::new().analyze(&root)?;
    debug!(symbols = table.len(), "Program analyzed");
    Ok(table)
}

/// Parses and evaluates a program without semantic checks.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use quill::{interpret, interpreter::value::Value};
///
/// let outcome = interpret("main { var x: Int = 2; y = x * 3 }").unwrap();
/// assert_eq!(outcome.variables["y"], Value::Float(6.0));
/// ```
pub fn interpret(source: &str) -> Result<Outcome, Error> {
    let root = parse(source)?;
    evaluate_tree(&root)
}

/// Parses, checks and then evaluates a program.
///
/// Evaluation only starts once analysis has succeeded, so every variable in
/// the resulting environment has a symbol.
///
/// # Errors
/// Returns the first error of any stage.
pub fn run(source: &str) -> Result<Outcome, Error> {
    let root = parse(source)?;
    SemanticAnalyzer::new().analyze(&root)?;
    evaluate_tree(&root)
}

/// Evaluates a bare arithmetic expression such as `2 + 3 * 4`.
///
/// The expression may only reference literals, since it runs on an empty
/// environment.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use quill::{evaluate, interpreter::value::Value};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), Value::Float(14.0));
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), Value::Float(20.0));
/// assert_eq!(evaluate("-7").unwrap(), Value::Integer(-7));
/// ```
pub fn evaluate(source: &str) -> Result<Value, Error> {
    let root = Parser::new(Lexer::new(source))?.parse_expression_only()?;
    Ok(Interpreter::new().eval_value(&root)?)
}

fn evaluate_tree(root: &Node) -> Result<Outcome, Error> {
    let mut interpreter = Interpreter::new();
    let result = interpreter.interpret(root)?;
    debug!(?result, "Program interpreted");
    Ok(Outcome { result,
                 variables: interpreter.into_variables() })
}
