use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Mapping from variable name to its current value.
pub type Environment = HashMap<String, Value>;

/// Tree-walking interpreter.
///
/// Owns the runtime environment. Every call to [`Interpreter::interpret`]
/// starts from an empty environment, so independent runs never observe each
/// other; the environment left behind by the last run stays readable
/// through [`Interpreter::variables`].
#[derive(Debug, Default)]
pub struct Interpreter {
    variables: Environment,
}

impl Interpreter {
    /// Creates an interpreter with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a program tree on a fresh environment.
    ///
    /// Returns the value of the root node, which is `None` for every
    /// statement; only a bare expression root yields a value.
    ///
    /// # Errors
    /// Returns the first runtime error encountered.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::{LiteralValue, Node},
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let root = Node::Assignment { name:  "x".to_string(),
    ///                               value: Box::new(Node::Literal { value: LiteralValue::Integer(7),
    ///                                                               line:  1, }),
    ///                               line:  1, };
    ///
    /// let mut interpreter = Interpreter::new();
    /// assert_eq!(interpreter.interpret(&root).unwrap(), None);
    /// assert_eq!(interpreter.variable("x"), Some(Value::Integer(7)));
    /// ```
    pub fn interpret(&mut self, root: &Node) -> EvalResult<Option<Value>> {
        self.variables.clear();
        let result = self.eval(root)?;
        debug!(variables = self.variables.len(), "Interpretation finished");
        Ok(result)
    }

    /// The environment as left by the last run.
    #[must_use]
    pub const fn variables(&self) -> &Environment {
        &self.variables
    }

    /// The current value of a variable, if it has one.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<Value> {
        self.variables.get(name).copied()
    }

    /// Gives up the interpreter and returns its environment.
    #[must_use]
    pub fn into_variables(self) -> Environment {
        self.variables
    }

    /// Evaluates a node against the current environment.
    ///
    /// Expressions produce `Some(value)`; statements produce `None`.
    ///
    /// # Errors
    /// Returns the first runtime error encountered in the subtree.
    pub fn eval(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        trace!(kind = node.kind(), line = ?node.line_number(), "Interpreter: visit node");
        match node {
            Node::Literal { value, .. } => Ok(Some(Value::from(*value))),
            Node::BinaryOp { left, op, right, .. } => {
                let left = self.eval_value(left)?;
                let right = self.eval_value(right)?;
                Ok(Some(Self::eval_binary(*op, left, right)))
            },
            Node::UnaryOp { op, expr, line } => {
                let value = self.eval_value(expr)?;
                Ok(Some(Self::eval_unary(*op, value, *line)?))
            },
            Node::Variable { name, line } => self.eval_variable(name, *line).map(Some),
            Node::Assignment { name, value, .. } => {
                let value = self.eval_value(value)?;
                self.variables.insert(name.clone(), value);
                Ok(None)
            },
            Node::VariableDecl { name, initializer, .. } => {
                if let Some(initializer) = initializer {
                    let value = self.eval_value(initializer)?;
                    self.variables.insert(name.clone(), value);
                }
                Ok(None)
            },
            Node::Compound { children, .. } => {
                for child in children {
                    self.eval(child)?;
                }
                Ok(None)
            },
            Node::ProcedureDecl { .. } | Node::NoOp => Ok(None),
        }
    }

    /// Evaluates an expression and ensures that it produces a value.
    ///
    /// # Errors
    /// Returns the first runtime error in the subtree, or a type mismatch
    /// when `node` is a statement.
    pub fn eval_value(&mut self, node: &Node) -> EvalResult<Value> {
        self.eval(node)?
            .ok_or_else(|| RuntimeError::TypeMismatch { details: format!("{} statement used where a value is required",
                                                                         node.kind()),
                                                        line:    node.line_number()
                                                                     .unwrap_or_default(), })
    }

    /// Looks up a variable by name.
    ///
    /// A variable declared without an initializer has no value until it is
    /// assigned, so reading it is a name error.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.variable(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }
}
