/// Represents a numeric literal as written in the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal such as `42`.
    Integer(i64),
    /// A 64-bit floating-point literal such as `3.5` or `3.`.
    Float(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// A reference to a type by name, as written after the `:` of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// The type name, e.g. `Int`.
    pub name: String,
    /// Line number in the source code.
    pub line: usize,
}

/// An abstract syntax tree (AST) node.
///
/// The set of variants is closed: the semantic analyzer and the evaluator
/// match on it exhaustively, so adding a node kind forces both walkers to
/// handle it. Every node owns its children and the tree has no sharing.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix `+` or `-`.
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `name = value`.
    Assignment {
        /// The variable being assigned to.
        name:  String,
        /// The value which is being assigned.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A single declarator of a `var` statement, `name: Type (= init)?`.
    VariableDecl {
        /// The declared variable.
        name:        String,
        /// The declared type.
        type_ref:    TypeRef,
        /// Optional initializer expression.
        initializer: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `proc name statement`. The body is kept but never analyzed or run.
    ProcedureDecl {
        /// The procedure name.
        name: String,
        /// The procedure body.
        body: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// An ordered block of statements.
    Compound {
        /// Statements in source order.
        children: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// The empty statement.
    NoOp,
}

impl Node {
    /// Gets the line number from `self`, or `None` for the empty statement.
    /// ## Example
    /// ```
    /// use quill::ast::Node;
    ///
    /// let node = Node::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(node.line_number(), Some(5));
    /// assert_eq!(Node::NoOp.line_number(), None);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> Option<usize> {
        match self {
            Self::Literal { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::Variable { line, .. }
            | Self::Assignment { line, .. }
            | Self::VariableDecl { line, .. }
            | Self::ProcedureDecl { line, .. }
            | Self::Compound { line, .. } => Some(*line),
            Self::NoOp => None,
        }
    }

    /// A short name for the variant, used when tracing tree walks.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Literal { .. } => "Literal",
            Self::BinaryOp { .. } => "BinaryOp",
            Self::UnaryOp { .. } => "UnaryOp",
            Self::Variable { .. } => "Variable",
            Self::Assignment { .. } => "Assignment",
            Self::VariableDecl { .. } => "VariableDecl",
            Self::ProcedureDecl { .. } => "ProcedureDecl",
            Self::Compound { .. } => "Compound",
            Self::NoOp => "NoOp",
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}
