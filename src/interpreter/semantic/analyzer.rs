use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    ast::{Node, TypeRef},
    error::SemanticError,
    interpreter::semantic::{symbol::Symbol, table::SymbolTable},
};

/// Result type used by the semantic analyzer.
pub type SemanticResult<T> = Result<T, SemanticError>;

/// Walks a tree checking that every variable is declared exactly once and
/// before it is used, filling a [`SymbolTable`] as it goes.
///
/// Procedure bodies are not analyzed.
#[derive(Debug, Default)]
pub struct SemanticAnalyzer {
    table: SymbolTable,
}

impl SemanticAnalyzer {
    /// Creates an analyzer over a table holding only the builtin types.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzes a whole tree and returns the populated table.
    ///
    /// # Errors
    /// Returns the first semantic error found.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::{
    ///     lexer::Lexer, parser::core::Parser, semantic::analyzer::SemanticAnalyzer,
    /// };
    ///
    /// let root = Parser::new(Lexer::new("main { var x: Int = 1; x = x + 1 }")).unwrap()
    ///                                                                         .parse()
    ///                                                                         .unwrap();
    /// let table = SemanticAnalyzer::new().analyze(&root).unwrap();
    /// assert_eq!(table.lookup("x").unwrap().declared_type().unwrap().name(), "Int");
    /// ```
    pub fn analyze(mut self, root: &Node) -> SemanticResult<SymbolTable> {
        self.visit(root)?;
        debug!(symbols = self.table.len(), "Semantic analysis finished");
        Ok(self.table)
    }

    /// The table as populated so far.
    #[must_use]
    pub const fn symbol_table(&self) -> &SymbolTable {
        &self.table
    }

    /// Checks `node` and its subtree against the table.
    ///
    /// # Errors
    /// Returns the first semantic error found in the subtree.
    pub fn visit(&mut self, node: &Node) -> SemanticResult<()> {
        trace!(kind = node.kind(), line = ?node.line_number(), "SemanticAnalyzer: visit node");
        match node {
            Node::Compound { children, .. } => {
                for child in children {
                    self.visit(child)?;
                }
                Ok(())
            },
            Node::VariableDecl { name,
                                 type_ref,
                                 initializer,
                                 line, } => {
                let declared_type = self.resolve_type(type_ref)?;
                if self.table.lookup(name).is_some() {
                    return Err(SemanticError::DuplicateIdentifier { name: name.clone(),
                                                                    line: *line, });
                }
                self.table.insert(Symbol::Variable { name: name.clone(),
                                                     declared_type });
                if let Some(initializer) = initializer {
                    self.visit(initializer)?;
                }
                Ok(())
            },
            Node::Variable { name, line } => self.check_declared(name, *line),
            Node::Assignment { name, value, line } => {
                self.visit(value)?;
                self.check_declared(name, *line)
            },
            Node::BinaryOp { left, right, .. } => {
                self.visit(left)?;
                self.visit(right)
            },
            Node::UnaryOp { expr, .. } => self.visit(expr),
            Node::ProcedureDecl { .. } | Node::Literal { .. } | Node::NoOp => Ok(()),
        }
    }

    /// Resolves a declaration's type name to a builtin type symbol.
    fn resolve_type(&self, type_ref: &TypeRef) -> SemanticResult<Rc<Symbol>> {
        match self.table.lookup(&type_ref.name) {
            Some(symbol) if symbol.is_type() => Ok(symbol),
            _ => Err(SemanticError::UnknownType { name: type_ref.name.clone(),
                                                  line: type_ref.line, }),
        }
    }

    fn check_declared(&self, name: &str, line: usize) -> SemanticResult<()> {
        if self.table.lookup(name).is_none() {
            return Err(SemanticError::UndeclaredIdentifier { name: name.to_string(),
                                                             line });
        }
        Ok(())
    }
}
