#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors raised by the semantic analyzer.
pub enum SemanticError {
    /// A declaration names a type that is not in the symbol table.
    UnknownType {
        /// The type name as written.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A variable is declared a second time.
    DuplicateIdentifier {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A variable is used before it is declared.
    UndeclaredIdentifier {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl SemanticError {
    /// The identifier the error is about.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::UnknownType { name, .. }
            | Self::DuplicateIdentifier { name, .. }
            | Self::UndeclaredIdentifier { name, .. } => name,
        }
    }
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownType { name, line } => {
                write!(f, "Error on line {line}: Unknown type '{name}'.")
            },
            Self::DuplicateIdentifier { name, line } => {
                write!(f, "Error on line {line}: Duplicate identifier '{name}' found.")
            },
            Self::UndeclaredIdentifier { name, line } => {
                write!(f, "Error on line {line}: Identifier '{name}' not found.")
            },
        }
    }
}

impl std::error::Error for SemanticError {}
