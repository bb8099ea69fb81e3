use std::rc::Rc;

/// A named entity known to the semantic analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    /// A primitive type registered when the table is created.
    BuiltinType {
        /// The type name, e.g. `Int`.
        name: String,
    },
    /// A declared variable.
    Variable {
        /// The variable name.
        name:          String,
        /// The builtin type symbol the declaration resolved to.
        declared_type: Rc<Self>,
    },
}

impl Symbol {
    /// Creates a builtin type symbol.
    #[must_use]
    pub fn builtin(name: impl Into<String>) -> Self {
        Self::BuiltinType { name: name.into() }
    }

    /// The name the symbol is registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::BuiltinType { name } | Self::Variable { name, .. } => name,
        }
    }

    /// The symbol's type, `None` for type symbols themselves.
    #[must_use]
    pub fn declared_type(&self) -> Option<&Self> {
        match self {
            Self::BuiltinType { .. } => None,
            Self::Variable { declared_type, .. } => Some(declared_type.as_ref()),
        }
    }

    /// Whether the symbol names a builtin type.
    #[must_use]
    pub const fn is_type(&self) -> bool {
        matches!(self, Self::BuiltinType { .. })
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BuiltinType { name } => write!(f, "BuiltinTypeSymbol(name='{name}')"),
            Self::Variable { name, declared_type } => {
                write!(f, "VarSymbol(name='{name}', type='{}')", declared_type.name())
            },
        }
    }
}
