use std::{collections::BTreeMap, rc::Rc};

use tracing::trace;

use crate::interpreter::semantic::symbol::Symbol;

/// Names of the types every table starts with.
pub const BUILTIN_TYPES: &[&str] = &["Int", "Float"];

/// Mapping from name to symbol with a single global scope.
///
/// Names are unique: inserting a symbol replaces any symbol of the same
/// name. Rejecting duplicates is the analyzer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: BTreeMap<String, Rc<Symbol>>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Creates a table holding only the builtin type symbols.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::semantic::table::SymbolTable;
    ///
    /// let table = SymbolTable::new();
    /// assert!(table.lookup("Int").is_some_and(|s| s.is_type()));
    /// assert!(table.lookup("x").is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut table = Self { symbols: BTreeMap::new() };
        for name in BUILTIN_TYPES {
            table.insert(Symbol::builtin(*name));
        }
        table
    }

    /// Registers `symbol`, replacing any symbol with the same name.
    pub fn insert(&mut self, symbol: Symbol) -> Rc<Symbol> {
        trace!(%symbol, "SymbolTable: insert");
        let symbol = Rc::new(symbol);
        self.symbols
            .insert(symbol.name().to_string(), Rc::clone(&symbol));
        symbol
    }

    /// Finds the symbol registered under `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Rc<Symbol>> {
        trace!(name, "SymbolTable: lookup");
        self.symbols.get(name).cloned()
    }

    /// Number of symbols, builtins included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false` in practice, since builtins are never removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates over the symbols in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values().map(|symbol| &**symbol)
    }
}

impl std::fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SymbolTable contents")?;
        writeln!(f, "--------------------")?;
        for (name, symbol) in &self.symbols {
            writeln!(f, " * {name} = {symbol}")?;
        }
        write!(f, "--------------------")
    }
}
