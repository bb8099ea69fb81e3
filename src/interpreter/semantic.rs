/// Symbols tracked by the analyzer.
pub mod symbol;

/// The flat, single-scope symbol table.
pub mod table;

/// Declaration-before-use and duplicate-declaration checking.
pub mod analyzer;
