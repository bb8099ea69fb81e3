/// Lexing and parsing errors.
///
/// Defines the errors raised while turning source text into a syntax tree:
/// unrecognized characters, literals that do not fit their type, and tokens
/// that do not match the grammar at the point they were found.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a tree: references to
/// variables without a runtime value, unary operators applied to a value of
/// the wrong type, and integer overflow.
pub mod runtime_error;
/// Semantic errors.
///
/// Contains the errors raised by the semantic analyzer when a program breaks
/// the declaration rules of the language.
pub mod semantic_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use semantic_error::SemanticError;

/// Coarse classification of every failure the pipeline can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An unrecognized character or malformed literal.
    Lexical,
    /// A token that does not fit the grammar.
    Syntax,
    /// A violation of the declaration rules.
    Semantic,
    /// A runtime reference to a variable without a value.
    Name,
    /// An operator applied to a value of the wrong type.
    TypeMismatch,
    /// Integer arithmetic that does not fit in 64 bits.
    Overflow,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Lexical => "LexicalError",
            Self::Syntax => "SyntaxError",
            Self::Semantic => "SemanticError",
            Self::Name => "NameError",
            Self::TypeMismatch => "TypeMismatch",
            Self::Overflow => "OverflowError",
        };
        write!(f, "{kind}")
    }
}

#[derive(Debug)]
/// Any error produced by one of the pipeline stages.
pub enum Error {
    /// Raised by the lexer or the parser.
    Parse(ParseError),
    /// Raised by the semantic analyzer.
    Semantic(SemanticError),
    /// Raised by the interpreter.
    Runtime(RuntimeError),
}

impl Error {
    /// Classifies the error.
    ///
    /// ## Example
    /// ```
    /// use quill::{analyze, error::ErrorKind};
    ///
    /// let err = analyze("main { y = 2 }").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Semantic);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Semantic(_) => ErrorKind::Semantic,
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Semantic(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Semantic(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<SemanticError> for Error {
    fn from(e: SemanticError) -> Self {
        Self::Semantic(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
