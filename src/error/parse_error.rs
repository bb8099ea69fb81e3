use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a character that starts no token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The 1-based column of the character.
        column:    usize,
    },
    /// An integer literal does not fit in 64 bits.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The current token does not match what the grammar requires.
    UnexpectedToken {
        /// The construct the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl ParseError {
    /// Distinguishes lexical failures from grammar failures.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCharacter { .. } | Self::LiteralTooLarge { .. } => ErrorKind::Lexical,
            Self::UnexpectedToken { .. } => ErrorKind::Syntax,
        }
    }

    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidCharacter { line, .. }
            | Self::LiteralTooLarge { line, .. }
            | Self::UnexpectedToken { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character,
                                     line,
                                     column, } => write!(f,
                                                         "Error on line {line}, column {column}: Invalid character '{character}'."),
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Integer literal {literal} is too large.")
            },
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => write!(f,
                                                      "Error on line {line}: Invalid syntax. Expected {expected}, found {found}."),
        }
    }
}

impl std::error::Error for ParseError {}
