use logos::Logos;
use tracing::trace;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Literal tokens carry their value; every other token is identified by its
/// variant alone.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexingError)]
#[logos(skip r"[\p{White_Space}&&[^\n]]+")]
pub enum Token {
    /// Floating-point literal tokens, such as `3.5` or `3.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `main`
    #[token("main")]
    Main,
    /// `var`
    #[token("var")]
    Var,
    /// `proc`
    #[token("proc")]
    Proc,
    /// `Int`
    #[token("Int")]
    IntType,
    /// `Float`
    #[token("Float")]
    FloatType,
    /// Identifier tokens; variable or procedure names such as `x`,
    /// `total_2` or `déjà`. Any Unicode letter may start one.
    #[regex(r"\p{L}[\p{L}\p{Nd}_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// End of input. Never matched; produced by [`Lexer::next_token`] once
    /// the source is exhausted.
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float(v) => write!(f, "float literal {v:?}"),
            Self::Integer(v) => write!(f, "integer literal {v}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Main => write!(f, "'main'"),
            Self::Var => write!(f, "'var'"),
            Self::Proc => write!(f, "'proc'"),
            Self::IntType => write!(f, "'Int'"),
            Self::FloatType => write!(f, "'Float'"),
            Self::Comment => write!(f, "comment"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::Equals => write!(f, "'='"),
            Self::Semicolon => write!(f, "';'"),
            Self::Colon => write!(f, "':'"),
            Self::Comma => write!(f, "','"),
            Self::Dot => write!(f, "'.'"),
            Self::NewLine => write!(f, "newline"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// Why the underlying scanner rejected a slice of input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexingError {
    /// No token starts with this character.
    #[default]
    InvalidCharacter,
    /// A digit run does not fit in an `i64`.
    IntegerTooLarge,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset at which that line
/// starts, so errors can report both line and column.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// A trailing `.` with no fractional digits is accepted, so `3.` is `3.0`.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexingError> {
    lex.slice()
       .parse()
       .map_err(|_| LexingError::IntegerTooLarge)
}

/// A token together with the source line it starts on.
pub type Spanned = (Token, usize);

/// Turns source text into a lazy stream of tokens.
///
/// Each call to [`Lexer::next_token`] scans just far enough to produce one
/// token. Whitespace and `#` comments are skipped. Once the input is
/// exhausted the lexer keeps returning [`Token::Eof`].
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`. Empty input is valid and yields only
    /// [`Token::Eof`].
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Token::lexer_with_extras(source, LexerExtras::default()) }
    }

    /// Returns the next token and its line.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidCharacter` for a character that starts no
    /// token and `ParseError::LiteralTooLarge` for an integer literal that
    /// does not fit in 64 bits.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("x = 1");
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("x".to_string()), 1));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Equals, 1));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Integer(1), 1));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Eof, 1));
    /// ```
    pub fn next_token(&mut self) -> Result<Spanned, ParseError> {
        let next = self.inner.next();
        let line = self.inner.extras.line;
        match next {
            Some(Ok(token)) => {
                trace!(%token, line, "Lexed token");
                Ok((token, line))
            },
            Some(Err(LexingError::IntegerTooLarge)) => {
                Err(ParseError::LiteralTooLarge { literal: self.inner.slice().to_string(),
                                                  line })
            },
            Some(Err(LexingError::InvalidCharacter)) => {
                let span = self.inner.span();
                let character = self.inner.slice().chars().next().unwrap_or_default();
                let column = self.inner.source()[self.inner.extras.line_start..span.start]
                                 .chars()
                                 .count()
                             + 1;
                Err(ParseError::InvalidCharacter { character,
                                                   line,
                                                   column })
            },
            None => Ok((Token::Eof, line)),
        }
    }
}

/// Collects every token of `source`, including the trailing [`Token::Eof`].
///
/// # Errors
/// Propagates the first error reported by [`Lexer::next_token`].
///
/// # Example
/// ```
/// use quill::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("12 + 3.5").unwrap()
///                                              .into_iter()
///                                              .map(|(token, _)| token)
///                                              .collect();
/// assert_eq!(tokens,
///            vec![Token::Integer(12), Token::Plus, Token::Float(3.5), Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let spanned = lexer.next_token()?;
        let done = spanned.0 == Token::Eof;
        tokens.push(spanned);
        if done {
            return Ok(tokens);
        }
    }
}
