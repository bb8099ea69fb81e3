use std::mem;

use tracing::{debug, trace};

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::lexer::{Lexer, Spanned, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over a [`Lexer`].
///
/// The parser pulls one token at a time and never looks further ahead than
/// the current token. Both entry points consume the parser, so a token
/// stream is parsed exactly once.
///
/// Grammar:
/// ```text
///     program        := MAIN statement EOF
///     statement      := compound | assignment | var_decl_stmt | proc_decl_stmt | empty
///     compound       := "{" statement (";" statement)* "}"
///     var_decl_stmt  := "var" var_decl ("," var_decl)*
///     var_decl       := ID ":" type_spec ("=" expr)?
///     type_spec      := "Int" | "Float"
///     assignment     := ID "=" expr
///     proc_decl_stmt := "proc" ID statement
///     expr           := term (("+" | "-") term)*
///     term           := factor (("*" | "/") factor)*
///     factor         := ("+" | "-") factor | INT | FLOAT | "(" expr ")" | ID
/// ```
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Token,
    line:    usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser and reads the first token.
    ///
    /// # Errors
    /// Fails if the very first token cannot be lexed.
    pub fn new(mut lexer: Lexer<'src>) -> ParseResult<Self> {
        let (current, line) = lexer.next_token()?;
        Ok(Self { lexer,
                  current,
                  line })
    }

    /// Parses a whole program and returns the root of its syntax tree.
    ///
    /// # Errors
    /// Returns the first lexical or syntax error encountered.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::Node,
    ///     interpreter::{lexer::Lexer, parser::core::Parser},
    /// };
    ///
    /// let root = Parser::new(Lexer::new("main { }")).unwrap().parse().unwrap();
    /// assert_eq!(root, Node::Compound { children: vec![Node::NoOp],
    ///                                   line:     1, });
    /// ```
    pub fn parse(mut self) -> ParseResult<Node> {
        self.eat(&Token::Main)?;
        let root = self.parse_statement()?;
        self.expect_end()?;
        debug!("Parsed program");
        Ok(root)
    }

    /// Parses a single expression spanning the whole input, without the
    /// `main` wrapper.
    ///
    /// # Errors
    /// Returns the first lexical or syntax error encountered, including
    /// tokens left over after the expression.
    pub fn parse_expression_only(mut self) -> ParseResult<Node> {
        let expr = self.parse_expr()?;
        self.expect_end()?;
        Ok(expr)
    }

    /// The token under the cursor.
    pub(in crate::interpreter::parser) const fn current(&self) -> &Token {
        &self.current
    }

    /// Moves to the next token and returns the one that was current.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Spanned> {
        let (next, next_line) = self.lexer.next_token()?;
        trace!(consumed = %self.current, line = self.line, "Advancing parser");
        let token = mem::replace(&mut self.current, next);
        let line = mem::replace(&mut self.line, next_line);
        Ok((token, line))
    }

    /// Whether the current token is of the same kind as `token`; payloads
    /// are ignored.
    pub(in crate::interpreter::parser) fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current) == mem::discriminant(token)
    }

    /// Consumes a token of the given kind and returns its line.
    pub(in crate::interpreter::parser) fn eat(&mut self, expected: &Token) -> ParseResult<usize> {
        if self.check(expected) {
            let (_, line) = self.advance()?;
            return Ok(line);
        }
        Err(self.unexpected(expected.to_string()))
    }

    /// Consumes an identifier and returns its name and line.
    pub(in crate::interpreter::parser) fn identifier(&mut self,
                                                     what: &str)
                                                     -> ParseResult<(String, usize)> {
        if let Token::Identifier(name) = &self.current {
            let name = name.clone();
            let (_, line) = self.advance()?;
            return Ok((name, line));
        }
        Err(self.unexpected(what))
    }

    /// Builds a syntax error pointing at the current token.
    pub(in crate::interpreter::parser) fn unexpected(&self,
                                                     expected: impl Into<String>)
                                                     -> ParseError {
        ParseError::UnexpectedToken { expected: expected.into(),
                                      found:    self.current.to_string(),
                                      line:     self.line, }
    }

    fn expect_end(&self) -> ParseResult<()> {
        if self.check(&Token::Eof) {
            Ok(())
        } else {
            Err(self.unexpected(Token::Eof.to_string()))
        }
    }
}
