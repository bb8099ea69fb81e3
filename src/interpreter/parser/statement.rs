use tracing::trace;

use crate::{
    ast::{Node, TypeRef},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// The statement kind is chosen from the current token alone:
    /// - `{` starts a compound block,
    /// - an identifier starts an assignment,
    /// - `var` starts a declaration list,
    /// - `proc` starts a procedure declaration,
    /// - anything else is the empty statement and consumes nothing.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Node> {
        trace!(token = %self.current(), "Parsing statement");
        match self.current() {
            Token::LBrace => self.parse_compound(),
            Token::Identifier(_) => self.parse_assignment(),
            Token::Var => self.parse_var_decl_statement(),
            Token::Proc => self.parse_procedure_decl(),
            _ => Ok(Node::NoOp),
        }
    }

    /// Parses `"{" statement (";" statement)* "}"`.
    fn parse_compound(&mut self) -> ParseResult<Node> {
        let line = self.eat(&Token::LBrace)?;
        let mut children = vec![self.parse_statement()?];
        while self.check(&Token::Semicolon) {
            self.advance()?;
            children.push(self.parse_statement()?);
        }
        if !self.check(&Token::RBrace) {
            return Err(self.unexpected("';' or '}'"));
        }
        self.advance()?;
        Ok(Node::Compound { children, line })
    }

    /// Parses `ID "=" expr`.
    fn parse_assignment(&mut self) -> ParseResult<Node> {
        let (name, line) = self.identifier("variable name")?;
        self.eat(&Token::Equals)?;
        let value = self.parse_expr()?;
        Ok(Node::Assignment { name,
                              value: Box::new(value),
                              line })
    }

    /// Parses `"var" var_decl ("," var_decl)*`.
    ///
    /// The declarators are wrapped in a compound node, one
    /// [`Node::VariableDecl`] each, in source order.
    fn parse_var_decl_statement(&mut self) -> ParseResult<Node> {
        let line = self.eat(&Token::Var)?;
        let mut children = vec![self.parse_var_decl()?];
        while self.check(&Token::Comma) {
            self.advance()?;
            children.push(self.parse_var_decl()?);
        }
        Ok(Node::Compound { children, line })
    }

    /// Parses `ID ":" type_spec ("=" expr)?`.
    fn parse_var_decl(&mut self) -> ParseResult<Node> {
        let (name, line) = self.identifier("variable name")?;
        self.eat(&Token::Colon)?;
        let type_ref = self.parse_type_spec()?;
        let initializer = if self.check(&Token::Equals) {
            self.advance()?;
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        Ok(Node::VariableDecl { name,
                                type_ref,
                                initializer,
                                line })
    }

    /// Parses `"Int" | "Float"`.
    fn parse_type_spec(&mut self) -> ParseResult<TypeRef> {
        let name = match self.current() {
            Token::IntType => "Int",
            Token::FloatType => "Float",
            _ => return Err(self.unexpected("type name 'Int' or 'Float'")),
        };
        let (_, line) = self.advance()?;
        Ok(TypeRef { name: name.to_string(),
                     line })
    }

    /// Parses `"proc" ID statement`.
    fn parse_procedure_decl(&mut self) -> ParseResult<Node> {
        let line = self.eat(&Token::Proc)?;
        let (name, _) = self.identifier("procedure name")?;
        let body = self.parse_statement()?;
        Ok(Node::ProcedureDecl { name,
                                 body: Box::new(body),
                                 line })
    }
}
