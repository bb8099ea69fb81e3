use crate::{
    ast::{LiteralValue, Node, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor.
    ///
    /// Prefix operators are right-recursive, so `--x` parses as
    /// `-(-x)`, and bind tighter than any binary operator.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | INT
    ///             | FLOAT
    ///             | "(" expr ")"
    ///             | ID
    /// ```
    pub(crate) fn parse_factor(&mut self) -> ParseResult<Node> {
        match self.current() {
            Token::Plus | Token::Minus => {
                let (token, line) = self.advance()?;
                let op = if token == Token::Minus {
                    UnaryOperator::Negate
                } else {
                    UnaryOperator::Plus
                };
                let expr = self.parse_factor()?;
                Ok(Node::UnaryOp { op,
                                   expr: Box::new(expr),
                                   line })
            },
            Token::Integer(value) => {
                let value = LiteralValue::Integer(*value);
                let (_, line) = self.advance()?;
                Ok(Node::Literal { value, line })
            },
            Token::Float(value) => {
                let value = LiteralValue::Float(*value);
                let (_, line) = self.advance()?;
                Ok(Node::Literal { value, line })
            },
            Token::LParen => {
                self.advance()?;
                let expr = self.parse_expr()?;
                self.eat(&Token::RParen)?;
                Ok(expr)
            },
            Token::Identifier(_) => {
                let (name, line) = self.identifier("variable name")?;
                Ok(Node::Variable { name, line })
            },
            _ => Err(self.unexpected("an expression")),
        }
    }
}
