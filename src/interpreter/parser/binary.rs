use tracing::trace;

use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// Maps an operator token to its binary operator.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`. Operators are
    /// left-associative, so `10 - 2 - 3` parses as `(10 - 2) - 3`.
    pub(crate) fn parse_expr(&mut self) -> ParseResult<Node> {
        trace!(token = %self.current(), "Parsing expression");
        let mut left = self.parse_term()?;
        while let Some(op) = token_to_binary_operator(self.current())
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let (_, line) = self.advance()?;
            let right = self.parse_term()?;
            left = Node::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }
        Ok(left)
    }

    /// Parses multiplication and division expressions.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`.
    pub(crate) fn parse_term(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_factor()?;
        while let Some(op) = token_to_binary_operator(self.current())
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let (_, line) = self.advance()?;
            let right = self.parse_factor()?;
            left = Node::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }
        Ok(left)
    }
}
