use super::{
    expr::Expression,
    token::{Operator, Token},
};
use crate::error::{ErrorKind, PResult};

/// Deepest tree the builder accepts. Evaluating, printing and dropping a tree
/// all recurse once per level, so the bound keeps them inside the stack.
pub(crate) const MAX_DEPTH: usize = 2048;

/// A built subtree together with its height.
type Node = (Box<Expression>, usize);

/// Builds an expression tree from postfix tokens in a single pass.
pub(crate) struct Parser {
    stack: Vec<Node>,
}

impl Parser {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, token: Token) -> PResult<()> {
        match token {
            Token::Number(text) => {
                let value = Self::parse_number(text)?;
                self.stack.push((Box::new(Expression::Number(value)), 1));
            }
            Token::Op(op) => {
                let ((lhs, lhs_depth), (rhs, rhs_depth)) = self.pop_operands(op)?;
                let depth = lhs_depth.max(rhs_depth) + 1;
                if depth > MAX_DEPTH {
                    return Err(ErrorKind::NestingTooDeep(MAX_DEPTH));
                }
                self.stack
                    .push((Box::new(Expression::Binary { lhs, op, rhs }), depth));
            }
            Token::LParen => return Err(ErrorKind::UnbalancedParenthesis('(')),
            Token::RParen => return Err(ErrorKind::UnbalancedParenthesis(')')),
        }
        Ok(())
    }

    pub fn finish(mut self) -> PResult<Box<Expression>> {
        let (root, _) = self.stack.pop().ok_or(ErrorKind::EmptyExpression)?;
        if !self.stack.is_empty() {
            return Err(ErrorKind::TrailingOperands(self.stack.len() + 1));
        }
        Ok(root)
    }

    // The right operand sits on top of the stack.
    fn pop_operands(&mut self, op: Operator) -> PResult<(Node, Node)> {
        let rhs = self.stack.pop().ok_or(ErrorKind::InsufficientOperands(op))?;
        let lhs = self.stack.pop().ok_or(ErrorKind::InsufficientOperands(op))?;
        Ok((lhs, rhs))
    }

    // A literal without digits reads as zero, like `atof`.
    fn parse_number(text: &str) -> PResult<f64> {
        match text {
            "." => Ok(0.0),
            "-." => Ok(-0.0),
            _ => text
                .parse::<f64>()
                .map_err(|_| ErrorKind::MalformedNumber(text.to_string())),
        }
    }
}

pub(crate) fn build_tree(postfix: Vec<Token<'_>>) -> PResult<Box<Expression>> {
    let mut parser = Parser::new();
    for token in postfix {
        parser.push(token)?;
    }
    let root = parser.finish()?;
    log::debug!("tree: {root}");
    Ok(root)
}
