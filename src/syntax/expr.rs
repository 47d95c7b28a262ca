use std::fmt;

use super::token::Operator;

/// Each `Binary` node owns both of its children; the tree drops with its root.
#[derive(Debug, PartialEq, Clone)]
pub(crate) enum Expression {
    Number(f64),
    Binary {
        lhs: Box<Expression>,
        op: Operator,
        rhs: Box<Expression>,
    },
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Number(v) => write!(f, "{v}"),
            Expression::Binary { lhs, op, rhs } => write!(f, "({lhs}{op}{rhs})"),
        }
    }
}
