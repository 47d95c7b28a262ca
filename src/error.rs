use std::{error::Error, fmt};

use crate::syntax::Operator;

#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum ErrorKind {
    UnknownCharacter { ch: char, offset: usize },
    MalformedNumber(String),
    /// Carries the paren that has no partner.
    UnbalancedParenthesis(char),
    EmptyExpression,
    InsufficientOperands(Operator),
    /// Carries the number of roots left on the stack.
    TrailingOperands(usize),
    /// Carries the deepest tree the builder accepts.
    NestingTooDeep(usize),
    DivisionByZero,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnknownCharacter { ch, offset } => {
                write!(f, "unknown character {ch:?} at offset {offset}")
            }
            Self::MalformedNumber(text) => write!(f, "malformed number `{text}`"),
            Self::UnbalancedParenthesis(paren) => write!(f, "unbalanced parenthesis `{paren}`"),
            Self::EmptyExpression => write!(f, "empty expression"),
            Self::InsufficientOperands(op) => {
                write!(f, "operator `{op}` is missing an operand")
            }
            Self::TrailingOperands(count) => {
                write!(f, "{count} operands left without an operator")
            }
            Self::NestingTooDeep(limit) => {
                write!(f, "expression nests deeper than {limit} levels")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl Error for ErrorKind {}

pub(crate) type PResult<T> = Result<T, ErrorKind>;
