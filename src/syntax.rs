mod expr;
mod lexer;
mod parser;
mod postfix;
mod token;

pub(crate) use expr::Expression;
pub(crate) use lexer::tokenize;
pub(crate) use parser::{build_tree, MAX_DEPTH};
pub(crate) use postfix::to_postfix;
pub(crate) use token::{Operator, Token};

use crate::error::PResult;

/// Runs the front half of the pipeline: tokenize, reorder, build.
pub(crate) fn parse(src: &str) -> PResult<Box<Expression>> {
    let tokens = tokenize(src)?;
    let postfix = to_postfix(tokens)?;
    build_tree(postfix)
}
