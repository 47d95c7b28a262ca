use super::token::{Assoc, Operator, Precedence, Token};
use crate::error::{ErrorKind, PResult};

/// Entries waiting on the operator stack. Parens never reach the output.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Op(Operator),
    LParen,
}

/// Reorders infix tokens into postfix order (shunting-yard).
pub(crate) fn to_postfix(tokens: Vec<Token<'_>>) -> PResult<Vec<Token<'_>>> {
    let mut stack: Vec<Pending> = Vec::new();
    let mut output = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Op(op) => {
                let (prec, assoc) = op.get();

                while let Some(&Pending::Op(top)) = stack.last() {
                    if !pops_before(top, prec, assoc) {
                        break;
                    }
                    stack.pop();
                    output.push(Token::Op(top));
                }
                stack.push(Pending::Op(op));
            }
            Token::LParen => stack.push(Pending::LParen),
            Token::RParen => loop {
                match stack.pop() {
                    Some(Pending::Op(op)) => output.push(Token::Op(op)),
                    Some(Pending::LParen) => break,
                    None => return Err(ErrorKind::UnbalancedParenthesis(')')),
                }
            },
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Op(op) => output.push(Token::Op(op)),
            Pending::LParen => return Err(ErrorKind::UnbalancedParenthesis('(')),
        }
    }

    log::debug!("postfix: {output:?}");
    Ok(output)
}

fn pops_before(top: Operator, prec: Precedence, assoc: Assoc) -> bool {
    let top_prec = top.precedence();
    top_prec > prec || (top_prec == prec && assoc == Assoc::Left)
}
