use std::{iter::Peekable, str::CharIndices};

use super::token::{Operator, Token};
use crate::error::{ErrorKind, PResult};

pub(crate) struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
    // True where a literal may start: at the beginning, after an operator, after `(`.
    expect_value: bool,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = PResult<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        let (off, c) = self.chars.next()?;

        let token = match c {
            '(' => Token::LParen,
            ')' => Token::RParen,
            '-' if self.expect_value && self.next_is_number_part() => self.read_number(off),
            c if Self::is_number_part(c) => self.read_number(off),
            c => match Operator::from_char(c) {
                Some(op) => Token::Op(op),
                None => return Some(Err(ErrorKind::UnknownCharacter { ch: c, offset: off })),
            },
        };

        self.expect_value = matches!(token, Token::Op(_) | Token::LParen);
        Some(Ok(token))
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
            expect_value: true,
        }
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn slice_until<P>(&mut self, from_off: usize, predicate: P) -> &'src str
    where
        P: Fn(char) -> bool,
    {
        while let Some(&(off, c)) = self.chars.peek() {
            if predicate(c) {
                return &self.src[from_off..off];
            }
            self.bump();
        }
        &self.src[from_off..self.src.len()]
    }

    // The run is only classified here; `1.2.3` is rejected when the tree is built.
    fn read_number(&mut self, from_off: usize) -> Token<'src> {
        Token::Number(self.slice_until(from_off, |c| !Self::is_number_part(c)))
    }

    fn next_is_number_part(&mut self) -> bool {
        matches!(self.chars.peek(), Some(&(_, c)) if Self::is_number_part(c))
    }

    fn is_number_part(c: char) -> bool {
        c.is_ascii_digit() || c == '.'
    }
}

pub(crate) fn tokenize(src: &str) -> PResult<Vec<Token<'_>>> {
    let tokens = Lexer::new(src).collect::<PResult<Vec<_>>>()?;
    log::debug!("tokens: {tokens:?}");
    Ok(tokens)
}
