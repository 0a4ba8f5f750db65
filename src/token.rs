// SPDX-License-Identifier: Unlicense
use crate::error::LexError;
use crate::source::{is_whitespace, Cursor, Kind, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    Eof,
    Literal,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    LParen,
    RParen,
}

impl Kind for TokenKind {
    const EOF: Self = TokenKind::Eof;
}

impl From<TokenKind> for usize {
    fn from(kind: TokenKind) -> usize {
        kind as usize
    }
}

pub type CalcToken<'s> = Token<'s, TokenKind>;

/// Tokenizer for the calculator grammar.
pub fn next_token<'s>(cursor: &mut Cursor<'s>) -> Result<CalcToken<'s>, LexError> {
    cursor.bump_while(is_whitespace);

    let begin = cursor.offset();
    let Some(c) = cursor.peek() else {
        return Ok(Token::new(cursor.view_from(begin), TokenKind::Eof));
    };

    let kind = match c {
        b'0'..=b'9' => {
            cursor.bump_while(|b| b.is_ascii_digit());
            return Ok(Token::new(cursor.view_from(begin), TokenKind::Literal));
        }
        b'+' => TokenKind::Add,
        b'-' => TokenKind::Sub,
        b'/' => TokenKind::Div,
        b'%' => TokenKind::Mod,
        b'(' => TokenKind::LParen,
        b')' => TokenKind::RParen,
        b'*' => {
            cursor.bump();
            if cursor.peek() == Some(b'*') {
                cursor.bump();
                return Ok(Token::new(cursor.view_from(begin), TokenKind::Pow));
            }
            return Ok(Token::new(cursor.view_from(begin), TokenKind::Mul));
        }
        _ => {
            return Err(LexError::UnknownCharacter {
                ch: cursor.peek_char().unwrap_or(char::REPLACEMENT_CHARACTER),
                position: cursor.position(),
            })
        }
    };
    cursor.bump();
    Ok(Token::new(cursor.view_from(begin), kind))
}
