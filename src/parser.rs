// SPDX-License-Identifier: Unlicense
//! Pratt parser for the calculator grammar.
//!
//! `parse_expr(bp)` reads one primary (literal, parenthesised expression or
//! prefix operator applied to an operand), then keeps folding infix
//! operators into the left-hand side for as long as their precedence is
//! above `bp`.

use std::sync::LazyLock;

use crate::ast::{Arena, Id, Node};
use crate::error::{Result, SyntaxError};
use crate::lexer::Lexer;
use crate::pratt::{BindingPower, BindingPowerTable};
use crate::token::{next_token, TokenKind};

const PREC_ADD: u8 = 5;
const PREC_MUL: u8 = 6;
const PREC_UNARY: u8 = 7;
const PREC_POW: u8 = 8;

/// Lowest threshold: accepts any operator.
const MIN_BP: u8 = 0;

static INFIX: LazyLock<BindingPowerTable<TokenKind>> = LazyLock::new(|| {
    BindingPowerTable::new([
        (TokenKind::Add, BindingPower::left(PREC_ADD)),
        (TokenKind::Sub, BindingPower::left(PREC_ADD)),
        (TokenKind::Mul, BindingPower::left(PREC_MUL)),
        (TokenKind::Div, BindingPower::left(PREC_MUL)),
        (TokenKind::Mod, BindingPower::left(PREC_MUL)),
        (TokenKind::Pow, BindingPower::right(PREC_POW)),
    ])
});

static PREFIX: LazyLock<BindingPowerTable<TokenKind>> = LazyLock::new(|| {
    BindingPowerTable::new([
        (TokenKind::Add, BindingPower::right(PREC_UNARY)),
        (TokenKind::Sub, BindingPower::right(PREC_UNARY)),
    ])
});

pub struct Parser<'s> {
    lexer: Lexer<'s, TokenKind>,
    arena: Arena<'s>,
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s str) -> Result<Self> {
        Ok(Self {
            lexer: Lexer::new(source, next_token)?,
            arena: Arena::new(),
        })
    }

    fn add(&mut self, node: Node<'s>) -> Id<'s> {
        log::trace!("node #{}: {:?}", self.arena.len(), node);
        self.arena.add(node)
    }

    /// Parses one expression whose operators all bind tighter than `bp`.
    pub fn parse_expr(&mut self, bp: u8) -> Result<Id<'s>> {
        let tok = self.lexer.advance()?;

        let mut lhs = if let Some(prefix) = PREFIX.get(tok.kind) {
            let operand = self.parse_expr(prefix.precedence.get())?;
            self.add(Node::Unary { op: tok, operand })
        } else {
            match tok.kind {
                TokenKind::Literal => self.add(Node::Literal { view: tok.view }),
                TokenKind::LParen => {
                    let inner = self.parse_expr(MIN_BP)?;
                    if self.lexer.eat(TokenKind::RParen)?.is_none() {
                        return Err(SyntaxError::expected("`)`", self.lexer.peek(0)).into());
                    }
                    inner
                }
                _ => return Err(SyntaxError::expected("an expression", &tok).into()),
            }
        };

        loop {
            let op = *self.lexer.peek(0);
            let Some(infix) = INFIX.get(op.kind) else {
                break;
            };
            if infix.precedence.get() <= bp {
                break;
            }

            self.lexer.advance()?;
            let rhs = self.parse_expr(infix.operand_bp())?;
            lhs = self.add(Node::Binary { op, lhs, rhs });
        }

        Ok(lhs)
    }

    /// Parses top-level expressions until end of input.
    pub fn parse_program(&mut self) -> Result<Vec<Id<'s>>> {
        let mut roots = Vec::new();
        while !self.lexer.peek(0).is_eof() {
            roots.push(self.parse_expr(MIN_BP)?);
        }
        Ok(roots)
    }

    pub fn finish(self) -> Arena<'s> {
        self.arena
    }
}

/// Parses every top-level expression in `source`.
pub fn parse(source: &str) -> Result<(Arena<'_>, Vec<Id<'_>>)> {
    let mut parser = Parser::new(source)?;
    let roots = parser.parse_program()?;
    Ok((parser.finish(), roots))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, LexError};
    use crate::printer::print;
    use assert_matches::assert_matches;
    use rstest::rstest;

    fn printed(src: &str) -> Vec<String> {
        let (arena, roots) = parse(src).unwrap();
        roots.iter().map(|&id| print(&arena, id).unwrap()).collect()
    }

    #[rstest]
    #[case("1", "1")]
    #[case("1 + 2 * 3", "( + 1 ( * 2 3 ) )")]
    #[case("1 + (2 * 3)", "( + 1 ( * 2 3 ) )")]
    #[case("(1 + 2) * 3", "( * ( + 1 2 ) 3 )")]
    #[case("2 ** 3 ** 2", "( ** 2 ( ** 3 2 ) )")]
    #[case("10 - 2 - 3", "( - ( - 10 2 ) 3 )")]
    #[case("8 / 4 % 3 * 2", "( * ( % ( / 8 4 ) 3 ) 2 )")]
    #[case("-2 + 3", "( + ( - 2 ) 3 )")]
    #[case("-2 * 3", "( * ( - 2 ) 3 )")]
    #[case("-2 ** 2", "( - ( ** 2 2 ) )")]
    #[case("2 ** -3 ** 2", "( ** 2 ( - ( ** 3 2 ) ) )")]
    #[case("+-+1", "( + ( - ( + 1 ) ) )")]
    #[case("1 - -1", "( - 1 ( - 1 ) )")]
    #[case("((((7))))", "7")]
    #[case("2 * 3 ** 2 + 1", "( + ( * 2 ( ** 3 2 ) ) 1 )")]
    fn precedence_and_associativity(#[case] src: &str, #[case] expected: &str) {
        assert_eq!(printed(src), [expected]);
    }

    #[test]
    fn program_is_a_sequence_of_expressions() {
        assert_eq!(printed("1 + 2\n(3)\n4 ** 5"), ["( + 1 2 )", "3", "( ** 4 5 )"]);
        assert_eq!(printed("1 (2)"), ["1", "2"]);
        assert!(printed("  \n ").is_empty());
    }

    #[test]
    fn parens_leave_no_node_behind() {
        let (arena, roots) = parse("((1))").unwrap();
        assert_eq!(arena.len(), 1);
        assert_matches!(arena[roots[0]], Node::Literal { view } if view.as_str() == "1");
    }

    #[test]
    fn children_live_in_the_same_arena() {
        let (arena, roots) = parse("1 + -2 * 3").unwrap();
        for (_, node) in arena.iter() {
            match *node {
                Node::Binary { lhs, rhs, .. } => {
                    assert!(arena.get(lhs).is_some());
                    assert!(arena.get(rhs).is_some());
                }
                Node::Unary { operand, .. } => assert!(arena.get(operand).is_some()),
                Node::Literal { .. } => {}
            }
        }
        assert_matches!(arena[roots[0]], Node::Binary { op, .. } if op == TokenKind::Add);
    }

    #[rstest]
    #[case("(1 + 2", "1:7: expected `)`, found end of input")]
    #[case("(1 + 2 3)", "1:8: expected `)`, found `3`")]
    #[case("1 +", "1:4: expected an expression, found end of input")]
    #[case(")", "1:1: expected an expression, found `)`")]
    #[case("1 * / 2", "1:5: expected an expression, found `/`")]
    #[case("()", "1:2: expected an expression, found `)`")]
    fn syntax_errors(#[case] src: &str, #[case] message: &str) {
        let err = parse(src).unwrap_err();
        assert_matches!(&err, Error::Syntax(SyntaxError::Expected { .. }));
        assert_eq!(err.to_string(), format!("syntax error: {message}"));
    }

    #[test]
    fn lex_errors_abort_the_parse() {
        assert_matches!(
            parse("1 + @"),
            Err(Error::Lex(LexError::UnknownCharacter { ch: '@', .. }))
        );
    }
}
