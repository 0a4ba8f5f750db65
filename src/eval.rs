// SPDX-License-Identifier: Unlicense
use crate::ast::{Arena, Id, Node};
use crate::error::{Error, Result, SyntaxError};
use crate::token::TokenKind;

/// Evaluates the tree rooted at `id` with `f64` arithmetic.
///
/// Division by zero follows IEEE semantics. Literal text is converted here,
/// so a malformed literal is reported by evaluation, not by parsing.
pub fn evaluate<'s>(arena: &Arena<'s>, id: Id<'s>) -> Result<f64> {
    let value = match *arena.get(id).ok_or(Error::ForeignHandle)? {
        Node::Literal { view } => view
            .as_str()
            .parse::<f64>()
            .map_err(|_| SyntaxError::malformed_literal(&view))?,
        Node::Unary { op, operand } => {
            let operand = evaluate(arena, operand)?;
            match op.kind {
                TokenKind::Add => operand,
                TokenKind::Sub => -operand,
                _ => return Err(SyntaxError::expected("a prefix operator", &op).into()),
            }
        }
        Node::Binary { op, lhs, rhs } => {
            let lhs = evaluate(arena, lhs)?;
            let rhs = evaluate(arena, rhs)?;
            match op.kind {
                TokenKind::Add => lhs + rhs,
                TokenKind::Sub => lhs - rhs,
                TokenKind::Mul => lhs * rhs,
                TokenKind::Div => lhs / rhs,
                TokenKind::Mod => lhs % rhs,
                TokenKind::Pow => lhs.powf(rhs),
                _ => return Err(SyntaxError::expected("an infix operator", &op).into()),
            }
        }
    };
    Ok(value)
}
