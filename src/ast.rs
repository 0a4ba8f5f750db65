// SPDX-License-Identifier: Unlicense
use crate::arena::SyntaxArena;
use crate::source::View;
use crate::token::CalcToken;

#[derive(Debug, Clone, Copy)]
pub enum Node<'s> {
    Binary { op: CalcToken<'s>, lhs: Id<'s>, rhs: Id<'s> },
    Unary { op: CalcToken<'s>, operand: Id<'s> },
    /// Kept as source text; converted to a number only when evaluated.
    Literal { view: View<'s> },
}

pub type Id<'s> = id_arena::Id<Node<'s>>;
pub type Arena<'s> = SyntaxArena<Node<'s>>;
