// SPDX-License-Identifier: Unlicense
//! Fully parenthesised prefix dump of a calculator tree.
//!
//! `1 + 2 * 3` prints as `( + 1 ( * 2 3 ) )`. The output shows the grouping
//! the parser chose; it is not valid calculator input.

use crate::ast::{Arena, Id, Node};
use crate::error::{Error, Result};

pub fn print<'s>(arena: &Arena<'s>, id: Id<'s>) -> Result<String> {
    let mut out = String::new();
    print_impl(arena, id, &mut out)?;
    Ok(out)
}

fn print_impl<'s>(arena: &Arena<'s>, id: Id<'s>, out: &mut String) -> Result<()> {
    match *arena.get(id).ok_or(Error::ForeignHandle)? {
        Node::Binary { op, lhs, rhs } => {
            out.push_str("( ");
            out.push_str(op.view.as_str());
            out.push(' ');
            print_impl(arena, lhs, out)?;
            out.push(' ');
            print_impl(arena, rhs, out)?;
            out.push_str(" )");
        }
        Node::Unary { op, operand } => {
            out.push_str("( ");
            out.push_str(op.view.as_str());
            out.push(' ');
            print_impl(arena, operand, out)?;
            out.push_str(" )");
        }
        Node::Literal { view } => out.push_str(view.as_str()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn literal_text_is_printed_verbatim() -> anyhow::Result<()> {
        let (arena, roots) = parse("007 + 1")?;
        assert_eq!(print(&arena, roots[0])?, "( + 007 1 )");
        Ok(())
    }

    #[test]
    fn handles_from_another_arena_are_an_error() -> anyhow::Result<()> {
        let (_, other_roots) = parse("1")?;
        let (arena, _) = parse("2 + 3")?;
        assert_eq!(print(&arena, other_roots[0]), Err(Error::ForeignHandle));
        Ok(())
    }
}
