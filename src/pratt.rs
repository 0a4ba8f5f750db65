// SPDX-License-Identifier: Unlicense
//! Binding-power tables for precedence climbing.
//!
//! A table maps token kinds to a [`BindingPower`]. Kinds without an entry are
//! not operators in that position; [`BindingPowerTable::precedence`] reports
//! them as precedence 0, which no real entry can have.

use std::marker::PhantomData;
use std::num::NonZeroU8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingPower {
    pub precedence: NonZeroU8,
    pub assoc: Assoc,
}

impl BindingPower {
    /// # Panics
    /// If `precedence` is zero.
    pub const fn new(precedence: u8, assoc: Assoc) -> Self {
        match NonZeroU8::new(precedence) {
            Some(precedence) => Self { precedence, assoc },
            None => panic!("precedence 0 is reserved for non-operators"),
        }
    }

    pub const fn left(precedence: u8) -> Self {
        Self::new(precedence, Assoc::Left)
    }

    pub const fn right(precedence: u8) -> Self {
        Self::new(precedence, Assoc::Right)
    }

    /// Minimum binding power for the operand that follows this operator.
    ///
    /// A left-associative operator refuses a following operator of equal
    /// precedence, leaving it to the enclosing loop; a right-associative one
    /// sits one step lower so the operand absorbs it.
    pub const fn operand_bp(&self) -> u8 {
        match self.assoc {
            Assoc::Left => self.precedence.get(),
            Assoc::Right => self.precedence.get() - 1,
        }
    }
}

/// Immutable mapping from token kind to binding power.
#[derive(Debug, Clone)]
pub struct BindingPowerTable<K> {
    entries: Vec<Option<BindingPower>>,
    _kind: PhantomData<fn(K)>,
}

impl<K: Copy + Into<usize>> BindingPowerTable<K> {
    pub fn new(entries: impl IntoIterator<Item = (K, BindingPower)>) -> Self {
        let mut table = Vec::new();
        for (kind, bp) in entries {
            let index = kind.into();
            if table.len() <= index {
                table.resize(index + 1, None);
            }
            table[index] = Some(bp);
        }
        Self {
            entries: table,
            _kind: PhantomData,
        }
    }

    pub fn get(&self, kind: K) -> Option<BindingPower> {
        self.entries.get(kind.into()).copied().flatten()
    }

    /// Precedence of `kind`, or 0 if it is not an operator here.
    pub fn precedence(&self, kind: K) -> u8 {
        self.get(kind).map_or(0, |bp| bp.precedence.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Plus = 0,
        Caret = 1,
        Word = 7,
    }

    impl From<Op> for usize {
        fn from(op: Op) -> usize {
            op as usize
        }
    }

    #[test]
    fn lookups_default_to_not_an_operator() {
        let table = BindingPowerTable::new([
            (Op::Plus, BindingPower::left(1)),
            (Op::Caret, BindingPower::right(3)),
        ]);
        assert_eq!(table.get(Op::Plus), Some(BindingPower::left(1)));
        assert_eq!(table.precedence(Op::Caret), 3);
        assert_eq!(table.precedence(Op::Word), 0);
        assert_eq!(table.get(Op::Word), None);
    }

    #[test]
    fn operand_threshold_follows_associativity() {
        assert_eq!(BindingPower::left(5).operand_bp(), 5);
        assert_eq!(BindingPower::right(8).operand_bp(), 7);
    }

    #[test]
    #[should_panic(expected = "reserved")]
    fn zero_precedence_is_rejected() {
        let _ = BindingPower::left(0);
    }
}
