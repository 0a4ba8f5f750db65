// SPDX-License-Identifier: Unlicense
//! Pull-based token stream with a fixed-size lookahead ring.

use crate::error::LexError;
use crate::source::{Cursor, Kind, Token, View};

/// A grammar's tokenizing function.
///
/// It reads exactly one token starting at the cursor (skipping any
/// whitespace before it) and leaves the cursor just past it. At end of input
/// it returns a token of kind [`Kind::EOF`], and keeps doing so on every
/// further call.
pub type Tokenizer<'s, K> = fn(&mut Cursor<'s>) -> Result<Token<'s, K>, LexError>;

/// Tokens on demand, with `N` tokens of lookahead.
///
/// The buffer is filled eagerly on construction, so [`Lexer::peek`] never
/// tokenizes and never fails.
pub struct Lexer<'s, K, const N: usize = 1> {
    cursor: Cursor<'s>,
    next_token: Tokenizer<'s, K>,
    tokens: [Token<'s, K>; N],
    head: usize,
}

impl<'s, K: Kind, const N: usize> Lexer<'s, K, N> {
    pub fn new(source: &'s str, next_token: Tokenizer<'s, K>) -> Result<Self, LexError> {
        assert!(N > 0, "lexer lookahead must be at least one token");

        let placeholder = Token::new(View::empty(source, 0), K::EOF);
        let mut lexer = Self {
            cursor: Cursor::new(source),
            next_token,
            tokens: [placeholder; N],
            head: 0,
        };
        for slot in lexer.tokens.iter_mut() {
            *slot = (lexer.next_token)(&mut lexer.cursor)?;
        }
        Ok(lexer)
    }

    /// The token `n` positions ahead, without consuming anything.
    ///
    /// # Panics
    /// If `n` is not below the lookahead `N`.
    pub fn peek(&self, n: usize) -> &Token<'s, K> {
        assert!(n < N, "peek({n}) beyond lookahead of {N}");
        &self.tokens[(self.head + n) % N]
    }

    /// Consumes the front token and tokenizes one more into its slot.
    pub fn advance(&mut self) -> Result<Token<'s, K>, LexError> {
        let tok = self.tokens[self.head];
        self.tokens[self.head] = (self.next_token)(&mut self.cursor)?;
        self.head = (self.head + 1) % N;
        log::trace!("token {:?} {:?} at {}", tok.kind, tok.view.as_str(), tok.view.begin());
        Ok(tok)
    }

    /// Consumes the front token if it has `kind`.
    pub fn eat(&mut self, kind: K) -> Result<Option<Token<'s, K>>, LexError> {
        if *self.peek(0) == kind {
            self.advance().map(Some)
        } else {
            Ok(None)
        }
    }
}
