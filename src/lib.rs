// SPDX-License-Identifier: Unlicense
//! A small parsing toolkit and the calculator built on it.
//!
//! The toolkit is grammar-agnostic:
//! - [`source`]: zero-copy views, tokens and the cursor tokenizers advance.
//! - [`lexer`]: a pull lexer with a fixed lookahead ring over any tokenizer.
//! - [`arena`]: append-only node storage with stable handles.
//! - [`pratt`]: binding-power tables for precedence climbing.
//!
//! The calculator ([`token`], [`ast`], [`parser`], [`eval`], [`printer`],
//! [`driver`]) parses `+ - * / % **` with unary signs and parentheses. The
//! [`graph`] module reuses the same toolkit for S-expressions, and
//! [`genexpr`] produces random calculator input.

pub mod arena;
pub mod ast;
pub mod driver;
pub mod error;
pub mod eval;
pub mod genexpr;
pub mod graph;
pub mod lexer;
pub mod parser;
pub mod pratt;
pub mod printer;
pub mod source;
pub mod token;

pub use error::{Error, LexError, SyntaxError};
