// SPDX-License-Identifier: Unlicense
//! S-expressions rendered as Graphviz DOT.
//!
//! The grammar is lists headed by an identifier, e.g. `(add (mul a b) c)`.
//! Each top-level list becomes one `subgraph clusterN`, with an edge from
//! every list to each of its children.

use crate::arena::{Id, SyntaxArena};
use crate::error::{Error, LexError, Result, SyntaxError};
use crate::lexer::Lexer;
use crate::source::{is_whitespace, Cursor, Kind, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,
    LParen,
    RParen,
    Identifier,
}

impl Kind for TokenKind {
    const EOF: Self = TokenKind::Eof;
}

pub type GraphToken<'s> = Token<'s, TokenKind>;

pub fn next_token<'s>(cursor: &mut Cursor<'s>) -> Result<GraphToken<'s>, LexError> {
    cursor.bump_while(is_whitespace);
    let begin = cursor.offset();
    let kind = match cursor.peek() {
        None => TokenKind::Eof,
        Some(b'(') => {
            cursor.bump();
            TokenKind::LParen
        }
        Some(b')') => {
            cursor.bump();
            TokenKind::RParen
        }
        Some(_) => {
            cursor.bump_while(|b| !is_whitespace(b) && b != b'(' && b != b')');
            TokenKind::Identifier
        }
    };
    Ok(Token::new(cursor.view_from(begin), kind))
}

#[derive(Debug, Clone)]
pub enum Node<'s> {
    List {
        op: GraphToken<'s>,
        children: Vec<NodeId<'s>>,
    },
    Identifier(GraphToken<'s>),
    /// `()`
    Empty,
}

pub type NodeId<'s> = Id<Node<'s>>;
pub type Arena<'s> = SyntaxArena<Node<'s>>;

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

    pub fn parse_list(&mut self) -> Result<NodeId<'s>> {
        let open = self.lexer.advance()?;
        if open != TokenKind::LParen {
            return Err(SyntaxError::expected("`(`", &open).into());
        }

        let op = self.lexer.advance()?;
        if op == TokenKind::RParen {
            return Ok(self.arena.add(Node::Empty));
        }
        if op != TokenKind::Identifier {
            return Err(SyntaxError::expected("an identifier", &op).into());
        }

        let mut children = Vec::new();
        loop {
            let next = *self.lexer.peek(0);
            match next.kind {
                TokenKind::LParen => children.push(self.parse_list()?),
                TokenKind::Identifier => {
                    let tok = self.lexer.advance()?;
                    children.push(self.arena.add(Node::Identifier(tok)));
                }
                TokenKind::RParen | TokenKind::Eof => break,
            }
        }

        if self.lexer.eat(TokenKind::RParen)?.is_none() {
            return Err(SyntaxError::expected("`)`", self.lexer.peek(0)).into());
        }
        Ok(self.arena.add(Node::List { op, children }))
    }

    pub fn parse_program(&mut self) -> Result<Vec<NodeId<'s>>> {
        let mut roots = Vec::new();
        while !self.lexer.peek(0).is_eof() {
            roots.push(self.parse_list()?);
        }
        Ok(roots)
    }

    pub fn finish(self) -> Arena<'s> {
        self.arena
    }
}

pub fn parse(source: &str) -> Result<(Arena<'_>, Vec<NodeId<'_>>)> {
    let mut parser = Parser::new(source)?;
    let roots = parser.parse_program()?;
    Ok((parser.finish(), roots))
}

struct Renderer<'a, 's> {
    arena: &'a Arena<'s>,
    out: String,
    next_id: usize,
}

impl<'s> Renderer<'_, 's> {
    fn line(&mut self, indent: usize, text: &str) {
        for _ in 0..indent {
            self.out.push('\t');
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn vertex(&mut self, indent: usize, label: &str, parent: Option<usize>) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.line(indent, &format!("n{id} [label=\"{}\"];", escape(label)));
        if let Some(parent) = parent {
            self.line(indent, &format!("n{parent} -> n{id};"));
        }
        id
    }

    fn node(&mut self, id: NodeId<'s>, indent: usize, parent: Option<usize>) -> Result<()> {
        let arena = self.arena;
        match arena.get(id).ok_or(Error::ForeignHandle)? {
            Node::List { op, children } => {
                let me = self.vertex(indent, op.view.as_str(), parent);
                for &child in children {
                    self.node(child, indent, Some(me))?;
                }
            }
            Node::Identifier(tok) => {
                self.vertex(indent, tok.view.as_str(), parent);
            }
            Node::Empty => {}
        }
        Ok(())
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Renders the trees rooted at `roots` as one DOT digraph.
pub fn render<'s>(arena: &Arena<'s>, roots: &[NodeId<'s>]) -> Result<String> {
    let mut renderer = Renderer {
        arena,
        out: String::new(),
        next_id: 0,
    };
    renderer.line(0, "digraph {");
    for (i, &root) in roots.iter().enumerate() {
        renderer.line(1, &format!("subgraph cluster{i} {{"));
        renderer.node(root, 2, None)?;
        renderer.line(1, "}");
    }
    renderer.line(0, "}");
    Ok(renderer.out)
}
