// SPDX-License-Identifier: Unlicense
//! Zero-copy views into a source buffer, and the tokens built on them.

use std::fmt;

/// A 1-based line/column location, plus the byte offset it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Locates `offset` in `source`. Columns count characters, not bytes.
    pub fn locate(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = &source.as_bytes()[..offset];
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        let column = String::from_utf8_lossy(&before[line_start..]).chars().count() + 1;
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A byte range `[begin, end)` of a borrowed source buffer.
///
/// Views never own text; they live exactly as long as the buffer they point
/// into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View<'s> {
    source: &'s str,
    begin: usize,
    end: usize,
}

impl<'s> View<'s> {
    /// # Panics
    /// If the range is out of bounds or not on character boundaries.
    pub fn new(source: &'s str, begin: usize, end: usize) -> Self {
        assert!(
            begin <= end && source.is_char_boundary(begin) && source.is_char_boundary(end),
            "invalid view {begin}..{end} over a source of {} bytes",
            source.len()
        );
        Self { source, begin, end }
    }

    /// An empty view at `offset`.
    pub fn empty(source: &'s str, offset: usize) -> Self {
        Self::new(source, offset, offset)
    }

    pub fn begin(&self) -> usize {
        self.begin
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    pub fn as_str(&self) -> &'s str {
        &self.source[self.begin..self.end]
    }

    /// Where this view starts.
    pub fn position(&self) -> Position {
        Position::locate(self.source, self.begin)
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token kind tag.
///
/// Every grammar has a distinguished end-of-input kind, which the lexer uses
/// to pre-fill its lookahead buffer and which parse loops stop on.
pub trait Kind: Copy + PartialEq + fmt::Debug {
    const EOF: Self;
}

/// A view tagged with its lexical category.
#[derive(Debug, Clone, Copy)]
pub struct Token<'s, K> {
    pub view: View<'s>,
    pub kind: K,
}

impl<'s, K: Kind> Token<'s, K> {
    pub fn new(view: View<'s>, kind: K) -> Self {
        Self { view, kind }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == K::EOF
    }

    /// Human-readable description for diagnostics.
    pub fn describe(&self) -> String {
        if self.is_eof() {
            "end of input".to_string()
        } else {
            format!("`{}`", self.view)
        }
    }
}

/// A token compares equal to a bare kind when it has that kind.
impl<K: PartialEq> PartialEq<K> for Token<'_, K> {
    fn eq(&self, kind: &K) -> bool {
        self.kind == *kind
    }
}

impl<K> fmt::Display for Token<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view, f)
    }
}

/// A forward-only byte cursor that tokenizing functions advance.
#[derive(Debug, Clone)]
pub struct Cursor<'s> {
    source: &'s str,
    pos: usize,
}

impl<'s> Cursor<'s> {
    pub fn new(source: &'s str) -> Self {
        Self { source, pos: 0 }
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The byte under the cursor, or `None` at end of input.
    pub fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// The full character under the cursor, for diagnostics.
    pub fn peek_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Moves past one ASCII byte. Only call this after `peek` returned an
    /// ASCII byte, so the cursor stays on a character boundary.
    pub fn bump(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Advances while `pred` holds for the current byte. `pred` must only
    /// accept bytes that cannot split a character (ASCII), or accept every
    /// byte of a multi-byte character.
    pub fn bump_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    /// The view from `begin` to the current offset.
    pub fn view_from(&self, begin: usize) -> View<'s> {
        View::new(self.source, begin, self.pos)
    }

    pub fn position(&self) -> Position {
        Position::locate(self.source, self.pos)
    }
}

/// Whitespace recognised by every grammar in this crate.
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Tag {
        Eof,
        Word,
    }

    impl Kind for Tag {
        const EOF: Self = Tag::Eof;
    }

    #[test]
    fn view_prints_exact_substring() {
        let src = "hello world";
        let view = View::new(src, 6, 11);
        assert_eq!(view.to_string(), "world");
        assert_eq!(view.len(), 5);
        assert!(View::empty(src, 3).is_empty());
    }

    #[test]
    fn position_counts_lines_and_columns() {
        let src = "1 +\n  2 *\n3";
        assert_eq!(
            Position::locate(src, 6),
            Position {
                offset: 6,
                line: 2,
                column: 3
            }
        );
        assert_eq!(Position::locate(src, 0).to_string(), "1:1");
        assert_eq!(Position::locate(src, src.len()).to_string(), "3:2");
    }

    #[test]
    fn token_equals_its_kind() {
        let tok = Token::new(View::new("abc", 0, 3), Tag::Word);
        assert!(tok == Tag::Word);
        assert!(tok != Tag::Eof);
        assert_eq!(tok.describe(), "`abc`");
        assert_eq!(Token::new(View::empty("abc", 3), Tag::Eof).describe(), "end of input");
    }

    #[test]
    fn cursor_bumps_and_slices() {
        let mut cursor = Cursor::new("123+");
        cursor.bump_while(|b| b.is_ascii_digit());
        assert_eq!(cursor.view_from(0).as_str(), "123");
        assert_eq!(cursor.peek(), Some(b'+'));
        cursor.bump();
        assert!(cursor.is_eof());
        cursor.bump();
        assert_eq!(cursor.offset(), 4);
        assert_eq!(cursor.peek_char(), None);
    }
}
