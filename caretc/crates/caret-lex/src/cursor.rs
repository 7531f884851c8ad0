//! Character cursor over the lexer's source buffer.
//!
//! The [`Cursor`] owns a copy of the input with a single newline appended,
//! so every line, including the last one, is terminated before the end of
//! the buffer. It only ever moves forward and offers one character of
//! lookahead.
//!
//! The appended newline is a terminator for the scanner, not part of the
//! input: [`Cursor::is_at_input_end`] is already true while standing on it.

/// Character reported by the cursor once it has moved past the buffer.
pub const EOF_CHAR: char = '\0';

/// A forward-only cursor over an owned source buffer.
///
/// Positions are byte offsets. The cursor steps over whole UTF-8
/// characters and keeps 1-based line/column numbers of the current
/// character for error reporting.
///
/// # Example
///
/// ```
/// use caret_lex::cursor::{Cursor, EOF_CHAR};
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.current_char(), 'a');
/// assert_eq!(cursor.peek(), 'b');
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.current_char(), '\n');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), EOF_CHAR);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    /// Input text plus the appended newline. Never modified.
    source: String,

    /// Length of the caller's input, i.e. the offset of the appended newline.
    input_len: usize,

    /// Byte offset of the current character.
    position: usize,

    /// Line of the current character (1-based).
    line: u32,

    /// Column of the current character (1-based, in characters).
    column: u32,
}

impl Cursor {
    /// Creates a cursor positioned on the first character of `input`.
    pub fn new(input: &str) -> Self {
        let mut source = String::with_capacity(input.len() + 1);
        source.push_str(input);
        source.push('\n');

        Self {
            source,
            input_len: input.len(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the whole source buffer, including the appended newline.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the byte offset of the current character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the line of the current character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the column of the current character.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns true once the cursor has moved past the last character.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns true once every character of the caller's input has been
    /// consumed. Only the appended newline, or nothing, remains.
    #[inline]
    pub fn is_at_input_end(&self) -> bool {
        self.position >= self.input_len
    }

    /// Returns the current character, or [`EOF_CHAR`] at the end.
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(self.position)
    }

    /// Returns the character after the current one without moving.
    ///
    /// Returns [`EOF_CHAR`] when there is no such character.
    #[inline]
    pub fn peek(&self) -> char {
        if self.is_at_end() {
            return EOF_CHAR;
        }
        let next = self.position + self.current_char().len_utf8();
        self.char_at(next)
    }

    /// Moves to the next character.
    ///
    /// Once the end is reached the cursor stays there and keeps reporting
    /// [`EOF_CHAR`].
    #[inline]
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }

        let c = self.current_char();
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Returns the source text between two byte offsets.
    ///
    /// Both offsets must fall on character boundaries previously visited
    /// by this cursor.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        &self.source[start..end.min(self.source.len())]
    }

    /// Returns the source text from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &str {
        self.slice(start, self.position)
    }

    #[inline]
    fn char_at(&self, pos: usize) -> char {
        if pos >= self.source.len() {
            return EOF_CHAR;
        }

        // Fast path for ASCII
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source[pos..].chars().next().unwrap_or(EOF_CHAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newline_is_appended() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.source(), "abc\n");
        assert_eq!(Cursor::new("").source(), "\n");
    }

    #[test]
    fn test_input_end_precedes_buffer_end() {
        let mut cursor = Cursor::new("a");
        assert!(!cursor.is_at_input_end());
        cursor.advance();
        assert!(cursor.is_at_input_end());
        assert!(!cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\n');
        cursor.advance();
        assert!(cursor.is_at_input_end());
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_starts_on_first_char() {
        let cursor = Cursor::new("xy");
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.current_char(), 'x');
        assert_eq!(cursor.peek(), 'y');
    }

    #[test]
    fn test_empty_input_starts_on_newline() {
        let mut cursor = Cursor::new("");
        assert_eq!(cursor.current_char(), '\n');
        assert_eq!(cursor.peek(), EOF_CHAR);
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), EOF_CHAR);
    }

    #[test]
    fn test_sentinel_is_idempotent() {
        let mut cursor = Cursor::new("a");
        for _ in 0..10 {
            cursor.advance();
        }
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), EOF_CHAR);
        assert_eq!(cursor.peek(), EOF_CHAR);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_peek_does_not_move() {
        let cursor = Cursor::new("=>");
        assert_eq!(cursor.peek(), '>');
        assert_eq!(cursor.peek(), '>');
        assert_eq!(cursor.current_char(), '=');
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut cursor = Cursor::new("é^");
        assert_eq!(cursor.current_char(), 'é');
        assert_eq!(cursor.peek(), '^');
        cursor.advance();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.current_char(), '^');
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_line_and_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd");
        assert_eq!((cursor.line(), cursor.column()), (1, 1));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (1, 2));
        cursor.advance();
        assert_eq!(cursor.current_char(), '\n');
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        assert_eq!(cursor.current_char(), 'c');
    }

    #[test]
    fn test_slice_from() {
        let mut cursor = Cursor::new("LET x");
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.slice_from(0), "LET");
        assert_eq!(cursor.slice(1, 3), "ET");
    }

    #[test]
    fn test_nul_inside_input_is_not_end() {
        let mut cursor = Cursor::new("\0a");
        assert_eq!(cursor.current_char(), '\0');
        assert!(!cursor.is_at_end());
        cursor.advance();
        assert_eq!(cursor.current_char(), 'a');
    }
}
