//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the per-token dispatch and the
//! iterator adapter.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::classify::is_ident_start;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

/// Lexer for the Caret scripting language.
///
/// The lexer owns a copy of the source and hands out one [`Token`] per call
/// to [`Lexer::next_token`]. It is single-pass: the cursor only moves
/// forward and never looks more than one character ahead.
///
/// # Example
///
/// ```
/// use caret_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("LET x = ^hi^");
/// assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Let);
/// assert_eq!(lexer.next_token().unwrap().text(), "x");
/// assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Eq);
/// assert_eq!(lexer.next_token().unwrap().text(), "hi");
/// assert!(lexer.next_token().unwrap().is_eof());
/// ```
pub struct Lexer {
    /// Character cursor over the owned source buffer.
    pub(crate) cursor: Cursor,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Set once the iterator has yielded EOF or an error.
    finished: bool,
}

impl Lexer {
    /// Creates a new lexer over a copy of `input`.
    pub fn new(input: &str) -> Self {
        trace!(input_len = input.len(), "lexer created");
        Self {
            cursor: Cursor::new(input),
            token_start: 0,
            finished: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips spaces, tabs and carriage returns, then dispatches on the
    /// current character. Once the input is exhausted every call returns
    /// the EOF token.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::UnknownCharacter`] for a character that starts no
    /// token, and [`LexError::UnterminatedOrIllegalString`] for a string
    /// literal that runs into a line break or tab. Both are fatal: the
    /// lexer must not be polled again afterwards.
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.skip_whitespace();

        self.token_start = self.cursor.position();

        if self.cursor.is_at_input_end() {
            return Ok(Token::eof());
        }

        let token = match self.cursor.current_char() {
            c if is_ident_start(c) => self.lex_identifier(),
            '+' => self.lexeme_token(TokenKind::Plus),
            '-' => self.lexeme_token(TokenKind::Minus),
            '*' => self.lexeme_token(TokenKind::Asterisk),
            '/' => {
                if self.cursor.peek() == '/' {
                    // The newline ending the comment is left for the next call.
                    return Ok(self.lex_comment());
                }
                self.lexeme_token(TokenKind::Slash)
            }
            '\n' => self.lexeme_token(TokenKind::Newline),
            '=' => self.lex_equals(),
            '!' => self.lex_bang()?,
            '>' => self.lex_greater(),
            '<' => self.lex_less(),
            '^' => self.lex_string()?,
            c => return Err(self.unknown_character(c)),
        };

        self.cursor.advance();
        Ok(token)
    }

    /// Returns the character after the current one without consuming it.
    pub fn peek(&self) -> char {
        self.cursor.peek()
    }

    /// Returns the line of the next character to be scanned (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the column of the next character to be scanned (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the byte offset of the next character to be scanned.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the text from the token start through the current character.
    pub(crate) fn lexeme(&self) -> &str {
        let end = self.cursor.position() + self.cursor.current_char().len_utf8();
        self.cursor.slice(self.token_start, end)
    }

    /// Builds a token from [`Lexer::lexeme`]. The cursor is left on the
    /// last character of the lexeme.
    pub(crate) fn lexeme_token(&self, kind: TokenKind) -> Token {
        Token::new(self.lexeme(), kind)
    }

    pub(crate) fn unknown_character(&self, ch: char) -> LexError {
        let err = LexError::UnknownCharacter {
            ch,
            line: self.cursor.line(),
            column: self.cursor.column(),
        };
        debug!(%err, "lexical error");
        err
    }
}

impl Iterator for Lexer {
    type Item = LexResult<Token>;

    /// Yields tokens up to, but not including, EOF. After EOF or the first
    /// error the iterator is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Lexer {}
