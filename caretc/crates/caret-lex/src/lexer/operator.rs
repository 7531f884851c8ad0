//! Operator lexing.
//!
//! Each handler is entered with the cursor on the operator's first
//! character and leaves it on the last character of the lexeme. Two-
//! character forms are decided by a single `peek`.

use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl Lexer {
    /// Lexes `single`, or `double` when the next character is `=`.
    fn lex_with_eq(&mut self, single: TokenKind, double: TokenKind) -> Token {
        if self.cursor.peek() == '=' {
            self.cursor.advance();
            self.lexeme_token(double)
        } else {
            self.lexeme_token(single)
        }
    }

    /// Lexes assignment or equality.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.lex_with_eq(TokenKind::Eq, TokenKind::EqEq)
    }

    /// Lexes not-equals. A lone `!` is not an operator in Caret.
    ///
    /// Handles: `!=`
    pub(crate) fn lex_bang(&mut self) -> LexResult<Token> {
        if self.cursor.peek() == '=' {
            self.cursor.advance();
            Ok(self.lexeme_token(TokenKind::NotEq))
        } else {
            Err(self.unknown_character('!'))
        }
    }

    /// Lexes greater or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.lex_with_eq(TokenKind::Gt, TokenKind::GtEq)
    }

    /// Lexes less or less-equals.
    ///
    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> Token {
        self.lex_with_eq(TokenKind::Lt, TokenKind::LtEq)
    }
}
