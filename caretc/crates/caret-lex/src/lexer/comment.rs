//! Whitespace and comment skipping.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl Lexer {
    /// Skips spaces, tabs and carriage returns.
    ///
    /// Newlines are tokens in Caret and are not skipped. Calling this when
    /// the cursor is not on whitespace does nothing.
    pub fn skip_whitespace(&mut self) {
        while matches!(self.cursor.current_char(), ' ' | '\t' | '\r') {
            self.cursor.advance();
        }
    }

    /// Skips the body of a line comment.
    ///
    /// Stops on the newline that ends the comment without consuming it, so
    /// the newline is returned by the next call to `next_token`.
    pub fn skip_comment(&mut self) {
        while self.cursor.current_char() != '\n' && !self.cursor.is_at_end() {
            self.cursor.advance();
        }
    }

    /// Lexes the `//` marker of a line comment and discards its body.
    ///
    /// Entered on the first `/` with a second `/` ahead.
    pub(crate) fn lex_comment(&mut self) -> Token {
        self.cursor.advance();
        let token = self.lexeme_token(TokenKind::Comment);
        self.cursor.advance();
        self.skip_comment();
        token
    }
}
