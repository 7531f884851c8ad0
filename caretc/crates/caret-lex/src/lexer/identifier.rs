//! Identifier and keyword lexing.

use crate::classify::is_ident_continue;
use crate::token::{keyword_from_ident, TokenKind};
use crate::{Lexer, Token};

impl Lexer {
    /// Lexes an identifier or keyword.
    ///
    /// The current character has already passed `is_ident_start`. The span
    /// is extended greedily while the *next* character continues the
    /// identifier, so the cursor ends on the last character of the word.
    /// The word is then looked up in the keyword table.
    ///
    /// # Returns
    ///
    /// Either a keyword token (e.g. `LET`) or an `IDENT` token carrying the
    /// full word.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.peek()) {
            self.cursor.advance();
        }

        let text = self.lexeme();
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Ident);
        Token::new(text, kind)
    }
}
