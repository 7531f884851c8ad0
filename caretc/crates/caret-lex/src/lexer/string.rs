//! String literal lexing.
//!
//! Caret strings are delimited by `^` on both sides, have no escape
//! sequences and must fit on one line without tabs.

use tracing::debug;

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl Lexer {
    /// Lexes a `^`-delimited string literal.
    ///
    /// Entered on the opening `^`; leaves the cursor on the closing one.
    /// The token text is everything between the delimiters.
    ///
    /// The source buffer always ends in a newline, so a literal missing its
    /// closing `^` is reported on that newline at the latest.
    pub(crate) fn lex_string(&mut self) -> LexResult<Token> {
        self.cursor.advance();
        let content_start = self.cursor.position();

        while self.cursor.current_char() != '^' {
            let c = self.cursor.current_char();
            if matches!(c, '\r' | '\n' | '\t') || self.cursor.is_at_end() {
                let err = LexError::UnterminatedOrIllegalString {
                    ch: c,
                    line: self.cursor.line(),
                    column: self.cursor.column(),
                };
                debug!(%err, "lexical error");
                return Err(err);
            }
            self.cursor.advance();
        }

        let text = self.cursor.slice(content_start, self.cursor.position());
        Ok(Token::new(text, TokenKind::String))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexError;
    use crate::token::TokenKind;
    use crate::Lexer;

    #[test]
    fn test_simple_string() {
        let mut lexer = Lexer::new("^abc^");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind(), TokenKind::String);
        assert_eq!(token.text(), "abc");
        assert!(lexer.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_empty_string() {
        let mut lexer = Lexer::new("^^");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind(), TokenKind::String);
        assert_eq!(token.text(), "");
    }

    #[test]
    fn test_string_keeps_spaces_and_symbols() {
        let mut lexer = Lexer::new("PRINT ^Hello, world! 1 + 2 // no comment^");
        assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Print);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.text(), "Hello, world! 1 + 2 // no comment");
    }

    #[test]
    fn test_string_with_non_ascii() {
        let mut lexer = Lexer::new("^héllo wörld^");
        assert_eq!(lexer.next_token().unwrap().text(), "héllo wörld");
    }

    #[test]
    fn test_unterminated_string() {
        let mut lexer = Lexer::new("^a");
        assert_eq!(
            lexer.next_token(),
            Err(LexError::UnterminatedOrIllegalString {
                ch: '\n',
                line: 1,
                column: 3
            })
        );
    }

    #[test]
    fn test_string_across_lines() {
        let mut lexer = Lexer::new("^a\nb^");
        assert!(matches!(
            lexer.next_token(),
            Err(LexError::UnterminatedOrIllegalString { ch: '\n', .. })
        ));
    }

    #[test]
    fn test_tab_in_string() {
        let mut lexer = Lexer::new("^a\tb^");
        assert!(matches!(
            lexer.next_token(),
            Err(LexError::UnterminatedOrIllegalString { ch: '\t', .. })
        ));
    }

    #[test]
    fn test_carriage_return_in_string() {
        let mut lexer = Lexer::new("^a\rb^");
        assert!(matches!(
            lexer.next_token(),
            Err(LexError::UnterminatedOrIllegalString { ch: '\r', .. })
        ));
    }

    #[test]
    fn test_adjacent_strings() {
        let mut lexer = Lexer::new("^a^^b^");
        assert_eq!(lexer.next_token().unwrap().text(), "a");
        assert_eq!(lexer.next_token().unwrap().text(), "b");
        assert!(lexer.next_token().unwrap().is_eof());
    }
}
