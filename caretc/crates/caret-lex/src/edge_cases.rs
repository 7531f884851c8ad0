//! Edge case tests for caret-lex

#[cfg(test)]
mod tests {
    use crate::{keyword_from_ident, tokenize, LexError, Lexer, Token, TokenKind, KEYWORDS};
    use proptest::prelude::*;

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(source).expect("lexing failed")
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_whitespace_only() {
        let mut lexer = Lexer::new(" \t \r\t  ");
        assert!(lexer.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_edge_single_letter_ident() {
        assert_eq!(lex_all("x"), vec![Token::new("x", TokenKind::Ident)]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a1".repeat(5000);
        let tokens = lex_all(&format!("LET {} = b", name));
        assert_eq!(tokens[1], Token::new(name.as_str(), TokenKind::Ident));
    }

    #[test]
    fn test_edge_eq_then_end() {
        let mut lexer = Lexer::new("=");
        assert_eq!(lexer.next_token().unwrap(), Token::new("=", TokenKind::Eq));
        assert!(lexer.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_edge_slash_before_newline() {
        let kinds: Vec<TokenKind> = lex_all("/\n/").iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Slash, TokenKind::Newline, TokenKind::Slash]
        );
    }

    #[test]
    fn test_edge_comment_swallows_string_opener() {
        let tokens = lex_all("// ^never closed\n^ok^");
        assert_eq!(
            tokens,
            vec![
                Token::new("//", TokenKind::Comment),
                Token::new("\n", TokenKind::Newline),
                Token::new("ok", TokenKind::String),
            ]
        );
    }

    #[test]
    fn test_edge_keyword_glued_to_operator() {
        let tokens = lex_all("IF<=THEN");
        assert_eq!(
            tokens,
            vec![
                Token::new("IF", TokenKind::If),
                Token::new("<=", TokenKind::LtEq),
                Token::new("THEN", TokenKind::Then),
            ]
        );
    }

    #[test]
    fn test_edge_error_after_valid_tokens() {
        let mut lexer = Lexer::new("LET x = 5");
        assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Let);
        assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Ident);
        assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Eq);
        assert_eq!(
            lexer.next_token(),
            Err(LexError::UnknownCharacter {
                ch: '5',
                line: 1,
                column: 9
            })
        );
    }

    #[test]
    fn test_edge_string_error_line() {
        let err = tokenize("PRINT ^a^\nPRINT ^b\tc^").unwrap_err();
        assert_eq!(
            err,
            LexError::UnterminatedOrIllegalString {
                ch: '\t',
                line: 2,
                column: 9
            }
        );
    }

    // ==================== PROPERTIES ====================

    #[test]
    fn test_property_whitespace_only_is_eof() {
        proptest!(|(input in "[ \t\r]{0,64}")| {
            let mut lexer = Lexer::new(&input);
            let token = lexer.next_token().unwrap();
            prop_assert!(token.is_eof());
            prop_assert_eq!(token.text(), "");
        });
    }

    #[test]
    fn test_property_identifier_is_maximal_span() {
        proptest!(|(word in "[a-zA-Z][a-zA-Z0-9]{0,40}", tail in "[ +\\-*/=<>\n]")| {
            prop_assume!(keyword_from_ident(&word).is_none());
            let source = format!("{}{}", word, tail);
            let mut lexer = Lexer::new(&source);
            let token = lexer.next_token().unwrap();
            prop_assert_eq!(token.kind(), TokenKind::Ident);
            prop_assert_eq!(token.text(), word.as_str());
        });
    }

    #[test]
    fn test_property_keywords_never_identifiers() {
        proptest!(|(entry in proptest::sample::select(KEYWORDS.to_vec()))| {
            let (text, kind) = entry;
            let mut lexer = Lexer::new(text);
            let token = lexer.next_token().unwrap();
            prop_assert_eq!(token.kind(), kind);
            prop_assert_ne!(token.kind(), TokenKind::Ident);
        });
    }

    #[test]
    fn test_property_eof_is_sticky() {
        proptest!(|(input in "[a-zA-Z +*/<>=\n-]{0,64}", extra in 1usize..8)| {
            let mut lexer = Lexer::new(&input);
            let mut steps = 0;
            while !lexer.next_token().unwrap().is_eof() {
                steps += 1;
                prop_assert!(steps <= input.len());
            }
            for _ in 0..extra {
                prop_assert!(lexer.next_token().unwrap().is_eof());
            }
        });
    }

    #[test]
    fn test_property_string_content_round_trips() {
        proptest!(|(content in "[^\\^\r\n\t]{0,64}")| {
            let source = format!("^{}^", content);
            let tokens = tokenize(&source).unwrap();
            prop_assert_eq!(tokens, vec![Token::new(content.as_str(), TokenKind::String)]);
        });
    }

    #[test]
    fn test_property_unterminated_string_fails() {
        proptest!(|(content in "[^\\^\r\n\t]{0,64}")| {
            let source = format!("^{}", content);
            let err = tokenize(&source).unwrap_err();
            prop_assert!(
                matches!(err, LexError::UnterminatedOrIllegalString { ch: '\n', .. }),
                "unexpected error: {:?}",
                err
            );
        });
    }

    #[test]
    fn test_property_arbitrary_input_terminates() {
        proptest!(|(input in "\\PC{0,64}")| {
            let mut lexer = Lexer::new(&input);
            let mut steps = 0;
            loop {
                match lexer.next_token() {
                    Ok(token) if token.is_eof() => break,
                    Ok(_) => {}
                    Err(_) => break,
                }
                steps += 1;
                prop_assert!(steps <= input.len() + 1);
            }
        });
    }
}
