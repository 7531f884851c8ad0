//! Token definitions for the Caret lexer.
//!
//! A [`Token`] pairs the exact lexeme taken from the source with a
//! [`TokenKind`]. Reserved words are resolved through the static
//! [`KEYWORDS`] table by [`keyword_from_ident`].

use std::fmt;

use serde::{Serialize, Serializer};

/// Classification code of a token.
///
/// The set is closed: the lexer dispatch matches on it exhaustively, and
/// new reserved words are added to [`KEYWORDS`] together with a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ===== Structure =====
    /// End of input. Carries empty text.
    Eof,
    /// Line break. Newlines are significant in Caret.
    Newline,
    /// Line comment marker `//`. The comment body is discarded.
    Comment,

    // ===== Literals and names =====
    /// `^`-delimited string literal; the text excludes the delimiters.
    String,
    /// Identifier.
    Ident,

    // ===== Keywords =====
    /// `LABEL`
    Label,
    /// `GOTO`
    Goto,
    /// `PRINT`
    Print,
    /// `INPUT`
    Input,
    /// `LET`
    Let,
    /// `IF`
    If,
    /// `THEN`
    Then,
    /// `ENDIF`
    Endif,
    /// `WHILE`
    While,
    /// `REPEAT`
    Repeat,
    /// `ENDWHILE`
    Endwhile,

    // ===== Operators =====
    /// `=`
    Eq,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
}

/// Reserved words and their kinds, in declaration order.
///
/// Matching is exact and case-sensitive: `LET` is a keyword, `let` and
/// `Let` are identifiers.
pub const KEYWORDS: [(&str, TokenKind); 11] = [
    ("LABEL", TokenKind::Label),
    ("GOTO", TokenKind::Goto),
    ("PRINT", TokenKind::Print),
    ("INPUT", TokenKind::Input),
    ("LET", TokenKind::Let),
    ("IF", TokenKind::If),
    ("THEN", TokenKind::Then),
    ("ENDIF", TokenKind::Endif),
    ("WHILE", TokenKind::While),
    ("REPEAT", TokenKind::Repeat),
    ("ENDWHILE", TokenKind::Endwhile),
];

/// Looks up identifier-shaped text in the keyword table.
///
/// Returns `None` for anything that is not exactly a reserved word,
/// including prefixes (`END`), extensions (`LETS`) and other casings.
///
/// # Example
///
/// ```
/// use caret_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("WHILE"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("while"), None);
/// assert_eq!(keyword_from_ident("WHILEX"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == text)
        .map(|&(_, kind)| kind)
}

impl TokenKind {
    /// Returns the upper-case code name of this kind, e.g. `"EQEQ"`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Comment => "COMMENT",
            TokenKind::String => "STRING",
            TokenKind::Ident => "IDENT",
            TokenKind::Label => "LABEL",
            TokenKind::Goto => "GOTO",
            TokenKind::Print => "PRINT",
            TokenKind::Input => "INPUT",
            TokenKind::Let => "LET",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Endif => "ENDIF",
            TokenKind::While => "WHILE",
            TokenKind::Repeat => "REPEAT",
            TokenKind::Endwhile => "ENDWHILE",
            TokenKind::Eq => "EQ",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::EqEq => "EQEQ",
            TokenKind::NotEq => "NOTEQ",
            TokenKind::Lt => "LT",
            TokenKind::LtEq => "LTEQ",
            TokenKind::Gt => "GT",
            TokenKind::GtEq => "GTEQ",
        }
    }

    /// Returns true for reserved words.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Label
                | TokenKind::Goto
                | TokenKind::Print
                | TokenKind::Input
                | TokenKind::Let
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::Endif
                | TokenKind::While
                | TokenKind::Repeat
                | TokenKind::Endwhile
        )
    }

    /// Returns true for arithmetic, assignment and comparison operators.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Eq
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A lexical unit: the matched lexeme and its classification.
///
/// Tokens are immutable once built. For keywords and operators the text
/// is the canonical spelling, for `Eof` it is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Creates a token from its text and kind.
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Creates the end-of-input token.
    pub fn eof() -> Self {
        Self::new(String::new(), TokenKind::Eof)
    }

    /// Returns the lexeme this token was built from.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the classification of this token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns true if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}({:?})", self.kind, self.text)
        }
    }
}
