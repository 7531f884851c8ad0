//! Character classification for the Caret lexer.
//!
//! Identifiers in Caret are ASCII-only. These predicates are total over
//! `char`: anything outside the ASCII letter/digit ranges, including the
//! end-of-input sentinel, classifies as `false`.

/// Checks if a character can start an identifier.
///
/// Only ASCII letters (`A`-`Z`, `a`-`z`) qualify. Underscores, digits and
/// non-ASCII letters do not.
///
/// # Example
///
/// ```
/// use caret_lex::classify::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('Z'));
/// assert!(!is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// assert!(!is_ident_start('\0'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character can continue an identifier.
///
/// ASCII letters and ASCII digits qualify.
///
/// # Example
///
/// ```
/// use caret_lex::classify::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('7'));
/// assert!(!is_ident_continue('_'));
/// assert!(!is_ident_continue(' '));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
}
