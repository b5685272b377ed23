//! Identifier and keyword lexing.

use crate::token::{keyword_kind, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or reserved word.
    ///
    /// Pattern: `[A-Za-z_][A-Za-z0-9_]*`. The matched text is looked up in
    /// the reserved-word table; on a hit the keyword kind is produced.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        loop {
            let c = self.cursor.current_char();
            if !c.is_ascii_alphanumeric() && c != '_' {
                break;
            }
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword_kind(text).unwrap_or(TokenKind::Identifier);
        self.token(kind)
    }
}
