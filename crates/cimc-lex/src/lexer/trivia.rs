//! Whitespace, comment, and preprocessor-line skipping.

use cimc_util::{Diagnostic, Span};

use crate::Lexer;

/// The whitespace set of the source language: space, tab, CR, LF, form
/// feed, vertical tab.
fn is_source_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0C' | '\x0B')
}

impl<'a> Lexer<'a> {
    /// Skips everything that separates tokens: whitespace, `//` line
    /// comments, `/* */` block comments, and `#`-prefixed preprocessor
    /// lines (consumed whole; macros are not expanded).
    pub(crate) fn skip_trivia(&mut self) {
        loop {
            let c = self.cursor.current_char();

            if !self.cursor.is_at_end() && is_source_whitespace(c) {
                self.cursor.advance();
                continue;
            }

            if c == '/' && self.cursor.peek_char(1) == '/' {
                while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                    self.cursor.advance();
                }
                continue;
            }

            if c == '/' && self.cursor.peek_char(1) == '*' {
                self.skip_block_comment();
                continue;
            }

            if c == '#' {
                // Preprocessor directive: the rest of the physical line.
                while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                    self.cursor.advance();
                }
                continue;
            }

            break;
        }
    }

    /// Skips a `/* */` block comment. An unterminated comment reaches end
    /// of file tolerantly but leaves a warning behind.
    pub(crate) fn skip_block_comment(&mut self) {
        let line = self.cursor.line();
        let column = self.cursor.column();
        self.cursor.advance(); // '/'
        self.cursor.advance(); // '*'

        loop {
            if self.cursor.is_at_end() {
                self.warnings.push(Diagnostic::warning(
                    "unterminated block comment",
                    Span::new(line, column),
                ));
                return;
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }
            self.cursor.advance();
        }
    }
}
