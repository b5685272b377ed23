//! cimc-lex - Lexical analyzer for the Cim front end.
//!
//! Transforms source text into an ordered sequence of [`Token`]s ending in
//! [`TokenKind::Eof`]. The scanner is greedy and longest-match: it skips
//! whitespace, comments, and `#`-prefixed preprocessor lines, then matches
//! the longest operator from the fixed table before falling back to
//! single-character punctuation, literals, identifiers, and keywords.
//!
//! Lexing fails with a typed [`LexError`] on an unterminated string or
//! character literal or an unexpected character. A malformed numeric literal
//! (digit run glued to an identifier) is emitted as a single
//! [`TokenKind::Invalid`] token and terminates the scan.

pub mod cursor;
mod edge_cases;
pub mod error;
mod lexer;
pub mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
