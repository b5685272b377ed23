//! Diagnostic - user-facing message rendering.
//!
//! Every pass fails on its first error with a typed error value; those are
//! defined next to the pass that raises them. `Diagnostic` is the common
//! shape the driver renders to stderr: a severity level, a message, and a
//! source location. Warnings (the lexer's unterminated-block-comment case)
//! use the same shape but do not stop compilation.

use crate::span::Span;
use std::fmt;

/// Diagnostic severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that stops compilation.
    Error,
    /// A warning; compilation continues.
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A renderable diagnostic message with severity and location.
///
/// # Examples
///
/// ```
/// use cimc_util::{Diagnostic, Span};
///
/// let diag = Diagnostic::warning("unterminated block comment", Span::new(4, 9));
/// assert_eq!(diag.to_string(), "warning: unterminated block comment (line 4, column 9)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub level: Level,
    /// Main diagnostic message.
    pub message: String,
    /// Source location.
    pub span: Span,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
        }
    }

    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.span == Span::DUMMY {
            write!(f, "{}: {}", self.level, self.message)
        } else {
            write!(f, "{}: {} ({})", self.level, self.message, self.span)
        }
    }
}
