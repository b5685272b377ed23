//! Semantic error types: scope analysis and type checking.

use thiserror::Error;

/// The name-binding fault classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeErrorKind {
    UndeclaredVariableAccessed,
    UndefinedFunctionCalled,
    VariableRedefinition,
    FunctionRedefinition,
}

/// Error raised by the scope analyzer on its first fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ScopeError {
    pub kind: ScopeErrorKind,
    pub line: u32,
    pub message: String,
}

impl ScopeError {
    pub fn new(kind: ScopeErrorKind, line: u32, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }
}

/// The type fault classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeErrorKind {
    ErroneousVarDecl,
    FnCallParamCount,
    FnCallParamType,
    ErroneousReturnType,
    ExpressionTypeMismatch,
    InvalidAssignment,
    NonBooleanCondStmt,
    ErroneousBreak,
    ErroneousContinue,
    AttemptedOpOnNonNumeric,
    AttemptedOpOnNonInt,
}

/// Error raised by the type checker on its first fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TypeError {
    pub kind: TypeErrorKind,
    pub line: u32,
    pub message: String,
}

impl TypeError {
    pub fn new(kind: TypeErrorKind, line: u32, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }
}
