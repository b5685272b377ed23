//! cimc-sem - Semantic analysis for the Cim front end.
//!
//! Two passes over the parser's AST:
//!
//! 1. The [`ScopeAnalyzer`] walks the tree once, building the scope tree
//!    (symbol tables keyed by the `NodeId` of each scope-opening node) and
//!    checking every name binding.
//! 2. The [`TypeChecker`] walks the AST and the scope tree in lock-step,
//!    annotating every expression with its inferred type and every
//!    declaration with its resolved type.
//!
//! Each pass stops at its first fault with a typed error.

pub mod analysis;
mod edge_cases;
pub mod error;
pub mod scope;
pub mod typeck;
pub mod types;

pub use analysis::ScopeAnalyzer;
pub use error::{ScopeError, ScopeErrorKind, TypeError, TypeErrorKind};
pub use scope::{Scope, ScopeId, ScopeTree, Symbol, SymbolKind};
pub use typeck::TypeChecker;
