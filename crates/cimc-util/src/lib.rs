//! cimc-util - Foundation types shared by every compiler phase.
//!
//! This crate provides the small vocabulary the rest of the compiler is
//! written in:
//! - [`Span`] - source locations (1-based line and column)
//! - [`NodeId`] - identity of scope-opening AST nodes
//! - [`IndexVec`] / [`Idx`] - vectors with typed indices
//! - [`Diagnostic`] / [`Level`] - user-facing messages rendered by the driver

pub mod diagnostic;
pub mod index_vec;
pub mod node_id;
pub mod span;

pub use diagnostic::{Diagnostic, Level};
pub use index_vec::{Idx, IndexVec};
pub use node_id::NodeId;
pub use span::Span;

// Re-export the hash map used for compiler-internal tables.
pub use rustc_hash::FxHashMap;
