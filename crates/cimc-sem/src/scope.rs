//! Scope tree and symbol tables.
//!
//! Scopes live in one flat [`IndexVec`] and refer to their parents by
//! [`ScopeId`], so the tree has plain upward pointers and no reference
//! cycles. Each scope stores its symbols in insertion order and its child
//! scopes keyed by the [`NodeId`] of the AST node that opened them; the
//! type checker re-enters scopes through those keys instead of rebuilding
//! anything.

use cimc_par::Param;
use cimc_util::{FxHashMap, Idx, IndexVec, NodeId};
use indexmap::IndexMap;

/// Index of a scope in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub u32);

impl Idx for ScopeId {
    fn from_usize(idx: usize) -> Self {
        ScopeId(idx as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a name is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Variable,
    Function,
}

/// Metadata for one declared name.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    /// Declared type, overwritten with the resolved type by the checker.
    pub type_name: String,
    pub kind: SymbolKind,
    pub definition_line: u32,
    /// Copy of the declaring node's parameter list; empty for variables.
    pub params: Vec<Param>,
}

impl Symbol {
    /// Creates a variable symbol.
    pub fn variable(name: impl Into<String>, type_name: impl Into<String>, line: u32) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind: SymbolKind::Variable,
            definition_line: line,
            params: Vec::new(),
        }
    }

    /// Creates a function symbol carrying its parameter list.
    pub fn function(
        name: impl Into<String>,
        return_type: impl Into<String>,
        line: u32,
        params: Vec<Param>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: return_type.into(),
            kind: SymbolKind::Function,
            definition_line: line,
            params,
        }
    }
}

/// One lexical scope.
#[derive(Debug, Default)]
pub struct Scope {
    /// Symbols declared directly in this scope, in declaration order.
    pub symbols: IndexMap<String, Symbol>,
    /// Enclosing scope; `None` only for the global scope.
    pub parent: Option<ScopeId>,
    /// Child scopes keyed by the node that opened them.
    pub children: FxHashMap<NodeId, ScopeId>,
}

/// The tree of scopes rooted at the global scope.
#[derive(Debug)]
pub struct ScopeTree {
    scopes: IndexVec<ScopeId, Scope>,
}

impl ScopeTree {
    /// Id of the global scope.
    pub const GLOBAL: ScopeId = ScopeId(0);

    /// Creates a tree containing just the global scope.
    pub fn new() -> Self {
        let mut scopes = IndexVec::new();
        scopes.push(Scope::default());
        Self { scopes }
    }

    /// Opens a child of `parent` under the key `node`, returning its id.
    pub fn open_scope(&mut self, parent: ScopeId, node: NodeId) -> ScopeId {
        let child = self.scopes.push(Scope {
            symbols: IndexMap::new(),
            parent: Some(parent),
            children: FxHashMap::default(),
        });
        self.scopes[parent].children.insert(node, child);
        child
    }

    /// Returns the scope with the given id.
    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id]
    }

    /// Returns the parent of a scope, `None` at the root.
    pub fn parent(&self, id: ScopeId) -> Option<ScopeId> {
        self.scopes[id].parent
    }

    /// Returns the child of `id` opened under `node`, if any.
    pub fn child_of(&self, id: ScopeId, node: NodeId) -> Option<ScopeId> {
        self.scopes[id].children.get(&node).copied()
    }

    /// Declares `symbol` in `scope`.
    ///
    /// A name already present in that same scope is a redefinition; the
    /// line of the previous definition comes back as the error so the
    /// analyzer can report both sites. Shadowing an outer scope is not
    /// checked here and is legal.
    pub fn insert(&mut self, scope: ScopeId, symbol: Symbol) -> Result<(), u32> {
        if let Some(previous) = self.scopes[scope].symbols.get(&symbol.name) {
            return Err(previous.definition_line);
        }
        self.scopes[scope].symbols.insert(symbol.name.clone(), symbol);
        Ok(())
    }

    /// Resolves a variable reference: walks from `from` toward the root,
    /// skipping function symbols (a function does not satisfy a variable
    /// reference), and returns the first match.
    pub fn lookup_variable(&self, from: ScopeId, name: &str) -> Option<&Symbol> {
        self.find_scope_of(from, name, SymbolKind::Variable)
            .and_then(|id| self.scopes[id].symbols.get(name))
    }

    /// Resolves a call: walks from `from` toward the root and returns the
    /// first symbol with matching name and function kind.
    pub fn lookup_function(&self, from: ScopeId, name: &str) -> Option<&Symbol> {
        self.find_scope_of(from, name, SymbolKind::Function)
            .and_then(|id| self.scopes[id].symbols.get(name))
    }

    /// Mutable variant of [`ScopeTree::lookup_variable`], used by the type
    /// checker to write resolved types back onto declaring symbols.
    pub fn lookup_variable_mut(&mut self, from: ScopeId, name: &str) -> Option<&mut Symbol> {
        let id = self.find_scope_of(from, name, SymbolKind::Variable)?;
        self.scopes[id].symbols.get_mut(name)
    }

    /// Mutable variant of [`ScopeTree::lookup_function`].
    pub fn lookup_function_mut(&mut self, from: ScopeId, name: &str) -> Option<&mut Symbol> {
        let id = self.find_scope_of(from, name, SymbolKind::Function)?;
        self.scopes[id].symbols.get_mut(name)
    }

    /// Walks parent-ward from `from` for a symbol named `name` of the
    /// given kind; a symbol of the other kind does not stop the walk.
    fn find_scope_of(&self, from: ScopeId, name: &str, kind: SymbolKind) -> Option<ScopeId> {
        let mut current = Some(from);
        while let Some(id) = current {
            if let Some(symbol) = self.scopes[id].symbols.get(name) {
                if symbol.kind == kind {
                    return Some(id);
                }
            }
            current = self.scopes[id].parent;
        }
        None
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}
