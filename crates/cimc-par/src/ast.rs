//! AST node definitions.
//!
//! The tree is strictly parent-owned: each node owns its children
//! exclusively and no child points back at its parent. Expression nodes
//! carry an `inferred_type` that stays empty until the type checker runs;
//! declarations carry a `resolved_type` that starts out equal to the
//! declared type. Scope-opening nodes (functions, blocks, `for` loops) are
//! stamped with a [`NodeId`] so later passes can key scopes off them.

use cimc_util::NodeId;

/// A parsed translation unit: globals and functions in source order.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub globals: Vec<VarDecl>,
    pub functions: Vec<FunctionDecl>,
}

/// Function declaration with body.
#[derive(Debug, Clone)]
pub struct FunctionDecl {
    pub return_type: String,
    pub name: String,
    pub params: Vec<Param>,
    pub body: Block,
    pub line: u32,
    pub id: NodeId,
    /// Final return type after type checking.
    pub resolved_type: String,
}

impl FunctionDecl {
    pub fn new(
        return_type: String,
        name: String,
        params: Vec<Param>,
        body: Block,
        line: u32,
        id: NodeId,
    ) -> Self {
        Self {
            resolved_type: return_type.clone(),
            return_type,
            name,
            params,
            body,
            line,
            id,
        }
    }
}

/// Function parameter.
#[derive(Debug, Clone)]
pub struct Param {
    pub type_name: String,
    pub name: String,
    pub line: u32,
    /// Final type after type checking.
    pub resolved_type: String,
}

impl Param {
    pub fn new(type_name: String, name: String, line: u32) -> Self {
        Self {
            resolved_type: type_name.clone(),
            type_name,
            name,
            line,
        }
    }
}

/// Variable declaration, either a global or a statement.
#[derive(Debug, Clone)]
pub struct VarDecl {
    pub type_name: String,
    pub name: String,
    pub initializer: Option<Expr>,
    pub line: u32,
    /// Final type after type checking (differs from `type_name` for `auto`).
    pub resolved_type: String,
}

impl VarDecl {
    pub fn new(type_name: String, name: String, initializer: Option<Expr>, line: u32) -> Self {
        Self {
            resolved_type: type_name.clone(),
            type_name,
            name,
            initializer,
            line,
        }
    }
}

/// Brace-delimited statement list. Opens a scope.
#[derive(Debug, Clone)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub line: u32,
    pub id: NodeId,
}

/// Statement.
#[derive(Debug, Clone)]
pub enum Stmt {
    Block(Block),
    Expr(ExprStmt),
    VarDecl(VarDecl),
    If(IfStmt),
    While(WhileStmt),
    For(Box<ForStmt>),
    Return(ReturnStmt),
    Break { line: u32 },
    Continue { line: u32 },
}

/// Expression statement.
#[derive(Debug, Clone)]
pub struct ExprStmt {
    pub expr: Expr,
    pub line: u32,
}

/// If statement. Does not open a scope itself.
#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
    pub line: u32,
}

/// While loop. Does not open a scope itself.
#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub line: u32,
}

/// For loop. Opens a scope enclosing initializer, condition, step, and body.
#[derive(Debug, Clone)]
pub struct ForStmt {
    pub initializer: Option<Stmt>,
    pub condition: Option<Expr>,
    pub step: Option<Expr>,
    pub body: Box<Stmt>,
    pub line: u32,
    pub id: NodeId,
}

/// Return statement; a bare `return;` has no value.
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub line: u32,
}

/// Expression with its source line and the type the checker inferred.
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: u32,
    /// Empty until the type checker runs; afterwards one of the built-in
    /// type names.
    pub inferred_type: String,
}

impl Expr {
    pub fn new(kind: ExprKind, line: u32) -> Self {
        Self {
            kind,
            line,
            inferred_type: String::new(),
        }
    }
}

/// Expression variants.
///
/// Operators are kept as their lexeme text: the checker distinguishes the
/// integer `&`/`|` from the logical `&&`/`||` by string-matching, and the
/// dump prints the lexeme verbatim.
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// Integer or floating literal, kept as source text.
    NumberLiteral(String),
    /// String literal (inner bytes, escapes preserved).
    StringLiteral(String),
    /// Character literal (inner bytes, escape preserved).
    CharLiteral(String),
    /// `true` or `false`.
    BoolLiteral(bool),
    /// Name reference.
    Identifier(String),
    /// Binary operation.
    Binary {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Prefix unary operation.
    Unary { op: String, operand: Box<Expr> },
    /// Assignment to an identifier.
    Assignment { target: String, value: Box<Expr> },
    /// Call of a named function.
    Call { callee: String, arguments: Vec<Expr> },
}
