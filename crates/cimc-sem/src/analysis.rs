//! Scope analysis: one AST walk that builds the scope tree and checks
//! every name binding.
//!
//! The program walk first inserts all function symbols into the global
//! scope, then visits the globals left to right, then the function bodies.
//! Mutually recursive functions therefore resolve, while a global's
//! initializer can only see names declared before it.

use crate::error::{ScopeError, ScopeErrorKind};
use crate::scope::{ScopeId, ScopeTree, Symbol, SymbolKind};
use cimc_par::{Block, Expr, ExprKind, ForStmt, FunctionDecl, Program, Stmt, VarDecl};
use cimc_util::NodeId;

/// Builds the scope tree for a program and checks name bindings.
pub struct ScopeAnalyzer {
    scopes: ScopeTree,
    current: ScopeId,
}

impl ScopeAnalyzer {
    pub fn new() -> Self {
        Self {
            scopes: ScopeTree::new(),
            current: ScopeTree::GLOBAL,
        }
    }

    /// Analyzes the program, yielding the finished scope tree.
    pub fn analyze(mut self, program: &Program) -> Result<ScopeTree, ScopeError> {
        for function in &program.functions {
            let symbol = Symbol::function(
                function.name.clone(),
                function.return_type.clone(),
                function.line,
                function.params.clone(),
            );
            self.declare(symbol, function.line)?;
        }
        for global in &program.globals {
            self.visit_var_decl(global)?;
        }
        for function in &program.functions {
            self.visit_function(function)?;
        }
        Ok(self.scopes)
    }

    fn enter_scope(&mut self, node: NodeId) {
        self.current = self.scopes.open_scope(self.current, node);
    }

    fn exit_scope(&mut self) {
        if let Some(parent) = self.scopes.parent(self.current) {
            self.current = parent;
        }
    }

    /// Declares a symbol in the current scope, reporting redefinitions.
    fn declare(&mut self, symbol: Symbol, line: u32) -> Result<(), ScopeError> {
        let kind = symbol.kind;
        let name = symbol.name.clone();
        match self.scopes.insert(self.current, symbol) {
            Ok(()) => Ok(()),
            Err(previous_line) => {
                let (err_kind, what) = match kind {
                    SymbolKind::Function => (ScopeErrorKind::FunctionRedefinition, "function"),
                    SymbolKind::Variable => (ScopeErrorKind::VariableRedefinition, "variable"),
                };
                Err(ScopeError::new(
                    err_kind,
                    line,
                    format!(
                        "{} '{}' redefined; previously defined on line {}",
                        what, name, previous_line
                    ),
                ))
            },
        }
    }

    fn visit_function(&mut self, function: &FunctionDecl) -> Result<(), ScopeError> {
        self.enter_scope(function.id);
        for param in &function.params {
            let symbol = Symbol::variable(param.name.clone(), param.type_name.clone(), param.line);
            self.declare(symbol, param.line)?;
        }
        self.visit_block(&function.body)?;
        self.exit_scope();
        Ok(())
    }

    fn visit_block(&mut self, block: &Block) -> Result<(), ScopeError> {
        self.enter_scope(block.id);
        for statement in &block.statements {
            self.visit_stmt(statement)?;
        }
        self.exit_scope();
        Ok(())
    }

    fn visit_stmt(&mut self, statement: &Stmt) -> Result<(), ScopeError> {
        match statement {
            Stmt::Block(block) => self.visit_block(block),
            Stmt::VarDecl(decl) => self.visit_var_decl(decl),
            Stmt::Expr(expr_stmt) => self.visit_expr(&expr_stmt.expr),
            Stmt::If(if_stmt) => {
                self.visit_expr(&if_stmt.condition)?;
                self.visit_stmt(&if_stmt.then_branch)?;
                if let Some(else_branch) = &if_stmt.else_branch {
                    self.visit_stmt(else_branch)?;
                }
                Ok(())
            },
            Stmt::While(while_stmt) => {
                self.visit_expr(&while_stmt.condition)?;
                self.visit_stmt(&while_stmt.body)
            },
            Stmt::For(for_stmt) => self.visit_for(for_stmt),
            Stmt::Return(return_stmt) => {
                if let Some(value) = &return_stmt.value {
                    self.visit_expr(value)?;
                }
                Ok(())
            },
            Stmt::Break { .. } | Stmt::Continue { .. } => Ok(()),
        }
    }

    /// A declaration's initializer is visited before the name is added, so
    /// `int x = x;` is an undeclared use.
    fn visit_var_decl(&mut self, decl: &VarDecl) -> Result<(), ScopeError> {
        if let Some(initializer) = &decl.initializer {
            self.visit_expr(initializer)?;
        }
        let symbol = Symbol::variable(decl.name.clone(), decl.type_name.clone(), decl.line);
        self.declare(symbol, decl.line)
    }

    /// A `for` opens one scope around all three clauses and the body; a
    /// block body opens its own nested scope inside it.
    fn visit_for(&mut self, for_stmt: &ForStmt) -> Result<(), ScopeError> {
        self.enter_scope(for_stmt.id);
        if let Some(initializer) = &for_stmt.initializer {
            self.visit_stmt(initializer)?;
        }
        if let Some(condition) = &for_stmt.condition {
            self.visit_expr(condition)?;
        }
        if let Some(step) = &for_stmt.step {
            self.visit_expr(step)?;
        }
        self.visit_stmt(&for_stmt.body)?;
        self.exit_scope();
        Ok(())
    }

    fn visit_expr(&mut self, expr: &Expr) -> Result<(), ScopeError> {
        match &expr.kind {
            ExprKind::NumberLiteral(_)
            | ExprKind::StringLiteral(_)
            | ExprKind::CharLiteral(_)
            | ExprKind::BoolLiteral(_) => Ok(()),
            ExprKind::Identifier(name) => self.resolve_variable(name, expr.line),
            ExprKind::Binary { left, right, .. } => {
                self.visit_expr(left)?;
                self.visit_expr(right)
            },
            ExprKind::Unary { operand, .. } => self.visit_expr(operand),
            ExprKind::Assignment { target, value } => {
                self.resolve_variable(target, expr.line)?;
                self.visit_expr(value)
            },
            ExprKind::Call { callee, arguments } => {
                if self.scopes.lookup_function(self.current, callee).is_none() {
                    return Err(ScopeError::new(
                        ScopeErrorKind::UndefinedFunctionCalled,
                        expr.line,
                        format!("call to undefined function '{}'", callee),
                    ));
                }
                for argument in arguments {
                    self.visit_expr(argument)?;
                }
                Ok(())
            },
        }
    }

    fn resolve_variable(&self, name: &str, line: u32) -> Result<(), ScopeError> {
        if self.scopes.lookup_variable(self.current, name).is_none() {
            return Err(ScopeError::new(
                ScopeErrorKind::UndeclaredVariableAccessed,
                line,
                format!("use of undeclared variable '{}'", name),
            ));
        }
        Ok(())
    }
}

impl Default for ScopeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cimc_lex::Lexer;
    use cimc_par::Parser;

    fn analyze(source: &str) -> Result<ScopeTree, ScopeError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize().expect("lexing failed");
        let program = Parser::new(tokens).parse_program().expect("parse failed");
        ScopeAnalyzer::new().analyze(&program)
    }

    #[test]
    fn test_globals_and_functions_land_in_global_scope() {
        let tree = analyze("int g = 1; int main() { return g; }").expect("analysis failed");
        let global = tree.scope(ScopeTree::GLOBAL);
        assert!(global.symbols.contains_key("g"));
        assert!(global.symbols.contains_key("main"));
        assert_eq!(global.symbols["main"].kind, SymbolKind::Function);
    }

    #[test]
    fn test_function_symbol_keeps_parameter_copy() {
        let tree = analyze("int f(int a, float b) { return a; }").expect("analysis failed");
        let symbol = tree
            .lookup_function(ScopeTree::GLOBAL, "f")
            .expect("f not found");
        assert_eq!(symbol.params.len(), 2);
        assert_eq!(symbol.params[1].type_name, "float");
    }

    #[test]
    fn test_forward_reference_between_functions() {
        assert!(analyze("int f() { return g(); } int g() { return 1; }").is_ok());
    }

    #[test]
    fn test_mutual_recursion() {
        assert!(analyze(
            "int even(int n) { return odd(n); } int odd(int n) { return even(n); }"
        )
        .is_ok());
    }

    #[test]
    fn test_global_cannot_reference_later_global() {
        let err = analyze("int a = b; int b = 1;").expect_err("expected error");
        assert_eq!(err.kind, ScopeErrorKind::UndeclaredVariableAccessed);
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_undeclared_variable() {
        let err = analyze("int main() { return missing; }").expect_err("expected error");
        assert_eq!(err.kind, ScopeErrorKind::UndeclaredVariableAccessed);
    }

    #[test]
    fn test_undefined_function() {
        let err = analyze("int main() { return nope(); }").expect_err("expected error");
        assert_eq!(err.kind, ScopeErrorKind::UndefinedFunctionCalled);
    }

    #[test]
    fn test_variable_does_not_satisfy_call() {
        let err = analyze("int main() { int f = 1; return f(); }").expect_err("expected error");
        assert_eq!(err.kind, ScopeErrorKind::UndefinedFunctionCalled);
    }

    #[test]
    fn test_function_does_not_satisfy_variable_reference() {
        let err = analyze("int f() { return 0; } int main() { return f; }")
            .expect_err("expected error");
        assert_eq!(err.kind, ScopeErrorKind::UndeclaredVariableAccessed);
    }

    #[test]
    fn test_initializer_cannot_see_its_own_name() {
        let err = analyze("int main() { int x = x; }").expect_err("expected error");
        assert_eq!(err.kind, ScopeErrorKind::UndeclaredVariableAccessed);
    }

    #[test]
    fn test_variable_redefinition_in_same_scope() {
        let err = analyze("int main() { int x = 1; int x = 2; }").expect_err("expected error");
        assert_eq!(err.kind, ScopeErrorKind::VariableRedefinition);
        assert!(err.message.contains("previously defined on line 1"));
    }

    #[test]
    fn test_shadowing_is_legal() {
        assert!(analyze("int x = 1; int main() { int x = 2; { int x = 3; } }").is_ok());
    }

    #[test]
    fn test_function_redefinition() {
        let err = analyze("int f() { return 0; } int f() { return 1; }")
            .expect_err("expected error");
        assert_eq!(err.kind, ScopeErrorKind::FunctionRedefinition);
    }

    #[test]
    fn test_duplicate_parameter_names() {
        let err = analyze("int f(int a, int a) { return a; }").expect_err("expected error");
        assert_eq!(err.kind, ScopeErrorKind::VariableRedefinition);
    }

    #[test]
    fn test_for_scope_encloses_header_and_body() {
        assert!(analyze("int main() { for (int i = 0; i < 3; i = i + 1) { int j = i; } }").is_ok());
    }

    #[test]
    fn test_for_variable_invisible_after_loop() {
        let err = analyze("int main() { for (int i = 0; i < 3;) { } return i; }")
            .expect_err("expected error");
        assert_eq!(err.kind, ScopeErrorKind::UndeclaredVariableAccessed);
    }

    #[test]
    fn test_block_variable_invisible_outside() {
        let err = analyze("int main() { { int x = 1; } return x; }").expect_err("expected error");
        assert_eq!(err.kind, ScopeErrorKind::UndeclaredVariableAccessed);
    }

    #[test]
    fn test_scope_tree_mirrors_nesting() {
        let mut lexer = Lexer::new("int f(int a) { { int b = a; } }");
        let tokens = lexer.tokenize().expect("lexing failed");
        let program = Parser::new(tokens).parse_program().expect("parse failed");
        let tree = ScopeAnalyzer::new()
            .analyze(&program)
            .expect("analysis failed");

        let function = &program.functions[0];
        let fn_scope = tree
            .child_of(ScopeTree::GLOBAL, function.id)
            .expect("function scope missing");
        let body_scope = tree
            .child_of(fn_scope, function.body.id)
            .expect("body scope missing");
        assert!(tree.scope(fn_scope).symbols.contains_key("a"));
        match &function.body.statements[0] {
            Stmt::Block(inner) => {
                let inner_scope = tree.child_of(body_scope, inner.id).expect("inner scope");
                assert!(tree.scope(inner_scope).symbols.contains_key("b"));
            },
            other => panic!("expected block, got {:?}", other),
        }
    }
}
