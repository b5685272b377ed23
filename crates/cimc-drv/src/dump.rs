//! AST dump: the stable, human-readable tree printed on success.
//!
//! One node per line, two-space indentation per depth level. Each node
//! line is the node kind, its essential attributes in parentheses, and the
//! bracketed source line, e.g. `Identifier(x, type: int) [line: 7]`.
//! Grouping labels (`Globals:`, `Condition:`, ...) introduce child lists.

use cimc_par::{Block, Expr, ExprKind, ForStmt, FunctionDecl, Program, Stmt, VarDecl};
use std::fmt::Write;

/// Renders the annotated AST.
pub fn dump_program(program: &Program) -> String {
    let mut printer = Printer::default();
    printer.text(0, "Program");
    if !program.globals.is_empty() {
        printer.text(1, "Globals:");
        for global in &program.globals {
            printer.var_decl(2, global);
        }
    }
    if !program.functions.is_empty() {
        printer.text(1, "Functions:");
        for function in &program.functions {
            printer.function(2, function);
        }
    }
    printer.out
}

#[derive(Default)]
struct Printer {
    out: String,
}

impl Printer {
    /// Writes a label or attribute-free line at the given depth.
    fn text(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Writes a node line: kind, attributes, bracketed source line.
    fn node(&mut self, depth: usize, rendered: &str, line: u32) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
        let _ = writeln!(self.out, "{} [line: {}]", rendered, line);
    }

    fn function(&mut self, depth: usize, function: &FunctionDecl) {
        self.node(
            depth,
            &format!(
                "FunctionDecl({}, returns: {})",
                function.name, function.resolved_type
            ),
            function.line,
        );
        if !function.params.is_empty() {
            self.text(depth + 1, "Parameters:");
            for param in &function.params {
                self.node(
                    depth + 2,
                    &format!("Param({}, type: {})", param.name, param.resolved_type),
                    param.line,
                );
            }
        }
        self.block(depth + 1, &function.body);
    }

    fn block(&mut self, depth: usize, block: &Block) {
        self.node(depth, "Block", block.line);
        for statement in &block.statements {
            self.stmt(depth + 1, statement);
        }
    }

    fn var_decl(&mut self, depth: usize, decl: &VarDecl) {
        self.node(
            depth,
            &format!("VarDecl({}, type: {})", decl.name, decl.resolved_type),
            decl.line,
        );
        if let Some(initializer) = &decl.initializer {
            self.text(depth + 1, "Initializer:");
            self.expr(depth + 2, initializer);
        }
    }

    fn stmt(&mut self, depth: usize, statement: &Stmt) {
        match statement {
            Stmt::Block(block) => self.block(depth, block),
            Stmt::VarDecl(decl) => self.var_decl(depth, decl),
            Stmt::Expr(expr_stmt) => {
                self.node(depth, "ExpressionStmt", expr_stmt.line);
                self.expr(depth + 1, &expr_stmt.expr);
            },
            Stmt::If(if_stmt) => {
                self.node(depth, "If", if_stmt.line);
                self.text(depth + 1, "Condition:");
                self.expr(depth + 2, &if_stmt.condition);
                self.text(depth + 1, "Then:");
                self.stmt(depth + 2, &if_stmt.then_branch);
                if let Some(else_branch) = &if_stmt.else_branch {
                    self.text(depth + 1, "Else:");
                    self.stmt(depth + 2, else_branch);
                }
            },
            Stmt::While(while_stmt) => {
                self.node(depth, "While", while_stmt.line);
                self.text(depth + 1, "Condition:");
                self.expr(depth + 2, &while_stmt.condition);
                self.text(depth + 1, "Body:");
                self.stmt(depth + 2, &while_stmt.body);
            },
            Stmt::For(for_stmt) => self.for_stmt(depth, for_stmt),
            Stmt::Return(return_stmt) => {
                self.node(depth, "Return", return_stmt.line);
                if let Some(value) = &return_stmt.value {
                    self.expr(depth + 1, value);
                }
            },
            Stmt::Break { line } => self.node(depth, "Break", *line),
            Stmt::Continue { line } => self.node(depth, "Continue", *line),
        }
    }

    fn for_stmt(&mut self, depth: usize, for_stmt: &ForStmt) {
        self.node(depth, "For", for_stmt.line);
        if let Some(initializer) = &for_stmt.initializer {
            self.text(depth + 1, "Initializer:");
            self.stmt(depth + 2, initializer);
        }
        if let Some(condition) = &for_stmt.condition {
            self.text(depth + 1, "Condition:");
            self.expr(depth + 2, condition);
        }
        if let Some(step) = &for_stmt.step {
            self.text(depth + 1, "Increment:");
            self.expr(depth + 2, step);
        }
        self.text(depth + 1, "Body:");
        self.stmt(depth + 2, &for_stmt.body);
    }

    fn expr(&mut self, depth: usize, expr: &Expr) {
        let ty = &expr.inferred_type;
        match &expr.kind {
            ExprKind::NumberLiteral(text) => {
                self.node(depth, &format!("NumberLiteral({}, type: {})", text, ty), expr.line);
            },
            ExprKind::StringLiteral(text) => {
                self.node(
                    depth,
                    &format!("StringLiteral(\"{}\", type: {})", text, ty),
                    expr.line,
                );
            },
            ExprKind::CharLiteral(text) => {
                self.node(
                    depth,
                    &format!("CharLiteral('{}', type: {})", text, ty),
                    expr.line,
                );
            },
            ExprKind::BoolLiteral(value) => {
                self.node(depth, &format!("BoolLiteral({}, type: {})", value, ty), expr.line);
            },
            ExprKind::Identifier(name) => {
                self.node(depth, &format!("Identifier({}, type: {})", name, ty), expr.line);
            },
            ExprKind::Binary { op, left, right } => {
                self.node(depth, &format!("BinaryOp({}, type: {})", op, ty), expr.line);
                self.expr(depth + 1, left);
                self.expr(depth + 1, right);
            },
            ExprKind::Unary { op, operand } => {
                self.node(depth, &format!("UnaryOp({}, type: {})", op, ty), expr.line);
                self.expr(depth + 1, operand);
            },
            ExprKind::Assignment { target, value } => {
                self.node(depth, &format!("Assignment({}, type: {})", target, ty), expr.line);
                self.expr(depth + 1, value);
            },
            ExprKind::Call { callee, arguments } => {
                self.node(
                    depth,
                    &format!("FunctionCall({}, type: {})", callee, ty),
                    expr.line,
                );
                if !arguments.is_empty() {
                    self.text(depth + 1, "Arguments:");
                    for argument in arguments {
                        self.expr(depth + 2, argument);
                    }
                }
            },
        }
    }
}
