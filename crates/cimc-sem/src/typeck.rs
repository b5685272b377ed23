//! Type checking: annotates the AST in place and validates every rule of
//! the type system.
//!
//! The checker walks the AST and the scope tree in lock-step, re-entering
//! the scopes the analyzer created through their `NodeId` keys. Every
//! expression receives an `inferred_type`; every declaration a
//! `resolved_type`, which is also written back onto the declaring symbol
//! so later uses observe the resolved type (this is what makes `auto`
//! declarations work).

use crate::error::{TypeError, TypeErrorKind};
use crate::scope::{ScopeId, ScopeTree};
use crate::types::{is_assignable, is_integer, is_numeric, wider_type};
use cimc_par::{Block, Expr, ExprKind, ForStmt, FunctionDecl, Program, Stmt, VarDecl};
use cimc_util::NodeId;

/// Checks a scope-analyzed program, failing on the first type error.
pub struct TypeChecker<'a> {
    scopes: &'a mut ScopeTree,
    current: ScopeId,
    /// Declared return type of the function being checked.
    current_return_type: String,
    /// True inside a `while` or `for` body; save/restore on entry.
    in_loop: bool,
}

impl<'a> TypeChecker<'a> {
    pub fn new(scopes: &'a mut ScopeTree) -> Self {
        Self {
            scopes,
            current: ScopeTree::GLOBAL,
            current_return_type: String::new(),
            in_loop: false,
        }
    }

    /// Checks the whole program: globals first, then functions.
    pub fn check(mut self, program: &mut Program) -> Result<(), TypeError> {
        for global in &mut program.globals {
            self.check_var_decl(global)?;
        }
        for function in &mut program.functions {
            self.check_function(function)?;
        }
        Ok(())
    }

    /// Re-enters the scope the analyzer opened under `node`.
    fn enter_scope(&mut self, node: NodeId) {
        if let Some(child) = self.scopes.child_of(self.current, node) {
            self.current = child;
        }
    }

    fn exit_scope(&mut self) {
        if let Some(parent) = self.scopes.parent(self.current) {
            self.current = parent;
        }
    }

    fn check_function(&mut self, function: &mut FunctionDecl) -> Result<(), TypeError> {
        function.resolved_type = function.return_type.clone();
        self.current_return_type = function.return_type.clone();

        self.enter_scope(function.id);
        self.check_block(&mut function.body)?;
        self.exit_scope();

        if let Some(symbol) = self.scopes.lookup_function_mut(self.current, &function.name) {
            symbol.type_name = function.resolved_type.clone();
        }
        self.current_return_type.clear();
        Ok(())
    }

    fn check_block(&mut self, block: &mut Block) -> Result<(), TypeError> {
        self.enter_scope(block.id);
        for statement in &mut block.statements {
            self.check_stmt(statement)?;
        }
        self.exit_scope();
        Ok(())
    }

    fn check_stmt(&mut self, statement: &mut Stmt) -> Result<(), TypeError> {
        match statement {
            Stmt::Block(block) => self.check_block(block),
            Stmt::VarDecl(decl) => self.check_var_decl(decl),
            Stmt::Expr(expr_stmt) => self.check_expr(&mut expr_stmt.expr).map(|_| ()),
            Stmt::If(if_stmt) => {
                let cond_type = self.check_expr(&mut if_stmt.condition)?;
                if cond_type != "bool" {
                    return Err(TypeError::new(
                        TypeErrorKind::NonBooleanCondStmt,
                        if_stmt.line,
                        format!("if condition must be 'bool', but got '{}'", cond_type),
                    ));
                }
                self.check_stmt(&mut if_stmt.then_branch)?;
                if let Some(else_branch) = &mut if_stmt.else_branch {
                    self.check_stmt(else_branch)?;
                }
                Ok(())
            },
            Stmt::While(while_stmt) => {
                let cond_type = self.check_expr(&mut while_stmt.condition)?;
                if cond_type != "bool" {
                    return Err(TypeError::new(
                        TypeErrorKind::NonBooleanCondStmt,
                        while_stmt.line,
                        format!("while condition must be 'bool', but got '{}'", cond_type),
                    ));
                }
                let outer = self.in_loop;
                self.in_loop = true;
                self.check_stmt(&mut while_stmt.body)?;
                self.in_loop = outer;
                Ok(())
            },
            Stmt::For(for_stmt) => self.check_for(for_stmt),
            Stmt::Return(return_stmt) => {
                let value_type = match &mut return_stmt.value {
                    Some(value) => self.check_expr(value)?,
                    None => "void".to_string(),
                };
                if !is_assignable(&self.current_return_type, &value_type) {
                    return Err(TypeError::new(
                        TypeErrorKind::ErroneousReturnType,
                        return_stmt.line,
                        format!(
                            "return type '{}' does not match function's declared return type '{}'",
                            value_type, self.current_return_type
                        ),
                    ));
                }
                Ok(())
            },
            Stmt::Break { line } => {
                if !self.in_loop {
                    return Err(TypeError::new(
                        TypeErrorKind::ErroneousBreak,
                        *line,
                        "'break' statement used outside of a loop",
                    ));
                }
                Ok(())
            },
            Stmt::Continue { line } => {
                if !self.in_loop {
                    return Err(TypeError::new(
                        TypeErrorKind::ErroneousContinue,
                        *line,
                        "'continue' statement used outside of a loop",
                    ));
                }
                Ok(())
            },
        }
    }

    fn check_for(&mut self, for_stmt: &mut ForStmt) -> Result<(), TypeError> {
        self.enter_scope(for_stmt.id);
        if let Some(initializer) = &mut for_stmt.initializer {
            self.check_stmt(initializer)?;
        }
        if let Some(condition) = &mut for_stmt.condition {
            let cond_type = self.check_expr(condition)?;
            if cond_type != "bool" {
                return Err(TypeError::new(
                    TypeErrorKind::NonBooleanCondStmt,
                    for_stmt.line,
                    format!("for condition must be 'bool', but got '{}'", cond_type),
                ));
            }
        }
        if let Some(step) = &mut for_stmt.step {
            self.check_expr(step)?;
        }
        let outer = self.in_loop;
        self.in_loop = true;
        let result = self.check_stmt(&mut for_stmt.body);
        self.in_loop = outer;
        self.exit_scope();
        result
    }

    /// Resolves a declaration: an `auto` declaration takes its
    /// initializer's type; otherwise the initializer must be assignable to
    /// the declared type. The resolved type is written back onto the
    /// declaring symbol.
    fn check_var_decl(&mut self, decl: &mut VarDecl) -> Result<(), TypeError> {
        decl.resolved_type = decl.type_name.clone();

        match &mut decl.initializer {
            Some(initializer) => {
                let init_type = self.check_expr(initializer)?;
                if decl.type_name == "auto" {
                    decl.resolved_type = init_type;
                } else if !is_assignable(&decl.resolved_type, &init_type) {
                    return Err(TypeError::new(
                        TypeErrorKind::ErroneousVarDecl,
                        decl.line,
                        format!(
                            "initializer type '{}' does not match variable type '{}'",
                            init_type, decl.type_name
                        ),
                    ));
                }
            },
            None => {
                if decl.type_name == "auto" {
                    return Err(TypeError::new(
                        TypeErrorKind::ErroneousVarDecl,
                        decl.line,
                        format!("cannot infer type for '{}' without an initializer", decl.name),
                    ));
                }
            },
        }

        if let Some(symbol) = self.scopes.lookup_variable_mut(self.current, &decl.name) {
            symbol.type_name = decl.resolved_type.clone();
        }
        Ok(())
    }

    /// Infers and records the type of an expression.
    fn check_expr(&mut self, expr: &mut Expr) -> Result<String, TypeError> {
        let line = expr.line;
        let inferred = match &mut expr.kind {
            ExprKind::NumberLiteral(text) => {
                if text.contains('.') {
                    "double".to_string()
                } else {
                    "int".to_string()
                }
            },
            ExprKind::StringLiteral(_) => "string".to_string(),
            ExprKind::CharLiteral(_) => "char".to_string(),
            ExprKind::BoolLiteral(_) => "bool".to_string(),
            ExprKind::Identifier(name) => self.variable_type(name, line)?,
            ExprKind::Binary { op, left, right } => {
                let op = op.clone();
                let left_type = self.check_expr(left)?;
                let right_type = self.check_expr(right)?;
                self.binary_result(&op, &left_type, &right_type, line)?
            },
            ExprKind::Unary { op, operand } => {
                let op = op.clone();
                let operand_type = self.check_expr(operand)?;
                self.unary_result(&op, &operand_type, line)?
            },
            ExprKind::Assignment { target, value } => {
                let target = target.clone();
                let target_type = self.variable_type(&target, line)?;
                let value_type = self.check_expr(value)?;
                if !is_assignable(&target_type, &value_type) {
                    return Err(TypeError::new(
                        TypeErrorKind::InvalidAssignment,
                        line,
                        format!(
                            "cannot assign type '{}' to variable '{}' of type '{}'",
                            value_type, target, target_type
                        ),
                    ));
                }
                target_type
            },
            ExprKind::Call { callee, arguments } => {
                let callee = callee.clone();
                let symbol = match self.scopes.lookup_function(self.current, &callee) {
                    Some(symbol) => symbol.clone(),
                    None => {
                        return Err(TypeError::new(
                            TypeErrorKind::ExpressionTypeMismatch,
                            line,
                            format!("unresolved function '{}'", callee),
                        ))
                    },
                };
                if arguments.len() != symbol.params.len() {
                    return Err(TypeError::new(
                        TypeErrorKind::FnCallParamCount,
                        line,
                        format!(
                            "function '{}' expects {} arguments, but got {}",
                            callee,
                            symbol.params.len(),
                            arguments.len()
                        ),
                    ));
                }
                for (index, argument) in arguments.iter_mut().enumerate() {
                    let argument_type = self.check_expr(argument)?;
                    let param_type = &symbol.params[index].resolved_type;
                    if !is_assignable(param_type, &argument_type) {
                        return Err(TypeError::new(
                            TypeErrorKind::FnCallParamType,
                            line,
                            format!(
                                "argument {} for function '{}' has wrong type: expected '{}', but got '{}'",
                                index + 1,
                                callee,
                                param_type,
                                argument_type
                            ),
                        ));
                    }
                }
                symbol.type_name
            },
        };

        expr.inferred_type = inferred.clone();
        Ok(inferred)
    }

    /// Type of a variable reference: the declaring symbol's (possibly
    /// resolved) type. The scope analyzer has already bound every name, so
    /// a miss here means the two passes disagree.
    fn variable_type(&self, name: &str, line: u32) -> Result<String, TypeError> {
        match self.scopes.lookup_variable(self.current, name) {
            Some(symbol) => Ok(symbol.type_name.clone()),
            None => Err(TypeError::new(
                TypeErrorKind::ExpressionTypeMismatch,
                line,
                format!("unresolved name '{}'", name),
            )),
        }
    }

    /// Result type of a binary operator, dispatching on the lexeme.
    ///
    /// The bare `&`/`|` spellings are integer operators like `%` and the
    /// shifts; only the `&&`/`||` spellings carry the bool-logical rule.
    fn binary_result(
        &self,
        op: &str,
        left: &str,
        right: &str,
        line: u32,
    ) -> Result<String, TypeError> {
        match op {
            "+" | "-" | "*" | "/" => {
                if !is_numeric(left) || !is_numeric(right) {
                    return Err(TypeError::new(
                        TypeErrorKind::AttemptedOpOnNonNumeric,
                        line,
                        format!(
                            "binary operator '{}' requires numeric operands, but got '{}' and '{}'",
                            op, left, right
                        ),
                    ));
                }
                Ok(wider_type(left, right).to_string())
            },
            "%" | "<<" | ">>" | "&" | "|" | "^" => {
                if !is_integer(left) || !is_integer(right) {
                    return Err(TypeError::new(
                        TypeErrorKind::AttemptedOpOnNonInt,
                        line,
                        format!(
                            "binary operator '{}' requires integer operands, but got '{}' and '{}'",
                            op, left, right
                        ),
                    ));
                }
                Ok("int".to_string())
            },
            "&&" | "||" => {
                if left != "bool" || right != "bool" {
                    return Err(TypeError::new(
                        TypeErrorKind::ExpressionTypeMismatch,
                        line,
                        format!(
                            "logical operator '{}' requires boolean operands, but got '{}' and '{}'",
                            op, left, right
                        ),
                    ));
                }
                Ok("bool".to_string())
            },
            "==" | "!=" | "<" | ">" | "<=" | ">=" => {
                if left != right && !(is_numeric(left) && is_numeric(right)) {
                    return Err(TypeError::new(
                        TypeErrorKind::ExpressionTypeMismatch,
                        line,
                        format!(
                            "comparison operator '{}' cannot compare incompatible types '{}' and '{}'",
                            op, left, right
                        ),
                    ));
                }
                Ok("bool".to_string())
            },
            _ => Ok("void".to_string()),
        }
    }

    /// Result type of a prefix unary operator. `++` and `--` fall through
    /// to `void` without an operand check.
    fn unary_result(&self, op: &str, operand: &str, line: u32) -> Result<String, TypeError> {
        match op {
            "!" => {
                if operand != "bool" {
                    return Err(TypeError::new(
                        TypeErrorKind::ExpressionTypeMismatch,
                        line,
                        format!(
                            "logical NOT '!' requires a boolean operand, but got '{}'",
                            operand
                        ),
                    ));
                }
                Ok("bool".to_string())
            },
            "-" => {
                if !is_numeric(operand) {
                    return Err(TypeError::new(
                        TypeErrorKind::AttemptedOpOnNonNumeric,
                        line,
                        format!(
                            "unary minus '-' requires a numeric operand, but got '{}'",
                            operand
                        ),
                    ));
                }
                Ok(operand.to_string())
            },
            _ => Ok("void".to_string()),
        }
    }
}
