//! Pipeline integration tests against the library API.

use cimc_drv::{compile, CompileError};
use cimc_par::{ExprKind, Stmt};
use cimc_sem::{ScopeErrorKind, TypeErrorKind};

fn type_error(source: &str) -> cimc_sem::TypeError {
    match compile(source) {
        Err(CompileError::Type(err)) => err,
        Err(other) => panic!("expected type error, got {}: {}", other.category(), other),
        Ok(_) => panic!("expected type error, compilation succeeded"),
    }
}

#[test]
fn test_global_with_binary_initializer() {
    let compilation = compile("int x = 1 + 2;").expect("compile failed");
    assert_eq!(compilation.program.globals.len(), 1);
    let init = compilation.program.globals[0]
        .initializer
        .as_ref()
        .expect("no initializer");
    assert!(matches!(init.kind, ExprKind::Binary { .. }));
    assert_eq!(init.inferred_type, "int");
}

#[test]
fn test_two_functions_with_call() {
    let compilation =
        compile("int f(int a, int b) { return a + b; } int main() { return f(1, 2); }")
            .expect("compile failed");
    assert_eq!(compilation.program.functions.len(), 2);
    let main = &compilation.program.functions[1];
    match &main.body.statements[0] {
        Stmt::Return(ret) => {
            let value = ret.value.as_ref().expect("no return value");
            assert!(matches!(value.kind, ExprKind::Call { .. }));
            assert_eq!(value.inferred_type, "int");
        },
        other => panic!("expected return, got {:?}", other),
    }
}

#[test]
fn test_integer_condition_rejected() {
    let err = type_error("int main() { if (1) { } }");
    assert_eq!(err.kind, TypeErrorKind::NonBooleanCondStmt);
    assert_eq!(err.line, 1);
}

#[test]
fn test_bool_result_not_assignable_to_int() {
    let err = type_error("bool ok() { return true; } int main() { int x = ok(); }");
    assert_eq!(err.kind, TypeErrorKind::ErroneousVarDecl);
    assert_eq!(err.line, 1);
}

#[test]
fn test_third_argument_type_mismatch() {
    let err = type_error(
        "int f(int a, float b, bool c) { return 0; } int main() { f(1, 2.0, \"s\"); return 0; }",
    );
    assert_eq!(err.kind, TypeErrorKind::FnCallParamType);
    assert!(err.message.contains("argument 3"));
}

#[test]
fn test_break_at_function_scope() {
    let err = type_error("int main() { break; }");
    assert_eq!(err.kind, TypeErrorKind::ErroneousBreak);
    assert_eq!(err.line, 1);
}

#[test]
fn test_error_lines_point_at_offending_statement() {
    let source = "int main() {\n    int x = 0;\n    if (x) { }\n    return x;\n}\n";
    let err = type_error(source);
    assert_eq!(err.kind, TypeErrorKind::NonBooleanCondStmt);
    assert_eq!(err.line, 3);
}

#[test]
fn test_lex_error_category() {
    match compile("int main() { string s = \"oops; }") {
        Err(CompileError::Lex(err)) => {
            assert_eq!(err.line(), 1);
            assert_eq!(err.column(), 25);
        },
        other => panic!(
            "expected lex error, got {:?}",
            other.map(|_| "success").map_err(|e| e.category())
        ),
    }
}

#[test]
fn test_parse_error_category() {
    assert!(matches!(
        compile("int main() { return 1 }"),
        Err(CompileError::Parse(_))
    ));
}

#[test]
fn test_scope_error_category() {
    match compile("int main() { return missing; }") {
        Err(CompileError::Scope(err)) => {
            assert_eq!(err.kind, ScopeErrorKind::UndeclaredVariableAccessed)
        },
        other => panic!(
            "expected scope error, got {:?}",
            other.map(|_| "success").map_err(|e| e.category())
        ),
    }
}

#[test]
fn test_fibonacci_program_compiles() {
    let source = [
        "int fib(int n) {",
        "    if (n < 2) { return n; }",
        "    return fib(n - 1) + fib(n - 2);",
        "}",
        "int main() {",
        "    int total = 0;",
        "    for (int i = 0; i < 10; i = i + 1) {",
        "        total = total + fib(i);",
        "    }",
        "    return total;",
        "}",
    ]
    .join("\n");
    let compilation = compile(&source).expect("compile failed");
    assert_eq!(compilation.program.functions.len(), 2);
    assert!(compilation.warnings.is_empty());
}

#[test]
fn test_scope_tree_survives_compilation() {
    let compilation = compile("int g = 1; int main() { return g; }").expect("compile failed");
    let symbol = compilation
        .scopes
        .lookup_function(cimc_sem::ScopeTree::GLOBAL, "main")
        .expect("main not found");
    assert_eq!(symbol.type_name, "int");
}
