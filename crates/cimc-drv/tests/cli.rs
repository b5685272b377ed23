//! CLI e2e tests: exit codes, stdout dump, stderr diagnostics.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `source` to a temp file and returns a command invoking cimc on it.
fn cimc_on(source: &str) -> (Command, NamedTempFile) {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(source.as_bytes())
        .expect("failed to write source");
    let mut cmd = Command::cargo_bin("cimc").expect("cimc binary not built");
    cmd.arg(file.path());
    (cmd, file)
}

#[test]
fn test_cli_success_dumps_ast() {
    let (mut cmd, _file) = cimc_on("int x = 1 + 2;");
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Program"))
        .stdout(predicate::str::contains("VarDecl(x, type: int) [line: 1]"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_cli_valid_two_function_program() {
    let (mut cmd, _file) =
        cimc_on("int f(int a, int b) { return a + b; } int main() { return f(1, 2); }");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("FunctionDecl(f, returns: int)"))
        .stdout(predicate::str::contains("FunctionCall(f, type: int)"));
}

#[test]
fn test_cli_type_error_goes_to_stderr() {
    let (mut cmd, _file) = cimc_on("int main() { if (1) { } }");
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("type error:"))
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_cli_scope_error_category() {
    let (mut cmd, _file) = cimc_on("int main() { return missing; }");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("scope error:"))
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn test_cli_parse_error_category() {
    let (mut cmd, _file) = cimc_on("int main() { return 1 }");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("parse error:"));
}

#[test]
fn test_cli_lex_error_category_with_column() {
    let (mut cmd, _file) = cimc_on("int main() { char c = 'ab'; }");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("lex error:"))
        .stderr(predicate::str::contains("column"));
}

#[test]
fn test_cli_block_comment_warning_does_not_fail() {
    let (mut cmd, _file) = cimc_on("int x = 1; /* left open");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("VarDecl(x, type: int)"))
        .stderr(predicate::str::contains("warning: unterminated block comment"));
}

#[test]
fn test_cli_missing_argument() {
    let mut cmd = Command::cargo_bin("cimc").expect("cimc binary not built");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("usage: cimc <source-file>"));
}

#[test]
fn test_cli_extra_argument() {
    let mut cmd = Command::cargo_bin("cimc").expect("cimc binary not built");
    cmd.arg("a.c").arg("b.c");
    cmd.assert().failure().code(1);
}

#[test]
fn test_cli_unreadable_file() {
    let mut cmd = Command::cargo_bin("cimc").expect("cimc binary not built");
    cmd.arg("definitely/not/a/real/file.c");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("could not read file"));
}
